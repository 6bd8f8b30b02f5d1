//! # xorshift_rng: Seedable xorshift1024* Generator
//!
//! A fast, statistically uniform, **non-cryptographic** pseudo-random number
//! generator with a 1024-bit state, and a range-sampling layer that maps its
//! 64-bit output onto any primitive integral or floating-point type.
//!
//! ## Components
//!
//! - [`generator`]: [`Xorshift1024`], state snapshots, the raw word iterator
//!   and `rand` ecosystem integration
//! - [`sample`]: the sealed [`SampleUniform`] trait and its integral and
//!   floating-point range mappings
//! - [`seed`]: self-seeding from an entropy source with 16/32/64-bit draws
//! - [`config`]: validated [`GeneratorConfig`] builder
//! - [`error`]: [`RngError`]
//!
//! ## Usage Example
//!
//! ```rust
//! use xorshift_rng::Xorshift1024;
//!
//! // Deterministic generator from an explicit seed
//! let mut rng = Xorshift1024::new([0x2545_f491_4f6c_dd1d; 16]);
//!
//! // Half-open ranges: the upper bound is never produced
//! let index: usize = rng.get_range(0, 10);
//! assert!(index < 10);
//!
//! let x: f32 = rng.get_range(-1.0, 1.0);
//! assert!((-1.0..1.0).contains(&x));
//!
//! // Checkpoint and resume
//! let snapshot = rng.snapshot();
//! let mut resumed = Xorshift1024::from_snapshot(snapshot).unwrap();
//! assert_eq!(rng.next_u64(), resumed.next_u64());
//! ```
//!
//! ## Thread Safety
//!
//! There is no internal synchronisation and no global generator. Every draw
//! takes `&mut self`; use one generator per thread.
//!
//! ## Logging
//!
//! The crate emits `tracing` events (self-seeding at `debug`, re-seeding and
//! snapshot restore at `trace`, all-zero seeds at `warn`) and never installs
//! a subscriber itself.

pub mod config;
pub mod error;
pub mod generator;
pub mod sample;
pub mod seed;

pub use config::{GeneratorConfig, GeneratorConfigBuilder, SeedSource};
pub use error::RngError;
pub use generator::{GeneratorSnapshot, Seed1024, Words, Xorshift1024, STATE_WORDS};
pub use sample::SampleUniform;

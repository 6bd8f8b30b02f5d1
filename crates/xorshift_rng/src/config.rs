//! Generator configuration.
//!
//! This module provides [`GeneratorConfig`] and its builder, which choose
//! between explicit seeding and self-seeding and validate the choice before
//! any generator is created.

use crate::error::RngError;
use crate::generator::{Xorshift1024, STATE_WORDS};
use crate::seed::{EntropyWidth, OsEntropy};

/// How a generator obtains its initial state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedSource {
    /// Explicit 16-word seed; deterministic.
    Explicit([u64; STATE_WORDS]),
    /// Operating-system entropy drawn at the given width.
    Entropy(EntropyWidth),
}

impl Default for SeedSource {
    fn default() -> Self {
        Self::Entropy(EntropyWidth::NATIVE)
    }
}

/// Validated generator configuration.
///
/// Use [`GeneratorConfig::builder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use xorshift_rng::{GeneratorConfig, SeedSource};
///
/// let config = GeneratorConfig::builder()
///     .seed([42; 16])
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.seed_source(), SeedSource::Explicit([42; 16]));
///
/// let mut rng = config.create_generator().unwrap();
/// let _value: u32 = rng.get_range(0, 100);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    seed_source: SeedSource,
}

impl GeneratorConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }

    /// Returns where the initial state comes from.
    #[inline]
    pub fn seed_source(&self) -> SeedSource {
        self.seed_source
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::ZeroSeed`] if an explicit seed is all zeros.
    pub fn validate(&self) -> Result<(), RngError> {
        match self.seed_source {
            SeedSource::Explicit(seed) if seed.iter().all(|&w| w == 0) => {
                Err(RngError::ZeroSeed)
            }
            _ => Ok(()),
        }
    }

    /// Creates a generator according to this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::Entropy`] if self-seeding fails.
    pub fn create_generator(&self) -> Result<Xorshift1024, RngError> {
        match self.seed_source {
            SeedSource::Explicit(seed) => Ok(Xorshift1024::new(seed)),
            SeedSource::Entropy(width) => {
                Xorshift1024::from_entropy_source(&mut OsEntropy::with_width(width))
            }
        }
    }
}

/// Builder for [`GeneratorConfig`].
///
/// An explicit seed takes precedence over an entropy width; with neither
/// set the generator self-seeds at the native width.
#[derive(Clone, Debug, Default)]
pub struct GeneratorConfigBuilder {
    seed: Option<[u64; STATE_WORDS]>,
    entropy_width: Option<EntropyWidth>,
}

impl GeneratorConfigBuilder {
    /// Sets an explicit seed.
    #[inline]
    pub fn seed(mut self, seed: [u64; STATE_WORDS]) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the draw width used when self-seeding.
    #[inline]
    pub fn entropy_width(mut self, width: EntropyWidth) -> Self {
        self.entropy_width = Some(width);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::ZeroSeed`] if the explicit seed is all zeros.
    pub fn build(self) -> Result<GeneratorConfig, RngError> {
        let seed_source = match self.seed {
            Some(seed) => SeedSource::Explicit(seed),
            None => SeedSource::Entropy(self.entropy_width.unwrap_or(EntropyWidth::NATIVE)),
        };

        let config = GeneratorConfig { seed_source };
        config.validate()?;
        Ok(config)
    }
}

use rand::rngs::SmallRng;

use crate::{
    interfaces::{
        entropy::{EntropySource, RngEntropy},
        seed::SeedSource,
    },
    GeneratorConfig, GeneratorError,
};

/// Produces random (version 4) UUIDs from an owned, seeded entropy source.
///
/// The source is seeded exactly once, when the generator is built. Every
/// call to [`UuidGenerator::create`] draws 16 fresh bytes into the
/// generator's buffer and returns an independent [`UuidText`](crate::UuidText).
pub struct UuidGenerator<E: EntropySource = RngEntropy<SmallRng>> {
    pub(crate) entropy: E,
    pub(crate) bits: [u8; 16],
    pub(crate) generated: u64,
    pub(crate) config: GeneratorConfig,
}

impl UuidGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        log::debug!("uuid generator seeded with {}", config.seed);
        Self::from_parts(RngEntropy::seeded(config.seed), config)
    }

    /// Samples `source` once and seeds from it.
    pub fn from_seed_source<S: SeedSource + ?Sized>(
        source: &mut S,
        mut config: GeneratorConfig,
    ) -> Result<Self, GeneratorError> {
        match source.read_seed() {
            Some(seed) => config.seed = seed,
            None if config.allow_fallback_seed => {
                log::warn!("no seed sample, falling back to configured seed");
            }
            None => return Err(GeneratorError::SeedUnavailable),
        }
        Ok(Self::new(config))
    }

    #[cfg(feature = "os_rng")]
    pub fn from_os_rng() -> Result<Self, GeneratorError> {
        Self::from_seed_source(&mut crate::OsSeed, GeneratorConfig::default())
    }
}

impl<E: EntropySource> UuidGenerator<E> {
    pub fn with_entropy(mut entropy: E, config: GeneratorConfig) -> Self {
        entropy.seed(config.seed);
        Self::from_parts(entropy, config)
    }

    fn from_parts(entropy: E, config: GeneratorConfig) -> Self {
        Self {
            entropy,
            bits: [0u8; 16],
            generated: 0,
            config,
        }
    }

    pub fn reseed(&mut self, seed: u64) {
        log::debug!("uuid generator reseeded with {}", seed);
        self.entropy.seed(seed);
        self.config.seed = seed;
        self.generated = 0;
    }

    /// Identifiers produced since construction or the last reseed.
    pub fn generated(&self) -> u64 {
        self.generated
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn entropy(&self) -> &E {
        &self.entropy
    }

    pub fn into_entropy(self) -> E {
        self.entropy
    }
}

use crate::GeneratorError;

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Seed for the entropy source. When the generator is built from a
    /// [`SeedSource`](crate::SeedSource) this is overwritten with the sampled
    /// value, so a run can be replayed from its config.
    #[serde(default)]
    pub seed: u64,
    /// Fall back to `seed` when the seed source yields nothing.
    #[serde(default)]
    pub allow_fallback_seed: bool,
}

impl GeneratorConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, GeneratorError> {
        serde_json::from_str(json).map_err(|e| {
            log::warn!("invalid generator config: {}", e);
            GeneratorError::InvalidConfig
        })
    }
}

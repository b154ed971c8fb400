use crate::interfaces::entropy::EntropyUnavailable;

#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeneratorError {
    /// The entropy source could not produce bytes for this call.
    EntropyUnavailable,
    /// The seed source gave no sample and fallback seeding is disabled.
    SeedUnavailable,
    InvalidConfig,
}

impl core::fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            GeneratorError::EntropyUnavailable => "entropy source unavailable",
            GeneratorError::SeedUnavailable => "seed source gave no sample",
            GeneratorError::InvalidConfig => "invalid generator config",
        };
        write!(f, "{s}")
    }
}

impl core::error::Error for GeneratorError {}

impl From<EntropyUnavailable> for GeneratorError {
    fn from(_: EntropyUnavailable) -> Self {
        GeneratorError::EntropyUnavailable
    }
}

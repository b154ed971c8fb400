pub(crate) mod config;
pub(crate) mod core;
pub(crate) mod rng;
#[cfg(feature = "std")]
pub(crate) mod shared;

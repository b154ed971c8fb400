#![no_std]

extern crate alloc;
#[cfg(any(test, feature = "std"))]
extern crate std;

mod error;
mod generator;
mod interfaces;

pub use {
    error::GeneratorError,
    generator::{config::GeneratorConfig, core::UuidGenerator},
    interfaces::{
        entropy::{EntropySource, EntropyUnavailable, RngEntropy},
        seed::SeedSource,
    },
    ruuid_core::{ParseError, Uuid, UuidText, Variant},
};

#[cfg(feature = "std")]
pub use generator::shared::SharedGenerator;

#[cfg(feature = "os_rng")]
pub use interfaces::seed::OsSeed;

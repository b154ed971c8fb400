#![no_std]

#[cfg(test)]
extern crate std;

pub mod format;
mod uuid;

pub use {
    format::{error::ParseError, text::UuidText},
    uuid::{Uuid, Variant},
};

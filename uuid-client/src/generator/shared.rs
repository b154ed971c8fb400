use alloc::sync::Arc;
use std::sync::{Mutex, MutexGuard, PoisonError};

use rand::rngs::SmallRng;
use ruuid_core::{Uuid, UuidText};

use crate::{
    interfaces::entropy::{EntropySource, RngEntropy},
    GeneratorError, UuidGenerator,
};

/// A [`UuidGenerator`] that can be cloned across threads. Calls are
/// serialized on an internal mutex.
pub struct SharedGenerator<E: EntropySource = RngEntropy<SmallRng>> {
    inner: Arc<Mutex<UuidGenerator<E>>>,
}

impl<E: EntropySource> Clone for SharedGenerator<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E: EntropySource> SharedGenerator<E> {
    pub fn new(generator: UuidGenerator<E>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(generator)),
        }
    }

    pub fn create(&self) -> Result<UuidText, GeneratorError> {
        self.lock().create()
    }

    pub fn create_uuid(&self) -> Result<Uuid, GeneratorError> {
        self.lock().create_uuid()
    }

    pub fn reseed(&self, seed: u64) {
        self.lock().reseed(seed);
    }

    pub fn generated(&self) -> u64 {
        self.lock().generated()
    }

    // a panic mid-call leaves at worst a half-filled byte buffer, which the
    // next call overwrites
    fn lock(&self) -> MutexGuard<'_, UuidGenerator<E>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E: EntropySource> From<UuidGenerator<E>> for SharedGenerator<E> {
    fn from(generator: UuidGenerator<E>) -> Self {
        Self::new(generator)
    }
}

use ruuid_core::{Uuid, UuidText};

use crate::{interfaces::entropy::EntropySource, GeneratorError, UuidGenerator};

impl<E: EntropySource> UuidGenerator<E> {
    pub fn create_uuid(&mut self) -> Result<Uuid, GeneratorError> {
        self.entropy.fill_bytes(&mut self.bits)?;
        self.generated += 1;
        Ok(Uuid::from_random_bytes(self.bits))
    }

    /// Returns a new `xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx` string, where `y`
    /// is one of `8`, `9`, `a`, `b`.
    pub fn create(&mut self) -> Result<UuidText, GeneratorError> {
        let text = self.create_uuid()?.to_text();
        log::trace!("uuid #{}: {}", self.generated, text);
        Ok(text)
    }
}

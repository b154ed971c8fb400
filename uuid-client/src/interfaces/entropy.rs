use rand::{SeedableRng, TryRngCore};

/// The entropy source could not be read.
#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntropyUnavailable;

impl core::fmt::Display for EntropyUnavailable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "entropy source unavailable")
    }
}

impl core::error::Error for EntropyUnavailable {}

/// Source of the random bytes behind each generated UUID.
///
/// A generator calls [`EntropySource::seed`] once when it is built and again
/// only on an explicit reseed. Implement this for hardware RNG peripherals or
/// deterministic stubs; [`RngEntropy`] covers any `rand` generator.
pub trait EntropySource {
    fn seed(&mut self, seed: u64);
    fn next_byte(&mut self) -> Result<u8, EntropyUnavailable>;
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<(), EntropyUnavailable> {
        for b in buf.iter_mut() {
            *b = self.next_byte()?;
        }
        Ok(())
    }
}

/// Adapts a seedable `rand` RNG to [`EntropySource`].
#[derive(Clone, Debug)]
pub struct RngEntropy<R> {
    rng: R,
}

impl<R: SeedableRng> RngEntropy<R> {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: R::seed_from_u64(seed),
        }
    }
}

impl<R> RngEntropy<R> {
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: TryRngCore + SeedableRng> EntropySource for RngEntropy<R> {
    fn seed(&mut self, seed: u64) {
        self.rng = R::seed_from_u64(seed);
    }

    fn next_byte(&mut self) -> Result<u8, EntropyUnavailable> {
        let mut b = [0u8; 1];
        self.fill_bytes(&mut b)?;
        Ok(b[0])
    }

    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<(), EntropyUnavailable> {
        self.rng.try_fill_bytes(buf).map_err(|e| {
            log::warn!("rng failed to fill {} bytes: {}", buf.len(), e);
            EntropyUnavailable
        })
    }
}

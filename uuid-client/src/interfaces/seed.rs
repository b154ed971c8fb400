/// One-shot seed sample, taken when a generator is built.
///
/// On a microcontroller this is typically a read of a floating analog pin:
///
/// ```ignore
/// let generator = UuidGenerator::from_seed_source(&mut || Some(adc.read(pin) as u64), config)?;
/// ```
pub trait SeedSource {
    fn read_seed(&mut self) -> Option<u64>;
}

impl<F: FnMut() -> Option<u64>> SeedSource for F {
    fn read_seed(&mut self) -> Option<u64> {
        self()
    }
}

/// Seeds from the operating system RNG.
#[cfg(feature = "os_rng")]
#[derive(Clone, Copy, Debug, Default)]
pub struct OsSeed;

#[cfg(feature = "os_rng")]
impl SeedSource for OsSeed {
    fn read_seed(&mut self) -> Option<u64> {
        use rand::TryRngCore;

        rand::rngs::OsRng
            .try_next_u64()
            .map_err(|e| log::warn!("os rng unavailable: {}", e))
            .ok()
    }
}

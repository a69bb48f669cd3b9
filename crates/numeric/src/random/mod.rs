// Random number generation.
//
// Production sampling goes through `rand::rng()` directly. `DebugRng` is a
// seeded `StdRng` for reproducible tests and benches.

use rand::{rngs::StdRng, RngCore, SeedableRng};

/// Deterministic RNG for testing, seeded from a u64.
///
/// Implements `RngCore`, so it can be passed anywhere an `Rng` is expected.
pub struct DebugRng {
    inner: StdRng,
}

impl DebugRng {
    pub fn new(seed: u64) -> Self {
        Self { inner: StdRng::seed_from_u64(seed) }
    }
}

impl RngCore for DebugRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.inner.fill_bytes(dst)
    }
}

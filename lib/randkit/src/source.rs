use rand::rngs::{OsRng, SmallRng};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::error::{Error, Result};

/// The cryptographically secure source: a ChaCha20 stream seeded from
/// the operating system entropy pool. A fresh instance is created per
/// call, so the library holds no shared RNG state.
pub fn crypto_rng() -> Result<ChaCha20Rng> {
    ChaCha20Rng::from_rng(OsRng).map_err(Error::EntropyUnavailable)
}

/// The general-purpose source. Fast and NOT cryptographically secure;
/// never use its output for any security-sensitive decision.
pub fn fast_rng() -> SmallRng {
    SmallRng::from_entropy()
}

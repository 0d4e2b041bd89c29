use rand::{CryptoRng, Rng};

use crate::error::{Error, Result};
use crate::source;

/// Generate a uniform integer in the inclusive range `[min, max]` from
/// the secure source. `min` may equal `max`, in which case that value is
/// returned; `min > max` is an error.
///
/// `gen_range` rejects out-of-range draws instead of folding them with a
/// modulo, so no value in the range is favored.
pub fn int(min: i64, max: i64) -> Result<i64> {
    let mut rng = source::crypto_rng()?;
    int_with(&mut rng, min, max)
}

/// Same as [`int`], drawing from a caller-supplied secure source.
pub fn int_with<R: Rng + CryptoRng>(rng: &mut R, min: i64, max: i64) -> Result<i64> {
    if min > max {
        return Err(Error::InvalidArgument(format!(
            "range minimum {} exceeds maximum {}",
            min, max
        )));
    }
    Ok(rng.gen_range(min..=max))
}

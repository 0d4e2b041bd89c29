use rand::{CryptoRng, Rng};

use crate::error::Result;
use crate::source;

/// Generate a random (version 4) UUID in canonical lowercase form.
pub fn uuid_v4() -> Result<String> {
    let mut rng = source::crypto_rng()?;
    Ok(uuid_v4_with(&mut rng))
}

/// Same as [`uuid_v4`], drawing from a caller-supplied secure source.
pub fn uuid_v4_with<R: Rng + CryptoRng>(rng: &mut R) -> String {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    format_uuid(bytes)
}

/// Stamp the version and variant bits onto 16 random bytes and render
/// them as the hyphenated 8-4-4-4-12 form. Split out of [`uuid_v4_with`]
/// so the formatting can be checked against fixed bytes.
pub(crate) fn format_uuid(mut bytes: [u8; 16]) -> String {
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    let h = hex::encode(bytes);
    format!(
        "{}-{}-{}-{}-{}",
        &h[..8],
        &h[8..12],
        &h[12..16],
        &h[16..20],
        &h[20..]
    )
}

use base64::{engine::general_purpose, Engine};
use rand::{CryptoRng, Rng};

use crate::error::{Error, Result};
use crate::source;

/// Generate `byte_length` bytes from the secure source and encode them.
///
/// `encoding` is matched case-insensitively: `"hex"` gives lowercase
/// hexadecimal, `"base64"` or `"base64url"` gives URL-safe base64 with
/// the padding stripped. Any other name falls back to hex, which is the
/// documented default rather than an error.
pub fn token(byte_length: usize, encoding: &str) -> Result<String> {
    let mut rng = source::crypto_rng()?;
    token_with(&mut rng, byte_length, encoding)
}

/// Same as [`token`], drawing from a caller-supplied secure source.
pub fn token_with<R: Rng + CryptoRng>(
    rng: &mut R,
    byte_length: usize,
    encoding: &str,
) -> Result<String> {
    if byte_length == 0 {
        return Err(Error::InvalidArgument(
            "byte length must be positive".to_string(),
        ));
    }

    let mut bytes = vec![0u8; byte_length];
    rng.fill_bytes(&mut bytes);

    Ok(match encoding.to_ascii_lowercase().as_str() {
        "base64" | "base64url" => general_purpose::URL_SAFE_NO_PAD.encode(&bytes),
        _ => hex::encode(&bytes),
    })
}

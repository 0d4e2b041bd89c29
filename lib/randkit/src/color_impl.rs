use rand::{CryptoRng, Rng};

use crate::error::Result;
use crate::source;

/// Generate a random RGB color formatted as `#RRGGBB` uppercase hex.
pub fn hex_color() -> Result<String> {
    let mut rng = source::crypto_rng()?;
    Ok(hex_color_with(&mut rng))
}

/// Same as [`hex_color`], drawing from a caller-supplied secure source.
pub fn hex_color_with<R: Rng + CryptoRng>(rng: &mut R) -> String {
    format!(
        "#{:02X}{:02X}{:02X}",
        rng.gen::<u8>(),
        rng.gen::<u8>(),
        rng.gen::<u8>()
    )
}

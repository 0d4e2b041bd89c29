use rand::distributions::{Distribution, Uniform};
use rand::{CryptoRng, Rng};

use crate::error::{Error, Result};
use crate::source;

const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()-_=+[]{}<>?";

/// Generate a password of `length` characters from the secure source.
///
/// The pool always contains the 26 lowercase letters; the flags add the
/// uppercase letters, the digits, and a fixed symbol set. The
/// conventional defaults are `(12, true, true, true)`.
///
/// Each character is an independent uniform draw with replacement, so
/// nothing guarantees that a character from every enabled class appears.
pub fn password(
    length: usize,
    include_symbols: bool,
    include_upper: bool,
    include_digits: bool,
) -> Result<String> {
    let mut rng = source::crypto_rng()?;
    password_with(&mut rng, length, include_symbols, include_upper, include_digits)
}

/// Same as [`password`], drawing from a caller-supplied secure source.
pub fn password_with<R: Rng + CryptoRng>(
    rng: &mut R,
    length: usize,
    include_symbols: bool,
    include_upper: bool,
    include_digits: bool,
) -> Result<String> {
    if length == 0 {
        return Err(Error::InvalidArgument(
            "password length must be positive".to_string(),
        ));
    }

    let mut pool: Vec<char> = LOWER.chars().collect();
    if include_upper {
        pool.extend(UPPER.chars());
    }
    if include_digits {
        pool.extend(DIGITS.chars());
    }
    if include_symbols {
        pool.extend(SYMBOLS.chars());
    }

    // Uniform over the pool index, sampled per character. The pool is
    // never empty since the lowercase letters are unconditional.
    let index = Uniform::from(0..pool.len());
    Ok((0..length).map(|_| pool[index.sample(rng)]).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_length() -> anyhow::Result<()> {
        for length in [1, 12, 64] {
            let pw = password(length, true, true, true)?;
            assert_eq!(pw.chars().count(), length);
        }
        Ok(())
    }

    #[test]
    fn test_password_stays_in_pool() -> anyhow::Result<()> {
        let pool: Vec<char> = LOWER
            .chars()
            .chain(UPPER.chars())
            .chain(DIGITS.chars())
            .chain(SYMBOLS.chars())
            .collect();
        let pw = password(256, true, true, true)?;
        assert!(pw.chars().all(|c| pool.contains(&c)));
        Ok(())
    }

    #[test]
    fn test_password_respects_disabled_classes() -> anyhow::Result<()> {
        let pw = password(256, false, false, false)?;
        assert!(pw.chars().all(|c| c.is_ascii_lowercase()));

        let pw = password(256, true, false, true)?;
        assert!(!pw.chars().any(|c| c.is_ascii_uppercase()));
        Ok(())
    }

    #[test]
    fn test_password_zero_length() {
        let res = password(0, true, true, true);
        assert!(res.is_err());
    }
}

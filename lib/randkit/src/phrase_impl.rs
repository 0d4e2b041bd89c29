use rand::{CryptoRng, Rng};

use crate::error::{Error, Result};
use crate::source;

pub(crate) static ADJECTIVES: &[&str] = &[
    "fast", "blue", "ancient", "silent", "brave", "golden", "lucky",
];
pub(crate) static NOUNS: &[&str] = &[
    "tiger", "castle", "ocean", "rocket", "forest", "wizard", "engine",
];
pub(crate) static VERBS: &[&str] = &[
    "runs", "shines", "whispers", "jumps", "builds", "races", "sings",
];

/// Generate a human-readable phrase of `word_count` words, each drawn
/// from one of three fixed word lists (adjectives, nouns, verbs).
/// Words are joined with single spaces and only the first character of
/// the whole phrase is uppercased.
pub fn phrase(word_count: usize) -> Result<String> {
    let mut rng = source::crypto_rng()?;
    phrase_with(&mut rng, word_count)
}

/// Same as [`phrase`], drawing from a caller-supplied secure source.
pub fn phrase_with<R: Rng + CryptoRng>(rng: &mut R, word_count: usize) -> Result<String> {
    if word_count == 0 {
        return Err(Error::InvalidArgument(
            "word count must be positive".to_string(),
        ));
    }

    let mut words = Vec::with_capacity(word_count);
    for _ in 0..word_count {
        let list = match rng.gen_range(0..3) {
            0 => ADJECTIVES,
            1 => NOUNS,
            _ => VERBS,
        };
        words.push(list[rng.gen_range(0..list.len())]);
    }

    let mut joined = words.join(" ");
    // The word lists are all lowercase ASCII, so slicing off the first
    // byte is safe.
    joined[..1].make_ascii_uppercase();
    Ok(joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_some_list(word: &str) -> bool {
        ADJECTIVES.contains(&word) || NOUNS.contains(&word) || VERBS.contains(&word)
    }

    #[test]
    fn test_phrase_word_count() -> anyhow::Result<()> {
        for word_count in [1, 4, 12] {
            let p = phrase(word_count)?;
            assert_eq!(p.split(' ').count(), word_count);
        }
        Ok(())
    }

    #[test]
    fn test_phrase_words_come_from_lists() -> anyhow::Result<()> {
        let p = phrase(20)?;
        let lowered = p.to_ascii_lowercase();
        for word in lowered.split(' ') {
            assert!(in_some_list(word), "unexpected word: {}", word);
        }
        Ok(())
    }

    #[test]
    fn test_phrase_capitalization() -> anyhow::Result<()> {
        let p = phrase(4)?;
        let mut chars = p.chars();
        assert!(chars.next().is_some_and(|c| c.is_ascii_uppercase()));
        assert!(chars.all(|c| !c.is_ascii_uppercase()));
        Ok(())
    }

    #[test]
    fn test_phrase_zero_words() {
        let res = phrase(0);
        assert!(res.is_err());
    }
}

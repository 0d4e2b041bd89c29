use rand::seq::SliceRandom;
use rand::Rng;

use crate::source;

/// Return a new vector holding a uniform permutation of `items`; the
/// input slice is left untouched.
///
/// Backed by the general-purpose source: fine for presentation-level
/// shuffling, never for any security-sensitive ordering decision.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    let mut rng = source::fast_rng();
    shuffle_with(&mut rng, items)
}

/// Same as [`shuffle`], drawing from a caller-supplied source.
pub fn shuffle_with<R: Rng, T: Clone>(rng: &mut R, items: &[T]) -> Vec<T> {
    // Fisher-Yates over a fresh copy.
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}

//! A small library of independent random-value generators: secure tokens,
//! UUIDv4, passwords, hex colors, bounded integers, array shuffling, and
//! word phrases.
//!
//! Every generator draws from one of two sources defined in [`source`]:
//! a cryptographically secure ChaCha20 stream seeded from the OS entropy
//! pool, or a fast general-purpose generator used only for shuffling.
//! Each generator also has a `*_with` form taking the RNG as an argument,
//! so callers and tests can substitute a seeded source.

pub mod error;
pub mod source;

mod color_impl;
mod int_impl;
mod password_impl;
mod phrase_impl;
mod shuffle_impl;
mod token_impl;
mod uuid_impl;

pub use color_impl::{hex_color, hex_color_with};
pub use error::{Error, Result};
pub use int_impl::{int, int_with};
pub use password_impl::{password, password_with};
pub use phrase_impl::{phrase, phrase_with};
pub use shuffle_impl::{shuffle, shuffle_with};
pub use token_impl::{token, token_with};
pub use uuid_impl::{uuid_v4, uuid_v4_with};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure modes shared by every generator.
#[derive(Debug, Error)]
pub enum Error {
    /// The caller passed a length, count, or range the generator cannot
    /// honor. Arguments are never silently clamped.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operating system entropy pool could not seed the secure
    /// source. There is no safe fallback randomness, so this is never
    /// retried.
    #[error("entropy source unavailable: {0}")]
    EntropyUnavailable(#[source] rand::Error),
}

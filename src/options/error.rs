//! Allow-list integrity errors.

use thiserror::Error;

/// Error returned by [`AllowedOptions::check`](super::AllowedOptions::check).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionSetError {
    /// Two entries (names or aliases) normalize to the same token.
    #[error("option '{token}' is declared by both '{first}' and '{second}'")]
    Duplicate {
        token: String,
        first: String,
        second: String,
    },
    /// A name or alias has nothing left after normalization.
    #[error("option '{0}' normalizes to an empty name")]
    EmptyName(String),
}

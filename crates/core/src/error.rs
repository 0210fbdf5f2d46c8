// crates/core/src/error.rs
use thiserror::Error;

/// Error returned by index and category lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AqiError {
    /// The value falls outside every tier of the table it was looked up in.
    #[error("beyond the scale")]
    BeyondScale,
}

pub type Result<T> = core::result::Result<T, AqiError>;

/// Errors raised while validating a caller-supplied breakpoint table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("breakpoint table has {found} tiers, expected {expected}")]
    TierCount { found: usize, expected: usize },

    #[error("tier {tier} has a non-finite bound")]
    NonFinite { tier: usize },

    #[error("tier {tier} has its low bound above its high bound")]
    Inverted { tier: usize },

    #[error("tier {tier} does not start above the high bound of tier {previous}")]
    Overlap { tier: usize, previous: usize },
}

//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// These cover malformed inputs only. A pool that cannot produce a valid
/// group is not an error: the grouping core reports it through a short
/// group and a negative reward.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown category: {0} (expected junior, intermediate or senior)")]
    UnknownCategory(String),

    #[error("Invalid action index: {0} (expected 0-3)")]
    InvalidAction(u8),

    #[error("Invalid member: {0}")]
    InvalidMember(String),

    #[error("No member id left after {0}")]
    IdsExhausted(u64),
}

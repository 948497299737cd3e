//! Error types for the tween core.

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TweenError {
    /// A numeric duration was requested from an `Unknown` descriptor.
    #[error("duration is unknown (subtree not materialized yet)")]
    UnknownDuration,

    /// Configuration values outside their valid range.
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

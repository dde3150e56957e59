//! Error types for ddragon.
//!
//! Every fallible operation in the workspace returns `DdragonResult<T>`.
//! Variants map onto the failure kinds callers are expected to branch on:
//! transport failures, undecodable bodies, unknown entities, rejected
//! arguments, and operations that need a manifest that is not loaded yet.

use thiserror::Error;

/// Result alias used across the workspace.
pub type DdragonResult<T> = Result<T, DdragonError>;

#[derive(Debug, Error)]
pub enum DdragonError {
    /// Transport error or non-success HTTP status.
    #[error("fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// Body was malformed or did not match the expected shape.
    #[error("failed to decode {what}: {reason}")]
    Decode { what: String, reason: String },

    /// Requested entity name has no manifest entry.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation needs a manifest that has not been fetched successfully.
    #[error("not ready: {0}")]
    NotReady(String),

    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl DdragonError {
    pub fn fetch(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::Fetch {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn decode(what: impl Into<String>, reason: impl ToString) -> Self {
        Self::Decode {
            what: what.into(),
            reason: reason.to_string(),
        }
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn not_ready(msg: impl Into<String>) -> Self {
        Self::NotReady(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::Invariant(msg.into())
    }

    /// Stable machine-readable code, suitable for JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Fetch { .. } => "fetch_error",
            Self::Decode { .. } => "decode_error",
            Self::NotFound(_) => "not_found",
            Self::InvalidArgument(_) => "invalid_argument",
            Self::NotReady(_) => "not_ready",
            Self::Invariant(_) => "invariant",
        }
    }
}

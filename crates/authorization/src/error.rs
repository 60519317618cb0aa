//! Authorization error types.

use thiserror::Error;

/// Reasons an authorizer could not produce a ruling.
///
/// An `Error` never carries a [`Decision`](crate::Decision): a failed call has
/// no verdict, and callers must not treat it as `deny` or `no opinion`.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The backing directory or review service could not be reached.
    #[error("authorizer unavailable: {0}")]
    Unavailable(String),

    /// The action name is not acceptable to a concrete authorizer.
    #[error("invalid action '{action}': {reason}")]
    InvalidAction { action: String, reason: String },

    /// The authorizer cannot rule on this kind of user.
    #[error("unsupported user '{0}'")]
    UnsupportedUser(String),

    /// An access review reported the request as both allowed and denied.
    #[error("review has both denied and allowed the request")]
    ConflictingReview,

    /// Text that is not one of `allowed`, `deny`, `no opinion`.
    #[error("unknown decision '{0}'")]
    UnknownDecision(String),

    /// Failure reported by an authorizer implementation outside this crate.
    #[error(transparent)]
    Backend(Box<dyn std::error::Error + Send + Sync>),

    /// Failed to parse an authorization config.
    #[error("failed to parse config: {0}")]
    Parse(String),

    /// An I/O error occurred while reading config.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Wrap an implementation-specific error.
    pub fn backend(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Backend(err.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`ShopfrontError`] via `#[from]`.

/// Top-level error returned by services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum ShopfrontError {
    /// Input failed a domain invariant.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The requested record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The persistence layer failed.
    #[error("storage error: {0}")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A price was present but not a finite number.
    #[error("price must be a finite number")]
    InvalidPrice,

    /// An identifier could not be parsed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of record that was looked up (e.g. `"Product"`).
    pub entity: &'static str,
    /// The identifier that was requested.
    pub id: String,
}

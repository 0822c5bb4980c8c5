//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`PizzeriaError`] via `#[from]`; no stringly-typed variants.

/// Top-level error enum shared by services, adapters, and handlers.
#[derive(Debug, thiserror::Error)]
pub enum PizzeriaError {
    /// A domain invariant or request requirement was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A lookup by id matched no record.
    #[error("record not found")]
    NotFound(#[from] NotFoundError),

    /// The storage layer failed.
    #[error("storage error")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
///
/// The `Display` strings are the exact messages carried in HTTP error
/// envelopes, so they are part of the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The offering price is outside the allowed `1..=30` range.
    #[error("Price must be between 1 and 30")]
    PriceOutOfRange,

    /// A required text field is empty.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// A required field is absent from the request body.
    #[error("Missing data")]
    MissingData,
}

/// A lookup by id matched no record.
#[derive(Debug, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    /// Human-readable record type name, e.g. `"Restaurant"`.
    pub entity: &'static str,
    /// The id that failed to resolve.
    pub id: String,
}

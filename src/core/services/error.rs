//! Error type for service operations.

/// Errors surfaced by the service layer.
///
/// List operations never fail (missing ids and empty input are no-ops);
/// this type covers the settings path, where the database can.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Input failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

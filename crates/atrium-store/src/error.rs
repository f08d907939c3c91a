use thiserror::Error;

/// Errors surfaced by the document store collaborator.
///
/// The `Display` strings double as the user-facing messages for the error
/// codes the application translates (permission-denied, unavailable); any
/// other failure carries its native message through.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The store's access-control rules rejected the operation.
    #[error("You do not have permission to perform this action")]
    PermissionDenied,

    /// The backing service could not be reached.
    #[error("Network error. Please check your connection")]
    Unavailable,

    /// A lookup expected a document but found none.
    #[error("Record not found")]
    NotFound,

    /// A document's fields could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Any other collaborator-reported failure, message passed through.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialization(e.to_string())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;

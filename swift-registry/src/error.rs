//! Error type shared by the registry, the normalizer and the HTTP layer

use thiserror::Error;

/// Outcome of a failed registry operation.
///
/// `NotFound`, `Conflict`, `MalformedInput` and `MalformedRow` are expected
/// business outcomes the caller branches on. `Storage` wraps anything the
/// database reported and is never retried here.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    MalformedInput(String),

    /// Ingestion row with too few positional fields
    #[error("malformed row: expected at least {expected} fields, got {actual}")]
    MalformedRow { expected: usize, actual: usize },

    #[error("storage failure: {0}")]
    Storage(#[from] sqlx::Error),
}

impl RegistryError {
    pub fn code_not_found(code: &str) -> Self {
        RegistryError::NotFound(format!("SWIFT code '{}' not found in database", code))
    }

    pub fn country_not_found(country_iso2: &str) -> Self {
        RegistryError::NotFound(format!(
            "No SWIFT codes found for country '{}'",
            country_iso2
        ))
    }

    #[cfg(test)]
    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistryError::NotFound(_))
    }
}

pub type RegistryResult<T> = std::result::Result<T, RegistryError>;

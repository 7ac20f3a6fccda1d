//! Shared registry error taxonomy
//!
//! Both lifecycle services (items and claims) surface failures with this
//! type, so the HTTP layer maps errors to responses in one place.

use thiserror::Error;

use crate::ports::PortError;

/// Domain error for registry operations
#[derive(Debug, Error)]
pub enum RegistryError {
    /// An item, claim, or directory entity does not exist
    #[error("{entity} {id} not found")]
    NotFound { entity: String, id: String },

    /// A required field is missing, empty, or malformed
    #[error("Validation error: {0}")]
    Validation(String),

    /// The item is not in the status the requested transition needs
    #[error("Invalid item state: expected {expected}, was {actual}")]
    InvalidState { expected: String, actual: String },

    /// The claimant is the item's own reporter
    #[error("An item cannot be claimed by its reporter")]
    SelfClaim,

    /// The operation conflicts with existing data (e.g. duplicate email)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Unexpected storage failure; the operation was rolled back and may be retried
    #[error("Storage failure: {0}")]
    Storage(#[source] PortError),
}

impl RegistryError {
    pub fn not_found(entity: impl Into<String>, id: impl std::fmt::Display) -> Self {
        RegistryError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        RegistryError::Validation(message.into())
    }

    pub fn invalid_state(expected: impl std::fmt::Display, actual: impl std::fmt::Display) -> Self {
        RegistryError::InvalidState {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Returns true if retrying the operation could succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, RegistryError::Storage(source) if source.is_transient())
    }
}

impl From<PortError> for RegistryError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::NotFound { entity_type, id } => RegistryError::NotFound {
                entity: entity_type,
                id,
            },
            PortError::Validation { message, .. } => RegistryError::Validation(message),
            PortError::Conflict { message } => RegistryError::Conflict(message),
            other => RegistryError::Storage(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_from_port_error() {
        let err: RegistryError = PortError::not_found("Item", "42").into();
        assert!(matches!(err, RegistryError::NotFound { .. }));
        assert!(err.to_string().contains("Item"));
    }

    #[test]
    fn test_storage_retryable() {
        let err: RegistryError = PortError::connection("refused").into();
        assert!(err.is_retryable());

        let err: RegistryError = PortError::internal("corrupt row").into();
        assert!(!err.is_retryable());
    }
}

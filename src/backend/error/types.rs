/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are used in HTTP handlers and can be converted to HTTP responses.
 *
 * # Error Categories
 *
 * - `NotFound` - A referenced board, list, or card does not exist
 * - `Validation` - A request carried invalid input
 * - `Invariant` - An ordering operation would leave a group non-dense
 * - `Persistence` - The database failed a read or write
 *
 * # Status Code Mapping
 *
 * - `NotFound` - 404 Not Found
 * - `Validation` - 400 Bad Request
 * - `Invariant` - 400 Bad Request
 * - `Persistence` - 500 Internal Server Error
 */

use axum::http::StatusCode;
use thiserror::Error;
use uuid::Uuid;

use crate::shared::ordering::OrderingError;

/// Backend-specific error types
///
/// This enum represents all failure modes a handler can surface. Each
/// variant carries enough context for the JSON error body and maps to a
/// fixed HTTP status code.
#[derive(Debug, Error)]
pub enum BackendError {
    /// A referenced entity does not exist (or is not in the stated group)
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Kind of entity that failed to resolve
        resource: &'static str,
        /// Identifier the caller supplied
        id: Uuid,
    },

    /// Invalid request input
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable error message
        message: String,
    },

    /// An ordering operation would violate the density invariant
    #[error("Ordering invariant violated: {message}")]
    Invariant {
        /// Human-readable error message
        message: String,
    },

    /// The document store failed a read or write
    #[error("Persistence failure: {0}")]
    Persistence(#[from] sqlx::Error),
}

impl BackendError {
    /// Create a not-found error for the given resource kind
    pub fn not_found(resource: &'static str, id: Uuid) -> Self {
        Self::NotFound { resource, id }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an invariant-violation error
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::Invariant {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Invariant { .. } => StatusCode::BAD_REQUEST,
            Self::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message for the response body
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<OrderingError> for BackendError {
    fn from(err: OrderingError) -> Self {
        match err {
            OrderingError::ItemNotFound { item_id } => Self::not_found("item", item_id),
            OrderingError::PositionOutOfRange { .. } => Self::validation(err.to_string()),
            OrderingError::NotDense { .. } => Self::invariant(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let id = Uuid::new_v4();
        let error = BackendError::not_found("card", id);
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
        assert!(error.message().contains("card not found"));
        assert!(error.message().contains(&id.to_string()));
    }

    #[test]
    fn test_validation_error() {
        let error = BackendError::validation("title must not be empty");
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert!(error.message().contains("title must not be empty"));
    }

    #[test]
    fn test_invariant_error() {
        let error = BackendError::invariant("positions are not dense");
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_from_ordering_not_found() {
        let item_id = Uuid::new_v4();
        let error: BackendError = OrderingError::ItemNotFound { item_id }.into();
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_from_ordering_out_of_range() {
        let error: BackendError = OrderingError::PositionOutOfRange {
            requested: 12,
            max: 3,
        }
        .into();
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert!(error.message().contains("12"));
    }

    #[test]
    fn test_from_ordering_not_dense() {
        let error: BackendError = OrderingError::NotDense {
            detail: "position 2 is missing".to_string(),
        }
        .into();
        match &error {
            BackendError::Invariant { message } => {
                assert!(message.contains("position 2 is missing"));
            }
            other => panic!("Expected Invariant, got {:?}", other),
        }
    }
}

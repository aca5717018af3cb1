//! Contract error types for FAQ service
//!
//! These errors are transport-agnostic and used for inter-module communication.

use thiserror::Error;

/// FAQ service domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FaqError {
    /// Another FAQ visible in one of the target stores uses the same URL key
    #[error("URL key for specified store already exists.")]
    DuplicateIdentifier {
        /// Rejected URL key
        identifier: String,
    },
    /// URL key made of digits only
    #[error("The faq URL key cannot be made of only numbers.")]
    NumericIdentifier {
        /// Rejected URL key
        identifier: String,
    },
    /// Validation error
    #[error("Validation error: {message}")]
    Validation {
        /// Validation error message
        message: String,
    },
    /// FAQ or category not found
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource type (faq, faq_category)
        resource: String,
        /// Resource identifier
        id: String,
    },
    /// Internal error
    #[error("Internal error")]
    Internal,
}

impl FaqError {
    pub fn not_found(resource: &str, id: impl ToString) -> Self {
        Self::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

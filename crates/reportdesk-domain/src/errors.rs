//! Domain errors for Reportdesk

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// One or more field constraints were violated. Carries the
    /// comma-joined list of violated-constraint messages.
    #[error("{messages}")]
    InvalidReport { messages: String },

    /// Storage backend failure. Never produced by domain logic itself;
    /// repository implementations use it for infrastructure errors.
    #[error("storage error: {reason}")]
    Storage { reason: String },
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

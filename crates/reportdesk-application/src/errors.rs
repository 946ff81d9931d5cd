//! Application layer error types
//!
//! These are the error kinds the use cases expose to transport
//! collaborators. Domain validation failures surface as `InvalidReport`;
//! storage failures pass through as `Repository` without being masked as
//! domain errors.

use thiserror::Error;

use reportdesk_domain::DomainError;

/// Application layer result type
pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Application layer errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApplicationError {
    /// One or more field constraints were violated; carries the
    /// comma-joined constraint messages.
    #[error("invalid report: {0}")]
    InvalidReport(String),

    /// The requested identifier has no matching record; carries the id.
    #[error("report with id {0} not found")]
    ReportNotFound(String),

    /// Unclassified repository failure, propagated unmodified.
    #[error("repository error: {0}")]
    Repository(String),
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidReport { messages } => ApplicationError::InvalidReport(messages),
            DomainError::Storage { reason } => ApplicationError::Repository(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_report_display_carries_messages() {
        let err = ApplicationError::InvalidReport("title cannot be empty".into());
        assert_eq!(err.to_string(), "invalid report: title cannot be empty");
    }

    #[test]
    fn not_found_display_carries_the_id() {
        let err = ApplicationError::ReportNotFound("abc-123".into());
        assert_eq!(err.to_string(), "report with id abc-123 not found");
    }

    #[test]
    fn domain_validation_errors_map_to_invalid_report() {
        let domain_err = DomainError::InvalidReport {
            messages: "complaint cannot be empty".into(),
        };
        let app_err: ApplicationError = domain_err.into();
        assert!(matches!(app_err, ApplicationError::InvalidReport(_)));
    }

    #[test]
    fn storage_errors_pass_through_as_repository_errors() {
        let domain_err = DomainError::Storage {
            reason: "connection refused".into(),
        };
        let app_err: ApplicationError = domain_err.into();
        assert_eq!(app_err, ApplicationError::Repository("connection refused".into()));
    }
}

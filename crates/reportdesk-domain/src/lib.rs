//! Reportdesk domain layer
//!
//! Holds the `Report` aggregate, its value objects, the notification-based
//! validation mechanism and the repository contract. This crate performs no
//! I/O: storage backends implement [`ReportRepository`] in infrastructure
//! crates, and use cases orchestrate everything from the application layer.

pub mod entities;
pub mod errors;
pub mod notification;
pub mod repositories;
pub mod value_objects;

pub use entities::{Report, ReportDraft};
pub use errors::{DomainError, DomainResult};
pub use notification::Notification;
pub use repositories::{ListParams, ReportRepository};
pub use value_objects::{Email, ReportId, ReportStatus, ReportType};

//! Storage backends for Reportdesk
//!
//! Implements the domain's [`ReportRepository`] contract. The in-memory
//! repository is the reference implementation used in tests and as the
//! behavioral model for database-backed implementations.
//!
//! [`ReportRepository`]: reportdesk_domain::ReportRepository

mod in_memory;

pub use in_memory::InMemoryReportRepository;

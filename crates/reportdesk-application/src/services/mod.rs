//! Application services
//!
//! Stateless, constructor-injected orchestrators of the domain entity and
//! the repository contract. One service covers the five report use cases.

mod report_service;

pub use report_service::ReportService;

//! Reportdesk application layer
//!
//! Implements the five report use cases (create, get, update, delete, list)
//! by orchestrating the domain entity and the repository contract. Services
//! are stateless request/response transformers: they translate domain
//! failures into application-level error kinds and map entities to DTOs,
//! leaving transport concerns (HTTP, serialization formats) to outer layers.

pub mod config;
pub mod dto;
pub mod errors;
pub mod services;

pub use config::PaginationConfig;
pub use dto::*;
pub use errors::{ApplicationError, ApplicationResult};
pub use services::ReportService;

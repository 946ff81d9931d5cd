//! Repository contract for report persistence
//!
//! The domain layer defines only the interface; storage backends (the
//! in-memory reference implementation, a database-backed one) implement it
//! in infrastructure crates.

use async_trait::async_trait;

use crate::entities::Report;
use crate::errors::DomainResult;
use crate::value_objects::ReportId;

/// Query parameters for [`ReportRepository::list`].
///
/// `order_by` sorts ascending by field name; a `-` prefix requests
/// descending order for backends that support it, and an unknown field
/// name degrades to unsorted order rather than erroring. `search_query`
/// is a case-insensitive substring match over title, complaint, name and
/// email.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    pub order_by: Option<String>,
    pub current_page: Option<u32>,
    pub per_page: Option<u32>,
    pub search_query: Option<String>,
}

/// Storage contract for report entities
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Insert a new report. The caller guarantees a fresh identifier;
    /// no further uniqueness is enforced.
    async fn save(&self, report: &Report) -> DomainResult<()>;

    /// Exact lookup by identifier. `None` when not found, never an error.
    async fn get_by_id(&self, id: &ReportId) -> DomainResult<Option<Report>>;

    /// Remove the report if present; a no-op when absent.
    async fn delete(&self, id: &ReportId) -> DomainResult<()>;

    /// Replace the stored record matching the entity's identifier with the
    /// full new state. Must not insert when no prior record exists; the
    /// reference implementation treats that case as a no-op.
    async fn update(&self, report: &Report) -> DomainResult<()>;

    /// Filtered, sorted sequence of reports. The reference implementation
    /// returns the full match set and leaves page slicing to the caller,
    /// which needs the unpaginated length for its total count.
    async fn list(&self, params: &ListParams) -> DomainResult<Vec<Report>>;
}

//! In-memory report repository
//!
//! Reference implementation of the repository contract. Keeps reports in a
//! `Vec` so unsorted listings preserve insertion order. The lock serializes
//! individual operations; callers needing cross-operation consistency must
//! synchronize externally.

use std::cmp::Ordering;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use reportdesk_domain::{DomainResult, ListParams, Report, ReportId, ReportRepository};

/// In-memory implementation of [`ReportRepository`]
#[derive(Debug, Default)]
pub struct InMemoryReportRepository {
    reports: RwLock<Vec<Report>>,
}

impl InMemoryReportRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with the given reports
    pub fn with_reports(reports: Vec<Report>) -> Self {
        Self {
            reports: RwLock::new(reports),
        }
    }
}

fn matches_query(report: &Report, query: &str) -> bool {
    let query = query.to_lowercase();
    report.title().to_lowercase().contains(&query)
        || report.complaint().to_lowercase().contains(&query)
        || report.name().to_lowercase().contains(&query)
        || report.email().as_str().to_lowercase().contains(&query)
}

const SORTABLE_FIELDS: &[&str] = &[
    "id",
    "title",
    "complaint",
    "name",
    "email",
    "report_type",
    "report_status",
];

/// Unknown field names degrade to unsorted order rather than erroring.
fn is_sortable(field: &str) -> bool {
    SORTABLE_FIELDS.contains(&field)
}

/// Ascending comparison on a named field; `None` for unknown fields.
fn compare_by_field(a: &Report, b: &Report, field: &str) -> Option<Ordering> {
    match field {
        "id" => Some(a.id().to_string().cmp(&b.id().to_string())),
        "title" => Some(a.title().cmp(b.title())),
        "complaint" => Some(a.complaint().cmp(b.complaint())),
        "name" => Some(a.name().cmp(b.name())),
        "email" => Some(a.email().as_str().cmp(b.email().as_str())),
        "report_type" => Some(a.report_type().as_str().cmp(b.report_type().as_str())),
        "report_status" => Some(a.report_status().as_str().cmp(b.report_status().as_str())),
        _ => None,
    }
}

#[async_trait]
impl ReportRepository for InMemoryReportRepository {
    async fn save(&self, report: &Report) -> DomainResult<()> {
        debug!(id = %report.id(), "saving report");
        self.reports.write().await.push(report.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: &ReportId) -> DomainResult<Option<Report>> {
        Ok(self
            .reports
            .read()
            .await
            .iter()
            .find(|report| report.id() == *id)
            .cloned())
    }

    async fn delete(&self, id: &ReportId) -> DomainResult<()> {
        let mut reports = self.reports.write().await;
        if let Some(position) = reports.iter().position(|report| report.id() == *id) {
            reports.remove(position);
            debug!(%id, "deleted report");
        }
        Ok(())
    }

    async fn update(&self, report: &Report) -> DomainResult<()> {
        let mut reports = self.reports.write().await;
        // Missing record is a no-op: update never inserts.
        if let Some(stored) = reports.iter_mut().find(|stored| stored.id() == report.id()) {
            *stored = report.clone();
            debug!(id = %report.id(), "updated report");
        }
        Ok(())
    }

    async fn list(&self, params: &ListParams) -> DomainResult<Vec<Report>> {
        let reports = self.reports.read().await;

        let mut matches: Vec<Report> = match params.search_query.as_deref() {
            Some(query) if !query.is_empty() => reports
                .iter()
                .filter(|report| matches_query(report, query))
                .cloned()
                .collect(),
            _ => reports.iter().cloned().collect(),
        };

        if let Some(order_by) = params.order_by.as_deref().filter(|field| !field.is_empty()) {
            let (field, descending) = match order_by.strip_prefix('-') {
                Some(rest) => (rest, true),
                None => (order_by, false),
            };
            if is_sortable(field) {
                matches.sort_by(|a, b| compare_by_field(a, b, field).unwrap_or(Ordering::Equal));
                if descending {
                    matches.reverse();
                }
            }
        }

        // Pagination is left to the caller, which needs the full match
        // count; current_page and per_page are honored by backends that
        // paginate server-side.
        Ok(matches)
    }
}

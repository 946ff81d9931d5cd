//! Data transfer objects crossing the application boundary
//!
//! Commands and DTOs keep the domain model from leaking to transport
//! layers. Enum-valued fields travel as their wire strings and are parsed
//! back into value objects inside the service.

use serde::{Deserialize, Serialize};

use reportdesk_domain::Report;

/// Command to file a new report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReportCommand {
    pub title: String,
    pub complaint: String,
    pub report_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// `None` means the default `PENDING` status.
    #[serde(default)]
    pub report_status: Option<String>,
}

/// Command to update an existing report.
///
/// Every mutable field is optional: `None` keeps the current value,
/// `Some` overwrites it. Clearing the optional free-text fields (name,
/// email) is expressed as `Some("")`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateReportCommand {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub complaint: Option<String>,
    #[serde(default)]
    pub report_type: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub report_status: Option<String>,
}

/// Report representation returned by the use cases
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDto {
    pub id: String,
    pub title: String,
    pub complaint: String,
    pub report_type: String,
    pub name: String,
    pub email: String,
    pub report_status: String,
}

impl ReportDto {
    /// Map from the domain entity
    pub fn from_domain(report: &Report) -> Self {
        Self {
            id: report.id().to_string(),
            title: report.title().to_string(),
            complaint: report.complaint().to_string(),
            report_type: report.report_type().to_string(),
            name: report.name().to_string(),
            email: report.email().to_string(),
            report_status: report.report_status().to_string(),
        }
    }
}

/// Query parameters for the list use case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListReportsQuery {
    #[serde(default = "default_order_by")]
    pub order_by: String,
    #[serde(default = "default_current_page")]
    pub current_page: u32,
    /// `None` means the configured default page size.
    #[serde(default)]
    pub per_page: Option<u32>,
    #[serde(default)]
    pub search_query: Option<String>,
}

fn default_order_by() -> String {
    "title".to_string()
}

fn default_current_page() -> u32 {
    1
}

impl Default for ListReportsQuery {
    fn default() -> Self {
        Self {
            order_by: default_order_by(),
            current_page: default_current_page(),
            per_page: None,
            search_query: None,
        }
    }
}

/// Pagination metadata accompanying a listing. `total` is the unpaginated
/// match count, not the page length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMeta {
    pub current_page: u32,
    pub per_page: u32,
    pub total: usize,
}

/// One page of reports plus pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListReportsResponse {
    pub data: Vec<ReportDto>,
    pub meta: ListMeta,
}

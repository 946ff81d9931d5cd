//! Report application service
//!
//! Implements the create/get/update/delete/list use cases. Each call is a
//! synchronous-per-request transformer: build or fetch the entity, let it
//! validate itself, persist through the repository, map to a DTO. Failed
//! validation never reaches the repository.

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::PaginationConfig;
use crate::dto::{
    CreateReportCommand, ListMeta, ListReportsQuery, ListReportsResponse, ReportDto,
    UpdateReportCommand,
};
use crate::errors::{ApplicationError, ApplicationResult};

use reportdesk_domain::{ListParams, ReportDraft, ReportId, ReportRepository};

/// Report application service, generic over the storage backend.
pub struct ReportService<R: ReportRepository> {
    repository: Arc<R>,
    pagination: PaginationConfig,
}

impl<R: ReportRepository> ReportService<R> {
    /// Create a service with default pagination limits
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_config(repository, PaginationConfig::default())
    }

    /// Create a service with explicit pagination limits
    pub fn with_config(repository: Arc<R>, pagination: PaginationConfig) -> Self {
        Self {
            repository,
            pagination,
        }
    }

    /// File a new report and return its identifier. Validation is a
    /// single pass: membership errors on the enum-valued fields and the
    /// text-field errors are reported together.
    pub async fn create(&self, cmd: CreateReportCommand) -> ApplicationResult<String> {
        let report = ReportDraft {
            id: None,
            title: cmd.title,
            complaint: cmd.complaint,
            report_type: cmd.report_type,
            name: cmd.name,
            email: cmd.email,
            report_status: cmd.report_status,
        }
        .build()?;

        self.repository.save(&report).await?;
        info!(id = %report.id(), "report created");
        Ok(report.id().to_string())
    }

    /// Fetch a single report by identifier.
    pub async fn get(&self, id: &str) -> ApplicationResult<ReportDto> {
        let report_id = parse_id(id)?;
        let report = self
            .repository
            .get_by_id(&report_id)
            .await?
            .ok_or_else(|| ApplicationError::ReportNotFound(id.to_string()))?;

        Ok(ReportDto::from_domain(&report))
    }

    /// Update an existing report. Fields left as `None` keep their current
    /// value; the merged full field set goes through the same single
    /// validation pass as creation, so all violations report together.
    pub async fn update(&self, cmd: UpdateReportCommand) -> ApplicationResult<()> {
        let report_id = parse_id(&cmd.id)?;
        let current = self
            .repository
            .get_by_id(&report_id)
            .await?
            .ok_or_else(|| ApplicationError::ReportNotFound(cmd.id.clone()))?;

        let updated = ReportDraft {
            id: Some(current.id()),
            title: cmd.title.unwrap_or_else(|| current.title().to_string()),
            complaint: cmd
                .complaint
                .unwrap_or_else(|| current.complaint().to_string()),
            report_type: cmd
                .report_type
                .unwrap_or_else(|| current.report_type().to_string()),
            name: cmd.name.unwrap_or_else(|| current.name().to_string()),
            email: cmd.email.unwrap_or_else(|| current.email().to_string()),
            report_status: Some(
                cmd.report_status
                    .unwrap_or_else(|| current.report_status().to_string()),
            ),
        }
        .build()?;

        self.repository.update(&updated).await?;
        info!(id = %updated.id(), "report updated");
        Ok(())
    }

    /// Delete a report by identifier. The lookup confirms existence, so a
    /// repeated delete of the same id reports not-found.
    pub async fn delete(&self, id: &str) -> ApplicationResult<()> {
        let report_id = parse_id(id)?;
        let report = self
            .repository
            .get_by_id(&report_id)
            .await?
            .ok_or_else(|| ApplicationError::ReportNotFound(id.to_string()))?;

        self.repository.delete(&report.id()).await?;
        info!(%id, "report deleted");
        Ok(())
    }

    /// List reports with search, sort and pagination. `per_page` above the
    /// configured maximum is silently clamped; out-of-range pages yield an
    /// empty data set with the total count intact.
    pub async fn list(&self, query: ListReportsQuery) -> ApplicationResult<ListReportsResponse> {
        let per_page = query
            .per_page
            .unwrap_or(self.pagination.default_per_page)
            .min(self.pagination.max_per_page);
        let current_page = query.current_page.max(1);

        let params = ListParams {
            order_by: Some(query.order_by),
            current_page: Some(current_page),
            per_page: Some(per_page),
            search_query: query.search_query,
        };
        let reports = self.repository.list(&params).await?;
        let total = reports.len();

        let offset = (current_page as usize - 1) * per_page as usize;
        let data: Vec<ReportDto> = reports
            .iter()
            .skip(offset)
            .take(per_page as usize)
            .map(ReportDto::from_domain)
            .collect();

        debug!(total, page = current_page, returned = data.len(), "listed reports");
        Ok(ListReportsResponse {
            data,
            meta: ListMeta {
                current_page,
                per_page,
                total,
            },
        })
    }
}

/// A malformed identifier can never match a stored record, so it reports
/// not-found rather than a separate validation failure.
fn parse_id(id: &str) -> Result<ReportId, ApplicationError> {
    ReportId::parse(id).map_err(|_| ApplicationError::ReportNotFound(id.to_string()))
}

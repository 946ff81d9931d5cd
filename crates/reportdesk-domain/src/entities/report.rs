//! Report entity, the aggregate root of the complaint domain

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};
use crate::notification::Notification;
use crate::value_objects::{Email, ReportId, ReportStatus, ReportType};

const MAX_NAME_LEN: usize = 100;
const MAX_TITLE_LEN: usize = 255;
const MAX_COMPLAINT_LEN: usize = 1024;

/// A user-submitted complaint.
///
/// Every constructor and mutation re-runs validation, so an instance that
/// violates a field constraint never exists: construction fails instead of
/// returning a half-valid entity, a rejected update leaves the previous
/// state untouched, and deserialization funnels through the same checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "StoredReport")]
pub struct Report {
    id: ReportId,
    title: String,
    complaint: String,
    report_type: ReportType,
    name: String,
    email: Email,
    report_status: ReportStatus,
}

impl Report {
    /// Create a report with a freshly generated identifier.
    pub fn new(
        title: String,
        complaint: String,
        report_type: ReportType,
        name: String,
        email: Email,
        report_status: ReportStatus,
    ) -> DomainResult<Self> {
        Self::with_id(
            ReportId::new(),
            title,
            complaint,
            report_type,
            name,
            email,
            report_status,
        )
    }

    /// Create a report with a caller-supplied identifier, typically when
    /// rehydrating from storage.
    pub fn with_id(
        id: ReportId,
        title: String,
        complaint: String,
        report_type: ReportType,
        name: String,
        email: Email,
        report_status: ReportStatus,
    ) -> DomainResult<Self> {
        let report = Self {
            id,
            title,
            complaint,
            report_type,
            name,
            email,
            report_status,
        };
        report.validate()?;
        Ok(report)
    }

    pub fn id(&self) -> ReportId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn complaint(&self) -> &str {
        &self.complaint
    }

    pub fn report_type(&self) -> ReportType {
        self.report_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn report_status(&self) -> ReportStatus {
        self.report_status
    }

    /// Check all field constraints into a fresh notification. The checks
    /// are independent and all evaluated, so every violated constraint is
    /// reported in one pass.
    pub fn validate(&self) -> DomainResult<()> {
        let mut notification = Notification::new();
        check_text_fields(
            &self.title,
            &self.complaint,
            &self.name,
            &self.email,
            &mut notification,
        );

        if notification.has_errors() {
            return Err(DomainError::InvalidReport {
                messages: notification.messages(),
            });
        }

        Ok(())
    }

    /// Replace all mutable fields with the given values and re-validate.
    ///
    /// This is a full replace, not a merge: callers needing a partial
    /// update read the current values first and fill in the unchanged
    /// fields. The identifier is never touched. When the replacement
    /// fails validation the entity keeps its previous state.
    pub fn update(
        &mut self,
        title: String,
        complaint: String,
        report_type: ReportType,
        report_status: ReportStatus,
        name: String,
        email: Email,
    ) -> DomainResult<()> {
        let updated = Self {
            id: self.id,
            title,
            complaint,
            report_type,
            name,
            email,
            report_status,
        };
        updated.validate()?;
        *self = updated;
        Ok(())
    }
}

fn check_text_fields(
    title: &str,
    complaint: &str,
    name: &str,
    email: &Email,
    notification: &mut Notification,
) {
    if name.chars().count() > MAX_NAME_LEN {
        notification.add_error("name cannot be longer than 100");
    }

    if title.chars().count() > MAX_TITLE_LEN {
        notification.add_error("title cannot be longer than 255");
    }

    if title.is_empty() {
        notification.add_error("title cannot be empty");
    }

    if complaint.is_empty() {
        notification.add_error("complaint cannot be empty");
    }

    if complaint.chars().count() > MAX_COMPLAINT_LEN {
        notification.add_error("complaint cannot be longer than 1024");
    }

    notification.add_errors(email.validate());
}

/// Raw field values for a report, as supplied by external callers.
///
/// [`ReportDraft::build`] runs the whole validation pass over the raw
/// input, so enumeration membership errors and text-field errors land in
/// the same notification and are reported together. Typed callers that
/// already hold value objects use [`Report::new`] directly.
#[derive(Debug, Clone, Default)]
pub struct ReportDraft {
    /// `None` generates a fresh identifier.
    pub id: Option<ReportId>,
    pub title: String,
    pub complaint: String,
    pub report_type: String,
    pub name: String,
    pub email: String,
    /// `None` means the default `PENDING` status.
    pub report_status: Option<String>,
}

impl ReportDraft {
    /// Validate every field and construct the entity, accumulating all
    /// violated constraints into one error.
    pub fn build(self) -> DomainResult<Report> {
        let mut notification = Notification::new();
        let email = Email::new(self.email);

        check_text_fields(
            &self.title,
            &self.complaint,
            &self.name,
            &email,
            &mut notification,
        );

        let report_type = if self.report_type.is_empty() {
            notification.add_error("report_type cannot be empty");
            None
        } else {
            match ReportType::parse(&self.report_type) {
                Ok(report_type) => Some(report_type),
                Err(message) => {
                    notification.add_error(message);
                    None
                }
            }
        };

        let report_status = match self.report_status.as_deref() {
            None => Some(ReportStatus::default()),
            Some(value) => match ReportStatus::parse(value) {
                Ok(report_status) => Some(report_status),
                Err(message) => {
                    notification.add_error(message);
                    None
                }
            },
        };

        match (report_type, report_status) {
            (Some(report_type), Some(report_status)) if !notification.has_errors() => Ok(Report {
                id: self.id.unwrap_or_default(),
                title: self.title,
                complaint: self.complaint,
                report_type,
                name: self.name,
                email,
                report_status,
            }),
            _ => Err(DomainError::InvalidReport {
                messages: notification.messages(),
            }),
        }
    }
}

/// Stored shape used for deserialization. Funneling through `TryFrom`
/// revalidates the record, so an invalid payload cannot rehydrate into a
/// live entity.
#[derive(Deserialize)]
struct StoredReport {
    id: ReportId,
    title: String,
    complaint: String,
    report_type: ReportType,
    name: String,
    email: Email,
    report_status: ReportStatus,
}

impl TryFrom<StoredReport> for Report {
    type Error = DomainError;

    fn try_from(stored: StoredReport) -> Result<Self, Self::Error> {
        Report::with_id(
            stored.id,
            stored.title,
            stored.complaint,
            stored.report_type,
            stored.name,
            stored.email,
            stored.report_status,
        )
    }
}

/// Entity equality is identity: two reports are equal iff their
/// identifiers are equal, regardless of other field values.
impl PartialEq for Report {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Report {}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}

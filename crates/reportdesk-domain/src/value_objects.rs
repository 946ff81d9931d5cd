//! Value objects for the report aggregate

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Report identifier, a UUID-based value object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportId(uuid::Uuid);

impl ReportId {
    /// Generate a new random report ID
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(uuid::Uuid::parse_str(s)?))
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for ReportId {
    fn default() -> Self {
        Self::new()
    }
}

/// Processing status of a report. New reports start out pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReportStatus {
    #[default]
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "PROCESSING")]
    Processing,
    #[serde(rename = "COMPLETED")]
    Completed,
}

impl ReportStatus {
    /// Parse from the wire form. Unknown input yields the membership
    /// error message used by report validation.
    pub fn parse(value: &str) -> Result<Self, String> {
        match value {
            "PENDING" => Ok(ReportStatus::Pending),
            "PROCESSING" => Ok(ReportStatus::Processing),
            "COMPLETED" => Ok(ReportStatus::Completed),
            _ => Err("report_status must be a valid ReportStatus".to_string()),
        }
    }

    /// Wire form of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "PENDING",
            ReportStatus::Processing => "PROCESSING",
            ReportStatus::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Category of complaint a report belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportType {
    #[serde(rename = "DATA LEAK")]
    DataLeak,
    #[serde(rename = "INAPPROPRIATE PRACTICES")]
    InappropriatePractices,
    #[serde(rename = "SUSPICIOUS ACTIVITIES")]
    SuspiciousActivities,
    #[serde(rename = "OTHER")]
    Other,
}

impl ReportType {
    /// Parse from the wire form. The underscore spelling is accepted as
    /// well, matching the member names callers see in API documentation.
    pub fn parse(value: &str) -> Result<Self, String> {
        match value {
            "DATA LEAK" | "DATA_LEAK" => Ok(ReportType::DataLeak),
            "INAPPROPRIATE PRACTICES" | "INAPPROPRIATE_PRACTICES" => {
                Ok(ReportType::InappropriatePractices)
            }
            "SUSPICIOUS ACTIVITIES" | "SUSPICIOUS_ACTIVITIES" => {
                Ok(ReportType::SuspiciousActivities)
            }
            "OTHER" => Ok(ReportType::Other),
            _ => Err("report_type must be a valid ReportType".to_string()),
        }
    }

    /// Wire form of the type
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::DataLeak => "DATA LEAK",
            ReportType::InappropriatePractices => "INAPPROPRIATE PRACTICES",
            ReportType::SuspiciousActivities => "SUSPICIOUS ACTIVITIES",
            ReportType::Other => "OTHER",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// RFC 5322 official standard pattern, including quoted local parts and
// bracketed IP-literal domains.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)^(?:[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*|"(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*")@(?:(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?|\[(?:(?:(2(5[0-5]|[0-4][0-9])|1[0-9][0-9]|[1-9]?[0-9]))\.){3}(?:(2(5[0-5]|[0-4][0-9])|1[0-9][0-9]|[1-9]?[0-9])|[a-z0-9-]*[a-z0-9]:(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21-\x5a\x53-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])+)\])$"#,
    )
    .expect("email pattern must compile")
});

/// Email address value object. The address may be empty, since reports can
/// be filed anonymously. Format errors are reported through [`Email::validate`]
/// rather than at construction, so the owning entity can accumulate them
/// together with its other field errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Wrap an address without validating it
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// The raw address string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether no address was supplied
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Format errors for this address. An empty address is always valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.0.is_empty() {
            return errors;
        }

        if self.0.chars().count() > 255 {
            errors.push("email cannot be longer than 255".to_string());
        }

        if !EMAIL_PATTERN.is_match(&self.0) {
            errors.push("email is not valid".to_string());
        }

        errors
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

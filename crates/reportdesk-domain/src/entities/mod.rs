//! Domain entities

mod report;

pub use report::{Report, ReportDraft};

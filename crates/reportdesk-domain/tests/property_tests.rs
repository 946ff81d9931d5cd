//! Property-based tests for report validation

use proptest::prelude::*;

use reportdesk_domain::value_objects::{Email, ReportStatus, ReportType};
use reportdesk_domain::Report;

fn any_report_type() -> impl Strategy<Value = ReportType> {
    prop_oneof![
        Just(ReportType::DataLeak),
        Just(ReportType::InappropriatePractices),
        Just(ReportType::SuspiciousActivities),
        Just(ReportType::Other),
    ]
}

fn any_report_status() -> impl Strategy<Value = ReportStatus> {
    prop_oneof![
        Just(ReportStatus::Pending),
        Just(ReportStatus::Processing),
        Just(ReportStatus::Completed),
    ]
}

proptest! {
    // Any field combination within the stated bounds constructs, and the
    // constructed entity revalidates successfully.
    #[test]
    fn in_bounds_fields_always_construct(
        title in "[a-zA-Z0-9 ]{1,255}",
        complaint in "[a-zA-Z0-9 ]{1,1024}",
        name in "[a-zA-Z ]{0,100}",
        local in "[a-z0-9]{1,20}",
        report_type in any_report_type(),
        report_status in any_report_status(),
    ) {
        let email = Email::new(format!("{local}@example.com"));
        let report = Report::new(
            title.clone(),
            complaint.clone(),
            report_type,
            name.clone(),
            email,
            report_status,
        );

        prop_assert!(report.is_ok());
        let report = report.unwrap();
        prop_assert!(report.validate().is_ok());
        prop_assert_eq!(report.title(), title.as_str());
        prop_assert_eq!(report.complaint(), complaint.as_str());
    }

    // Oversized fields never construct, regardless of the other values.
    #[test]
    fn out_of_bounds_title_never_constructs(
        title in "[a-zA-Z0-9 ]{256,300}",
        complaint in "[a-zA-Z0-9 ]{1,64}",
        report_type in any_report_type(),
    ) {
        let report = Report::new(
            title,
            complaint,
            report_type,
            String::new(),
            Email::default(),
            ReportStatus::default(),
        );
        prop_assert!(report.is_err());
    }

    // Reports survive a serde round-trip with all field values intact.
    #[test]
    fn serde_round_trip_preserves_fields(
        title in "[a-zA-Z0-9 ]{1,64}",
        complaint in "[a-zA-Z0-9 ]{1,64}",
        report_type in any_report_type(),
        report_status in any_report_status(),
    ) {
        let report = Report::new(
            title,
            complaint,
            report_type,
            "Jane".to_string(),
            Email::new("jane@example.com"),
            report_status,
        ).unwrap();

        let json = serde_json::to_string(&report).unwrap();
        let restored: Report = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(restored.id(), report.id());
        prop_assert_eq!(restored.title(), report.title());
        prop_assert_eq!(restored.complaint(), report.complaint());
        prop_assert_eq!(restored.report_type(), report.report_type());
        prop_assert_eq!(restored.report_status(), report.report_status());
        prop_assert_eq!(restored.email(), report.email());
    }
}

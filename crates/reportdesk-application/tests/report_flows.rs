//! End-to-end flows through the application services and the in-memory store

use std::sync::Arc;

use reportdesk_application::{
    ApplicationError, CreateReportCommand, ListReportsQuery, ReportService, UpdateReportCommand,
};
use reportdesk_storage::InMemoryReportRepository;

fn service() -> ReportService<InMemoryReportRepository> {
    ReportService::new(Arc::new(InMemoryReportRepository::new()))
}

#[tokio::test]
async fn full_report_lifecycle() {
    let service = service();

    // File a report.
    let id = service
        .create(CreateReportCommand {
            title: "Customer data exposed".to_string(),
            complaint: "Found a public bucket with customer records".to_string(),
            report_type: "DATA LEAK".to_string(),
            name: "Jane Smith".to_string(),
            email: "jane.smith@example.com".to_string(),
            report_status: None,
        })
        .await
        .unwrap();

    // It shows up in the listing.
    let listing = service.list(ListReportsQuery::default()).await.unwrap();
    assert_eq!(listing.meta.total, 1);
    assert_eq!(listing.data[0].id, id);

    // Fetch and check the stored fields.
    let report = service.get(&id).await.unwrap();
    assert_eq!(report.title, "Customer data exposed");
    assert_eq!(report.report_type, "DATA LEAK");
    assert_eq!(report.report_status, "PENDING");

    // Move it through processing.
    service
        .update(UpdateReportCommand {
            id: id.clone(),
            report_status: Some("PROCESSING".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(service.get(&id).await.unwrap().report_status, "PROCESSING");

    service
        .update(UpdateReportCommand {
            id: id.clone(),
            report_status: Some("COMPLETED".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(service.get(&id).await.unwrap().report_status, "COMPLETED");

    // Delete and verify it is gone.
    service.delete(&id).await.unwrap();
    assert!(matches!(
        service.get(&id).await.unwrap_err(),
        ApplicationError::ReportNotFound(_)
    ));
    let listing = service.list(ListReportsQuery::default()).await.unwrap();
    assert_eq!(listing.meta.total, 0);
}

#[tokio::test]
async fn listing_combines_search_sort_and_pagination() {
    let service = service();

    for (title, name) in [
        ("B security hole", "Alice"),
        ("A security hole", "Bob"),
        ("C security hole", "Carol"),
        ("Unrelated noise", "Dave"),
    ] {
        service
            .create(CreateReportCommand {
                title: title.to_string(),
                complaint: "Details".to_string(),
                report_type: "SUSPICIOUS ACTIVITIES".to_string(),
                name: name.to_string(),
                email: String::new(),
                report_status: None,
            })
            .await
            .unwrap();
    }

    let response = service
        .list(ListReportsQuery {
            search_query: Some("SECURITY".to_string()),
            per_page: Some(2),
            ..Default::default()
        })
        .await
        .unwrap();

    // Three matches, first page of two, sorted by title ascending.
    assert_eq!(response.meta.total, 3);
    let titles: Vec<_> = response.data.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["A security hole", "B security hole"]);

    let page2 = service
        .list(ListReportsQuery {
            search_query: Some("SECURITY".to_string()),
            per_page: Some(2),
            current_page: 2,
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(page2.data.len(), 1);
    assert_eq!(page2.data[0].title, "C security hole");
}

#[tokio::test]
async fn invalid_submissions_never_persist() {
    let service = service();

    let err = service
        .create(CreateReportCommand {
            title: String::new(),
            complaint: String::new(),
            report_type: "DATA LEAK".to_string(),
            name: String::new(),
            email: String::new(),
            report_status: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::InvalidReport(_)));

    let listing = service.list(ListReportsQuery::default()).await.unwrap();
    assert_eq!(listing.meta.total, 0);
}

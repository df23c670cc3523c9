use anyhow::Result;
use httpmock::prelude::*;
use midori_teehaus::core::{ContactField, SubmissionStatus};
use midori_teehaus::{ContactFormViewModel, HttpBackend, SiteConfig, SubmitError};
use serde_json::json;

fn backend_for(server: &MockServer) -> HttpBackend {
    HttpBackend::new(&SiteConfig::new(server.base_url()))
}

fn ava() -> ContactFormViewModel {
    let mut contact = ContactFormViewModel::new();
    contact.update_field(ContactField::Name, "Ava");
    contact.update_field(ContactField::Email, "ava@x.com");
    contact.update_field(ContactField::Subject, "");
    contact.update_field(ContactField::Message, "Hi");
    contact
}

#[tokio::test]
async fn test_successful_submission_clears_form() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/contact")
            .json_body(json!({"name": "Ava", "email": "ava@x.com", "subject": "", "message": "Hi"}));
        then.status(200).json_body(json!({"ok": true}));
    });

    let mut contact = ava();
    contact.submit(&backend_for(&server)).await?;

    api_mock.assert();
    assert!(matches!(contact.status(), SubmissionStatus::Success(_)));
    let form = contact.form();
    assert_eq!(form.name, "");
    assert_eq!(form.email, "");
    assert_eq!(form.subject, "");
    assert_eq!(form.message, "");
    Ok(())
}

#[tokio::test]
async fn test_http_500_keeps_form() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(500);
    });

    let mut contact = ava();
    let err = contact.submit(&backend_for(&server)).await.unwrap_err();

    assert!(matches!(err, SubmitError::Status(500)));
    match contact.status() {
        SubmissionStatus::Error(msg) => assert!(!msg.is_empty()),
        other => panic!("expected error status, got {:?}", other),
    }
    assert_eq!(contact.form().name, "Ava");
    assert_eq!(contact.form().message, "Hi");
}

#[tokio::test]
async fn test_ok_false_keeps_form() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(200).json_body(json!({"ok": false}));
    });

    let mut contact = ava();
    let err = contact.submit(&backend_for(&server)).await.unwrap_err();

    assert!(matches!(err, SubmitError::Rejected));
    assert!(matches!(contact.status(), SubmissionStatus::Error(_)));
    assert_eq!(contact.form().email, "ava@x.com");
}

#[tokio::test]
async fn test_unexpected_body_is_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(200).body("thanks!");
    });

    let mut contact = ava();
    assert!(contact.submit(&backend_for(&server)).await.is_err());
    assert_eq!(
        contact.status(),
        &SubmissionStatus::Error("Unable to send right now.".to_string())
    );
}

#[tokio::test]
async fn test_retry_after_error_succeeds() -> Result<()> {
    let server = MockServer::start();
    let mut failing = server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(503);
    });

    let backend = backend_for(&server);
    let mut contact = ava();
    assert!(contact.submit(&backend).await.is_err());
    failing.delete();

    let ok_mock = server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(200).json_body(json!({"ok": true}));
    });

    contact.submit(&backend).await?;
    ok_mock.assert();
    assert!(contact.form().is_empty());
    Ok(())
}

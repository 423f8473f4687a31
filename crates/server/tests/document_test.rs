//! # Document Context Tests
//!
//! Upload a generated PDF, then verify its extracted text travels as a
//! document-context system message on the next chat turn.

mod common;

use anyhow::Result;
use common::TestApp;
use httpmock::Method;
use nyaya_test_utils::helpers::generate_test_pdf;
use reqwest::multipart::{Form, Part};
use serde_json::{json, Value};

async fn upload_pdf(app: &TestApp, session_id: &str, file_name: &str, bytes: Vec<u8>) -> Result<reqwest::Response> {
    let form = Form::new().text("session_id", session_id.to_string()).part(
        "file",
        Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("application/pdf")?,
    );
    Ok(app
        .client
        .post(format!("{}/document", app.address))
        .multipart(form)
        .send()
        .await?)
}

#[tokio::test]
async fn test_upload_installs_document_context() -> Result<()> {
    let app = TestApp::spawn().await?;
    let session_id = uuid::Uuid::new_v4().to_string();

    let pdf = generate_test_pdf("The tenant shall pay rent of 15000 rupees monthly.")?;
    let response = upload_pdf(&app, &session_id, "rent_agreement.pdf", pdf).await?;
    assert!(
        response.status().is_success(),
        "upload failed with status: {}",
        response.status()
    );
    let body: Value = response.json().await?;
    assert_eq!(body["result"]["source"], "rent_agreement.pdf");
    assert!(body["result"]["extracted_chars"].as_u64().unwrap_or(0) > 0);

    // The next chat turn must carry the context as its own system message.
    let completion_mock = app.mock_server.mock(|when, then| {
        when.method(Method::POST)
            .path("/v1/chat/completions")
            .body_contains("USER DOCUMENT CONTEXT");
        then.status(200).json_body(
            json!({"choices": [{"message": {"role": "assistant", "content": "The rent is 15000 rupees."}}]}),
        );
    });

    let chat = app
        .client
        .post(format!("{}/chat", app.address))
        .json(&json!({"session_id": session_id, "prompt": "What is the monthly rent?"}))
        .send()
        .await?;
    assert!(chat.status().is_success());
    completion_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_chat_without_document_sends_no_context_message() -> Result<()> {
    let app = TestApp::spawn().await?;

    let context_mock = app.mock_server.mock(|when, then| {
        when.method(Method::POST)
            .path("/v1/chat/completions")
            .body_contains("USER DOCUMENT CONTEXT");
        then.status(200)
            .json_body(json!({"choices": [{"message": {"role": "assistant", "content": "?"}}]}));
    });
    let plain_mock = app.mock_server.mock(|when, then| {
        when.method(Method::POST).path("/v1/chat/completions");
        then.status(200).json_body(
            json!({"choices": [{"message": {"role": "assistant", "content": "No context needed."}}]}),
        );
    });

    let chat = app
        .client
        .post(format!("{}/chat", app.address))
        .json(&json!({
            "session_id": uuid::Uuid::new_v4().to_string(),
            "prompt": "What is anticipatory bail?",
        }))
        .send()
        .await?;
    assert!(chat.status().is_success());

    assert_eq!(context_mock.hits(), 0);
    assert_eq!(plain_mock.hits(), 1);
    Ok(())
}

#[tokio::test]
async fn test_invalid_pdf_is_rejected_with_a_typed_error() -> Result<()> {
    let app = TestApp::spawn().await?;
    let session_id = uuid::Uuid::new_v4().to_string();

    let response = upload_pdf(
        &app,
        &session_id,
        "broken.pdf",
        b"this is not a pdf".to_vec(),
    )
    .await?;

    assert_eq!(response.status(), 422);
    let body: Value = response.json().await?;
    assert!(body["error"]
        .as_str()
        .unwrap_or_default()
        .contains("Could not read the uploaded PDF"));
    Ok(())
}

#[tokio::test]
async fn test_new_upload_replaces_the_previous_document() -> Result<()> {
    let app = TestApp::spawn().await?;
    let session_id = uuid::Uuid::new_v4().to_string();

    let first = generate_test_pdf("First agreement.")?;
    upload_pdf(&app, &session_id, "first.pdf", first).await?;

    let second = generate_test_pdf("Second agreement.")?;
    let response = upload_pdf(&app, &session_id, "second.pdf", second).await?;
    assert!(response.status().is_success());
    let body: Value = response.json().await?;
    assert_eq!(body["result"]["source"], "second.pdf");

    // Exactly one document context remains on the session.
    let sessions = app.app_state.sessions.read().expect("session store lock");
    let session = sessions.get(&session_id).expect("session exists");
    let document = session.document.as_ref().expect("document is set");
    assert_eq!(document.source, "second.pdf");
    Ok(())
}

//! # Document Drafter Tests
//!
//! Drafting is single-shot, but the most recent draft is remembered on the
//! session so it can be downloaded as a plain-text attachment.

mod common;

use anyhow::Result;
use common::TestApp;
use nyaya_test_utils::MockAiProvider;
use serde_json::{json, Value};
use std::sync::Arc;

fn draft_payload(session_id: &str) -> Value {
    json!({
        "session_id": session_id,
        "draft_type": "Rental Agreement",
        "jurisdiction": "Pune, Maharashtra",
        "party_one": "A. Landlord",
        "party_two": "B. Tenant",
        "key_terms": "Rent 20000 INR per month, two month notice period.",
    })
}

#[tokio::test]
async fn test_draft_then_download() -> Result<()> {
    let draft_text = "RENTAL AGREEMENT\n\nThis agreement is made between [___] and [___].";
    let provider = MockAiProvider::with_response(draft_text);
    let app = TestApp::spawn_with_provider(Arc::new(provider.clone())).await?;
    let session_id = uuid::Uuid::new_v4().to_string();

    let response = app
        .client
        .post(format!("{}/draft", app.address))
        .json(&draft_payload(&session_id))
        .send()
        .await?;
    assert!(response.status().is_success());
    let body: Value = response.json().await?;
    assert_eq!(body["result"]["text"], draft_text);

    // Every form field must reach the templated prompt.
    let calls = provider.get_calls();
    assert_eq!(calls.len(), 1);
    let prompt = &calls[0][0].content;
    for expected in ["Rental Agreement", "Pune, Maharashtra", "A. Landlord", "B. Tenant"] {
        assert!(prompt.contains(expected), "prompt missing {expected}");
    }

    let download = app
        .client
        .get(format!("{}/draft/download", app.address))
        .query(&[("session_id", session_id.as_str())])
        .send()
        .await?;
    assert!(download.status().is_success());
    let disposition = download
        .headers()
        .get("content-disposition")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        disposition.contains("Rental Agreement_Draft.txt"),
        "unexpected disposition: {disposition}"
    );
    assert_eq!(download.text().await?, draft_text);
    Ok(())
}

#[tokio::test]
async fn test_download_without_a_draft_is_not_found() -> Result<()> {
    let provider = MockAiProvider::with_response("unused");
    let app = TestApp::spawn_with_provider(Arc::new(provider)).await?;

    let download = app
        .client
        .get(format!("{}/draft/download", app.address))
        .query(&[("session_id", "fresh-session")])
        .send()
        .await?;

    assert_eq!(download.status(), 404);
    Ok(())
}

#[tokio::test]
async fn test_incomplete_form_is_rejected() -> Result<()> {
    let provider = MockAiProvider::with_response("should never be called");
    let app = TestApp::spawn_with_provider(Arc::new(provider.clone())).await?;

    let mut payload = draft_payload("some-session");
    payload["key_terms"] = json!("");
    let response = app
        .client
        .post(format!("{}/draft", app.address))
        .json(&payload)
        .send()
        .await?;

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await?;
    assert!(body["error"]
        .as_str()
        .unwrap_or_default()
        .contains("party names and key terms"));
    assert!(provider.get_calls().is_empty());
    Ok(())
}

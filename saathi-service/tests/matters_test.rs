mod common;

use common::{error_message, test_config, TestApp};
use saathi_service::services::providers::mock::MockTextProvider;
use serde_json::json;

#[tokio::test]
async fn lists_seeded_matters() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/matters").await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let matters = body["matters"].as_array().expect("matters array");
    assert_eq!(matters.len(), 2);
    assert_eq!(matters[0]["title"], "ABC Pvt. Ltd. v. Union of India");
    assert!(matters[0]["nextHearing"].is_string());
    assert!(matters[0]["lastOrder"].is_string());
}

#[tokio::test]
async fn gets_one_matter_or_404() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/matters/2").await;
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["title"], "XYZ Industries v. State of Maharashtra");

    let response = app.get("/api/matters/999").await;
    assert_eq!(error_message(response, 404).await, "Matter not found");
}

#[tokio::test]
async fn loads_matters_from_file() {
    let path = std::env::temp_dir().join(format!("saathi-matters-{}.json", std::process::id()));
    let matters = json!([{
        "id": "slp-42",
        "title": "PQR Ltd. v. State of Kerala",
        "court": "Supreme Court of India",
        "stage": "Admission",
        "parties": "PQR Ltd. vs State of Kerala",
        "nextHearing": "3 Nov 2025",
        "lastOrder": "10 Oct 2025"
    }]);
    tokio::fs::write(&path, matters.to_string())
        .await
        .expect("write matters file");

    let mut config = test_config();
    config.matters_file = Some(path.to_string_lossy().into_owned());
    let app = TestApp::spawn_with_config(config, MockTextProvider::echo()).await;

    let body: serde_json::Value = app
        .get("/api/matters")
        .await
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(body["matters"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["matters"][0]["id"], "slp-42");

    let _ = tokio::fs::remove_file(&path).await;
}

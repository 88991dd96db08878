//! Integration tests for `ContextClient::verify_contract` against a mocked
//! store: one healthy store, one with a broken (undersized) corpus, one
//! fully unreachable.

use std::time::Duration;

use context_client::{ContextClient, ContextClientConfig};

fn client_for(server: &mockito::ServerGuard) -> ContextClient {
    let config = ContextClientConfig::new(server.url()).with_timeout(Duration::from_secs(2));
    ContextClient::new(config).expect("client must build")
}

fn large_markdown() -> String {
    "# Fascinante Digital\n\n".to_string() + &"Datos del negocio. ".repeat(200)
}

/// **Test: a healthy store passes all four checks.**
#[tokio::test]
async fn healthy_store_passes_all_checks() {
    let mut server = mockito::Server::new_async().await;

    let _refresh = server
        .mock("POST", "/api/context/refresh")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok": true, "size": 4096}"#)
        .create_async()
        .await;
    let _stats = server
        .mock("GET", "/api/context/stats")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"hasData": true, "stale": false, "sources": {}}"#)
        .create_async()
        .await;
    let _doc = server
        .mock("GET", "/api/context")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{"md": {}, "meta": {{}}}}"#,
            serde_json::to_string(&large_markdown()).unwrap()
        ))
        .create_async()
        .await;
    let _prompt = server
        .mock("GET", "/api/context/prompt")
        .with_status(200)
        .with_body("CONTEXTO actualizado del negocio...")
        .create_async()
        .await;

    let report = client_for(&server).verify_contract().await;

    assert!(report.all_passed(), "report: {:?}", report);
    assert_eq!(report.checks.len(), 4);
}

/// **Test: an undersized corpus fails the refresh and document checks but the report still lists all four.**
#[tokio::test]
async fn undersized_corpus_fails_size_checks() {
    let mut server = mockito::Server::new_async().await;

    let _refresh = server
        .mock("POST", "/api/context/refresh")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok": true, "size": 12}"#)
        .create_async()
        .await;
    let _stats = server
        .mock("GET", "/api/context/stats")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"hasData": true, "stale": false, "sources": {}}"#)
        .create_async()
        .await;
    let _doc = server
        .mock("GET", "/api/context")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r##"{"md": "# vacío", "meta": {}}"##)
        .create_async()
        .await;
    let _prompt = server
        .mock("GET", "/api/context/prompt")
        .with_status(200)
        .with_body("CONTEXTO mínimo")
        .create_async()
        .await;

    let report = client_for(&server).verify_contract().await;

    assert!(!report.all_passed());
    assert_eq!(report.checks.len(), 4);
    let failed: Vec<&str> = report
        .checks
        .iter()
        .filter(|c| !c.passed)
        .map(|c| c.name)
        .collect();
    assert_eq!(failed, vec!["refresh", "document"]);
}

/// **Test: a prompt without the marker fails the prompt check.**
#[tokio::test]
async fn prompt_without_marker_fails() {
    let mut server = mockito::Server::new_async().await;

    let _refresh = server
        .mock("POST", "/api/context/refresh")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok": true, "size": 4096}"#)
        .create_async()
        .await;
    let _stats = server
        .mock("GET", "/api/context/stats")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"hasData": true, "stale": false, "sources": {}}"#)
        .create_async()
        .await;
    let _doc = server
        .mock("GET", "/api/context")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{"md": {}, "meta": {{}}}}"#,
            serde_json::to_string(&large_markdown()).unwrap()
        ))
        .create_async()
        .await;
    let _prompt = server
        .mock("GET", "/api/context/prompt")
        .with_status(200)
        .with_body("an unrelated body")
        .create_async()
        .await;

    let report = client_for(&server).verify_contract().await;

    let prompt_check = report.checks.iter().find(|c| c.name == "prompt").unwrap();
    assert!(!prompt_check.passed);
}

/// **Test: an unreachable store fails every check instead of erroring out.**
#[tokio::test]
async fn unreachable_store_fails_every_check() {
    let config = ContextClientConfig::new("http://127.0.0.1:9")
        .with_timeout(Duration::from_secs(1));
    let client = ContextClient::new(config).expect("client must build");

    let report = client.verify_contract().await;

    assert_eq!(report.checks.len(), 4);
    assert!(report.checks.iter().all(|c| !c.passed));
}

//! Endpoint tests against the fully assembled application router.

use axum_test::TestServer;
use gitops_showcase::api::{AppState, router};
use gitops_showcase::response::{ProjectInfo, TechIcon};
use serde_json::Value;
use std::path::PathBuf;
use time::format_description::well_known::Rfc3339;

fn public_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../public")
}

fn test_server() -> TestServer {
    let app = router(AppState::new(), &public_dir());
    TestServer::new(app).expect("create test server")
}

#[tokio::test]
async fn health_reports_healthy_with_nonnegative_uptime() {
    let server = test_server();

    let response = server.get("/api/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime"].as_f64().expect("uptime is a number") >= 0.0);

    let timestamp = body["timestamp"].as_str().expect("timestamp is a string");
    assert!(
        time::OffsetDateTime::parse(timestamp, &Rfc3339).is_ok(),
        "timestamp should be RFC 3339, got {timestamp}"
    );
}

#[tokio::test]
async fn project_info_returns_the_showcase_document() {
    let server = test_server();

    let response = server.get("/api/project-info").await;
    response.assert_status_ok();

    let info: ProjectInfo = response.json();
    assert!(!info.technologies.is_empty());
    assert!(!info.features.is_empty());
    assert_eq!(info.technologies[0].name, "AWS EKS");
    assert_eq!(info.technologies[0].icon, TechIcon::Cloud);
    assert_eq!(
        info.repository,
        "https://github.com/Amitabh-DevOps/GitOps-with-monitoring.git"
    );
}

#[tokio::test]
async fn project_info_serializes_all_architecture_keys() {
    let server = test_server();

    let body: Value = server.get("/api/project-info").await.json();
    let architecture = body["architecture"]
        .as_object()
        .expect("architecture is an object");

    assert_eq!(architecture.len(), 4);
    for key in ["infrastructure", "networking", "gitops", "monitoring"] {
        assert!(
            architecture.get(key).and_then(Value::as_str).is_some(),
            "missing architecture key {key}"
        );
    }
}

#[tokio::test]
async fn project_info_preserves_technology_order() {
    let server = test_server();

    let info: ProjectInfo = server.get("/api/project-info").await.json();
    let names: Vec<&str> = info.technologies.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "AWS EKS",
            "Terraform",
            "ArgoCD",
            "Prometheus",
            "Grafana",
            "Helm",
            "Kubernetes"
        ]
    );
}

#[tokio::test]
async fn unmatched_routes_fall_back_to_the_html_entry_point() {
    let server = test_server();

    for path in ["/", "/some/client/route", "/technologies"] {
        let response = server.get(path).await;
        response.assert_status_ok();
        assert!(
            response.text().contains("<!DOCTYPE html>"),
            "{path} should serve the HTML entry point"
        );
    }
}

#[tokio::test]
async fn static_assets_are_served_from_the_public_directory() {
    let server = test_server();

    let response = server.get("/app.js").await;
    response.assert_status_ok();
    assert!(response.text().contains("iconMap"));

    let response = server.get("/styles.css").await;
    response.assert_status_ok();
    assert!(response.text().contains("fadeInUp"));
}

#[tokio::test]
async fn api_docs_are_mounted() {
    let server = test_server();

    let response = server.get("/api-docs").await;
    response.assert_status_ok();
}

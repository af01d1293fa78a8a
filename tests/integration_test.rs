//! Integration tests for the schema_audit commands.
//!
//! These tests drive `run_command()` end-to-end with pages written to temporary
//! files or served by a `wiremock` mock server, and a mock validation API.
//! They do not make real network requests.

use clap::Parser;
use serde_json::Value;
use std::io::Write;
use tempfile::NamedTempFile;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use schema_audit::{run_command, Cli, CommandOutcome};

const PRODUCT_PAGE: &str = r#"<html lang="en"><head>
    <title>Widget Pro | Acme Shop</title>
</head><body>
    <div class="product">
        <h1 class="product-title">Widget Pro</h1>
        <img src="/img/widget.png" alt="Widget Pro">
        <p class="product-description">A sturdy widget for every desk.</p>
        <span class="price">$19.99</span>
        <span class="availability">In stock</span>
    </div>
</body></html>"#;

const MIXED_SCHEMAS_PAGE: &str = r#"<html><head>
    <script type="application/ld+json">
        {"@context": "https://schema.org", "@type": "BreadcrumbList", "itemListElement": [
            {"@type": "ListItem", "position": 1, "item": {"@id": "https://acme.example/", "name": "Home"}}
        ]}
    </script>
    <script type="application/ld+json">
        {"@context": "https://schema.org", "@type": "Product", "name": "Widget"}
    </script>
</head><body></body></html>"#;

const WIDGET_PAGE: &str = r#"<html><head><title>Widget</title></head>
    <body><img src="widget.png"></body></html>"#;

fn page_file(html: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(html.as_bytes())
        .expect("Failed to write temp file");
    file
}

async fn run(args: &[&str]) -> CommandOutcome {
    let mut argv = vec!["schema_audit", "--output", "json"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).expect("Should parse arguments");
    run_command(&cli).await.expect("Command should succeed")
}

fn json(outcome: &CommandOutcome) -> Value {
    serde_json::from_str(&outcome.output).expect("Output should be JSON")
}

#[tokio::test]
async fn test_validate_reports_invalid_schema() {
    let file = page_file(MIXED_SCHEMAS_PAGE);
    let source = file.path().to_str().unwrap();

    let outcome = run(&["validate", source, "--base-url", "https://acme.example/widget"]).await;
    assert!(!outcome.success);

    let result = json(&outcome);
    assert_eq!(result["valid"], false);
    let schemas = result["schema_results"].as_array().unwrap();
    assert_eq!(schemas.len(), 2);
    assert_eq!(schemas[0]["type"], "BreadcrumbList");
    assert_eq!(schemas[0]["valid"], true);
    assert_eq!(schemas[1]["type"], "Product");
    let errors: Vec<&str> = schemas[1]["errors"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert_eq!(
        errors,
        vec![
            "Missing required field: image",
            "Missing required field: description"
        ]
    );
}

#[tokio::test]
async fn test_validate_page_without_schemas_succeeds() {
    let file = page_file("<html><body><p>plain</p></body></html>");
    let outcome = run(&["validate", file.path().to_str().unwrap()]).await;
    assert!(outcome.success);
    let result = json(&outcome);
    assert_eq!(result["valid"], true);
    assert!(result["schema_results"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_validate_missing_file_is_a_system_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.html");

    let outcome = run(&["validate", missing.to_str().unwrap()]).await;
    assert!(!outcome.success);
    let result = json(&outcome);
    assert_eq!(result["schema_results"][0]["type"], "System error");
    assert!(result["schema_results"][0]["errors"][0]
        .as_str()
        .unwrap()
        .contains("nope.html"));
}

#[tokio::test]
async fn test_types_lists_documentation_links() {
    let file = page_file(MIXED_SCHEMAS_PAGE);
    let outcome = run(&["types", file.path().to_str().unwrap()]).await;
    let entries = json(&outcome);
    let types: Vec<&str> = entries
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e["type"].as_str())
        .collect();
    assert_eq!(types, vec!["BreadcrumbList", "Product"]);
    assert!(entries[1]["documentation"]
        .as_str()
        .unwrap()
        .ends_with("/product"));
}

#[tokio::test]
async fn test_audit_fetched_page_issues_only() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/widget"))
        .respond_with(ResponseTemplate::new(200).set_body_string(WIDGET_PAGE))
        .mount(&server)
        .await;

    let url = format!("{}/widget", server.uri());
    let outcome = run(&["audit", url.as_str(), "--issues-only"]).await;
    assert!(outcome.success);

    let report = json(&outcome);
    assert!(report["score"].as_u64().unwrap() < 50);
    let items = report["items"].as_array().unwrap();
    assert!(items
        .iter()
        .all(|i| i["status"] == "failed" || i["status"] == "warning"));
    let ids: Vec<&str> = items.iter().filter_map(|i| i["id"].as_str()).collect();
    assert!(ids.contains(&"meta-description"));
    assert!(ids.contains(&"img-alt-text"));
    assert!(!ids.contains(&"title-tag"));
}

#[tokio::test]
async fn test_audit_category_filter() {
    let file = page_file(WIDGET_PAGE);
    let outcome = run(&[
        "audit",
        file.path().to_str().unwrap(),
        "--base-url",
        "https://shop.example/widget",
        "--category",
        "critical",
    ])
    .await;
    let report = json(&outcome);
    let items = report["items"].as_array().unwrap();
    assert_eq!(items.len(), 5);
    assert!(items.iter().all(|i| i["category"] == "critical"));
}

#[tokio::test]
async fn test_audit_fetch_failure_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let url = format!("{}/gone", server.uri());
    let cli = Cli::try_parse_from(["schema_audit", "audit", url.as_str()]).unwrap();
    let err = run_command(&cli).await.unwrap_err();
    assert!(format!("{:#}", err).contains("404"));
}

#[tokio::test]
async fn test_generate_with_validation_api() {
    let api = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/validate"))
        .and(query_param("url", "https://shop.example/products/widget-pro"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "valid": true,
            "issues": ["Missing field \"review\""]
        })))
        .expect(1)
        .mount(&api)
        .await;

    let file = page_file(PRODUCT_PAGE);
    let validation_url = format!("{}/validate", api.uri());
    let outcome = run(&[
        "generate",
        file.path().to_str().unwrap(),
        "--base-url",
        "https://shop.example/products/widget-pro",
        "--validate",
        "--validation-url",
        validation_url.as_str(),
    ])
    .await;

    let result = json(&outcome);
    let generated = &result["generated"];
    assert_eq!(generated["schema_type"], "Product");
    assert_eq!(generated["source"], "auto-detected");
    assert_eq!(generated["schema"]["offers"]["price"], "19.99");
    let confidence = generated["confidence"].as_f64().unwrap();
    assert!((confidence - 0.68).abs() < 1e-9, "confidence was {}", confidence);

    let scripts = result["scripts"].as_str().unwrap();
    assert!(scripts.contains("data-source=\"auto-generated\""));
    assert!(!scripts.contains("validation-pending"));
}

#[tokio::test]
async fn test_generate_unreachable_validation_api_still_injects() {
    let file = page_file(PRODUCT_PAGE);
    let outcome = run(&[
        "generate",
        file.path().to_str().unwrap(),
        "--base-url",
        "https://shop.example/products/widget-pro",
        "--validate",
        "--validation-url",
        "http://127.0.0.1:1/validate",
    ])
    .await;

    let result = json(&outcome);
    let confidence = result["generated"]["confidence"].as_f64().unwrap();
    assert!((confidence - 0.85 * 0.7).abs() < 1e-9);
    assert!(result["scripts"].as_str().unwrap().contains("auto-generated"));
}

#[tokio::test]
async fn test_generate_skips_page_with_schema() {
    let existing = r#"<script type="application/ld+json">
        {"@context": "https://schema.org", "@type": "Product", "name": "Widget Pro"}
    </script></head>"#;
    let file = page_file(&PRODUCT_PAGE.replace("</head>", existing));
    let outcome = run(&[
        "generate",
        file.path().to_str().unwrap(),
        "--base-url",
        "https://shop.example/products/widget-pro",
    ])
    .await;
    let result = json(&outcome);
    assert!(result["generated"].is_null());
    assert_eq!(result["scripts"], "");
}

#[tokio::test]
async fn test_tools_links() {
    let outcome = run(&["tools", "https://example.com/page?id=7"]).await;
    let links = json(&outcome);
    assert_eq!(links["url"], "https://example.com/page?id=7");
    assert!(links["rich_results_test"]
        .as_str()
        .unwrap()
        .contains("https%3A%2F%2Fexample.com%2Fpage%3Fid%3D7"));
}

#[tokio::test]
async fn test_tools_rejects_relative_url() {
    let cli = Cli::try_parse_from(["schema_audit", "tools", "/relative/path"]).unwrap();
    assert!(run_command(&cli).await.is_err());
}

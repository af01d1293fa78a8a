// Document module tests.

use super::*;
use chrono::{TimeZone, Utc};
use serde_json::json;

fn snapshot(html: &str) -> DocumentSnapshot {
    DocumentSnapshot::parse(html, "https://deals.example/store/acme").unwrap()
}

#[test]
fn test_parse_rejects_relative_url() {
    assert!(DocumentSnapshot::parse("<html></html>", "/store/acme").is_err());
}

#[test]
fn test_path_is_lowercased() {
    let snap = DocumentSnapshot::parse("<html></html>", "https://deals.example/Blog/Post-1").unwrap();
    assert_eq!(snap.path(), "/blog/post-1");
}

#[test]
fn test_first_text_tries_selectors_in_order() {
    let snap = snapshot(
        r#"<body><h1>  </h1><div class="product-title">Acme Kettle</div><h2>Other</h2></body>"#,
    );
    assert_eq!(
        snap.first_text(&["h1", ".product-title", "h2"]),
        Some("Acme Kettle".to_string())
    );
    assert_eq!(snap.first_text(&[".missing"]), None);
}

#[test]
fn test_first_attr() {
    let snap = snapshot(r#"<body><img src=""><img src="/img/kettle.png"></body>"#);
    assert_eq!(
        snap.first_attr(&["img"], "src"),
        Some("/img/kettle.png".to_string())
    );
}

#[test]
fn test_meta_property_and_open_graph() {
    let snap = snapshot(
        r#"<html><head><meta property="og:site_name" content="Deal Hub"></head></html>"#,
    );
    assert_eq!(snap.meta_property("og:site_name"), Some("Deal Hub".to_string()));
    assert_eq!(snap.open_graph().len(), 1);
}

#[test]
fn test_body_text_skips_scripts_and_styles() {
    let snap = snapshot(
        r#"<body><p>Save  big</p><script>var hidden = 1;</script><style>p{}</style><p>today</p></body>"#,
    );
    assert_eq!(snap.body_text(), "Save big today");
}

#[test]
fn test_absolute_url() {
    let snap = snapshot("<html></html>");
    assert_eq!(
        snap.absolute_url("/img/a.png"),
        "https://deals.example/img/a.png"
    );
    assert_eq!(
        snap.absolute_url("https://cdn.example/b.png"),
        "https://cdn.example/b.png"
    );
}

#[test]
fn test_injected_scripts_are_visible_to_readers() {
    let mut snap = snapshot(
        r#"<html><head><script type="application/ld+json">{"@type":"WebSite"}</script></head></html>"#,
    );
    let id = snap.inject_schema(&json!({"@type": "Product"}), "auto-generated");
    let scripts = snap.json_ld_scripts();
    assert_eq!(scripts.len(), 2);
    assert!(scripts[1].contains("Product"));

    assert!(snap.remove_injected(id));
    assert!(!snap.remove_injected(id));
    assert_eq!(snap.json_ld_scripts().len(), 1);
}

#[test]
fn test_render_injected_scripts_escapes_closing_tags() {
    let mut snap = snapshot("<html></html>");
    snap.inject_schema(&json!({"name": "</script><b>"}), "auto-generated");
    let rendered = snap.render_injected_scripts();
    assert!(rendered.starts_with(
        r#"<script type="application/ld+json" data-source="auto-generated">"#
    ));
    assert!(!rendered.contains("</script><b>"));
    assert!(rendered.ends_with("</script>"));
}

#[test]
fn test_with_now_and_last_modified() {
    let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
    let modified = Utc.with_ymd_and_hms(2026, 2, 1, 8, 30, 0).unwrap();
    let snap = snapshot("<html></html>")
        .with_now(now)
        .with_last_modified(Some(modified));
    assert_eq!(snap.now(), now);
    assert_eq!(snap.last_modified(), Some(modified));
}

#[tokio::test]
async fn test_load_snapshot_from_file_with_base_url() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "<html><head><title>Coupons</title></head></html>").unwrap();
    let client = reqwest::Client::new();

    let path = file.path().to_string_lossy().to_string();
    let snap = load_snapshot(&path, Some("https://deals.example/coupons"), &client)
        .await
        .unwrap();
    assert_eq!(snap.title(), Some("Coupons".to_string()));
    assert_eq!(snap.url().as_str(), "https://deals.example/coupons");
    assert!(snap.last_modified().is_some());
}

#[tokio::test]
async fn test_load_snapshot_from_file_uses_file_url() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "<html></html>").unwrap();
    let client = reqwest::Client::new();

    let path = file.path().to_string_lossy().to_string();
    let snap = load_snapshot(&path, None, &client).await.unwrap();
    assert_eq!(snap.url().scheme(), "file");
}

#[tokio::test]
async fn test_load_snapshot_missing_file() {
    let client = reqwest::Client::new();
    let result = load_snapshot("/definitely/not/here.html", None, &client).await;
    assert!(matches!(result, Err(crate::error_handling::SnapshotError::Io { .. })));
}

#[tokio::test]
async fn test_load_snapshot_over_http() {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/product/kettle"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Last-Modified", "Tue, 21 Oct 2025 07:28:00 GMT")
                .set_body_string("<html><head><title>Kettle</title></head></html>"),
        )
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let url = format!("{}/product/kettle", server.uri());
    let snap = load_snapshot(&url, None, &client).await.unwrap();
    assert_eq!(snap.title(), Some("Kettle".to_string()));
    assert_eq!(snap.path(), "/product/kettle");
    assert_eq!(
        snap.last_modified(),
        Some(Utc.with_ymd_and_hms(2025, 10, 21, 7, 28, 0).unwrap())
    );
}

#[tokio::test]
async fn test_load_snapshot_http_error_status() {
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let result = load_snapshot(&server.uri(), None, &client).await;
    assert!(matches!(
        result,
        Err(crate::error_handling::SnapshotError::HttpStatus { status: 404, .. })
    ));
}

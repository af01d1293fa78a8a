//! Loading a snapshot from disk or over HTTP.

use chrono::{DateTime, Utc};
use log::{debug, info};
use reqwest::header::LAST_MODIFIED;
use url::Url;

use crate::config::MAX_RESPONSE_BODY_SIZE;
use crate::error_handling::SnapshotError;

use super::DocumentSnapshot;

/// Builds a `DocumentSnapshot` from `source`.
///
/// `http://` and `https://` sources are fetched with `client`; the response
/// `Last-Modified` header, when parseable, becomes the snapshot's
/// last-modified time. Anything else is treated as a file path, with page URL
/// `base_url` when given or the file's `file://` URL otherwise.
///
/// # Errors
///
/// Returns a `SnapshotError` when the file cannot be read, the request fails,
/// the server answers with a non-success status, the body exceeds
/// `MAX_RESPONSE_BODY_SIZE`, or `base_url` is not a valid URL.
pub async fn load_snapshot(
    source: &str,
    base_url: Option<&str>,
    client: &reqwest::Client,
) -> Result<DocumentSnapshot, SnapshotError> {
    if is_remote(source) {
        fetch_snapshot(source, client).await
    } else {
        read_snapshot(source, base_url).await
    }
}

fn is_remote(source: &str) -> bool {
    let lower = source.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

async fn fetch_snapshot(
    source: &str,
    client: &reqwest::Client,
) -> Result<DocumentSnapshot, SnapshotError> {
    info!("Fetching {}", source);
    let response = client
        .get(source)
        .send()
        .await
        .map_err(|e| SnapshotError::Fetch {
            url: source.to_string(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(SnapshotError::HttpStatus {
            url: source.to_string(),
            status: status.as_u16(),
        });
    }

    // The final URL after redirects is the page the markup belongs to
    let final_url = response.url().clone();
    let last_modified = response
        .headers()
        .get(LAST_MODIFIED)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| DateTime::parse_from_rfc2822(v).ok())
        .map(|dt| dt.with_timezone(&Utc));

    let body = response.text().await.map_err(|e| SnapshotError::Fetch {
        url: source.to_string(),
        source: e,
    })?;
    check_size(source, &body)?;
    debug!("Fetched {} bytes from {}", body.len(), final_url);

    Ok(DocumentSnapshot::new(&body, final_url).with_last_modified(last_modified))
}

async fn read_snapshot(
    source: &str,
    base_url: Option<&str>,
) -> Result<DocumentSnapshot, SnapshotError> {
    let io_err = |e| SnapshotError::Io {
        path: source.to_string(),
        source: e,
    };
    let body = tokio::fs::read_to_string(source).await.map_err(io_err)?;
    check_size(source, &body)?;

    let url = match base_url {
        Some(base) => Url::parse(base).map_err(|_| SnapshotError::InvalidUrl(base.to_string()))?,
        None => {
            let absolute = tokio::fs::canonicalize(source).await.map_err(io_err)?;
            Url::from_file_path(&absolute)
                .map_err(|_| SnapshotError::InvalidUrl(absolute.display().to_string()))?
        }
    };

    let last_modified = tokio::fs::metadata(source)
        .await
        .ok()
        .and_then(|m| m.modified().ok())
        .map(DateTime::<Utc>::from);

    debug!("Read {} bytes from {} as {}", body.len(), source, url);
    Ok(DocumentSnapshot::new(&body, url).with_last_modified(last_modified))
}

fn check_size(source: &str, body: &str) -> Result<(), SnapshotError> {
    if body.len() > MAX_RESPONSE_BODY_SIZE {
        return Err(SnapshotError::TooLarge {
            url: source.to_string(),
            limit: MAX_RESPONSE_BODY_SIZE,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_remote() {
        assert!(is_remote("https://deals.example/"));
        assert!(is_remote("HTTP://deals.example/"));
        assert!(!is_remote("fixtures/product.html"));
        assert!(!is_remote("file:///tmp/page.html"));
    }

    #[test]
    fn test_check_size_limit() {
        assert!(check_size("a.html", "<html></html>").is_ok());
        let big = "x".repeat(MAX_RESPONSE_BODY_SIZE + 1);
        assert!(matches!(
            check_size("a.html", &big),
            Err(SnapshotError::TooLarge { .. })
        ));
    }
}

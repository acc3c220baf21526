// File: crates/heatmap-core/src/loader.rs
// Summary: Dataset retrieval: one GET of the fixed JSON resource, or a local file.

use std::path::Path;

use tracing::{debug, info};

use crate::dataset::Dataset;
use crate::error::Result;

/// Monthly global land-surface temperature, 1753-2015.
pub const DATASET_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

/// Fetch and parse the dataset. No retry and no fallback: transport errors,
/// non-2xx statuses and malformed bodies are returned to the caller.
pub async fn fetch_dataset(url: &str) -> Result<Dataset> {
    info!(url, "fetching dataset");
    let response = reqwest::get(url).await?.error_for_status()?;
    let body = response.bytes().await?;
    debug!(bytes = body.len(), "dataset body received");
    let ds = Dataset::from_json_slice(&body)?;
    info!(entries = ds.len(), base = ds.base_temperature, "dataset loaded");
    Ok(ds)
}

/// Read a dataset saved to disk (same JSON shape as the remote resource).
pub fn load_dataset_file(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    info!(path = %path.display(), "reading dataset file");
    let bytes = std::fs::read(path)?;
    let ds = Dataset::from_json_slice(&bytes)?;
    info!(entries = ds.len(), base = ds.base_temperature, "dataset loaded");
    Ok(ds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one HTTP response on a loopback port and return its URL.
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut sock, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = sock.read(&mut buf).await;
            let resp = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            sock.write_all(resp.as_bytes()).await.unwrap();
            sock.shutdown().await.ok();
        });
        format!("http://{addr}/global-temperature.json")
    }

    #[tokio::test]
    async fn fetches_and_parses() {
        let url = serve_once(
            "200 OK",
            r#"{"baseTemperature":8.66,"monthlyVariance":[{"year":1753,"month":1,"variance":-1.366}]}"#,
        )
        .await;
        let ds = fetch_dataset(&url).await.unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.monthly_variance[0].year, 1753);
    }

    #[tokio::test]
    async fn http_error_status_is_a_fetch_error() {
        let url = serve_once("404 Not Found", "{}").await;
        assert!(matches!(fetch_dataset(&url).await, Err(Error::Fetch(_))));
    }

    #[tokio::test]
    async fn malformed_body_is_a_parse_error() {
        let url = serve_once("200 OK", "not json").await;
        assert!(matches!(fetch_dataset(&url).await, Err(Error::Parse(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(load_dataset_file("does/not/exist.json"), Err(Error::Io(_))));
    }
}

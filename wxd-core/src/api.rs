//! HTTP implementation of [`StationFetcher`] against the dashboard API.

use crate::{
    fetch::{FetchError, StationFetcher},
    metric::{chartable_columns, Metric},
    period::Period,
    series::SparseSeries,
    snapshot::Snapshot,
    summary::PeriodSummary,
};
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Default API location when nothing is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

#[derive(Debug, Deserialize)]
struct ColumnListing {
    #[serde(default)]
    columns: Vec<String>,
}

/// Fetches station resources over HTTP. No timeouts or retries are applied:
/// a slow station only delays its own contribution.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                url: url.clone(),
                message: e.to_string(),
            })?;

        if response.status() != StatusCode::OK {
            return Err(FetchError::Status {
                url,
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| FetchError::Transport {
            url: url.clone(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&body).map_err(|e| FetchError::Decode {
            url,
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl StationFetcher for HttpFetcher {
    async fn fetch_snapshot(&self, station_id: &str) -> Result<Snapshot, FetchError> {
        self.get_json("/api/current_data_live", &[("station_id", station_id)])
            .await
    }

    async fn fetch_series(
        &self,
        station_id: &str,
        period: Period,
        metric: &Metric,
    ) -> Result<SparseSeries, FetchError> {
        self.get_json(
            "/api/graph_data",
            &[
                ("station_id", station_id),
                ("period", period.as_key()),
                ("column", metric.column()),
            ],
        )
        .await
    }

    async fn fetch_metric_columns(&self) -> Result<Vec<String>, FetchError> {
        let listing: ColumnListing = self
            .get_json("/api/debug/weather_daily_columns", &[])
            .await?;
        Ok(chartable_columns(listing.columns))
    }

    async fn generate_summary(&self, period: Period) -> Result<serde_json::Value, FetchError> {
        self.get_json("/api/generate_summary", &[("period", period.as_key())])
            .await
    }

    async fn fetch_summary(
        &self,
        station_id: &str,
        period: Period,
    ) -> Result<PeriodSummary, FetchError> {
        self.get_json(
            "/api/summary_data",
            &[("station_id", station_id), ("period", period.as_key())],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    fn http_response(status_line: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        )
    }

    /// Answer one request on a local port with `response`. The receiver
    /// yields the request line that was served.
    async fn serve_once(response: String) -> (HttpFetcher, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                request.extend_from_slice(&buf[..n]);
                if n == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            let request = String::from_utf8_lossy(&request);
            let _ = tx.send(request.lines().next().unwrap_or_default().to_string());
        });

        let client = Client::builder().no_proxy().build().unwrap();
        (HttpFetcher::with_client(client, format!("http://{}", addr)), rx)
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let fetcher = HttpFetcher::new("https://example.test/");
        assert_eq!(fetcher.base_url(), "https://example.test");
    }

    #[test]
    fn test_column_listing_defaults() {
        let listing: ColumnListing = serde_json::from_str("{}").unwrap();
        assert!(listing.columns.is_empty());
    }

    #[tokio::test]
    async fn test_snapshot_request_and_decode() {
        let body = r#"{"temp": 61.5, "humidity": 80, "fallback": null}"#;
        let (fetcher, request) = serve_once(http_response("200 OK", body)).await;

        let snapshot = fetcher.fetch_snapshot("propdada").await.unwrap();
        assert_eq!(snapshot.temperature, Some(61.5));
        assert_eq!(snapshot.humidity, Some(80.0));
        assert!(!snapshot.used_fallback);
        assert_eq!(
            request.await.unwrap(),
            "GET /api/current_data_live?station_id=propdada HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn test_non_ok_status_maps_to_status_error() {
        let (fetcher, _request) =
            serve_once(http_response("503 Service Unavailable", "")).await;

        let err = fetcher.fetch_snapshot("A").await.unwrap_err();
        match err {
            FetchError::Status { url, status } => {
                assert_eq!(status, 503);
                assert!(url.ends_with("/api/current_data_live"));
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_garbage_body_maps_to_decode_error() {
        let (fetcher, _request) = serve_once(http_response("200 OK", "not json")).await;

        let err = fetcher
            .fetch_series("A", Period::SevenDays, &Metric::default())
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_refused_connection_maps_to_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = Client::builder().no_proxy().build().unwrap();
        let fetcher = HttpFetcher::with_client(client, format!("http://{}", addr));
        let err = fetcher.fetch_metric_columns().await.unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }));
    }

    #[tokio::test]
    async fn test_generate_summary_sends_period() {
        let (fetcher, request) =
            serve_once(http_response("200 OK", r#"{"status": "ok"}"#)).await;

        let report = fetcher.generate_summary(Period::SevenDays).await.unwrap();
        assert_eq!(report["status"], "ok");
        assert_eq!(
            request.await.unwrap(),
            "GET /api/generate_summary?period=7d HTTP/1.1"
        );
    }
}

//! Google web search client.
//!
//! Issues one throttled GET per query against `{base_url}/search` and hands
//! the raw HTML back to the caller. Parsing lives in [`crate::extract`] so the
//! markup never leaks past the extractor.

use crate::client::SearchClient;
use crate::config::ClientConfig;
use crate::error::ScanError;
use crate::http;
use crate::throttle::Throttle;

/// Google HTML search client with its own politeness throttle.
///
/// Sharing one instance (for example behind an `Arc`) across concurrent
/// scans routes every request through the same throttle.
#[derive(Debug)]
pub struct GoogleClient {
    client: reqwest::Client,
    config: ClientConfig,
    throttle: Throttle,
}

impl GoogleClient {
    /// Build a client from immutable configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Config`] if the configuration is invalid or the
    /// HTTP client cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self, ScanError> {
        config.validate()?;
        let client = http::build_client(&config)?;
        let throttle = Throttle::from_config(&config);
        Ok(Self {
            client,
            config,
            throttle,
        })
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.config.base_url.trim_end_matches('/'))
    }
}

impl SearchClient for GoogleClient {
    async fn search(&self, query: &str, limit: usize) -> Result<String, ScanError> {
        self.throttle.acquire().await;
        tracing::trace!(query, limit, "Google search");

        let limit = limit.to_string();
        let response = self
            .client
            .get(self.search_url())
            .query(&[("q", query), ("num", limit.as_str())])
            .header("Accept", "text/html,application/xhtml+xml")
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| http::classify_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScanError::HttpStatus {
                status: status.as_u16(),
                message: format!("Google returned {status}"),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| http::classify_error(&e))?;

        tracing::trace!(bytes = html.len(), "Google response received");
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: String) -> ClientConfig {
        ClientConfig {
            base_url,
            user_agent: "FakeSeekTest/1.0".into(),
            min_request_delay_ms: 0,
            request_jitter_ms: 0,
            timeout_seconds: 2,
        }
    }

    #[test]
    fn is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GoogleClient>();
    }

    #[test]
    fn invalid_config_rejected() {
        let config = ClientConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        assert!(matches!(
            GoogleClient::new(config),
            Err(ScanError::Config(_))
        ));
    }

    #[test]
    fn search_url_strips_trailing_slash() {
        let client =
            GoogleClient::new(test_config("http://localhost:1234/".into())).expect("client");
        assert_eq!(client.search_url(), "http://localhost:1234/search");
    }

    #[tokio::test]
    async fn sends_query_limit_and_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", r#""John Doe" "deepfake""#))
            .and(query_param("num", "5"))
            .and(header("user-agent", "FakeSeekTest/1.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .expect(1)
            .mount(&server)
            .await;

        let client = GoogleClient::new(test_config(server.uri())).expect("client");
        let body = client
            .search(r#""John Doe" "deepfake""#, 5)
            .await
            .expect("should succeed");
        assert_eq!(body, "<html>ok</html>");
    }

    #[tokio::test]
    async fn non_success_status_is_http_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let client = GoogleClient::new(test_config(server.uri())).expect("client");
        let err = client.search("q", 5).await.unwrap_err();
        assert!(matches!(err, ScanError::HttpStatus { status: 429, .. }));
    }

    #[tokio::test]
    async fn slow_response_is_timeout_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("late")
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let client = GoogleClient::new(test_config(server.uri())).expect("client");
        let err = client.search("q", 5).await.unwrap_err();
        assert!(matches!(err, ScanError::Timeout(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn consecutive_requests_respect_min_delay() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string(""))
            .expect(2)
            .mount(&server)
            .await;

        let config = ClientConfig {
            min_request_delay_ms: 200,
            ..test_config(server.uri())
        };
        let client = GoogleClient::new(config).expect("client");
        let start = std::time::Instant::now();
        client.search("a", 5).await.expect("first");
        client.search("b", 5).await.expect("second");
        assert!(start.elapsed() >= Duration::from_millis(200));
    }

    #[tokio::test]
    #[ignore] // Live test — run with `cargo test -- --ignored`
    async fn live_google_search() {
        let client = GoogleClient::new(ClientConfig::default()).expect("client");
        let result = client.search("rust programming language", 5).await;
        assert!(result.is_ok());
    }
}

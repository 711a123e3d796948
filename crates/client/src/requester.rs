use crate::config::{validate_base_url, validate_timeout, ClientConfig};
use bulk_whois_core::{ErrorBuilder, Payload, Result};
use reqwest::Response;
use std::time::Duration;
use tracing::{debug, warn};

/// Sends JSON payloads to the API and returns response bodies
#[derive(Debug, Clone)]
pub struct ApiRequester {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl ApiRequester {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            timeout: config.timeout(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) -> Result<()> {
        let base_url = base_url.into();
        validate_base_url(&base_url)?;
        self.base_url = base_url;
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn set_timeout(&mut self, timeout: Duration) -> Result<()> {
        validate_timeout(timeout)?;
        self.timeout = timeout;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }

    /// POST `payload` to `base_url + path` and decode the body as UTF-8 text
    pub async fn post(&self, path: &str, payload: &Payload) -> Result<String> {
        let body = self.post_bytes(path, payload).await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    /// POST `payload` to `base_url + path` and return the body bytes untouched
    pub async fn post_bytes(&self, path: &str, payload: &Payload) -> Result<Vec<u8>> {
        let url = self.url(path);
        debug!(
            url = %url,
            output_format = ?payload.output_format,
            domains = payload.domains.as_ref().map(Vec::len),
            request_id = ?payload.request_id,
            "Sending API request"
        );

        let response = self
            .http
            .post(&url)
            .json(payload)
            .timeout(self.timeout)
            .send()
            .await?;

        handle_http_response(response, path).await
    }
}

/// Return the body of a successful response, or map the status to an error
pub(crate) async fn handle_http_response(response: Response, context: &str) -> Result<Vec<u8>> {
    let status = response.status();
    let url = response.url().clone();
    let body = response.bytes().await?;

    if status.as_u16() < 300 {
        debug!(url = %url, status = %status, bytes = body.len(), "API request succeeded");
        Ok(body.to_vec())
    } else {
        warn!(
            url = %url,
            status = %status,
            context = %context,
            "HTTP request failed"
        );
        let body = String::from_utf8_lossy(&body).into_owned();
        Err(ErrorBuilder::response().status(status.as_u16(), body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulk_whois_core::{ApiKey, Error, ACCESS_RESTRICTED_MESSAGE};
    use mockito::{Matcher, Server};
    use serde_json::json;

    const API_KEY: &str = "at_abcdefghijklmnopqrstuvwxyz123";

    fn requester(url: &str) -> ApiRequester {
        ApiRequester::new(&ClientConfig::new().with_base_url(url)).unwrap()
    }

    fn payload() -> Payload {
        Payload::new(&ApiKey::new(API_KEY).unwrap())
    }

    #[tokio::test]
    async fn test_post_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/getUserRequests")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({"apiKey": API_KEY})))
            .with_status(200)
            .with_body(r#"{"userRequests":[]}"#)
            .create_async()
            .await;

        let body = requester(&server.url())
            .post("/getUserRequests", &payload())
            .await
            .unwrap();
        assert_eq!(body, r#"{"userRequests":[]}"#);

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_post_trims_trailing_slash() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/download")
            .with_status(200)
            .with_body("domainName,status")
            .create_async()
            .await;

        let base = format!("{}/", server.url());
        let body = requester(&base).post("/download", &payload()).await.unwrap();
        assert_eq!(body, "domainName,status");

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_post_auth_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/bulkWhois")
            .with_status(403)
            .with_body("Forbidden")
            .create_async()
            .await;

        let result = requester(&server.url()).post("/bulkWhois", &payload()).await;

        match result {
            Err(Error::ApiAuth(response)) => {
                let parsed = response.parsed_message().unwrap();
                assert_eq!(parsed.code, 403);
                assert_eq!(parsed.message, ACCESS_RESTRICTED_MESSAGE);
            }
            other => panic!("Expected ApiAuth error, got: {other:?}"),
        }

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_post_bad_request() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/bulkWhois")
            .with_status(417)
            .with_body(r#"{"messageCode":417,"message":"Domain list can not be empty!"}"#)
            .create_async()
            .await;

        let result = requester(&server.url()).post("/bulkWhois", &payload()).await;

        match result {
            Err(Error::BadRequest(response)) => {
                let parsed = response.parsed_message().unwrap();
                assert_eq!(parsed.code, 417);
                assert_eq!(parsed.message, "Domain list can not be empty!");
            }
            other => panic!("Expected BadRequest error, got: {other:?}"),
        }

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_post_other_status() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/getRecords")
            .with_status(500)
            .with_body("Internal Server Error")
            .create_async()
            .await;

        let result = requester(&server.url()).post("/getRecords", &payload()).await;

        match result {
            Err(Error::HttpApi { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "Internal Server Error");
            }
            other => panic!("Expected HttpApi error, got: {other:?}"),
        }

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_post_connection_failure() {
        // Nothing listens on port 9 of localhost
        let result = requester("http://127.0.0.1:9").post("/bulkWhois", &payload()).await;
        assert!(matches!(result, Err(Error::Network(_))));
    }

    #[test]
    fn test_setters() {
        let mut requester = requester("http://localhost");
        requester.set_base_url("http://example.org").unwrap();
        requester.set_timeout(Duration::from_millis(2500)).unwrap();

        assert_eq!(requester.base_url(), "http://example.org");
        assert_eq!(requester.timeout(), Duration::from_millis(2500));
        assert_eq!(requester.url("/download"), "http://example.org/download");

        assert!(requester.set_base_url("::not a url::").is_err());
        assert!(requester.set_timeout(Duration::ZERO).is_err());
        assert_eq!(requester.base_url(), "http://example.org");
        assert_eq!(requester.timeout(), Duration::from_millis(2500));
    }

    #[tokio::test]
    async fn test_post_bytes_keeps_body_untouched() {
        let body: &[u8] = &[b'a', b',', 0xE9, b'\n'];
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/download")
            .with_status(200)
            .with_header("content-type", "text/csv")
            .with_body(body)
            .create_async()
            .await;

        let received = requester(&server.url())
            .post_bytes("/download", &payload())
            .await
            .unwrap();
        assert_eq!(received, body);

        mock.assert_async().await;
    }
}

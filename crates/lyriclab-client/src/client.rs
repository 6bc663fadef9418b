use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::Config;
use crate::error::{ApiError, ApiResult};

/// API base used when nothing is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Error body returned by the server.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// HTTP client for the LyricLab API.
///
/// Every call is a single awaited request. There are no retries.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session_token: Option<String>,
}

impl ApiClient {
    /// Create a client for the API at `base_url` (including `/api`).
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(
                "lyriclab/",
                env!("CARGO_PKG_VERSION"),
                " (https://github.com/oxur/lyriclab)"
            ))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session_token: None,
        })
    }

    /// Create a client from the loaded configuration. The configured
    /// session token, if any, is attached.
    pub fn from_config(config: &Config) -> ApiResult<Self> {
        let client = Self::new(&config.api_url, config.timeout())?;
        Ok(match &config.session_token {
            Some(token) => client.with_session_token(token),
            None => client,
        })
    }

    /// Send `Authorization: Bearer <token>` on every request.
    #[must_use]
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    pub fn set_session_token(&mut self, token: Option<String>) {
        self.session_token = token;
    }

    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        log::debug!("{} {}", method, url);
        let builder = self.http.request(method, url);
        match &self.session_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and decode a JSON response body.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<T> {
        let response = check_status(builder.send().await?).await?;
        response.json::<T>().await.map_err(|e| ApiError::Parse {
            message: e.to_string(),
        })
    }

    /// Send a request whose response body is not needed.
    pub(crate) async fn send_empty(&self, builder: RequestBuilder) -> ApiResult<()> {
        check_status(builder.send().await?).await?;
        Ok(())
    }

    /// Send a request and hand back the raw (successful) response.
    pub(crate) async fn send_raw(&self, builder: RequestBuilder) -> ApiResult<Response> {
        check_status(builder.send().await?).await
    }
}

/// Map a non-success response to an [`ApiError`], using the server's
/// `detail` message when there is one.
async fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = detail_message(&body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    });
    log::warn!("API call failed with {}: {}", status, message);

    Err(match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized { message },
        StatusCode::NOT_FOUND => ApiError::NotFound { message },
        _ => ApiError::Http {
            status: status.as_u16(),
            message,
        },
    })
}

fn detail_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail {
        serde_json::Value::String(text) => Some(text),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ApiClient::new("http://localhost:8000/api/", Duration::from_secs(5));
        assert!(client.is_ok());
        let client = client.unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000/api");
        assert_eq!(client.url("/songs"), "http://localhost:8000/api/songs");
        assert!(client.session_token().is_none());
    }

    #[test]
    fn test_from_config_attaches_token() {
        let config = Config {
            session_token: Some("sess_abc".to_string()),
            ..Config::default()
        };
        let client = ApiClient::from_config(&config).unwrap();
        assert_eq!(client.session_token(), Some("sess_abc"));
    }

    #[test]
    fn test_detail_message() {
        assert_eq!(
            detail_message(r#"{"detail": "Song not found"}"#).as_deref(),
            Some("Song not found")
        );
        assert!(detail_message("<html>oops</html>").is_none());
        let validation = detail_message(r#"{"detail": [{"msg": "field required"}]}"#).unwrap();
        assert!(validation.contains("field required"));
    }
}

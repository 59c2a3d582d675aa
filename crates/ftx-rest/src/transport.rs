//! Request dispatcher
//!
//! Joins the base endpoint and relative path, attaches signed headers when
//! credentials are configured, sends the request and classifies the outcome.

use ftx_auth::{Credentials, HttpMethod, RequestSigner};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{RestError, RestResult};

/// Signs and sends requests against a fixed base endpoint
#[derive(Clone)]
pub struct Dispatcher {
    http_client: Client,
    base_url: String,
    credentials: Option<Credentials>,
}

impl Dispatcher {
    pub fn new(
        http_client: Client,
        base_url: impl Into<String>,
        credentials: Option<Credentials>,
    ) -> Self {
        let base_url: String = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();

        Self {
            http_client,
            base_url,
            credentials,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Full request URL for a relative path
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Perform a request and decode the JSON response body
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Path relative to the base endpoint, including any query string
    /// * `body` - JSON body, sent (and signed) for POST requests
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
    ) -> RestResult<T> {
        // The signature covers the URL exactly as it goes on the wire.
        let url = Url::parse(&self.url(path))
            .map_err(|e| RestError::invalid(format!("Invalid request URL for {}: {}", path, e)))?;
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| RestError::invalid(format!("Unserializable body: {}", e)))?;

        let mut builder = self.http_client.request(to_reqwest(method), url.clone());

        if let Some(credentials) = &self.credentials {
            let signed =
                RequestSigner::new(credentials, method, url.as_str()).sign(body.as_deref());
            for (name, value) in signed.pairs() {
                builder = builder.header(name, value);
            }
        }

        if let Some(body) = body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        debug!("{} {}", method, path);

        let response = builder.send().await?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            warn!("Rate limited on {} {}", method, path);
            return Err(RestError::RateLimited);
        }

        let text = response.text().await?;

        if !status.is_success() {
            let message = failure_message(status, &text);
            warn!("{} {} failed: {}", method, path, message);
            return Err(RestError::RequestFailed(message));
        }

        serde_json::from_str(&text)
            .map_err(|e| RestError::failed(format!("Invalid response body: {}", e)))
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .finish()
    }
}

fn to_reqwest(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// Prefer the exchange's own error string over the raw body
fn failure_message(status: StatusCode, body: &str) -> String {
    let detail = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string());

    if detail.is_empty() {
        format!("HTTP {}", status)
    } else {
        format!("HTTP {}: {}", status, detail)
    }
}

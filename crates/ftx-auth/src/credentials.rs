//! API credentials for authenticated requests
//!
//! Implements the HMAC-SHA256 signing used by FTX's REST endpoints.
//!
//! # Security
//!
//! The API secret is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop
//! - Keeps the secret out of `Debug` output
//! - Requires explicit access via `expose_secret()`

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretBox};
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{AuthError, AuthResult};
use crate::signer::HttpMethod;

type HmacSha256 = Hmac<Sha256>;

/// API credentials for authenticated requests
///
/// The secret is zeroized when the Credentials are dropped.
pub struct Credentials {
    /// API key (public, sent with every request)
    api_key: String,
    /// API secret used as the HMAC key (zeroized on drop)
    api_secret: SecretBox<Vec<u8>>,
    /// Optional sub-account the requests are routed to
    subaccount: Option<String>,
}

impl Credentials {
    /// Create new credentials from an API key and secret
    ///
    /// # Arguments
    /// * `api_key` - Your FTX API key
    /// * `api_secret` - Your FTX API secret
    ///
    /// # Returns
    /// Result containing Credentials or error if either value is empty
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> AuthResult<Self> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();

        if api_key.trim().is_empty() {
            return Err(AuthError::InvalidCredentials("API key is empty".to_string()));
        }
        if api_secret.is_empty() {
            return Err(AuthError::InvalidCredentials("API secret is empty".to_string()));
        }

        Ok(Self {
            api_key,
            api_secret: SecretBox::new(Box::new(api_secret.into_bytes())),
            subaccount: None,
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `FTX_API_KEY` and `FTX_API_SECRET` from the environment.
    /// `FTX_SUBACCOUNT` is optional; an empty value is ignored.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = std::env::var("FTX_API_KEY")
            .map_err(|_| AuthError::EnvVarNotSet("FTX_API_KEY".to_string()))?;
        let api_secret = std::env::var("FTX_API_SECRET")
            .map_err(|_| AuthError::EnvVarNotSet("FTX_API_SECRET".to_string()))?;

        let creds = Self::new(api_key, api_secret)?;

        match std::env::var("FTX_SUBACCOUNT") {
            Ok(name) if !name.is_empty() => Ok(creds.with_subaccount(name)),
            _ => Ok(creds),
        }
    }

    /// Route requests to a sub-account
    pub fn with_subaccount(mut self, subaccount: impl Into<String>) -> Self {
        self.subaccount = Some(subaccount.into());
        self
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the sub-account, if any
    pub fn subaccount(&self) -> Option<&str> {
        self.subaccount.as_deref()
    }

    /// Current wall-clock time in milliseconds since the Unix epoch
    pub fn timestamp_ms() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    }

    /// Sign a request
    ///
    /// Signature algorithm:
    /// 1. payload = timestamp + method + path (+ body, for non-empty POST bodies)
    /// 2. HMAC-SHA256(api_secret, payload)
    /// 3. Lowercase hex encode
    ///
    /// # Arguments
    /// * `timestamp` - Milliseconds since the Unix epoch, sent as `X-TS`
    /// * `method` - HTTP method
    /// * `path` - Full request URL including the query string
    /// * `body` - Serialized request body, if any
    pub fn sign(
        &self,
        timestamp: u64,
        method: HttpMethod,
        path: &str,
        body: Option<&str>,
    ) -> String {
        self.digest(&Self::payload(timestamp, method, path, body))
    }

    /// Build the signature payload
    pub fn payload(timestamp: u64, method: HttpMethod, path: &str, body: Option<&str>) -> String {
        let mut payload = format!("{}{}{}", timestamp, method.as_str(), path);

        if let (HttpMethod::Post, Some(body)) = (method, body) {
            payload.push_str(body);
        }

        payload
    }

    fn digest(&self, payload: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.api_secret.expose_secret())
            .expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());

        hex::encode(mac.finalize().into_bytes())
    }
}

impl Clone for Credentials {
    /// Clone credentials (creates new SecretBox with same content)
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            api_secret: SecretBox::new(Box::new(self.api_secret.expose_secret().clone())),
            subaccount: self.subaccount.clone(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let visible = self
            .api_key
            .char_indices()
            .nth(8)
            .map_or(self.api_key.as_str(), |(idx, _)| &self.api_key[..idx]);

        f.debug_struct("Credentials")
            .field("api_key", &format!("{}...", visible))
            .field("api_secret", &"[REDACTED]")
            .field("subaccount", &self.subaccount)
            .finish()
    }
}

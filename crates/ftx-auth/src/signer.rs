//! Request signer producing the authentication header set

use std::fmt;

use tracing::trace;

use crate::credentials::Credentials;

/// Header carrying the API key
pub const KEY_HEADER: &str = "X-KEY";
/// Header carrying the millisecond timestamp
pub const TS_HEADER: &str = "X-TS";
/// Header carrying the hex signature
pub const SIGN_HEADER: &str = "X-SIGN";
/// Header carrying the sub-account name
pub const SUBACCOUNT_HEADER: &str = "X-SUBACCOUNT";

/// HTTP methods the signer understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    /// Uppercase method name as it appears in the signature payload
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signed authentication headers for a single request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    /// API key (`X-KEY`)
    pub api_key: String,
    /// Millisecond timestamp (`X-TS`)
    pub timestamp: u64,
    /// Hex HMAC-SHA256 signature (`X-SIGN`)
    pub signature: String,
    /// Sub-account (`X-SUBACCOUNT`)
    pub subaccount: Option<String>,
}

impl SignedHeaders {
    /// Header name/value pairs, in wire order
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            (KEY_HEADER, self.api_key.clone()),
            (TS_HEADER, self.timestamp.to_string()),
            (SIGN_HEADER, self.signature.clone()),
        ];

        if let Some(subaccount) = &self.subaccount {
            pairs.push((SUBACCOUNT_HEADER, subaccount.clone()));
        }

        pairs
    }
}

/// Request signer for building authenticated requests
///
/// Captures the timestamp once at construction, so the `X-TS` header and the
/// signed payload always agree.
#[derive(Debug)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
    method: HttpMethod,
    path: String,
    timestamp: u64,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer stamped with the current time
    pub fn new(credentials: &'a Credentials, method: HttpMethod, path: impl Into<String>) -> Self {
        Self::at(credentials, method, path, Credentials::timestamp_ms())
    }

    /// Create a request signer with an explicit timestamp
    pub fn at(
        credentials: &'a Credentials,
        method: HttpMethod,
        path: impl Into<String>,
        timestamp: u64,
    ) -> Self {
        Self {
            credentials,
            method,
            path: path.into(),
            timestamp,
        }
    }

    /// Get the timestamp for this request
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Sign the request with the given serialized body
    pub fn sign(&self, body: Option<&str>) -> SignedHeaders {
        let body = body.filter(|b| !b.is_empty());
        let signature = self
            .credentials
            .sign(self.timestamp, self.method, &self.path, body);

        trace!(method = %self.method, path = %self.path, ts = self.timestamp, "Signed request");

        SignedHeaders {
            api_key: self.credentials.api_key().to_string(),
            timestamp: self.timestamp,
            signature,
            subaccount: self.credentials.subaccount().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> Credentials {
        Credentials::new("API_KEY", "secret").unwrap()
    }

    #[test]
    fn test_method_names() {
        assert_eq!(HttpMethod::Get.as_str(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
    }

    #[test]
    fn test_signed_headers_without_subaccount() {
        let creds = creds();
        let headers = RequestSigner::at(&creds, HttpMethod::Get, "https://ftx.com/api/coins", 42)
            .sign(None);

        let names: Vec<_> = headers.pairs().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec![KEY_HEADER, TS_HEADER, SIGN_HEADER]);
        assert_eq!(headers.api_key, "API_KEY");
        assert_eq!(headers.timestamp, 42);
    }

    #[test]
    fn test_signed_headers_with_subaccount() {
        let creds = creds().with_subaccount("hedge");
        let headers = RequestSigner::at(&creds, HttpMethod::Get, "/coins", 42).sign(None);

        let pairs = headers.pairs();
        assert_eq!(pairs.len(), 4);
        assert_eq!(pairs[3], (SUBACCOUNT_HEADER, "hedge".to_string()));
    }

    #[test]
    fn test_signer_is_deterministic_for_fixed_timestamp() {
        let creds = creds();
        let body = r#"{"size":1}"#;

        let a = RequestSigner::at(&creds, HttpMethod::Post, "/orders", 1000).sign(Some(body));
        let b = RequestSigner::at(&creds, HttpMethod::Post, "/orders", 1000).sign(Some(body));
        assert_eq!(a, b);

        let c = RequestSigner::at(&creds, HttpMethod::Post, "/orders", 1001).sign(Some(body));
        assert_ne!(a.signature, c.signature);
    }

    #[test]
    fn test_empty_body_signs_like_no_body() {
        let creds = creds();
        let signer = RequestSigner::at(&creds, HttpMethod::Post, "/orders", 7);
        assert_eq!(signer.sign(Some("")), signer.sign(None));
    }

    #[test]
    fn test_signature_matches_credentials() {
        let creds = creds();
        let headers = RequestSigner::at(&creds, HttpMethod::Get, "/markets", 99).sign(None);
        assert_eq!(
            headers.signature,
            creds.sign(99, HttpMethod::Get, "/markets", None)
        );
    }

    #[test]
    fn test_new_uses_current_time() {
        let creds = creds();
        let before = Credentials::timestamp_ms();
        let signer = RequestSigner::new(&creds, HttpMethod::Get, "/markets");
        assert!(signer.timestamp() >= before);
    }
}

//! API-key credentials and request signing for the FTX REST API
//!
//! Every authenticated request carries four headers:
//!
//! | Header | Value |
//! |---|---|
//! | `X-KEY` | API key |
//! | `X-TS` | Milliseconds since the Unix epoch |
//! | `X-SIGN` | Lowercase hex HMAC-SHA256 of the payload |
//! | `X-SUBACCOUNT` | Sub-account name (only when configured) |
//!
//! The payload is `timestamp + method + path`, followed by the request body
//! for `POST` requests that carry one.
//!
//! # Example
//!
//! ```no_run
//! use ftx_auth::{Credentials, HttpMethod, RequestSigner};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creds = Credentials::from_env()?;
//!
//!     let headers = RequestSigner::new(&creds, HttpMethod::Get, "https://ftx.com/api/markets")
//!         .sign(None);
//!
//!     for (name, value) in headers.pairs() {
//!         println!("{}: {}", name, value);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;
mod signer;

pub use credentials::Credentials;
pub use error::{AuthError, AuthResult};
pub use signer::{
    HttpMethod, RequestSigner, SignedHeaders, KEY_HEADER, SIGN_HEADER, SUBACCOUNT_HEADER,
    TS_HEADER,
};

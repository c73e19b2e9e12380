//! ES256 provider authentication tokens for Apple Push Notification service.
//!
//! A token is three unpadded base64url segments joined by `.`:
//!
//! ```text
//! b64url({"kid":KEY_ID,"alg":"ES256"}) . b64url({"iat":SECONDS,"iss":TEAM_ID}) . b64url(r||s)
//! ```
//!
//! The signing key is a P-256 PKCS#8 key given as standard base64 (the body of an
//! `AuthKey_XXXXXXXXXX.p8` file with the armor lines and newlines removed).
//!
//! ```no_run
//! # async fn run() -> Result<(), apns_token::TokenError> {
//! use apns_token::{create_token, SigningRequest};
//!
//! let secret = std::env::var("APPLE_NOTIFICATION_SECRET").unwrap_or_default();
//! let request = SigningRequest::new(secret, "U7TYW1FV9W", "FLM12NG8W1");
//! let token = create_token(request).await?;
//! println!("authorization: bearer {token}");
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod encoding;
pub mod error;
pub mod key;
pub mod sign;
pub mod types;

pub use auth::{create_token, generate_token, sign_compact};
pub use error::{KeyImportError, SigningError, TokenError};
pub use types::{Claims, Header, SigningRequest, ES256};

//! Token request, header and claims.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The only algorithm APNs accepts for provider tokens.
pub const ES256: &str = "ES256";

// ─── Request ─────────────────────────────────────────────────────────────────

/// Everything needed to produce one token. Built once, consumed by a single call.
#[derive(Clone)]
pub struct SigningRequest {
    /// Base64 (standard alphabet, padded) PKCS#8 DER of a P-256 private key.
    pub secret: String,
    pub issued_at: DateTime<Utc>,
    /// Team id, sent as `iss`.
    pub issuer: String,
    /// Key id, sent as `kid`.
    pub key_id: String,
}

impl SigningRequest {
    /// Request issued now.
    pub fn new(
        secret: impl Into<String>,
        key_id: impl Into<String>,
        issuer: impl Into<String>,
    ) -> Self {
        Self {
            secret: secret.into(),
            issued_at: Utc::now(),
            issuer: issuer.into(),
            key_id: key_id.into(),
        }
    }

    pub fn issued_at(mut self, issued_at: DateTime<Utc>) -> Self {
        self.issued_at = issued_at;
        self
    }
}

impl fmt::Debug for SigningRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningRequest")
            .field("secret", &"<redacted>")
            .field("issued_at", &self.issued_at)
            .field("issuer", &self.issuer)
            .field("key_id", &self.key_id)
            .finish()
    }
}

// ─── Segments ────────────────────────────────────────────────────────────────

/// JOSE header. Serialized as `{"kid":..,"alg":..}`, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub kid: String,
    alg: &'static str,
}

impl Header {
    pub fn es256(kid: impl Into<String>) -> Self {
        Self {
            kid: kid.into(),
            alg: ES256,
        }
    }

    pub fn alg(&self) -> &str {
        self.alg
    }
}

/// Token claims. Serialized as `{"iat":..,"iss":..}`, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Whole seconds since the epoch, sub-second precision dropped.
    pub iat: i64,
    pub iss: String,
}

impl Claims {
    pub fn new(issued_at: DateTime<Utc>, iss: impl Into<String>) -> Self {
        Self {
            // `timestamp()` floors, so pre-epoch times round down too.
            iat: issued_at.timestamp(),
            iss: iss.into(),
        }
    }
}

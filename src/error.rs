//! Error types for token construction.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeyImportError {
    #[error("secret is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("secret is not a PKCS#8 P-256 private key: {0}")]
    Pkcs8(String),
    #[error("key import task failed: {0}")]
    Task(String),
}

#[derive(Debug, Error)]
pub enum SigningError {
    #[error("ECDSA signing failed: {0}")]
    Ecdsa(#[from] p256::ecdsa::signature::Error),
    #[error("signing task failed: {0}")]
    Task(String),
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("invalid signing request: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    KeyImport(#[from] KeyImportError),
    #[error(transparent)]
    Signing(#[from] SigningError),
    #[error("failed to serialize token segment: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TokenError>;

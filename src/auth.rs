//! ES256 provider token generation for APNs.

use serde_json::Value;
use tracing::debug;

use crate::encoding;
use crate::error::{KeyImportError, Result, SigningError, TokenError};
use crate::key;
use crate::sign;
use crate::types::{Claims, Header, SigningRequest};

/// Build and sign a provider token.
///
/// Key import and signing each run on the blocking pool, one after the other.
/// The signature segment differs between calls; the first two segments do not.
pub async fn create_token(request: SigningRequest) -> Result<String> {
    validate(&request)?;
    let SigningRequest {
        secret,
        issued_at,
        issuer,
        key_id,
    } = request;

    let header = Header::es256(key_id);
    let claims = Claims::new(issued_at, issuer);
    let input = encoding::token_signing_input(&header, &claims)?;

    let signing_key = tokio::task::spawn_blocking(move || key::import_key(&secret))
        .await
        .map_err(|e| KeyImportError::Task(e.to_string()))??;

    let token = tokio::task::spawn_blocking(move || {
        sign::sign(&signing_key, &input).map(|sig| encoding::assemble(&input, &sig))
    })
    .await
    .map_err(|e| SigningError::Task(e.to_string()))??;

    debug!(kid = %header.kid, iss = %claims.iss, iat = claims.iat, "signed provider token");
    Ok(token)
}

/// Synchronous [`create_token`] for callers without a tokio runtime.
pub fn generate_token(request: &SigningRequest) -> Result<String> {
    validate(request)?;
    let header = Header::es256(request.key_id.as_str());
    let claims = Claims::new(request.issued_at, request.issuer.as_str());
    let input = encoding::token_signing_input(&header, &claims)?;
    let token = sign_input(input, &request.secret)?;
    debug!(kid = %header.kid, iss = %claims.iss, iat = claims.iat, "signed provider token");
    Ok(token)
}

/// Sign arbitrary JSON header and payload values with a base64 PKCS#8 P-256 key.
///
/// Object keys are encoded in insertion order. No check is made that `header`
/// names ES256; that is the caller's business.
pub fn sign_compact(header: &Value, payload: &Value, secret: &str) -> Result<String> {
    sign_input(encoding::signing_input(header, payload), secret)
}

fn sign_input(input: String, secret: &str) -> Result<String> {
    let signing_key = key::import_key(secret)?;
    let signature = sign::sign(&signing_key, &input)?;
    Ok(encoding::assemble(&input, &signature))
}

fn validate(request: &SigningRequest) -> Result<()> {
    if request.key_id.is_empty() {
        return Err(TokenError::InvalidInput("key id is empty".into()));
    }
    if request.issuer.is_empty() {
        return Err(TokenError::InvalidInput("issuer is empty".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_failures_map_to_their_stage() {
        let err = TokenError::from(KeyImportError::Task("cancelled".into()));
        assert!(matches!(err, TokenError::KeyImport(KeyImportError::Task(_))));
        assert_eq!(err.to_string(), "key import task failed: cancelled");

        let err = TokenError::from(SigningError::Task("panicked".into()));
        assert!(matches!(err, TokenError::Signing(SigningError::Task(_))));
        assert_eq!(err.to_string(), "signing task failed: panicked");
    }

    #[test]
    fn ecdsa_failure_is_signing_error() {
        let err = TokenError::from(SigningError::from(
            p256::ecdsa::signature::Error::new(),
        ));
        assert!(matches!(err, TokenError::Signing(SigningError::Ecdsa(_))));
        assert!(err.to_string().starts_with("ECDSA signing failed"));
    }
}

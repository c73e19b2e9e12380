//! ES256 signature segment.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use p256::ecdsa::signature::Signer;
use p256::ecdsa::{Signature, SigningKey};

use crate::error::SigningError;

/// Sign the UTF-8 bytes of `signing_input` with ECDSA/SHA-256 and return the
/// fixed-width `r || s` signature as unpadded base64url.
pub fn sign(key: &SigningKey, signing_input: &str) -> Result<String, SigningError> {
    let signature: Signature = key.try_sign(signing_input.as_bytes())?;
    Ok(URL_SAFE_NO_PAD.encode(signature.to_bytes()))
}

//! Compact JSON + unpadded base64url segments.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::Value;

use crate::error::Result;
use crate::types::{Claims, Header};

/// Encode a JSON value as compact JSON, base64url without padding.
///
/// Object keys keep insertion order (serde_json `preserve_order`).
pub fn encode_segment(value: &Value) -> String {
    URL_SAFE_NO_PAD.encode(value.to_string())
}

/// `segment(header) + "." + segment(payload)`: the bytes that get signed.
pub fn signing_input(header: &Value, payload: &Value) -> String {
    join(&encode_segment(header), &encode_segment(payload))
}

/// Signing input for the fixed APNs header and claims, keys in field order.
pub(crate) fn token_signing_input(header: &Header, claims: &Claims) -> Result<String> {
    let header = URL_SAFE_NO_PAD.encode(serde_json::to_vec(header)?);
    let claims = URL_SAFE_NO_PAD.encode(serde_json::to_vec(claims)?);
    Ok(join(&header, &claims))
}

pub fn assemble(signing_input: &str, signature: &str) -> String {
    join(signing_input, signature)
}

fn join(left: &str, right: &str) -> String {
    let mut out = String::with_capacity(left.len() + 1 + right.len());
    out.push_str(left);
    out.push('.');
    out.push_str(right);
    out
}

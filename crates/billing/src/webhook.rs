//! Stripe webhook signature verification.
//!
//! Implements the `Stripe-Signature` scheme: the header carries a unix
//! timestamp `t` and one or more `v1` HMAC-SHA256 signatures computed
//! over `"{t}.{payload}"` with the webhook signing secret.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::BillingError;

type HmacSha256 = Hmac<Sha256>;

/// Maximum accepted age of a signed payload, in seconds.
pub const SIGNATURE_TOLERANCE_SECS: i64 = 300;

/// Verify a `Stripe-Signature` header against the raw request body.
///
/// `now` is the current unix time; injected so expiry is testable.
pub fn verify_signature(
    payload: &[u8],
    header: &str,
    secret: &str,
    now: i64,
) -> Result<(), BillingError> {
    let mut timestamp: Option<i64> = None;
    let mut candidates: Vec<&str> = Vec::new();

    for part in header.split(',') {
        match part.trim().split_once('=') {
            Some(("t", value)) => timestamp = value.parse().ok(),
            Some(("v1", value)) => candidates.push(value),
            _ => {}
        }
    }

    let timestamp = timestamp.ok_or(BillingError::InvalidSignature("missing timestamp"))?;
    if candidates.is_empty() {
        return Err(BillingError::InvalidSignature("missing v1 signature"));
    }
    if (now - timestamp).abs() > SIGNATURE_TOLERANCE_SECS {
        return Err(BillingError::InvalidSignature("timestamp outside tolerance"));
    }

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|_| BillingError::InvalidSignature("bad secret"))?;
    mac.update(timestamp.to_string().as_bytes());
    mac.update(b".");
    mac.update(payload);
    let expected = hex_encode(&mac.finalize().into_bytes());

    // Constant-time comparison over each candidate.
    for candidate in candidates {
        if constant_time_eq(candidate.as_bytes(), expected.as_bytes()) {
            return Ok(());
        }
    }
    Err(BillingError::InvalidSignature("no matching signature"))
}

/// Sign a payload the way Stripe would. Used by tests and local tooling.
pub fn sign_payload(payload: &[u8], secret: &str, timestamp: i64) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(timestamp.to_string().as_bytes());
    mac.update(b".");
    mac.update(payload);
    let signature = hex_encode(&mac.finalize().into_bytes());
    format!("t={timestamp},v1={signature}")
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "whsec_test_secret";
    const PAYLOAD: &[u8] = br#"{"type":"invoice.payment_succeeded"}"#;

    #[test]
    fn test_valid_signature_accepted() {
        let header = sign_payload(PAYLOAD, SECRET, 1_700_000_000);
        assert!(verify_signature(PAYLOAD, &header, SECRET, 1_700_000_000).is_ok());
    }

    #[test]
    fn test_signature_within_tolerance_accepted() {
        let header = sign_payload(PAYLOAD, SECRET, 1_700_000_000);
        assert!(verify_signature(PAYLOAD, &header, SECRET, 1_700_000_000 + 299).is_ok());
    }

    #[test]
    fn test_stale_signature_rejected() {
        let header = sign_payload(PAYLOAD, SECRET, 1_700_000_000);
        let result = verify_signature(PAYLOAD, &header, SECRET, 1_700_000_000 + 301);
        assert!(matches!(result, Err(BillingError::InvalidSignature(_))));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let header = sign_payload(PAYLOAD, "whsec_other", 1_700_000_000);
        let result = verify_signature(PAYLOAD, &header, SECRET, 1_700_000_000);
        assert!(matches!(result, Err(BillingError::InvalidSignature(_))));
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let header = sign_payload(PAYLOAD, SECRET, 1_700_000_000);
        let result = verify_signature(b"{}", &header, SECRET, 1_700_000_000);
        assert!(matches!(result, Err(BillingError::InvalidSignature(_))));
    }

    #[test]
    fn test_malformed_header_rejected() {
        let result = verify_signature(PAYLOAD, "v1=deadbeef", SECRET, 1_700_000_000);
        assert!(matches!(
            result,
            Err(BillingError::InvalidSignature("missing timestamp"))
        ));
        let result = verify_signature(PAYLOAD, "t=1700000000", SECRET, 1_700_000_000);
        assert!(matches!(
            result,
            Err(BillingError::InvalidSignature("missing v1 signature"))
        ));
    }

    #[test]
    fn test_multiple_candidates_one_valid() {
        let signed = sign_payload(PAYLOAD, SECRET, 1_700_000_000);
        let v1 = signed.split("v1=").nth(1).unwrap();
        let header = format!("t=1700000000,v1=deadbeef,v1={v1}");
        assert!(verify_signature(PAYLOAD, &header, SECRET, 1_700_000_000).is_ok());
    }
}

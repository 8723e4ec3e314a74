//! Webhook payload verification
//!
//! Buycoins signs every webhook body with HMAC-SHA1, keyed by the webhook
//! token from the dashboard, and sends the lowercase hex digest in the
//! `X-Webhook-Signature` header.

use hmac::{Hmac, Mac};
use sha1::Sha1;
use tracing::debug;

type HmacSha1 = Hmac<Sha1>;

/// Header carrying the webhook signature
pub const SIGNATURE_HEADER: &str = "X-Webhook-Signature";

/// Length of a hex encoded SHA-1 digest
const SIGNATURE_HEX_LEN: usize = 40;

fn mac(body: &[u8], webhook_token: &str) -> HmacSha1 {
    let mut mac = HmacSha1::new_from_slice(webhook_token.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(body);
    mac
}

/// Compute the signature Buycoins would send for `body`
pub fn sign_payload(body: impl AsRef<[u8]>, webhook_token: &str) -> String {
    hex::encode(mac(body.as_ref(), webhook_token).finalize().into_bytes())
}

/// Check a webhook body against the signature header
///
/// Returns `true` only when `header_signature` is exactly the lowercase hex
/// HMAC-SHA1 of `body` keyed by `webhook_token`. The digest comparison is
/// constant time.
pub fn verify_payload(body: impl AsRef<[u8]>, webhook_token: &str, header_signature: &str) -> bool {
    let well_formed = header_signature.len() == SIGNATURE_HEX_LEN
        && header_signature
            .bytes()
            .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'));
    if !well_formed {
        debug!("Rejecting malformed webhook signature");
        return false;
    }

    let Ok(expected) = hex::decode(header_signature) else {
        return false;
    };

    let verified = mac(body.as_ref(), webhook_token)
        .verify_slice(&expected)
        .is_ok();
    if !verified {
        debug!("Webhook signature mismatch");
    }
    verified
}

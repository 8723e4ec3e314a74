//! Example: Verifying Buycoins webhook signatures
//!
//! Buycoins signs each webhook body with HMAC-SHA1 keyed by the account's
//! webhook token and sends the hex digest in `X-Webhook-Signature`.
//!
//! Run with: cargo run --example webhook

use buycoins_graphql::{sign_payload, verify_payload, SIGNATURE_HEADER};
use tracing_subscriber::EnvFilter;

const WEBHOOK_TOKEN: &str = "whk_test_token";

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Buycoins Webhook Example ===\n");

    let body = br#"{"hook_id":1,"hook_time":"2021-01-18T18:12:34Z","hook_key":"coins.incoming","payload":{"amount":"0.02","cryptocurrency":"bitcoin"}}"#;

    // What the service would put in the header
    let signature = sign_payload(body, WEBHOOK_TOKEN);
    println!("{}: {}", SIGNATURE_HEADER, signature);

    println!(
        "  genuine payload:   {}",
        verdict(verify_payload(body, WEBHOOK_TOKEN, &signature))
    );

    let mut tampered = body.to_vec();
    if let Some(byte) = tampered.iter_mut().find(|b| **b == b'2') {
        *byte = b'9';
    }
    println!(
        "  tampered payload:  {}",
        verdict(verify_payload(&tampered, WEBHOOK_TOKEN, &signature))
    );

    println!(
        "  wrong token:       {}",
        verdict(verify_payload(body, "another_token", &signature))
    );
}

fn verdict(valid: bool) -> &'static str {
    if valid {
        "accepted"
    } else {
        "rejected"
    }
}

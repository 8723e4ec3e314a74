//! Authentication and webhook verification for the Buycoins API
//!
//! This crate builds the HTTP Basic `Authorization` header every Buycoins
//! request carries, and verifies the HMAC-SHA1 signature on inbound webhooks.
//!
//! # Example
//!
//! ```
//! use buycoins_auth::{build_header, sign_payload, verify_payload};
//! use secrecy::ExposeSecret;
//!
//! let (name, value) = build_header("pub", "sec").unwrap();
//! assert_eq!(name, "Authorization");
//! assert_eq!(value.expose_secret(), "Basic cHViOnNlYw==");
//!
//! let body = br#"{"event":"coins.incoming"}"#;
//! let signature = sign_payload(body, "webhook-token");
//! assert!(verify_payload(body, "webhook-token", &signature));
//! ```

mod credentials;
mod error;
mod webhook;

pub use credentials::{build_header, Credentials, AUTHORIZATION, PUBLIC_KEY_ENV, SECRET_KEY_ENV};
pub use error::{AuthError, AuthResult};
pub use webhook::{sign_payload, verify_payload, SIGNATURE_HEADER};

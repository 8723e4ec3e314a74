//! Authentication credentials for the Buycoins API
//!
//! Buycoins uses HTTP Basic authentication: the public and secret keys are
//! joined with a colon, base64 encoded and sent as
//! `Authorization: Basic <encoded>` on every request.
//!
//! # Security
//!
//! Secret keys are stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use secrecy::{ExposeSecret, SecretString};

use crate::error::{AuthError, AuthResult};

/// Name of the header carrying the credentials
pub const AUTHORIZATION: &str = "Authorization";

/// Environment variable holding the public key
pub const PUBLIC_KEY_ENV: &str = "BUYCOINS_PUBLIC_KEY";

/// Environment variable holding the secret key
pub const SECRET_KEY_ENV: &str = "BUYCOINS_SECRET_KEY";

/// Build the `Authorization` header for a key pair
///
/// Returns the header name and its value, `Basic base64(public_key:secret_key)`.
/// The value embeds the secret key, so it is returned as a [`SecretString`].
///
/// # Errors
/// Returns [`AuthError::InvalidCredentials`] if either key is empty.
pub fn build_header(public_key: &str, secret_key: &str) -> AuthResult<(&'static str, SecretString)> {
    if public_key.is_empty() {
        return Err(AuthError::InvalidCredentials("public key is empty".to_string()));
    }
    if secret_key.is_empty() {
        return Err(AuthError::InvalidCredentials("secret key is empty".to_string()));
    }

    let encoded = BASE64.encode(format!("{}:{}", public_key, secret_key));
    Ok((AUTHORIZATION, SecretString::from(format!("Basic {}", encoded))))
}

/// API credentials for authenticated requests
///
/// Secret keys are automatically zeroized when the Credentials are dropped,
/// preventing sensitive data from remaining in memory.
pub struct Credentials {
    /// Public key
    public_key: String,
    /// Secret key (zeroized on drop)
    secret_key: SecretString,
}

impl Credentials {
    /// Create new credentials from a public and secret key
    ///
    /// # Errors
    /// Returns [`AuthError::InvalidCredentials`] if either key is empty.
    pub fn new(public_key: impl Into<String>, secret_key: impl Into<String>) -> AuthResult<Self> {
        let public_key = public_key.into();
        let secret_key = secret_key.into();

        if public_key.is_empty() {
            return Err(AuthError::InvalidCredentials("public key is empty".to_string()));
        }
        if secret_key.is_empty() {
            return Err(AuthError::InvalidCredentials("secret key is empty".to_string()));
        }

        Ok(Self {
            public_key,
            secret_key: SecretString::from(secret_key),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `BUYCOINS_PUBLIC_KEY` and `BUYCOINS_SECRET_KEY`. Nothing in the
    /// SDK calls this implicitly.
    pub fn from_env() -> AuthResult<Self> {
        let public_key = std::env::var(PUBLIC_KEY_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(PUBLIC_KEY_ENV.to_string()))?;
        let secret_key = std::env::var(SECRET_KEY_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(SECRET_KEY_ENV.to_string()))?;

        Self::new(public_key, secret_key)
    }

    /// Get the public key
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Value of the `Authorization` header for these credentials
    pub fn authorization(&self) -> AuthResult<SecretString> {
        build_header(&self.public_key, self.secret_key.expose_secret()).map(|(_, value)| value)
    }
}

impl Clone for Credentials {
    /// Clone credentials (creates new SecretString with same content)
    fn clone(&self) -> Self {
        Self {
            public_key: self.public_key.clone(),
            secret_key: SecretString::from(self.secret_key.expose_secret().to_string()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix: String = self.public_key.chars().take(8).collect();
        f.debug_struct("Credentials")
            .field("public_key", &format!("{}...", prefix))
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use std::env;

#[derive(Clone)]
pub struct Config {
    /// Shared secret for session-token verification. Identical between
    /// the token issuer and this verifier; sensitive, never logged.
    pub auth_secret: String,

    /// Name of the cookie carrying the session token
    pub session_cookie: String,

    /// Runtime configuration
    pub log_level: String,
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let auth_secret =
            env::var("AUTH_SECRET").map_err(|_| anyhow::anyhow!("AUTH_SECRET is required"))?;
        if auth_secret.is_empty() {
            return Err(anyhow::anyhow!("AUTH_SECRET must not be empty"));
        }

        let config = Self {
            auth_secret,

            session_cookie: env::var("SESSION_COOKIE")
                .unwrap_or_else(|_| "auth-token".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "pagesmith=debug".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
        };

        Ok(config)
    }
}

// Manual Debug so a dumped config never exposes the secret.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("auth_secret", &"<redacted>")
            .field("session_cookie", &self.session_cookie)
            .field("log_level", &self.log_level)
            .field("rust_log", &self.rust_log)
            .field("port", &self.port)
            .finish()
    }
}

//! Session verification configuration

/// Name of the cookie carrying the session token, unless overridden.
pub const DEFAULT_SESSION_COOKIE: &str = "auth-token";

/// Session verification configuration.
///
/// The secret is shared with the token issuer and is the entire trust
/// model: anyone holding it can forge sessions. It must never be
/// logged.
#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub cookie_name: String,
}

impl AuthConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            cookie_name: DEFAULT_SESSION_COOKIE.to_string(),
        }
    }
}

// Manual Debug so the secret cannot leak through debug logging.
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret", &"<redacted>")
            .field("cookie_name", &self.cookie_name)
            .finish()
    }
}

//! Validated session record

use serde::Serialize;

use crate::claims::SessionClaims;

/// The verified, trusted representation of a user's authenticated
/// state.
///
/// Fields are private and the constructor is crate-internal: a
/// `Session` only ever comes out of successful verification, never
/// from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    user_id: String,
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    expires_at: Option<String>,
}

impl Session {
    pub(crate) fn from_claims(claims: SessionClaims) -> Self {
        Self {
            user_id: claims.user_id,
            email: claims.email,
            expires_at: claims.expires_at,
        }
    }

    /// Opaque user identifier carried by the token
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Domain-level expiry (ISO-8601), distinct from the token's own
    /// `exp` claim. Not re-validated against the clock here.
    pub fn expires_at(&self) -> Option<&str> {
        self.expires_at.as_deref()
    }
}

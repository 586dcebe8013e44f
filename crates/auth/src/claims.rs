//! Session token claims types

use serde::{Deserialize, Serialize};

/// Claims embedded in the signed session token.
///
/// Field names are wire-exact: the issuer writes camelCase identity
/// fields plus numeric `iat`/`exp` timestamp claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Opaque user identifier
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Email
    pub email: String,
    /// Domain-level expiry (ISO-8601), passed through when present
    #[serde(
        rename = "expiresAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub expires_at: Option<String>,
    /// Issued at
    pub iat: u64,
    /// Expires at
    pub exp: u64,
}

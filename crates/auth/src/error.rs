//! Rejection taxonomy for session verification

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Why a token failed verification.
///
/// The variants exist for internal diagnostics and tests only: every
/// one collapses to the same external outcome ("no valid session") so
/// that clients cannot distinguish a forged signature from an expired
/// token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("no session token presented")]
    NoToken,
    #[error("token is not a well-formed signed token")]
    Malformed,
    #[error("token signature or algorithm check failed")]
    BadSignature,
    #[error("token expiration is at or before the verification instant")]
    Expired,
    #[error("token claims are missing or malformed")]
    InvalidClaims,
}

impl Rejection {
    /// Static label suitable for logs and metrics. Never serialized
    /// into a response body.
    pub fn reason(&self) -> &'static str {
        match self {
            Rejection::NoToken => "no_token",
            Rejection::Malformed => "malformed",
            Rejection::BadSignature => "bad_signature",
            Rejection::Expired => "expired",
            Rejection::InvalidClaims => "invalid_claims",
        }
    }
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        // Every variant maps to one identical response. Leaking the
        // reason would aid forgery attempts.
        let body = Json(json!({
            "error": {
                "code": "UNAUTHENTICATED",
                "message": "Authentication required",
            }
        }));

        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}

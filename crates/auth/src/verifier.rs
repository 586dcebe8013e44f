//! Stateless session-token verification

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::Utc;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use serde_json::Value;

use crate::claims::SessionClaims;
use crate::config::AuthConfig;
use crate::error::Rejection;
use crate::session::Session;

/// Verifies signed session tokens against a shared secret.
///
/// Holds only the decoding key and validation settings, both immutable
/// after construction, so a single verifier can be cloned into any
/// number of request-handling contexts without coordination.
#[derive(Clone)]
pub struct SessionVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
    cookie_name: String,
}

impl SessionVerifier {
    pub fn new(config: AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // `exp` is checked manually in `verify_at` so the clock is read
        // exactly once, with no leeway, and `exp == now` rejects. The
        // claim itself stays required.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.validate_aud = false;

        Self {
            decoding_key: DecodingKey::from_secret(config.secret.as_ref()),
            validation,
            cookie_name: config.cookie_name,
        }
    }

    /// Name of the cookie the extractors read the token from.
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Verify a raw token against the configured secret.
    ///
    /// Reads the clock once and delegates to [`verify_at`].
    ///
    /// [`verify_at`]: SessionVerifier::verify_at
    pub fn verify(&self, raw_token: Option<&str>) -> Result<Session, Rejection> {
        self.verify_at(raw_token, Utc::now().timestamp())
    }

    /// Verify a raw token at a caller-supplied observation instant
    /// (seconds since the Unix epoch).
    ///
    /// Pure function over its inputs. Checks short-circuit in order:
    /// structural parse, signature + algorithm, temporal validity,
    /// claims shape. All failure paths are externally
    /// indistinguishable; the [`Rejection`] reason is internal.
    pub fn verify_at(&self, raw_token: Option<&str>, now: i64) -> Result<Session, Rejection> {
        let token = raw_token.ok_or(Rejection::NoToken)?;

        check_declared_algorithm(token)?;

        let token_data = decode::<Value>(token, &self.decoding_key, &self.validation)
            .map_err(|e| rejection_for(e.kind()))?;

        let exp = token_data
            .claims
            .get("exp")
            .and_then(Value::as_i64)
            .ok_or(Rejection::InvalidClaims)?;
        if exp <= now {
            return Err(Rejection::Expired);
        }

        let claims: SessionClaims =
            serde_json::from_value(token_data.claims).map_err(|_| Rejection::InvalidClaims)?;
        if claims.user_id.is_empty() {
            return Err(Rejection::InvalidClaims);
        }

        Ok(Session::from_claims(claims))
    }
}

#[derive(Deserialize)]
struct TokenHeader {
    alg: String,
}

/// Reject any token whose header declares an algorithm other than
/// HS256 before attempting signature verification.
///
/// `jsonwebtoken` cannot represent algorithm names outside its
/// `Algorithm` enum, so a token declaring `"alg": "none"` would
/// otherwise fail header deserialization and look malformed. Algorithm
/// confusion is a signature-trust failure, so the declared name is
/// inspected directly.
fn check_declared_algorithm(token: &str) -> Result<(), Rejection> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(Rejection::Malformed);
    }

    let header: TokenHeader = URL_SAFE_NO_PAD
        .decode(segments[0])
        .ok()
        .and_then(|bytes| serde_json::from_slice(&bytes).ok())
        .ok_or(Rejection::Malformed)?;

    if header.alg != "HS256" {
        return Err(Rejection::BadSignature);
    }

    Ok(())
}

/// Map a decode failure onto the rejection taxonomy.
///
/// Signature verification runs before claim validation inside
/// `decode`, so a missing required claim implies the signature was
/// good and the problem is claim shape.
fn rejection_for(kind: &ErrorKind) -> Rejection {
    match kind {
        ErrorKind::InvalidSignature
        | ErrorKind::InvalidAlgorithm
        | ErrorKind::InvalidAlgorithmName => Rejection::BadSignature,
        ErrorKind::ExpiredSignature => Rejection::Expired,
        ErrorKind::MissingRequiredClaim(_) => Rejection::InvalidClaims,
        // InvalidToken, Base64, Json, Utf8: not a well-formed token
        _ => Rejection::Malformed,
    }
}

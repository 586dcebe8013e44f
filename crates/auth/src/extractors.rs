//! Axum extractors for session verification
//!
//! Generic over any state `S` where `SessionVerifier: FromRef<S>`.
//! This is axum's idiomatic nested-state pattern. Cookie parsing stays
//! out here at the transport boundary; the verifier itself only ever
//! sees an `Option<&str>`.

use std::convert::Infallible;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::cookie::CookieJar;

use crate::error::Rejection;
use crate::session::Session;
use crate::verifier::SessionVerifier;

/// Verified session extractor.
///
/// Reads the configured session cookie, verifies it, and rejects with
/// a uniform 401 when there is no valid session. Handlers that require
/// authentication take this.
#[derive(Debug)]
pub struct CurrentSession(pub Session);

impl<S> FromRequestParts<S> for CurrentSession
where
    SessionVerifier: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let verifier = SessionVerifier::from_ref(state);

        let jar = CookieJar::from_headers(&parts.headers);
        let raw_token = jar.get(verifier.cookie_name()).map(|c| c.value().to_owned());

        match verifier.verify(raw_token.as_deref()) {
            Ok(session) => Ok(CurrentSession(session)),
            Err(rejection) => {
                // Reason label only; never the token itself.
                tracing::debug!(reason = rejection.reason(), "session rejected");
                Err(rejection)
            }
        }
    }
}

/// Optional session extractor for routes where anonymous access is
/// normal. Any rejection collapses to `None`.
#[derive(Debug)]
pub struct MaybeSession(pub Option<Session>);

impl<S> FromRequestParts<S> for MaybeSession
where
    SessionVerifier: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let verifier = SessionVerifier::from_ref(state);

        let jar = CookieJar::from_headers(&parts.headers);
        let raw_token = jar.get(verifier.cookie_name()).map(|c| c.value().to_owned());

        Ok(MaybeSession(verifier.verify(raw_token.as_deref()).ok()))
    }
}

//! Pagesmith application composition root
//!
//! Builds the router and wires the session verifier from process
//! configuration.

use axum::{extract::FromRef, routing::get, Json, Router};
use pagesmith_auth::{AuthConfig, CurrentSession, Session, SessionVerifier};
use pagesmith_common::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub verifier: SessionVerifier,
}

impl FromRef<AppState> for SessionVerifier {
    fn from_ref(state: &AppState) -> Self {
        state.verifier.clone()
    }
}

/// Create the main application router with all routes and middleware
pub fn create_app(config: &Config) -> Router {
    let verifier = SessionVerifier::new(AuthConfig {
        secret: config.auth_secret.clone(),
        cookie_name: config.session_cookie.clone(),
    });

    let state = AppState { verifier };

    Router::new()
        .route("/health", get(health_check))
        .route(
            "/",
            get(|| async { "Pagesmith API v0.0.1-SNAPSHOT" }),
        )
        .route("/v1/session", get(current_session))
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Return the verified session for the authenticated user.
///
/// Unauthenticated requests are rejected by the extractor with a
/// uniform 401 before this handler runs.
async fn current_session(CurrentSession(session): CurrentSession) -> Json<Session> {
    Json(session)
}

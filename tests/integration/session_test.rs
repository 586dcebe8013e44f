//! Cookie-level session verification tests
//!
//! Drives the real router: tokens travel in the `auth-token` cookie
//! exactly as issued by the login flow, and every rejection cause must
//! produce the same externally visible 401.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::Value;
use tower::ServiceExt;

use pagesmith_auth::SessionClaims;
use pagesmith_common::Config;

const SECRET: &str = "integration-test-secret";
const COOKIE_NAME: &str = "auth-token";

fn test_app() -> Router {
    let config = Config {
        auth_secret: SECRET.to_string(),
        session_cookie: COOKIE_NAME.to_string(),
        log_level: "info".to_string(),
        rust_log: "pagesmith=debug".to_string(),
        port: 3000,
    };
    pagesmith_app::create_app(&config)
}

fn sign_token(user_id: &str, email: &str, exp_offset_secs: i64, secret: &str) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = SessionClaims {
        user_id: user_id.to_string(),
        email: email.to_string(),
        expires_at: None,
        iat: now as u64,
        exp: (now + exp_offset_secs) as u64,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .expect("Failed to encode token")
}

fn session_request(cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri("/v1/session");
    if let Some(value) = cookie {
        builder = builder.header(header::COOKIE, format!("{COOKIE_NAME}={value}"));
    }
    builder.body(Body::empty()).unwrap()
}

async fn read_body(response: axum::response::Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

#[tokio::test]
async fn test_health_check() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_no_cookie_is_unauthorized() {
    let response = test_app().oneshot(session_request(None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = serde_json::from_slice(&read_body(response).await).unwrap();
    assert_eq!(body["error"]["code"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_valid_cookie_returns_session() {
    let token = sign_token("user-123", "test@example.com", 7 * 24 * 60 * 60, SECRET);

    let response = test_app()
        .oneshot(session_request(Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(&read_body(response).await).unwrap();
    assert_eq!(body["userId"], "user-123");
    assert_eq!(body["email"], "test@example.com");
}

#[tokio::test]
async fn test_rejection_causes_are_externally_indistinguishable() {
    // Absent cookie, garbage, expired, and forged tokens must all
    // produce byte-identical 401 responses so a client cannot learn
    // why verification failed.
    let expired = sign_token("user-1", "a@b.com", -1, SECRET);
    let forged = sign_token("user-1", "a@b.com", 3600, "wrong-secret");

    let cookies: [Option<&str>; 4] = [
        None,
        Some("not.a.valid.jwt"),
        Some(&expired),
        Some(&forged),
    ];

    let mut bodies = Vec::new();
    for cookie in cookies {
        let response = test_app().oneshot(session_request(cookie)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        bodies.push(read_body(response).await);
    }

    for body in &bodies[1..] {
        assert_eq!(body, &bodies[0]);
    }
}

#[tokio::test]
async fn test_domain_expiry_is_passed_through() {
    let now = chrono::Utc::now().timestamp();
    let claims = SessionClaims {
        user_id: "user-123".to_string(),
        email: "test@example.com".to_string(),
        expires_at: Some("2026-09-05T00:00:00Z".to_string()),
        iat: now as u64,
        exp: (now + 3600) as u64,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_ref()),
    )
    .unwrap();

    let response = test_app()
        .oneshot(session_request(Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(&read_body(response).await).unwrap();
    assert_eq!(body["expiresAt"], "2026-09-05T00:00:00Z");
}

#[tokio::test]
async fn test_cookie_name_is_configurable() {
    let config = Config {
        auth_secret: SECRET.to_string(),
        session_cookie: "ps-session".to_string(),
        log_level: "info".to_string(),
        rust_log: "pagesmith=debug".to_string(),
        port: 3000,
    };
    let app = pagesmith_app::create_app(&config);
    let token = sign_token("user-123", "test@example.com", 3600, SECRET);

    // Token under the configured name authenticates
    let request = Request::builder()
        .uri("/v1/session")
        .header(header::COOKIE, format!("ps-session={token}"))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // The same token under the default name does not
    let request = Request::builder()
        .uri("/v1/session")
        .header(header::COOKIE, format!("auth-token={token}"))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

//! Session verification for the Pagesmith API
//!
//! Provides stateless verification of the signed session token carried
//! in the `auth-token` cookie, plus axum extractors that work with any
//! state implementing `FromRef<S>` for `SessionVerifier`.

mod claims;
mod config;
mod error;
mod extractors;
mod session;
mod verifier;

pub use claims::SessionClaims;
pub use config::{AuthConfig, DEFAULT_SESSION_COOKIE};
pub use error::Rejection;
pub use extractors::{CurrentSession, MaybeSession};
pub use session::Session;
pub use verifier::SessionVerifier;

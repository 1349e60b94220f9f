#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod auth;
pub mod config;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod state;
pub mod trace_ctx;

// Re-exports for public API
pub use adapters::todos_memory::InMemoryTodoData;
pub use auth::claims::AccessClaims;
pub use auth::identity::UserIdentity;
pub use auth::jwt::{mint_access_token, verify_access_token, TokenError, TOKEN_TTL_SECS};
pub use auth::verifier::{CredentialVerifier, StaticCredentialVerifier, StaticUser};
pub use error::AppError;
pub use extractors::current_user::{CurrentUser, SENTINEL_USER_ID};
pub use middleware::jwt_extract::JwtExtract;
pub use middleware::request_logger::RequestLogger;
pub use middleware::request_trace::RequestTrace;
pub use repos::todos::{TodoData, TodoItem};
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;

// Prelude for test convenience
pub mod prelude {
    pub use super::auth::claims::*;
    pub use super::auth::identity::*;
    pub use super::auth::jwt::*;
    pub use super::auth::verifier::*;
    pub use super::error::*;
    pub use super::extractors::*;
    pub use super::middleware::*;
    pub use super::state::*;
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}

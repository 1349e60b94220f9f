#![allow(dead_code)]

// tests/common/mod.rs

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::{HeaderName, CONTENT_TYPE};
use actix_web::test;
use serde_json::Value;

use backend::{SecurityConfig, StaticCredentialVerifier, StaticUser, UserIdentity};

// Logging is auto-installed for all integration test binaries
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Complete signing config shared by the integration tests.
pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(
        "test_secret_key_for_testing_purposes_only".as_bytes(),
        "tickoff-tests",
        "tickoff-clients",
    )
}

/// The demo credential table, reproduced here as a test fixture.
pub fn fixture_verifier() -> StaticCredentialVerifier {
    StaticCredentialVerifier::new(vec![
        StaticUser {
            password: "NAVA".to_string(),
            identity: sammy(),
        },
        StaticUser {
            password: "FLORES".to_string(),
            identity: dizzy(),
        },
    ])
}

pub fn sammy() -> UserIdentity {
    UserIdentity {
        id: 1,
        first_name: "Sammy".to_string(),
        last_name: "Nava".to_string(),
        user_name: "sammy".to_string(),
    }
}

pub fn dizzy() -> UserIdentity {
    UserIdentity {
        id: 2,
        first_name: "Dizzy".to_string(),
        last_name: "Flores".to_string(),
        user_name: "dizzy".to_string(),
    }
}

/// Validate that a response follows the ProblemDetails structure.
///
/// Checks the status, the content type, the `x-trace-id` header, the
/// `WWW-Authenticate: Bearer` challenge on 401s, and the body's code.
pub async fn assert_problem_details<B>(
    resp: ServiceResponse<B>,
    expected_status: u16,
    expected_code: &str,
) where
    B: MessageBody,
{
    assert_eq!(resp.status().as_u16(), expected_status);

    let headers = resp.headers().clone();

    let trace_hdr = HeaderName::from_static("x-trace-id");
    let trace_id = headers
        .get(&trace_hdr)
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header should be present and valid UTF-8");
    assert!(!trace_id.is_empty(), "x-trace-id header should not be empty");

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/problem+json"),
        "Content-Type must be application/problem+json (got {content_type})"
    );

    if expected_status == 401 {
        let challenge = headers
            .get(HeaderName::from_static("www-authenticate"))
            .and_then(|v| v.to_str().ok())
            .expect("401 responses must carry a WWW-Authenticate challenge");
        assert_eq!(challenge, "Bearer");
    }

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], expected_code);
    assert_eq!(body["status"], expected_status);
    assert_eq!(body["trace_id"], trace_id);
}

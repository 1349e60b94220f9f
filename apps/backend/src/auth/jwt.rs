use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;
use tracing::warn;

use crate::auth::claims::AccessClaims;
use crate::auth::identity::UserIdentity;
use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// Access tokens are valid for 60 minutes from issuance.
pub const TOKEN_TTL_SECS: i64 = 60 * 60;

/// Why a presented token was rejected.
///
/// Used for server-side logs and unit tests only. The HTTP layer collapses
/// every variant into one uniform unauthorized response so callers cannot
/// probe which check failed.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("signing configuration incomplete")]
    ConfigMissing,
    #[error("token outside its validity window")]
    Expired,
    #[error("signature mismatch")]
    BadSignature,
    #[error("issuer or audience mismatch")]
    WrongIssuerOrAudience,
    #[error("malformed token")]
    Malformed,
}

/// Mint a signed HS256 access token for `user`.
///
/// Returns `Ok(None)` when the signing config is incomplete: with no
/// trustworthy key there is nothing safe to sign, so issuance is disabled
/// rather than producing a weakly-signed token. Callers must treat `None`
/// as "cannot authenticate". `Err` is reserved for unrecoverable signing
/// failures, which indicate broken configuration rather than a bad request.
pub fn mint_access_token(
    user: &UserIdentity,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<Option<String>, AppError> {
    if !security.is_complete() {
        warn!("refusing to mint access token: signing configuration incomplete");
        return Ok(None);
    }

    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("system clock is before the unix epoch".to_string()))?
        .as_secs() as i64;
    let exp = iat + TOKEN_TTL_SECS;

    let claims = AccessClaims {
        sub: user.id.to_string(),
        unique_name: user.user_name.clone(),
        given_name: user.first_name.clone(),
        family_name: user.last_name.clone(),
        iss: security.issuer.clone(),
        aud: security.audience.clone(),
        nbf: iat,
        iat,
        exp,
    };

    let token = encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("failed to encode access token: {e}")))?;

    Ok(Some(token))
}

/// Verify a presented token and return its claims.
///
/// All checks are mandatory: structure, signature, issuer, audience, and
/// the validity window (with the library's default clock-skew leeway). An
/// incomplete signing config rejects every token, matching the issuance
/// side of the fail-closed policy.
pub fn verify_access_token(
    token: &str,
    security: &SecurityConfig,
) -> Result<AccessClaims, TokenError> {
    if !security.is_complete() {
        return Err(TokenError::ConfigMissing);
    }

    let mut validation = Validation::new(security.algorithm);
    validation.set_issuer(&[&security.issuer]);
    validation.set_audience(&[&security.audience]);
    validation.validate_nbf = true;

    decode::<AccessClaims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature
        | jsonwebtoken::errors::ErrorKind::ImmatureSignature => TokenError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::BadSignature,
        jsonwebtoken::errors::ErrorKind::InvalidIssuer
        | jsonwebtoken::errors::ErrorKind::InvalidAudience => TokenError::WrongIssuerOrAudience,
        _ => TokenError::Malformed,
    })
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use super::{mint_access_token, verify_access_token, TokenError, TOKEN_TTL_SECS};
    use crate::auth::identity::UserIdentity;
    use crate::state::security_config::SecurityConfig;

    fn test_security() -> SecurityConfig {
        SecurityConfig::new(
            "test_secret_key_for_testing_purposes_only".as_bytes(),
            "tickoff-tests",
            "tickoff-clients",
        )
    }

    fn test_user() -> UserIdentity {
        UserIdentity {
            id: 7,
            first_name: "Sammy".to_string(),
            last_name: "Nava".to_string(),
            user_name: "sammy".to_string(),
        }
    }

    /// Corrupt one character in the middle of the signature segment.
    fn tamper_signature(token: &str) -> String {
        let mut segments: Vec<String> = token.split('.').map(str::to_string).collect();
        assert_eq!(segments.len(), 3);
        let sig = &segments[2];
        let idx = sig.len() / 2;
        let original = sig.as_bytes()[idx];
        let replacement = if original == b'A' { 'B' } else { 'A' };
        let mut tampered = sig.clone();
        tampered.replace_range(idx..idx + 1, &replacement.to_string());
        segments[2] = tampered;
        segments.join(".")
    }

    #[test]
    fn mint_and_verify_roundtrip() {
        let security = test_security();
        let user = test_user();
        let now = SystemTime::now();

        let token = mint_access_token(&user, now, &security).unwrap().unwrap();
        let claims = verify_access_token(&token, &security).unwrap();

        assert_eq!(claims.sub, "7");
        assert_eq!(claims.unique_name, "sammy");
        assert_eq!(claims.given_name, "Sammy");
        assert_eq!(claims.family_name, "Nava");
        assert_eq!(claims.iss, "tickoff-tests");
        assert_eq!(claims.aud, "tickoff-clients");
        assert_eq!(
            claims.iat,
            now.duration_since(UNIX_EPOCH).unwrap().as_secs() as i64
        );
        assert_eq!(claims.exp, claims.iat + TOKEN_TTL_SECS);
        assert_eq!(claims.nbf, claims.iat);
    }

    #[test]
    fn token_has_three_segments() {
        let token = mint_access_token(&test_user(), SystemTime::now(), &test_security())
            .unwrap()
            .unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn incomplete_config_mints_nothing() {
        let user = test_user();
        let now = SystemTime::now();

        let no_secret = SecurityConfig::new(Vec::new(), "iss", "aud");
        let no_issuer = SecurityConfig::new(b"secret".to_vec(), "", "aud");
        let no_audience = SecurityConfig::new(b"secret".to_vec(), "iss", "");

        assert!(mint_access_token(&user, now, &no_secret).unwrap().is_none());
        assert!(mint_access_token(&user, now, &no_issuer).unwrap().is_none());
        assert!(mint_access_token(&user, now, &no_audience)
            .unwrap()
            .is_none());
    }

    #[test]
    fn incomplete_config_rejects_all_tokens() {
        let complete = test_security();
        let token = mint_access_token(&test_user(), SystemTime::now(), &complete)
            .unwrap()
            .unwrap();

        // Same secret, but the validation side lost its issuer: every token
        // is rejected regardless of signature.
        let incomplete = SecurityConfig::new(
            "test_secret_key_for_testing_purposes_only".as_bytes(),
            "",
            "tickoff-clients",
        );

        let err = verify_access_token(&token, &incomplete).unwrap_err();
        assert!(matches!(err, TokenError::ConfigMissing));
    }

    #[test]
    fn expired_token_is_rejected() {
        let security = test_security();
        // Two hours ago; the one-hour TTL plus default leeway is long past.
        let then = SystemTime::now() - Duration::from_secs(2 * 60 * 60);
        let token = mint_access_token(&test_user(), then, &security)
            .unwrap()
            .unwrap();

        let err = verify_access_token(&token, &security).unwrap_err();
        assert!(matches!(err, TokenError::Expired));
    }

    #[test]
    fn foreign_secret_is_rejected() {
        let security_a = SecurityConfig::new(b"secret-A".to_vec(), "iss", "aud");
        let security_b = SecurityConfig::new(b"secret-B".to_vec(), "iss", "aud");

        let token = mint_access_token(&test_user(), SystemTime::now(), &security_a)
            .unwrap()
            .unwrap();

        let err = verify_access_token(&token, &security_b).unwrap_err();
        assert!(matches!(err, TokenError::BadSignature));
    }

    #[test]
    fn issuer_mismatch_is_rejected() {
        let minting = SecurityConfig::new(b"secret".to_vec(), "issuer-a", "aud");
        let validating = SecurityConfig::new(b"secret".to_vec(), "issuer-b", "aud");

        let token = mint_access_token(&test_user(), SystemTime::now(), &minting)
            .unwrap()
            .unwrap();

        let err = verify_access_token(&token, &validating).unwrap_err();
        assert!(matches!(err, TokenError::WrongIssuerOrAudience));
    }

    #[test]
    fn audience_mismatch_is_rejected() {
        let minting = SecurityConfig::new(b"secret".to_vec(), "iss", "audience-a");
        let validating = SecurityConfig::new(b"secret".to_vec(), "iss", "audience-b");

        let token = mint_access_token(&test_user(), SystemTime::now(), &minting)
            .unwrap()
            .unwrap();

        let err = verify_access_token(&token, &validating).unwrap_err();
        assert!(matches!(err, TokenError::WrongIssuerOrAudience));
    }

    #[test]
    fn tampered_signature_is_rejected() {
        let security = test_security();
        let token = mint_access_token(&test_user(), SystemTime::now(), &security)
            .unwrap()
            .unwrap();

        let tampered = tamper_signature(&token);
        assert_ne!(token, tampered);

        let err = verify_access_token(&tampered, &security).unwrap_err();
        assert!(matches!(err, TokenError::BadSignature));
    }

    #[test]
    fn garbage_is_malformed() {
        let security = test_security();
        let err = verify_access_token("not-a-token", &security).unwrap_err();
        assert!(matches!(err, TokenError::Malformed));
    }
}

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::Serialize;

use crate::auth::claims::AccessClaims;
use crate::error::AppError;

/// User id presented when the subject claim is absent or not numeric.
/// Downstream logic decides what to do with it; projecting the claims
/// must never fail on a bad subject.
pub const SENTINEL_USER_ID: i64 = -1;

/// Read-only identity of the calling user for the current request.
///
/// Projected from the claims the `JwtExtract` middleware stored in the
/// request extensions; dropped when the request ends. Requesting it on a
/// route the middleware did not cover yields an unauthorized error.
#[derive(Debug, Serialize, Clone)]
pub struct CurrentUser {
    pub user_id: i64,
    pub user_name: String,
    pub given_name: String,
    pub family_name: String,
}

impl CurrentUser {
    fn from_claims(claims: &AccessClaims) -> Self {
        Self {
            user_id: claims.sub.parse().unwrap_or(SENTINEL_USER_ID),
            user_name: claims.unique_name.clone(),
            given_name: claims.given_name.clone(),
            family_name: claims.family_name.clone(),
        }
    }
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let claims = req.extensions().get::<AccessClaims>().cloned();

        ready(match claims {
            Some(claims) => Ok(CurrentUser::from_claims(&claims)),
            None => Err(AppError::unauthorized()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{CurrentUser, SENTINEL_USER_ID};
    use crate::auth::claims::AccessClaims;

    fn claims_with_sub(sub: &str) -> AccessClaims {
        AccessClaims {
            sub: sub.to_string(),
            unique_name: "dizzy".to_string(),
            given_name: "Dizzy".to_string(),
            family_name: "Flores".to_string(),
            iss: "iss".to_string(),
            aud: "aud".to_string(),
            nbf: 0,
            iat: 0,
            exp: 0,
        }
    }

    #[test]
    fn numeric_subject_becomes_user_id() {
        let user = CurrentUser::from_claims(&claims_with_sub("42"));
        assert_eq!(user.user_id, 42);
        assert_eq!(user.user_name, "dizzy");
        assert_eq!(user.given_name, "Dizzy");
        assert_eq!(user.family_name, "Flores");
    }

    #[test]
    fn non_numeric_subject_maps_to_sentinel() {
        assert_eq!(
            CurrentUser::from_claims(&claims_with_sub("abc")).user_id,
            SENTINEL_USER_ID
        );
        assert_eq!(
            CurrentUser::from_claims(&claims_with_sub("")).user_id,
            SENTINEL_USER_ID
        );
    }
}

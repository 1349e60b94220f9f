//! Bearer-token validation middleware.
//!
//! Runs on every route of the scopes it wraps, before any handler logic:
//! it extracts the `Authorization: Bearer` token, verifies it against the
//! signing config in `AppState`, and stores the validated claims in the
//! request extensions for the `CurrentUser` extractor. Any failure short-
//! circuits into a uniform 401; routes left outside these scopes (the
//! token endpoint, the health probe) are the anonymous-allowed exceptions.

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use thiserror::Error as ThisError;
use tracing::warn;

use crate::auth::claims::AccessClaims;
use crate::auth::jwt::{verify_access_token, TokenError};
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Why the gate turned a request away. Log-only detail; the response is
/// the same 401 in every case.
#[derive(Debug, ThisError)]
enum GateRejection {
    #[error("missing Authorization header")]
    MissingHeader,
    #[error("malformed Authorization header")]
    MalformedHeader,
    #[error(transparent)]
    Token(#[from] TokenError),
}

pub struct JwtExtract;

impl<S, B> Transform<S, ServiceRequest> for JwtExtract
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtExtractMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtExtractMiddleware { service }))
    }
}

pub struct JwtExtractMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for JwtExtractMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let Some(app_state) = req.app_data::<web::Data<AppState>>().cloned() else {
            return Box::pin(async move {
                let error = AppError::internal("AppState not available".to_string());
                let res = error.error_response().map_into_right_body();
                Ok(req.into_response(res))
            });
        };

        let outcome = bearer_token(&req).and_then(|token| {
            verify_access_token(&token, &app_state.security).map_err(GateRejection::from)
        });

        match outcome {
            Ok(claims) => {
                // Store claims in request extensions BEFORE calling the service
                req.extensions_mut().insert(claims);
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(|res| res.map_into_left_body()) })
            }
            Err(rejection) => Box::pin(async move {
                warn!(path = %req.path(), reason = %rejection, "rejected request to protected route");
                let res = AppError::unauthorized().error_response().map_into_right_body();
                Ok(req.into_response(res))
            }),
        }
    }
}

/// Pull the raw token out of `Authorization: Bearer <token>`.
fn bearer_token(req: &ServiceRequest) -> Result<String, GateRejection> {
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(GateRejection::MissingHeader)?;

    let value = header_value
        .to_str()
        .map_err(|_| GateRejection::MalformedHeader)?;

    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) if !token.is_empty() => Ok(token.to_string()),
        _ => Err(GateRejection::MalformedHeader),
    }
}

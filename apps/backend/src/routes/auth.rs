use std::time::SystemTime;

use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse, Result};
use serde::Deserialize;
use tracing::info;

use crate::auth::jwt::mint_access_token;
use crate::error::AppError;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Exchange a username/password pair for a bearer token.
///
/// On success the serialized token is the plain-text response body. Every
/// failure mode — unknown user, wrong password, absent fields, disabled
/// signing config — collapses into the same 401 with no body detail.
async fn token(
    req: web::Json<TokenRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user = app_state
        .verifier
        .verify(req.user_name.as_deref(), req.password.as_deref())
        .await
        .ok_or_else(AppError::unauthorized)?;

    let token = mint_access_token(&user, SystemTime::now(), &app_state.security)?
        .ok_or_else(AppError::unauthorized)?;

    info!(user_id = user.id, "issued access token");

    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(token))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/token").route(web::post().to(token)));
}

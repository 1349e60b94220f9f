use std::env;

use actix_cors::Cors;
use actix_web::http::header;

/// Development fallback when no valid origin is configured.
const LOCALHOST_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

/// Comma-separated origins, e.g.:
/// CORS_ALLOWED_ORIGINS=http://localhost:3000,https://app.tickoff.app
fn configured_origins() -> Vec<String> {
    env::var("CORS_ALLOWED_ORIGINS")
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|origin| origin.starts_with("http://") || origin.starts_with("https://"))
        .map(str::to_string)
        .collect()
}

/// Build CORS middleware with a restrictive, explicit configuration.
///
/// Only the methods and headers the API actually uses are allowed, and
/// origins must be listed explicitly; empty or non-http(s) entries are
/// dropped during parsing.
pub fn cors_middleware() -> Cors {
    let mut origins = configured_origins();
    if origins.is_empty() {
        origins = LOCALHOST_ORIGINS.map(String::from).to_vec();
    }

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-trace-id")])
        .max_age(3600);

    for origin in &origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}

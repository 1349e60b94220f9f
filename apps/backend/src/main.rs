use std::sync::Arc;

use actix_extensible_rate_limit::backend::memory::InMemoryBackend;
use actix_extensible_rate_limit::RateLimiter;
use actix_web::{web, App, HttpServer};
use backend::adapters::todos_memory::InMemoryTodoData;
use backend::config::auth::{bootstrap_verifier_from_env, security_from_env};
use backend::middleware::cors::cors_middleware;
use backend::middleware::jwt_extract::JwtExtract;
use backend::middleware::rate_limit::{api_rate_limit_config, auth_rate_limit_config};
use backend::middleware::request_logger::RequestLogger;
use backend::middleware::request_trace::RequestTrace;
use backend::middleware::security_headers::SecurityHeaders;
use backend::routes;
use backend::state::app_state::AppState;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: via docker-compose env_file or docker run --env-file
    // - Local dev: source env files manually (e.g., set -a; . ./.env; set +a)
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        });

    // An incomplete signing config does not abort startup: the subsystem
    // stays disabled and every issuance/validation fails closed at request
    // time. security_from_env logs the warning.
    let security = security_from_env();
    let verifier = bootstrap_verifier_from_env();

    let app_state = AppState::new(
        security,
        Arc::new(verifier),
        Arc::new(InMemoryTodoData::new()),
    );
    let data = web::Data::new(app_state);

    let rate_limit_store = InMemoryBackend::builder().build();

    tracing::info!(%host, %port, "starting tickoff backend");

    HttpServer::new(move || {
        let auth_limiter =
            RateLimiter::builder(rate_limit_store.clone(), auth_rate_limit_config().build())
                .add_headers()
                .build();
        let api_limiter =
            RateLimiter::builder(rate_limit_store.clone(), api_rate_limit_config().build())
                .add_headers()
                .build();

        App::new()
            .wrap(cors_middleware())
            .wrap(SecurityHeaders)
            .wrap(RequestLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .service(
                web::scope("/api/todos")
                    .wrap(JwtExtract)
                    .wrap(api_limiter)
                    .configure(routes::todos::configure_routes),
            )
            .service(
                web::scope("/api/auth")
                    .wrap(auth_limiter)
                    .configure(routes::auth::configure_routes),
            )
            .configure(routes::health::configure_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}

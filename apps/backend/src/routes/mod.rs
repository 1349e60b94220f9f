use actix_web::web;

pub mod auth;
pub mod health;
pub mod todos;

/// Configure the anonymous-allowed routes: the token endpoint and the
/// health probe.
///
/// In production, `main.rs` wires these with additional middleware (rate
/// limiting) and puts the to-do routes behind the `JwtExtract` gate. Tests
/// register the same paths through this function plus an explicitly
/// gated to-do scope, so route behavior can be exercised without the
/// limiters.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Token issuance: /api/auth/token
    cfg.service(web::scope("/api/auth").configure(auth::configure_routes));

    // Liveness probe: /health
    cfg.configure(health::configure_routes);
}

pub mod cors;
pub mod jwt_extract;
pub mod rate_limit;
pub mod request_logger;
pub mod request_trace;
pub mod security_headers;

pub use cors::cors_middleware;
pub use jwt_extract::JwtExtract;
pub use request_logger::RequestLogger;
pub use request_trace::RequestTrace;
pub use security_headers::SecurityHeaders;

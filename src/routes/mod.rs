use actix_web::web;

/// # Greeting Endpoint
///
/// Returns a fixed greeting together with the current timestamp.
pub mod greeting;

/// # Service Info Endpoint
///
/// Returns service name, version and runtime environment metadata.
pub mod info;

/// # Route Configuration
///
/// Registers all endpoints with the Actix-web service configuration.
///
/// ## Configured Routes
///
/// ```text
/// GET /         - Greeting with current timestamp
/// GET /api/info - Service and environment metadata
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(greeting::greeting).service(info::info);
}

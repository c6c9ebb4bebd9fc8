use std::env;

/// Port used when `PORT` is unset or does not parse as a TCP port.
pub const DEFAULT_PORT: u16 = 3000;

/// Fallback runtime environment name when `APP_ENV` is unset.
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Fallback host identifier when `HOSTNAME` is unset.
pub const DEFAULT_POD_NAME: &str = "local";

/// # Application Configuration
///
/// Process-wide immutable configuration, captured once at startup from the
/// environment and injected into handlers via `web::Data`.
///
/// ## Fields
/// - `port`: TCP port to bind, from `PORT` (default 3000)
/// - `environment`: runtime environment name, from `APP_ENV` (default "development")
/// - `pod_name`: host identifier of the serving instance, from `HOSTNAME` (default "local")
///
/// Missing or malformed values are replaced by their defaults and never
/// surfaced as errors.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub port: u16,
    pub environment: String,
    pub pod_name: String,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("PORT").ok(),
            env::var("APP_ENV").ok(),
            env::var("HOSTNAME").ok(),
        )
    }

    fn from_vars(port: Option<String>, environment: Option<String>, pod_name: Option<String>) -> Self {
        Self {
            port: port
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            environment: environment.unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            pod_name: pod_name.unwrap_or_else(|| DEFAULT_POD_NAME.to_string()),
        }
    }
}

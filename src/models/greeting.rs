use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Greeting text returned by the root endpoint.
pub const GREETING_MESSAGE: &str =
    "Привет из бессерверного приложения Azure Container Apps!";

/// # Greeting Response
///
/// Response body for the root endpoint: a fixed greeting and the time the
/// request was handled.
///
/// ## Fields
/// - `message`: fixed human-readable greeting
/// - `timestamp`: ISO 8601 timestamp with millisecond precision and a UTC
///   `Z` designator
///
/// ## Example JSON
/// ```json
/// {
///   "message": "Привет из бессерверного приложения Azure Container Apps!",
///   "timestamp": "2024-03-10T15:30:45.123Z"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct GreetingResponse {
    pub message: String,
    pub timestamp: String,
}

impl GreetingResponse {
    pub fn new() -> Self {
        Self {
            message: GREETING_MESSAGE.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

impl Default for GreetingResponse {
    fn default() -> Self {
        Self::new()
    }
}

use crate::config::AppConfig;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fixed service name reported by the info endpoint.
pub const SERVICE_NAME: &str = "Azure Container Apps Demo";

/// Fixed semantic version reported by the info endpoint.
pub const SERVICE_VERSION: &str = "1.0.0";

/// # Service Info Response
///
/// Service and environment metadata reported by `GET /api/info`. The static
/// fields identify the service; the dynamic ones describe where it runs.
///
/// ## Fields
/// - `service`: fixed service name
/// - `version`: fixed semantic version
/// - `environment`: runtime environment name ("development" when not configured)
/// - `podName`: identifier of the serving host ("local" when not configured)
///
/// ## Example JSON
/// ```json
/// {
///   "service": "Azure Container Apps Demo",
///   "version": "1.0.0",
///   "environment": "production",
///   "podName": "demo-app-7f9c4d"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInfoResponse {
    pub service: String,
    pub version: String,
    pub environment: String,
    pub pod_name: String,
}

impl ServiceInfoResponse {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
            version: SERVICE_VERSION.to_string(),
            environment: config.environment.clone(),
            pod_name: config.pod_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AppConfig {
        AppConfig {
            port: 3000,
            environment: "staging".to_string(),
            pod_name: "pod-42".to_string(),
        }
    }

    #[test]
    fn test_static_fields() {
        let response = ServiceInfoResponse::from_config(&test_config());

        assert_eq!(response.service, "Azure Container Apps Demo");
        assert_eq!(response.version, "1.0.0");
    }

    #[test]
    fn test_environment_fields_come_from_config() {
        let response = ServiceInfoResponse::from_config(&test_config());

        assert_eq!(response.environment, "staging");
        assert_eq!(response.pod_name, "pod-42");
    }

    #[test]
    fn test_pod_name_serializes_as_camel_case() {
        let response = ServiceInfoResponse::from_config(&test_config());
        let json = serde_json::to_value(&response).expect("Should serialize to JSON");

        let object = json.as_object().expect("Should serialize to a JSON object");
        assert_eq!(object.len(), 4);
        assert_eq!(object["podName"], "pod-42");
        assert!(!object.contains_key("pod_name"));
    }
}

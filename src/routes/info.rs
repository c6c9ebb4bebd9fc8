use crate::config::AppConfig;
use crate::models::info::ServiceInfoResponse;
use actix_web::{HttpResponse, Responder, get, web::Data};

/// # Service Info Endpoint
///
/// Reports the service name and version alongside the runtime environment
/// and host identifier the process was started with.
///
/// ## Response
///
/// - **200 OK**: Metadata payload
///   - Body: [`ServiceInfoResponse`] with `service`, `version`, `environment`
///     and `podName`
///
/// ## Example Response
///
/// ```json
/// {
///   "service": "Azure Container Apps Demo",
///   "version": "1.0.0",
///   "environment": "development",
///   "podName": "local"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/api/info",
    tag = "Service Info",
    responses(
        (status = 200, description = "Service and environment metadata", body = ServiceInfoResponse)
    )
)]
#[get("/api/info")]
pub async fn info(config: Data<AppConfig>) -> impl Responder {
    HttpResponse::Ok().json(ServiceInfoResponse::from_config(&config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use serde_json::Value;

    async fn fetch_info(config: AppConfig) -> Value {
        let app =
            test::init_service(App::new().app_data(Data::new(config)).service(info)).await;
        let req = test::TestRequest::get().uri("/api/info").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200, "Status code should be 200 OK");

        let content_type = resp
            .headers()
            .get("content-type")
            .expect("Content-Type header should be present");
        assert_eq!(content_type, "application/json");

        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).expect("Body should be valid JSON")
    }

    #[actix_web::test]
    async fn test_info_endpoint_with_defaults() {
        let body = fetch_info(AppConfig {
            port: 3000,
            environment: "development".to_string(),
            pod_name: "local".to_string(),
        })
        .await;

        assert_eq!(body["service"], "Azure Container Apps Demo");
        assert_eq!(body["version"], "1.0.0");
        assert_eq!(body["environment"], "development");
        assert_eq!(body["podName"], "local");
    }

    #[actix_web::test]
    async fn test_info_endpoint_reflects_configuration() {
        let body = fetch_info(AppConfig {
            port: 3000,
            environment: "production".to_string(),
            pod_name: "demo-app-7f9c4d".to_string(),
        })
        .await;

        assert_eq!(body["environment"], "production");
        assert_eq!(body["podName"], "demo-app-7f9c4d");
    }

    #[actix_web::test]
    async fn test_info_body_has_exactly_four_keys() {
        let body = fetch_info(AppConfig {
            port: 3000,
            environment: "development".to_string(),
            pod_name: "local".to_string(),
        })
        .await;

        let object = body.as_object().expect("Body should be a JSON object");
        assert_eq!(object.len(), 4);
        for key in ["service", "version", "environment", "podName"] {
            assert!(object[key].is_string(), "{} should be a string", key);
        }
    }
}

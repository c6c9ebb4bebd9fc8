use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Defines the API contract using OpenAPI 3.0 format with utoipa procedural macros.
///
/// # Endpoints
/// - Greeting: `GET /`
/// - Service Info: `GET /api/info`
///
/// # Schemas
/// - `GreetingResponse`: Greeting message with current timestamp
/// - `ServiceInfoResponse`: Service and environment metadata
///
/// # Note
/// The OpenAPI spec is generated at compile time from these annotations. Any changes
/// to the API surface should be reflected here first to maintain documentation accuracy.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::greeting::greeting,
        crate::routes::info::info,
    ),
    components(
        schemas(
            crate::models::greeting::GreetingResponse,
            crate::models::info::ServiceInfoResponse
        )
    ),
    tags(
        (name = "Greeting", description = "Static greeting endpoint"),
        (name = "Service Info", description = "Service and environment metadata endpoints")
    ),
    info(
        description = "Demo HTTP service exposing greeting and environment metadata endpoints",
        title = "Azure Container Apps Demo",
        version = "1.0.0",
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_documents_both_routes() {
        let spec = ApiDoc::openapi();

        assert!(spec.paths.paths.contains_key("/"));
        assert!(spec.paths.paths.contains_key("/api/info"));
    }
}

use actix_web::{App, HttpServer, web::Data};
use container_info_service::config::AppConfig;
use container_info_service::openapi::ApiDoc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Container Info Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Greeting and service-info REST endpoints
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
///
/// # Endpoints
/// - Greeting: `GET /`
/// - Service Info: `GET /api/info`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - Server binds to `0.0.0.0` on the port given by `PORT` (default 3000)
/// - `APP_ENV` and `HOSTNAME` feed the info endpoint
/// - Environment variables loaded from `.env` file (if present)
///
/// A bind failure is fatal and terminates the process with a non-zero exit
/// code; configuration problems are absorbed by defaults instead.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let config = AppConfig::from_env();
    let port = config.port;

    let server = HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .app_data(Data::new(config.clone()))
            .configure(container_info_service::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind(("0.0.0.0", port))?;

    println!("Server running on port {}", port);

    server.run().await
}

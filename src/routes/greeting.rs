use crate::models::greeting::GreetingResponse;
use actix_web::{HttpResponse, Responder, get};

/// # Greeting Endpoint
///
/// Returns a fixed greeting message and the time the request was handled.
///
/// ## Response
///
/// - **200 OK**: Greeting payload
///   - Content-Type: `application/json`
///   - Body: [`GreetingResponse`] with `message` and an ISO 8601 `timestamp`
///
/// ## Example Response
///
/// ```json
/// {
///   "message": "Привет из бессерверного приложения Azure Container Apps!",
///   "timestamp": "2023-10-05T12:34:56.789Z"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/",
    tag = "Greeting",
    responses(
        (status = 200, description = "Greeting with current timestamp", body = GreetingResponse)
    )
)]
#[get("/")]
pub async fn greeting() -> impl Responder {
    HttpResponse::Ok().json(GreetingResponse::new())
}

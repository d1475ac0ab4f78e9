//! Greeting served at the API root.

use actix_web::{HttpResponse, get};

/// Plain-text greeting, handy as a smoke test.
#[utoipa::path(
    get,
    path = "/api/",
    responses((status = 200, description = "Greeting", body = String, content_type = "text/plain")),
    tags = ["welcome"],
    operation_id = "welcome"
)]
#[get("/")]
pub async fn welcome() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Welcome to Petfinder")
}

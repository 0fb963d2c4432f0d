use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, models::dto::HealthResponse};

#[get("/api/health")]
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK",
        has_api_key: state.config.has_openai_key(),
    })
}

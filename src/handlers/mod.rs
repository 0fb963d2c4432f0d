pub mod health_handler;
pub mod wizard_handler;

use actix_web::{error::InternalError, web, HttpResponse};

use crate::errors::{AppError, ErrorResponse};

pub use health_handler::health_check;
pub use wizard_handler::{generate_prompts, generate_questions};

/// Registers every route of the wizard API.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(generate_questions)
        .service(generate_prompts)
        .service(health_check);
}

/// JSON extractor config whose rejections use the API error body.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let app_error = AppError::InvalidRequest(err.to_string());
        let response = HttpResponse::build(app_error.status_code()).json(ErrorResponse {
            error: app_error.to_string(),
            details: None,
        });
        InternalError::from_response(err, response).into()
    })
}

use actix_web::{post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::{ApiError, AppError, Operation},
    middleware::get_request_id,
    models::dto::{GeneratePromptsRequest, GenerateQuestionsRequest, GenerateQuestionsResponse},
};

fn request_label(req: &HttpRequest) -> String {
    get_request_id(req)
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[post("/api/generate-questions")]
pub async fn generate_questions(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<GenerateQuestionsRequest>,
) -> Result<HttpResponse, ApiError> {
    let operation = Operation::GenerateQuestions;
    let request = request.into_inner();
    request
        .validate()
        .map_err(|e| AppError::from(e).during(operation))?;

    let topic = request.topic.unwrap_or_default();
    let questions = state
        .question_service
        .generate_questions(&topic)
        .await
        .map_err(|e| {
            log::error!("[{}] Error generating questions: {}", request_label(&req), e);
            e.during(operation)
        })?;

    Ok(HttpResponse::Ok().json(GenerateQuestionsResponse { questions }))
}

#[post("/api/generate-prompts")]
pub async fn generate_prompts(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<GeneratePromptsRequest>,
) -> Result<HttpResponse, ApiError> {
    let operation = Operation::GeneratePrompts;
    let request = request.into_inner();
    request
        .validate()
        .map_err(|e| AppError::from(e).during(operation))?;

    let (topic, clarifications) = request.into_parts();
    let prompts = state
        .prompt_service
        .generate_prompts(&topic, &clarifications)
        .await
        .map_err(|e| {
            log::error!("[{}] Error generating prompts: {}", request_label(&req), e);
            e.during(operation)
        })?;

    Ok(HttpResponse::Ok().json(prompts))
}

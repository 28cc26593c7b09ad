//! Administrative JSON API for creating questions and choices.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::{ApiError, AppError};
use crate::models::{Choice, CreateChoiceRequest, CreateQuestionRequest, Question};
use crate::AppState;

/// GET /api/questions - List all questions, including unpublished ones.
pub async fn list_questions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Question>>, ApiError> {
    Ok(Json(state.repo.list_questions().await?))
}

/// POST /api/questions - Create a question. `pub_date` defaults to now.
pub async fn create_question(
    State(state): State<AppState>,
    Json(request): Json<CreateQuestionRequest>,
) -> Result<Json<Question>, ApiError> {
    if request.question_text.trim().is_empty() {
        return Err(AppError::Validation("Question text is required".to_string()).into());
    }

    let question = state.repo.create_question(&request).await?;
    Ok(Json(question))
}

/// POST /api/questions/{id}/choices - Add a choice to an existing question.
pub async fn create_choice(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<CreateChoiceRequest>,
) -> Result<Json<Choice>, ApiError> {
    if request.choice_text.trim().is_empty() {
        return Err(AppError::Validation("Choice text is required".to_string()).into());
    }

    let choice = state.repo.create_choice(id, &request).await?;
    Ok(Json(choice))
}

//! Public poll pages: listing, detail, results, and vote submission.

use axum::{
    extract::{Form, Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;
use tera::Context;

use crate::errors::AppError;
use crate::templates::render;
use crate::AppState;

/// GET /polls/ - List published questions, newest first.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let now = Utc::now();
    let questions = state.repo.list_published_questions(now).await?;

    let recent = questions
        .iter()
        .filter(|q| q.was_published_recently_at(now))
        .count();
    tracing::debug!(
        "Listing {} published questions ({} recent)",
        questions.len(),
        recent
    );

    let mut context = Context::new();
    context.insert("questions", &questions);
    render("index.html", &context)
}

/// GET /polls/{id}/ - Question detail page with the vote form.
///
/// 404 for unknown ids and for questions whose publication date has not
/// passed yet.
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let question = state
        .repo
        .get_published_question(id, Utc::now())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Question {} not found", id)))?;
    let choices = state.repo.list_choices(question.id).await?;

    let mut context = Context::new();
    context.insert("question", &question);
    context.insert("choices", &choices);
    render("detail.html", &context)
}

/// GET /polls/{id}/results/ - Vote tallies, with the same 404 gating as the
/// detail page.
pub async fn results(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let question = state
        .repo
        .get_published_question(id, Utc::now())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Question {} not found", id)))?;
    let choices = state.repo.list_choices(question.id).await?;

    let mut context = Context::new();
    context.insert("question", &question);
    context.insert("choices", &choices);
    render("results.html", &context)
}

/// Form body for vote submissions. The `choice` field is the id of the
/// selected choice; browsers omit the field entirely when no radio button is
/// checked.
#[derive(Debug, Deserialize)]
pub struct VoteForm {
    #[serde(default)]
    choice: Option<String>,
}

/// POST /polls/{id}/vote/ - Record a vote for one of the question's choices.
///
/// A missing or unresolvable selection redisplays the detail page with an
/// error message and mutates nothing. A valid selection increments the tally
/// and redirects to the results page.
pub async fn vote(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<VoteForm>,
) -> Result<Response, AppError> {
    let question = state
        .repo
        .get_question(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Question {} not found", id)))?;

    let selected = form.choice.as_deref().and_then(|raw| raw.parse::<i64>().ok());

    let accepted = match selected {
        Some(choice_id) => state.repo.record_vote(question.id, choice_id).await?,
        None => false,
    };

    if !accepted {
        // Redisplay the voting form with an error message.
        let choices = state.repo.list_choices(question.id).await?;
        let mut context = Context::new();
        context.insert("question", &question);
        context.insert("choices", &choices);
        context.insert("error_message", "You did not select a choice.");
        return Ok(render("detail.html", &context)?.into_response());
    }

    tracing::debug!("Recorded vote on question {}", question.id);

    let target = format!("/polls/{}/results/", question.id);
    Ok((StatusCode::FOUND, [(header::LOCATION, target)]).into_response())
}

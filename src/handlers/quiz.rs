use std::collections::HashMap;

use axum::{
    extract::{Form, Path, State},
    routing::{get, post},
    Router,
};

use crate::models::{AnswerValue, QuestionType, QuizDefinition, QuizResponse};
use crate::{
    names,
    rejections::{AppError, ResultExt},
    views, AppState,
};

use crate::views::quiz as quiz_views;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/quizzes", get(quiz_list))
        .route("/quiz/{slug}", get(quiz_page))
        .route("/quiz/{slug}/submit", post(submit))
}

async fn quiz_list(State(state): State<AppState>) -> Result<maud::Markup, AppError> {
    let quizzes = state
        .db
        .published_quizzes()
        .await
        .reject("could not load quizzes")?;

    Ok(views::page("Assessments", quiz_views::quiz_list(&quizzes)))
}

async fn quiz_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<maud::Markup, AppError> {
    let Some(record) = state
        .db
        .quiz_by_slug(&slug)
        .await
        .reject("could not load quiz")?
    else {
        return Err(AppError::NotFound);
    };

    let Some(definition) = record.parsed_definition() else {
        tracing::error!("quiz '{slug}' has an unreadable definition");
        return Err(AppError::Internal("quiz definition is unreadable"));
    };

    let taken = state.assessments.times_taken(&slug).await;

    Ok(views::page(
        &record.title,
        quiz_views::quiz_page(&slug, &definition, taken),
    ))
}

async fn submit(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Form(body): Form<HashMap<String, String>>,
) -> Result<maud::Markup, AppError> {
    let Some(record) = state
        .db
        .quiz_by_slug(&slug)
        .await
        .reject("could not load quiz")?
    else {
        return Err(AppError::NotFound);
    };

    let Some(definition) = record.parsed_definition() else {
        tracing::error!("quiz '{slug}' has an unreadable definition");
        return Err(AppError::Internal("quiz definition is unreadable"));
    };

    let responses = collect_responses(&definition, &body);
    let analysis = state
        .assessments
        .submit(&slug, &responses, Some(&definition))
        .await;

    Ok(views::page("Your Results", quiz_views::results(&analysis)))
}

/// Walk the definition in question order and keep only answers that make
/// sense for their question: point values must sit inside the scoring
/// range, choice answers must index an existing option, and blank text
/// is treated as unanswered.
fn collect_responses(
    definition: &QuizDefinition,
    form: &HashMap<String, String>,
) -> Vec<QuizResponse> {
    let mut responses = Vec::new();

    for question in &definition.questions {
        let Some(raw) = form.get(&question.id) else {
            continue;
        };
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }

        let answer = match question.question_type {
            QuestionType::Text => AnswerValue::Text(raw.to_string()),
            QuestionType::MultipleChoice => {
                let Ok(index) = raw.parse::<usize>() else {
                    continue;
                };
                if index >= question.options.len() {
                    continue;
                }
                AnswerValue::Number(index as f64)
            }
            _ => {
                let Ok(points) = raw.parse::<i32>() else {
                    continue;
                };
                if !(names::MIN_ANSWER_VALUE..=names::MAX_ANSWER_VALUE).contains(&points) {
                    continue;
                }
                AnswerValue::Number(points as f64)
            }
        };

        responses.push(QuizResponse {
            question_id: question.id.clone(),
            question_text: question.text.clone(),
            answer,
            question_type: question.question_type,
        });
    }

    responses
}

pub mod ai;
pub mod analysis;
pub mod db;
pub mod email;
pub mod handlers;
pub mod models;
pub mod names;
pub mod rejections;
pub mod services;
pub mod statics;
pub mod token;
pub mod utils;
pub mod views;

use axum::Router;

use crate::services::assessment::AssessmentService;
use crate::services::newsletter::NewsletterService;

#[derive(Clone)]
pub struct AppState {
    pub db: db::Db,
    pub newsletter: NewsletterService,
    pub assessments: AssessmentService,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::homepage::routes())
        .merge(handlers::quiz::routes())
        .merge(handlers::newsletter::routes())
        .merge(handlers::articles::routes())
        .nest("/static", statics::routes())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> rejections::AppError {
    rejections::AppError::NotFound
}

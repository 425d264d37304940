use axum::{extract::State, routing::get, Router};

use crate::{
    rejections::{AppError, ResultExt},
    views, AppState,
};

use crate::views::homepage as homepage_views;

const RECENT_ARTICLES: usize = 3;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(homepage))
}

async fn homepage(State(state): State<AppState>) -> Result<maud::Markup, AppError> {
    let quizzes = state
        .db
        .published_quizzes()
        .await
        .reject("could not load quizzes")?;
    let articles = state
        .db
        .published_articles()
        .await
        .reject("could not load articles")?;

    let recent: Vec<_> = articles.into_iter().take(RECENT_ARTICLES).collect();

    Ok(views::page(
        "Home",
        homepage_views::landing_page(&quizzes, &recent),
    ))
}

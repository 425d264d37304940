use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};

use crate::{
    rejections::{AppError, ResultExt},
    views, AppState,
};

use crate::views::articles as articles_views;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/articles", get(article_list))
        .route("/articles/{slug}", get(article_page))
}

async fn article_list(State(state): State<AppState>) -> Result<maud::Markup, AppError> {
    let articles = state
        .db
        .published_articles()
        .await
        .reject("could not load articles")?;

    Ok(views::page(
        "Articles",
        articles_views::article_list(&articles),
    ))
}

async fn article_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<maud::Markup, AppError> {
    let Some(article) = state
        .db
        .article_by_slug(&slug)
        .await
        .reject("could not load article")?
    else {
        return Err(AppError::NotFound);
    };

    Ok(views::page(
        &article.title,
        articles_views::article_page(&article),
    ))
}

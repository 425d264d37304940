use axum::{
    extract::{Form, State},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::Deserialize;

use crate::{
    rejections::{AppError, ResultExt},
    views, AppState,
};

use crate::views::newsletter as newsletter_views;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/newsletter/subscribe", post(subscribe))
        .route("/newsletter/confirm/{token}", get(confirm))
        .route("/newsletter/unsubscribe/{token}", get(unsubscribe))
}

#[derive(Deserialize)]
struct SubscribePost {
    email: String,
}

async fn subscribe(
    State(state): State<AppState>,
    Form(body): Form<SubscribePost>,
) -> Result<axum::response::Response, AppError> {
    use crate::services::newsletter::SubscribeOutcome;

    let outcome = state
        .newsletter
        .subscribe(&body.email)
        .await
        .reject("subscription failed")?;

    match outcome {
        SubscribeOutcome::InvalidEmail => Ok(views::page(
            "Subscribe",
            newsletter_views::subscribe_box(Some("That does not look like an email address.")),
        )
        .into_response()),
        SubscribeOutcome::AlreadyActive => Ok(views::page(
            "Subscribed",
            newsletter_views::already_subscribed(),
        )
        .into_response()),
        SubscribeOutcome::Activated => Ok(views::page(
            "Subscribed",
            newsletter_views::subscription_active(),
        )
        .into_response()),
        SubscribeOutcome::ConfirmationSent(email) => Ok(views::page(
            "Check Your Email",
            newsletter_views::check_inbox(&email),
        )
        .into_response()),
        SubscribeOutcome::EmailFailed => Ok(views::page(
            "Subscribe",
            newsletter_views::delivery_failed(),
        )
        .into_response()),
    }
}

async fn confirm(
    State(state): State<AppState>,
    axum::extract::Path(token): axum::extract::Path<String>,
) -> Result<axum::response::Response, AppError> {
    use crate::services::newsletter::ConfirmOutcome;

    let outcome = state
        .newsletter
        .confirm(&token)
        .await
        .reject("confirmation failed")?;

    match outcome {
        ConfirmOutcome::Activated(email) => Ok(views::page(
            "Subscription Confirmed",
            newsletter_views::confirmed(&email),
        )
        .into_response()),
        ConfirmOutcome::InvalidToken(reason) => Ok(views::page(
            "Link Problem",
            newsletter_views::invalid_link(&reason.to_string()),
        )
        .into_response()),
    }
}

async fn unsubscribe(
    State(state): State<AppState>,
    axum::extract::Path(token): axum::extract::Path<String>,
) -> Result<axum::response::Response, AppError> {
    use crate::services::newsletter::UnsubscribeOutcome;

    let outcome = state
        .newsletter
        .unsubscribe(&token)
        .await
        .reject("unsubscription failed")?;

    match outcome {
        UnsubscribeOutcome::Unsubscribed(email) => Ok(views::page(
            "Unsubscribed",
            newsletter_views::unsubscribed(&email),
        )
        .into_response()),
        UnsubscribeOutcome::InvalidToken(reason) => Ok(views::page(
            "Link Problem",
            newsletter_views::invalid_link(&reason.to_string()),
        )
        .into_response()),
    }
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::{html, Markup};

use crate::views;

/// Errors handlers surface directly. Anything without a dedicated page
/// collapses into one of these; form feedback renders through the
/// service outcome enums instead.
#[derive(Debug)]
pub enum AppError {
    Internal(&'static str),
    NotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match self {
            // The context string was already logged; clients get a
            // generic page.
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_SERVER_ERROR"),
            AppError::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        };

        (code, error_page(message)).into_response()
    }
}

fn error_page(message: &str) -> Markup {
    views::page(
        "Error",
        html! {
            h1 { (message) }
        },
    )
}

pub trait ResultExt<T> {
    /// Log the underlying error with `message` as context and map it to
    /// an opaque internal error.
    fn reject(self, message: &'static str) -> Result<T, AppError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn reject(self, message: &'static str) -> Result<T, AppError> {
        self.map_err(|error| {
            tracing::error!("{message}: {error}");
            AppError::Internal(message)
        })
    }
}

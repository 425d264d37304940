pub const QUIZZES_URL: &str = "/quizzes";
pub const ARTICLES_URL: &str = "/articles";
pub const SUBSCRIBE_URL: &str = "/newsletter/subscribe";

pub fn quiz_page_url(slug: &str) -> String {
    format!("/quiz/{slug}")
}

pub fn quiz_submit_url(slug: &str) -> String {
    format!("/quiz/{slug}/submit")
}

pub fn article_url(slug: &str) -> String {
    format!("/articles/{slug}")
}

/// Absolute confirm link for the double-opt-in email.
pub fn confirm_url(base_url: &str, token: &str) -> String {
    format!("{base_url}/newsletter/confirm/{token}")
}

/// Absolute one-click unsubscribe link carried in every issue.
pub fn unsubscribe_url(base_url: &str, token: &str) -> String {
    format!("{base_url}/newsletter/unsubscribe/{token}")
}

// Answer scale bounds for numeric questions
pub const MIN_ANSWER_VALUE: i32 = 0;
pub const MAX_ANSWER_VALUE: i32 = 5;

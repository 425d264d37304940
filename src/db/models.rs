// Database model structs

use chrono::{DateTime, Utc};

use crate::models::QuizDefinition;

#[derive(sqlx::FromRow)]
pub struct QuizRecord {
    pub slug: String,
    pub title: String,
    pub definition: serde_json::Value,
    pub published: bool,
}

impl QuizRecord {
    /// None when the stored JSON does not parse as a quiz definition.
    pub fn parsed_definition(&self) -> Option<QuizDefinition> {
        serde_json::from_value(self.definition.clone()).ok()
    }
}

#[derive(sqlx::FromRow)]
pub struct QuizSummary {
    pub slug: String,
    pub title: String,
    pub question_count: i32,
}

#[derive(sqlx::FromRow)]
pub struct Article {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub body_html: String,
    pub published_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
pub struct ArticleSummary {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub published_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriberStatus {
    Pending,
    Active,
    Unsubscribed,
}

impl SubscriberStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SubscriberStatus::Pending => "pending",
            SubscriberStatus::Active => "active",
            SubscriberStatus::Unsubscribed => "unsubscribed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(SubscriberStatus::Pending),
            "active" => Some(SubscriberStatus::Active),
            "unsubscribed" => Some(SubscriberStatus::Unsubscribed),
            _ => None,
        }
    }
}

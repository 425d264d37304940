use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A quiz as authored in content, stored as JSON in the `quizzes` table.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizDefinition {
    pub title: String,
    #[serde(default)]
    pub intro: Option<String>,
    /// Drives analysis dispatch; `"motivation-language"` selects the
    /// categorical path.
    #[serde(default)]
    pub result_type: Option<String>,
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
    #[serde(default)]
    pub bands: Vec<ScoreBand>,
    /// Categorical quizzes only: keyed by category id.
    #[serde(default)]
    pub result_profiles: HashMap<String, ResultProfile>,
    #[serde(default)]
    pub result_interpretation: Option<InterpretationCopy>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: String,
    pub text: String,
    pub question_type: QuestionType,
    #[serde(default)]
    pub options: Vec<String>,
    /// Parallel to `options`; `option_categories[i]` is the category a
    /// pick of `options[i]` counts toward.
    #[serde(default)]
    pub option_categories: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Scale,
    Likert,
    MultipleChoice,
    YesNo,
    Text,
}

/// Score range with the copy shown when a result lands in it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScoreBand {
    pub min: i32,
    pub max: i32,
    pub label: String,
    #[serde(default)]
    pub advice: String,
}

/// Copy for one category of a categorical quiz.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultProfile {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    /// "What lights you up" bullets.
    #[serde(default)]
    pub lights: Vec<String>,
    /// "What support looks like" bullets.
    #[serde(default)]
    pub support: Vec<String>,
    /// "Your motivational DNA" bullets.
    #[serde(default)]
    pub dna: Vec<String>,
}

/// Message templates per interpretation mode. `{primary}` and
/// `{secondary}` placeholders are replaced with profile titles.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InterpretationCopy {
    #[serde(default)]
    pub single: String,
    #[serde(default)]
    pub dual: String,
    #[serde(default)]
    pub multi: String,
}

/// One answered question, as handed to analysis.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResponse {
    pub question_id: String,
    #[serde(default)]
    pub question_text: String,
    pub answer: AnswerValue,
    pub question_type: QuestionType,
}

/// Answers are numeric for scale-style questions and free text
/// otherwise; analysis branches on which it got, not on question type.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(f64),
    Text(String),
}

impl AnswerValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AnswerValue::Number(n) => Some(*n),
            AnswerValue::Text(_) => None,
        }
    }
}

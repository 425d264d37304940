// Deterministic quiz analysis. Every path returns a renderable result;
// the optional AI layer may replace it but never gates it.

mod catalog;
mod categorical;
mod numeric;

pub use categorical::{classify_categorical, CategoricalOutcome, InterpretationMode};
pub use numeric::{band_for, score_numeric, BandMatch, NumericScore};

use serde::{Deserialize, Serialize};

use crate::models::{QuizDefinition, QuizResponse};

/// Result type marker that routes a quiz to the categorical path. Also
/// doubles as the slug of the quiz the site ships with that type.
pub const CATEGORICAL_RESULT_TYPE: &str = "motivation-language";

/// The full interpretation of one submission, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAnalysis {
    pub score: i32,
    pub band: String,
    pub band_description: String,
    pub key_insights: Vec<KeyInsight>,
    pub personalized_message: String,
    pub recommended_actions: Vec<String>,
    pub next_steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyInsight {
    pub pattern: String,
    pub description: String,
    pub actionable_advice: String,
    /// Site path of a related article, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_content: Option<String>,
}

enum AnalysisStrategy {
    Categorical,
    Named(&'static catalog::QuizCopy),
    Generic,
}

impl AnalysisStrategy {
    /// The definition's result type outranks the slug, so a renamed
    /// categorical quiz still gets the categorical treatment.
    fn select(slug: &str, definition: Option<&QuizDefinition>) -> Self {
        let result_type = definition.and_then(|definition| definition.result_type.as_deref());
        if result_type == Some(CATEGORICAL_RESULT_TYPE) || slug == CATEGORICAL_RESULT_TYPE {
            return AnalysisStrategy::Categorical;
        }

        match catalog::copy_for(slug) {
            Some(copy) => AnalysisStrategy::Named(copy),
            None => AnalysisStrategy::Generic,
        }
    }
}

/// Interpret `responses` for the quiz at `slug`.
///
/// Categorical quizzes are tallied into profiles, known numeric quizzes
/// get their canned copy, and anything else falls through to a generic
/// numeric readout. The same input always produces the same output and
/// no input produces an error.
pub fn analyze(
    slug: &str,
    responses: &[QuizResponse],
    definition: Option<&QuizDefinition>,
) -> QuizAnalysis {
    match AnalysisStrategy::select(slug, definition) {
        AnalysisStrategy::Categorical => {
            let fallback;
            let definition = match definition {
                Some(definition) => definition,
                None => {
                    fallback = QuizDefinition::default();
                    &fallback
                }
            };
            categorical::build_analysis(responses, definition)
        }
        AnalysisStrategy::Named(copy) => catalog::build_analysis(copy, responses, definition),
        AnalysisStrategy::Generic => generic_analysis(responses),
    }
}

fn generic_analysis(responses: &[QuizResponse]) -> QuizAnalysis {
    let numeric = score_numeric(responses);

    QuizAnalysis {
        score: numeric.score,
        band: "Assessment Complete".to_string(),
        band_description: "Thanks for taking the time to reflect. There is no grade here; honest answers are the whole point.".to_string(),
        key_insights: vec![KeyInsight {
            pattern: "Self-reflection".to_string(),
            description: "You gave every prompt a considered answer, which is more attention than most weeks get.".to_string(),
            actionable_advice: "Pick the question that was hardest to answer and sit with it for a few minutes today.".to_string(),
            related_content: None,
        }],
        personalized_message: format!(
            "You scored {} out of 100. Treat the number as a mirror, not a verdict; use it to decide what to look at next.",
            numeric.score
        ),
        recommended_actions: vec![
            "Note the question that surprised you most and why.".to_string(),
            "Revisit your answers in a week and see which still hold.".to_string(),
        ],
        next_steps: vec![
            "Browse the other assessments for a different angle.".to_string(),
            "Subscribe to the newsletter for a weekly reflection prompt.".to_string(),
        ],
    }
}

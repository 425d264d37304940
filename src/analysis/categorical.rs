use super::{KeyInsight, QuizAnalysis};
use crate::models::{AnswerValue, QuestionType, QuizDefinition, QuizResponse, ResultProfile};

/// How many motivation languages a respondent's answers point to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpretationMode {
    Single,
    Dual,
    Multi,
}

/// Category tally for a categorical quiz.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoricalOutcome {
    pub top_category: Option<String>,
    pub second_category: Option<String>,
    pub mode: InterpretationMode,
    /// Share of resolved answers landing in the top category, 0-100.
    pub normalized_score: i32,
}

/// Tally responses into categories and pick an interpretation mode.
///
/// Only multiple-choice questions whose `options` and
/// `option_categories` line up are counted. A numeric answer is an
/// option index (clamped into range), a text answer must match an
/// option exactly, and anything else is skipped. Ties in the ranking
/// keep first-answered order, so the earlier category stays on top.
pub fn classify_categorical(
    responses: &[QuizResponse],
    definition: &QuizDefinition,
) -> CategoricalOutcome {
    let mut counts: Vec<(String, u32)> = Vec::new();

    for response in responses {
        let question = definition
            .questions
            .iter()
            .find(|question| question.id == response.question_id);
        let Some(question) = question else { continue };

        if question.question_type != QuestionType::MultipleChoice {
            continue;
        }
        if question.options.is_empty() || question.options.len() != question.option_categories.len()
        {
            continue;
        }

        let index = match &response.answer {
            AnswerValue::Number(picked) => {
                let last = question.options.len() as i64 - 1;
                (*picked as i64).clamp(0, last) as usize
            }
            AnswerValue::Text(text) => {
                match question.options.iter().position(|option| option == text) {
                    Some(index) => index,
                    None => continue,
                }
            }
        };

        let category = &question.option_categories[index];
        match counts.iter_mut().find(|(known, _)| known == category) {
            Some((_, count)) => *count += 1,
            None => counts.push((category.clone(), 1)),
        }
    }

    let total: u32 = counts.iter().map(|(_, count)| count).sum();
    // Stable sort: equal counts keep their first-seen order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let mode = match counts.as_slice() {
        [] => InterpretationMode::Multi,
        [_] => InterpretationMode::Single,
        [(_, top), (_, second), ..] if top.abs_diff(*second) <= 1 => InterpretationMode::Dual,
        _ => InterpretationMode::Single,
    };

    let normalized_score = match counts.first() {
        Some((_, top)) => (f64::from(*top) / f64::from(total.max(1)) * 100.0).round() as i32,
        None => 0,
    };

    CategoricalOutcome {
        top_category: counts.first().map(|(category, _)| category.clone()),
        second_category: counts.get(1).map(|(category, _)| category.clone()),
        mode,
        normalized_score,
    }
}

pub(super) fn build_analysis(
    responses: &[QuizResponse],
    definition: &QuizDefinition,
) -> QuizAnalysis {
    let outcome = classify_categorical(responses, definition);
    let primary = profile_for(definition, outcome.top_category.as_deref());
    let secondary = profile_for(definition, outcome.second_category.as_deref());

    let primary_title = display_title(primary, outcome.top_category.as_deref());
    let secondary_title = display_title(secondary, outcome.second_category.as_deref());

    let band = match outcome.mode {
        InterpretationMode::Multi => "Balanced Profile".to_string(),
        _ => primary_title.clone(),
    };
    let band_description = match outcome.mode {
        InterpretationMode::Multi => {
            "No single motivation language dominated your answers.".to_string()
        }
        _ => primary
            .map(|profile| profile.subtitle.clone())
            .filter(|subtitle| !subtitle.is_empty())
            .unwrap_or_else(|| format!("{primary_title} is the strongest thread in your answers.")),
    };

    let mut key_insights = Vec::new();
    match outcome.mode {
        InterpretationMode::Multi => key_insights.push(balanced_insight()),
        InterpretationMode::Single => {
            key_insights.push(profile_insight(&primary_title, primary));
        }
        InterpretationMode::Dual => {
            key_insights.push(profile_insight(&primary_title, primary));
            key_insights.push(profile_insight(&secondary_title, secondary));
        }
    }

    QuizAnalysis {
        score: outcome.normalized_score,
        band,
        band_description,
        key_insights,
        personalized_message: personalized_message(
            definition,
            outcome.mode,
            &primary_title,
            &secondary_title,
        ),
        recommended_actions: recommended_actions(outcome.mode, primary, secondary),
        next_steps: next_steps(primary),
    }
}

fn profile_for<'a>(
    definition: &'a QuizDefinition,
    category: Option<&str>,
) -> Option<&'a ResultProfile> {
    category.and_then(|category| definition.result_profiles.get(category))
}

/// Profile title, falling back to the raw category id, falling back to
/// neutral copy when nothing resolved at all.
fn display_title(profile: Option<&ResultProfile>, category: Option<&str>) -> String {
    profile
        .map(|profile| profile.title.as_str())
        .filter(|title| !title.is_empty())
        .or(category)
        .unwrap_or("Your Motivation Profile")
        .to_string()
}

fn profile_insight(title: &str, profile: Option<&ResultProfile>) -> KeyInsight {
    let description = profile
        .and_then(|profile| profile.lights.first().cloned())
        .unwrap_or_else(|| format!("Your answers lean toward {title}."));
    let actionable_advice = profile
        .and_then(|profile| profile.support.first().cloned())
        .unwrap_or_else(|| {
            "Notice which moments this week feel energizing and what they share.".to_string()
        });

    KeyInsight {
        pattern: title.to_string(),
        description,
        actionable_advice,
        related_content: None,
    }
}

fn balanced_insight() -> KeyInsight {
    KeyInsight {
        pattern: "Balanced motivations".to_string(),
        description: "Your answers spread across several motivation languages instead of clustering in one.".to_string(),
        actionable_advice: "Treat that range as flexibility: match the motivation to the task instead of forcing one style everywhere.".to_string(),
        related_content: None,
    }
}

fn personalized_message(
    definition: &QuizDefinition,
    mode: InterpretationMode,
    primary_title: &str,
    secondary_title: &str,
) -> String {
    let templates = definition.result_interpretation.clone().unwrap_or_default();
    let template = match mode {
        InterpretationMode::Single if !templates.single.is_empty() => templates.single,
        InterpretationMode::Dual if !templates.dual.is_empty() => templates.dual,
        InterpretationMode::Multi if !templates.multi.is_empty() => templates.multi,
        InterpretationMode::Single => {
            "One motivation language stands out clearly for you: {primary}.".to_string()
        }
        InterpretationMode::Dual => {
            "Two motivation languages run close together for you: {primary} and {secondary}."
                .to_string()
        }
        InterpretationMode::Multi => {
            "Your motivations are spread fairly evenly, which usually means context decides what drives you."
                .to_string()
        }
    };

    template
        .replace("{primary}", primary_title)
        .replace("{secondary}", secondary_title)
}

fn recommended_actions(
    mode: InterpretationMode,
    primary: Option<&ResultProfile>,
    secondary: Option<&ResultProfile>,
) -> Vec<String> {
    let mut actions: Vec<String> = primary
        .map(|profile| profile.dna.clone())
        .unwrap_or_default();

    if mode == InterpretationMode::Dual {
        if let Some(first) = secondary.and_then(|profile| profile.dna.first()) {
            actions.push(first.clone());
        }
    }

    if actions.is_empty() {
        actions = vec![
            "Keep a short note this week of which tasks you started without being asked.".to_string(),
            "Compare those notes against the motivation languages and see which fits.".to_string(),
        ];
    }

    actions
}

fn next_steps(primary: Option<&ResultProfile>) -> Vec<String> {
    let mut steps: Vec<String> = primary
        .map(|profile| profile.support.iter().skip(1).cloned().collect())
        .unwrap_or_default();

    steps.push("Share your profile with someone who assigns you work and talk through one change.".to_string());
    steps.push("Subscribe to the newsletter for a weekly prompt matched to your profile.".to_string());

    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuizQuestion;

    fn definition() -> QuizDefinition {
        QuizDefinition {
            title: "Motivation Language".to_string(),
            result_type: Some("motivation-language".to_string()),
            questions: vec![
                choice_question("m1"),
                choice_question("m2"),
                choice_question("m3"),
                choice_question("m4"),
            ],
            ..QuizDefinition::default()
        }
    }

    fn choice_question(id: &str) -> QuizQuestion {
        QuizQuestion {
            id: id.to_string(),
            text: "Pick the option that sounds most like you".to_string(),
            question_type: QuestionType::MultipleChoice,
            options: vec![
                "Designing the plan".to_string(),
                "Crossing the finish line".to_string(),
                "Bringing people along".to_string(),
            ],
            option_categories: vec![
                "architect".to_string(),
                "achiever".to_string(),
                "connector".to_string(),
            ],
        }
    }

    fn pick(id: &str, index: f64) -> QuizResponse {
        QuizResponse {
            question_id: id.to_string(),
            question_text: String::new(),
            answer: AnswerValue::Number(index),
            question_type: QuestionType::MultipleChoice,
        }
    }

    #[test]
    fn numeric_answers_out_of_range_clamp_to_the_nearest_option() {
        let responses = vec![pick("m1", 9.0), pick("m2", -3.0)];

        let outcome = classify_categorical(&responses, &definition());

        // 9 clamps to the last option, -3 to the first.
        assert_eq!(outcome.top_category.as_deref(), Some("connector"));
        assert_eq!(outcome.second_category.as_deref(), Some("architect"));
    }

    #[test]
    fn text_answers_must_match_an_option_exactly() {
        let mut responses = vec![pick("m1", 0.0)];
        responses.push(QuizResponse {
            question_id: "m2".to_string(),
            question_text: String::new(),
            answer: AnswerValue::Text("something else entirely".to_string()),
            question_type: QuestionType::MultipleChoice,
        });

        let outcome = classify_categorical(&responses, &definition());

        assert_eq!(outcome.top_category.as_deref(), Some("architect"));
        assert_eq!(outcome.second_category, None);
        assert_eq!(outcome.mode, InterpretationMode::Single);
    }

    #[test]
    fn tied_categories_keep_first_answered_order() {
        let responses = vec![pick("m1", 1.0), pick("m2", 0.0), pick("m3", 1.0), pick("m4", 0.0)];

        let outcome = classify_categorical(&responses, &definition());

        assert_eq!(outcome.top_category.as_deref(), Some("achiever"));
        assert_eq!(outcome.second_category.as_deref(), Some("architect"));
        assert_eq!(outcome.mode, InterpretationMode::Dual);
    }

    #[test]
    fn mismatched_option_category_lengths_skip_the_question() {
        let mut definition = definition();
        definition.questions[0].option_categories.pop();

        let outcome = classify_categorical(&[pick("m1", 0.0)], &definition);

        assert_eq!(outcome.top_category, None);
        assert_eq!(outcome.mode, InterpretationMode::Multi);
    }
}

use crate::models::{QuizResponse, ScoreBand};

/// Each numeric question contributes at most this many points.
const MAX_POINTS_PER_QUESTION: i32 = 5;

/// Raw and normalized totals for a numeric quiz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericScore {
    /// 0-100 scale, rounded.
    pub score: i32,
    pub total_raw: f64,
    pub max_possible: i32,
}

/// Sum the numeric answers and normalize to a 0-100 score.
///
/// Text answers are skipped, not coerced. With no numeric answers at
/// all the denominator is 100, which pins the score to zero instead of
/// dividing by zero. Out-of-range answers are the submit boundary's
/// problem; the scorer takes what it is given.
pub fn score_numeric(responses: &[QuizResponse]) -> NumericScore {
    let answers: Vec<f64> = responses
        .iter()
        .filter_map(|response| response.answer.as_number())
        .collect();

    let total_raw: f64 = answers.iter().sum();
    let max_possible = if answers.is_empty() {
        100
    } else {
        answers.len() as i32 * MAX_POINTS_PER_QUESTION
    };
    let score = (total_raw / f64::from(max_possible) * 100.0).round() as i32;

    NumericScore {
        score,
        total_raw,
        max_possible,
    }
}

/// Band label plus the advice copy attached to it.
#[derive(Debug, Clone, PartialEq)]
pub struct BandMatch {
    pub label: String,
    pub description: String,
}

/// Find the band a score falls in.
///
/// Bands are checked in definition order and the first `min <= score
/// <= max` hit wins, so overlapping content is resolved by authoring
/// order. A score no band covers falls back to the builtin tiers.
pub fn band_for(score: i32, bands: &[ScoreBand]) -> BandMatch {
    bands
        .iter()
        .find(|band| band.min <= score && score <= band.max)
        .map(|band| BandMatch {
            label: band.label.clone(),
            description: band.advice.clone(),
        })
        .unwrap_or_else(|| default_band(score))
}

fn default_band(score: i32) -> BandMatch {
    let (label, description) = if score < 40 {
        (
            "Low",
            "This pattern shows up only faintly in your answers right now.",
        )
    } else if score <= 70 {
        (
            "Moderate",
            "This pattern is present for you in some situations but not all.",
        )
    } else {
        (
            "High",
            "This pattern came through strongly across your answers.",
        )
    };

    BandMatch {
        label: label.to_string(),
        description: description.to_string(),
    }
}

use super::numeric::{band_for, score_numeric};
use super::{KeyInsight, QuizAnalysis};
use crate::models::{QuizDefinition, QuizResponse};

/// Canned interpretation copy for a quiz the site ships with.
pub(super) struct QuizCopy {
    pub slug: &'static str,
    /// What the quiz measures, spliced into the result message.
    pub focus: &'static str,
    pub low: TierCopy,
    pub moderate: TierCopy,
    pub high: TierCopy,
    pub actions: &'static [&'static str],
    pub next_steps: &'static [&'static str],
}

pub(super) struct TierCopy {
    pub pattern: &'static str,
    pub description: &'static str,
    pub advice: &'static str,
    pub message: &'static str,
    pub related_article: Option<&'static str>,
}

impl QuizCopy {
    fn tier(&self, score: i32) -> &TierCopy {
        if score < 40 {
            &self.low
        } else if score <= 70 {
            &self.moderate
        } else {
            &self.high
        }
    }
}

pub(super) fn copy_for(slug: &str) -> Option<&'static QuizCopy> {
    CATALOG.iter().find(|copy| copy.slug == slug)
}

pub(super) fn build_analysis(
    copy: &QuizCopy,
    responses: &[QuizResponse],
    definition: Option<&QuizDefinition>,
) -> QuizAnalysis {
    let numeric = score_numeric(responses);
    let bands = definition
        .map(|definition| definition.bands.as_slice())
        .unwrap_or_default();
    let band = band_for(numeric.score, bands);
    let tier = copy.tier(numeric.score);

    QuizAnalysis {
        score: numeric.score,
        band: band.label,
        band_description: band.description,
        key_insights: vec![KeyInsight {
            pattern: tier.pattern.to_string(),
            description: tier.description.to_string(),
            actionable_advice: tier.advice.to_string(),
            related_content: tier.related_article.map(str::to_string),
        }],
        personalized_message: format!(
            "You scored {} out of 100 on the {} scale. {}",
            numeric.score, copy.focus, tier.message
        ),
        recommended_actions: copy.actions.iter().map(|s| s.to_string()).collect(),
        next_steps: copy.next_steps.iter().map(|s| s.to_string()).collect(),
    }
}

static CATALOG: &[QuizCopy] = &[
    QuizCopy {
        slug: "cognitive-dissonance",
        focus: "cognitive dissonance",
        low: TierCopy {
            pattern: "Values and actions in step",
            description: "Your answers suggest your daily choices mostly line up with what you say matters to you.",
            advice: "Keep the habit of checking decisions against your values while it is cheap; rebuilding it later is not.",
            message: "Little tension showed up between what you believe and what you do.",
            related_article: Some("/articles/the-quiet-cost-of-small-compromises"),
        },
        moderate: TierCopy {
            pattern: "Situational tension",
            description: "In some settings you act on your values, and in others you talk yourself out of them.",
            advice: "Name the setting where the gap opens. The discomfort is specific, even when it feels general.",
            message: "Some of your answers point at a gap that opens in particular situations.",
            related_article: Some("/articles/living-with-cognitive-dissonance"),
        },
        high: TierCopy {
            pattern: "Value-action gap",
            description: "Your answers describe a steady gap between what you believe and what your week actually contains.",
            advice: "Pick one belief and one behavior and close that single gap first. Broad resolutions feed the dissonance.",
            message: "The tension you are carrying is the kind that quietly rewrites beliefs to match behavior.",
            related_article: Some("/articles/living-with-cognitive-dissonance"),
        },
        actions: &[
            "Write down one recent decision that still nags at you and the value it brushed against.",
            "Pick the smallest commitment you can actually keep this week, then keep it.",
            "Tell one person you trust about a change you intend to make.",
        ],
        next_steps: &[
            "Read the companion article on cognitive dissonance.",
            "Retake this assessment in a month and compare the bands.",
            "Subscribe to the newsletter for a weekly reflection prompt.",
        ],
    },
    QuizCopy {
        slug: "imposter-syndrome",
        focus: "impostor feelings",
        low: TierCopy {
            pattern: "Grounded self-assessment",
            description: "You mostly credit your results to your own work, with room left for luck and help.",
            advice: "Write down what you did to earn the next win while it is fresh. Evidence beats reassurance.",
            message: "Impostor feelings are not a major force in how you read your own work.",
            related_article: None,
        },
        moderate: TierCopy {
            pattern: "Selective discounting",
            description: "You discount your own contribution in certain rooms or with certain people.",
            advice: "Keep a plain list of things you shipped. Read it before the rooms where the discounting starts.",
            message: "You discount yourself in some contexts but not others, which makes the pattern easy to miss.",
            related_article: None,
        },
        high: TierCopy {
            pattern: "Persistent self-discounting",
            description: "Your answers describe a habit of explaining away your own competence across most situations.",
            advice: "Ask one colleague what they would miss if you left the team. Compare their answer with your own story.",
            message: "The story you tell about your results diverges sharply from the results themselves.",
            related_article: None,
        },
        actions: &[
            "Collect three concrete artifacts of work you did this quarter.",
            "Next time you deflect praise, stop at thank you.",
            "Note who you compare yourself to and whether the comparison is ever fair.",
        ],
        next_steps: &[
            "Revisit this assessment after your next big deliverable.",
            "Subscribe to the newsletter for a weekly reflection prompt.",
        ],
    },
];

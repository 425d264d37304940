use maud::{html, Markup};

use crate::analysis::QuizAnalysis;
use crate::db::QuizSummary;
use crate::models::{QuestionType, QuizDefinition, QuizQuestion};
use crate::names;
use crate::views::newsletter as newsletter_views;

const LIKERT_LABELS: [&str; 6] = [
    "Strongly disagree",
    "Disagree",
    "Leaning disagree",
    "Leaning agree",
    "Agree",
    "Strongly agree",
];

pub fn quiz_list(quizzes: &[QuizSummary]) -> Markup {
    html! {
        h1 { "Assessments" }
        p {
            "Each one takes a few minutes. Results are scored on the spot, "
            "and no account is needed."
        }
        div."quiz-grid" {
            @for quiz in quizzes {
                article."quiz-card" {
                    h3 {
                        a href=(names::quiz_page_url(&quiz.slug)) { (quiz.title) }
                    }
                    p { (quiz.question_count) " questions" }
                }
            }
        }
    }
}

pub fn quiz_page(slug: &str, definition: &QuizDefinition, taken: i64) -> Markup {
    html! {
        h1 { (definition.title) }
        @if let Some(intro) = &definition.intro {
            p { (intro) }
        }
        @if taken > 0 {
            p { small { "Taken " (taken) " times so far." } }
        }
        article style="max-width: 42rem;" {
            form action=(names::quiz_submit_url(slug)) method="post" {
                @for (idx, question) in definition.questions.iter().enumerate() {
                    (question_fieldset(idx, question))
                }
                button type="submit" { "See my results" }
            }
        }
    }
}

fn question_fieldset(idx: usize, question: &QuizQuestion) -> Markup {
    html! {
        fieldset {
            legend { strong { (idx + 1) ". " (question.text) } }
            @match question.question_type {
                QuestionType::Scale => {
                    div.scale-row {
                        @for value in names::MIN_ANSWER_VALUE..=names::MAX_ANSWER_VALUE {
                            label {
                                input type="radio" name=(question.id) value=(value);
                                (value)
                            }
                        }
                    }
                    p { small { "0 means not at all, 5 means very much." } }
                }
                QuestionType::Likert => {
                    @for (value, text) in LIKERT_LABELS.iter().enumerate() {
                        label {
                            input type="radio" name=(question.id) value=(value);
                            (text)
                        }
                    }
                }
                QuestionType::MultipleChoice => {
                    @for (value, option) in question.options.iter().enumerate() {
                        label {
                            input type="radio" name=(question.id) value=(value);
                            (option)
                        }
                    }
                }
                QuestionType::YesNo => {
                    label {
                        input type="radio" name=(question.id) value=(names::MAX_ANSWER_VALUE);
                        "Yes"
                    }
                    label {
                        input type="radio" name=(question.id) value=(names::MIN_ANSWER_VALUE);
                        "No"
                    }
                }
                QuestionType::Text => {
                    textarea name=(question.id) rows="3" placeholder="In your own words" {}
                }
            }
        }
    }
}

pub fn results(analysis: &QuizAnalysis) -> Markup {
    html! {
        h1 { (analysis.band) }
        p {
            "Score: " strong { (analysis.score) } " / 100"
        }
        p { (analysis.band_description) }

        article {
            p { (analysis.personalized_message) }
        }

        @if !analysis.key_insights.is_empty() {
            section {
                h2 { "What stood out" }
                @for insight in &analysis.key_insights {
                    article."insight-card" {
                        h3 { (insight.pattern) }
                        p { (insight.description) }
                        p { em { (insight.actionable_advice) } }
                        @if let Some(link) = &insight.related_content {
                            p {
                                a href=(link) { "Related reading" }
                            }
                        }
                    }
                }
            }
        }

        @if !analysis.recommended_actions.is_empty() {
            section {
                h2 { "Try this" }
                ul {
                    @for action in &analysis.recommended_actions {
                        li { (action) }
                    }
                }
            }
        }

        @if !analysis.next_steps.is_empty() {
            section {
                h2 { "Where to go next" }
                ul {
                    @for step in &analysis.next_steps {
                        li { (step) }
                    }
                }
            }
        }

        p {
            a href=(names::QUIZZES_URL) { "Back to all assessments" }
        }

        (newsletter_views::subscribe_box(None))
    }
}

use std::collections::HashMap;

use selfsight::analysis::{
    analyze, band_for, classify_categorical, score_numeric, InterpretationMode,
};
use selfsight::models::{
    AnswerValue, InterpretationCopy, QuestionType, QuizDefinition, QuizQuestion, QuizResponse,
    ResultProfile, ScoreBand,
};

fn scale(id: &str, value: f64) -> QuizResponse {
    QuizResponse {
        question_id: id.to_string(),
        question_text: format!("Prompt {id}"),
        answer: AnswerValue::Number(value),
        question_type: QuestionType::Scale,
    }
}

fn pick(id: &str, index: f64) -> QuizResponse {
    QuizResponse {
        question_id: id.to_string(),
        question_text: format!("Prompt {id}"),
        answer: AnswerValue::Number(index),
        question_type: QuestionType::MultipleChoice,
    }
}

fn choice_quiz(question_count: usize) -> QuizDefinition {
    QuizDefinition {
        title: "Motivation Language".to_string(),
        result_type: Some("motivation-language".to_string()),
        questions: (1..=question_count)
            .map(|n| QuizQuestion {
                id: format!("ml{n}"),
                text: format!("Prompt {n}"),
                question_type: QuestionType::MultipleChoice,
                options: vec![
                    "Own the blueprint".to_string(),
                    "Hit the target".to_string(),
                    "Move together".to_string(),
                ],
                option_categories: vec![
                    "architect".to_string(),
                    "achiever".to_string(),
                    "connector".to_string(),
                ],
            })
            .collect(),
        ..QuizDefinition::default()
    }
}

fn profiled_quiz() -> QuizDefinition {
    let mut definition = choice_quiz(5);
    definition.result_profiles = HashMap::from([
        (
            "architect".to_string(),
            ResultProfile {
                title: "The Architect".to_string(),
                subtitle: "Structure is your fuel.".to_string(),
                lights: vec![
                    "Watching a plan click into place.".to_string(),
                    "Room to design before doing.".to_string(),
                ],
                support: vec![
                    "Ask for the why before the when.".to_string(),
                    "Block planning time ahead of deadlines.".to_string(),
                    "Keep one diagram per project.".to_string(),
                ],
                dna: vec![
                    "Sketch the system before the first step.".to_string(),
                    "Turn vague asks into written plans.".to_string(),
                ],
            },
        ),
        (
            "achiever".to_string(),
            ResultProfile {
                title: "The Achiever".to_string(),
                subtitle: "Finish lines pull you forward.".to_string(),
                lights: vec!["Crossing something off in public.".to_string()],
                support: vec!["Ask for scoreboards, not check-ins.".to_string()],
                dna: vec!["Break long work into visible wins.".to_string()],
            },
        ),
    ]);
    definition.result_interpretation = Some(InterpretationCopy {
        single: "You lead with {primary}.".to_string(),
        dual: "You run on {primary} backed by {secondary}.".to_string(),
        multi: "No single language leads for you.".to_string(),
    });
    definition
}

#[test]
fn three_scale_answers_normalize_to_eighty() {
    let responses = vec![scale("q1", 5.0), scale("q2", 3.0), scale("q3", 4.0)];

    let numeric = score_numeric(&responses);

    assert_eq!(numeric.total_raw, 12.0);
    assert_eq!(numeric.max_possible, 15);
    assert_eq!(numeric.score, 80);
}

#[test]
fn empty_submission_scores_zero_against_a_hundred() {
    let numeric = score_numeric(&[]);

    assert_eq!(numeric.total_raw, 0.0);
    assert_eq!(numeric.max_possible, 100);
    assert_eq!(numeric.score, 0);
}

#[test]
fn authored_bands_win_in_definition_order() {
    let bands = vec![
        ScoreBand {
            min: 0,
            max: 49,
            label: "Settled".to_string(),
            advice: "All quiet.".to_string(),
        },
        ScoreBand {
            min: 40,
            max: 100,
            label: "Strained".to_string(),
            advice: "Watch it.".to_string(),
        },
    ];

    // 45 sits in both ranges; the first authored band takes it.
    assert_eq!(band_for(45, &bands).label, "Settled");
    assert_eq!(band_for(50, &bands).label, "Strained");
}

#[test]
fn a_score_on_a_band_minimum_lands_in_that_band() {
    let bands = vec![
        ScoreBand {
            min: 0,
            max: 20,
            label: "Low".to_string(),
            advice: String::new(),
        },
        ScoreBand {
            min: 21,
            max: 40,
            label: "Moderate".to_string(),
            advice: String::new(),
        },
        ScoreBand {
            min: 41,
            max: 60,
            label: "High".to_string(),
            advice: String::new(),
        },
    ];

    assert_eq!(band_for(41, &bands).label, "High");
    assert_eq!(band_for(40, &bands).label, "Moderate");
    assert_eq!(band_for(21, &bands).label, "Moderate");
    assert_eq!(band_for(20, &bands).label, "Low");
}

#[test]
fn uncovered_scores_fall_back_to_builtin_tiers() {
    let bands = vec![ScoreBand {
        min: 60,
        max: 100,
        label: "Covered".to_string(),
        advice: String::new(),
    }];

    assert_eq!(band_for(10, &bands).label, "Low");
    assert_eq!(band_for(55, &bands).label, "Moderate");
}

#[test]
fn a_three_to_two_split_reads_as_dual() {
    let definition = choice_quiz(5);
    let responses = vec![
        pick("ml1", 0.0),
        pick("ml2", 0.0),
        pick("ml3", 0.0),
        pick("ml4", 1.0),
        pick("ml5", 1.0),
    ];

    let outcome = classify_categorical(&responses, &definition);

    assert_eq!(outcome.mode, InterpretationMode::Dual);
    assert_eq!(outcome.top_category.as_deref(), Some("architect"));
    assert_eq!(outcome.second_category.as_deref(), Some("achiever"));
    assert_eq!(outcome.normalized_score, 60);
}

#[test]
fn a_clear_leader_reads_as_single() {
    let definition = choice_quiz(6);
    let responses = vec![
        pick("ml1", 0.0),
        pick("ml2", 0.0),
        pick("ml3", 0.0),
        pick("ml4", 0.0),
        pick("ml5", 0.0),
        pick("ml6", 1.0),
    ];

    let outcome = classify_categorical(&responses, &definition);

    assert_eq!(outcome.mode, InterpretationMode::Single);
    assert_eq!(outcome.top_category.as_deref(), Some("architect"));
    assert_eq!(outcome.normalized_score, 83);
}

#[test]
fn no_resolvable_answers_reads_as_multi_with_zero_score() {
    let definition = choice_quiz(3);

    let outcome = classify_categorical(&[], &definition);

    assert_eq!(outcome.mode, InterpretationMode::Multi);
    assert_eq!(outcome.top_category, None);
    assert_eq!(outcome.normalized_score, 0);
}

#[test]
fn dual_results_blend_the_two_leading_profiles() {
    let definition = profiled_quiz();
    let responses = vec![
        pick("ml1", 0.0),
        pick("ml2", 0.0),
        pick("ml3", 0.0),
        pick("ml4", 1.0),
        pick("ml5", 1.0),
    ];

    let analysis = analyze("motivation-language", &responses, Some(&definition));

    assert_eq!(analysis.score, 60);
    assert_eq!(analysis.band, "The Architect");
    assert_eq!(analysis.band_description, "Structure is your fuel.");

    // The leading profile's insight comes first, each built from its own
    // copy: first "lights" bullet as the description, first "support"
    // bullet as the advice.
    assert_eq!(analysis.key_insights.len(), 2);
    assert_eq!(analysis.key_insights[0].pattern, "The Architect");
    assert_eq!(
        analysis.key_insights[0].description,
        "Watching a plan click into place."
    );
    assert_eq!(
        analysis.key_insights[0].actionable_advice,
        "Ask for the why before the when."
    );
    assert_eq!(analysis.key_insights[1].pattern, "The Achiever");
    assert_eq!(
        analysis.key_insights[1].description,
        "Crossing something off in public."
    );

    assert_eq!(
        analysis.personalized_message,
        "You run on The Architect backed by The Achiever."
    );

    // All of the primary's dna, then the runner-up's first entry.
    assert_eq!(
        analysis.recommended_actions,
        vec![
            "Sketch the system before the first step.",
            "Turn vague asks into written plans.",
            "Break long work into visible wins.",
        ]
    );

    // Support bullets past the first lead the next steps.
    assert_eq!(
        analysis.next_steps[0],
        "Block planning time ahead of deadlines."
    );
    assert_eq!(analysis.next_steps[1], "Keep one diagram per project.");
}

#[test]
fn a_lone_leader_reads_its_profile_and_single_template() {
    let definition = profiled_quiz();
    let responses = vec![pick("ml1", 1.0), pick("ml2", 1.0), pick("ml3", 1.0)];

    let analysis = analyze("motivation-language", &responses, Some(&definition));

    assert_eq!(analysis.score, 100);
    assert_eq!(analysis.band, "The Achiever");
    assert_eq!(analysis.band_description, "Finish lines pull you forward.");
    assert_eq!(analysis.key_insights.len(), 1);
    assert_eq!(analysis.personalized_message, "You lead with The Achiever.");
    assert_eq!(analysis.recommended_actions, vec!["Break long work into visible wins."]);
}

#[test]
fn known_slugs_get_their_own_copy() {
    let responses = vec![scale("cd1", 4.0), scale("cd2", 4.0), scale("cd3", 4.0)];

    let analysis = analyze("cognitive-dissonance", &responses, None);

    assert_eq!(analysis.score, 80);
    assert_eq!(analysis.band, "High");
    assert_eq!(analysis.key_insights[0].pattern, "Value-action gap");
    assert_eq!(
        analysis.key_insights[0].related_content.as_deref(),
        Some("/articles/living-with-cognitive-dissonance")
    );
    assert!(analysis
        .personalized_message
        .starts_with("You scored 80 out of 100 on the cognitive dissonance scale."));
}

#[test]
fn unknown_slugs_fall_back_to_the_generic_readout() {
    let analysis = analyze("sleep-hygiene", &[scale("q1", 2.0)], None);

    assert_eq!(analysis.score, 40);
    assert_eq!(analysis.band, "Assessment Complete");
    assert!(!analysis.recommended_actions.is_empty());
}

#[test]
fn the_same_submission_always_produces_the_same_analysis() {
    let definition = choice_quiz(4);
    let responses = vec![
        pick("ml1", 0.0),
        pick("ml2", 1.0),
        pick("ml3", 2.0),
        pick("ml4", 0.0),
    ];

    let first = analyze("motivation-language", &responses, Some(&definition));
    let second = analyze("motivation-language", &responses, Some(&definition));

    assert_eq!(first, second);
}

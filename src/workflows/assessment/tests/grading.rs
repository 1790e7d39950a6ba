use super::common::*;
use crate::workflows::assessment::domain::Rubric;
use crate::workflows::assessment::{GradingConfig, GradingEngine, RubricError};

fn engine() -> GradingEngine {
    GradingEngine::new(GradingConfig::default())
}

#[test]
fn empty_rubric_is_rejected() {
    let result = engine().grade(ESSAY, &Rubric::new(Vec::new()));
    assert_eq!(result.unwrap_err(), RubricError::Empty);
}

#[test]
fn zero_point_criterion_is_rejected() {
    let rubric = Rubric::new(vec![criterion("content", 0.0, None)]);
    match engine().grade(ESSAY, &rubric) {
        Err(RubricError::NonPositivePoints { name }) => assert_eq!(name, "content"),
        other => panic!("expected non-positive points error, got {other:?}"),
    }
}

#[test]
fn duplicate_criterion_names_are_rejected() {
    let rubric = Rubric::new(vec![
        criterion("grammar", 20.0, None),
        criterion("Grammar", 10.0, None),
    ]);
    match engine().grade(ESSAY, &rubric) {
        Err(RubricError::DuplicateName { name }) => assert_eq!(name, "Grammar"),
        other => panic!("expected duplicate name error, got {other:?}"),
    }
}

#[test]
fn scores_stay_within_declared_bounds() {
    let rubric = Rubric::new(vec![
        criterion("content", 40.0, Some(10)),
        criterion("grammar", 25.0, None),
        criterion("structure", 15.0, None),
        criterion("critical_thinking", 10.0, None),
        criterion("tarot_alignment", 10.0, None),
    ]);

    for text in ["", "!!", "one", ESSAY, ROBOTIC_TEXT, CASUAL_TEXT] {
        let result = engine().grade(text, &rubric).expect("grading succeeds");

        assert!(result.total_score >= 0.0);
        assert!(result.total_score <= rubric.total_points() + 1e-9);
        assert!((0.0..=1.0).contains(&result.confidence), "input {text:?}");
        for score in &result.criterion_scores {
            assert!(score.score >= 0.0);
            assert!(score.score <= score.max_points);
            assert!((0.0..=100.0).contains(&score.percentage));
        }
    }
}

#[test]
fn empty_text_grades_near_zero_without_error() {
    let result = engine()
        .grade("", &standard_rubric())
        .expect("empty text still grades");

    assert_eq!(result.total_score, 0.0);
    assert!(result.confidence <= 0.5);
    assert!(!result.feedback.is_empty());
    assert!(result
        .criterion_scores
        .iter()
        .all(|score| score.rationale.contains("no scorable text")));
}

#[test]
fn grading_is_deterministic() {
    let first = engine().grade(ESSAY, &standard_rubric()).expect("grades");
    let second = engine().grade(ESSAY, &standard_rubric()).expect("grades");
    assert_eq!(first, second);
}

#[test]
fn more_content_never_scores_lower_on_content() {
    let rubric = Rubric::new(vec![criterion("content", 40.0, Some(100))]);
    let short = "The experiment failed quickly. Nobody recorded why it happened.";
    let long = format!(
        "{short} The following week the team repeated the procedure with fresh samples and careful notes. \
Each run was logged, timed, and compared against the original baseline measurements. \
Patterns emerged once the data covered enough trials to smooth out the noise. \
The final report explained the failure, the correction, and the verified outcome in plain language."
    );

    let short_result = engine().grade(short, &rubric).expect("grades");
    let long_result = engine().grade(&long, &rubric).expect("grades");

    assert!(long_result.total_score >= short_result.total_score);
}

#[test]
fn well_formed_essay_lands_in_upper_half() {
    let result = engine()
        .grade(ESSAY, &standard_rubric())
        .expect("essay grades");

    assert!(
        result.total_score > result.max_score / 2.0,
        "total {} of {}",
        result.total_score,
        result.max_score
    );
    assert!(result.confidence > 0.5);
    assert!(!result.feedback.is_empty());
    assert!(!result.strengths.is_empty());
}

#[test]
fn unknown_criterion_falls_back_to_neutral_midpoint() {
    let rubric = Rubric::new(vec![criterion("tarot_alignment", 20.0, None)]);
    let result = engine().grade(ESSAY, &rubric).expect("grades");

    let score = &result.criterion_scores[0];
    assert_eq!(score.score, 10.0);
    assert!(score.rationale.contains("no scoring heuristic"));
}

#[test]
fn inconsistent_criteria_lower_confidence() {
    // Same text, one rubric scoring evenly and one mixing a satisfied
    // criterion with a hopeless word target.
    let even = Rubric::new(vec![
        criterion("grammar", 30.0, None),
        criterion("writing_style", 30.0, None),
    ]);
    let uneven = Rubric::new(vec![
        criterion("grammar", 30.0, None),
        criterion("content", 30.0, Some(5000)),
    ]);

    let even_result = engine().grade(ESSAY, &even).expect("grades");
    let uneven_result = engine().grade(ESSAY, &uneven).expect("grades");

    assert!(uneven_result.confidence < even_result.confidence);
}

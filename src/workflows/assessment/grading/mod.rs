mod config;
mod feedback;
mod scorers;

pub use config::GradingConfig;

use std::collections::BTreeSet;

use super::domain::{CriterionScore, GradingResult, Rubric, RubricCriterion, TextMetrics};
use super::metrics;
use scorers::CriterionCategory;
use tracing::debug;

/// Configuration errors in a rubric. Always surfaced to the caller before
/// any scoring happens, never silently repaired.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RubricError {
    #[error("rubric must contain at least one criterion")]
    Empty,
    #[error("criterion '{name}' must award more than zero points")]
    NonPositivePoints { name: String },
    #[error("criterion '{name}' appears more than once in the rubric")]
    DuplicateName { name: String },
}

/// Stateless engine applying a rubric to a submission text. Grading is a
/// pure function of its inputs; identical calls produce identical results.
pub struct GradingEngine {
    config: GradingConfig,
}

impl GradingEngine {
    pub fn new(config: GradingConfig) -> Self {
        Self { config }
    }

    pub fn grade(&self, text: &str, rubric: &Rubric) -> Result<GradingResult, RubricError> {
        validate(rubric)?;

        let metrics = metrics::analyze(text);
        let criterion_scores: Vec<CriterionScore> = rubric
            .criteria
            .iter()
            .map(|criterion| score_criterion(criterion, text, &metrics))
            .collect();

        let max_score = rubric.total_points();
        let total_score = criterion_scores
            .iter()
            .map(|score| score.score)
            .sum::<f64>()
            .clamp(0.0, max_score);
        let overall_percentage = if max_score > 0.0 {
            (total_score / max_score) * 100.0
        } else {
            0.0
        };

        let confidence = confidence(&metrics, &criterion_scores);
        let (strengths, improvements) =
            feedback::classify(&criterion_scores, overall_percentage, &self.config);
        let feedback = feedback::compose(&metrics, &criterion_scores, total_score, max_score);

        debug!(total_score, max_score, confidence, "grading completed");

        Ok(GradingResult {
            total_score,
            max_score,
            criterion_scores,
            feedback,
            strengths,
            improvements,
            confidence,
        })
    }
}

pub(crate) fn validate(rubric: &Rubric) -> Result<(), RubricError> {
    if rubric.criteria.is_empty() {
        return Err(RubricError::Empty);
    }

    let mut seen = BTreeSet::new();
    for criterion in &rubric.criteria {
        if !criterion.max_points.is_finite() || criterion.max_points <= 0.0 {
            return Err(RubricError::NonPositivePoints {
                name: criterion.name.clone(),
            });
        }
        if !seen.insert(criterion.name.to_ascii_lowercase()) {
            return Err(RubricError::DuplicateName {
                name: criterion.name.clone(),
            });
        }
    }

    Ok(())
}

fn score_criterion(criterion: &RubricCriterion, text: &str, metrics: &TextMetrics) -> CriterionScore {
    if metrics.word_count == 0 {
        return CriterionScore {
            criterion: criterion.name.clone(),
            score: 0.0,
            max_points: criterion.max_points,
            percentage: 0.0,
            rationale: "submission contains no scorable text".to_string(),
        };
    }

    let category = CriterionCategory::classify(&criterion.name);
    let (fraction, rationale) = scorers::scorer_for(category).score(criterion, text, metrics);

    let score = (fraction * criterion.max_points).clamp(0.0, criterion.max_points);
    let percentage = (score / criterion.max_points) * 100.0;

    CriterionScore {
        criterion: criterion.name.clone(),
        score,
        max_points: criterion.max_points,
        percentage,
        rationale,
    }
}

/// More text means more signal; wildly inconsistent criterion percentages
/// mean less. Bounded to [0, 1].
fn confidence(metrics: &TextMetrics, scores: &[CriterionScore]) -> f64 {
    let length_signal = (metrics.word_count as f64 / 300.0).min(1.0);
    let sentence_signal = (metrics.sentence_count as f64 / 8.0).min(1.0);
    let base = 0.35 + 0.45 * length_signal + 0.10 * sentence_signal;

    let spread = percentage_spread(scores);
    (base - 0.25 * spread / 100.0).clamp(0.0, 1.0)
}

fn percentage_spread(scores: &[CriterionScore]) -> f64 {
    if scores.len() < 2 {
        return 0.0;
    }

    let mean = scores.iter().map(|score| score.percentage).sum::<f64>() / scores.len() as f64;
    let variance = scores
        .iter()
        .map(|score| (score.percentage - mean).powi(2))
        .sum::<f64>()
        / scores.len() as f64;
    variance.sqrt()
}

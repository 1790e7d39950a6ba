use super::super::domain::{CriterionScore, TextMetrics};
use super::GradingConfig;

const MAX_LISTED: usize = 5;

/// Split criteria into strengths and improvements. A criterion counts as a
/// strength only when its percentage strictly exceeds the high threshold;
/// boundary values fall through to neither list.
pub(crate) fn classify(
    scores: &[CriterionScore],
    overall_percentage: f64,
    config: &GradingConfig,
) -> (Vec<String>, Vec<String>) {
    let mut strengths = Vec::new();
    let mut improvements = Vec::new();

    for score in scores {
        let label = score.criterion.replace('_', " ");
        if score.percentage > config.strength_threshold {
            if score.percentage >= 90.0 {
                strengths.push(format!("Excellent {label}"));
            } else {
                strengths.push(format!("Strong {label}"));
            }
        } else if score.percentage < config.improvement_threshold {
            improvements.push(format!("Focus on improving {label}"));
        }
    }

    strengths.truncate(MAX_LISTED);
    improvements.truncate(MAX_LISTED);

    if strengths.is_empty() && overall_percentage >= 70.0 {
        strengths.push("Solid foundational understanding".to_string());
    }
    if improvements.is_empty() && overall_percentage < 95.0 {
        improvements.push("Continue refining writing mechanics".to_string());
    }

    (strengths, improvements)
}

/// Compose the instructor-facing feedback block: overall band, statistics,
/// then one line per criterion with its rationale.
pub(crate) fn compose(
    metrics: &TextMetrics,
    scores: &[CriterionScore],
    total_score: f64,
    max_score: f64,
) -> String {
    let percentage = if max_score > 0.0 {
        (total_score / max_score) * 100.0
    } else {
        0.0
    };

    let band = if percentage >= 93.0 {
        "Outstanding work that demonstrates exceptional command of the material."
    } else if percentage >= 85.0 {
        "Excellent work with minor areas for refinement."
    } else if percentage >= 75.0 {
        "Good work overall; some areas would benefit from development."
    } else if percentage >= 65.0 {
        "Satisfactory; focus on the improvement areas below."
    } else {
        "Needs significant development; review the criterion detail carefully."
    };

    let mut lines = vec![
        format!("Overall score: {total_score:.1}/{max_score:.1} ({percentage:.1}%)"),
        band.to_string(),
        String::new(),
        "Statistics:".to_string(),
        format!(
            "- {} words across {} sentences",
            metrics.word_count, metrics.sentence_count
        ),
        format!(
            "- readability {:.1}/100, mechanics {:.0}/100",
            metrics.readability, metrics.grammar_score
        ),
        String::new(),
        "Criterion detail:".to_string(),
    ];

    for score in scores {
        lines.push(format!(
            "- {}: {:.1}/{:.1} ({:.1}%) - {}",
            score.criterion, score.score, score.max_points, score.percentage, score.rationale
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(name: &str, percentage: f64) -> CriterionScore {
        CriterionScore {
            criterion: name.to_string(),
            score: percentage,
            max_points: 100.0,
            percentage,
            rationale: String::new(),
        }
    }

    #[test]
    fn boundary_percentage_is_not_a_strength() {
        let config = GradingConfig::default();
        let scores = vec![score("content", config.strength_threshold)];

        let (strengths, _) = classify(&scores, config.strength_threshold, &config);

        assert!(strengths.iter().all(|entry| !entry.contains("content")));
    }

    #[test]
    fn low_scores_become_improvements() {
        let config = GradingConfig::default();
        let scores = vec![score("critical_thinking", 40.0)];

        let (_, improvements) = classify(&scores, 40.0, &config);

        assert_eq!(
            improvements,
            vec!["Focus on improving critical thinking".to_string()]
        );
    }

    #[test]
    fn ninety_percent_reads_as_excellent() {
        let config = GradingConfig::default();
        let scores = vec![score("grammar", 92.0)];

        let (strengths, _) = classify(&scores, 92.0, &config);

        assert_eq!(strengths, vec!["Excellent grammar".to_string()]);
    }

    #[test]
    fn solid_fallback_when_nothing_stands_out() {
        let config = GradingConfig::default();
        let scores = vec![score("content", 70.0), score("grammar", 72.0)];

        let (strengths, improvements) = classify(&scores, 71.0, &config);

        assert_eq!(strengths, vec!["Solid foundational understanding".to_string()]);
        assert_eq!(
            improvements,
            vec!["Continue refining writing mechanics".to_string()]
        );
    }
}

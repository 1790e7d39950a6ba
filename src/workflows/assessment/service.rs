use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::{
    CorpusDocument, GradingResult, PlagiarismReport, Rubric, Submission, SubmissionId, TextMetrics,
};
use super::grading::{self, GradingConfig, GradingEngine, RubricError};
use super::metrics;
use super::plagiarism::{PlagiarismConfig, PlagiarismDetector};

/// Facade composing the grading and similarity engines. Holds only
/// immutable configuration, so one instance can serve concurrent callers
/// without any locking discipline.
pub struct AssessmentService {
    grading: GradingEngine,
    similarity_defaults: PlagiarismConfig,
}

/// One entry of a batch grading run. A failed submission carries its error
/// here instead of aborting the batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchGradeEntry {
    pub submission_id: SubmissionId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grading: Option<GradingResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AssessmentService {
    pub fn new(grading_config: GradingConfig, similarity_defaults: PlagiarismConfig) -> Self {
        Self {
            grading: GradingEngine::new(grading_config),
            similarity_defaults,
        }
    }

    /// Grade one submission text against a rubric. Rubric validation
    /// failures surface before any scoring happens.
    pub fn grade_submission(
        &self,
        text: &str,
        rubric: &Rubric,
    ) -> Result<GradingResult, RubricError> {
        let result = self.grading.grade(text, rubric)?;
        info!(
            total_score = result.total_score,
            max_score = result.max_score,
            confidence = result.confidence,
            "submission graded"
        );
        Ok(result)
    }

    /// Grade a batch sharing one rubric. The rubric is validated once up
    /// front; submissions are then graded independently so one degenerate
    /// text cannot abort its siblings.
    pub fn grade_batch(
        &self,
        rubric: &Rubric,
        submissions: &[Submission],
    ) -> Result<Vec<BatchGradeEntry>, RubricError> {
        grading::validate(rubric)?;

        let entries = submissions
            .iter()
            .map(|submission| match self.grading.grade(&submission.text, rubric) {
                Ok(result) => BatchGradeEntry {
                    submission_id: submission.id.clone(),
                    grading: Some(result),
                    error: None,
                },
                Err(error) => BatchGradeEntry {
                    submission_id: submission.id.clone(),
                    grading: None,
                    error: Some(error.to_string()),
                },
            })
            .collect();

        Ok(entries)
    }

    /// Compare a submission against a caller-supplied corpus. `threshold`
    /// overrides the configured default flag threshold for this call.
    pub fn detect_similarity(
        &self,
        submission_id: &SubmissionId,
        text: &str,
        corpus: &[CorpusDocument],
        threshold: Option<f64>,
    ) -> PlagiarismReport {
        let mut config = self.similarity_defaults.clone();
        if let Some(threshold) = threshold {
            config.flag_threshold = threshold.clamp(0.0, 100.0);
        }

        let report = PlagiarismDetector::new(config).detect(submission_id, text, corpus);
        info!(
            highest_similarity = report.highest_similarity,
            is_flagged = report.is_flagged,
            "similarity analyzed"
        );
        report
    }

    /// Raw text statistics for callers that want signals without grading.
    pub fn analyze_content(&self, text: &str) -> TextMetrics {
        metrics::analyze(text)
    }
}

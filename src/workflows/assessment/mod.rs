//! Automated assessment of free-text submissions: rubric grading with
//! per-criterion rationales, similarity analysis against a caller-supplied
//! corpus, and a corpus-free originality heuristic.
//!
//! Every component is a pure function of its inputs. The engines perform no
//! I/O and hold no mutable state, so concurrent grading of unrelated
//! submissions needs no coordination.

pub mod domain;
mod grading;
pub mod metrics;
mod plagiarism;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AiDetection, AssignmentId, CorpusDocument, CriterionScore, GradingResult, PlagiarismReport,
    Rubric, RubricCriterion, SimilarityMatch, StudentId, Submission, SubmissionId, TextMetrics,
};
pub use grading::{GradingConfig, GradingEngine, RubricError};
pub use plagiarism::{PlagiarismConfig, PlagiarismDetector};
pub use router::assessment_router;
pub use service::{AssessmentService, BatchGradeEntry};

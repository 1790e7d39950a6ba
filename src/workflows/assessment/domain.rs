use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for graded submissions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubmissionId(pub String);

/// Identifier wrapper for students; carried for bookkeeping, never scored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentId(pub String);

/// Identifier wrapper for assignments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssignmentId(pub String);

/// A student submission as handed to the engine. Immutable once created;
/// the engine only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: SubmissionId,
    pub student_id: StudentId,
    pub assignment_id: AssignmentId,
    pub text: String,
    pub submitted_at: DateTime<Utc>,
}

/// One named, weighted grading criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RubricCriterion {
    pub name: String,
    pub max_points: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_words: Option<usize>,
}

/// Ordered collection of criteria, unique by name. The sum of `max_points`
/// defines the grading scale ceiling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rubric {
    pub criteria: Vec<RubricCriterion>,
}

impl Rubric {
    pub fn new(criteria: Vec<RubricCriterion>) -> Self {
        Self { criteria }
    }

    pub fn total_points(&self) -> f64 {
        self.criteria.iter().map(|criterion| criterion.max_points).sum()
    }
}

/// Discrete contribution to a grade, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionScore {
    pub criterion: String,
    pub score: f64,
    pub max_points: f64,
    pub percentage: f64,
    pub rationale: String,
}

/// Grading output describing the composite score and feedback trail.
/// Created fresh on every grading call; re-grading produces a new result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingResult {
    pub total_score: f64,
    pub max_score: f64,
    pub criterion_scores: Vec<CriterionScore>,
    pub feedback: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub confidence: f64,
}

impl GradingResult {
    /// Overall percentage on the rubric's scale; 0 for an empty scale.
    pub fn percentage(&self) -> f64 {
        if self.max_score > 0.0 {
            (self.total_score / self.max_score) * 100.0
        } else {
            0.0
        }
    }
}

/// Primitive statistics extracted once per text and reused by downstream
/// scorers. Transient, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextMetrics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub avg_words_per_sentence: f64,
    pub vocabulary_diversity: f64,
    pub readability: f64,
    pub grammar_score: f64,
    pub sentiment: f64,
}

/// One candidate text a submission is compared against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusDocument {
    pub candidate_id: SubmissionId,
    pub text: String,
}

/// Per-candidate similarity, on a 0-100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityMatch {
    pub candidate_id: SubmissionId,
    pub similarity: f64,
}

/// Corpus-free estimate of whether a text is machine-generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiDetection {
    pub is_likely_generated: bool,
    pub confidence: f64,
}

/// Similarity report for one submission against a corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlagiarismReport {
    pub submission_id: SubmissionId,
    pub matches: Vec<SimilarityMatch>,
    pub highest_similarity: f64,
    pub is_flagged: bool,
    pub confidence: f64,
    pub ai_detection: AiDetection,
}

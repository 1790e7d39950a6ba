use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{
    AssignmentId, CorpusDocument, GradingResult, Rubric, RubricCriterion, StudentId, Submission,
    SubmissionId,
};
use super::service::{AssessmentService, BatchGradeEntry};

/// Router builder exposing the assessment boundary over HTTP.
pub fn assessment_router(service: Arc<AssessmentService>) -> Router {
    Router::new()
        .route("/api/v1/assessments/grade", post(grade_handler))
        .route("/api/v1/assessments/grade/batch", post(grade_batch_handler))
        .route("/api/v1/assessments/similarity", post(similarity_handler))
        .route("/api/v1/assessments/metrics", post(metrics_handler))
        .with_state(service)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeSubmissionRequest {
    pub student_id: StudentId,
    pub assignment_id: AssignmentId,
    pub content: String,
    pub rubric: Vec<RubricCriterion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeSubmissionView {
    pub student_id: StudentId,
    pub assignment_id: AssignmentId,
    pub grading: GradingResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchGradeRequest {
    pub rubric: Vec<RubricCriterion>,
    pub submissions: Vec<BatchSubmissionPayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSubmissionPayload {
    pub submission_id: SubmissionId,
    pub student_id: StudentId,
    pub assignment_id: AssignmentId,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchGradeView {
    pub entries: Vec<BatchGradeEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityRequest {
    pub submission_id: SubmissionId,
    pub content: String,
    #[serde(default)]
    pub corpus: Vec<CorpusDocument>,
    #[serde(default)]
    pub threshold: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentAnalysisRequest {
    pub content: String,
}

pub(crate) async fn grade_handler(
    State(service): State<Arc<AssessmentService>>,
    axum::Json(request): axum::Json<GradeSubmissionRequest>,
) -> Response {
    let rubric = Rubric::new(request.rubric);
    match service.grade_submission(&request.content, &rubric) {
        Ok(grading) => {
            let view = GradeSubmissionView {
                student_id: request.student_id,
                assignment_id: request.assignment_id,
                grading,
            };
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => rubric_error_response(&error.to_string()),
    }
}

pub(crate) async fn grade_batch_handler(
    State(service): State<Arc<AssessmentService>>,
    axum::Json(request): axum::Json<BatchGradeRequest>,
) -> Response {
    let rubric = Rubric::new(request.rubric);
    let submitted_at = Utc::now();
    let submissions: Vec<Submission> = request
        .submissions
        .into_iter()
        .map(|payload| Submission {
            id: payload.submission_id,
            student_id: payload.student_id,
            assignment_id: payload.assignment_id,
            text: payload.content,
            submitted_at,
        })
        .collect();

    match service.grade_batch(&rubric, &submissions) {
        Ok(entries) => (StatusCode::OK, axum::Json(BatchGradeView { entries })).into_response(),
        Err(error) => rubric_error_response(&error.to_string()),
    }
}

pub(crate) async fn similarity_handler(
    State(service): State<Arc<AssessmentService>>,
    axum::Json(request): axum::Json<SimilarityRequest>,
) -> Response {
    let report = service.detect_similarity(
        &request.submission_id,
        &request.content,
        &request.corpus,
        request.threshold,
    );
    (StatusCode::OK, axum::Json(report)).into_response()
}

pub(crate) async fn metrics_handler(
    State(service): State<Arc<AssessmentService>>,
    axum::Json(request): axum::Json<ContentAnalysisRequest>,
) -> Response {
    let metrics = service.analyze_content(&request.content);
    (StatusCode::OK, axum::Json(metrics)).into_response()
}

fn rubric_error_response(message: &str) -> Response {
    let payload = json!({ "error": message });
    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
}

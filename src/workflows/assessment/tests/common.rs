use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::workflows::assessment::domain::{Rubric, RubricCriterion};
use crate::workflows::assessment::{
    assessment_router, AssessmentService, GradingConfig, PlagiarismConfig,
};

/// Well-formed multi-paragraph essay, roughly 260 words.
pub(super) const ESSAY: &str = "City parks quietly shape the health of the neighborhoods around them. When planners set aside land for trees and open lawns, they are not simply decorating the map; they are deciding how people will move, gather, and breathe for decades. Because that choice is so durable, it deserves far more scrutiny than it usually receives.\n\nThe clearest benefit is physical. People who live within walking distance of a park exercise more often, and their rates of heart disease fall accordingly. Studies indicate that even a small pocket park changes daily habits, since residents fold short walks into errands they would otherwise drive. Shade trees also cool the surrounding streets, which matters more every summer as heat waves grow longer and more severe.\n\nThe social effects are just as significant, although they are harder to measure. A shared lawn gives neighbors a reason to meet, and repeated casual contact builds the kind of trust that formal programs struggle to create. For example, community gardens turn strangers into collaborators because the work itself demands cooperation. In contrast, blocks without any common ground tend to splinter into private routines.\n\nNone of this happens automatically. A neglected park can repel the very people it was meant to serve, so cities must budget for maintenance as carefully as for construction. The evidence, however, points in one clear direction: green space is not a luxury. It is basic infrastructure, and I think we should fund it with the same seriousness we bring to roads and water.";

/// Uniform, transition-heavy prose with no informal constructs.
pub(super) const ROBOTIC_TEXT: &str = "The system processes the input data. Furthermore, the system validates the input data. Moreover, the system stores the output data. Therefore, the system improves the overall process. Additionally, the system reduces the manual effort.";

/// Conversational prose with contractions and varied sentence lengths.
pub(super) const CASUAL_TEXT: &str = "Honestly, I didn't expect the trip to go so well. We'd planned everything in a rush, and I think that's exactly why it worked. My brother missed the bus, which felt like a disaster at the time. Still, wandering those back streets with no plan turned out to be the best part of the whole week.";

pub(super) fn criterion(name: &str, max_points: f64, min_words: Option<usize>) -> RubricCriterion {
    RubricCriterion {
        name: name.to_string(),
        max_points,
        min_words,
    }
}

pub(super) fn standard_rubric() -> Rubric {
    Rubric::new(vec![
        criterion("content", 40.0, Some(150)),
        criterion("grammar", 30.0, None),
        criterion("creativity", 30.0, None),
    ])
}

pub(super) fn build_service() -> AssessmentService {
    AssessmentService::new(GradingConfig::default(), PlagiarismConfig::default())
}

pub(super) fn build_router() -> axum::Router {
    assessment_router(Arc::new(build_service()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

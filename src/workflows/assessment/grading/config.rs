use serde::{Deserialize, Serialize};

/// Feedback thresholds applied after scoring. Resolved by the caller from
/// persisted settings; the engine never reads ambient configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingConfig {
    /// A criterion is listed as a strength only when its percentage is
    /// strictly above this value.
    pub strength_threshold: f64,
    /// A criterion is listed as an improvement when its percentage falls
    /// below this value.
    pub improvement_threshold: f64,
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            strength_threshold: 75.0,
            improvement_threshold: 60.0,
        }
    }
}

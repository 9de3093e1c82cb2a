//! Single-sample hygienic comparison types.

use serde::{Deserialize, Serialize};

use crate::domain::Justification;

/// Input to the hygienic quantitative evaluator.
///
/// All values share the same unit (typically mg/m³). Each may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HygienicEvalInput {
    /// Laboratory result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lab_result: Option<f64>,
    /// Limit of detection of the analytic method.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detection_limit: Option<f64>,
    /// Occupational exposure limit (VLA).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exposure_limit: Option<f64>,
}

/// Outcome of the hygienic comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HygienicAssessment {
    pub is_safe: bool,
    /// Result divided by the exposure limit, when computed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance_ratio: Option<f64>,
    pub justification: Justification,
}

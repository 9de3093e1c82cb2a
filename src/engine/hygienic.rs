//! Hygienic Quantitative Evaluator - compares one lab result with its limit.
//!
//! Priority order:
//! 1. Result below the detection limit: agent considered absent
//! 2. Result over exposure limit ratio
//! 3. Missing data: pending state

use crate::domain::{HygienicAssessment, HygienicEvalInput, Justification};

const LOD_ARTICLE: &str = "UNE-EN 482, Section 5";
const LOD_TEXT: &str = "Measurement procedures shall state their limit of detection; \
    results below it cannot be distinguished from zero.";
const VLA_ARTICLE: &str = "RD 374/2001, Art. 3.5";
const VLA_TEXT: &str = "Exposure shall be compared with the occupational exposure limit \
    values; exceeding them requires the causes to be identified and corrected.";

/// Compare a laboratory result against the detection and exposure limits.
pub fn evaluate_hygienic(input: &HygienicEvalInput) -> HygienicAssessment {
    let result = input.lab_result.filter(|v| v.is_finite());

    if let (Some(result), Some(lod)) = (result, input.detection_limit.filter(|v| v.is_finite())) {
        if result < lod {
            tracing::debug!(result, lod, "Result below detection limit");
            return HygienicAssessment {
                is_safe: true,
                compliance_ratio: None,
                justification: Justification::new(
                    format!(
                        "Result {} is below the detection limit {}: agent not detected, \
                         considered absent.",
                        result, lod
                    ),
                    LOD_ARTICLE,
                    LOD_TEXT,
                ),
            };
        }
    }

    let limit = input
        .exposure_limit
        .filter(|v| v.is_finite() && *v > 0.0);

    let ratio = match (result, limit) {
        (Some(result), Some(limit)) => Some(result / limit).filter(|r| r.is_finite()),
        _ => None,
    };

    if let (Some(result), Some(limit), Some(ratio)) = (result, limit, ratio) {
        let is_safe = ratio <= 1.0;
        tracing::debug!(result, limit, ratio, is_safe, "Exposure ratio computed");

        let explanation = if is_safe {
            format!(
                "Exposure ratio {:.3} does not exceed 1: controlled situation.",
                ratio
            )
        } else {
            format!(
                "Exposure ratio {:.3} exceeds 1: unacceptable exposure, corrective action \
                 required.",
                ratio
            )
        };

        return HygienicAssessment {
            is_safe,
            compliance_ratio: Some(ratio),
            justification: Justification::new(explanation, VLA_ARTICLE, VLA_TEXT),
        };
    }

    tracing::debug!("Analytic data pending");
    HygienicAssessment {
        is_safe: false,
        compliance_ratio: None,
        justification: Justification::pending(),
    }
}

//! Assessment Coordinator - runs a request through the evaluation pipeline.
//!
//! Stages run in a fixed order (hazard, sieve, hygienic, sampling). Each
//! stage is optional and independent: an earlier outcome is reported as
//! a hint but never prevents a later stage from running.

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::domain::{
    En689Result, ExposureSieveAssessment, ExposureSieveInput, HazardAssessment, HazardInput,
    HygienicAssessment, HygienicEvalInput, Sample,
};
use crate::engine::{
    classify_hazard, evaluate_exposure_relevance, evaluate_hygienic, SamplingEvaluator,
};

/// Sampling campaign to evaluate against an exposure limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingRequest {
    pub exposure_limit: f64,
    #[serde(default)]
    pub samples: Vec<Sample>,
}

/// Inputs gathered by the orchestrator for one agent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hazard: Option<HazardInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exposure: Option<ExposureSieveInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hygienic: Option<HygienicEvalInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sampling: Option<SamplingRequest>,
}

/// Results of every stage that was requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub hazard: Option<HazardAssessment>,
    pub exposure: Option<ExposureSieveAssessment>,
    pub hygienic: Option<HygienicAssessment>,
    pub sampling: Option<En689Result>,
    /// Sieve verdict on whether measuring is needed; `None` without a sieve input.
    pub quantitative_evaluation_required: Option<bool>,
}

/// Orchestrates the four evaluators.
#[derive(Debug, Clone, Default)]
pub struct AssessmentCoordinator {
    sampling: SamplingEvaluator,
}

impl AssessmentCoordinator {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            sampling: SamplingEvaluator::new(config.default_lod_multiplier),
        }
    }

    /// Evaluate every stage present in the request.
    pub fn evaluate(&self, request: &AssessmentRequest) -> AssessmentReport {
        let hazard = request.hazard.as_ref().map(classify_hazard);
        if let Some(assessment) = &hazard {
            tracing::debug!(
                is_hazardous = assessment.is_hazardous,
                requires_zero_exposure = assessment.requires_zero_exposure,
                "Hazard stage complete"
            );
        }

        let exposure = request.exposure.as_ref().map(evaluate_exposure_relevance);
        let quantitative_evaluation_required = exposure.as_ref().map(|e| e.is_relevant);
        if quantitative_evaluation_required == Some(false) && request.sampling.is_some() {
            tracing::debug!("Sampling supplied although the sieve found no exposure route");
        }

        let hygienic = request.hygienic.as_ref().map(evaluate_hygienic);

        let sampling = request
            .sampling
            .as_ref()
            .map(|s| self.sampling.evaluate(&s.samples, s.exposure_limit));

        tracing::info!(
            agent = request.hazard.as_ref().map(|h| h.agent_name.as_str()).unwrap_or("-"),
            is_hazardous = ?hazard.as_ref().map(|h| h.is_hazardous),
            quantitative_evaluation_required = ?quantitative_evaluation_required,
            is_safe = ?hygienic.as_ref().map(|h| h.is_safe),
            decision = ?sampling.as_ref().map(|s| s.decision),
            "Assessment complete"
        );

        AssessmentReport {
            hazard,
            exposure,
            hygienic,
            sampling,
            quantitative_evaluation_required,
        }
    }
}

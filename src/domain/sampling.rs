//! Sampling domain types for the EN 689 compliance test.
//!
//! Represents the personal air samples collected for a similar exposure
//! group and the outcome of evaluating them against an exposure limit.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Factor applied to the detection limit of a non-detected sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum LodMultiplier {
    /// LOD/2 convention.
    #[default]
    Half,
    /// Full LOD, the conservative convention.
    Full,
}

impl LodMultiplier {
    pub fn factor(&self) -> f64 {
        match self {
            LodMultiplier::Half => 0.5,
            LodMultiplier::Full => 1.0,
        }
    }
}

impl TryFrom<f64> for LodMultiplier {
    type Error = EngineError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value == 0.5 {
            Ok(LodMultiplier::Half)
        } else if value == 1.0 {
            Ok(LodMultiplier::Full)
        } else {
            Err(EngineError::InvalidMultiplier(value))
        }
    }
}

impl From<LodMultiplier> for f64 {
    fn from(m: LodMultiplier) -> Self {
        m.factor()
    }
}

/// How a sample's concentration was captured.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SampleMeasurement {
    /// Concentration reported directly by the laboratory (mg/m³).
    Direct { concentration: f64 },
    /// Raw capture data; concentration = mass / (flow_rate × duration).
    Raw {
        /// Captured mass (mg).
        mass: f64,
        /// Pump flow rate (m³/min).
        flow_rate: f64,
        /// Sampling time (min).
        duration: f64,
    },
}

impl SampleMeasurement {
    /// Concentration before any detection-limit substitution.
    ///
    /// Raw captures with a non-positive sampled volume yield `None`.
    pub fn concentration(&self) -> Option<f64> {
        match *self {
            SampleMeasurement::Direct { concentration } => Some(concentration),
            SampleMeasurement::Raw {
                mass,
                flow_rate,
                duration,
            } => {
                let volume = flow_rate * duration;
                if volume.is_finite() && volume > 0.0 {
                    Some(mass / volume)
                } else {
                    None
                }
            }
        }
    }
}

/// A single personal exposure measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub id: String,
    #[serde(flatten)]
    pub measurement: SampleMeasurement,
    /// The reported value is the detection limit, not a detected amount.
    #[serde(default)]
    pub below_detection_limit: bool,
    /// Overrides the configured multiplier for this sample.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lod_multiplier: Option<LodMultiplier>,
}

impl Sample {
    pub fn direct(id: impl Into<String>, concentration: f64) -> Self {
        Self {
            id: id.into(),
            measurement: SampleMeasurement::Direct { concentration },
            below_detection_limit: false,
            lod_multiplier: None,
        }
    }

    pub fn raw(id: impl Into<String>, mass: f64, flow_rate: f64, duration: f64) -> Self {
        Self {
            id: id.into(),
            measurement: SampleMeasurement::Raw {
                mass,
                flow_rate,
                duration,
            },
            below_detection_limit: false,
            lod_multiplier: None,
        }
    }

    /// Mark the sample as non-detected, its value being the detection limit.
    pub fn below_lod(mut self, multiplier: Option<LodMultiplier>) -> Self {
        self.below_detection_limit = true;
        self.lod_multiplier = multiplier;
        self
    }

    /// Usable concentration, or `None` when the sample must be discarded.
    ///
    /// `default_multiplier` applies to non-detected samples that carry
    /// no multiplier of their own.
    pub fn usable_concentration(&self, default_multiplier: LodMultiplier) -> Option<f64> {
        let mut value = self.measurement.concentration()?;
        if self.below_detection_limit && value > 0.0 {
            value *= self.lod_multiplier.unwrap_or(default_multiplier).factor();
        }
        (value.is_finite() && value > 0.0).then_some(value)
    }
}

/// A sample that entered the evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumedSample {
    pub id: String,
    /// Concentration actually used (mg/m³).
    pub concentration: f64,
    /// The detection-limit substitution was applied.
    pub lod_substituted: bool,
}

/// Compliance decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Compliant,
    NonCompliant,
    NeedMoreSamples,
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Compliant => write!(f, "compliant"),
            Decision::NonCompliant => write!(f, "non_compliant"),
            Decision::NeedMoreSamples => write!(f, "need_more_samples"),
        }
    }
}

/// Which regime produced the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppliedRule {
    /// Preliminary test on fewer than six samples.
    Screening,
    /// Statistical test passed: UTL within the limit.
    StatisticalUtl,
    /// Statistical test failed: UTL above the limit.
    StatisticalFail,
}

impl std::fmt::Display for AppliedRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppliedRule::Screening => write!(f, "screening"),
            AppliedRule::StatisticalUtl => write!(f, "statistical_utl"),
            AppliedRule::StatisticalFail => write!(f, "statistical_fail"),
        }
    }
}

/// Descriptive statistics of the evaluated samples.
///
/// In the screening regime `gm` and `gsd` are zero, `p95` holds the
/// maximum concentration and `ur` the screening limit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct En689Statistics {
    pub gm: f64,
    pub gsd: f64,
    pub p95: f64,
    pub ur: f64,
    pub compliance_index: f64,
}

/// Outcome of the EN 689 sampling evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct En689Result {
    pub decision: Decision,
    pub applied_rule: AppliedRule,
    pub exposure_limit: f64,
    pub samples: Vec<ConsumedSample>,
    pub quality_alerts: Vec<String>,
    pub retest_interval: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<En689Statistics>,
}

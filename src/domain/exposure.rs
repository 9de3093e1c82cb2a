//! Exposure relevance domain types.

use serde::{Deserialize, Serialize};

use crate::domain::Justification;
use crate::error::EngineError;

/// Physical form of the agent as handled at the workplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhysicalForm {
    /// Compact solid that does not shed particles on its own.
    MassiveSolid,
    /// Dust or particulate solid.
    DustSolid,
    HighVolatilityLiquid,
    LowVolatilityLiquid,
    Gas,
}

impl PhysicalForm {
    pub const ALL: [PhysicalForm; 5] = [
        PhysicalForm::MassiveSolid,
        PhysicalForm::DustSolid,
        PhysicalForm::HighVolatilityLiquid,
        PhysicalForm::LowVolatilityLiquid,
        PhysicalForm::Gas,
    ];
}

impl std::fmt::Display for PhysicalForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhysicalForm::MassiveSolid => write!(f, "massive_solid"),
            PhysicalForm::DustSolid => write!(f, "dust_solid"),
            PhysicalForm::HighVolatilityLiquid => write!(f, "high_volatility_liquid"),
            PhysicalForm::LowVolatilityLiquid => write!(f, "low_volatility_liquid"),
            PhysicalForm::Gas => write!(f, "gas"),
        }
    }
}

impl std::str::FromStr for PhysicalForm {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "massive_solid" => Ok(PhysicalForm::MassiveSolid),
            "dust_solid" => Ok(PhysicalForm::DustSolid),
            "high_volatility_liquid" => Ok(PhysicalForm::HighVolatilityLiquid),
            "low_volatility_liquid" => Ok(PhysicalForm::LowVolatilityLiquid),
            "gas" => Ok(PhysicalForm::Gas),
            _ => Err(EngineError::UnknownPhysicalForm(s.to_string())),
        }
    }
}

/// Input to the exposure relevance sieve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExposureSieveInput {
    pub physical_form: PhysicalForm,
    /// Whether the task involves contact with, or release of, the agent.
    pub has_contact: bool,
}

/// Outcome of the exposure relevance sieve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExposureSieveAssessment {
    /// Quantitative evaluation is required.
    pub is_relevant: bool,
    pub justification: Justification,
}

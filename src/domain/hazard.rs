//! Hazard classification domain types.
//!
//! Represents a chemical agent as declared on its safety data sheet and
//! the outcome of its CMR classification.

use serde::{Deserialize, Serialize};

use crate::domain::Justification;
use crate::error::EngineError;

/// CLP hazard statements relevant to CMR classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HazardStatement {
    /// May cause genetic defects (Muta. 1A/1B).
    H340,
    /// Suspected of causing genetic defects (Muta. 2).
    H341,
    /// May cause cancer (Carc. 1A/1B).
    H350,
    /// May cause cancer by inhalation (Carc. 1A/1B).
    H350i,
    /// Suspected of causing cancer (Carc. 2).
    H351,
    /// May damage fertility or the unborn child (Repr. 1A/1B).
    H360,
    H360F,
    H360D,
    H360FD,
    H360Fd,
    H360Df,
    /// Suspected of damaging fertility or the unborn child (Repr. 2).
    H361,
    H361f,
    H361d,
    H361fd,
    /// May cause harm to breast-fed children (lactation).
    H362,
}

impl HazardStatement {
    pub const ALL: [HazardStatement; 16] = [
        HazardStatement::H340,
        HazardStatement::H341,
        HazardStatement::H350,
        HazardStatement::H350i,
        HazardStatement::H351,
        HazardStatement::H360,
        HazardStatement::H360F,
        HazardStatement::H360D,
        HazardStatement::H360FD,
        HazardStatement::H360Fd,
        HazardStatement::H360Df,
        HazardStatement::H361,
        HazardStatement::H361f,
        HazardStatement::H361d,
        HazardStatement::H361fd,
        HazardStatement::H362,
    ];

    /// The CLP code as printed on a safety data sheet.
    pub fn code(&self) -> &'static str {
        match self {
            HazardStatement::H340 => "H340",
            HazardStatement::H341 => "H341",
            HazardStatement::H350 => "H350",
            HazardStatement::H350i => "H350i",
            HazardStatement::H351 => "H351",
            HazardStatement::H360 => "H360",
            HazardStatement::H360F => "H360F",
            HazardStatement::H360D => "H360D",
            HazardStatement::H360FD => "H360FD",
            HazardStatement::H360Fd => "H360Fd",
            HazardStatement::H360Df => "H360Df",
            HazardStatement::H361 => "H361",
            HazardStatement::H361f => "H361f",
            HazardStatement::H361d => "H361d",
            HazardStatement::H361fd => "H361fd",
            HazardStatement::H362 => "H362",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            HazardStatement::H340 => "May cause genetic defects",
            HazardStatement::H341 => "Suspected of causing genetic defects",
            HazardStatement::H350 => "May cause cancer",
            HazardStatement::H350i => "May cause cancer by inhalation",
            HazardStatement::H351 => "Suspected of causing cancer",
            HazardStatement::H360 => "May damage fertility or the unborn child",
            HazardStatement::H360F => "May damage fertility",
            HazardStatement::H360D => "May damage the unborn child",
            HazardStatement::H360FD => "May damage fertility. May damage the unborn child",
            HazardStatement::H360Fd => {
                "May damage fertility. Suspected of damaging the unborn child"
            }
            HazardStatement::H360Df => {
                "May damage the unborn child. Suspected of damaging fertility"
            }
            HazardStatement::H361 => "Suspected of damaging fertility or the unborn child",
            HazardStatement::H361f => "Suspected of damaging fertility",
            HazardStatement::H361d => "Suspected of damaging the unborn child",
            HazardStatement::H361fd => {
                "Suspected of damaging fertility. Suspected of damaging the unborn child"
            }
            HazardStatement::H362 => "May cause harm to breast-fed children",
        }
    }

    /// Whether the statement marks a known or presumed (category 1A/1B) CMR.
    pub fn is_cmr_category_1(&self) -> bool {
        matches!(
            self,
            HazardStatement::H340
                | HazardStatement::H350
                | HazardStatement::H350i
                | HazardStatement::H360
                | HazardStatement::H360F
                | HazardStatement::H360D
                | HazardStatement::H360FD
                | HazardStatement::H360Fd
                | HazardStatement::H360Df
        )
    }
}

impl std::fmt::Display for HazardStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for HazardStatement {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        HazardStatement::ALL
            .iter()
            .find(|h| h.code() == trimmed)
            .copied()
            .ok_or_else(|| EngineError::UnknownHazardStatement(s.to_string()))
    }
}

/// Input to the hazard classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardInput {
    /// Commercial or chemical name of the agent.
    pub agent_name: String,
    /// Hazard statements declared for the agent.
    #[serde(default)]
    pub hazard_statements: Vec<HazardStatement>,
    /// Whether the agent is a mixture rather than a pure substance.
    #[serde(default)]
    pub is_mixture: bool,
    /// Concentration of the CMR component in the mixture, in percent (0-100).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concentration_percent: Option<f64>,
}

impl HazardInput {
    pub fn new(agent_name: impl Into<String>) -> Self {
        Self {
            agent_name: agent_name.into(),
            hazard_statements: Vec::new(),
            is_mixture: false,
            concentration_percent: None,
        }
    }

    pub fn with_statements(mut self, statements: impl IntoIterator<Item = HazardStatement>) -> Self {
        self.hazard_statements.extend(statements);
        self
    }

    /// Mark the agent as a mixture with the given CMR concentration.
    pub fn as_mixture(mut self, concentration_percent: Option<f64>) -> Self {
        self.is_mixture = true;
        self.concentration_percent = concentration_percent;
        self
    }
}

/// Outcome of hazard classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardAssessment {
    /// Agent is classified as CMR hazardous.
    pub is_hazardous: bool,
    /// Exposure must be reduced to the technically achievable minimum.
    pub requires_zero_exposure: bool,
    /// Ordered reasons. Never empty.
    pub justifications: Vec<Justification>,
}

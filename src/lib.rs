//! Hygiene Core - Occupational Exposure Compliance Engine
//!
//! Decides whether workplace exposure to a chemical agent is legally
//! acceptable. The pipeline classifies the agent (CMR hazard), checks
//! whether an exposure route exists, compares single lab results with
//! their limits, and evaluates sampling campaigns with the EN 689
//! screening and statistical tests.
//!
//! All evaluators are pure: the same input always yields the same result.

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod logging;

#[cfg(test)]
mod property_tests;

pub use crate::config::{Config, EngineConfig, OutputConfig};
pub use crate::error::{EngineError, EngineResult};

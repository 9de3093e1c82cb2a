//! Evaluation engine for Hygiene Core.
//!
//! This module contains the exposure-compliance pipeline:
//! - Hazard Classifier: CMR classification from hazard statements and mixture concentration
//! - Exposure Sieve: qualitative gate on physical form and contact
//! - Hygienic Evaluator: single lab result against detection and exposure limits
//! - Sampling Evaluator: EN 689 screening and statistical tests
//! - Assessment Coordinator: runs a full request through all stages
//!
//! Every evaluator is a pure function of its input.

mod coordinator;
mod hazard;
mod hygienic;
mod sampling;
mod sieve;
mod utl;

pub use coordinator::*;
pub use hazard::*;
pub use hygienic::*;
pub use sampling::*;
pub use sieve::*;
pub use utl::*;

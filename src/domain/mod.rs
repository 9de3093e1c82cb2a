//! Domain types for Hygiene Core.
//!
//! This module contains the inputs and assessments exchanged with the
//! orchestrator. All of them are plain values created per evaluation.

mod exposure;
mod hazard;
mod hygienic;
mod justification;
mod sampling;

pub use exposure::*;
pub use hazard::*;
pub use hygienic::*;
pub use justification::*;
pub use sampling::*;

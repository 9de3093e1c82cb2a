//! Hygiene Core command-line entry point.
//!
//! Reads an assessment request as JSON (from the path given as first
//! argument, or stdin) and prints the assessment report as JSON.

use std::io::Read;

use anyhow::Context;

use hygiene_core::engine::{AssessmentCoordinator, AssessmentRequest};
use hygiene_core::{logging, Config};

fn main() -> anyhow::Result<()> {
    logging::init();

    tracing::info!("Starting Hygiene Core v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load().map_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    tracing::info!(
        default_lod_multiplier = config.engine.default_lod_multiplier.factor(),
        pretty = config.output.pretty,
        "Configuration loaded"
    );

    let raw = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read request file {path}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read request from stdin")?;
            buf
        }
    };

    let request: AssessmentRequest = serde_json::from_str(&raw).map_err(|e| {
        tracing::error!(error = %e, "Invalid assessment request");
        anyhow::anyhow!("Invalid assessment request: {}", e)
    })?;

    let coordinator = AssessmentCoordinator::new(&config.engine);
    let report = coordinator.evaluate(&request);

    let output = if config.output.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{output}");

    Ok(())
}

//! Exposure Relevance Sieve - qualitative gate before measuring.

use crate::domain::{ExposureSieveAssessment, ExposureSieveInput, Justification, PhysicalForm};

const ARTICLE: &str = "RD 374/2001, Art. 3.4";
const TEXT: &str = "The risk evaluation shall include the determination of exposure \
    levels where the nature of the agent and the conditions of work allow exposure.";

/// Decide whether the agent can plausibly reach the worker.
pub fn evaluate_exposure_relevance(input: &ExposureSieveInput) -> ExposureSieveAssessment {
    let is_relevant = !(input.physical_form == PhysicalForm::MassiveSolid && !input.has_contact);

    let justification = if is_relevant {
        Justification::new(
            format!(
                "Agent handled as {} with a transmission route to the worker; \
                 quantitative evaluation is required.",
                input.physical_form
            ),
            ARTICLE,
            TEXT,
        )
    } else {
        Justification::new(
            "Massive solid without contact or release: no mass transfer, so inhalation \
             and dermal routes are dismissed.",
            ARTICLE,
            TEXT,
        )
    };

    tracing::debug!(
        physical_form = %input.physical_form,
        has_contact = input.has_contact,
        is_relevant,
        "Exposure sieve complete"
    );

    ExposureSieveAssessment {
        is_relevant,
        justification,
    }
}

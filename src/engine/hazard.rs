//! Hazard Classifier - decides whether an agent is CMR hazardous.
//!
//! Two independent checks feed the outcome: the declared hazard
//! statements, and for mixtures the concentration of the CMR component
//! against the generic classification limit.

use crate::domain::{HazardAssessment, HazardInput, HazardStatement, Justification};

/// Generic concentration limit (percent) for classifying a mixture as CMR.
pub const MIXTURE_CMR_THRESHOLD_PERCENT: f64 = 0.1;

const CMR_ARTICLE: &str = "RD 665/1997, Art. 2";
const CMR_TEXT: &str = "Carcinogenic or mutagenic agents: substances meeting the criteria \
    for category 1A or 1B classification under Regulation (EC) 1272/2008, Annex I.";
const MIXTURE_ARTICLE: &str = "Regulation (EC) 1272/2008, Annex I, Tables 3.5.2, 3.6.2 and 3.7.2";
const MIXTURE_TEXT: &str = "A mixture is classified as CMR category 1 when at least one \
    component so classified is present at or above the generic concentration limit of 0.1 %.";
const PRECAUTION_ARTICLE: &str = "RD 665/1997, Art. 5";
const PRECAUTION_TEXT: &str = "Where substitution is not technically possible, exposure \
    shall be reduced to as low a level as is technically possible.";
const SUSPECTED_ARTICLE: &str = "RD 374/2001, Art. 3";
const SUSPECTED_TEXT: &str = "The employer shall evaluate the risks arising from the \
    presence of hazardous chemical agents at the workplace.";
const NOT_CLASSIFIED_ARTICLE: &str = "Regulation (EC) 1272/2008, Annex VI";
const NOT_CLASSIFIED_TEXT: &str = "Harmonised classification and labelling of hazardous substances.";

/// Classify an agent as CMR hazardous.
///
/// Never fails; the returned justification list is never empty.
pub fn classify_hazard(input: &HazardInput) -> HazardAssessment {
    let mut is_hazardous = false;
    let mut requires_zero_exposure = false;
    let mut justifications = Vec::new();

    let category_1: Vec<HazardStatement> = input
        .hazard_statements
        .iter()
        .copied()
        .filter(HazardStatement::is_cmr_category_1)
        .collect();

    if !category_1.is_empty() {
        is_hazardous = true;
        requires_zero_exposure = true;
        justifications.push(Justification::new(
            format!(
                "{} carries hazard statement(s) {}, classifying it as a category 1 CMR agent.",
                input.agent_name,
                join_codes(&category_1)
            ),
            CMR_ARTICLE,
            CMR_TEXT,
        ));
    } else {
        let suspected: Vec<HazardStatement> = input
            .hazard_statements
            .iter()
            .copied()
            .filter(|h| !h.is_cmr_category_1())
            .collect();
        if !suspected.is_empty() {
            justifications.push(Justification::new(
                format!(
                    "{} carries suspected CMR hazard statement(s) {}; it is not category 1 \
                     but must be covered by the general chemical risk evaluation.",
                    input.agent_name,
                    join_codes(&suspected)
                ),
                SUSPECTED_ARTICLE,
                SUSPECTED_TEXT,
            ));
        }
    }

    if let Some(concentration) = mixture_concentration(input) {
        if concentration >= MIXTURE_CMR_THRESHOLD_PERCENT {
            is_hazardous = true;
            requires_zero_exposure = true;
            justifications.push(Justification::new(
                format!(
                    "Mixture contains the CMR component at {}%, at or above the {}% \
                     classification limit.",
                    concentration, MIXTURE_CMR_THRESHOLD_PERCENT
                ),
                MIXTURE_ARTICLE,
                MIXTURE_TEXT,
            ));
        } else if !is_hazardous {
            requires_zero_exposure = true;
            justifications.push(Justification::new(
                format!(
                    "Mixture contains the CMR component at {}%, below the {}% classification \
                     limit; exposure is minimised under the precautionary principle.",
                    concentration, MIXTURE_CMR_THRESHOLD_PERCENT
                ),
                PRECAUTION_ARTICLE,
                PRECAUTION_TEXT,
            ));
        }
    }

    if justifications.is_empty() {
        justifications.push(Justification::new(
            format!("{} is not classified as a CMR agent.", input.agent_name),
            NOT_CLASSIFIED_ARTICLE,
            NOT_CLASSIFIED_TEXT,
        ));
    }

    tracing::debug!(
        agent = %input.agent_name,
        is_hazardous,
        requires_zero_exposure,
        justification_count = justifications.len(),
        "Hazard classification complete"
    );

    HazardAssessment {
        is_hazardous,
        requires_zero_exposure,
        justifications,
    }
}

/// Concentration that takes part in mixture classification, if any.
fn mixture_concentration(input: &HazardInput) -> Option<f64> {
    if !input.is_mixture {
        return None;
    }
    input
        .concentration_percent
        .filter(|c| c.is_finite() && (0.0..=100.0).contains(c))
}

/// Comma-separated codes, each listed once in first-seen order.
fn join_codes(statements: &[HazardStatement]) -> String {
    let mut codes: Vec<&str> = Vec::with_capacity(statements.len());
    for code in statements.iter().map(HazardStatement::code) {
        if !codes.contains(&code) {
            codes.push(code);
        }
    }
    codes.join(", ")
}

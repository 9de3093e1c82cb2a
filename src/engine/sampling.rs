//! Statistical Sampling Evaluator - EN 689 compliance test.
//!
//! Two regimes, selected by the number of usable samples:
//! - Screening (n < 6): the highest result is compared with a fraction
//!   of the exposure limit that grows with n.
//! - Statistical (n >= 6): a log-normal upper tolerance limit (UR) of
//!   the 95th percentile at 70 % confidence is compared with the limit.

use crate::domain::{
    AppliedRule, ConsumedSample, Decision, En689Result, En689Statistics, LodMultiplier, Sample,
};
use crate::engine::utl::{k_factor, MIN_STATISTICAL_SAMPLES, Z_95};

/// Smallest sample size accepted by the screening test.
pub const MIN_SCREENING_SAMPLES: usize = 3;

/// GSD above which the exposure group is flagged as heterogeneous.
pub const GSD_ALERT_THRESHOLD: f64 = 3.0;

pub const RETEST_36_MONTHS: &str = "36 months";
pub const RETEST_24_MONTHS: &str = "24 months";
pub const RETEST_12_MONTHS: &str = "12 months";
/// Interval reported while the campaign is still incomplete.
pub const RETEST_PENDING: &str = "pending further sampling";

pub const ALERT_NO_VALID_SAMPLES: &str =
    "No valid samples: at least one positive concentration is required.";
pub const ALERT_INVALID_LIMIT: &str =
    "Exposure limit is missing or not positive: the sampling campaign cannot be evaluated.";
pub const ALERT_MIN_SCREENING: &str =
    "At least 3 measurements are required for the screening test.";
pub const ALERT_EXPAND_TO_SIX: &str =
    "Screening limit exceeded: expand the campaign to at least 6 samples for the statistical test.";
pub const ALERT_HIGH_VARIABILITY: &str =
    "Exposure variability is excessive (GSD > 3): the similar exposure group may not be homogeneous.";
pub const ALERT_OUT_OF_RANGE: &str =
    "Sample values and exposure limit span a range too wide to evaluate: check units and data entry.";

/// Evaluates sampling campaigns against an occupational exposure limit.
#[derive(Debug, Clone, Copy, Default)]
pub struct SamplingEvaluator {
    /// Multiplier for non-detected samples that carry none.
    default_multiplier: LodMultiplier,
}

impl SamplingEvaluator {
    pub fn new(default_multiplier: LodMultiplier) -> Self {
        Self { default_multiplier }
    }

    /// Run the EN 689 test. Never fails; degenerate input yields
    /// `need_more_samples` with explanatory alerts.
    pub fn evaluate(&self, samples: &[Sample], exposure_limit: f64) -> En689Result {
        let mut alerts = Vec::new();
        let consumed = self.preprocess(samples, &mut alerts);

        let limit_valid = exposure_limit.is_finite() && exposure_limit > 0.0;
        if !limit_valid {
            tracing::debug!(exposure_limit, "Exposure limit not evaluable");
            alerts.push(ALERT_INVALID_LIMIT.to_string());
        }
        if consumed.is_empty() {
            tracing::debug!(supplied = samples.len(), "No usable samples");
            alerts.push(ALERT_NO_VALID_SAMPLES.to_string());
        }
        if !limit_valid || consumed.is_empty() {
            return incomplete(exposure_limit, consumed, alerts);
        }

        if consumed.len() < MIN_STATISTICAL_SAMPLES {
            screening(exposure_limit, consumed, alerts)
        } else {
            statistical(exposure_limit, consumed, alerts)
        }
    }

    /// Derive usable concentrations, recording an alert per discarded sample.
    fn preprocess(&self, samples: &[Sample], alerts: &mut Vec<String>) -> Vec<ConsumedSample> {
        samples
            .iter()
            .filter_map(|sample| match sample.usable_concentration(self.default_multiplier) {
                Some(concentration) => Some(ConsumedSample {
                    id: sample.id.clone(),
                    concentration,
                    lod_substituted: sample.below_detection_limit,
                }),
                None => {
                    alerts.push(format!(
                        "Sample {} discarded: no positive concentration could be derived.",
                        sample.id
                    ));
                    None
                }
            })
            .collect()
    }
}

/// Run the EN 689 test with the LOD/2 convention for non-detected samples.
pub fn evaluate_en689(samples: &[Sample], exposure_limit: f64) -> En689Result {
    SamplingEvaluator::default().evaluate(samples, exposure_limit)
}

/// Result without statistics. A non-finite limit is reported as zero.
fn incomplete(exposure_limit: f64, samples: Vec<ConsumedSample>, alerts: Vec<String>) -> En689Result {
    En689Result {
        decision: Decision::NeedMoreSamples,
        applied_rule: AppliedRule::Screening,
        exposure_limit: if exposure_limit.is_finite() {
            exposure_limit
        } else {
            0.0
        },
        samples,
        quality_alerts: alerts,
        retest_interval: RETEST_PENDING.to_string(),
        statistics: None,
    }
}

/// Limit fraction for the screening test.
fn screening_fraction(n: usize) -> f64 {
    match n {
        4 => 0.15,
        5 => 0.20,
        _ => 0.10,
    }
}

fn screening(exposure_limit: f64, samples: Vec<ConsumedSample>, mut alerts: Vec<String>) -> En689Result {
    let n = samples.len();
    let max_val = samples
        .iter()
        .map(|s| s.concentration)
        .fold(f64::MIN, f64::max);
    let limit = exposure_limit * screening_fraction(n);
    let compliance_index = max_val / exposure_limit;

    if !compliance_index.is_finite() {
        tracing::debug!(n, max_val, exposure_limit, "Screening index out of range");
        alerts.push(ALERT_OUT_OF_RANGE.to_string());
        return incomplete(exposure_limit, samples, alerts);
    }

    let decision = if n < MIN_SCREENING_SAMPLES {
        alerts.push(ALERT_MIN_SCREENING.to_string());
        Decision::NeedMoreSamples
    } else if max_val <= limit {
        Decision::Compliant
    } else {
        alerts.push(ALERT_EXPAND_TO_SIX.to_string());
        Decision::NeedMoreSamples
    };

    let retest_interval = match decision {
        Decision::Compliant => RETEST_36_MONTHS,
        _ => RETEST_PENDING,
    };

    tracing::debug!(
        n,
        max_val,
        screening_limit = limit,
        decision = %decision,
        "Screening test complete"
    );

    En689Result {
        decision,
        applied_rule: AppliedRule::Screening,
        exposure_limit,
        samples,
        quality_alerts: alerts,
        retest_interval: retest_interval.to_string(),
        statistics: Some(En689Statistics {
            gm: 0.0,
            gsd: 0.0,
            p95: max_val,
            ur: limit,
            compliance_index,
        }),
    }
}

fn statistical(exposure_limit: f64, samples: Vec<ConsumedSample>, mut alerts: Vec<String>) -> En689Result {
    let n = samples.len();
    let logs: Vec<f64> = samples.iter().map(|s| s.concentration.ln()).collect();
    let mean_ln = logs.iter().sum::<f64>() / n as f64;
    let variance_ln = logs.iter().map(|l| (l - mean_ln).powi(2)).sum::<f64>() / (n - 1) as f64;
    let sd_ln = variance_ln.sqrt();

    let k = k_factor(n).unwrap_or(Z_95);
    let gm = mean_ln.exp();
    let gsd = sd_ln.exp();
    let ur = (mean_ln + k * sd_ln).exp();
    let p95 = (mean_ln + Z_95 * sd_ln).exp();
    let compliance_index = ur / exposure_limit;

    if ![gm, gsd, ur, p95, compliance_index]
        .iter()
        .all(|v| v.is_finite())
    {
        tracing::debug!(n, mean_ln, sd_ln, exposure_limit, "Statistics out of range");
        alerts.push(ALERT_OUT_OF_RANGE.to_string());
        return incomplete(exposure_limit, samples, alerts);
    }

    let (decision, applied_rule) = if ur <= exposure_limit {
        (Decision::Compliant, AppliedRule::StatisticalUtl)
    } else {
        (Decision::NonCompliant, AppliedRule::StatisticalFail)
    };

    if gsd > GSD_ALERT_THRESHOLD {
        alerts.push(ALERT_HIGH_VARIABILITY.to_string());
    }

    tracing::debug!(
        n,
        gm,
        gsd,
        k,
        ur,
        compliance_index,
        decision = %decision,
        "Statistical test complete"
    );

    En689Result {
        decision,
        applied_rule,
        exposure_limit,
        samples,
        quality_alerts: alerts,
        retest_interval: retest_interval(compliance_index).to_string(),
        statistics: Some(En689Statistics {
            gm,
            gsd,
            p95,
            ur,
            compliance_index,
        }),
    }
}

/// Periodic re-test interval for a compliance index band.
pub fn retest_interval(compliance_index: f64) -> &'static str {
    if compliance_index <= 0.25 {
        RETEST_36_MONTHS
    } else if compliance_index <= 0.5 {
        RETEST_24_MONTHS
    } else {
        RETEST_12_MONTHS
    }
}

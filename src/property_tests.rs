//! Property-based tests for the evaluation engine.
//!
//! These tests use proptest to verify invariants around:
//! - Determinism of every evaluator
//! - CMR priority and never-empty justifications
//! - Detection-limit precedence
//! - Sampling results free of NaN/Infinity

use crate::domain::{
    Decision, ExposureSieveInput, HazardInput, HazardStatement, HygienicEvalInput, LodMultiplier,
    PhysicalForm, Sample,
};
use crate::engine::{
    classify_hazard, evaluate_en689, evaluate_exposure_relevance, evaluate_hygienic,
    SamplingEvaluator, ALERT_HIGH_VARIABILITY, GSD_ALERT_THRESHOLD, MIN_STATISTICAL_SAMPLES,
};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_statement() -> impl Strategy<Value = HazardStatement> {
    prop::sample::select(HazardStatement::ALL.to_vec())
}

fn arb_hazard_input() -> impl Strategy<Value = HazardInput> {
    (
        "[A-Za-z ]{1,20}",
        prop::collection::vec(arb_statement(), 0..4),
        any::<bool>(),
        prop::option::of(prop_oneof![0.0f64..=100.0, Just(0.1), Just(0.099)]),
    )
        .prop_map(|(name, statements, is_mixture, concentration)| HazardInput {
            agent_name: name,
            hazard_statements: statements,
            is_mixture,
            concentration_percent: concentration,
        })
}

fn arb_form() -> impl Strategy<Value = PhysicalForm> {
    prop::sample::select(PhysicalForm::ALL.to_vec())
}

fn arb_multiplier() -> impl Strategy<Value = LodMultiplier> {
    prop_oneof![Just(LodMultiplier::Half), Just(LodMultiplier::Full)]
}

/// Samples including degenerate values that must be discarded.
fn arb_sample() -> impl Strategy<Value = Sample> {
    let value = prop_oneof![
        4 => 1e-4f64..10.0,
        1 => arb_extreme_magnitude(),
        1 => Just(0.0),
        1 => -5.0f64..0.0,
    ];
    let raw_factor = prop_oneof![3 => 1e-4f64..1.0, 1 => Just(0.0)];
    let sample = prop_oneof![
        value.clone().prop_map(|v| Sample::direct("D", v)),
        (value, raw_factor.clone(), raw_factor)
            .prop_map(|(mass, flow, time)| Sample::raw("R", mass, flow, time * 480.0)),
    ];
    (
        sample,
        any::<bool>(),
        prop::option::of(arb_multiplier()),
    )
        .prop_map(|(sample, below_lod, multiplier)| {
            if below_lod {
                sample.below_lod(multiplier)
            } else {
                sample
            }
        })
}

/// Positive values anywhere from 1e-300 to 1e300.
fn arb_extreme_magnitude() -> impl Strategy<Value = f64> {
    (1.0f64..10.0, -300i32..=300).prop_map(|(mantissa, exponent)| mantissa * 10f64.powi(exponent))
}

fn arb_limit() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => 1e-3f64..100.0,
        1 => arb_extreme_magnitude(),
        1 => Just(0.0),
        1 => Just(-1.0),
    ]
}

/// Optional lab values, including extreme magnitudes.
fn arb_lab_value() -> impl Strategy<Value = Option<f64>> {
    prop::option::of(prop_oneof![
        3 => -1.0f64..10.0,
        1 => arb_extreme_magnitude(),
    ])
}

// ============================================================================
// Hazard classifier
// ============================================================================

proptest! {
    #[test]
    fn hazard_is_deterministic(input in arb_hazard_input()) {
        prop_assert_eq!(classify_hazard(&input), classify_hazard(&input));
    }

    #[test]
    fn hazard_justifications_never_empty(input in arb_hazard_input()) {
        prop_assert!(!classify_hazard(&input).justifications.is_empty());
    }

    #[test]
    fn category_1_always_hazardous(
        input in arb_hazard_input(),
        statement in arb_statement().prop_filter("category 1", |h| h.is_cmr_category_1()),
    ) {
        let input = input.with_statements([statement]);
        let result = classify_hazard(&input);
        prop_assert!(result.is_hazardous);
        prop_assert!(result.requires_zero_exposure);
    }

    #[test]
    fn hazardous_implies_zero_exposure(input in arb_hazard_input()) {
        let result = classify_hazard(&input);
        prop_assert!(!result.is_hazardous || result.requires_zero_exposure);
    }
}

// ============================================================================
// Sieve and hygienic evaluator
// ============================================================================

proptest! {
    #[test]
    fn sieve_only_rejects_closed_massive_solid(form in arb_form(), has_contact in any::<bool>()) {
        let result = evaluate_exposure_relevance(&ExposureSieveInput { physical_form: form, has_contact });
        let expected = !(form == PhysicalForm::MassiveSolid && !has_contact);
        prop_assert_eq!(result.is_relevant, expected);
    }

    #[test]
    fn detection_limit_precedes_ratio(
        lod in 1e-3f64..10.0,
        fraction in 0.0f64..0.999,
        vla in prop::option::of(-1.0f64..10.0),
    ) {
        let input = HygienicEvalInput {
            lab_result: Some(lod * fraction),
            detection_limit: Some(lod),
            exposure_limit: vla,
        };
        let result = evaluate_hygienic(&input);
        prop_assert!(result.is_safe);
        prop_assert_eq!(result.compliance_ratio, None);
    }

    #[test]
    fn hygienic_ratio_is_finite(
        lab in arb_lab_value(),
        lod in arb_lab_value(),
        vla in arb_lab_value(),
    ) {
        let input = HygienicEvalInput { lab_result: lab, detection_limit: lod, exposure_limit: vla };
        let result = evaluate_hygienic(&input);
        if let Some(ratio) = result.compliance_ratio {
            prop_assert!(ratio.is_finite());
            prop_assert_eq!(result.is_safe, ratio <= 1.0);
        }
    }
}

// ============================================================================
// Sampling evaluator
// ============================================================================

proptest! {
    #[test]
    fn sampling_is_deterministic(
        samples in prop::collection::vec(arb_sample(), 0..25),
        limit in arb_limit(),
    ) {
        prop_assert_eq!(evaluate_en689(&samples, limit), evaluate_en689(&samples, limit));
    }

    #[test]
    fn sampling_never_yields_non_finite_statistics(
        samples in prop::collection::vec(arb_sample(), 0..25),
        limit in arb_limit(),
        multiplier in arb_multiplier(),
    ) {
        let result = SamplingEvaluator::new(multiplier).evaluate(&samples, limit);
        prop_assert!(result.exposure_limit.is_finite());
        prop_assert!(result.samples.iter().all(|s| s.concentration.is_finite() && s.concentration > 0.0));
        if let Some(stats) = result.statistics {
            for value in [stats.gm, stats.gsd, stats.p95, stats.ur, stats.compliance_index] {
                prop_assert!(value.is_finite());
            }
        } else {
            prop_assert_eq!(result.decision, Decision::NeedMoreSamples);
            prop_assert!(!result.quality_alerts.is_empty());
        }
    }

    #[test]
    fn variability_alert_tracks_gsd(
        values in prop::collection::vec(1e-3f64..50.0, MIN_STATISTICAL_SAMPLES..30),
        limit in 1e-2f64..100.0,
    ) {
        let samples: Vec<Sample> = values.iter().map(|v| Sample::direct("S", *v)).collect();
        let result = evaluate_en689(&samples, limit);
        let stats = result.statistics.expect("statistical regime always reports statistics");
        let alerted = result.quality_alerts.iter().any(|a| a == ALERT_HIGH_VARIABILITY);
        prop_assert_eq!(alerted, stats.gsd > GSD_ALERT_THRESHOLD);
        prop_assert!(stats.ur >= stats.gm);
    }

    #[test]
    fn fewer_than_three_never_compliant(
        values in prop::collection::vec(1e-6f64..1.0, 1..3),
    ) {
        let samples: Vec<Sample> = values.iter().map(|v| Sample::direct("S", *v)).collect();
        prop_assert_eq!(evaluate_en689(&samples, 100.0).decision, Decision::NeedMoreSamples);
    }
}

//! Value stream calculator: annual dollar value per improvement category.
//!
//! Each stream has its own closed-form formula over the baseline and one
//! assumption knob, and each is independently callable so the UI can answer
//! "what-if" queries for a disabled stream without re-deriving the others.
//! Gating happens only in [`compute_stream_values`]: a disabled stream
//! contributes exactly `0.0` and is excluded from the total.
//!
//! The knowledge-compounding stream is derived, not primary: it is a fixed
//! premium on the sum of the other *enabled* streams and is always computed
//! last.

use std::collections::BTreeSet;

use meridian_core::constants::{
    AUTOMATION_RECOVERY_RATE, HOURS_PER_WORK_YEAR, KNOWLEDGE_PREMIUM_RATE, TOOL_OVERLAP_DISCOUNT,
};
use meridian_core::types::{
    BaselineOutputs, CostCategory, ImprovementAssumptions, OpsProfile, OrganizationProfile,
    PainProfile, SpendProfile, StreamValue, StreamValues, ValueStream,
};

/// Value of reclaimed automatable working hours.
///
/// `team hours/year × automatable share × recovery haircut × hourly rate`.
pub fn time_savings_value(org: &OrganizationProfile, assumptions: &ImprovementAssumptions) -> f64 {
    f64::from(org.headcount)
        * HOURS_PER_WORK_YEAR
        * (assumptions.automatable_time_pct / 100.0)
        * AUTOMATION_RECOVERY_RATE
        * org.hourly_rate()
}

/// Value of eliminated rework: a fraction of the baseline rework cost.
pub fn rework_reduction_value(
    baseline: &BaselineOutputs,
    assumptions: &ImprovementAssumptions,
) -> f64 {
    baseline.segment_cost(CostCategory::Rework) * assumptions.rework_reduction_pct / 100.0
}

/// Value of faster campaign cycles.
///
/// `campaigns/year × days saved per campaign × value per campaign-day`,
/// where days saved come from compressing the approval cycle and a
/// campaign-day is valued at its share of annual media spend. A zero cycle
/// length or campaign count propagates a non-finite value per the error
/// model; it is not rejected here.
pub fn cycle_acceleration_value(
    spend: &SpendProfile,
    ops: &OpsProfile,
    pain: &PainProfile,
    assumptions: &ImprovementAssumptions,
) -> f64 {
    let days_saved = pain.approval_cycle_days * assumptions.cycle_reduction_pct / 100.0;
    let campaign_day_value = spend.annual_media_spend
        / (f64::from(ops.campaigns_per_year) * ops.avg_campaign_cycle_days);
    f64::from(ops.campaigns_per_year) * days_saved * campaign_day_value
}

/// Value of tooling optimization: utilization-gap recovery plus discounted
/// consolidation of overlapping spend.
pub fn tooling_optimization_value(
    spend: &SpendProfile,
    assumptions: &ImprovementAssumptions,
) -> f64 {
    let utilization_gap = (100.0 - spend.tool_utilization_pct) / 100.0;
    let recovery = utilization_gap * assumptions.utilization_recovery_pct / 100.0;
    spend.annual_martech_spend * recovery
        + spend.annual_martech_spend * (assumptions.consolidation_pct / 100.0) * TOOL_OVERLAP_DISCOUNT
}

/// Value of the media efficiency (ROAS) lift on working-media spend.
/// The lift knob is multiplicative and may exceed 100.
pub fn media_efficiency_value(
    spend: &SpendProfile,
    assumptions: &ImprovementAssumptions,
) -> f64 {
    spend.annual_media_spend * assumptions.roas_lift_pct / 100.0
}

/// The derived compounding premium on the other streams' combined value.
pub fn knowledge_compounding_value(other_streams_total: f64) -> f64 {
    other_streams_total * KNOWLEDGE_PREMIUM_RATE
}

/// Compute all stream values with gating applied.
///
/// Invariants: `total_annual_value` equals the sum of enabled stream values
/// exactly; disabling every stream yields a total of `0.0`; the derived
/// knowledge premium sees only the enabled primary streams.
pub fn compute_stream_values(
    org: &OrganizationProfile,
    spend: &SpendProfile,
    ops: &OpsProfile,
    pain: &PainProfile,
    baseline: &BaselineOutputs,
    assumptions: &ImprovementAssumptions,
    disabled: &BTreeSet<ValueStream>,
) -> StreamValues {
    let gate = |stream: ValueStream, raw: f64| -> StreamValue {
        let enabled = !disabled.contains(&stream);
        StreamValue {
            stream,
            annual_value: if enabled { raw } else { 0.0 },
            enabled,
        }
    };

    let mut streams = vec![
        gate(ValueStream::TimeSavings, time_savings_value(org, assumptions)),
        gate(
            ValueStream::ReworkReduction,
            rework_reduction_value(baseline, assumptions),
        ),
        gate(
            ValueStream::CycleAcceleration,
            cycle_acceleration_value(spend, ops, pain, assumptions),
        ),
        gate(
            ValueStream::ToolingOptimization,
            tooling_optimization_value(spend, assumptions),
        ),
        gate(
            ValueStream::MediaEfficiency,
            media_efficiency_value(spend, assumptions),
        ),
    ];

    // Derived stream last: premium on the enabled primary streams only.
    let primary_total: f64 = streams.iter().map(|s| s.annual_value).sum();
    streams.push(gate(
        ValueStream::KnowledgeCompounding,
        knowledge_compounding_value(primary_total),
    ));

    let total_annual_value = streams.iter().map(|s| s.annual_value).sum();

    StreamValues {
        streams,
        total_annual_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::baseline::compute_baseline;
    use proptest::prelude::*;

    struct Fixture {
        org: OrganizationProfile,
        spend: SpendProfile,
        ops: OpsProfile,
        pain: PainProfile,
        baseline: BaselineOutputs,
        assumptions: ImprovementAssumptions,
    }

    fn fixture() -> Fixture {
        let org = OrganizationProfile::default();
        let spend = SpendProfile::default();
        let ops = OpsProfile::default();
        let pain = PainProfile::default();
        let baseline = compute_baseline(&org, &spend, &ops, &pain);
        Fixture {
            org,
            spend,
            ops,
            pain,
            baseline,
            assumptions: ImprovementAssumptions::default(),
        }
    }

    fn all_streams() -> BTreeSet<ValueStream> {
        ValueStream::ALL.into_iter().collect()
    }

    #[test]
    fn time_savings_shape() {
        let org = OrganizationProfile {
            headcount: 100,
            avg_loaded_fte_cost: 208_000.0, // $100/hr
            ..Default::default()
        };
        let assumptions = ImprovementAssumptions {
            automatable_time_pct: 50.0,
            ..Default::default()
        };
        // 100 × 2080 × 0.5 × 0.6 × 100 = 6_240_000
        assert_eq!(time_savings_value(&org, &assumptions), 6_240_000.0);
    }

    #[test]
    fn rework_reduction_is_fraction_of_baseline_segment() {
        let f = fixture();
        let expected =
            f.baseline.segment_cost(CostCategory::Rework) * f.assumptions.rework_reduction_pct
                / 100.0;
        assert_eq!(rework_reduction_value(&f.baseline, &f.assumptions), expected);
    }

    #[test]
    fn tooling_value_combines_gap_and_consolidation() {
        let spend = SpendProfile {
            annual_martech_spend: 1_000_000.0,
            tool_utilization_pct: 40.0,
            ..Default::default()
        };
        let assumptions = ImprovementAssumptions {
            utilization_recovery_pct: 50.0,
            consolidation_pct: 20.0,
            ..Default::default()
        };
        // gap recovery: 1M × 0.6 × 0.5 = 300k; consolidation: 1M × 0.2 × 0.5 = 100k
        assert_eq!(tooling_optimization_value(&spend, &assumptions), 400_000.0);
    }

    #[test]
    fn roas_lift_may_exceed_100_pct() {
        let spend = SpendProfile {
            annual_media_spend: 1_000_000.0,
            ..Default::default()
        };
        let assumptions = ImprovementAssumptions {
            roas_lift_pct: 150.0,
            ..Default::default()
        };
        assert_eq!(media_efficiency_value(&spend, &assumptions), 1_500_000.0);
    }

    #[test]
    fn total_is_sum_of_enabled_streams() {
        let f = fixture();
        let values = compute_stream_values(
            &f.org,
            &f.spend,
            &f.ops,
            &f.pain,
            &f.baseline,
            &f.assumptions,
            &BTreeSet::new(),
        );
        let sum: f64 = values.streams.iter().map(|s| s.annual_value).sum();
        assert_eq!(values.total_annual_value, sum);
        assert!(values.total_annual_value > 0.0);
    }

    #[test]
    fn disabled_stream_forced_to_zero() {
        let f = fixture();
        let disabled = BTreeSet::from([ValueStream::MediaEfficiency]);
        let values = compute_stream_values(
            &f.org, &f.spend, &f.ops, &f.pain, &f.baseline, &f.assumptions, &disabled,
        );
        assert_eq!(values.value_of(ValueStream::MediaEfficiency), 0.0);
        // The formula itself stays callable for what-if queries.
        assert!(media_efficiency_value(&f.spend, &f.assumptions) > 0.0);
    }

    #[test]
    fn disabling_all_streams_zeroes_the_total() {
        let f = fixture();
        let values = compute_stream_values(
            &f.org,
            &f.spend,
            &f.ops,
            &f.pain,
            &f.baseline,
            &f.assumptions,
            &all_streams(),
        );
        assert_eq!(values.total_annual_value, 0.0);
        assert!(values.streams.iter().all(|s| s.annual_value == 0.0));
    }

    #[test]
    fn knowledge_premium_derived_from_enabled_streams_only() {
        let f = fixture();
        let enabled_only = compute_stream_values(
            &f.org,
            &f.spend,
            &f.ops,
            &f.pain,
            &f.baseline,
            &f.assumptions,
            &BTreeSet::new(),
        );
        let primary_sum: f64 = enabled_only
            .streams
            .iter()
            .filter(|s| s.stream != ValueStream::KnowledgeCompounding)
            .map(|s| s.annual_value)
            .sum();
        assert_eq!(
            enabled_only.value_of(ValueStream::KnowledgeCompounding),
            primary_sum * KNOWLEDGE_PREMIUM_RATE
        );

        // Disabling a primary stream shrinks the premium too.
        let disabled = BTreeSet::from([ValueStream::TimeSavings]);
        let partial = compute_stream_values(
            &f.org, &f.spend, &f.ops, &f.pain, &f.baseline, &f.assumptions, &disabled,
        );
        assert!(
            partial.value_of(ValueStream::KnowledgeCompounding)
                < enabled_only.value_of(ValueStream::KnowledgeCompounding)
        );
    }

    #[test]
    fn stream_entries_in_declaration_order() {
        let f = fixture();
        let values = compute_stream_values(
            &f.org,
            &f.spend,
            &f.ops,
            &f.pain,
            &f.baseline,
            &f.assumptions,
            &BTreeSet::new(),
        );
        let order: Vec<ValueStream> = values.streams.iter().map(|s| s.stream).collect();
        assert_eq!(order, ValueStream::ALL.to_vec());
    }

    proptest! {
        #[test]
        fn total_matches_enabled_sum_for_any_gate_combination(mask in 0u8..64) {
            let f = fixture();
            let disabled: BTreeSet<ValueStream> = ValueStream::ALL
                .into_iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, s)| s)
                .collect();
            let values = compute_stream_values(
                &f.org, &f.spend, &f.ops, &f.pain, &f.baseline, &f.assumptions, &disabled,
            );
            let sum: f64 = values.streams.iter().map(|s| s.annual_value).sum();
            prop_assert_eq!(values.total_annual_value, sum);
            for s in &values.streams {
                if disabled.contains(&s.stream) {
                    prop_assert_eq!(s.annual_value, 0.0);
                    prop_assert!(!s.enabled);
                }
            }
        }

        #[test]
        fn stream_values_non_negative_for_in_range_knobs(
            automatable in 0.0f64..100.0,
            rework in 0.0f64..100.0,
            cycle in 0.0f64..100.0,
            recovery in 0.0f64..100.0,
            consolidation in 0.0f64..100.0,
            roas in 0.0f64..200.0,
        ) {
            let f = fixture();
            let assumptions = ImprovementAssumptions {
                automatable_time_pct: automatable,
                rework_reduction_pct: rework,
                cycle_reduction_pct: cycle,
                utilization_recovery_pct: recovery,
                consolidation_pct: consolidation,
                roas_lift_pct: roas,
            };
            let values = compute_stream_values(
                &f.org, &f.spend, &f.ops, &f.pain, &f.baseline, &assumptions, &BTreeSet::new(),
            );
            for s in &values.streams {
                prop_assert!(s.annual_value >= 0.0, "{:?} negative", s.stream);
            }
        }
    }
}

//! # meridian-engine — deterministic ROI calculation pipeline.
//!
//! A linear pipeline of pure stages, each consuming immutable input records
//! and producing a fresh output record:
//!
//! - **Baseline**: current-state annual operating cost breakdown.
//! - **Value streams**: annual recoverable value per improvement category,
//!   each independently toggleable.
//! - **Ramp/timeline**: piecewise-linear adoption curve spread over a
//!   36-month horizon with three parallel scenario series.
//! - **Financial summary**: ROI, payback month, NPV, and IRR.
//! - **Scenario adjuster**: illustrative workflow and time-allocation
//!   comparisons.
//!
//! Every invocation is independent and reproducible from its inputs; there
//! is no engine-held state, so concurrent calls need no synchronization.
//! Undefined numeric results surface as non-finite `f64` sentinels, never
//! as errors.

pub mod baseline;
pub mod ramp;
pub mod scenario;
pub mod streams;
pub mod summary;

use std::collections::BTreeSet;

use tracing::debug;

use meridian_core::types::{
    BaselineOutputs, ImprovementAssumptions, OpsProfile, OrganizationProfile, PainProfile,
    RoiOutputs, SpendProfile, TransformationInvestment, ValueStream,
};

pub use baseline::compute_baseline;
pub use ramp::{break_even_month, build_timeline, ramp_factor};
pub use streams::compute_stream_values;
pub use summary::{internal_rate_of_return_pct, net_present_value, three_year_roi_pct};

/// Run the full ROI pipeline: baseline → value streams → timeline →
/// financial summary → scenario comparisons.
///
/// `disabled` streams contribute exactly zero to the total and the
/// projection; pass an empty set to enable everything.
#[allow(clippy::too_many_arguments)]
pub fn compute_roi(
    org: &OrganizationProfile,
    spend: &SpendProfile,
    ops: &OpsProfile,
    pain: &PainProfile,
    investment: &TransformationInvestment,
    assumptions: &ImprovementAssumptions,
    disabled: &BTreeSet<ValueStream>,
) -> RoiOutputs {
    let baseline = compute_baseline(org, spend, ops, pain);
    compute_roi_with_baseline(
        org, spend, ops, pain, &baseline, investment, assumptions, disabled,
    )
}

/// Same as [`compute_roi`], reusing an already-computed baseline so callers
/// recomputing on an input slice that leaves the baseline untouched can
/// skip the first stage.
#[allow(clippy::too_many_arguments)]
pub fn compute_roi_with_baseline(
    org: &OrganizationProfile,
    spend: &SpendProfile,
    ops: &OpsProfile,
    pain: &PainProfile,
    baseline: &BaselineOutputs,
    investment: &TransformationInvestment,
    assumptions: &ImprovementAssumptions,
    disabled: &BTreeSet<ValueStream>,
) -> RoiOutputs {
    let streams = compute_stream_values(org, spend, ops, pain, baseline, assumptions, disabled);
    let timeline = build_timeline(streams.total_annual_value, investment);
    let payback_month = break_even_month(&timeline);
    let three_year_roi_pct = three_year_roi_pct(&timeline, investment.total_amount);
    let net_present_value = net_present_value(&timeline, investment.total_amount);
    let irr_pct = internal_rate_of_return_pct(&timeline, investment.total_amount);

    debug!(
        total_annual_cost = baseline.total_annual_cost,
        total_annual_value = streams.total_annual_value,
        payback_month,
        roi_pct = three_year_roi_pct,
        npv = net_present_value,
        "roi: pipeline complete"
    );

    RoiOutputs {
        total_investment: investment.total_amount,
        streams,
        three_year_roi_pct,
        payback_month,
        net_present_value,
        irr_pct,
        timeline,
        workflows: scenario::workflow_comparisons(),
        allocation: scenario::allocation_shift(ops),
    }
}

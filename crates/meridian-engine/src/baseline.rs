//! Baseline cost calculator: current-state annual operating cost breakdown.
//!
//! Every segment is an independent product of a base quantity and a
//! percentage or fixed multiplier. No segment reads another segment.
//! Non-positive segments are excluded from the returned breakdown and
//! contribute nothing to the total, so the total is always the literal sum
//! of the retained segments.
//!
//! Out-of-range inputs are not rejected here: malformed values propagate
//! through the arithmetic as documented in the crate-level error model.

use meridian_core::constants::HOURS_PER_WORK_DAY;
use meridian_core::types::{
    BaselineOutputs, CostCategory, CostSegment, OpsProfile, OrganizationProfile, PainProfile,
    SpendProfile,
};

/// Derive the current-state annual operating cost breakdown.
///
/// Invariant: `total_annual_cost` equals the exact sum of the returned
/// segments for any input.
pub fn compute_baseline(
    org: &OrganizationProfile,
    spend: &SpendProfile,
    ops: &OpsProfile,
    pain: &PainProfile,
) -> BaselineOutputs {
    let team_cost = org.annual_team_cost();

    let candidates = [
        (
            CostCategory::AdminLoad,
            team_cost * ops.admin_time_pct / 100.0,
        ),
        (CostCategory::Rework, team_cost * pain.rework_rate_pct / 100.0),
        (
            CostCategory::ApprovalBottleneck,
            bottleneck_cost(org, ops, pain),
        ),
        (
            CostCategory::ToolUnderutilization,
            spend.annual_martech_spend * (100.0 - spend.tool_utilization_pct) / 100.0,
        ),
        (
            CostCategory::ToolOverlap,
            spend.annual_martech_spend * spend.overlapping_tools_pct / 100.0,
        ),
        (
            CostCategory::MediaWaste,
            spend.annual_media_spend * pain.media_waste_pct / 100.0,
        ),
    ];

    let segments: Vec<CostSegment> = candidates
        .into_iter()
        .filter(|(_, cost)| *cost > 0.0)
        .map(|(category, annual_cost)| CostSegment {
            category,
            annual_cost,
        })
        .collect();

    let total_annual_cost = segments.iter().map(|s| s.annual_cost).sum();

    BaselineOutputs {
        segments,
        total_annual_cost,
    }
}

/// Team time lost while deliverables wait on approval.
///
/// `campaigns/year × blocked days × hours/day × hourly rate × fraction of
/// team blocked`.
fn bottleneck_cost(org: &OrganizationProfile, ops: &OpsProfile, pain: &PainProfile) -> f64 {
    f64::from(ops.campaigns_per_year)
        * pain.approval_cycle_days
        * HOURS_PER_WORK_DAY
        * org.hourly_rate()
        * (pain.blocked_team_pct / 100.0)
}

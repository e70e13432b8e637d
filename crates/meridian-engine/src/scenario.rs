//! Scenario adjuster: illustrative before/after comparisons.
//!
//! Both tables here are narrative display artifacts — they never feed back
//! into the dollar figures. The workflow table samples the ramp at a
//! representative month; the allocation shift balances its last tier so
//! both mixes sum to exactly 100 for any input.

use meridian_core::constants::WORKFLOW_SAMPLE_MONTH;
use meridian_core::types::{AllocationShift, AllocationTiers, OpsProfile, WorkflowComparison};

use crate::ramp::ramp_factor;

/// Named workflows with today's cycle time in days and the maximum fraction
/// of that cycle the transformation can remove at full adoption.
const WORKFLOW_TABLE: [(&str, f64, f64); 4] = [
    ("Campaign brief to launch", 21.0, 0.45),
    ("Creative approval cycle", 5.0, 0.60),
    ("Performance reporting", 3.0, 0.70),
    ("Budget reallocation", 10.0, 0.50),
];

/// How much of each tier shifts in the projected steady state. The
/// autonomous tier absorbs whatever the others give up, via balancing.
const HUMAN_ONLY_RETAINED: f64 = 0.35;
const APPROVAL_GATED_RETAINED: f64 = 0.60;
const HUMAN_TO_SUPERVISED: f64 = 0.25;

/// Build the workflow before/after table.
///
/// Savings are the workflow's maximum reduction scaled by the ramp at the
/// representative month, so the table reflects realistic mid-horizon
/// adoption rather than the theoretical ceiling.
pub fn workflow_comparisons() -> Vec<WorkflowComparison> {
    let adoption = ramp_factor(f64::from(WORKFLOW_SAMPLE_MONTH));
    WORKFLOW_TABLE
        .iter()
        .map(|(name, before_days, max_reduction)| {
            let savings = max_reduction * adoption;
            WorkflowComparison {
                name: (*name).to_string(),
                before_days: *before_days,
                after_days: before_days * (1.0 - savings),
                savings_pct: savings * 100.0,
            }
        })
        .collect()
}

/// Build the four-tier time-allocation shift from the current mix.
///
/// Both sides are balanced so they sum to exactly 100: the autonomous tier
/// is always `100 − sum(others)`, never an independent formula — this holds
/// even when the input tier percentages are inconsistent.
pub fn allocation_shift(ops: &OpsProfile) -> AllocationShift {
    let current = AllocationTiers::balanced(
        ops.human_only_pct,
        ops.approval_gated_pct,
        ops.supervised_pct,
    );
    let future = AllocationTiers::balanced(
        current.human_only_pct * HUMAN_ONLY_RETAINED,
        current.approval_gated_pct * APPROVAL_GATED_RETAINED,
        current.supervised_pct + current.human_only_pct * HUMAN_TO_SUPERVISED,
    );
    AllocationShift { current, future }
}

//! Piecewise-linear adoption ramp and the month-indexed projection timeline.
//!
//! The ramp is evaluated from a four-phase table with linear interpolation
//! inside each phase. It is exactly 0 at month 0, exactly 1 from the horizon
//! onward, and continuous and non-decreasing at every phase boundary — the
//! end value of each phase is the start value of the next, so there is no
//! jump for any input.

use meridian_core::constants::{MATURITY_MULTIPLIERS, PROJECTION_MONTHS, WEEKS_PER_MONTH};
use meridian_core::types::{RampPhase, TimelinePoint, TransformationInvestment};

/// One phase of the adoption ramp: `[start_month, end_month)` with the ramp
/// rising linearly from `start_value` to `end_value`.
struct PhaseSegment {
    phase: RampPhase,
    start_month: f64,
    end_month: f64,
    start_value: f64,
    end_value: f64,
}

/// The four-phase ramp table. Each phase's `end_value` equals the next
/// phase's `start_value`; the continuity tests below pin this down.
const RAMP_TABLE: [PhaseSegment; 4] = [
    PhaseSegment {
        phase: RampPhase::Build,
        start_month: 0.0,
        end_month: 7.0,
        start_value: 0.0,
        end_value: 0.3,
    },
    PhaseSegment {
        phase: RampPhase::Supervised,
        start_month: 7.0,
        end_month: 12.0,
        start_value: 0.3,
        end_value: 0.7,
    },
    PhaseSegment {
        phase: RampPhase::Graduated,
        start_month: 12.0,
        end_month: 18.0,
        start_value: 0.7,
        end_value: 0.9,
    },
    PhaseSegment {
        phase: RampPhase::Maturity,
        start_month: 18.0,
        end_month: 36.0,
        start_value: 0.9,
        end_value: 1.0,
    },
];

/// Adoption ramp factor for a given month, in `[0, 1]`.
///
/// Exactly 0 for `month <= 0`, exactly 1 for `month >= PROJECTION_MONTHS`,
/// linear interpolation within each phase otherwise.
///
/// # Examples
///
/// ```
/// use meridian_engine::ramp::ramp_factor;
/// assert_eq!(ramp_factor(0.0), 0.0);
/// assert_eq!(ramp_factor(7.0), 0.3);
/// assert_eq!(ramp_factor(36.0), 1.0);
/// assert_eq!(ramp_factor(48.0), 1.0);
/// ```
pub fn ramp_factor(month: f64) -> f64 {
    if month <= 0.0 {
        return 0.0;
    }
    if month >= f64::from(PROJECTION_MONTHS) {
        return 1.0;
    }
    for seg in &RAMP_TABLE {
        if month < seg.end_month {
            let span = seg.end_month - seg.start_month;
            let frac = (month - seg.start_month) / span;
            return seg.start_value + (seg.end_value - seg.start_value) * frac;
        }
    }
    1.0
}

/// Which adoption phase a month index falls in (for timeline labels).
/// Boundary months belong to the phase they open.
pub fn phase_for(month: u32) -> RampPhase {
    let m = f64::from(month);
    for seg in &RAMP_TABLE {
        if m < seg.end_month {
            return seg.phase;
        }
    }
    RampPhase::Maturity
}

/// Year-over-year maturity bump applied on top of the ramp.
///
/// Months 1–12 are year one, 13–24 year two, 25+ year three; later months
/// saturate at the year-three multiplier.
pub fn maturity_multiplier(month: u32) -> f64 {
    if month == 0 {
        return MATURITY_MULTIPLIERS[0];
    }
    let year = ((month - 1) / 12) as usize;
    MATURITY_MULTIPLIERS[year.min(MATURITY_MULTIPLIERS.len() - 1)]
}

/// Number of months the investment burn is spread over.
///
/// `ceil(weeks / 4.33)`, floored at one month so a zero-week program still
/// books its full investment in month 1.
pub fn implementation_months(investment: &TransformationInvestment) -> u32 {
    let months = (f64::from(investment.implementation_weeks) / WEEKS_PER_MONTH).ceil();
    (months as u32).max(1)
}

/// Build the month-indexed projection timeline.
///
/// Month `m`'s realized value is `total_annual_value / 12 × ramp_factor(m)
/// × maturity_multiplier(m)`; the three scenario series are the cumulative
/// expected series scaled by the scenario multipliers, so they stay exactly
/// proportional at every month. Investment burns at a flat monthly rate over
/// the implementation window and is capped at the total thereafter.
pub fn build_timeline(
    total_annual_value: f64,
    investment: &TransformationInvestment,
) -> Vec<TimelinePoint> {
    let impl_months = implementation_months(investment);
    let monthly_burn = investment.total_amount / f64::from(impl_months);
    let monthly_base = total_annual_value / 12.0;

    let mut points = Vec::with_capacity(PROJECTION_MONTHS as usize + 1);
    let mut cumulative_expected = 0.0;

    for month in 0..=PROJECTION_MONTHS {
        if month > 0 {
            cumulative_expected +=
                monthly_base * ramp_factor(f64::from(month)) * maturity_multiplier(month);
        }
        let cumulative_investment = if month >= impl_months {
            investment.total_amount
        } else {
            monthly_burn * f64::from(month)
        };
        points.push(TimelinePoint {
            month,
            phase: phase_for(month),
            cumulative_investment,
            conservative: cumulative_expected * 0.6,
            expected: cumulative_expected,
            aggressive: cumulative_expected * 1.4,
        });
    }
    points
}

/// First month where cumulative expected value covers cumulative investment.
///
/// Month 0 is skipped (both series start at zero). Saturates to the final
/// month of the horizon when breakeven is never reached — a sentinel, not
/// an error.
pub fn break_even_month(timeline: &[TimelinePoint]) -> u32 {
    timeline
        .iter()
        .skip(1)
        .find(|p| p.expected >= p.cumulative_investment)
        .map_or(PROJECTION_MONTHS, |p| p.month)
}

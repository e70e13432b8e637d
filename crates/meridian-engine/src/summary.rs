//! Financial summary: ROI, NPV, and IRR over the projection timeline.
//!
//! All cash-flow math runs on the *incremental* expected series — month `m`'s
//! cash flow is `value(m) − value(m−1)` — with the total investment as the
//! period-zero outflow. Undefined results (zero investment, sign-change-free
//! cash flows) come back as `NaN`, never as an error.

use meridian_core::constants::{ANNUAL_DISCOUNT_RATE, IRR_EPSILON, IRR_MAX_ITERATIONS};
use meridian_core::types::TimelinePoint;

/// Three-year ROI percentage on the final cumulative expected value.
///
/// `((value − investment) / investment) × 100`; `NaN` when investment is
/// zero (the documented division-by-zero sentinel).
pub fn three_year_roi_pct(timeline: &[TimelinePoint], total_investment: f64) -> f64 {
    if total_investment == 0.0 {
        return f64::NAN;
    }
    let final_value = timeline.last().map_or(0.0, |p| p.expected);
    (final_value - total_investment) / total_investment * 100.0
}

/// Incremental expected cash flows, one per month `1..=horizon`.
fn incremental_flows(timeline: &[TimelinePoint]) -> Vec<f64> {
    timeline
        .windows(2)
        .map(|pair| pair[1].expected - pair[0].expected)
        .collect()
}

/// Net present value of the projection at the fixed annual discount rate.
///
/// `−investment + Σ inc(m) / (1 + rate/12)^m`. Reduces to exactly
/// `−investment` when every monthly value is zero, and to exactly `0` when
/// the investment is also zero.
pub fn net_present_value(timeline: &[TimelinePoint], total_investment: f64) -> f64 {
    let monthly_rate = ANNUAL_DISCOUNT_RATE / 12.0;
    let mut npv = -total_investment;
    for (i, flow) in incremental_flows(timeline).iter().enumerate() {
        let month = (i + 1) as f64;
        npv += flow / (1.0 + monthly_rate).powf(month);
    }
    npv
}

/// Annualized internal rate of return, as a percentage.
///
/// Finds the monthly rate `r` with `NPV(r) = 0` over
/// `[−investment, inc(1), …, inc(horizon)]` via Newton-Raphson, then
/// annualizes as `(1 + r)^12 − 1`. Returns `NaN` when the series never
/// changes sign (all outflow or all inflow — no root exists), when the
/// iteration leaves the valid domain (`r ≤ −1`), or when it fails to
/// converge.
pub fn internal_rate_of_return_pct(timeline: &[TimelinePoint], total_investment: f64) -> f64 {
    let mut flows = Vec::with_capacity(timeline.len());
    flows.push(-total_investment);
    flows.extend(incremental_flows(timeline));

    let has_outflow = flows.iter().any(|f| *f < 0.0);
    let has_inflow = flows.iter().any(|f| *f > 0.0);
    if !has_outflow || !has_inflow {
        return f64::NAN;
    }

    let mut rate: f64 = 0.01;
    for _ in 0..IRR_MAX_ITERATIONS {
        let (value, derivative) = npv_and_derivative(&flows, rate);
        if derivative == 0.0 || !derivative.is_finite() {
            return f64::NAN;
        }
        let next = rate - value / derivative;
        if next <= -1.0 || !next.is_finite() {
            return f64::NAN;
        }
        if (next - rate).abs() < IRR_EPSILON {
            return ((1.0 + next).powi(12) - 1.0) * 100.0;
        }
        rate = next;
    }
    f64::NAN
}

/// NPV of a cash-flow series at a monthly rate, with its derivative in the
/// rate — the Newton step numerator and denominator.
fn npv_and_derivative(flows: &[f64], rate: f64) -> (f64, f64) {
    let mut value = 0.0;
    let mut derivative = 0.0;
    for (month, flow) in flows.iter().enumerate() {
        let m = month as f64;
        let discount = (1.0 + rate).powf(m);
        value += flow / discount;
        if month > 0 {
            derivative -= m * flow / (1.0 + rate).powf(m + 1.0);
        }
    }
    (value, derivative)
}

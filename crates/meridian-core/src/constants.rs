//! Engine constants. All monetary values in dollars, all rates as fractions
//! unless the name says `_PCT`.

/// Working hours in a fully-loaded FTE year (52 weeks × 40 hours).
pub const HOURS_PER_WORK_YEAR: f64 = 2080.0;

/// Working hours per day used in cycle-time arithmetic.
pub const HOURS_PER_WORK_DAY: f64 = 8.0;

/// Average weeks per month, used to convert implementation weeks into the
/// monthly investment burn window.
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// Projection horizon in months. The ramp curve saturates at 1.0 here and
/// the breakeven sentinel saturates to this month when never reached.
pub const PROJECTION_MONTHS: u32 = 36;

/// Annual discount rate applied monthly in NPV computation.
pub const ANNUAL_DISCOUNT_RATE: f64 = 0.10;

/// Fraction of reclaimed automatable time that converts into realized value.
///
/// Reclaimed hours never convert 1:1 into productive output; this haircut
/// is applied on top of the `automatable_time_pct` assumption knob.
pub const AUTOMATION_RECOVERY_RATE: f64 = 0.6;

/// Discount applied to overlapping-tool spend when estimating consolidation
/// savings (only about half of overlap is realistically shed).
pub const TOOL_OVERLAP_DISCOUNT: f64 = 0.5;

/// The knowledge-compounding premium: a fixed fraction of the sum of all
/// other enabled value streams, computed last as a derived stream.
pub const KNOWLEDGE_PREMIUM_RATE: f64 = 0.05;

/// Year-over-year maturity multipliers for projection years 1, 2, and 3.
///
/// Applied to the monthly value in addition to the ramp factor, modeling
/// compounding organizational-learning value in later years.
pub const MATURITY_MULTIPLIERS: [f64; 3] = [1.0, 1.05, 1.10];

/// Maximum Newton-Raphson iterations for the IRR root search.
pub const IRR_MAX_ITERATIONS: u32 = 50;

/// Convergence tolerance on the monthly IRR rate.
pub const IRR_EPSILON: f64 = 1e-7;

/// Representative month used for the illustrative workflow before/after
/// table (late Graduated phase, ramp = 0.9).
pub const WORKFLOW_SAMPLE_MONTH: u32 = 18;

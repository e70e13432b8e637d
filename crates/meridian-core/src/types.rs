//! Input and output records for the ROI calculation pipeline.
//!
//! Every record here is a plain immutable value: the engine constructs
//! outputs fresh on each call and never mutates an input. Free-text fields
//! (`name`, `industry`) are labels only and never branch a calculation.

use serde::{Deserialize, Serialize};

use crate::constants::PROJECTION_MONTHS;

/// The organization being modeled: size, cost structure, and labels.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrganizationProfile {
    /// Display label only; never used in arithmetic.
    pub name: Option<String>,
    /// Display label only; never used in arithmetic.
    pub industry: Option<String>,
    /// Annual revenue in dollars.
    pub annual_revenue: f64,
    /// Total headcount of the modeled team.
    pub headcount: u32,
    /// Fully-loaded annual cost per head, in dollars.
    pub avg_loaded_fte_cost: f64,
    /// Marketing budget as a percentage of revenue, `[0, 100]`.
    pub marketing_budget_pct: f64,
}

impl Default for OrganizationProfile {
    fn default() -> Self {
        Self {
            name: None,
            industry: None,
            annual_revenue: 500_000_000.0,
            headcount: 80,
            avg_loaded_fte_cost: 160_000.0,
            marketing_budget_pct: 8.0,
        }
    }
}

impl OrganizationProfile {
    /// Total fully-loaded annual team cost.
    pub fn annual_team_cost(&self) -> f64 {
        f64::from(self.headcount) * self.avg_loaded_fte_cost
    }

    /// Blended hourly rate derived from the loaded FTE cost.
    pub fn hourly_rate(&self) -> f64 {
        self.avg_loaded_fte_cost / crate::constants::HOURS_PER_WORK_YEAR
    }

    /// Annual marketing budget in dollars.
    pub fn marketing_budget(&self) -> f64 {
        self.annual_revenue * self.marketing_budget_pct / 100.0
    }
}

/// Martech and media spend profile.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SpendProfile {
    /// Annual martech/tooling spend in dollars.
    pub annual_martech_spend: f64,
    /// Annual working-media spend in dollars.
    pub annual_media_spend: f64,
    /// Share of licensed tool capacity actually used, `[0, 100]`.
    pub tool_utilization_pct: f64,
    /// Share of tool spend with overlapping capability, `[0, 100]`.
    pub overlapping_tools_pct: f64,
}

impl Default for SpendProfile {
    fn default() -> Self {
        Self {
            annual_martech_spend: 3_000_000.0,
            annual_media_spend: 20_000_000.0,
            tool_utilization_pct: 45.0,
            overlapping_tools_pct: 30.0,
        }
    }
}

/// Operating cadence and the current time-allocation mix.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OpsProfile {
    /// Campaigns (or equivalent delivery units) shipped per year.
    pub campaigns_per_year: u32,
    /// Average end-to-end campaign cycle time in days.
    pub avg_campaign_cycle_days: f64,
    /// Share of team time spent on administrative work, `[0, 100]`.
    pub admin_time_pct: f64,
    /// Current share of work done entirely by humans, `[0, 100]`.
    pub human_only_pct: f64,
    /// Current share of work gated on human approval, `[0, 100]`.
    pub approval_gated_pct: f64,
    /// Current share of work done under human supervision, `[0, 100]`.
    pub supervised_pct: f64,
    /// Current share of fully autonomous work, `[0, 100]`.
    pub autonomous_pct: f64,
}

impl Default for OpsProfile {
    fn default() -> Self {
        Self {
            campaigns_per_year: 120,
            avg_campaign_cycle_days: 21.0,
            admin_time_pct: 30.0,
            human_only_pct: 55.0,
            approval_gated_pct: 30.0,
            supervised_pct: 12.0,
            autonomous_pct: 3.0,
        }
    }
}

/// Process pain points: the independent variables of the baseline formulas.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PainProfile {
    /// Share of delivered work that is reworked, `[0, 100]`.
    pub rework_rate_pct: f64,
    /// Days a typical deliverable waits on approval.
    pub approval_cycle_days: f64,
    /// Share of the team blocked while a deliverable waits, `[0, 100]`.
    pub blocked_team_pct: f64,
    /// Share of media spend wasted on mistargeting/overlap, `[0, 100]`.
    pub media_waste_pct: f64,
}

impl Default for PainProfile {
    fn default() -> Self {
        Self {
            rework_rate_pct: 18.0,
            approval_cycle_days: 5.0,
            blocked_team_pct: 25.0,
            media_waste_pct: 12.0,
        }
    }
}

/// The transformation program being evaluated.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TransformationInvestment {
    /// Total planned investment in dollars.
    pub total_amount: f64,
    /// Implementation duration in weeks; anchors the build-phase burn.
    pub implementation_weeks: u32,
}

impl Default for TransformationInvestment {
    fn default() -> Self {
        Self {
            total_amount: 5_000_000.0,
            implementation_weeks: 26,
        }
    }
}

/// Editable "lift" assumptions, one knob per value stream.
///
/// All knobs are percentages in `[0, 100]` except [`roas_lift_pct`], which is
/// multiplicative and may exceed 100.
///
/// [`roas_lift_pct`]: ImprovementAssumptions::roas_lift_pct
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ImprovementAssumptions {
    /// Share of team time sitting in automatable tiers.
    pub automatable_time_pct: f64,
    /// Fraction of baseline rework cost eliminated.
    pub rework_reduction_pct: f64,
    /// Fraction of the approval cycle removed per campaign.
    pub cycle_reduction_pct: f64,
    /// Fraction of the tool utilization gap recovered.
    pub utilization_recovery_pct: f64,
    /// Fraction of overlapping tool spend consolidated away.
    pub consolidation_pct: f64,
    /// Media efficiency (ROAS) lift. Multiplicative; may exceed 100.
    pub roas_lift_pct: f64,
}

impl Default for ImprovementAssumptions {
    fn default() -> Self {
        Self {
            automatable_time_pct: 40.0,
            rework_reduction_pct: 50.0,
            cycle_reduction_pct: 30.0,
            utilization_recovery_pct: 60.0,
            consolidation_pct: 20.0,
            roas_lift_pct: 8.0,
        }
    }
}

/// One independently toggleable category of annual financial benefit.
///
/// [`KnowledgeCompounding`](ValueStream::KnowledgeCompounding) is derived from
/// the other streams' already-computed values and is always computed last.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub enum ValueStream {
    /// Reclaimed automatable working hours.
    TimeSavings,
    /// Reduction of baseline rework cost.
    ReworkReduction,
    /// Faster campaign cycles (approval-day compression).
    CycleAcceleration,
    /// Tool utilization recovery plus consolidation of overlap.
    ToolingOptimization,
    /// Media efficiency / ROAS lift on working-media spend.
    MediaEfficiency,
    /// Derived compounding premium on the other enabled streams.
    KnowledgeCompounding,
}

impl ValueStream {
    /// All streams in computation order (the derived stream last).
    pub const ALL: [ValueStream; 6] = [
        ValueStream::TimeSavings,
        ValueStream::ReworkReduction,
        ValueStream::CycleAcceleration,
        ValueStream::ToolingOptimization,
        ValueStream::MediaEfficiency,
        ValueStream::KnowledgeCompounding,
    ];

    /// Human-readable stream label.
    ///
    /// # Examples
    ///
    /// ```
    /// use meridian_core::types::ValueStream;
    /// assert_eq!(ValueStream::TimeSavings.label(), "Time savings");
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            Self::TimeSavings => "Time savings",
            Self::ReworkReduction => "Rework reduction",
            Self::CycleAcceleration => "Cycle acceleration",
            Self::ToolingOptimization => "Tooling optimization",
            Self::MediaEfficiency => "Media efficiency",
            Self::KnowledgeCompounding => "Knowledge compounding",
        }
    }
}

/// Scenario stress multiplier, always passed explicitly — never ambient state.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Scenario {
    /// Haircut all value streams to 60%.
    Conservative,
    /// Value streams as modeled.
    #[default]
    Expected,
    /// Uplift all value streams to 140%.
    Aggressive,
}

impl Scenario {
    /// The uniform multiplier applied to every value stream.
    ///
    /// # Examples
    ///
    /// ```
    /// use meridian_core::types::Scenario;
    /// assert_eq!(Scenario::Conservative.multiplier(), 0.6);
    /// assert_eq!(Scenario::Expected.multiplier(), 1.0);
    /// assert_eq!(Scenario::Aggressive.multiplier(), 1.4);
    /// ```
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Conservative => 0.6,
            Self::Expected => 1.0,
            Self::Aggressive => 1.4,
        }
    }
}

/// Adoption phase of the ramp curve a given month falls in.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RampPhase {
    /// Months 0–7: implementation, ramp rises 0 → 0.3.
    Build,
    /// Months 7–12: supervised operation, ramp rises 0.3 → 0.7.
    Supervised,
    /// Months 12–18: graduated autonomy, ramp rises 0.7 → 0.9.
    Graduated,
    /// Months 18–36: steady-state maturity, ramp rises 0.9 → 1.0.
    Maturity,
}

impl RampPhase {
    /// Human-readable phase label for timeline display.
    ///
    /// # Examples
    ///
    /// ```
    /// use meridian_core::types::RampPhase;
    /// assert_eq!(RampPhase::Build.label(), "Build");
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            Self::Build => "Build",
            Self::Supervised => "Supervised",
            Self::Graduated => "Graduated",
            Self::Maturity => "Maturity",
        }
    }
}

/// Named baseline cost segment category.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CostCategory {
    /// Administrative time load on the team.
    AdminLoad,
    /// Cost of reworked deliverables.
    Rework,
    /// Team time lost waiting on approvals.
    ApprovalBottleneck,
    /// Licensed tool capacity paid for but unused.
    ToolUnderutilization,
    /// Overlapping tool spend.
    ToolOverlap,
    /// Wasted working-media spend.
    MediaWaste,
}

impl CostCategory {
    /// Human-readable segment label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AdminLoad => "Administrative load",
            Self::Rework => "Rework",
            Self::ApprovalBottleneck => "Approval bottleneck",
            Self::ToolUnderutilization => "Tool underutilization",
            Self::ToolOverlap => "Tool overlap",
            Self::MediaWaste => "Media waste",
        }
    }
}

/// One segment of the baseline cost breakdown. Always strictly positive;
/// non-positive segments are excluded from [`BaselineOutputs::segments`].
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct CostSegment {
    /// Which cost this segment represents.
    pub category: CostCategory,
    /// Annual cost of this segment in dollars.
    pub annual_cost: f64,
}

/// Derived current-state annual operating cost breakdown.
///
/// Invariant: `total_annual_cost` equals the literal sum of `segments`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct BaselineOutputs {
    /// Retained (strictly positive) cost segments.
    pub segments: Vec<CostSegment>,
    /// Sum of all retained segments.
    pub total_annual_cost: f64,
}

impl BaselineOutputs {
    /// Annual cost of a segment, or 0 if it was excluded from the breakdown.
    pub fn segment_cost(&self, category: CostCategory) -> f64 {
        self.segments
            .iter()
            .find(|s| s.category == category)
            .map_or(0.0, |s| s.annual_cost)
    }
}

/// Annual dollar value of one stream after gating. Disabled streams carry
/// exactly `0.0`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct StreamValue {
    /// Which stream this value belongs to.
    pub stream: ValueStream,
    /// Gated annual value in dollars.
    pub annual_value: f64,
    /// Whether the stream was enabled for this run.
    pub enabled: bool,
}

/// Per-stream annual values and their total.
///
/// Invariant: `total_annual_value` equals the sum of enabled stream values.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct StreamValues {
    /// One entry per stream, in [`ValueStream::ALL`] order.
    pub streams: Vec<StreamValue>,
    /// Sum of enabled stream values.
    pub total_annual_value: f64,
}

impl StreamValues {
    /// Gated annual value of a stream (0 when disabled or absent).
    pub fn value_of(&self, stream: ValueStream) -> f64 {
        self.streams
            .iter()
            .find(|s| s.stream == stream)
            .map_or(0.0, |s| s.annual_value)
    }
}

/// One month of the projection timeline.
///
/// Invariant: every cumulative series is monotonically non-decreasing
/// in `month`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct TimelinePoint {
    /// Month index, `0..=PROJECTION_MONTHS`.
    pub month: u32,
    /// Adoption phase this month falls in.
    pub phase: RampPhase,
    /// Cumulative invested dollars through this month.
    pub cumulative_investment: f64,
    /// Cumulative realized value under the conservative multiplier.
    pub conservative: f64,
    /// Cumulative realized value under the expected multiplier.
    pub expected: f64,
    /// Cumulative realized value under the aggressive multiplier.
    pub aggressive: f64,
}

impl TimelinePoint {
    /// Cumulative value series for a scenario.
    pub fn cumulative_value(&self, scenario: Scenario) -> f64 {
        match scenario {
            Scenario::Conservative => self.conservative,
            Scenario::Expected => self.expected,
            Scenario::Aggressive => self.aggressive,
        }
    }
}

/// Illustrative before/after cycle-time comparison for one named workflow.
/// Narrative display only; never feeds back into the dollar figures.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WorkflowComparison {
    /// Workflow name.
    pub name: String,
    /// Cycle time today, in days.
    pub before_days: f64,
    /// Projected cycle time at the representative ramp month, in days.
    pub after_days: f64,
    /// Percentage saved, derived from before/after.
    pub savings_pct: f64,
}

/// Four-tier time-allocation mix. Tiers always sum to exactly 100: the
/// autonomous tier is computed as `100 − sum(others)`, never independently.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct AllocationTiers {
    /// Work done entirely by humans.
    pub human_only_pct: f64,
    /// Work gated on human approval.
    pub approval_gated_pct: f64,
    /// Work done under human supervision.
    pub supervised_pct: f64,
    /// Fully autonomous work (the balancing tier).
    pub autonomous_pct: f64,
}

impl AllocationTiers {
    /// Build a tier mix that sums to exactly 100 by balancing the
    /// autonomous tier against the other three.
    ///
    /// The subtraction runs against the same left-associated partial sum
    /// that [`AllocationTiers::total`] rebuilds, so the sum-to-100
    /// identity holds bit-exactly rather than approximately.
    pub fn balanced(human_only_pct: f64, approval_gated_pct: f64, supervised_pct: f64) -> Self {
        let others = human_only_pct + approval_gated_pct + supervised_pct;
        Self {
            human_only_pct,
            approval_gated_pct,
            supervised_pct,
            autonomous_pct: 100.0 - others,
        }
    }

    /// Sum of all four tiers. Exactly 100 for any mix built via
    /// [`AllocationTiers::balanced`].
    pub fn total(&self) -> f64 {
        (self.human_only_pct + self.approval_gated_pct + self.supervised_pct)
            + self.autonomous_pct
    }
}

/// Before/after time-allocation shift.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct AllocationShift {
    /// Current mix, balanced to 100.
    pub current: AllocationTiers,
    /// Projected steady-state mix, balanced to 100.
    pub future: AllocationTiers,
}

/// Terminal output of the ROI pipeline.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RoiOutputs {
    /// Total planned investment in dollars.
    pub total_investment: f64,
    /// Per-stream annual values and their total.
    pub streams: StreamValues,
    /// Three-year ROI percentage. `NaN` when investment is zero.
    pub three_year_roi_pct: f64,
    /// First month cumulative expected value covers cumulative investment.
    /// Saturates to [`PROJECTION_MONTHS`] when never reached in the horizon.
    pub payback_month: u32,
    /// Net present value in dollars (signed).
    pub net_present_value: f64,
    /// Annualized IRR percentage. `NaN` when the cash-flow series never
    /// changes sign (all outflow or all inflow).
    pub irr_pct: f64,
    /// Month-indexed projection, `0..=PROJECTION_MONTHS`.
    pub timeline: Vec<TimelinePoint>,
    /// Illustrative workflow before/after table.
    pub workflows: Vec<WorkflowComparison>,
    /// Illustrative time-allocation shift.
    pub allocation: AllocationShift,
}

impl RoiOutputs {
    /// Whether cumulative expected value covered cumulative investment
    /// within the projection horizon. A saturated [`payback_month`] equal to
    /// the horizon can still be a genuine breakeven at the final month, so
    /// the last timeline point is consulted rather than the sentinel alone.
    ///
    /// [`payback_month`]: RoiOutputs::payback_month
    pub fn break_even_reached(&self) -> bool {
        self.payback_month < PROJECTION_MONTHS
            || self
                .timeline
                .last()
                .is_some_and(|p| p.expected >= p.cumulative_investment)
    }
}

//! Shared fixtures for E2E and property tests.

use meridian_core::types::{
    ImprovementAssumptions, OpsProfile, OrganizationProfile, PainProfile, SpendProfile,
    TransformationInvestment,
};

/// The enterprise reference profile: $2B revenue, 7.7% marketing budget,
/// 200-person team at $180K loaded cost.
pub fn enterprise_org() -> OrganizationProfile {
    OrganizationProfile {
        name: Some("Reference enterprise".into()),
        industry: Some("Consumer goods".into()),
        annual_revenue: 2_000_000_000.0,
        headcount: 200,
        avg_loaded_fte_cost: 180_000.0,
        marketing_budget_pct: 7.7,
    }
}

/// A $20M transformation program over 28 implementation weeks.
pub fn reference_investment() -> TransformationInvestment {
    TransformationInvestment {
        total_amount: 20_000_000.0,
        implementation_weeks: 28,
    }
}

/// Default pain/spend/ops/assumption constants for the reference scenario.
pub fn reference_context() -> (SpendProfile, OpsProfile, PainProfile, ImprovementAssumptions) {
    (
        SpendProfile::default(),
        OpsProfile::default(),
        PainProfile::default(),
        ImprovementAssumptions::default(),
    )
}

//! Share-link codec for the engine's input records.
//!
//! The presentation layer encodes the full input bundle into a URL-safe
//! string (base58 over canonical JSON) so projections can be shared as
//! links. The round trip is lossless: decoding an encoded bundle yields a
//! record equal to the original, so re-running the engine reproduces the
//! projection exactly.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::ShareError;
use crate::types::{
    ImprovementAssumptions, OpsProfile, OrganizationProfile, PainProfile, SpendProfile,
    TransformationInvestment, ValueStream,
};

/// The complete input bundle for one engine invocation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct RoiInputs {
    pub org: OrganizationProfile,
    pub spend: SpendProfile,
    pub ops: OpsProfile,
    pub pain: PainProfile,
    pub investment: TransformationInvestment,
    pub assumptions: ImprovementAssumptions,
    /// Streams excluded from the total. Empty means all streams enabled.
    pub disabled: BTreeSet<ValueStream>,
}

/// Encode an input bundle as a URL-safe share string.
pub fn encode_share_link(inputs: &RoiInputs) -> Result<String, ShareError> {
    let json = serde_json::to_vec(inputs).map_err(|e| ShareError::Serialization(e.to_string()))?;
    Ok(bs58::encode(json).into_string())
}

/// Decode a share string back into the input bundle it was built from.
pub fn decode_share_link(link: &str) -> Result<RoiInputs, ShareError> {
    let json = bs58::decode(link)
        .into_vec()
        .map_err(|e| ShareError::InvalidEncoding(e.to_string()))?;
    serde_json::from_slice(&json).map_err(|e| ShareError::MalformedPayload(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn round_trip_default_inputs() {
        let inputs = RoiInputs::default();
        let link = encode_share_link(&inputs).unwrap();
        let decoded = decode_share_link(&link).unwrap();
        assert_eq!(decoded, inputs);
    }

    #[test]
    fn round_trip_preserves_disabled_set() {
        let inputs = RoiInputs {
            disabled: BTreeSet::from([
                ValueStream::MediaEfficiency,
                ValueStream::KnowledgeCompounding,
            ]),
            ..Default::default()
        };
        let decoded = decode_share_link(&encode_share_link(&inputs).unwrap()).unwrap();
        assert_eq!(decoded.disabled, inputs.disabled);
    }

    #[test]
    fn round_trip_preserves_labels() {
        let inputs = RoiInputs {
            org: OrganizationProfile {
                name: Some("Acme Global".into()),
                industry: Some("CPG".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let decoded = decode_share_link(&encode_share_link(&inputs).unwrap()).unwrap();
        assert_eq!(decoded.org.name.as_deref(), Some("Acme Global"));
        assert_eq!(decoded.org.industry.as_deref(), Some("CPG"));
    }

    #[test]
    fn decode_rejects_non_base58() {
        let err = decode_share_link("not base58 0OIl").unwrap_err();
        assert!(matches!(err, ShareError::InvalidEncoding(_)));
    }

    #[test]
    fn decode_rejects_wrong_payload() {
        // Valid base58, but the JSON inside is not a RoiInputs record.
        let link = bs58::encode(b"{\"bogus\":true}").into_string();
        let err = decode_share_link(&link).unwrap_err();
        assert!(matches!(err, ShareError::MalformedPayload(_)));
    }

    proptest! {
        #[test]
        fn round_trip_arbitrary_finite_inputs(
            revenue in 0.0f64..1e12,
            headcount in 0u32..100_000,
            fte_cost in 0.0f64..2e6,
            budget_pct in 0.0f64..100.0,
            weeks in 1u32..520,
            amount in 0.0f64..1e10,
        ) {
            let inputs = RoiInputs {
                org: OrganizationProfile {
                    annual_revenue: revenue,
                    headcount,
                    avg_loaded_fte_cost: fte_cost,
                    marketing_budget_pct: budget_pct,
                    ..Default::default()
                },
                investment: TransformationInvestment {
                    total_amount: amount,
                    implementation_weeks: weeks,
                },
                ..Default::default()
            };
            let decoded = decode_share_link(&encode_share_link(&inputs).unwrap()).unwrap();
            prop_assert_eq!(decoded, inputs);
        }
    }
}

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::domain::{ClaimType, ZipCode};

const KING_COUNTY_ZIP_CODES: &[&str] = &[
    "98001", "98002", "98003", "98004", "98005", "98006", "98007", "98008", "98009", "98010",
    "98011", "98013", "98014", "98015", "98019", "98022", "98023", "98024", "98025", "98027",
    "98028", "98029", "98030", "98031", "98032", "98033", "98034", "98035", "98038", "98039",
    "98040", "98041", "98042", "98045", "98047", "98050", "98051", "98052", "98053", "98054",
    "98055", "98056", "98057", "98058", "98059", "98062", "98063", "98064", "98065", "98070",
    "98071", "98072", "98073", "98074", "98075", "98077", "98083", "98089", "98092", "98093",
    "98101", "98102", "98103", "98104", "98105", "98106", "98107", "98108", "98109", "98111",
    "98112", "98113", "98114", "98115", "98116", "98117", "98118", "98119", "98121", "98122",
    "98124", "98125", "98126", "98127", "98129", "98131", "98132", "98133", "98134", "98136",
    "98138", "98139", "98141", "98144", "98145", "98146", "98148", "98151", "98154", "98155",
    "98158", "98160", "98161", "98164", "98165", "98166", "98168", "98170", "98171", "98174",
    "98175", "98177", "98178", "98181", "98184", "98185", "98188", "98190", "98191", "98194",
    "98195", "98198", "98199", "98224", "98251", "98288", "98354",
];

/// Reference data for the court a claim is evaluated against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JurisdictionConfig {
    pub name: String,
    pub accepted_zip_codes: BTreeSet<ZipCode>,
    pub max_claim_cents: u64,
    pub party_claim_ceiling_cents: u64,
    pub lookback_years: u32,
    pub accepted_claim_types: BTreeSet<ClaimType>,
    #[serde(default = "default_minimum_filer_age")]
    pub minimum_filer_age: u16,
    #[serde(default = "default_annual_claim_cap")]
    pub annual_claim_cap: u32,
    #[serde(default = "default_defendant_claim_window_months")]
    pub defendant_claim_window_months: u32,
}

fn default_minimum_filer_age() -> u16 {
    18
}

fn default_annual_claim_cap() -> u32 {
    12
}

fn default_defendant_claim_window_months() -> u32 {
    12
}

/// Reasons a jurisdiction dataset is rejected at load time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JurisdictionError {
    #[error("jurisdiction must accept at least one ZIP code")]
    NoZipCodes,
    #[error("jurisdiction must accept at least one claim type")]
    NoClaimTypes,
    #[error("'Other' cannot be an accepted claim type")]
    OtherClaimTypeAccepted,
    #[error("lookback window must be at least one year")]
    ZeroLookback,
    #[error("party ceiling ({party} cents) exceeds the maximum claim ({max} cents)")]
    PartyCeilingAboveMaximum { party: u64, max: u64 },
}

impl JurisdictionConfig {
    /// King County District Court small-claims rules.
    pub fn king_county() -> Self {
        let accepted_zip_codes = KING_COUNTY_ZIP_CODES
            .iter()
            .filter_map(|code| ZipCode::parse(code))
            .collect();
        let accepted_claim_types = ClaimType::ALL
            .into_iter()
            .filter(|claim_type| *claim_type != ClaimType::Other)
            .collect();

        Self {
            name: "King County".to_string(),
            accepted_zip_codes,
            max_claim_cents: 1_000_000,
            party_claim_ceiling_cents: 500_000,
            lookback_years: 6,
            accepted_claim_types,
            minimum_filer_age: default_minimum_filer_age(),
            annual_claim_cap: default_annual_claim_cap(),
            defendant_claim_window_months: default_defendant_claim_window_months(),
        }
    }

    pub fn validate(&self) -> Result<(), JurisdictionError> {
        if self.accepted_zip_codes.is_empty() {
            return Err(JurisdictionError::NoZipCodes);
        }
        if self.accepted_claim_types.is_empty() {
            return Err(JurisdictionError::NoClaimTypes);
        }
        if self.accepted_claim_types.contains(&ClaimType::Other) {
            return Err(JurisdictionError::OtherClaimTypeAccepted);
        }
        if self.lookback_years == 0 {
            return Err(JurisdictionError::ZeroLookback);
        }
        if self.party_claim_ceiling_cents > self.max_claim_cents {
            return Err(JurisdictionError::PartyCeilingAboveMaximum {
                party: self.party_claim_ceiling_cents,
                max: self.max_claim_cents,
            });
        }
        Ok(())
    }

    pub fn accepts_zip(&self, zip: &ZipCode) -> bool {
        self.accepted_zip_codes.contains(zip)
    }

    pub fn accepts_claim_type(&self, claim_type: ClaimType) -> bool {
        claim_type != ClaimType::Other && self.accepted_claim_types.contains(&claim_type)
    }

    pub fn summary_view(&self) -> JurisdictionView {
        JurisdictionView {
            name: self.name.clone(),
            max_claim_cents: self.max_claim_cents,
            party_claim_ceiling_cents: self.party_claim_ceiling_cents,
            lookback_years: self.lookback_years,
            accepted_claim_types: self
                .accepted_claim_types
                .iter()
                .map(|claim_type| claim_type.label())
                .collect(),
            accepted_zip_code_count: self.accepted_zip_codes.len(),
        }
    }
}

impl Default for JurisdictionConfig {
    fn default() -> Self {
        Self::king_county()
    }
}

/// Public description of the active jurisdiction so a form can render its choices.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JurisdictionView {
    pub name: String,
    pub max_claim_cents: u64,
    pub party_claim_ceiling_cents: u64,
    pub lookback_years: u32,
    pub accepted_claim_types: Vec<&'static str>,
    pub accepted_zip_code_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn king_county_defaults_validate() {
        let config = JurisdictionConfig::king_county();
        assert!(config.validate().is_ok());
        assert_eq!(config.accepted_zip_codes.len(), KING_COUNTY_ZIP_CODES.len());
        assert_eq!(config.accepted_claim_types.len(), ClaimType::ALL.len() - 1);
        assert!(!config.accepts_claim_type(ClaimType::Other));
        assert!(config.accepts_zip(&ZipCode::parse("98101").expect("zip")));
        assert!(!config.accepts_zip(&ZipCode::parse("90210").expect("zip")));
    }

    #[test]
    fn decodes_from_json_with_default_message_parameters() {
        let config: JurisdictionConfig = serde_json::from_value(json!({
            "name": "Pierce County",
            "acceptedZipCodes": ["98402", "98403"],
            "maxClaimCents": 1_000_000,
            "partyClaimCeilingCents": 500_000,
            "lookbackYears": 3,
            "acceptedClaimTypes": ["Rent", "Wages"]
        }))
        .expect("config decodes");

        assert_eq!(config.minimum_filer_age, 18);
        assert_eq!(config.annual_claim_cap, 12);
        assert!(config.accepts_claim_type(ClaimType::Rent));
        assert!(!config.accepts_claim_type(ClaimType::Loan));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_malformed_zip_codes_in_reference_data() {
        let result = serde_json::from_value::<JurisdictionConfig>(json!({
            "name": "Nowhere",
            "acceptedZipCodes": ["9840"],
            "maxClaimCents": 100,
            "partyClaimCeilingCents": 50,
            "lookbackYears": 1,
            "acceptedClaimTypes": ["Rent"]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn validation_flags_inconsistent_reference_data() {
        let mut config = JurisdictionConfig::king_county();
        config.accepted_claim_types.insert(ClaimType::Other);
        assert_eq!(
            config.validate(),
            Err(JurisdictionError::OtherClaimTypeAccepted)
        );

        let mut config = JurisdictionConfig::king_county();
        config.party_claim_ceiling_cents = config.max_claim_cents + 1;
        assert!(matches!(
            config.validate(),
            Err(JurisdictionError::PartyCeilingAboveMaximum { .. })
        ));

        let mut config = JurisdictionConfig::king_county();
        config.lookback_years = 0;
        assert_eq!(config.validate(), Err(JurisdictionError::ZeroLookback));

        let mut config = JurisdictionConfig::king_county();
        config.accepted_zip_codes.clear();
        assert_eq!(config.validate(), Err(JurisdictionError::NoZipCodes));

        let mut config = JurisdictionConfig::king_county();
        config.accepted_claim_types.clear();
        assert_eq!(config.validate(), Err(JurisdictionError::NoClaimTypes));
    }

    #[test]
    fn summary_view_lists_claim_type_labels() {
        let view = JurisdictionConfig::king_county().summary_view();
        assert_eq!(view.name, "King County");
        assert!(view.accepted_claim_types.contains(&"Breach of Contract"));
        assert!(!view.accepted_claim_types.contains(&"Other"));
    }
}

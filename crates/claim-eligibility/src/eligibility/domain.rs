use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Dispute categories recognized by the small-claims intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ClaimType {
    #[serde(rename = "Property Damage", alias = "PropertyDamage")]
    PropertyDamage,
    #[serde(rename = "Personal Injury", alias = "PersonalInjury")]
    PersonalInjury,
    #[serde(rename = "Breach of Contract", alias = "BreachOfContract")]
    BreachOfContract,
    #[serde(rename = "Lease Agreement", alias = "LeaseAgreement")]
    LeaseAgreement,
    Wages,
    Loan,
    Rent,
    #[serde(rename = "Goods and Services", alias = "GoodsAndServices")]
    GoodsAndServices,
    #[serde(rename = "Automobile Accident", alias = "AutomobileAccident")]
    AutomobileAccident,
    #[serde(rename = "Damage Deposit", alias = "DamageDeposit")]
    DamageDeposit,
    #[serde(rename = "Open Account", alias = "OpenAccount")]
    OpenAccount,
    #[serde(rename = "Service Rendered", alias = "ServiceRendered")]
    ServiceRendered,
    #[serde(rename = "Written Instrument", alias = "WrittenInstrument")]
    WrittenInstrument,
    Other,
}

impl ClaimType {
    pub const ALL: [ClaimType; 14] = [
        ClaimType::PropertyDamage,
        ClaimType::PersonalInjury,
        ClaimType::BreachOfContract,
        ClaimType::LeaseAgreement,
        ClaimType::Wages,
        ClaimType::Loan,
        ClaimType::Rent,
        ClaimType::GoodsAndServices,
        ClaimType::AutomobileAccident,
        ClaimType::DamageDeposit,
        ClaimType::OpenAccount,
        ClaimType::ServiceRendered,
        ClaimType::WrittenInstrument,
        ClaimType::Other,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ClaimType::PropertyDamage => "Property Damage",
            ClaimType::PersonalInjury => "Personal Injury",
            ClaimType::BreachOfContract => "Breach of Contract",
            ClaimType::LeaseAgreement => "Lease Agreement",
            ClaimType::Wages => "Wages",
            ClaimType::Loan => "Loan",
            ClaimType::Rent => "Rent",
            ClaimType::GoodsAndServices => "Goods and Services",
            ClaimType::AutomobileAccident => "Automobile Accident",
            ClaimType::DamageDeposit => "Damage Deposit",
            ClaimType::OpenAccount => "Open Account",
            ClaimType::ServiceRendered => "Service Rendered",
            ClaimType::WrittenInstrument => "Written Instrument",
            ClaimType::Other => "Other",
        }
    }
}

/// Whether a party to the dispute is a person or a business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyType {
    #[serde(alias = "Individual")]
    Individual,
    #[serde(alias = "Company")]
    Company,
}

/// Five digit US postal code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ZipCode(String);

impl ZipCode {
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.len() == 5 && trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
            Some(Self(trimmed.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ZipCode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ZipCode::parse(&value).ok_or_else(|| format!("'{value}' is not a five digit ZIP code"))
    }
}

impl From<ZipCode> for String {
    fn from(value: ZipCode) -> Self {
        value.0
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Answers exactly as the filer submitted them, before ZIP and date validation.
///
/// Every answer except `incident_date` is required; decoding a payload that omits one fails
/// instead of assuming a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimSubmission {
    pub filer_age: u16,
    pub has_guardian: bool,
    pub claim_amount_cents: u64,
    pub claim_type: ClaimType,
    pub defendant_type: PartyType,
    pub plaintiff_type: PartyType,
    pub filing_zip_code: String,
    #[serde(default)]
    pub incident_date: Option<String>,
    pub settlement_attempted: bool,
    pub can_pay_filing_fee: bool,
    pub self_represented: bool,
    pub has_defendant_contact_info: bool,
    pub defendant_not_in_bankruptcy: bool,
    pub is_first_claim_against_defendant: bool,
    pub has_fewer_than_annual_claim_cap: bool,
    pub understands_mandatory_court_attendance: bool,
}

/// Validated answers for one filer; only obtainable through intake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimRecord {
    pub(crate) filer_age: u16,
    pub(crate) has_guardian: bool,
    pub(crate) claim_amount_cents: u64,
    pub(crate) claim_type: ClaimType,
    pub(crate) defendant_type: PartyType,
    pub(crate) plaintiff_type: PartyType,
    pub(crate) filing_zip_code: ZipCode,
    pub(crate) incident_date: Option<NaiveDate>,
    pub(crate) settlement_attempted: bool,
    pub(crate) can_pay_filing_fee: bool,
    pub(crate) self_represented: bool,
    pub(crate) has_defendant_contact_info: bool,
    pub(crate) defendant_not_in_bankruptcy: bool,
    pub(crate) is_first_claim_against_defendant: bool,
    pub(crate) has_fewer_than_annual_claim_cap: bool,
    pub(crate) understands_mandatory_court_attendance: bool,
}

impl ClaimRecord {
    pub fn filer_age(&self) -> u16 {
        self.filer_age
    }

    pub fn has_guardian(&self) -> bool {
        self.has_guardian
    }

    pub fn claim_amount_cents(&self) -> u64 {
        self.claim_amount_cents
    }

    pub fn claim_type(&self) -> ClaimType {
        self.claim_type
    }

    pub fn defendant_type(&self) -> PartyType {
        self.defendant_type
    }

    pub fn plaintiff_type(&self) -> PartyType {
        self.plaintiff_type
    }

    pub fn filing_zip_code(&self) -> &ZipCode {
        &self.filing_zip_code
    }

    pub fn incident_date(&self) -> Option<NaiveDate> {
        self.incident_date
    }

    pub fn settlement_attempted(&self) -> bool {
        self.settlement_attempted
    }

    pub fn can_pay_filing_fee(&self) -> bool {
        self.can_pay_filing_fee
    }

    pub fn self_represented(&self) -> bool {
        self.self_represented
    }

    pub fn has_defendant_contact_info(&self) -> bool {
        self.has_defendant_contact_info
    }

    pub fn defendant_not_in_bankruptcy(&self) -> bool {
        self.defendant_not_in_bankruptcy
    }

    pub fn is_first_claim_against_defendant(&self) -> bool {
        self.is_first_claim_against_defendant
    }

    pub fn has_fewer_than_annual_claim_cap(&self) -> bool {
        self.has_fewer_than_annual_claim_cap
    }

    pub fn understands_mandatory_court_attendance(&self) -> bool {
        self.understands_mandatory_court_attendance
    }
}

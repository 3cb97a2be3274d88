use chrono::{DateTime, NaiveDate};
use serde_json::Value;

use super::domain::{ClaimRecord, ClaimSubmission, ZipCode};

/// Raised when a payload cannot be turned into a [`ClaimRecord`].
///
/// This is never used to signal an ineligible claim; that outcome is a normal verdict.
#[derive(Debug, thiserror::Error)]
pub enum MalformedInputError {
    #[error("claim payload could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("filingZipCode must be exactly five digits (found {0:?})")]
    InvalidZipCode(String),
    #[error("{field} must be an ISO-8601 date (found {value:?})")]
    InvalidDate { field: &'static str, value: String },
}

impl ClaimRecord {
    pub fn from_json(input: &str) -> Result<Self, MalformedInputError> {
        let submission: ClaimSubmission = serde_json::from_str(input)?;
        Self::try_from(submission)
    }

    pub fn from_slice(input: &[u8]) -> Result<Self, MalformedInputError> {
        let submission: ClaimSubmission = serde_json::from_slice(input)?;
        Self::try_from(submission)
    }

    pub fn from_value(input: Value) -> Result<Self, MalformedInputError> {
        let submission: ClaimSubmission = serde_json::from_value(input)?;
        Self::try_from(submission)
    }
}

impl TryFrom<ClaimSubmission> for ClaimRecord {
    type Error = MalformedInputError;

    fn try_from(submission: ClaimSubmission) -> Result<Self, Self::Error> {
        let filing_zip_code = ZipCode::parse(&submission.filing_zip_code)
            .ok_or_else(|| MalformedInputError::InvalidZipCode(submission.filing_zip_code.clone()))?;

        let incident_date = match submission.incident_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_iso_date(raw).ok_or_else(|| {
                MalformedInputError::InvalidDate {
                    field: "incidentDate",
                    value: raw.to_string(),
                }
            })?),
        };

        Ok(ClaimRecord {
            filer_age: submission.filer_age,
            has_guardian: submission.has_guardian,
            claim_amount_cents: submission.claim_amount_cents,
            claim_type: submission.claim_type,
            defendant_type: submission.defendant_type,
            plaintiff_type: submission.plaintiff_type,
            filing_zip_code,
            incident_date,
            settlement_attempted: submission.settlement_attempted,
            can_pay_filing_fee: submission.can_pay_filing_fee,
            self_represented: submission.self_represented,
            has_defendant_contact_info: submission.has_defendant_contact_info,
            defendant_not_in_bankruptcy: submission.defendant_not_in_bankruptcy,
            is_first_claim_against_defendant: submission.is_first_claim_against_defendant,
            has_fewer_than_annual_claim_cap: submission.has_fewer_than_annual_claim_cap,
            understands_mandatory_court_attendance: submission
                .understands_mandatory_court_attendance,
        })
    }
}

/// Accepts a plain calendar date or a full RFC 3339 timestamp (browsers serialize `Date` that
/// way); timestamps resolve to the calendar date in their own offset.
pub(crate) fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|timestamp| timestamp.date_naive())
}

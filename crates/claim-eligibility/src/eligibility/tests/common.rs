use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::eligibility::domain::{ClaimRecord, ClaimSubmission, ClaimType, PartyType};
use crate::eligibility::evaluation::EligibilityEngine;
use crate::eligibility::jurisdiction::JurisdictionConfig;
use crate::eligibility::router::eligibility_router;

pub(super) const AGE_MESSAGE: &str =
    "The claimant must be at least 18 years old or have a guardian appointed to file a claim.";
pub(super) const MAXIMUM_MESSAGE: &str =
    "The claim amount exceeds the maximum limit for small claims.";
pub(super) const RESIDENCY_MESSAGE: &str = "The claimant must reside in King County to file a claim.";
pub(super) const SETTLEMENT_MESSAGE: &str =
    "Parties must attempt to resolve the dispute before filing.";
pub(super) const ANNUAL_CAP_MESSAGE: &str =
    "The claimant cannot have filed more than 12 claims in the past year.";

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).expect("valid date")
}

pub(super) fn jurisdiction() -> JurisdictionConfig {
    JurisdictionConfig::king_county()
}

pub(super) fn engine() -> EligibilityEngine {
    EligibilityEngine::new(jurisdiction())
}

/// An adult filer who satisfies every rule, with an incident yesterday.
pub(super) fn submission() -> ClaimSubmission {
    ClaimSubmission {
        filer_age: 25,
        has_guardian: false,
        claim_amount_cents: 2_000,
        claim_type: ClaimType::Rent,
        defendant_type: PartyType::Individual,
        plaintiff_type: PartyType::Individual,
        filing_zip_code: "98101".to_string(),
        incident_date: Some("2026-10-16".to_string()),
        settlement_attempted: true,
        can_pay_filing_fee: true,
        self_represented: true,
        has_defendant_contact_info: true,
        defendant_not_in_bankruptcy: true,
        is_first_claim_against_defendant: true,
        has_fewer_than_annual_claim_cap: true,
        understands_mandatory_court_attendance: true,
    }
}

pub(super) fn record(submission: ClaimSubmission) -> ClaimRecord {
    ClaimRecord::try_from(submission).expect("fixture submission is well formed")
}

pub(super) fn payload() -> Value {
    serde_json::to_value(submission()).expect("submission serializes")
}

pub(super) fn router() -> axum::Router {
    eligibility_router(Arc::new(engine()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

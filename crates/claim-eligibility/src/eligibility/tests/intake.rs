use chrono::NaiveDate;
use serde_json::json;

use super::common::*;
use crate::eligibility::domain::{ClaimRecord, ClaimType, PartyType};
use crate::eligibility::intake::MalformedInputError;

#[test]
fn decodes_camel_case_payload() {
    let record = ClaimRecord::from_value(payload()).expect("payload decodes");

    assert_eq!(record.filer_age(), 25);
    assert_eq!(record.claim_type(), ClaimType::Rent);
    assert_eq!(record.defendant_type(), PartyType::Individual);
    assert_eq!(record.filing_zip_code().as_str(), "98101");
    assert_eq!(
        record.incident_date(),
        NaiveDate::from_ymd_opt(2026, 10, 16)
    );
}

#[test]
fn accepts_display_labels_and_variant_names() {
    let mut value = payload();
    value["claimType"] = json!("Breach of Contract");
    value["defendantType"] = json!("company");
    value["plaintiffType"] = json!("Individual");
    let record = ClaimRecord::from_value(value).expect("labels decode");
    assert_eq!(record.claim_type(), ClaimType::BreachOfContract);
    assert_eq!(record.defendant_type(), PartyType::Company);
    assert_eq!(record.plaintiff_type(), PartyType::Individual);

    let mut value = payload();
    value["claimType"] = json!("GoodsAndServices");
    let record = ClaimRecord::from_value(value).expect("variant name decodes");
    assert_eq!(record.claim_type(), ClaimType::GoodsAndServices);
}

#[test]
fn rejects_text_that_is_not_json() {
    let error = ClaimRecord::from_json("age=25&zip=98101").expect_err("not json");
    assert!(matches!(error, MalformedInputError::Decode(_)));
}

#[test]
fn rejects_missing_required_answers_instead_of_defaulting() {
    let mut value = payload();
    value
        .as_object_mut()
        .expect("object payload")
        .remove("settlementAttempted");

    let error = ClaimRecord::from_value(value).expect_err("missing field");

    match error {
        MalformedInputError::Decode(source) => {
            assert!(source.to_string().contains("settlementAttempted"));
        }
        other => panic!("expected decode failure, got {other:?}"),
    }
}

#[test]
fn rejects_negative_amounts_and_unknown_claim_types() {
    let mut value = payload();
    value["claimAmountCents"] = json!(-500);
    assert!(matches!(
        ClaimRecord::from_value(value),
        Err(MalformedInputError::Decode(_))
    ));

    let mut value = payload();
    value["claimType"] = json!("Parking Ticket");
    assert!(matches!(
        ClaimRecord::from_value(value),
        Err(MalformedInputError::Decode(_))
    ));
}

#[test]
fn rejects_zip_codes_that_are_not_five_digits() {
    for zip in ["9810", "981011", "98l01", ""] {
        let mut value = payload();
        value["filingZipCode"] = json!(zip);
        match ClaimRecord::from_value(value) {
            Err(MalformedInputError::InvalidZipCode(found)) => assert_eq!(found, zip),
            other => panic!("expected zip failure for {zip:?}, got {other:?}"),
        }
    }
}

#[test]
fn trims_whitespace_around_zip_codes() {
    let mut value = payload();
    value["filingZipCode"] = json!(" 98101 ");
    let record = ClaimRecord::from_value(value).expect("zip decodes");
    assert_eq!(record.filing_zip_code().as_str(), "98101");
}

#[test]
fn incident_date_accepts_timestamps_and_treats_blank_as_absent() {
    let mut value = payload();
    value["incidentDate"] = json!("2024-03-05T08:00:00.000Z");
    let record = ClaimRecord::from_value(value).expect("timestamp decodes");
    assert_eq!(record.incident_date(), NaiveDate::from_ymd_opt(2024, 3, 5));

    for blank in [json!(null), json!(""), json!("  ")] {
        let mut value = payload();
        value["incidentDate"] = blank;
        let record = ClaimRecord::from_value(value).expect("blank decodes");
        assert_eq!(record.incident_date(), None);
    }

    let mut value = payload();
    value
        .as_object_mut()
        .expect("object payload")
        .remove("incidentDate");
    let record = ClaimRecord::from_value(value).expect("absent decodes");
    assert_eq!(record.incident_date(), None);
}

#[test]
fn rejects_unparsable_incident_date() {
    let mut value = payload();
    value["incidentDate"] = json!("last tuesday");

    match ClaimRecord::from_value(value) {
        Err(MalformedInputError::InvalidDate { field, value }) => {
            assert_eq!(field, "incidentDate");
            assert_eq!(value, "last tuesday");
        }
        other => panic!("expected date failure, got {other:?}"),
    }
}

#[test]
fn ignores_unrelated_form_answers() {
    let mut value = payload();
    value["plaintiffEthnicity"] = json!("Other");
    value["defendantIncome"] = json!("50k-75k");

    assert!(ClaimRecord::from_value(value).is_ok());
}

#[test]
fn offset_timestamps_keep_their_own_calendar_date() {
    let mut value = payload();
    value["incidentDate"] = json!("2020-10-17T00:00:00.000+10:00");
    let record = ClaimRecord::from_value(value).expect("timestamp decodes");
    assert_eq!(record.incident_date(), NaiveDate::from_ymd_opt(2020, 10, 17));

    let mut value = payload();
    value["incidentDate"] = json!("2020-10-17T23:30:00-07:00");
    let record = ClaimRecord::from_value(value).expect("timestamp decodes");
    assert_eq!(record.incident_date(), NaiveDate::from_ymd_opt(2020, 10, 17));
}

#[test]
fn exposes_every_acknowledgement_answer() {
    let mut value = payload();
    value["settlementAttempted"] = json!(false);
    value["defendantNotInBankruptcy"] = json!(false);
    value["hasFewerThanAnnualClaimCap"] = json!(false);
    let record = ClaimRecord::from_value(value).expect("payload decodes");

    assert!(!record.settlement_attempted());
    assert!(record.can_pay_filing_fee());
    assert!(record.self_represented());
    assert!(record.has_defendant_contact_info());
    assert!(!record.defendant_not_in_bankruptcy());
    assert!(record.is_first_claim_against_defendant());
    assert!(!record.has_fewer_than_annual_claim_cap());
    assert!(record.understands_mandatory_court_attendance());
}

use chrono::{Months, NaiveDate};

use super::super::domain::{ClaimRecord, PartyType};
use super::super::jurisdiction::JurisdictionConfig;

/// Identifies one entry of the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Guardianship,
    MaximumClaimAmount,
    DefendantPartyCeiling,
    PlaintiffPartyCeiling,
    Residency,
    ClaimTypeAccepted,
    SelfRepresentation,
    IncidentLookback,
    SettlementAttempted,
    DefendantContactInfo,
    DefendantBankruptcy,
    FirstClaimAgainstDefendant,
    FilingFee,
    AnnualClaimCap,
    CourtAttendance,
}

impl RuleKind {
    pub const fn label(self) -> &'static str {
        match self {
            RuleKind::Guardianship => "guardianship",
            RuleKind::MaximumClaimAmount => "maximum_claim_amount",
            RuleKind::DefendantPartyCeiling => "defendant_party_ceiling",
            RuleKind::PlaintiffPartyCeiling => "plaintiff_party_ceiling",
            RuleKind::Residency => "residency",
            RuleKind::ClaimTypeAccepted => "claim_type_accepted",
            RuleKind::SelfRepresentation => "self_representation",
            RuleKind::IncidentLookback => "incident_lookback",
            RuleKind::SettlementAttempted => "settlement_attempted",
            RuleKind::DefendantContactInfo => "defendant_contact_info",
            RuleKind::DefendantBankruptcy => "defendant_bankruptcy",
            RuleKind::FirstClaimAgainstDefendant => "first_claim_against_defendant",
            RuleKind::FilingFee => "filing_fee",
            RuleKind::AnnualClaimCap => "annual_claim_cap",
            RuleKind::CourtAttendance => "court_attendance",
        }
    }
}

pub(crate) struct RuleContext<'a> {
    pub record: &'a ClaimRecord,
    pub config: &'a JurisdictionConfig,
    pub today: NaiveDate,
}

/// A rule yields its user-facing message when the record fails it.
pub(crate) struct Rule {
    pub kind: RuleKind,
    check: fn(&RuleContext<'_>) -> Option<String>,
}

impl Rule {
    const fn new(kind: RuleKind, check: fn(&RuleContext<'_>) -> Option<String>) -> Self {
        Self { kind, check }
    }

    pub(crate) fn apply(&self, ctx: &RuleContext<'_>) -> Option<String> {
        (self.check)(ctx)
    }
}

// Order is the order reasons are reported in.
pub(crate) const RULES: [Rule; 15] = [
    Rule::new(RuleKind::Guardianship, guardianship),
    Rule::new(RuleKind::MaximumClaimAmount, maximum_claim_amount),
    Rule::new(RuleKind::DefendantPartyCeiling, defendant_party_ceiling),
    Rule::new(RuleKind::PlaintiffPartyCeiling, plaintiff_party_ceiling),
    Rule::new(RuleKind::Residency, residency),
    Rule::new(RuleKind::ClaimTypeAccepted, claim_type_accepted),
    Rule::new(RuleKind::SelfRepresentation, self_representation),
    Rule::new(RuleKind::IncidentLookback, incident_lookback),
    Rule::new(RuleKind::SettlementAttempted, settlement_attempted),
    Rule::new(RuleKind::DefendantContactInfo, defendant_contact_info),
    Rule::new(RuleKind::DefendantBankruptcy, defendant_bankruptcy),
    Rule::new(RuleKind::FirstClaimAgainstDefendant, first_claim_against_defendant),
    Rule::new(RuleKind::FilingFee, filing_fee),
    Rule::new(RuleKind::AnnualClaimCap, annual_claim_cap),
    Rule::new(RuleKind::CourtAttendance, court_attendance),
];

fn require(compliant: bool, message: impl FnOnce() -> String) -> Option<String> {
    if compliant {
        None
    } else {
        Some(message())
    }
}

fn guardianship(ctx: &RuleContext<'_>) -> Option<String> {
    let minimum = ctx.config.minimum_filer_age;
    require(
        ctx.record.filer_age >= minimum || ctx.record.has_guardian,
        || {
            format!(
                "The claimant must be at least {minimum} years old or have a guardian appointed to file a claim."
            )
        },
    )
}

fn maximum_claim_amount(ctx: &RuleContext<'_>) -> Option<String> {
    require(
        ctx.record.claim_amount_cents <= ctx.config.max_claim_cents,
        || "The claim amount exceeds the maximum limit for small claims.".to_string(),
    )
}

fn within_party_ceiling(ctx: &RuleContext<'_>, party: PartyType) -> bool {
    party == PartyType::Individual
        || ctx.record.claim_amount_cents <= ctx.config.party_claim_ceiling_cents
}

fn defendant_party_ceiling(ctx: &RuleContext<'_>) -> Option<String> {
    require(within_party_ceiling(ctx, ctx.record.defendant_type), || {
        format!(
            "Claims over {} can only be filed against individuals.",
            dollars(ctx.config.party_claim_ceiling_cents)
        )
    })
}

fn plaintiff_party_ceiling(ctx: &RuleContext<'_>) -> Option<String> {
    require(within_party_ceiling(ctx, ctx.record.plaintiff_type), || {
        format!(
            "Claims over {} can only be filed by individuals.",
            dollars(ctx.config.party_claim_ceiling_cents)
        )
    })
}

fn residency(ctx: &RuleContext<'_>) -> Option<String> {
    require(ctx.config.accepts_zip(&ctx.record.filing_zip_code), || {
        format!(
            "The claimant must reside in {} to file a claim.",
            ctx.config.name
        )
    })
}

fn claim_type_accepted(ctx: &RuleContext<'_>) -> Option<String> {
    require(ctx.config.accepts_claim_type(ctx.record.claim_type), || {
        "Not in the list of accepted claim types.".to_string()
    })
}

fn self_representation(ctx: &RuleContext<'_>) -> Option<String> {
    require(ctx.record.self_represented, || {
        "The claimant must represent themselves in small claims court.".to_string()
    })
}

fn incident_lookback(ctx: &RuleContext<'_>) -> Option<String> {
    let incident = ctx.record.incident_date?;
    let years = ctx.config.lookback_years;
    require(incident >= lookback_cutoff(ctx.today, years), || {
        format!(
            "The incident date of {} is more than {years} years old to the date.",
            incident.format("%a %b %d %Y")
        )
    })
}

fn settlement_attempted(ctx: &RuleContext<'_>) -> Option<String> {
    require(ctx.record.settlement_attempted, || {
        "Parties must attempt to resolve the dispute before filing.".to_string()
    })
}

fn defendant_contact_info(ctx: &RuleContext<'_>) -> Option<String> {
    require(ctx.record.has_defendant_contact_info, || {
        "The claimant must have the defendant's legal name and valid residential address."
            .to_string()
    })
}

fn defendant_bankruptcy(ctx: &RuleContext<'_>) -> Option<String> {
    require(ctx.record.defendant_not_in_bankruptcy, || {
        "The claimant cannot file a claim if the defendant is currently in bankruptcy.".to_string()
    })
}

fn first_claim_against_defendant(ctx: &RuleContext<'_>) -> Option<String> {
    require(ctx.record.is_first_claim_against_defendant, || {
        format!(
            "The claimant can only file one claim against the same defendant in a {} month period.",
            ctx.config.defendant_claim_window_months
        )
    })
}

fn filing_fee(ctx: &RuleContext<'_>) -> Option<String> {
    require(ctx.record.can_pay_filing_fee, || {
        "The claimant must be able to pay the court filing fees.".to_string()
    })
}

fn annual_claim_cap(ctx: &RuleContext<'_>) -> Option<String> {
    require(ctx.record.has_fewer_than_annual_claim_cap, || {
        format!(
            "The claimant cannot have filed more than {} claims in the past year.",
            ctx.config.annual_claim_cap
        )
    })
}

fn court_attendance(ctx: &RuleContext<'_>) -> Option<String> {
    require(ctx.record.understands_mandatory_court_attendance, || {
        "The claimant must understand that they are required to attend the court hearing."
            .to_string()
    })
}

/// Same month and day, `years` calendar years earlier; 29 February clamps to the 28th.
pub(crate) fn lookback_cutoff(today: NaiveDate, years: u32) -> NaiveDate {
    years
        .checked_mul(12)
        .and_then(|months| today.checked_sub_months(Months::new(months)))
        .unwrap_or(NaiveDate::MIN)
}

pub(crate) fn dollars(cents: u64) -> String {
    let (whole, fraction) = (cents / 100, cents % 100);
    if fraction == 0 {
        format!("${whole}")
    } else {
        format!("${whole}.{fraction:02}")
    }
}

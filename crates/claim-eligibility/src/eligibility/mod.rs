//! Small-claims filing eligibility: claim intake, jurisdiction reference data, and the rule
//! evaluator that turns one claim into a verdict.

pub mod domain;
pub mod evaluation;
pub mod intake;
pub mod jurisdiction;
pub mod router;

#[cfg(test)]
mod tests;

pub use domain::{ClaimRecord, ClaimSubmission, ClaimType, PartyType, ZipCode};
pub use evaluation::{evaluate, evaluate_as_of, EligibilityEngine, RuleKind, Verdict};
pub use intake::MalformedInputError;
pub use jurisdiction::{JurisdictionConfig, JurisdictionError, JurisdictionView};
pub use router::eligibility_router;

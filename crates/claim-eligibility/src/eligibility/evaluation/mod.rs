mod rules;
mod verdict;

pub use rules::RuleKind;
pub use verdict::Verdict;

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::debug;

use super::domain::ClaimRecord;
use super::jurisdiction::JurisdictionConfig;
use rules::{RuleContext, RULES};

/// Evaluate a record against the jurisdiction using today's local date.
pub fn evaluate(record: &ClaimRecord, config: &JurisdictionConfig) -> Verdict {
    evaluate_as_of(record, config, Local::now().date_naive())
}

/// Apply every rule, in table order, without stopping at the first failure.
pub fn evaluate_as_of(
    record: &ClaimRecord,
    config: &JurisdictionConfig,
    today: NaiveDate,
) -> Verdict {
    let ctx = RuleContext {
        record,
        config,
        today,
    };

    let failures: Vec<_> = RULES
        .iter()
        .filter_map(|rule| {
            let message = rule.apply(&ctx)?;
            debug!(rule = rule.kind.label(), "eligibility rule failed");
            Some((rule.kind, message))
        })
        .collect();

    let verdict = Verdict::from_failures(failures);
    debug!(
        eligible = verdict.eligible(),
        failed = verdict.reasons().len(),
        jurisdiction = %config.name,
        "claim evaluated"
    );
    verdict
}

/// Shareable evaluator bound to one immutable jurisdiction dataset.
#[derive(Debug, Clone)]
pub struct EligibilityEngine {
    config: Arc<JurisdictionConfig>,
}

impl EligibilityEngine {
    pub fn new(config: JurisdictionConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &JurisdictionConfig {
        &self.config
    }

    pub fn evaluate(&self, record: &ClaimRecord) -> Verdict {
        evaluate(record, &self.config)
    }

    pub fn evaluate_on(&self, record: &ClaimRecord, today: NaiveDate) -> Verdict {
        evaluate_as_of(record, &self.config, today)
    }
}

impl Default for EligibilityEngine {
    fn default() -> Self {
        Self::new(JurisdictionConfig::king_county())
    }
}

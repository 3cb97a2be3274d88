use serde::Serialize;

use super::rules::RuleKind;

/// Outcome of one evaluation: eligible exactly when no rule failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    eligible: bool,
    reasons: Vec<String>,
    #[serde(skip)]
    failed_rules: Vec<RuleKind>,
}

impl Verdict {
    pub(crate) fn from_failures(failures: Vec<(RuleKind, String)>) -> Self {
        let (failed_rules, reasons): (Vec<_>, Vec<_>) = failures.into_iter().unzip();
        Self {
            eligible: reasons.is_empty(),
            reasons,
            failed_rules,
        }
    }

    pub fn eligible(&self) -> bool {
        self.eligible
    }

    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    pub fn failed_rules(&self) -> &[RuleKind] {
        &self.failed_rules
    }

    pub fn summary(&self) -> String {
        match self.reasons.len() {
            0 => "eligible for small claims filing".to_string(),
            1 => "ineligible: 1 requirement not met".to_string(),
            count => format!("ineligible: {count} requirements not met"),
        }
    }
}

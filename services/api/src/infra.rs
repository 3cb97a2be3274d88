use chrono::NaiveDate;
use claim_eligibility::config::{load_jurisdiction, AppConfig, ConfigError};
use claim_eligibility::eligibility::JurisdictionConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Jurisdiction for this process: an explicit file wins over the environment.
pub(crate) fn resolve_jurisdiction(
    config: &AppConfig,
    override_path: Option<&Path>,
) -> Result<JurisdictionConfig, ConfigError> {
    match override_path {
        Some(path) => load_jurisdiction(path),
        None => config.jurisdiction(),
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

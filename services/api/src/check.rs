use crate::infra::resolve_jurisdiction;
use chrono::{Local, NaiveDate};
use claim_eligibility::config::AppConfig;
use claim_eligibility::eligibility::{ClaimRecord, EligibilityEngine, Verdict};
use claim_eligibility::error::AppError;
use clap::Args;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct CheckArgs {
    /// JSON claim payload to evaluate. Reads stdin when omitted.
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Evaluation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Jurisdiction JSON file, overriding APP_JURISDICTION_FILE.
    #[arg(long)]
    pub(crate) jurisdiction: Option<PathBuf>,
    /// Print the verdict as the JSON response body instead of text.
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let CheckArgs {
        input,
        today,
        jurisdiction,
        json,
    } = args;

    let config = AppConfig::load()?;
    let jurisdiction = resolve_jurisdiction(&config, jurisdiction.as_deref())?;
    let engine = EligibilityEngine::new(jurisdiction);
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let payload = match input {
        Some(path) => fs::read(path)?,
        None => {
            let mut buffer = Vec::new();
            std::io::stdin().read_to_end(&mut buffer)?;
            buffer
        }
    };

    let verdict = evaluate_payload(&engine, &payload, today)?;

    if json {
        println!("{}", render_json(&verdict)?);
    } else {
        print!("{}", render_verdict(&verdict, &engine, today));
    }

    Ok(())
}

pub(crate) fn evaluate_payload(
    engine: &EligibilityEngine,
    payload: &[u8],
    today: NaiveDate,
) -> Result<Verdict, AppError> {
    let record = ClaimRecord::from_slice(payload)?;
    Ok(engine.evaluate_on(&record, today))
}

pub(crate) fn render_json(verdict: &Verdict) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(verdict)?)
}

pub(crate) fn render_verdict(
    verdict: &Verdict,
    engine: &EligibilityEngine,
    today: NaiveDate,
) -> String {
    let mut output = format!(
        "{} small claims eligibility (evaluated {})\n",
        engine.config().name,
        today
    );
    output.push_str(&format!("Result: {}\n", verdict.summary()));
    for reason in verdict.reasons() {
        output.push_str(&format!("- {reason}\n"));
    }
    output
}

use crate::cli::ServeArgs;
use crate::infra::{resolve_jurisdiction, AppState};
use crate::routes::with_eligibility_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use claim_eligibility::config::AppConfig;
use claim_eligibility::eligibility::EligibilityEngine;
use claim_eligibility::error::AppError;
use claim_eligibility::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let jurisdiction = resolve_jurisdiction(&config, None)?;
    info!(
        jurisdiction = %jurisdiction.name,
        zip_codes = jurisdiction.accepted_zip_codes.len(),
        lookback_years = jurisdiction.lookback_years,
        "jurisdiction loaded"
    );
    let engine = Arc::new(EligibilityEngine::new(jurisdiction));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_eligibility_routes(engine)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "eligibility service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

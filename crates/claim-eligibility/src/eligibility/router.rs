use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;
use tracing::{info, warn};

use super::domain::ClaimRecord;
use super::evaluation::EligibilityEngine;

/// Router builder exposing the eligibility check and the active jurisdiction.
pub fn eligibility_router(engine: Arc<EligibilityEngine>) -> Router {
    Router::new()
        .route("/api/v1/eligibility/check", post(check_handler))
        .route(
            "/api/v1/eligibility/jurisdiction",
            get(jurisdiction_handler),
        )
        .with_state(engine)
}

pub(crate) async fn check_handler(
    State(engine): State<Arc<EligibilityEngine>>,
    body: Bytes,
) -> Response {
    let record = match ClaimRecord::from_slice(&body) {
        Ok(record) => record,
        Err(error) => {
            warn!(%error, "rejected malformed claim submission");
            let payload = json!({
                "error": error.to_string(),
                "kind": "malformed_input",
            });
            return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
        }
    };

    let verdict = engine.evaluate(&record);
    info!(
        eligible = verdict.eligible(),
        reasons = verdict.reasons().len(),
        "eligibility verdict issued"
    );
    (StatusCode::OK, axum::Json(verdict)).into_response()
}

pub(crate) async fn jurisdiction_handler(
    State(engine): State<Arc<EligibilityEngine>>,
) -> Response {
    let view = engine.config().summary_view();
    (StatusCode::OK, axum::Json(view)).into_response()
}

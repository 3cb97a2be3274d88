mod check;
mod cli;
mod infra;
mod routes;
mod server;

use claim_eligibility::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}

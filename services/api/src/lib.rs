mod cli;
mod demo;
mod infra;
mod routes;
mod screen;
mod server;

use loan_desk::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::domain::{Applicant, ApplicationId, LoanApplication};
use super::report::DecisionView;
use super::repository::{ApplicationRepository, RepositoryError};
use super::service::{ApplicationServiceError, LoanApplicationService};

/// Router builder exposing HTTP endpoints for intake and evaluation.
pub fn loan_router<R>(service: Arc<LoanApplicationService<R>>) -> Router
where
    R: ApplicationRepository + 'static,
{
    Router::new()
        .route("/api/v1/loans/applications", post(submit_handler::<R>))
        .route(
            "/api/v1/loans/applications/:application_id",
            get(status_handler::<R>),
        )
        .route(
            "/api/v1/loans/applications/:application_id/evaluate",
            post(evaluate_handler::<R>),
        )
        .route("/api/v1/loans/eligibility", post(eligibility_handler::<R>))
        .with_state(service)
}

/// Response body for the stateless eligibility endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct EligibilityResponse {
    pub(crate) applicant: Applicant,
    pub(crate) decision: DecisionView,
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<LoanApplicationService<R>>>,
    axum::Json(submission): axum::Json<LoanApplication>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    match service.submit(submission) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::ACCEPTED, axum::Json(view)).into_response()
        }
        Err(ApplicationServiceError::Intake(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(ApplicationServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "application already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn evaluate_handler<R>(
    State(service): State<Arc<LoanApplicationService<R>>>,
    Path(application_id): Path<String>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    let id = ApplicationId(application_id);
    match service.evaluate(&id) {
        Ok(decision) => {
            let view = DecisionView::from_decision(&decision);
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(ApplicationServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "application not found",
                "application_id": id.0,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn status_handler<R>(
    State(service): State<Arc<LoanApplicationService<R>>>,
    Path(application_id): Path<String>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    let id = ApplicationId(application_id);
    match service.get(&id) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(ApplicationServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "application not found",
                "application_id": id.0,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

/// Validate and evaluate a submission in one shot without storing it.
pub(crate) async fn eligibility_handler<R>(
    State(service): State<Arc<LoanApplicationService<R>>>,
    axum::Json(submission): axum::Json<LoanApplication>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    match service.screen(submission) {
        Ok((applicant, decision)) => {
            let body = EligibilityResponse {
                applicant,
                decision: DecisionView::from_decision(&decision),
            };
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(ApplicationServiceError::Intake(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

use std::sync::Arc;

use super::common::*;
use crate::workflows::underwriting::domain::{ApplicationId, LoanApplicationStatus};
use crate::workflows::underwriting::repository::RepositoryError;
use crate::workflows::underwriting::service::{ApplicationServiceError, LoanApplicationService};

#[test]
fn submit_stores_a_received_record() {
    let (service, _repository) = service_with_memory_repository();

    let record = service.submit(submission()).expect("submission accepted");

    assert_eq!(record.status, LoanApplicationStatus::Received);
    assert!(record.decision.is_none());
    assert!(record.application_id.0.starts_with("loan-"));
    assert_eq!(record.decision_rationale(), "pending evaluation");
}

#[test]
fn evaluate_approves_and_persists_the_outcome() {
    let (service, _repository) = service_with_memory_repository();
    let record = service.submit(submission()).expect("submission accepted");

    let decision = service
        .evaluate(&record.application_id)
        .expect("evaluation runs");

    assert!(decision.eligible);

    let stored = service.get(&record.application_id).expect("record exists");
    assert_eq!(stored.status, LoanApplicationStatus::Approved);
    assert_eq!(stored.decision, Some(decision));
    assert_eq!(stored.decision_rationale(), "application approved");
}

#[test]
fn evaluate_declines_and_keeps_the_quote() {
    let (service, _repository) = service_with_memory_repository();
    let record = service
        .submit(weak_submission())
        .expect("submission accepted");

    let decision = service
        .evaluate(&record.application_id)
        .expect("evaluation runs");

    assert!(!decision.eligible);
    assert_eq!(decision.annual_rate_pct, 18.0);
    assert!(decision.monthly_installment > 0.0);

    let stored = service.get(&record.application_id).expect("record exists");
    assert_eq!(stored.status, LoanApplicationStatus::Declined);
}

#[test]
fn evaluate_unknown_application_reports_not_found() {
    let (service, _repository) = service_with_memory_repository();

    let result = service.evaluate(&ApplicationId("loan-999999".to_string()));

    assert!(matches!(
        result,
        Err(ApplicationServiceError::Repository(RepositoryError::NotFound))
    ));
}

#[test]
fn submit_surfaces_intake_violations() {
    let (service, _repository) = service_with_memory_repository();
    let mut raw = submission();
    raw.tenure_months = 0;

    let result = service.submit(raw);

    assert!(matches!(result, Err(ApplicationServiceError::Intake(_))));
}

#[test]
fn screen_evaluates_without_storing() {
    let (service, repository) = service_with_memory_repository();

    let (applicant, decision) = service.screen(submission()).expect("screening runs");

    assert_eq!(applicant.name, "Asha Verma");
    assert!(decision.eligible);
    assert_eq!(repository.len(), 0);
}

#[test]
fn repository_outage_is_reported() {
    let service = LoanApplicationService::new(Arc::new(UnavailableRepository), policy_config());

    let result = service.submit(submission());

    assert!(matches!(
        result,
        Err(ApplicationServiceError::Repository(
            RepositoryError::Unavailable(_)
        ))
    ));
}

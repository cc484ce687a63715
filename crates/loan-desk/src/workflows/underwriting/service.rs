use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Local;
use tracing::info;

use super::domain::{Applicant, ApplicationId, LoanApplication, LoanApplicationStatus};
use super::evaluation::{Decision, EligibilityEngine, PolicyConfig};
use super::intake::{IntakeGuard, IntakeViolation};
use super::repository::{ApplicationRecord, ApplicationRepository, RepositoryError};

/// Service composing the intake guard, repository, and eligibility engine.
pub struct LoanApplicationService<R> {
    guard: IntakeGuard,
    repository: Arc<R>,
    engine: Arc<EligibilityEngine>,
}

static APPLICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_application_id() -> ApplicationId {
    let id = APPLICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ApplicationId(format!("loan-{id:06}"))
}

impl<R> LoanApplicationService<R>
where
    R: ApplicationRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: PolicyConfig) -> Self {
        Self {
            guard: IntakeGuard::default(),
            repository,
            engine: Arc::new(EligibilityEngine::new(config)),
        }
    }

    /// Validate and store a new application, returning the stored record.
    pub fn submit(
        &self,
        submission: LoanApplication,
    ) -> Result<ApplicationRecord, ApplicationServiceError> {
        let applicant = self.guard.applicant_from_submission(submission)?;

        let record = ApplicationRecord {
            application_id: next_application_id(),
            applicant,
            status: LoanApplicationStatus::Received,
            received_on: Local::now().date_naive(),
            decision: None,
        };

        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    /// Evaluate a stored application and persist the outcome.
    pub fn evaluate(
        &self,
        application_id: &ApplicationId,
    ) -> Result<Decision, ApplicationServiceError> {
        let mut record = self
            .repository
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;

        let decision = self.engine.evaluate(&record.applicant);

        record.status = if decision.eligible {
            LoanApplicationStatus::Approved
        } else {
            LoanApplicationStatus::Declined
        };
        record.decision = Some(decision.clone());
        self.repository.update(record)?;

        info!(
            application_id = %application_id.0,
            eligible = decision.eligible,
            annual_rate_pct = decision.annual_rate_pct,
            "loan application evaluated"
        );

        Ok(decision)
    }

    /// Run intake and evaluation in one pass without storing anything.
    ///
    /// This is the stateless core operation: validated applicant in,
    /// decision out.
    pub fn screen(
        &self,
        submission: LoanApplication,
    ) -> Result<(Applicant, Decision), ApplicationServiceError> {
        let applicant = self.guard.applicant_from_submission(submission)?;
        let decision = self.engine.evaluate(&applicant);
        Ok((applicant, decision))
    }

    /// Fetch an application and current status for API responses.
    pub fn get(
        &self,
        application_id: &ApplicationId,
    ) -> Result<ApplicationRecord, ApplicationServiceError> {
        let record = self
            .repository
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the application service.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

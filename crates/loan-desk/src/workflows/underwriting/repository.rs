use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{Applicant, ApplicationId, LoanApplicationStatus};
use super::evaluation::Decision;
use super::report::DecisionView;

/// Repository record pairing the applicant with status and outcome metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub application_id: ApplicationId,
    pub applicant: Applicant,
    pub status: LoanApplicationStatus,
    pub received_on: NaiveDate,
    pub decision: Option<Decision>,
}

impl ApplicationRecord {
    pub fn decision_rationale(&self) -> String {
        match &self.decision {
            Some(decision) => decision.summary(),
            None => "pending evaluation".to_string(),
        }
    }

    pub fn status_view(&self) -> ApplicationStatusView {
        ApplicationStatusView {
            application_id: self.application_id.clone(),
            status: self.status.label(),
            received_on: self.received_on,
            decision_rationale: self.decision_rationale(),
            decision: self.decision.as_ref().map(DecisionView::from_decision),
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
///
/// Implementations hold process-local working state only; nothing outlives
/// the process.
pub trait ApplicationRepository: Send + Sync {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError>;
    fn update(&self, record: ApplicationRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Sanitized representation of an application's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationStatusView {
    pub application_id: ApplicationId,
    pub status: &'static str,
    pub received_on: NaiveDate,
    pub decision_rationale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<DecisionView>,
}

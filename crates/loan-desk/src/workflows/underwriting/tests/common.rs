use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::workflows::underwriting::domain::{
    Applicant, ApplicationId, EmploymentStatus, LoanApplication,
};
use crate::workflows::underwriting::evaluation::{EligibilityEngine, PolicyConfig};
use crate::workflows::underwriting::repository::{
    ApplicationRecord, ApplicationRepository, RepositoryError,
};
use crate::workflows::underwriting::service::LoanApplicationService;

pub(super) fn policy_config() -> PolicyConfig {
    PolicyConfig::default()
}

pub(super) fn engine() -> EligibilityEngine {
    EligibilityEngine::new(policy_config())
}

/// Applicant who clears every check: 9.0% band, DTI ~0.42, loan well under
/// the five-times-annual-income cap.
pub(super) fn strong_applicant() -> Applicant {
    Applicant {
        name: "Asha Verma".to_string(),
        age: 30,
        employment_status: EmploymentStatus::Salaried,
        monthly_income: 50_000.0,
        credit_score: 780,
        existing_monthly_debt: 0.0,
        requested_loan_amount: 1_000_000.0,
        tenure_months: 60,
    }
}

pub(super) fn submission() -> LoanApplication {
    LoanApplication {
        applicant_name: "Asha Verma".to_string(),
        employment_status: "Salaried".to_string(),
        age: 30,
        monthly_income: 50_000.0,
        credit_score: 780,
        existing_monthly_debt: 0.0,
        requested_loan_amount: 1_000_000.0,
        tenure_months: 60,
    }
}

pub(super) fn weak_submission() -> LoanApplication {
    LoanApplication {
        applicant_name: "Ravi Kumar".to_string(),
        employment_status: "unemployed".to_string(),
        age: 19,
        monthly_income: 5_000.0,
        credit_score: 550,
        existing_monthly_debt: 0.0,
        requested_loan_amount: 2_000_000.0,
        tenure_months: 24,
    }
}

pub(super) fn service_with_memory_repository(
) -> (Arc<LoanApplicationService<MemoryRepository>>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = Arc::new(LoanApplicationService::new(
        repository.clone(),
        policy_config(),
    ));
    (service, repository)
}

#[derive(Default)]
pub(super) struct MemoryRepository {
    records: Mutex<HashMap<ApplicationId, ApplicationRecord>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl ApplicationRepository for MemoryRepository {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.application_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.application_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ApplicationRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.application_id) {
            guard.insert(record.application_id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

/// Repository stub whose insert always reports a duplicate.
pub(super) struct ConflictRepository;

impl ApplicationRepository for ConflictRepository {
    fn insert(&self, _record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: ApplicationRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        Ok(None)
    }
}

/// Repository stub simulating an outage.
pub(super) struct UnavailableRepository;

impl ApplicationRepository for UnavailableRepository {
    fn insert(&self, _record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn update(&self, _record: ApplicationRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn fetch(&self, _id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

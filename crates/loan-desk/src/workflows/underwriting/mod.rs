//! Loan application intake, eligibility evaluation, and reporting.
//!
//! The module is layered leaf-first: `evaluation` holds the pure decision
//! engine, `intake` sanitizes raw submissions into applicant records, and
//! `service`/`repository`/`router` wrap both in the submit → evaluate →
//! status lifecycle exposed over HTTP.

pub mod domain;
pub mod evaluation;
pub mod intake;
pub mod report;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Applicant, ApplicationId, EmploymentStatus, LoanApplication, LoanApplicationStatus,
};
pub use evaluation::{Decision, EligibilityEngine, PolicyBreach, PolicyConfig};
pub use intake::{IntakeGuard, IntakeViolation};
pub use report::{render_report, DecisionView};
pub use repository::{
    ApplicationRecord, ApplicationRepository, ApplicationStatusView, RepositoryError,
};
pub use router::loan_router;
pub use service::{ApplicationServiceError, LoanApplicationService};

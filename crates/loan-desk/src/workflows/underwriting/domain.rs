use serde::{Deserialize, Serialize};

/// Identifier wrapper for stored loan applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// Employment categories recognized by the bank's rate card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentStatus {
    Salaried,
    SelfEmployed,
    Unemployed,
}

impl EmploymentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            EmploymentStatus::Salaried => "Salaried",
            EmploymentStatus::SelfEmployed => "Self-Employed",
            EmploymentStatus::Unemployed => "Unemployed",
        }
    }

    pub const fn is_salaried(self) -> bool {
        matches!(self, EmploymentStatus::Salaried)
    }
}

/// Raw submission exactly as a client posts it, before intake validation.
///
/// Employment status arrives as free text and numerics arrive signed; the
/// intake guard is responsible for normalizing both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanApplication {
    pub applicant_name: String,
    pub employment_status: String,
    pub age: i64,
    pub monthly_income: f64,
    pub credit_score: i64,
    pub existing_monthly_debt: f64,
    pub requested_loan_amount: f64,
    pub tenure_months: i64,
}

/// Sanitized applicant record consumed by the eligibility engine.
///
/// Invariant (established by intake): numeric fields are non-negative and
/// tenure is at least one month. The credit score stays a plain integer so
/// the rate card can absorb out-of-range values instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Applicant {
    pub name: String,
    pub age: u32,
    pub employment_status: EmploymentStatus,
    pub monthly_income: f64,
    pub credit_score: i64,
    pub existing_monthly_debt: f64,
    pub requested_loan_amount: f64,
    pub tenure_months: u32,
}

/// High level status tracked through the application lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanApplicationStatus {
    Received,
    Approved,
    Declined,
}

impl LoanApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            LoanApplicationStatus::Received => "received",
            LoanApplicationStatus::Approved => "approved",
            LoanApplicationStatus::Declined => "declined",
        }
    }
}

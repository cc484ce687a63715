use super::domain::{Applicant, EmploymentStatus, LoanApplication};

/// Validation errors raised while sanitizing a raw submission.
#[derive(Debug, thiserror::Error)]
pub enum IntakeViolation {
    #[error("applicant name must not be empty")]
    MissingName,
    #[error("age must be a non-negative integer (found {found})")]
    NegativeAge { found: i64 },
    #[error("credit score must be a non-negative integer (found {found})")]
    NegativeCreditScore { found: i64 },
    #[error("{field} must be a non-negative number (found {found})")]
    NegativeAmount { field: &'static str, found: f64 },
    #[error("tenure must be at least one month (found {found})")]
    TenureTooShort { found: i64 },
}

/// Map free-text employment input onto the closed rate-card enum.
///
/// Matching is case-insensitive on the leading characters: anything starting
/// with "salaried" is Salaried, anything starting with "self" is
/// Self-Employed, and everything else (including unrecognized text) is
/// treated as Unemployed.
pub fn normalize_employment(raw: &str) -> EmploymentStatus {
    let folded = raw.trim().to_ascii_uppercase();
    if folded.starts_with("SALARIED") {
        EmploymentStatus::Salaried
    } else if folded.starts_with("SELF") {
        EmploymentStatus::SelfEmployed
    } else {
        EmploymentStatus::Unemployed
    }
}

/// Guard responsible for producing sanitized [`Applicant`] records.
///
/// The eligibility engine assumes non-negative numerics and a tenure of at
/// least one month; every submission passes through here first so the engine
/// never sees a contract violation.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    /// Convert an inbound submission into a sanitized applicant record.
    pub fn applicant_from_submission(
        &self,
        submission: LoanApplication,
    ) -> Result<Applicant, IntakeViolation> {
        let name = submission.applicant_name.trim().to_string();
        if name.is_empty() {
            return Err(IntakeViolation::MissingName);
        }

        if submission.age < 0 {
            return Err(IntakeViolation::NegativeAge {
                found: submission.age,
            });
        }

        if submission.credit_score < 0 {
            return Err(IntakeViolation::NegativeCreditScore {
                found: submission.credit_score,
            });
        }

        for (field, value) in [
            ("monthly income", submission.monthly_income),
            ("existing monthly debt", submission.existing_monthly_debt),
            ("requested loan amount", submission.requested_loan_amount),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(IntakeViolation::NegativeAmount { field, found: value });
            }
        }

        if submission.tenure_months < 1 {
            return Err(IntakeViolation::TenureTooShort {
                found: submission.tenure_months,
            });
        }

        Ok(Applicant {
            name,
            age: submission.age.try_into().unwrap_or(u32::MAX),
            employment_status: normalize_employment(&submission.employment_status),
            monthly_income: submission.monthly_income,
            credit_score: submission.credit_score,
            existing_monthly_debt: submission.existing_monthly_debt,
            requested_loan_amount: submission.requested_loan_amount,
            tenure_months: submission.tenure_months.try_into().unwrap_or(u32::MAX),
        })
    }
}

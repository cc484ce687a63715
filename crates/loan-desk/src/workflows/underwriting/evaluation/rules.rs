use super::super::domain::{Applicant, EmploymentStatus};
use super::config::PolicyConfig;
use super::policy::PolicyBreach;

/// Screening checks that depend only on the applicant record.
///
/// Every check runs; each violated check appends a breach so no finding
/// masks another.
pub(crate) fn screening_breaches(
    applicant: &Applicant,
    config: &PolicyConfig,
) -> Vec<PolicyBreach> {
    let mut breaches = Vec::new();

    if applicant.age < config.min_age {
        breaches.push(PolicyBreach::BelowMinimumAge {
            minimum: config.min_age,
        });
    }
    if applicant.age > config.max_age {
        breaches.push(PolicyBreach::AboveMaximumAge {
            maximum: config.max_age,
        });
    }
    if applicant.employment_status == EmploymentStatus::Unemployed {
        breaches.push(PolicyBreach::Unemployed);
    }
    if applicant.monthly_income < config.min_monthly_income {
        breaches.push(PolicyBreach::IncomeBelowMinimum {
            minimum: config.min_monthly_income,
        });
    }
    if applicant.credit_score < config.min_credit_score {
        breaches.push(PolicyBreach::CreditScoreBelowMinimum {
            score: applicant.credit_score,
            minimum: config.min_credit_score,
        });
    }

    breaches
}

/// Affordability checks that need the computed installment.
pub(crate) fn affordability_breaches(
    applicant: &Applicant,
    config: &PolicyConfig,
    monthly_installment: f64,
) -> Vec<PolicyBreach> {
    let mut breaches = Vec::new();

    // A zero income cannot service any debt; the ratio is pinned to 1.0 so
    // the check fails deterministically instead of dividing by zero.
    let projected_debt = applicant.existing_monthly_debt + monthly_installment;
    let ratio = if applicant.monthly_income > 0.0 {
        projected_debt / applicant.monthly_income
    } else {
        1.0
    };
    if ratio > config.max_debt_to_income {
        breaches.push(PolicyBreach::DebtToIncomeTooHigh {
            ratio,
            maximum: config.max_debt_to_income,
        });
    }

    let max_allowed = config.loan_to_annual_income_multiplier * applicant.monthly_income * 12.0;
    if applicant.requested_loan_amount > max_allowed {
        breaches.push(PolicyBreach::LoanExceedsIncomeCap { max_allowed });
    }

    breaches
}

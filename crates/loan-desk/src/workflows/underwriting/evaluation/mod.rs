mod amortization;
mod config;
mod policy;
mod rates;
mod rules;

pub use amortization::monthly_installment;
pub use config::PolicyConfig;
pub use policy::PolicyBreach;
pub use rates::select_rate;

use serde::{Deserialize, Serialize};

use super::domain::Applicant;

/// Stateless engine applying a bank's lending policy to applicant records.
pub struct EligibilityEngine {
    config: PolicyConfig,
}

impl EligibilityEngine {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Evaluate an applicant against the configured lending policy.
    ///
    /// All checks run regardless of earlier failures, and the decision always
    /// carries the rate and installment the applicant would receive, so a
    /// declined applicant still sees the quote behind the numbers.
    pub fn evaluate(&self, applicant: &Applicant) -> Decision {
        let mut breaches = rules::screening_breaches(applicant, &self.config);

        let annual_rate_pct =
            rates::select_rate(applicant.credit_score, applicant.employment_status);
        let monthly_installment = amortization::monthly_installment(
            applicant.requested_loan_amount,
            annual_rate_pct,
            applicant.tenure_months,
        );

        breaches.extend(rules::affordability_breaches(
            applicant,
            &self.config,
            monthly_installment,
        ));

        Decision {
            eligible: breaches.is_empty(),
            breaches,
            annual_rate_pct,
            monthly_installment,
        }
    }
}

/// Outcome of a single evaluation; constructed once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub eligible: bool,
    pub breaches: Vec<PolicyBreach>,
    pub annual_rate_pct: f64,
    pub monthly_installment: f64,
}

impl Decision {
    /// Human-readable rejection reasons in check order; empty iff eligible.
    pub fn reason_lines(&self) -> Vec<String> {
        self.breaches.iter().map(PolicyBreach::summary).collect()
    }

    pub fn summary(&self) -> String {
        if self.eligible {
            "application approved".to_string()
        } else {
            format!("application declined: {}", self.reason_lines().join("; "))
        }
    }
}

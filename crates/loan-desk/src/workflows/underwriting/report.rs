use serde::Serialize;

use super::domain::Applicant;
use super::evaluation::Decision;

/// Serializable projection of a decision for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionView {
    pub eligible: bool,
    pub annual_rate_pct: f64,
    pub monthly_installment: f64,
    pub reasons: Vec<String>,
}

impl DecisionView {
    pub fn from_decision(decision: &Decision) -> Self {
        Self {
            eligible: decision.eligible,
            annual_rate_pct: decision.annual_rate_pct,
            monthly_installment: decision.monthly_installment,
            reasons: decision.reason_lines(),
        }
    }
}

/// Render the console eligibility report for an evaluated applicant.
///
/// The applicant fields are echoed back alongside the quoted rate and
/// installment, followed by the approval banner or the itemized reasons.
pub fn render_report(applicant: &Applicant, decision: &Decision) -> String {
    let mut out = String::new();
    out.push_str("========== Loan Eligibility Report ==========\n");
    out.push_str(&format!("Applicant Name  : {}\n", applicant.name));
    out.push_str(&format!("Age             : {}\n", applicant.age));
    out.push_str(&format!(
        "Employment      : {}\n",
        applicant.employment_status.label()
    ));
    out.push_str(&format!(
        "Monthly Income  : {:.2}\n",
        applicant.monthly_income
    ));
    out.push_str(&format!("Credit Score    : {}\n", applicant.credit_score));
    out.push_str(&format!(
        "Existing EMIs   : {:.2}\n",
        applicant.existing_monthly_debt
    ));
    out.push_str(&format!(
        "Requested Loan  : {:.2}\n",
        applicant.requested_loan_amount
    ));
    out.push_str(&format!("Tenure (months) : {}\n", applicant.tenure_months));
    out.push_str(&format!(
        "Estimated Rate  : {}% p.a.\n",
        decision.annual_rate_pct
    ));
    out.push_str(&format!(
        "Estimated EMI   : {:.2}\n",
        decision.monthly_installment
    ));

    if decision.eligible {
        out.push_str("\nDecision: APPROVED\n");
        out.push_str("Congratulations! Your loan request meets the bank's lending criteria.\n");
    } else {
        out.push_str("\nDecision: REJECTED\n");
        out.push_str("Reasons:\n");
        for reason in decision.reason_lines() {
            out.push_str(&format!(" - {reason}\n"));
        }
    }

    out.push_str("==============================================\n");
    out
}

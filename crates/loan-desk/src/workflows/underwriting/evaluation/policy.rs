use serde::{Deserialize, Serialize};

/// Individual lending-policy violation recorded against an application.
///
/// Breaches are data, not errors: the engine reports every violated check in
/// one pass so a declined applicant sees the full picture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PolicyBreach {
    BelowMinimumAge { minimum: u32 },
    AboveMaximumAge { maximum: u32 },
    Unemployed,
    IncomeBelowMinimum { minimum: f64 },
    CreditScoreBelowMinimum { score: i64, minimum: i64 },
    DebtToIncomeTooHigh { ratio: f64, maximum: f64 },
    LoanExceedsIncomeCap { max_allowed: f64 },
}

impl PolicyBreach {
    /// Human-readable reason line carried into reports and API responses.
    pub fn summary(&self) -> String {
        match self {
            PolicyBreach::BelowMinimumAge { minimum } => {
                format!("applicant below minimum age ({minimum})")
            }
            PolicyBreach::AboveMaximumAge { maximum } => {
                format!("applicant above maximum age ({maximum})")
            }
            PolicyBreach::Unemployed => "applicant is unemployed".to_string(),
            PolicyBreach::IncomeBelowMinimum { minimum } => {
                format!("monthly income below minimum required ({minimum:.0})")
            }
            PolicyBreach::CreditScoreBelowMinimum { score, minimum } => {
                format!("credit score ({score}) below minimum ({minimum})")
            }
            PolicyBreach::DebtToIncomeTooHigh { ratio, maximum } => {
                format!("debt-to-income ratio would be {ratio:.2} (> {maximum:.2})")
            }
            PolicyBreach::LoanExceedsIncomeCap { max_allowed } => {
                format!("requested loan exceeds the income-based limit (max allowed: {max_allowed:.0})")
            }
        }
    }
}

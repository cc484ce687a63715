use serde::{Deserialize, Serialize};

/// Bank policy dials applied by the eligibility engine.
///
/// The defaults document the house lending policy; a different bank profile
/// can be expressed by constructing the struct with other values, no code
/// changes required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    pub min_age: u32,
    pub max_age: u32,
    pub min_monthly_income: f64,
    pub min_credit_score: i64,
    pub max_debt_to_income: f64,
    pub loan_to_annual_income_multiplier: f64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_age: 21,
            max_age: 62,
            min_monthly_income: 10_000.0,
            min_credit_score: 600,
            max_debt_to_income: 0.50,
            loan_to_annual_income_multiplier: 5.0,
        }
    }
}

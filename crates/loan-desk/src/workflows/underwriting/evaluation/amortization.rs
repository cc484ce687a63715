/// Level monthly payment for `principal` repaid over `tenure_months` at
/// `annual_rate_pct` percent per annum.
///
/// Degrades instead of failing on out-of-range input: a zero tenure yields a
/// zero installment and a zero rate yields straight-line repayment.
pub fn monthly_installment(principal: f64, annual_rate_pct: f64, tenure_months: u32) -> f64 {
    if tenure_months == 0 {
        return 0.0;
    }

    let months = f64::from(tenure_months);
    let monthly_rate = annual_rate_pct / 12.0 / 100.0;
    if monthly_rate <= 0.0 {
        return principal / months;
    }

    let growth = (1.0 + monthly_rate).powf(months);
    principal * monthly_rate * growth / (growth - 1.0)
}

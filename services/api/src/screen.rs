use std::io::{self, BufRead, Write};

use clap::Args;
use loan_desk::error::AppError;
use loan_desk::workflows::underwriting::domain::LoanApplication;
use loan_desk::workflows::underwriting::{render_report, EligibilityEngine, IntakeGuard};

use crate::infra::default_policy_config;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Applicant name
    #[arg(long)]
    pub(crate) name: String,
    /// Employment status (Salaried/Self-Employed/Unemployed; free text accepted)
    #[arg(long)]
    pub(crate) employment: String,
    /// Applicant age in years
    #[arg(long)]
    pub(crate) age: i64,
    /// Gross monthly income
    #[arg(long)]
    pub(crate) income: f64,
    /// Credit score (300-900 typical scale)
    #[arg(long)]
    pub(crate) credit_score: i64,
    /// Existing total monthly EMI obligations
    #[arg(long, default_value_t = 0.0)]
    pub(crate) existing_emi: f64,
    /// Requested loan amount
    #[arg(long)]
    pub(crate) amount: f64,
    /// Repayment tenure in months
    #[arg(long)]
    pub(crate) tenure_months: i64,
}

/// One-shot evaluation from command-line flags.
pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let submission = LoanApplication {
        applicant_name: args.name,
        employment_status: args.employment,
        age: args.age,
        monthly_income: args.income,
        credit_score: args.credit_score,
        existing_monthly_debt: args.existing_emi,
        requested_loan_amount: args.amount,
        tenure_months: args.tenure_months,
    };

    let applicant = IntakeGuard::default().applicant_from_submission(submission)?;
    let decision = EligibilityEngine::new(default_policy_config()).evaluate(&applicant);

    println!("{}", render_report(&applicant, &decision));
    Ok(())
}

/// Interactive console intake: prompt for each field, re-prompt on invalid
/// input, then print the eligibility report.
pub(crate) fn run_interactive() -> Result<(), AppError> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("===== Bank Loan Eligibility Checker =====");

    let applicant_name = prompt_line(&mut lines, "Enter applicant name: ")?;
    let age = prompt_parsed(
        &mut lines,
        "Enter age: ",
        "Invalid. Enter a valid non-negative integer for age: ",
        |value: &i64| *value >= 0,
    )?;
    let employment_status = prompt_line(
        &mut lines,
        "Employment Status (Salaried/Self-Employed/Unemployed): ",
    )?;
    let monthly_income = prompt_parsed(
        &mut lines,
        "Monthly Income: ",
        "Invalid. Enter monthly income (numeric): ",
        |value: &f64| *value >= 0.0,
    )?;
    let credit_score = prompt_parsed(
        &mut lines,
        "Credit Score (300-900): ",
        "Invalid. Enter credit score: ",
        |value: &i64| *value >= 0,
    )?;
    let existing_monthly_debt = prompt_parsed(
        &mut lines,
        "Existing Monthly EMI obligations: ",
        "Invalid. Enter existing total monthly EMI: ",
        |value: &f64| *value >= 0.0,
    )?;
    let requested_loan_amount = prompt_parsed(
        &mut lines,
        "Requested Loan Amount: ",
        "Invalid. Enter requested loan amount: ",
        |value: &f64| *value >= 0.0,
    )?;
    let tenure_months = prompt_parsed(
        &mut lines,
        "Tenure (months): ",
        "Invalid. Enter tenure in months: ",
        |value: &i64| *value >= 1,
    )?;

    let submission = LoanApplication {
        applicant_name,
        employment_status,
        age,
        monthly_income,
        credit_score,
        existing_monthly_debt,
        requested_loan_amount,
        tenure_months,
    };

    let applicant = IntakeGuard::default().applicant_from_submission(submission)?;
    let decision = EligibilityEngine::new(default_policy_config()).evaluate(&applicant);

    println!("{}", render_report(&applicant, &decision));
    println!("Thank you for using the Loan Eligibility Desk.");
    Ok(())
}

fn prompt_line(
    lines: &mut io::Lines<io::StdinLock<'_>>,
    prompt: &str,
) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;

    match lines.next() {
        Some(line) => Ok(line?.trim().to_string()),
        None => Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before the application was complete",
        ))),
    }
}

fn prompt_parsed<T>(
    lines: &mut io::Lines<io::StdinLock<'_>>,
    prompt: &str,
    retry: &str,
    accepts: impl Fn(&T) -> bool,
) -> Result<T, AppError>
where
    T: std::str::FromStr,
{
    let mut current = prompt;
    loop {
        let raw = prompt_line(lines, current)?;
        match raw.parse::<T>() {
            Ok(value) if accepts(&value) => return Ok(value),
            _ => current = retry,
        }
    }
}

use std::sync::Arc;

use clap::Args;

use crate::infra::{default_policy_config, InMemoryApplicationRepository};
use loan_desk::error::AppError;
use loan_desk::workflows::underwriting::domain::LoanApplication;
use loan_desk::workflows::underwriting::{render_report, LoanApplicationService};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the declined contrast applicant
    #[arg(long)]
    pub(crate) skip_declined: bool,
}

/// Scripted walkthrough of the submit -> evaluate -> status lifecycle.
pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Loan eligibility desk demo");

    let repository = Arc::new(InMemoryApplicationRepository::default());
    let service = Arc::new(LoanApplicationService::new(
        repository,
        default_policy_config(),
    ));

    let record = service.submit(approved_profile())?;
    println!(
        "- application {} received on {}",
        record.application_id.0, record.received_on
    );

    let decision = service.evaluate(&record.application_id)?;
    println!("{}", render_report(&record.applicant, &decision));

    let stored = service.get(&record.application_id)?;
    println!("- final status: {}", stored.status.label());
    println!("- rationale: {}", stored.decision_rationale());

    if args.skip_declined {
        return Ok(());
    }

    println!("\nContrast applicant (screened without storing):");
    let (applicant, decision) = service.screen(declined_profile())?;
    println!("{}", render_report(&applicant, &decision));

    Ok(())
}

fn approved_profile() -> LoanApplication {
    LoanApplication {
        applicant_name: "Asha Verma".to_string(),
        employment_status: "Salaried".to_string(),
        age: 30,
        monthly_income: 50_000.0,
        credit_score: 780,
        existing_monthly_debt: 0.0,
        requested_loan_amount: 1_000_000.0,
        tenure_months: 60,
    }
}

fn declined_profile() -> LoanApplication {
    LoanApplication {
        applicant_name: "Ravi Kumar".to_string(),
        employment_status: "unemployed".to_string(),
        age: 19,
        monthly_income: 5_000.0,
        credit_score: 550,
        existing_monthly_debt: 0.0,
        requested_loan_amount: 2_000_000.0,
        tenure_months: 24,
    }
}

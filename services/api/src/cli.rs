use crate::demo::{run_demo, DemoArgs};
use crate::screen::{run_evaluate, run_interactive, EvaluateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use loan_desk::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Loan Eligibility Desk",
    about = "Screen loan applicants and estimate EMIs from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Collect an application interactively and print the eligibility report
    Screen,
    /// Evaluate a single application supplied via flags
    Evaluate(EvaluateArgs),
    /// Run a scripted demo contrasting an approved and a declined applicant
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Screen => run_interactive(),
        Command::Evaluate(args) => run_evaluate(args),
        Command::Demo(args) => run_demo(args),
    }
}

//! Signup demo: validates an email through a couple of layers and shows what a
//! user sees versus what gets logged.
//!
//! ```text
//! cargo run -p signup -- nope
//! cargo run -p signup -- ada@example.invalid --line
//! RUST_LOG=warn cargo run -p signup -- admin@example.com --treat-as defect
//! ```

use clap::Parser;
use problem::{bail_defect, context, ensure_failure, IntoOutcome, Outcome, OutcomeExt, Severity};
use tracing_subscriber::EnvFilter;

const FALLBACK: &str = "Something went wrong, please try again later";

#[derive(Parser)]
#[command(name = "signup")]
#[command(about = "Register an email address")]
struct Cli {
    /// Email address to register
    email: String,

    /// Print the problem on a single line instead of the full stack
    #[arg(long)]
    line: bool,

    /// Reclassify any problem before it reaches the user (defect or failure)
    #[arg(long, value_name = "SEVERITY")]
    treat_as: Option<Severity>,
}

#[derive(Debug, thiserror::Error)]
enum SignupError {
    #[error("Invalid email")]
    InvalidEmail,
    #[error("'{0}' is already registered")]
    Taken(String),
    #[error("storage error: {0}")]
    Storage(String),
}

#[context]
fn validate_email(email: &str) -> Outcome<(), SignupError> {
    ensure_failure!(
        email.contains('@') && !email.starts_with('@'),
        SignupError::InvalidEmail
    );
    Ok(())
}

#[context("storing {}", email)]
fn store(email: &str) -> Outcome<u64, SignupError> {
    if email.ends_with(".invalid") {
        bail_defect!(SignupError::Storage("connection reset by peer".to_string()));
    }
    lookup(email)
        .into_failure()
        .with_context("checking for existing account")?;
    Ok(1)
}

fn lookup(email: &str) -> Result<(), SignupError> {
    if email.starts_with("admin") {
        return Err(SignupError::Taken(email.to_string()));
    }
    Ok(())
}

#[context]
fn signup(email: &str) -> Outcome<u64, SignupError> {
    validate_email(email)?;
    store(email)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let outcome = match cli.treat_as {
        Some(Severity::Defect) => signup(&cli.email).to_defect(),
        Some(Severity::Failure) => signup(&cli.email).to_failure(),
        None => signup(&cli.email),
    };

    match outcome.report(ToString::to_string) {
        Ok(id) => println!("Registered {} with id {}", cli.email, id),
        Err(problem) => {
            let rendered = if cli.line {
                problem.print_line(ToString::to_string)
            } else {
                problem.pretty_print(ToString::to_string)
            };
            eprintln!("{rendered}\n");
            eprintln!("Error: {}", problem.render_user(FALLBACK, ToString::to_string));
            std::process::exit(1);
        }
    }
}

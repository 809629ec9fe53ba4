//! Problem - errors that remember where they have been.
//!
//! A [`Problem`] wraps an application error with a [`Severity`] and a stack of
//! entries recorded while the error travels up through call layers.
//!
//! # Severity
//!
//! - A *defect* is unexpected and internal. Its message is never handed out by
//!   [`Problem::unwrap_failure`], so it does not leak to end users.
//! - A *failure* is expected and safe to show.
//!
//! A defect is sticky: recording a failure on it keeps it a defect, and a
//! later defect does not replace the first one. A failure that meets a defect
//! becomes that defect.
//!
//! # Stack
//!
//! Entries read most recent first. The entry recorded when the problem was
//! created is always last, so a problem's stack is never empty.
//!
//! ```ignore
//! use problem::{context, IntoOutcome, Outcome, OutcomeExt};
//!
//! #[context]
//! fn validate_email(email: &str) -> Outcome<(), String> {
//!     if !email.contains('@') {
//!         return Err("Invalid email".to_string()).into_failure();
//!     }
//!     Ok(())
//! }
//!
//! let problem = validate_email("nope").unwrap_err();
//! assert_eq!(
//!     problem.pretty_print(ToString::to_string),
//!     "Failure: Invalid email\n\nstack:\n  Context: in validate_email\n  Failure: Invalid email"
//! );
//! ```

pub mod config;
pub mod errors;
pub mod future;
mod macros;
pub mod outcome;
pub mod problem;
pub mod render;
mod report;
pub mod severity;

pub use config::RenderConfig;
pub use errors::ParseSeverityError;
pub use future::OutcomeFutureExt;
pub use outcome::{new_defect, new_failure, IntoOutcome, Outcome, OutcomeExt};
pub use problem::{Problem, Stack, StackEntry};
pub use problem_macros::context;
pub use render::{pretty_print, print_line};
pub use severity::Severity;

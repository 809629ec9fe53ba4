//! Results that carry a [`Problem`] on the error side.

use crate::problem::Problem;
use crate::severity::Severity;

/// Either a success value or a problem wrapping `E`.
pub type Outcome<T, E> = Result<T, Problem<E>>;

/// Create a defect problem.
pub fn new_defect<E>(error: E) -> Problem<E> {
    Problem::defect(error)
}

/// Create a failure problem.
pub fn new_failure<E>(error: E) -> Problem<E> {
    Problem::failure(error)
}

/// Problem operations lifted to [`Outcome`].
///
/// Every method leaves `Ok` untouched and applies the matching [`Problem`]
/// method to `Err`.
pub trait OutcomeExt<T, E>: Sized {
    fn with_context(self, context: impl Into<String>) -> Self;

    fn with_context_lazy<C, F>(self, context: F) -> Self
    where
        C: Into<String>,
        F: FnOnce() -> C;

    fn with_defect(self, error: E) -> Self;

    fn with_failure(self, error: E) -> Self;

    fn to_defect(self) -> Self;

    fn to_failure(self) -> Self;

    /// Strip the problem, keeping only its effective error.
    fn extract_error(self) -> Result<T, E>;

    /// Replace a defect's error with `default`. See [`Problem::unwrap_failure`].
    fn unwrap_failure(self, default: E) -> Result<T, E>;

    /// Log the problem, if any, and pass the outcome on.
    fn report<F>(self, to_string: F) -> Self
    where
        F: Fn(&E) -> String;
}

impl<T, E> OutcomeExt<T, E> for Outcome<T, E> {
    fn with_context(self, context: impl Into<String>) -> Self {
        self.map_err(|problem| problem.with_context(context))
    }

    fn with_context_lazy<C, F>(self, context: F) -> Self
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|problem| problem.with_context_lazy(context))
    }

    fn with_defect(self, error: E) -> Self {
        self.map_err(|problem| problem.with_defect(error))
    }

    fn with_failure(self, error: E) -> Self {
        self.map_err(|problem| problem.with_failure(error))
    }

    fn to_defect(self) -> Self {
        self.map_err(Problem::to_defect)
    }

    fn to_failure(self) -> Self {
        self.map_err(Problem::to_failure)
    }

    fn extract_error(self) -> Result<T, E> {
        self.map_err(Problem::into_error)
    }

    fn unwrap_failure(self, default: E) -> Result<T, E> {
        self.map_err(|problem| problem.unwrap_failure(default))
    }

    fn report<F>(self, to_string: F) -> Self
    where
        F: Fn(&E) -> String,
    {
        if let Err(problem) = &self {
            problem.report(to_string);
        }
        self
    }
}

/// Lift a plain `Result` into an [`Outcome`].
pub trait IntoOutcome<T, E>: Sized {
    fn into_outcome(self, severity: Severity) -> Outcome<T, E>;

    fn into_defect(self) -> Outcome<T, E> {
        self.into_outcome(Severity::Defect)
    }

    fn into_failure(self) -> Outcome<T, E> {
        self.into_outcome(Severity::Failure)
    }
}

impl<T, E> IntoOutcome<T, E> for Result<T, E> {
    fn into_outcome(self, severity: Severity) -> Outcome<T, E> {
        self.map_err(|error| Problem::new(severity, error))
    }
}

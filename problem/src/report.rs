//! Logging problems through `tracing`.
//!
//! Defects are logged at `ERROR`, failures at `WARN`. The message is the
//! single-line rendering. No subscriber is installed here.

use tracing::{error, warn};

use crate::problem::Problem;
use crate::severity::Severity;

impl<E> Problem<E> {
    /// Emit one event describing this problem.
    pub fn report<F>(&self, to_string: F)
    where
        F: Fn(&E) -> String,
    {
        let line = self.print_line(to_string);
        let severity = self.severity();
        let depth = self.depth();
        match severity {
            Severity::Defect => error!(%severity, depth, "{line}"),
            Severity::Failure => warn!(%severity, depth, "{line}"),
        }
    }
}

//! The two classifications a problem can carry.

use std::fmt;
use std::str::FromStr;

use crate::errors::ParseSeverityError;

/// How a problem should be treated by whoever ends up holding it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Unexpected and internal. Its message must not reach end users.
    Defect,
    /// Expected and recoverable. Safe to show to end users.
    Failure,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Defect => "Defect",
            Severity::Failure => "Failure",
        }
    }

    pub fn is_defect(self) -> bool {
        self == Severity::Defect
    }

    pub fn is_failure(self) -> bool {
        self == Severity::Failure
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("defect") {
            Ok(Severity::Defect)
        } else if s.eq_ignore_ascii_case("failure") {
            Ok(Severity::Failure)
        } else {
            Err(ParseSeverityError {
                input: s.to_string(),
            })
        }
    }
}

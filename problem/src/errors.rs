#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity '{input}': expected 'defect' or 'failure'")]
pub struct ParseSeverityError {
    pub input: String,
}

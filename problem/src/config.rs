//! Rendering options for problems.

/// Options for the pretty and single-line renderings.
///
/// ```ignore
/// let config = RenderConfig::default().indent("    ").separator(" <- ");
/// let text = problem.pretty_print_with(&config, ToString::to_string);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    /// Prefix for each stack line in the pretty rendering.
    pub indent: String,

    /// Token placed between entries in the single-line rendering.
    pub separator: String,

    /// Line introducing the stack in the pretty rendering.
    pub stack_header: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
            separator: " | ".to_string(),
            stack_header: "stack:".to_string(),
        }
    }
}

impl RenderConfig {
    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn stack_header(mut self, header: impl Into<String>) -> Self {
        self.stack_header = header.into();
        self
    }
}

//! Builder configuration.

use asp_diagnostic::DiagnosticConfig;
use asp_ir::Symbol;

/// Settings fixed before the first reduction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Error limit and filtering for reported problems.
    pub diagnostics: DiagnosticConfig,
    /// `-c name=value` style constants, installed as overrides.
    pub constants: Vec<(String, Symbol)>,
}

impl BuilderConfig {
    /// Report everything (for testing).
    pub fn unlimited() -> Self {
        BuilderConfig {
            diagnostics: DiagnosticConfig::unlimited(),
            constants: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_constant(mut self, name: impl Into<String>, value: Symbol) -> Self {
        self.constants.push((name.into(), value));
        self
    }
}

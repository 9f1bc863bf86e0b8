//! Diagnostic system for error reporting.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Primary location (where it went wrong)
//! - Context labels and notes (why it's wrong)

mod diagnostic;
mod error_code;
pub mod queue;

pub use diagnostic::{redefinition, Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use queue::{DiagnosticConfig, DiagnosticQueue};

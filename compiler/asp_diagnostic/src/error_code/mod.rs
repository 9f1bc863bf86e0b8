//! Error codes for all front-end diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the area that reports it.

use std::fmt;

/// Error codes for all front-end diagnostics.
///
/// Format: E#### where first digit indicates the area:
/// - E1xxx: Theory term and theory atom errors
/// - E2xxx: Definition conflicts
/// - E3xxx: Input handling errors
/// - E9xxx: Internal errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Theory Errors (E1xxx)
    /// Operator not defined at this arity in the term definition
    E1001,
    /// Operator defined twice in one term definition
    E1002,
    /// Atom definition refers to a missing term definition
    E1003,
    /// Guard operator not allowed by the atom definition
    E1004,
    /// Theory atom used where its definition does not allow it
    E1005,

    // Definition Errors (E2xxx)
    /// Constant defined twice
    E2001,
    /// Theory defined twice
    E2002,
    /// Term definition repeated inside a theory
    E2003,
    /// Atom definition repeated inside a theory
    E2004,

    // Input Errors (E3xxx)
    /// Source included while already being read
    E3001,

    // Internal Errors (E9xxx)
    /// Too many errors
    E9002,
}

impl ErrorCode {
    pub const ALL: &[ErrorCode] = &[
        // Theory
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        // Definitions
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        // Input
        ErrorCode::E3001,
        // Internal
        ErrorCode::E9002,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            // Theory
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            // Definitions
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            // Input
            ErrorCode::E3001 => "E3001",
            // Internal
            ErrorCode::E9002 => "E9002",
        }
    }

    /// Short description used as the default diagnostic message.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "unknown theory operator",
            ErrorCode::E1002 => "duplicate theory operator definition",
            ErrorCode::E1003 => "undefined theory term definition",
            ErrorCode::E1004 => "unknown theory guard operator",
            ErrorCode::E1005 => "misplaced theory atom",
            ErrorCode::E2001 => "constant redefined",
            ErrorCode::E2002 => "theory redefined",
            ErrorCode::E2003 => "theory term definition redefined",
            ErrorCode::E2004 => "theory atom definition redefined",
            ErrorCode::E3001 => "include cycle",
            ErrorCode::E9002 => "too many errors",
        }
    }

    /// Check if this is a theory error (E1xxx).
    pub fn is_theory_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// Check if this is a definition conflict (E2xxx).
    pub fn is_definition_error(&self) -> bool {
        self.as_str().starts_with("E2")
    }

    /// Check if this is an input error (E3xxx).
    pub fn is_input_error(&self) -> bool {
        self.as_str().starts_with("E3")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

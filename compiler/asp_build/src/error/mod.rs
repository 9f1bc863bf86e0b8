//! Errors reported while building a program.
//!
//! None of these abort the build: the builder turns each into a
//! [`Diagnostic`] and carries on. Misuse of handles is not an error here;
//! it panics in the arena.

use std::fmt;

use asp_diagnostic::{redefinition, Diagnostic, ErrorCode};
use asp_ir::{Location, TheoryAtomType};

/// Where a theory atom occurs in a statement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Occurrence {
    Head,
    Body,
    /// Head of a rule with an empty body.
    Directive,
}

impl Occurrence {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Head => "in a rule head",
            Self::Body => "in a rule body",
            Self::Directive => "as a directive",
        }
    }

    /// Whether an atom declared with `kind` may occur here.
    pub const fn allows(self, kind: TheoryAtomType) -> bool {
        match kind {
            TheoryAtomType::Any => true,
            TheoryAtomType::Body => matches!(self, Self::Body),
            TheoryAtomType::Head => matches!(self, Self::Head | Self::Directive),
            TheoryAtomType::Directive => matches!(self, Self::Directive),
        }
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn arity_word(unary: &bool) -> &'static str {
    if *unary {
        "unary"
    } else {
        "binary"
    }
}

/// Problems with theory terms, theory atoms and theory definitions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TheoryError {
    /// Operator has no definition at the arity it is used with.
    #[error("unknown {} theory operator `{op}`", arity_word(.unary))]
    UnknownOperator {
        op: String,
        unary: bool,
        loc: Location,
    },

    /// Two operator definitions share a name and arity category.
    #[error("{} operator `{op}` defined twice in theory term `{term_def}`", arity_word(.unary))]
    DuplicateOperator {
        op: String,
        unary: bool,
        term_def: String,
        loc: Location,
        previous: Location,
    },

    /// Atom definition names a term definition its theory does not have.
    #[error("undefined theory term definition `{name}`")]
    UndefinedTermDefinition { name: String, loc: Location },

    /// Guard operator not listed in the atom definition.
    #[error("guard operator `{op}` is not allowed for theory atom `&{atom}`")]
    UnknownGuardOperator {
        op: String,
        atom: String,
        loc: Location,
    },

    /// Atom occurs where its definition's type forbids it.
    #[error("theory atom `&{atom}/{arity}` of type {kind} is not allowed {occurrence}")]
    MisplacedAtom {
        atom: String,
        arity: usize,
        kind: TheoryAtomType,
        occurrence: Occurrence,
        loc: Location,
    },
}

impl TheoryError {
    pub fn code(&self) -> ErrorCode {
        match self {
            TheoryError::UnknownOperator { .. } => ErrorCode::E1001,
            TheoryError::DuplicateOperator { .. } => ErrorCode::E1002,
            TheoryError::UndefinedTermDefinition { .. } => ErrorCode::E1003,
            TheoryError::UnknownGuardOperator { .. } => ErrorCode::E1004,
            TheoryError::MisplacedAtom { .. } => ErrorCode::E1005,
        }
    }

    pub fn location(&self) -> Location {
        match self {
            TheoryError::UnknownOperator { loc, .. }
            | TheoryError::DuplicateOperator { loc, .. }
            | TheoryError::UndefinedTermDefinition { loc, .. }
            | TheoryError::UnknownGuardOperator { loc, .. }
            | TheoryError::MisplacedAtom { loc, .. } => *loc,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            TheoryError::DuplicateOperator { loc, previous, .. } => diag
                .with_label(*loc, "defined again here")
                .with_secondary_label(*previous, "first defined here"),
            TheoryError::MisplacedAtom { loc, kind, .. } => diag
                .with_label(*loc, "theory atom used here")
                .with_note(format!("the atom is declared with type `{kind}`")),
            TheoryError::UnknownOperator { loc, .. } => {
                diag.with_label(*loc, "in this theory term")
            }
            TheoryError::UndefinedTermDefinition { loc, .. } => {
                diag.with_label(*loc, "referenced here")
            }
            TheoryError::UnknownGuardOperator { loc, .. } => diag.with_label(*loc, "in this guard"),
        }
    }
}

/// Everything the builder reports.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Theory(#[from] TheoryError),

    /// Two constant definitions of the same kind.
    #[error("constant `{name}` redefined")]
    ConstantRedefined {
        name: String,
        loc: Location,
        previous: Location,
    },

    #[error("theory `{name}` redefined")]
    TheoryRedefined {
        name: String,
        loc: Location,
        previous: Location,
    },

    #[error("theory term definition `{name}` redefined")]
    TermDefinitionRedefined {
        name: String,
        loc: Location,
        previous: Location,
    },

    #[error("theory atom definition `&{name}/{arity}` redefined")]
    AtomDefinitionRedefined {
        name: String,
        arity: usize,
        loc: Location,
        previous: Location,
    },

    /// A source was pushed while an earlier copy is still being read.
    #[error("include cycle: `{name}` is already being read")]
    IncludeCycle { name: String, loc: Location },
}

impl BuildError {
    pub fn code(&self) -> ErrorCode {
        match self {
            BuildError::Theory(err) => err.code(),
            BuildError::ConstantRedefined { .. } => ErrorCode::E2001,
            BuildError::TheoryRedefined { .. } => ErrorCode::E2002,
            BuildError::TermDefinitionRedefined { .. } => ErrorCode::E2003,
            BuildError::AtomDefinitionRedefined { .. } => ErrorCode::E2004,
            BuildError::IncludeCycle { .. } => ErrorCode::E3001,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            BuildError::Theory(err) => err.to_diagnostic(),
            BuildError::ConstantRedefined {
                name,
                loc,
                previous,
            } => redefinition(self.code(), "constant", name, *loc, *previous),
            BuildError::TheoryRedefined {
                name,
                loc,
                previous,
            } => redefinition(self.code(), "theory", name, *loc, *previous),
            BuildError::TermDefinitionRedefined {
                name,
                loc,
                previous,
            } => redefinition(self.code(), "theory term definition", name, *loc, *previous),
            BuildError::AtomDefinitionRedefined {
                name,
                arity,
                loc,
                previous,
            } => redefinition(
                self.code(),
                "theory atom definition",
                &format!("&{name}/{arity}"),
                *loc,
                *previous,
            ),
            BuildError::IncludeCycle { loc, .. } => Diagnostic::error(self.code())
                .with_message(self.to_string())
                .with_label(*loc, "included from here"),
        }
    }
}

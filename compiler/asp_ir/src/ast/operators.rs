//! Operators, relations and the small enums shared across the AST.

use std::fmt;

/// Unary term operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// `-t`; over a function symbol this is classical negation.
    Neg,
    /// `~t`, bitwise complement.
    Not,
    /// `|t|`.
    Abs,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Not => "~",
            Self::Abs => "|",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Binary term operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Bitwise
    Xor,
    Or,
    And,

    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Xor => "^",
            Self::Or => "?",
            Self::And => "&",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "\\",
            Self::Pow => "**",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Comparison relations.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Relation {
    Gt,
    Lt,
    Leq,
    Geq,
    Neq,
    Eq,
}

impl Relation {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Leq => "<=",
            Self::Geq => ">=",
            Self::Neq => "!=",
            Self::Eq => "=",
        }
    }

    /// Relation with the operands swapped: `a < b` holds iff `b > a`.
    #[must_use]
    pub const fn mirror(self) -> Self {
        match self {
            Self::Gt => Self::Lt,
            Self::Lt => Self::Gt,
            Self::Leq => Self::Geq,
            Self::Geq => Self::Leq,
            Self::Neq => Self::Neq,
            Self::Eq => Self::Eq,
        }
    }

    /// Complement: `not a < b` holds iff `a >= b`.
    #[must_use]
    pub const fn negate(self) -> Self {
        match self {
            Self::Gt => Self::Leq,
            Self::Lt => Self::Geq,
            Self::Leq => Self::Gt,
            Self::Geq => Self::Lt,
            Self::Neq => Self::Eq,
            Self::Eq => Self::Neq,
        }
    }
}

/// Default negation prefix of a literal.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Naf {
    #[default]
    Pos,
    Not,
    NotNot,
}

impl Naf {
    /// Prefix as written in source, including the trailing space.
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Pos => "",
            Self::Not => "not ",
            Self::NotNot => "not not ",
        }
    }
}

/// Aggregate functions. `SumPositive` is `#sum+`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AggregateFunction {
    Count,
    Sum,
    SumPositive,
    Min,
    Max,
}

impl AggregateFunction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Count => "#count",
            Self::Sum => "#sum",
            Self::SumPositive => "#sum+",
            Self::Min => "#min",
            Self::Max => "#max",
        }
    }
}

/// Bracket style of a theory tuple.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TupleKind {
    /// `( ... )`
    Paren,
    /// `{ ... }`
    Brace,
    /// `[ ... ]`
    Bracket,
}

impl TupleKind {
    pub const fn delimiters(self) -> (char, char) {
        match self {
            Self::Paren => ('(', ')'),
            Self::Brace => ('{', '}'),
            Self::Bracket => ('[', ']'),
        }
    }
}

/// Arity and associativity of a theory operator definition.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TheoryOperatorType {
    Unary,
    BinaryLeft,
    BinaryRight,
}

impl TheoryOperatorType {
    #[inline]
    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Unary)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unary => "unary",
            Self::BinaryLeft => "binary,left",
            Self::BinaryRight => "binary,right",
        }
    }
}

/// Where atoms of a theory atom definition may occur.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TheoryAtomType {
    Head,
    Body,
    Any,
    /// Only as a standalone statement (`&atom{...}.`).
    Directive,
}

impl TheoryAtomType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::Body => "body",
            Self::Any => "any",
            Self::Directive => "directive",
        }
    }
}

impl fmt::Display for TheoryAtomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Non-ground terms.

use crate::{Location, Name, Symbol, VarCell};

use super::{BinaryOp, Signature, UnaryOp};

/// A term with its source location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Term {
    pub kind: TermKind,
    pub loc: Location,
}

/// Term variants.
///
/// Pools appear only where the builder introduces them (alternatives of a
/// parenthesised tuple, alternative argument lists of a call, alternatives
/// under a unary operator); every other node keeps a pool child opaque.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TermKind {
    Value(Symbol),
    Variable {
        name: Name,
        cell: VarCell,
    },
    Unary {
        op: UnaryOp,
        arg: Box<Term>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Term>,
        rhs: Box<Term>,
    },
    /// `lo..hi`
    Range {
        lo: Box<Term>,
        hi: Box<Term>,
    },
    /// `f(args)`, or `@f(args)` when `external` is set.
    Function {
        name: Name,
        args: Vec<Term>,
        external: bool,
    },
    Tuple {
        elems: Vec<Term>,
    },
    /// Alternatives, always at least two.
    Pool(Vec<Term>),
}

impl Term {
    #[inline]
    pub fn new(kind: TermKind, loc: Location) -> Self {
        Term { kind, loc }
    }

    pub fn value(symbol: Symbol, loc: Location) -> Self {
        Term::new(TermKind::Value(symbol), loc)
    }

    pub fn is_pool(&self) -> bool {
        matches!(self.kind, TermKind::Pool(_))
    }

    /// Predicate signature when the term is used as an atom.
    ///
    /// `-p(X)` is the classically negated atom `p/1`.
    pub fn signature(&self) -> Option<Signature> {
        match &self.kind {
            TermKind::Value(symbol) => symbol
                .signature()
                .map(|(name, arity, positive)| Signature::new(name, arity, positive)),
            TermKind::Function {
                name,
                args,
                external: false,
            } if *name != Name::EMPTY => Some(Signature::new(*name, args.len(), true)),
            TermKind::Unary {
                op: UnaryOp::Neg,
                arg,
            } => arg.signature().filter(|sig| sig.positive).map(|sig| Signature {
                positive: false,
                ..sig
            }),
            _ => None,
        }
    }
}

//! Theory terms, theory atoms and `#theory` definitions.
//!
//! Operators inside theory terms are user defined. The scanner hands them
//! over as flat `operator* term` segments ([`RawTheoryTerm`]); once the
//! matching [`TheoryTermDef`] is known the segments are resolved into
//! [`TheoryTermKind::Unary`] / [`TheoryTermKind::Binary`] trees.

use smallvec::SmallVec;

use crate::{Location, Name, Symbol, VarCell};

use super::{Literal, Signature, Term, TheoryAtomType, TheoryOperatorType, TupleKind};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TheoryTerm {
    pub kind: TheoryTermKind,
    pub loc: Location,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TheoryTermKind {
    Symbol(Symbol),
    Variable {
        name: Name,
        cell: VarCell,
    },
    Tuple {
        kind: TupleKind,
        elems: Vec<TheoryTerm>,
    },
    Function {
        name: Name,
        args: Vec<TheoryTerm>,
    },
    Unary {
        op: Name,
        arg: Box<TheoryTerm>,
    },
    Binary {
        op: Name,
        lhs: Box<TheoryTerm>,
        rhs: Box<TheoryTerm>,
    },
    /// Operator sequence not yet resolved against a term definition.
    Unparsed(RawTheoryTerm),
}

impl TheoryTerm {
    #[inline]
    pub fn new(kind: TheoryTermKind, loc: Location) -> Self {
        TheoryTerm { kind, loc }
    }

    /// Whether an unparsed segment remains anywhere in the tree.
    pub fn is_unparsed(&self) -> bool {
        match &self.kind {
            TheoryTermKind::Symbol(_) | TheoryTermKind::Variable { .. } => false,
            TheoryTermKind::Unparsed(_) => true,
            TheoryTermKind::Tuple { elems: args, .. } | TheoryTermKind::Function { args, .. } => {
                args.iter().any(TheoryTerm::is_unparsed)
            }
            TheoryTermKind::Unary { arg, .. } => arg.is_unparsed(),
            TheoryTermKind::Binary { lhs, rhs, .. } => lhs.is_unparsed() || rhs.is_unparsed(),
        }
    }
}

/// `ops term`: operators preceding one operand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawSegment {
    pub ops: SmallVec<[Name; 2]>,
    pub term: TheoryTerm,
}

/// Flat `operator* term (operator+ term)*` sequence in source order.
///
/// Never empty once built: the first segment is created together with the
/// raw term.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct RawTheoryTerm {
    pub segments: Vec<RawSegment>,
}

impl RawTheoryTerm {
    pub fn push(&mut self, ops: SmallVec<[Name; 2]>, term: TheoryTerm) {
        self.segments.push(RawSegment { ops, term });
    }

    /// Location from the first to the last operand.
    pub fn location(&self) -> Location {
        match (self.segments.first(), self.segments.last()) {
            (Some(first), Some(last)) => first.term.loc.merge(last.term.loc),
            _ => Location::DUMMY,
        }
    }
}

/// `tuple : cond` inside a theory atom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TheoryElem {
    pub tuple: Vec<TheoryTerm>,
    pub cond: Vec<Literal>,
}

/// `op term` after the element list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TheoryGuard {
    pub op: Name,
    pub term: TheoryTerm,
}

/// `&name(args) { elems } op term`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TheoryAtom {
    pub name: Term,
    pub elems: Vec<TheoryElem>,
    pub guard: Option<TheoryGuard>,
    pub loc: Location,
}

impl TheoryAtom {
    /// Name and arity used to find the atom's definition.
    pub fn signature(&self) -> Option<Signature> {
        self.name.signature()
    }

    /// Whether any element or the guard still holds unresolved operators.
    pub fn is_unparsed(&self) -> bool {
        self.elems
            .iter()
            .flat_map(|elem| elem.tuple.iter())
            .chain(self.guard.iter().map(|guard| &guard.term))
            .any(TheoryTerm::is_unparsed)
    }
}

/// `op : priority, type`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TheoryOperatorDef {
    pub name: Name,
    pub priority: u32,
    pub kind: TheoryOperatorType,
    pub loc: Location,
}

/// `name { op_def; ... }`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TheoryTermDef {
    pub name: Name,
    pub ops: Vec<TheoryOperatorDef>,
    pub loc: Location,
}

impl TheoryTermDef {
    /// Operator definition usable in unary or binary position.
    pub fn lookup(&self, op: Name, unary: bool) -> Option<&TheoryOperatorDef> {
        self.ops
            .iter()
            .find(|def| def.name == op && def.kind.is_unary() == unary)
    }

    /// First pair of definitions sharing a name and arity category
    /// (left and right associative binaries share the binary category).
    pub fn find_duplicate(&self) -> Option<(&TheoryOperatorDef, &TheoryOperatorDef)> {
        self.ops.iter().enumerate().find_map(|(i, later)| {
            self.ops[..i]
                .iter()
                .find(|earlier| {
                    earlier.name == later.name
                        && earlier.kind.is_unary() == later.kind.is_unary()
                })
                .map(|earlier| (earlier, later))
        })
    }
}

/// Guard of a theory atom definition: allowed operators and the term
/// definition of the guard term.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TheoryGuardDef {
    pub ops: Vec<Name>,
    pub term_def: Name,
}

/// `&name/arity : term_def, { ops }, guard_def, type`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TheoryAtomDef {
    pub name: Name,
    pub arity: usize,
    pub term_def: Name,
    pub kind: TheoryAtomType,
    pub guard: Option<TheoryGuardDef>,
    pub loc: Location,
}

/// `#theory name { ... }.`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TheoryDefinition {
    pub name: Name,
    pub term_defs: Vec<TheoryTermDef>,
    pub atom_defs: Vec<TheoryAtomDef>,
    pub loc: Location,
}

impl TheoryDefinition {
    pub fn term_def(&self, name: Name) -> Option<&TheoryTermDef> {
        self.term_defs.iter().find(|def| def.name == name)
    }

    pub fn atom_def(&self, name: Name, arity: usize) -> Option<&TheoryAtomDef> {
        self.atom_defs
            .iter()
            .find(|def| def.name == name && def.arity == arity)
    }
}

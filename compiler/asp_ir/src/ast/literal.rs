//! Literals, rule heads and rule bodies.

use crate::Location;

use super::{AggregateFunction, Naf, Relation, Term, TheoryAtom};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Literal {
    pub kind: LiteralKind,
    pub loc: Location,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LiteralKind {
    /// `#true` / `#false`
    Boolean(bool),
    /// Atom, possibly under default negation.
    Predicate { naf: Naf, atom: Term },
    /// `lhs rel rhs`
    Comparison {
        naf: Naf,
        rel: Relation,
        lhs: Term,
        rhs: Term,
    },
}

impl Literal {
    #[inline]
    pub fn new(kind: LiteralKind, loc: Location) -> Self {
        Literal { kind, loc }
    }
}

/// `lit : cond`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CondLit {
    pub lit: Literal,
    pub cond: Vec<Literal>,
}

/// Body aggregate element `tuple : cond`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BodyAggrElem {
    pub tuple: Vec<Term>,
    pub cond: Vec<Literal>,
}

/// Head aggregate element `tuple : lit : cond`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadAggrElem {
    pub tuple: Vec<Term>,
    pub lit: Literal,
    pub cond: Vec<Literal>,
}

/// One aggregate bound, read as `aggregate rel term`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bound {
    pub rel: Relation,
    pub term: Term,
}

/// Rule head.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Head {
    pub kind: HeadKind,
    pub loc: Location,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeadKind {
    Literal(Literal),
    /// `a ; b : c`
    Disjunction(Vec<CondLit>),
    /// `#sum { t : l : c }`
    TupleAggregate {
        fun: AggregateFunction,
        bounds: Vec<Bound>,
        elems: Vec<HeadAggrElem>,
    },
    /// `{ l : c }`
    LitAggregate {
        fun: AggregateFunction,
        bounds: Vec<Bound>,
        elems: Vec<CondLit>,
    },
    Theory(TheoryAtom),
}

impl Head {
    #[inline]
    pub fn new(kind: HeadKind, loc: Location) -> Self {
        Head { kind, loc }
    }

    /// The `#false` head of an integrity constraint.
    pub fn falsity(loc: Location) -> Self {
        Head::new(
            HeadKind::Literal(Literal::new(LiteralKind::Boolean(false), loc)),
            loc,
        )
    }
}

/// One conjunct of a rule body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BodyElem {
    pub kind: BodyElemKind,
    pub loc: Location,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BodyElemKind {
    Literal(Literal),
    /// `l : c` in a body
    Conjunction(CondLit),
    TupleAggregate {
        naf: Naf,
        fun: AggregateFunction,
        bounds: Vec<Bound>,
        elems: Vec<BodyAggrElem>,
    },
    LitAggregate {
        naf: Naf,
        fun: AggregateFunction,
        bounds: Vec<Bound>,
        elems: Vec<CondLit>,
    },
    Theory {
        naf: Naf,
        atom: TheoryAtom,
    },
}

impl BodyElem {
    #[inline]
    pub fn new(kind: BodyElemKind, loc: Location) -> Self {
        BodyElem { kind, loc }
    }
}

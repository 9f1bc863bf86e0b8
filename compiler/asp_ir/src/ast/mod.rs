//! Owned syntax tree produced by the builder.
//!
//! Every node carries its [`Location`](crate::Location). Variables carry the
//! [`VarCell`](crate::VarCell) shared by all occurrences of the same name.

mod literal;
mod operators;
mod render;
mod statement;
mod term;
mod theory;

pub use literal::{
    BodyAggrElem, BodyElem, BodyElemKind, Bound, CondLit, Head, HeadAggrElem, HeadKind, Literal,
    LiteralKind,
};
pub use operators::{
    AggregateFunction, BinaryOp, Naf, Relation, TheoryAtomType, TheoryOperatorType, TupleKind,
    UnaryOp,
};
pub use render::Render;
pub use statement::{Signature, Statement, StatementKind};
pub use term::{Term, TermKind};
pub use theory::{
    RawSegment, RawTheoryTerm, TheoryAtom, TheoryAtomDef, TheoryDefinition, TheoryElem,
    TheoryGuard, TheoryGuardDef, TheoryOperatorDef, TheoryTermDef, TheoryTerm, TheoryTermKind,
};

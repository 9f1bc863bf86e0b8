//! Core data structures for the logic-program front end.
//!
//! This crate holds everything the builder hands back to the grounder:
//! - Generation-checked arenas and the handle types indexing them
//! - Interned names and source locations
//! - Ground symbols
//! - The owned AST (terms, literals, aggregates, theory atoms, statements)
//!
//! # Design Philosophy
//!
//! - **Handles during construction**: grammar reductions pass small `Copy`
//!   handles around; every handle is consumed by exactly one parent reduction.
//! - **Owned trees afterwards**: finished statements own their subtrees so the
//!   grounder can take them by value.
//! - **Intern names**: identifiers and strings become `Name(u32)`.

pub mod arena;
pub mod ast;
mod cell;
mod interner;
mod location;
mod symbol;

pub use arena::{ArenaId, Indexed, StaleHandle, StaleReason};
pub use ast::{
    AggregateFunction, BinaryOp, BodyAggrElem, BodyElem, BodyElemKind, Bound, CondLit, Head,
    HeadAggrElem, HeadKind, Literal, LiteralKind, Naf, RawSegment, RawTheoryTerm, Relation, Render,
    Signature, Statement, StatementKind, Term, TermKind, TheoryAtom, TheoryAtomDef, TheoryAtomType,
    TheoryDefinition, TheoryElem, TheoryGuard, TheoryGuardDef, TheoryOperatorDef,
    TheoryOperatorType, TheoryTerm, TheoryTermDef, TheoryTermKind, TupleKind, UnaryOp,
};
pub use cell::VarCell;
pub use interner::{InternError, Name, SharedInterner, StringInterner};
pub use location::{Location, Position};
pub use symbol::Symbol;

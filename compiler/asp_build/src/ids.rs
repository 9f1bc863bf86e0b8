//! Handles into the builder's arenas.
//!
//! One handle type per arena. Each is consumed by exactly one later builder
//! call; the arena detects reuse of a consumed handle.

use asp_ir::define_id;

define_id! {
    /// A term.
    pub struct TermId;
}

define_id! {
    /// A list of terms (arguments, tuple elements, pool alternatives).
    pub struct TermVecId;
}

define_id! {
    /// Alternative argument lists of a call, `f(a;b,c)`.
    pub struct TermVecVecId;
}

define_id! {
    pub struct LitId;
}

define_id! {
    pub struct LitVecId;
}

define_id! {
    /// Conditional literals `l : c` of a disjunction or choice.
    pub struct CondLitVecId;
}

define_id! {
    /// A rule body under construction.
    pub struct BodyId;
}

define_id! {
    pub struct HeadId;
}

define_id! {
    /// Aggregate bounds.
    pub struct BoundVecId;
}

define_id! {
    pub struct BodyAggrElemVecId;
}

define_id! {
    pub struct HeadAggrElemVecId;
}

define_id! {
    /// Program parameters of `#program name(params).`
    pub struct IdVecId;
}

define_id! {
    pub struct TheoryTermId;
}

define_id! {
    /// Operator names preceding a theory operand.
    pub struct TheoryOpVecId;
}

define_id! {
    /// A flat `op* term (op+ term)*` sequence.
    pub struct TheoryOptermId;
}

define_id! {
    pub struct TheoryOptermVecId;
}

define_id! {
    pub struct TheoryElemVecId;
}

define_id! {
    pub struct TheoryAtomId;
}

define_id! {
    pub struct TheoryOpDefId;
}

define_id! {
    pub struct TheoryOpDefVecId;
}

define_id! {
    pub struct TheoryTermDefId;
}

define_id! {
    pub struct TheoryAtomDefId;
}

define_id! {
    /// Term and atom definitions collected for one `#theory`.
    pub struct TheoryDefVecId;
}

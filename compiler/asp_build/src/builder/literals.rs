//! Literals, bodies, heads, bounds and aggregate elements.

use tracing::trace;

use asp_ir::{
    AggregateFunction, BodyAggrElem, BodyElem, BodyElemKind, Bound, CondLit, Head, HeadAggrElem,
    HeadKind, Literal, LiteralKind, Location, Naf, Relation, TheoryAtom,
};

use super::ProgramBuilder;
use crate::ids::{
    BodyAggrElemVecId, BodyId, BoundVecId, CondLitVecId, HeadAggrElemVecId, HeadId, IdVecId,
    LitId, LitVecId, TermId, TermVecId,
};
use crate::{Aggregate, AggregateElements};

/// Aggregate with its payload and bounds taken out of the arenas.
enum Decoded {
    BodyTuples {
        fun: AggregateFunction,
        bounds: Vec<Bound>,
        elems: Vec<BodyAggrElem>,
    },
    HeadTuples {
        fun: AggregateFunction,
        bounds: Vec<Bound>,
        elems: Vec<HeadAggrElem>,
    },
    Conditions {
        fun: AggregateFunction,
        bounds: Vec<Bound>,
        elems: Vec<CondLit>,
    },
    Theory(TheoryAtom),
}

impl ProgramBuilder {
    pub fn lit_bool(&mut self, loc: Location, value: bool) -> LitId {
        self.lits
            .allocate_with(Literal::new(LiteralKind::Boolean(value), loc))
    }

    pub fn lit_pred(&mut self, loc: Location, naf: Naf, atom: TermId) -> LitId {
        let atom = self.terms.take(atom);
        self.lits
            .allocate_with(Literal::new(LiteralKind::Predicate { naf, atom }, loc))
    }

    pub fn lit_rel(
        &mut self,
        loc: Location,
        naf: Naf,
        rel: Relation,
        lhs: TermId,
        rhs: TermId,
    ) -> LitId {
        let lhs = self.terms.take(lhs);
        let rhs = self.terms.take(rhs);
        self.lits.allocate_with(Literal::new(
            LiteralKind::Comparison { naf, rel, lhs, rhs },
            loc,
        ))
    }

    pub fn litvec(&mut self) -> LitVecId {
        self.litvecs.allocate()
    }

    pub fn litvec_push(&mut self, vec: LitVecId, lit: LitId) -> LitVecId {
        let lit = self.lits.take(lit);
        self.litvecs.get_mut(vec).push(lit);
        vec
    }

    pub fn condlitvec(&mut self) -> CondLitVecId {
        self.condlitvecs.allocate()
    }

    /// Append `lit : cond`.
    pub fn condlitvec_push(
        &mut self,
        vec: CondLitVecId,
        lit: LitId,
        cond: LitVecId,
    ) -> CondLitVecId {
        let lit = self.lits.take(lit);
        let cond = self.litvecs.take(cond);
        self.condlitvecs.get_mut(vec).push(CondLit { lit, cond });
        vec
    }

    pub fn body(&mut self) -> BodyId {
        self.bodies.allocate()
    }

    pub fn body_lit(&mut self, body: BodyId, lit: LitId) -> BodyId {
        let lit = self.lits.take(lit);
        let loc = lit.loc;
        self.bodies
            .get_mut(body)
            .push(BodyElem::new(BodyElemKind::Literal(lit), loc));
        body
    }

    /// `lit : cond` as a body element.
    pub fn body_conjunction(
        &mut self,
        body: BodyId,
        loc: Location,
        lit: LitId,
        cond: LitVecId,
    ) -> BodyId {
        let lit = self.lits.take(lit);
        let cond = self.litvecs.take(cond);
        self.bodies.get_mut(body).push(BodyElem::new(
            BodyElemKind::Conjunction(CondLit { lit, cond }),
            loc,
        ));
        body
    }

    pub fn body_aggr(
        &mut self,
        body: BodyId,
        loc: Location,
        naf: Naf,
        aggr: Aggregate,
        bounds: BoundVecId,
    ) -> BodyId {
        let kind = match self.decode_aggregate(aggr, bounds) {
            Decoded::BodyTuples { fun, bounds, elems } => BodyElemKind::TupleAggregate {
                naf,
                fun,
                bounds,
                elems,
            },
            Decoded::Conditions { fun, bounds, elems } => BodyElemKind::LitAggregate {
                naf,
                fun,
                bounds,
                elems,
            },
            Decoded::Theory(atom) => BodyElemKind::Theory { naf, atom },
            Decoded::HeadTuples { .. } => {
                panic!("head aggregate elements used in a body at {loc:?}")
            }
        };
        self.bodies.get_mut(body).push(BodyElem::new(kind, loc));
        body
    }

    pub fn head_lit(&mut self, lit: LitId) -> HeadId {
        let lit = self.lits.take(lit);
        let loc = lit.loc;
        self.heads
            .allocate_with(Head::new(HeadKind::Literal(lit), loc))
    }

    /// `a ; b : c`
    pub fn head_disjunction(&mut self, loc: Location, elems: CondLitVecId) -> HeadId {
        let elems = self.condlitvecs.take(elems);
        self.heads
            .allocate_with(Head::new(HeadKind::Disjunction(elems), loc))
    }

    pub fn head_aggr(&mut self, loc: Location, aggr: Aggregate, bounds: BoundVecId) -> HeadId {
        let kind = match self.decode_aggregate(aggr, bounds) {
            Decoded::HeadTuples { fun, bounds, elems } => {
                HeadKind::TupleAggregate { fun, bounds, elems }
            }
            Decoded::Conditions { fun, bounds, elems } => {
                HeadKind::LitAggregate { fun, bounds, elems }
            }
            Decoded::Theory(atom) => HeadKind::Theory(atom),
            Decoded::BodyTuples { .. } => {
                panic!("body aggregate elements used in a head at {loc:?}")
            }
        };
        self.heads.allocate_with(Head::new(kind, loc))
    }

    /// Take an aggregate's payload and bounds out of the arenas.
    fn decode_aggregate(&mut self, aggr: Aggregate, bounds: BoundVecId) -> Decoded {
        let bounds = self.boundvecs.take(bounds);
        match aggr {
            Aggregate::Theory(atom) => {
                if !bounds.is_empty() {
                    panic!("theory atom with {} aggregate bounds", bounds.len());
                }
                Decoded::Theory(self.theory_atoms.take(atom))
            }
            Aggregate::Elements { function, elements } => {
                trace!(fun = function.as_str(), bounds = bounds.len(), "aggregate");
                match elements {
                    AggregateElements::Body(elems) => Decoded::BodyTuples {
                        fun: function,
                        bounds,
                        elems: self.body_aggr_elemvecs.take(elems),
                    },
                    AggregateElements::Head(elems) => Decoded::HeadTuples {
                        fun: function,
                        bounds,
                        elems: self.head_aggr_elemvecs.take(elems),
                    },
                    AggregateElements::Conditions(elems) => Decoded::Conditions {
                        fun: function,
                        bounds,
                        elems: self.condlitvecs.take(elems),
                    },
                }
            }
        }
    }

    pub fn boundvec(&mut self) -> BoundVecId {
        self.boundvecs.allocate()
    }

    /// `term rel aggregate`, stored as `aggregate rel' term`.
    pub fn bound_lower(&mut self, vec: BoundVecId, rel: Relation, term: TermId) -> BoundVecId {
        let term = self.terms.take(term);
        self.boundvecs.get_mut(vec).push(Bound {
            rel: rel.mirror(),
            term,
        });
        vec
    }

    /// `aggregate rel term`
    pub fn bound_upper(&mut self, vec: BoundVecId, rel: Relation, term: TermId) -> BoundVecId {
        let term = self.terms.take(term);
        self.boundvecs.get_mut(vec).push(Bound { rel, term });
        vec
    }

    pub fn body_aggr_elemvec(&mut self) -> BodyAggrElemVecId {
        self.body_aggr_elemvecs.allocate()
    }

    /// Append `tuple : cond`.
    pub fn body_aggr_elemvec_push(
        &mut self,
        vec: BodyAggrElemVecId,
        tuple: TermVecId,
        cond: LitVecId,
    ) -> BodyAggrElemVecId {
        let tuple = self.termvecs.take(tuple);
        let cond = self.litvecs.take(cond);
        self.body_aggr_elemvecs
            .get_mut(vec)
            .push(BodyAggrElem { tuple, cond });
        vec
    }

    pub fn head_aggr_elemvec(&mut self) -> HeadAggrElemVecId {
        self.head_aggr_elemvecs.allocate()
    }

    /// Append `tuple : lit : cond`.
    pub fn head_aggr_elemvec_push(
        &mut self,
        vec: HeadAggrElemVecId,
        tuple: TermVecId,
        lit: LitId,
        cond: LitVecId,
    ) -> HeadAggrElemVecId {
        let tuple = self.termvecs.take(tuple);
        let lit = self.lits.take(lit);
        let cond = self.litvecs.take(cond);
        self.head_aggr_elemvecs
            .get_mut(vec)
            .push(HeadAggrElem { tuple, lit, cond });
        vec
    }

    pub fn idvec(&mut self) -> IdVecId {
        self.idvecs.allocate()
    }

    pub fn idvec_push(&mut self, vec: IdVecId, loc: Location, id: &str) -> IdVecId {
        trace!(id, ?loc, "program parameter");
        let id = self.interner.intern(id);
        self.idvecs.get_mut(vec).push(id);
        vec
    }
}

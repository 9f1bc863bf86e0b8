//! The aggregate handle shared by head and body productions.
//!
//! Grammar reductions for aggregates do not know yet whether the aggregate
//! ends up in a head or a body, and bounds are attached by a later
//! reduction. [`Aggregate`] carries the function and the element payload
//! until `head_aggr` or `body_aggr` decodes it.

use asp_ir::AggregateFunction;

use crate::ids::{BodyAggrElemVecId, CondLitVecId, HeadAggrElemVecId, TheoryAtomId};

/// Element payload of a non-theory aggregate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AggregateElements {
    /// `#sum { t : c }` elements; body only.
    Body(BodyAggrElemVecId),
    /// `#sum { t : l : c }` elements; head only.
    Head(HeadAggrElemVecId),
    /// `{ l : c }` conditional literals, in either position.
    Conditions(CondLitVecId),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Aggregate {
    Elements {
        function: AggregateFunction,
        elements: AggregateElements,
    },
    /// `&atom { ... }`; never bounded.
    Theory(TheoryAtomId),
}

impl Aggregate {
    pub fn body_tuples(function: AggregateFunction, elems: BodyAggrElemVecId) -> Self {
        Aggregate::Elements {
            function,
            elements: AggregateElements::Body(elems),
        }
    }

    pub fn head_tuples(function: AggregateFunction, elems: HeadAggrElemVecId) -> Self {
        Aggregate::Elements {
            function,
            elements: AggregateElements::Head(elems),
        }
    }

    /// Set aggregate over conditional literals. With `Count` this is a
    /// choice.
    pub fn conditions(function: AggregateFunction, elems: CondLitVecId) -> Self {
        Aggregate::Elements {
            function,
            elements: AggregateElements::Conditions(elems),
        }
    }

    pub fn theory(atom: TheoryAtomId) -> Self {
        Aggregate::Theory(atom)
    }

    pub fn is_choice(&self) -> bool {
        matches!(
            self,
            Aggregate::Elements {
                elements: AggregateElements::Conditions(_),
                ..
            }
        )
    }

    /// Aggregate function; `None` for theory atoms.
    pub fn function(&self) -> Option<AggregateFunction> {
        match self {
            Aggregate::Elements { function, .. } => Some(*function),
            Aggregate::Theory(_) => None,
        }
    }
}

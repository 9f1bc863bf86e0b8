//! Terms, term vectors and pooling.
//!
//! Pools are introduced at exactly three points: [`term_pool`], for the
//! alternatives of a parenthesised tuple; [`term_call`], one function term
//! per alternative argument list; and [`term_unary_pool`], the operator
//! applied to each alternative. A single alternative is returned as is.
//! Every other constructor stores a pool child as an opaque subterm.
//!
//! [`term_pool`]: ProgramBuilder::term_pool
//! [`term_call`]: ProgramBuilder::term_call
//! [`term_unary_pool`]: ProgramBuilder::term_unary_pool

use tracing::trace;

use asp_ir::{BinaryOp, Location, Symbol, Term, TermKind, UnaryOp};

use super::ProgramBuilder;
use crate::ids::{TermId, TermVecId, TermVecVecId};

impl ProgramBuilder {
    pub fn term_value(&mut self, loc: Location, value: Symbol) -> TermId {
        self.terms.allocate_with(Term::value(value, loc))
    }

    pub fn term_var(&mut self, loc: Location, name: &str) -> TermId {
        let (name, cell) = self.variable(name);
        self.terms
            .allocate_with(Term::new(TermKind::Variable { name, cell }, loc))
    }

    pub fn term_unary(&mut self, loc: Location, op: UnaryOp, arg: TermId) -> TermId {
        let arg = Box::new(self.terms.take(arg));
        self.terms
            .allocate_with(Term::new(TermKind::Unary { op, arg }, loc))
    }

    /// `op(a;b)`: the operator applied to each alternative.
    pub fn term_unary_pool(&mut self, loc: Location, op: UnaryOp, args: TermVecId) -> TermId {
        let alternatives = self
            .termvecs
            .take(args)
            .into_iter()
            .map(|arg| {
                Term::new(
                    TermKind::Unary {
                        op,
                        arg: Box::new(arg),
                    },
                    loc,
                )
            })
            .collect();
        self.pool(loc, alternatives)
    }

    pub fn term_binary(&mut self, loc: Location, op: BinaryOp, lhs: TermId, rhs: TermId) -> TermId {
        let lhs = Box::new(self.terms.take(lhs));
        let rhs = Box::new(self.terms.take(rhs));
        self.terms
            .allocate_with(Term::new(TermKind::Binary { op, lhs, rhs }, loc))
    }

    /// `lo..hi`
    pub fn term_range(&mut self, loc: Location, lo: TermId, hi: TermId) -> TermId {
        let lo = Box::new(self.terms.take(lo));
        let hi = Box::new(self.terms.take(hi));
        self.terms
            .allocate_with(Term::new(TermKind::Range { lo, hi }, loc))
    }

    /// `f(a;b,c)`: one function term per argument list, `@f(...)` when
    /// `external`.
    pub fn term_call(
        &mut self,
        loc: Location,
        name: &str,
        args: TermVecVecId,
        external: bool,
    ) -> TermId {
        let name = self.interner.intern(name);
        let mut lists = self.termvecvecs.take(args);
        if lists.is_empty() {
            lists.push(Vec::new());
        }
        let alternatives = lists
            .into_iter()
            .map(|args| {
                Term::new(
                    TermKind::Function {
                        name,
                        args,
                        external,
                    },
                    loc,
                )
            })
            .collect();
        self.pool(loc, alternatives)
    }

    /// `(a, b)`. A single element without a trailing comma is just a
    /// parenthesised term.
    pub fn term_tuple(&mut self, loc: Location, elems: TermVecId, force_tuple: bool) -> TermId {
        let mut elems = self.termvecs.take(elems);
        if elems.len() == 1 && !force_tuple {
            if let Some(elem) = elems.pop() {
                return self.terms.allocate_with(elem);
            }
        }
        self.terms
            .allocate_with(Term::new(TermKind::Tuple { elems }, loc))
    }

    /// `(a; b)`: alternatives of a parenthesised tuple.
    pub fn term_pool(&mut self, loc: Location, alternatives: TermVecId) -> TermId {
        let alternatives = self.termvecs.take(alternatives);
        if alternatives.is_empty() {
            return self
                .terms
                .allocate_with(Term::new(TermKind::Tuple { elems: alternatives }, loc));
        }
        self.pool(loc, alternatives)
    }

    fn pool(&mut self, loc: Location, mut alternatives: Vec<Term>) -> TermId {
        let term = match alternatives.len() {
            0 => panic!("pool without alternatives"),
            1 => {
                trace!("single alternative, no pool");
                alternatives.swap_remove(0)
            }
            n => {
                trace!(alternatives = n, "pool");
                Term::new(TermKind::Pool(alternatives), loc)
            }
        };
        self.terms.allocate_with(term)
    }

    pub fn termvec(&mut self) -> TermVecId {
        self.termvecs.allocate()
    }

    pub fn termvec_push(&mut self, vec: TermVecId, term: TermId) -> TermVecId {
        let term = self.terms.take(term);
        self.termvecs.get_mut(vec).push(term);
        vec
    }

    pub fn termvecvec(&mut self) -> TermVecVecId {
        self.termvecvecs.allocate()
    }

    pub fn termvecvec_push(&mut self, vv: TermVecVecId, vec: TermVecId) -> TermVecVecId {
        let vec = self.termvecs.take(vec);
        self.termvecvecs.get_mut(vv).push(vec);
        vv
    }
}

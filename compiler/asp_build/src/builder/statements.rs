//! Statement emission and constant definitions.

use tracing::debug;

use asp_ir::{Head, Location, Signature, Statement, StatementKind, Symbol, Term};

use super::ProgramBuilder;
use crate::ids::{BodyId, HeadId, IdVecId, TermId, TermVecId, TermVecVecId};
use crate::program::Define;

impl ProgramBuilder {
    fn emit(&mut self, stmt: Statement) {
        debug!(kind = stmt.keyword(), loc = ?stmt.loc, "statement");
        self.statements.push(stmt);
    }

    /// `head :- body.`
    pub fn rule(&mut self, loc: Location, head: HeadId, body: BodyId) {
        let head = self.heads.take(head);
        let body = self.bodies.take(body);
        self.emit(Statement::new(StatementKind::Rule { head, body }, loc));
    }

    /// `:- body.`
    pub fn integrity(&mut self, loc: Location, body: BodyId) {
        let body = self.bodies.take(body);
        self.emit(Statement::new(
            StatementKind::Rule {
                head: Head::falsity(loc),
                body,
            },
            loc,
        ));
    }

    /// `:~ body. [weight@priority, tuple]` and `#minimize` elements.
    pub fn optimize(
        &mut self,
        loc: Location,
        weight: TermId,
        priority: TermId,
        tuple: TermVecId,
        body: BodyId,
    ) {
        let weight = self.terms.take(weight);
        let priority = self.terms.take(priority);
        let tuple = self.termvecs.take(tuple);
        let body = self.bodies.take(body);
        self.emit(Statement::new(
            StatementKind::Optimize {
                weight,
                priority,
                tuple,
                body,
            },
            loc,
        ));
    }

    /// `#show name/arity.`; `#show.` is the empty name with arity 0.
    pub fn show_signature(&mut self, loc: Location, name: &str, arity: usize, positive: bool) {
        let name = self.interner.intern(name);
        self.emit(Statement::new(
            StatementKind::ShowSignature(Signature::new(name, arity, positive)),
            loc,
        ));
    }

    /// `#show term : body.`
    pub fn show(&mut self, loc: Location, term: TermId, body: BodyId) {
        let term = self.terms.take(term);
        let body = self.bodies.take(body);
        self.emit(Statement::new(StatementKind::Show { term, body }, loc));
    }

    pub fn project_signature(&mut self, loc: Location, name: &str, arity: usize, positive: bool) {
        let name = self.interner.intern(name);
        self.emit(Statement::new(
            StatementKind::ProjectSignature(Signature::new(name, arity, positive)),
            loc,
        ));
    }

    /// `#project atom : body.`
    pub fn project(&mut self, loc: Location, atom: TermId, body: BodyId) {
        let atom = self.terms.take(atom);
        let body = self.bodies.take(body);
        self.emit(Statement::new(StatementKind::Project { atom, body }, loc));
    }

    /// `#external atom : body. [value]`; the value defaults to `false`.
    pub fn external(&mut self, loc: Location, atom: TermId, body: BodyId, value: Option<TermId>) {
        let atom = self.terms.take(atom);
        let body = self.bodies.take(body);
        let value = match value {
            Some(value) => self.terms.take(value),
            None => Term::value(Symbol::id(self.interner.intern("false")), loc),
        };
        self.emit(Statement::new(
            StatementKind::External { atom, body, value },
            loc,
        ));
    }

    /// `#edge (u1, v1; u2, v2) : body.`, one statement per pair.
    ///
    /// # Panics
    /// Panics if an element is not a pair; the grammar only produces pairs.
    pub fn edge(&mut self, loc: Location, pairs: TermVecVecId, body: BodyId) {
        let pairs = self.termvecvecs.take(pairs);
        let body = self.bodies.take(body);
        for pair in pairs {
            let [u, v] = <[Term; 2]>::try_from(pair)
                .unwrap_or_else(|pair| panic!("edge with {} endpoints", pair.len()));
            self.emit(Statement::new(
                StatementKind::Edge {
                    u,
                    v,
                    body: body.clone(),
                },
                loc,
            ));
        }
    }

    /// `#heuristic atom : body. [bias@priority, modifier]`
    pub fn heuristic(
        &mut self,
        loc: Location,
        atom: TermId,
        body: BodyId,
        bias: TermId,
        priority: TermId,
        modifier: TermId,
    ) {
        let atom = self.terms.take(atom);
        let body = self.bodies.take(body);
        let bias = self.terms.take(bias);
        let priority = self.terms.take(priority);
        let modifier = self.terms.take(modifier);
        self.emit(Statement::new(
            StatementKind::Heuristic {
                atom,
                body,
                bias,
                priority,
                modifier,
            },
            loc,
        ));
    }

    /// `#const name = value.`, `[default]` or `[override]`.
    pub fn define(&mut self, loc: Location, name: &str, value: TermId, is_default: bool) {
        let define = Define {
            name: self.interner.intern(name),
            value: self.terms.take(value),
            is_default,
            loc,
        };
        if let Err(err) = self.defines.add(define, &self.interner) {
            self.report(err);
        }
    }

    /// `#program name(params).`
    pub fn block(&mut self, loc: Location, name: &str, params: IdVecId) {
        let name = self.interner.intern(name);
        let params = self.idvecs.take(params);
        self.emit(Statement::new(StatementKind::Block { name, params }, loc));
    }
}

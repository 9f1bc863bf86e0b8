//! Top-level statements.

use crate::{Location, Name};

use super::{BodyElem, Head, Term};

/// `name/arity`, `-name/arity` for classically negated atoms.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Signature {
    pub name: Name,
    pub arity: usize,
    pub positive: bool,
}

impl Signature {
    #[inline]
    pub const fn new(name: Name, arity: usize, positive: bool) -> Self {
        Signature {
            name,
            arity,
            positive,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Statement {
    pub kind: StatementKind,
    pub loc: Location,
}

impl Statement {
    #[inline]
    pub fn new(kind: StatementKind, loc: Location) -> Self {
        Statement { kind, loc }
    }

    /// Body of the statement, if its kind has one.
    pub fn body(&self) -> Option<&[BodyElem]> {
        match &self.kind {
            StatementKind::Rule { body, .. }
            | StatementKind::Show { body, .. }
            | StatementKind::Project { body, .. }
            | StatementKind::External { body, .. }
            | StatementKind::Edge { body, .. }
            | StatementKind::Heuristic { body, .. }
            | StatementKind::Optimize { body, .. } => Some(body),
            StatementKind::ShowSignature(_)
            | StatementKind::ProjectSignature(_)
            | StatementKind::Block { .. } => None,
        }
    }

    pub fn body_mut(&mut self) -> Option<&mut Vec<BodyElem>> {
        match &mut self.kind {
            StatementKind::Rule { body, .. }
            | StatementKind::Show { body, .. }
            | StatementKind::Project { body, .. }
            | StatementKind::External { body, .. }
            | StatementKind::Edge { body, .. }
            | StatementKind::Heuristic { body, .. }
            | StatementKind::Optimize { body, .. } => Some(body),
            StatementKind::ShowSignature(_)
            | StatementKind::ProjectSignature(_)
            | StatementKind::Block { .. } => None,
        }
    }

    /// Short name of the statement kind, for logs.
    pub fn keyword(&self) -> &'static str {
        match self.kind {
            StatementKind::Rule { .. } => "rule",
            StatementKind::ShowSignature(_) | StatementKind::Show { .. } => "#show",
            StatementKind::Project { .. } | StatementKind::ProjectSignature(_) => "#project",
            StatementKind::External { .. } => "#external",
            StatementKind::Edge { .. } => "#edge",
            StatementKind::Heuristic { .. } => "#heuristic",
            StatementKind::Optimize { .. } => "optimize",
            StatementKind::Block { .. } => "#program",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatementKind {
    /// Facts, rules and integrity constraints (head `#false`).
    Rule { head: Head, body: Vec<BodyElem> },
    /// `#show p/n.`; the empty name with arity 0 is `#show.`
    ShowSignature(Signature),
    /// `#show t : body.`
    Show { term: Term, body: Vec<BodyElem> },
    /// `#project a : body.`
    Project { atom: Term, body: Vec<BodyElem> },
    /// `#project p/n.`
    ProjectSignature(Signature),
    /// `#external a : body. [value]`
    External {
        atom: Term,
        body: Vec<BodyElem>,
        value: Term,
    },
    /// `#edge (u, v) : body.`
    Edge {
        u: Term,
        v: Term,
        body: Vec<BodyElem>,
    },
    /// `#heuristic a : body. [bias@priority, modifier]`
    Heuristic {
        atom: Term,
        body: Vec<BodyElem>,
        bias: Term,
        priority: Term,
        modifier: Term,
    },
    /// Weak constraints and `#minimize`/`#maximize` elements.
    Optimize {
        weight: Term,
        priority: Term,
        tuple: Vec<Term>,
        body: Vec<BodyElem>,
    },
    /// `#program name(params).`
    Block { name: Name, params: Vec<Name> },
}

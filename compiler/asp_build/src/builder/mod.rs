//! The program builder.
//!
//! [`ProgramBuilder`] is driven by the reductions of a shift-reduce parser.
//! Each reduction combines handles produced by earlier reductions into a new
//! node and returns that node's handle; statement reductions move the
//! finished tree into the statement list. Handles are consumed exactly once.
//!
//! The operations are split by concern:
//! - `terms`: terms, term vectors and pooling
//! - `literals`: literals, bodies, heads, bounds and aggregate elements
//! - `theory`: theory terms, theory atoms and `#theory` definitions
//! - `statements`: statement emission and constant definitions
//! - `finish`: theory atom resolution and the final [`BuildOutput`]
//!
//! [`BuildOutput`]: crate::BuildOutput

mod finish;
mod literals;
mod statements;
mod terms;
mod theory;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::trace;

use asp_diagnostic::DiagnosticQueue;
use asp_ir::{
    BodyAggrElem, BodyElem, Bound, CondLit, Head, HeadAggrElem, Indexed, Literal, Location, Name,
    RawTheoryTerm, SharedInterner, Statement, Term, TheoryAtom, TheoryAtomDef, TheoryElem,
    TheoryOperatorDef, TheoryTerm, TheoryTermDef, VarCell,
};

use crate::ids::{
    BodyAggrElemVecId, BodyId, BoundVecId, CondLitVecId, HeadAggrElemVecId, HeadId, IdVecId,
    LitId, LitVecId, TermId, TermVecId, TermVecVecId, TheoryAtomDefId, TheoryAtomId,
    TheoryDefVecId, TheoryElemVecId, TheoryOpDefId, TheoryOpDefVecId, TheoryOpVecId,
    TheoryOptermId, TheoryOptermVecId, TheoryTermDefId, TheoryTermId,
};
use crate::program::{Define, Defines, TheoryRegistry};
use crate::{BuildError, BuilderConfig, TheoryLexing};

/// Term and atom definitions collected for one `#theory`.
#[derive(Debug, Default)]
struct TheoryDefs {
    term_defs: Vec<TheoryTermDef>,
    atom_defs: Vec<TheoryAtomDef>,
}

/// Incremental AST builder.
///
/// # Example
///
/// ```text
/// // p(X) :- q(X).
/// let x = b.term_var(loc, "X");
/// let args = b.termvec_push(b.termvec(), x);
/// let p = b.term_call(loc, "p", b.termvecvec_push(b.termvecvec(), args), false);
/// let head = b.head_lit(b.lit_pred(loc, Naf::Pos, p));
/// ...
/// b.rule(loc, head, body);
/// let output = b.finish();
/// ```
pub struct ProgramBuilder {
    interner: SharedInterner,

    // Terms
    terms: Indexed<Term, TermId>,
    termvecs: Indexed<Vec<Term>, TermVecId>,
    termvecvecs: Indexed<Vec<Vec<Term>>, TermVecVecId>,

    // Literals, bodies and heads
    lits: Indexed<Literal, LitId>,
    litvecs: Indexed<Vec<Literal>, LitVecId>,
    condlitvecs: Indexed<Vec<CondLit>, CondLitVecId>,
    bodies: Indexed<Vec<BodyElem>, BodyId>,
    heads: Indexed<Head, HeadId>,
    boundvecs: Indexed<Vec<Bound>, BoundVecId>,
    body_aggr_elemvecs: Indexed<Vec<BodyAggrElem>, BodyAggrElemVecId>,
    head_aggr_elemvecs: Indexed<Vec<HeadAggrElem>, HeadAggrElemVecId>,
    idvecs: Indexed<Vec<Name>, IdVecId>,

    // Theory terms and atoms
    theory_terms: Indexed<TheoryTerm, TheoryTermId>,
    theory_opvecs: Indexed<SmallVec<[Name; 2]>, TheoryOpVecId>,
    theory_opterms: Indexed<RawTheoryTerm, TheoryOptermId>,
    theory_optermvecs: Indexed<Vec<TheoryTerm>, TheoryOptermVecId>,
    theory_elemvecs: Indexed<Vec<TheoryElem>, TheoryElemVecId>,
    theory_atoms: Indexed<TheoryAtom, TheoryAtomId>,

    // Theory definitions
    theory_op_defs: Indexed<TheoryOperatorDef, TheoryOpDefId>,
    theory_op_defvecs: Indexed<Vec<TheoryOperatorDef>, TheoryOpDefVecId>,
    theory_term_defs: Indexed<TheoryTermDef, TheoryTermDefId>,
    theory_atom_defs: Indexed<TheoryAtomDef, TheoryAtomDefId>,
    theory_defvecs: Indexed<TheoryDefs, TheoryDefVecId>,

    /// One cell per variable name, shared for the builder's lifetime.
    cells: FxHashMap<Name, VarCell>,
    /// Counter for the unique names of anonymous variables.
    anonymous: u32,

    statements: Vec<Statement>,
    defines: Defines,
    theories: TheoryRegistry,
    diagnostics: DiagnosticQueue,
    lexing: TheoryLexing,
}

impl ProgramBuilder {
    pub fn new(interner: SharedInterner) -> Self {
        Self::with_config(interner, BuilderConfig::default())
    }

    pub fn with_config(interner: SharedInterner, config: BuilderConfig) -> Self {
        let mut builder = ProgramBuilder {
            interner,
            terms: Indexed::new(),
            termvecs: Indexed::new(),
            termvecvecs: Indexed::new(),
            lits: Indexed::new(),
            litvecs: Indexed::new(),
            condlitvecs: Indexed::new(),
            bodies: Indexed::new(),
            heads: Indexed::new(),
            boundvecs: Indexed::new(),
            body_aggr_elemvecs: Indexed::new(),
            head_aggr_elemvecs: Indexed::new(),
            idvecs: Indexed::new(),
            theory_terms: Indexed::new(),
            theory_opvecs: Indexed::new(),
            theory_opterms: Indexed::new(),
            theory_optermvecs: Indexed::new(),
            theory_elemvecs: Indexed::new(),
            theory_atoms: Indexed::new(),
            theory_op_defs: Indexed::new(),
            theory_op_defvecs: Indexed::new(),
            theory_term_defs: Indexed::new(),
            theory_atom_defs: Indexed::new(),
            theory_defvecs: Indexed::new(),
            cells: FxHashMap::default(),
            anonymous: 0,
            statements: Vec::new(),
            defines: Defines::new(),
            theories: TheoryRegistry::new(),
            diagnostics: DiagnosticQueue::with_config(config.diagnostics),
            lexing: TheoryLexing::Disabled,
        };

        for (name, value) in config.constants {
            let define = Define {
                name: builder.interner.intern(&name),
                value: Term::value(value, Location::DUMMY),
                is_default: false,
                loc: Location::DUMMY,
            };
            if let Err(err) = builder.defines.add(define, &builder.interner) {
                builder.report(err);
            }
        }

        builder
    }

    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    /// Switch how the scanner treats operator characters.
    pub fn set_theory_lexing(&mut self, mode: TheoryLexing) {
        trace!(?mode, "theory lexing");
        self.lexing = mode;
    }

    pub fn theory_lexing(&self) -> TheoryLexing {
        self.lexing
    }

    /// Record a problem; building continues.
    fn report(&mut self, err: BuildError) {
        self.diagnostics.add(err.to_diagnostic());
    }

    /// Name and cell for a variable occurrence.
    ///
    /// Every occurrence of a name gets the same cell. Each `_` gets a fresh
    /// cell under a generated name that cannot clash with user variables.
    fn variable(&mut self, name: &str) -> (Name, VarCell) {
        if name == "_" {
            let name = self.interner.intern(&format!("_#{}", self.anonymous));
            self.anonymous += 1;
            return (name, VarCell::new());
        }
        let name = self.interner.intern(name);
        let cell = self.cells.entry(name).or_default().clone();
        (name, cell)
    }
}

#[cfg(test)]
mod tests;

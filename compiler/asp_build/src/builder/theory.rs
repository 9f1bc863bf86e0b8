//! Theory terms, theory atoms and `#theory` definitions.
//!
//! Operator sequences are collected flat. They stay unparsed until
//! [`finish`](ProgramBuilder::finish) knows the definition of the atom
//! holding them.

use smallvec::SmallVec;
use tracing::{debug, trace};

use asp_ir::{
    Location, Name, RawTheoryTerm, Symbol, TheoryAtom, TheoryAtomDef, TheoryAtomType,
    TheoryDefinition, TheoryElem, TheoryGuard, TheoryGuardDef, TheoryOperatorDef,
    TheoryOperatorType, TheoryTerm, TheoryTermDef, TheoryTermKind, TupleKind,
};

use super::{ProgramBuilder, TheoryDefs};
use crate::ids::{
    LitVecId, TermId, TheoryAtomDefId, TheoryAtomId, TheoryDefVecId, TheoryElemVecId,
    TheoryOpDefId, TheoryOpDefVecId, TheoryOpVecId, TheoryOptermId, TheoryOptermVecId,
    TheoryTermDefId, TheoryTermId,
};
use crate::resolver;
use crate::{BuildError, TheoryError};

/// An operator sequence as a theory term. A lone operand without operators
/// needs no resolution.
fn opterm_into_term(mut raw: RawTheoryTerm, loc: Location) -> TheoryTerm {
    if raw.segments.len() == 1 && raw.segments[0].ops.is_empty() {
        if let Some(segment) = raw.segments.pop() {
            return segment.term;
        }
    }
    TheoryTerm::new(TheoryTermKind::Unparsed(raw), loc)
}

impl ProgramBuilder {
    pub fn theory_term_value(&mut self, loc: Location, value: Symbol) -> TheoryTermId {
        self.theory_terms
            .allocate_with(TheoryTerm::new(TheoryTermKind::Symbol(value), loc))
    }

    pub fn theory_term_var(&mut self, loc: Location, name: &str) -> TheoryTermId {
        let (name, cell) = self.variable(name);
        self.theory_terms
            .allocate_with(TheoryTerm::new(TheoryTermKind::Variable { name, cell }, loc))
    }

    pub fn theory_term_tuple(
        &mut self,
        loc: Location,
        elems: TheoryOptermVecId,
        kind: TupleKind,
    ) -> TheoryTermId {
        let elems = self.theory_optermvecs.take(elems);
        self.theory_terms
            .allocate_with(TheoryTerm::new(TheoryTermKind::Tuple { kind, elems }, loc))
    }

    pub fn theory_term_fun(
        &mut self,
        loc: Location,
        name: &str,
        args: TheoryOptermVecId,
    ) -> TheoryTermId {
        let name = self.interner.intern(name);
        let args = self.theory_optermvecs.take(args);
        self.theory_terms
            .allocate_with(TheoryTerm::new(TheoryTermKind::Function { name, args }, loc))
    }

    /// `( opterm )`
    pub fn theory_term_opterm(&mut self, loc: Location, opterm: TheoryOptermId) -> TheoryTermId {
        let raw = self.theory_opterms.take(opterm);
        self.theory_terms.allocate_with(opterm_into_term(raw, loc))
    }

    pub fn theory_ops(&mut self) -> TheoryOpVecId {
        self.theory_opvecs.allocate()
    }

    pub fn theory_ops_push(&mut self, vec: TheoryOpVecId, op: &str) -> TheoryOpVecId {
        let op = self.interner.intern(op);
        self.theory_opvecs.get_mut(vec).push(op);
        vec
    }

    /// Start a sequence with `ops term`; `ops` may be empty.
    pub fn theory_opterm(&mut self, ops: TheoryOpVecId, term: TheoryTermId) -> TheoryOptermId {
        let ops = self.theory_opvecs.take(ops);
        let term = self.theory_terms.take(term);
        let mut raw = RawTheoryTerm::default();
        raw.push(ops, term);
        self.theory_opterms.allocate_with(raw)
    }

    /// Continue a sequence with `ops term`.
    ///
    /// # Panics
    /// Panics if `ops` is empty: the grammar only continues a sequence after
    /// at least one operator.
    pub fn theory_opterm_push(
        &mut self,
        opterm: TheoryOptermId,
        ops: TheoryOpVecId,
        term: TheoryTermId,
    ) -> TheoryOptermId {
        let ops: SmallVec<[Name; 2]> = self.theory_opvecs.take(ops);
        if ops.is_empty() {
            panic!("theory operand without a preceding operator");
        }
        let term = self.theory_terms.take(term);
        self.theory_opterms.get_mut(opterm).push(ops, term);
        opterm
    }

    pub fn theory_optermvec(&mut self) -> TheoryOptermVecId {
        self.theory_optermvecs.allocate()
    }

    pub fn theory_optermvec_push(
        &mut self,
        vec: TheoryOptermVecId,
        opterm: TheoryOptermId,
    ) -> TheoryOptermVecId {
        let raw = self.theory_opterms.take(opterm);
        let loc = raw.location();
        let term = opterm_into_term(raw, loc);
        self.theory_optermvecs.get_mut(vec).push(term);
        vec
    }

    pub fn theory_elems(&mut self) -> TheoryElemVecId {
        self.theory_elemvecs.allocate()
    }

    /// Append `tuple : cond`.
    pub fn theory_elems_push(
        &mut self,
        vec: TheoryElemVecId,
        tuple: TheoryOptermVecId,
        cond: LitVecId,
    ) -> TheoryElemVecId {
        let tuple = self.theory_optermvecs.take(tuple);
        let cond = self.litvecs.take(cond);
        self.theory_elemvecs
            .get_mut(vec)
            .push(TheoryElem { tuple, cond });
        vec
    }

    /// `&name { elems }`
    pub fn theory_atom(
        &mut self,
        loc: Location,
        name: TermId,
        elems: TheoryElemVecId,
    ) -> TheoryAtomId {
        let name = self.terms.take(name);
        let elems = self.theory_elemvecs.take(elems);
        self.theory_atoms.allocate_with(TheoryAtom {
            name,
            elems,
            guard: None,
            loc,
        })
    }

    /// `&name { elems } op term`
    pub fn theory_atom_guarded(
        &mut self,
        loc: Location,
        name: TermId,
        elems: TheoryElemVecId,
        op: &str,
        term: TheoryOptermId,
    ) -> TheoryAtomId {
        let name = self.terms.take(name);
        let elems = self.theory_elemvecs.take(elems);
        let op = self.interner.intern(op);
        let raw = self.theory_opterms.take(term);
        let guard_loc = raw.location();
        let guard = TheoryGuard {
            op,
            term: opterm_into_term(raw, guard_loc),
        };
        self.theory_atoms.allocate_with(TheoryAtom {
            name,
            elems,
            guard: Some(guard),
            loc,
        })
    }

    pub fn theory_op_def(
        &mut self,
        loc: Location,
        name: &str,
        priority: u32,
        kind: TheoryOperatorType,
    ) -> TheoryOpDefId {
        let name = self.interner.intern(name);
        self.theory_op_defs.allocate_with(TheoryOperatorDef {
            name,
            priority,
            kind,
            loc,
        })
    }

    pub fn theory_op_defs(&mut self) -> TheoryOpDefVecId {
        self.theory_op_defvecs.allocate()
    }

    pub fn theory_op_defs_push(
        &mut self,
        vec: TheoryOpDefVecId,
        def: TheoryOpDefId,
    ) -> TheoryOpDefVecId {
        let def = self.theory_op_defs.take(def);
        self.theory_op_defvecs.get_mut(vec).push(def);
        vec
    }

    pub fn theory_term_def(
        &mut self,
        loc: Location,
        name: &str,
        ops: TheoryOpDefVecId,
    ) -> TheoryTermDefId {
        let name = self.interner.intern(name);
        let ops = self.theory_op_defvecs.take(ops);
        self.theory_term_defs
            .allocate_with(TheoryTermDef { name, ops, loc })
    }

    /// `&name/arity : term_def, kind`
    pub fn theory_atom_def(
        &mut self,
        loc: Location,
        name: &str,
        arity: usize,
        term_def: &str,
        kind: TheoryAtomType,
    ) -> TheoryAtomDefId {
        let name = self.interner.intern(name);
        let term_def = self.interner.intern(term_def);
        self.theory_atom_defs.allocate_with(TheoryAtomDef {
            name,
            arity,
            term_def,
            kind,
            guard: None,
            loc,
        })
    }

    /// `&name/arity : term_def, { ops }, guard_def, kind`
    pub fn theory_atom_def_guarded(
        &mut self,
        loc: Location,
        name: &str,
        arity: usize,
        term_def: &str,
        kind: TheoryAtomType,
        ops: TheoryOpVecId,
        guard_def: &str,
    ) -> TheoryAtomDefId {
        let name = self.interner.intern(name);
        let term_def = self.interner.intern(term_def);
        let guard = TheoryGuardDef {
            ops: self.theory_opvecs.take(ops).into_vec(),
            term_def: self.interner.intern(guard_def),
        };
        self.theory_atom_defs.allocate_with(TheoryAtomDef {
            name,
            arity,
            term_def,
            kind,
            guard: Some(guard),
            loc,
        })
    }

    pub fn theory_defs(&mut self) -> TheoryDefVecId {
        self.theory_defvecs.allocate()
    }

    pub fn theory_defs_push_term(
        &mut self,
        vec: TheoryDefVecId,
        def: TheoryTermDefId,
    ) -> TheoryDefVecId {
        let def = self.theory_term_defs.take(def);
        self.theory_defvecs.get_mut(vec).term_defs.push(def);
        vec
    }

    pub fn theory_defs_push_atom(
        &mut self,
        vec: TheoryDefVecId,
        def: TheoryAtomDefId,
    ) -> TheoryDefVecId {
        let def = self.theory_atom_defs.take(def);
        self.theory_defvecs.get_mut(vec).atom_defs.push(def);
        vec
    }

    /// `#theory name { defs }.`
    ///
    /// Faulty definitions are reported and left out; the rest of the theory
    /// is registered.
    pub fn theory_definition(&mut self, loc: Location, name: &str, defs: TheoryDefVecId) {
        let name_id = self.interner.intern(name);
        let TheoryDefs {
            term_defs,
            atom_defs,
        } = self.theory_defvecs.take(defs);

        if let Some(previous) = self.theories.get(name_id) {
            let err = BuildError::TheoryRedefined {
                name: name.to_string(),
                loc,
                previous: previous.loc,
            };
            self.report(err);
            return;
        }

        let mut theory = TheoryDefinition {
            name: name_id,
            term_defs: Vec::with_capacity(term_defs.len()),
            atom_defs: Vec::with_capacity(atom_defs.len()),
            loc,
        };

        for def in term_defs {
            if let Some(previous) = theory.term_def(def.name) {
                let err = BuildError::TermDefinitionRedefined {
                    name: self.interner.lookup(def.name).to_string(),
                    loc: def.loc,
                    previous: previous.loc,
                };
                self.report(err);
                continue;
            }
            let accepted = self.check_term_def(def);
            theory.term_defs.push(accepted);
        }

        for def in atom_defs {
            if let Err(err) = self.check_atom_def(&theory, &def) {
                self.report(err);
                continue;
            }
            theory.atom_defs.push(def);
        }

        if let Err(err) = self.theories.register(theory, &self.interner) {
            self.report(err);
        }
    }

    /// Add operators one at a time, dropping each one that duplicates an
    /// earlier definition.
    fn check_term_def(&mut self, def: TheoryTermDef) -> TheoryTermDef {
        let TheoryTermDef { name, ops, loc } = def;
        let mut accepted = TheoryTermDef {
            name,
            ops: Vec::with_capacity(ops.len()),
            loc,
        };
        for op in ops {
            accepted.ops.push(op);
            if let Err(err) = resolver::validate(&accepted, &self.interner) {
                accepted.ops.pop();
                self.report(err.into());
            }
        }
        trace!(
            name = self.interner.lookup(name),
            ops = accepted.ops.len(),
            "theory term definition"
        );
        accepted
    }

    fn check_atom_def(
        &self,
        theory: &TheoryDefinition,
        def: &TheoryAtomDef,
    ) -> Result<(), BuildError> {
        let previous = theory
            .atom_def(def.name, def.arity)
            .or_else(|| self.theories.atom_def(def.name, def.arity).map(|(_, d)| d));
        if let Some(previous) = previous {
            return Err(BuildError::AtomDefinitionRedefined {
                name: self.interner.lookup(def.name).to_string(),
                arity: def.arity,
                loc: def.loc,
                previous: previous.loc,
            });
        }

        let guard_def = def.guard.as_ref().map(|guard| guard.term_def);
        for term_def in std::iter::once(def.term_def).chain(guard_def) {
            if theory.term_def(term_def).is_none() {
                return Err(TheoryError::UndefinedTermDefinition {
                    name: self.interner.lookup(term_def).to_string(),
                    loc: def.loc,
                }
                .into());
            }
        }

        debug!(
            name = self.interner.lookup(def.name),
            arity = def.arity,
            kind = def.kind.as_str(),
            "theory atom definition"
        );
        Ok(())
    }
}

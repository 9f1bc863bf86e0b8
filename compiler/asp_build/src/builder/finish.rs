//! Theory atom resolution and the final program.

use tracing::{debug, trace};

use asp_ir::{
    BodyElemKind, HeadKind, Name, Statement, StatementKind, TheoryAtom, TheoryDefinition,
    TheoryTermDef,
};

use super::ProgramBuilder;
use crate::program::Program;
use crate::resolver::resolve_term;
use crate::{BuildOutput, Occurrence, TheoryError};

impl ProgramBuilder {
    /// Resolve theory atoms and hand out the program with its diagnostics.
    ///
    /// A statement whose theory atoms fail to resolve is reported and left
    /// out of the program.
    pub fn finish(mut self) -> BuildOutput {
        let statements = std::mem::take(&mut self.statements);
        let mut kept = Vec::with_capacity(statements.len());
        for mut stmt in statements {
            match self.resolve_theory(&mut stmt) {
                Ok(()) => kept.push(stmt),
                Err(err) => {
                    debug!(kind = stmt.keyword(), loc = ?stmt.loc, "statement discarded");
                    self.report(err.into());
                }
            }
        }

        let diagnostics = self.diagnostics.flush();
        debug!(
            statements = kept.len(),
            diagnostics = diagnostics.len(),
            "program finished"
        );
        BuildOutput {
            program: Program {
                statements: kept,
                defines: self.defines,
                theories: self.theories,
            },
            diagnostics,
        }
    }

    fn resolve_theory(&self, stmt: &mut Statement) -> Result<(), TheoryError> {
        if let StatementKind::Rule { head, body } = &mut stmt.kind {
            if let HeadKind::Theory(atom) = &mut head.kind {
                let occurrence = if body.is_empty() {
                    Occurrence::Directive
                } else {
                    Occurrence::Head
                };
                self.resolve_atom(atom, occurrence)?;
            }
        }

        if let Some(body) = stmt.body_mut() {
            for elem in body {
                if let BodyElemKind::Theory { atom, .. } = &mut elem.kind {
                    self.resolve_atom(atom, Occurrence::Body)?;
                }
            }
        }
        Ok(())
    }

    /// Resolve one atom against its definition. Atoms without a definition
    /// keep their unparsed terms.
    fn resolve_atom(
        &self,
        atom: &mut TheoryAtom,
        occurrence: Occurrence,
    ) -> Result<(), TheoryError> {
        let Some(sig) = atom.signature() else {
            trace!(loc = ?atom.loc, "theory atom without a name");
            return Ok(());
        };
        let name = self.interner.lookup(sig.name);
        let Some((theory, def)) = self.theories.atom_def(sig.name, sig.arity) else {
            trace!(name, arity = sig.arity, "no definition, theory atom left unparsed");
            return Ok(());
        };

        if !occurrence.allows(def.kind) {
            return Err(TheoryError::MisplacedAtom {
                atom: name.to_string(),
                arity: sig.arity,
                kind: def.kind,
                occurrence,
                loc: atom.loc,
            });
        }

        let term_def = self.term_def(theory, def.term_def, atom)?;
        for elem in &mut atom.elems {
            for term in &mut elem.tuple {
                *term = resolve_term(term, term_def, &self.interner)?;
            }
        }

        if let Some(guard) = &atom.guard {
            let Some(guard_def) = def.guard.as_ref().filter(|g| g.ops.contains(&guard.op)) else {
                return Err(TheoryError::UnknownGuardOperator {
                    op: self.interner.lookup(guard.op).to_string(),
                    atom: name.to_string(),
                    loc: atom.loc,
                });
            };
            let guard_term_def = self.term_def(theory, guard_def.term_def, atom)?;
            let resolved = resolve_term(&guard.term, guard_term_def, &self.interner)?;
            if let Some(guard) = &mut atom.guard {
                guard.term = resolved;
            }
        }

        trace!(name, arity = sig.arity, %occurrence, "theory atom resolved");
        Ok(())
    }

    fn term_def<'t>(
        &self,
        theory: &'t TheoryDefinition,
        name: Name,
        atom: &TheoryAtom,
    ) -> Result<&'t TheoryTermDef, TheoryError> {
        theory
            .term_def(name)
            .ok_or_else(|| TheoryError::UndefinedTermDefinition {
                name: self.interner.lookup(name).to_string(),
                loc: atom.loc,
            })
    }
}

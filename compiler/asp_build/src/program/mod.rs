//! Builder output: statements plus the constant and theory registries.

use rustc_hash::FxHashMap;
use tracing::debug;

use asp_diagnostic::Diagnostic;
use asp_ir::{Location, Name, Statement, StringInterner, Term, TheoryAtomDef, TheoryDefinition};

use crate::BuildError;

/// `#const name = value.`, or a constant given on the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Define {
    pub name: Name,
    pub value: Term,
    /// Default definitions yield to overrides.
    pub is_default: bool,
    pub loc: Location,
}

/// Constant definitions by name, in first-definition order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Defines {
    defines: Vec<Define>,
    index: FxHashMap<Name, usize>,
}

impl Defines {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a definition.
    ///
    /// An override replaces a default and a default never replaces an
    /// override. Two definitions of the same kind conflict; the earlier one
    /// stays.
    pub fn add(&mut self, define: Define, interner: &StringInterner) -> Result<(), BuildError> {
        let Some(&slot) = self.index.get(&define.name) else {
            debug!(
                name = interner.lookup(define.name),
                default = define.is_default,
                "constant defined"
            );
            self.index.insert(define.name, self.defines.len());
            self.defines.push(define);
            return Ok(());
        };

        let existing = &mut self.defines[slot];
        match (existing.is_default, define.is_default) {
            (true, false) => {
                debug!(name = interner.lookup(define.name), "default constant overridden");
                *existing = define;
                Ok(())
            }
            (false, true) => {
                debug!(
                    name = interner.lookup(define.name),
                    "default ignored, constant is overridden"
                );
                Ok(())
            }
            _ => Err(BuildError::ConstantRedefined {
                name: interner.lookup(define.name).to_string(),
                loc: define.loc,
                previous: existing.loc,
            }),
        }
    }

    pub fn get(&self, name: Name) -> Option<&Define> {
        self.index.get(&name).map(|&slot| &self.defines[slot])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Define> {
        self.defines.iter()
    }

    pub fn len(&self) -> usize {
        self.defines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defines.is_empty()
    }
}

/// Registered `#theory` definitions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TheoryRegistry {
    theories: Vec<TheoryDefinition>,
}

impl TheoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a theory. A theory name may be registered once; the earlier
    /// definition stays.
    pub fn register(
        &mut self,
        theory: TheoryDefinition,
        interner: &StringInterner,
    ) -> Result<(), BuildError> {
        if let Some(previous) = self.get(theory.name) {
            return Err(BuildError::TheoryRedefined {
                name: interner.lookup(theory.name).to_string(),
                loc: theory.loc,
                previous: previous.loc,
            });
        }
        debug!(
            name = interner.lookup(theory.name),
            term_defs = theory.term_defs.len(),
            atom_defs = theory.atom_defs.len(),
            "theory registered"
        );
        self.theories.push(theory);
        Ok(())
    }

    pub fn get(&self, name: Name) -> Option<&TheoryDefinition> {
        self.theories.iter().find(|theory| theory.name == name)
    }

    /// Atom definition for `&name/arity` with the theory holding it.
    pub fn atom_def(
        &self,
        name: Name,
        arity: usize,
    ) -> Option<(&TheoryDefinition, &TheoryAtomDef)> {
        self.theories
            .iter()
            .find_map(|theory| theory.atom_def(name, arity).map(|def| (theory, def)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &TheoryDefinition> {
        self.theories.iter()
    }

    pub fn len(&self) -> usize {
        self.theories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.theories.is_empty()
    }
}

/// A finished program, handed to the grounder by value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Statement>,
    pub defines: Defines,
    pub theories: TheoryRegistry,
}

/// Result of [`ProgramBuilder::finish`](crate::ProgramBuilder::finish).
#[derive(Clone, Debug)]
pub struct BuildOutput {
    pub program: Program,
    /// Sorted by location.
    pub diagnostics: Vec<Diagnostic>,
}

impl BuildOutput {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

//! Shared variable cells.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::Symbol;

/// Binding slot shared by every occurrence of one variable name.
///
/// The builder creates one cell per name and hands clones of it to each
/// `Variable` node. Cells are empty while parsing; the grounder binds and
/// unbinds them while instantiating rules, one rule at a time.
#[derive(Clone, Default)]
pub struct VarCell(Arc<Mutex<Option<Symbol>>>);

impl VarCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current binding, if any.
    pub fn value(&self) -> Option<Symbol> {
        self.0.lock().clone()
    }

    /// Bind the cell, returning the previous binding.
    pub fn bind(&self, value: Symbol) -> Option<Symbol> {
        self.0.lock().replace(value)
    }

    /// Clear the binding, returning it.
    pub fn unbind(&self) -> Option<Symbol> {
        self.0.lock().take()
    }

    /// Whether both handles refer to the same cell.
    pub fn same_cell(&self, other: &VarCell) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Cells compare by identity: two variables are equal only if they share
/// the cell, not merely because both are unbound.
impl PartialEq for VarCell {
    fn eq(&self, other: &Self) -> bool {
        self.same_cell(other)
    }
}

impl Eq for VarCell {}

impl fmt::Debug for VarCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.0.lock() {
            Some(value) => write!(f, "VarCell({value:?})"),
            None => write!(f, "VarCell(unbound)"),
        }
    }
}

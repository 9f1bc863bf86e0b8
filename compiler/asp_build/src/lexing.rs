//! Scanner mode shared between the builder and the scanner.

/// How the scanner tokenises operator characters.
///
/// Inside theory atoms and `#theory` definitions, sequences of operator
/// characters form user-defined operators instead of the built-in ones.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TheoryLexing {
    /// Built-in operators only.
    #[default]
    Disabled,
    /// Inside a theory atom's elements or guard.
    Theory,
    /// Inside a `#theory` definition.
    Definition,
}

impl TheoryLexing {
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

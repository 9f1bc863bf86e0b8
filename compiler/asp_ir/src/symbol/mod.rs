//! Ground constants.

use crate::Name;

/// A ground value appearing literally in the program.
///
/// Identifiers are functions without arguments; tuples are functions with
/// the empty name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    Number(i32),
    String(Name),
    Function {
        name: Name,
        args: Vec<Symbol>,
        positive: bool,
    },
    /// `#inf`, smaller than every other symbol.
    Infimum,
    /// `#sup`, larger than every other symbol.
    Supremum,
}

impl Symbol {
    /// Positive identifier such as `a` or `true`.
    pub fn id(name: Name) -> Self {
        Symbol::Function {
            name,
            args: Vec::new(),
            positive: true,
        }
    }

    /// Whether this is an identifier (a function without arguments).
    pub fn is_id(&self) -> bool {
        matches!(self, Symbol::Function { args, .. } if args.is_empty())
    }

    /// Name and arity, for symbols that can serve as atoms.
    pub fn signature(&self) -> Option<(Name, usize, bool)> {
        match self {
            Symbol::Function {
                name,
                args,
                positive,
            } if *name != Name::EMPTY => Some((*name, args.len(), *positive)),
            _ => None,
        }
    }
}

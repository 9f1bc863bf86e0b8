//! Source locations.
//!
//! The scanner reports begin and end positions as file, line and column.
//! Every AST node and every diagnostic carries a [`Location`].

use std::fmt;

use crate::{Name, StringInterner};

/// A point in a source file. Lines and columns are 1-based.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Position {
    pub file: Name,
    pub line: u32,
    pub column: u32,
}

impl Position {
    #[inline]
    pub const fn new(file: Name, line: u32, column: u32) -> Self {
        Position { file, line, column }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file.raw(), self.line, self.column)
    }
}

/// Source range covered by a syntactic construct.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Location {
    pub begin: Position,
    pub end: Position,
}

impl Location {
    /// Location for generated nodes (`#false` heads, default values).
    pub const DUMMY: Location = Location {
        begin: Position::new(Name::EMPTY, 0, 0),
        end: Position::new(Name::EMPTY, 0, 0),
    };

    #[inline]
    pub const fn new(begin: Position, end: Position) -> Self {
        Location { begin, end }
    }

    /// Location within a single file.
    #[inline]
    pub const fn span(
        file: Name,
        begin_line: u32,
        begin_col: u32,
        end_line: u32,
        end_col: u32,
    ) -> Self {
        Location {
            begin: Position::new(file, begin_line, begin_col),
            end: Position::new(file, end_line, end_col),
        }
    }

    /// Smallest location covering both `self` and `other`.
    #[must_use]
    pub fn merge(self, other: Location) -> Location {
        Location {
            begin: self.begin.min(other.begin),
            end: self.end.max(other.end),
        }
    }

    /// Render as `file:line:col[-[line:]col]` like most compilers do.
    pub fn display<'a>(&'a self, interner: &'a StringInterner) -> impl fmt::Display + 'a {
        LocationDisplay {
            loc: self,
            interner,
        }
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}-{:?}", self.begin, self.end)
    }
}

struct LocationDisplay<'a> {
    loc: &'a Location,
    interner: &'a StringInterner,
}

impl fmt::Display for LocationDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Location { begin, end } = self.loc;
        write!(
            f,
            "{}:{}:{}",
            self.interner.lookup(begin.file),
            begin.line,
            begin.column
        )?;
        if begin.file != end.file {
            write!(
                f,
                "-{}:{}:{}",
                self.interner.lookup(end.file),
                end.line,
                end.column
            )
        } else if begin.line != end.line {
            write!(f, "-{}:{}", end.line, end.column)
        } else if begin.column != end.column {
            write!(f, "-{}", end.column)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests;

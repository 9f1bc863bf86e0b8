//! Stack of paused input sources.
//!
//! `#include` suspends the current input and continues with another one;
//! when that one is exhausted the scanner resumes where it stopped. Each
//! entry keeps its reader and the position reached so far.

use tracing::debug;

use asp_ir::{Location, Name, Position, SharedInterner};

use crate::BuildError;

/// One input source and how far it has been read.
#[derive(Debug)]
pub struct Source<R> {
    pub file: Name,
    pub reader: R,
    pub position: Position,
}

impl<R> Source<R> {
    /// Move the position past `text`.
    pub fn advance(&mut self, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                self.position.line += 1;
                self.position.column = 1;
            } else {
                self.position.column += 1;
            }
        }
    }
}

/// Input sources, innermost include on top.
#[derive(Debug)]
pub struct SourceStack<R> {
    interner: SharedInterner,
    sources: Vec<Source<R>>,
}

impl<R> SourceStack<R> {
    pub fn new(interner: SharedInterner) -> Self {
        SourceStack {
            interner,
            sources: Vec::new(),
        }
    }

    /// Start reading `name`, pausing the current source.
    ///
    /// A source that is still open further down the stack is refused.
    pub fn push(&mut self, name: &str, reader: R) -> Result<(), BuildError> {
        let file = self.interner.intern(name);
        if self.sources.iter().any(|source| source.file == file) {
            let loc = self
                .current()
                .map_or(Location::DUMMY, |source| Location::new(source.position, source.position));
            return Err(BuildError::IncludeCycle {
                name: name.to_string(),
                loc,
            });
        }
        debug!(file = name, depth = self.sources.len() + 1, "source pushed");
        self.sources.push(Source {
            file,
            reader,
            position: Position::new(file, 1, 1),
        });
        Ok(())
    }

    pub fn current(&self) -> Option<&Source<R>> {
        self.sources.last()
    }

    pub fn current_mut(&mut self) -> Option<&mut Source<R>> {
        self.sources.last_mut()
    }

    /// Finish the current source, resuming the one below it.
    pub fn pop(&mut self) -> Option<Source<R>> {
        let source = self.sources.pop()?;
        debug!(
            file = self.interner.lookup(source.file),
            depth = self.sources.len(),
            "source popped"
        );
        Some(source)
    }

    pub fn depth(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

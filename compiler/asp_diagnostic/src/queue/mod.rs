//! Diagnostic queue for collecting, deduplicating, and sorting diagnostics.
//!
//! Features:
//! - Error limits to prevent overwhelming output
//! - Deduplication of repeated errors
//! - Follow-on error filtering
//!
//! Theory errors (E1xxx) always come with a statement or definition that was
//! dropped, so they are never filtered as follow-on errors.

use std::hash::{Hash, Hasher};

use asp_ir::{Location, Position};

use crate::{Diagnostic, ErrorCode};

/// Hash a full message for dedup comparison.
#[inline]
fn message_hash(msg: &str) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    msg.hash(&mut hasher);
    hasher.finish()
}

/// Whether `outer` covers `inner` within the same file.
#[inline]
fn encloses(outer: Location, inner: Location) -> bool {
    outer.begin.file == inner.begin.file && outer.begin <= inner.begin && inner.end <= outer.end
}

/// Configuration for diagnostic processing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors before stopping (0 = unlimited).
    pub error_limit: usize,
    /// Drop errors located inside a construct that already failed.
    pub filter_follow_on: bool,
    /// Deduplicate diagnostics with the same location and message.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 20,
            filter_follow_on: true,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// Create a config with no limits (for testing).
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            filter_follow_on: false,
            deduplicate: false,
        }
    }
}

/// Queued diagnostic with its sort position.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
struct QueuedDiagnostic {
    diagnostic: Diagnostic,
    position: Position,
}

/// Queue for collecting, deduplicating, and sorting diagnostics.
///
/// # Example
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// queue.add(diagnostic);
/// // ... add more diagnostics
/// let sorted = queue.flush();
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticQueue {
    /// Collected diagnostics.
    diagnostics: Vec<QueuedDiagnostic>,
    /// Count of errors (not warnings/notes).
    error_count: usize,
    /// Last (primary location, `message_hash`) for dedup.
    last_error: Option<(Location, u64)>,
    /// Primary locations of accepted errors, for follow-on filtering.
    failed: Vec<Location>,
    /// Configuration.
    config: DiagnosticConfig,
}

impl Default for DiagnosticQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticQueue {
    /// Create a new diagnostic queue with default configuration.
    pub fn new() -> Self {
        Self::with_config(DiagnosticConfig::default())
    }

    /// Create a diagnostic queue with custom configuration.
    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            diagnostics: Vec::new(),
            error_count: 0,
            last_error: None,
            failed: Vec::new(),
            config,
        }
    }

    /// Add a diagnostic to the queue.
    ///
    /// Returns `true` if the diagnostic was added, `false` if it was filtered.
    pub fn add(&mut self, diag: Diagnostic) -> bool {
        if self.limit_reached() {
            return false;
        }

        let loc = diag.primary_location().unwrap_or(Location::DUMMY);
        let is_error = diag.is_error();

        if self.config.filter_follow_on && self.is_follow_on(&diag, loc) {
            return false;
        }

        if self.config.deduplicate && self.is_duplicate(&diag, loc) {
            return false;
        }

        if is_error {
            self.last_error = Some((loc, message_hash(&diag.message)));
            self.failed.push(loc);
            self.error_count += 1;
        }

        self.diagnostics.push(QueuedDiagnostic {
            diagnostic: diag,
            position: loc.begin,
        });

        true
    }

    /// Check if the error limit has been reached.
    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    /// Get the number of errors collected.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Sort diagnostics by position and return them.
    ///
    /// Clears the queue after flushing. A trailing "too many errors" note
    /// is added when the limit cut reporting short.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let already_sorted = self
            .diagnostics
            .windows(2)
            .all(|w| w[0].position <= w[1].position);

        if !already_sorted {
            self.diagnostics.sort_by_key(|d| d.position);
        }

        let truncated = self.limit_reached();
        let last = self.diagnostics.last().map(|d| d.diagnostic.primary_location());

        let mut result: Vec<Diagnostic> =
            self.diagnostics.drain(..).map(|d| d.diagnostic).collect();

        if truncated {
            let loc = last.flatten().unwrap_or(Location::DUMMY);
            result.push(too_many_errors(self.config.error_limit, loc));
        }

        self.error_count = 0;
        self.last_error = None;
        self.failed.clear();

        result
    }

    /// Get diagnostics without clearing the queue.
    pub fn peek(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().map(|d| &d.diagnostic)
    }

    /// Check if an error lies inside a location that already failed.
    fn is_follow_on(&self, diag: &Diagnostic, loc: Location) -> bool {
        diag.is_error()
            && !diag.code.is_theory_error()
            && loc != Location::DUMMY
            && self.failed.iter().any(|failed| encloses(*failed, loc))
    }

    /// Check if a diagnostic repeats the previous one at the same location.
    fn is_duplicate(&self, diag: &Diagnostic, loc: Location) -> bool {
        if !diag.is_error() {
            return false;
        }

        match self.last_error {
            Some((last, hash)) => last == loc && hash == message_hash(&diag.message),
            None => false,
        }
    }
}

/// Create a "too many errors" diagnostic.
#[cold]
pub fn too_many_errors(limit: usize, loc: Location) -> Diagnostic {
    Diagnostic::error(ErrorCode::E9002)
        .with_message(format!("aborting due to {limit} previous errors"))
        .with_label(loc, "error limit reached here")
        .with_note("raise the error limit to see further errors")
}

//! Stack growth for recursive tree walks.
//!
//! Theory terms and argument lists nest as deeply as the input program does,
//! and the operator resolver walks them recursively. Wrapping each recursive
//! step in [`ensure_sufficient_stack`] lets the walk handle pathological
//! nesting without overflowing the thread stack.
//!
//! On wasm targets the closure runs directly.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each freshly allocated stack segment (1MB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone is left.
///
/// ```text
/// fn depth(term: &TheoryTerm) -> usize {
///     ensure_sufficient_stack(|| match &term.kind {
///         TheoryTermKind::Unary { arg, .. } => 1 + depth(arg),
///         _ => 1,
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

//! Stack growth for recursive descent and tree walking.
//!
//! The parser recurses once per nesting level of the source. The evaluator
//! recurses once per nested expression and once per T-Script function
//! call, and the AST printer once per nested node. Deeply nested input or deep user-level recursion would
//! otherwise overflow the host thread's stack long before the interpreter's
//! own call-depth limit is reached.
//!
//! Wrap every recursive entry point with [`ensure_sufficient_stack`]:
//!
//! ```text
//! fn expression(&mut self) -> Result<Expr, ParseError> {
//!     ensure_sufficient_stack(|| self.assignment())
//! }
//! ```
//!
//! - **Native targets**: `stacker::maybe_grow` allocates a new segment when
//!   less than [`RED_ZONE`] bytes remain.
//! - **WASM targets**: plain call.

/// Minimum stack space to keep available (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Stack space allocated per growth (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the stack first if the red zone has been reached.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

//! Stack growth guard for the La frontend and evaluator.
//!
//! Both the parser (nested parentheses, nested blocks) and the evaluator
//! (recursive La functions such as `fib`) recurse on the host stack once per
//! level of nesting. A La program that recurses a few thousand levels deep
//! would otherwise overflow the default thread stack.
//!
//! Wrap every recursive entry point in [`ensure_sufficient_stack`]:
//!
//! ```text
//! fn eval_expr(&mut self, expr: &Expr) -> Result<i32, EvalError> {
//!     ensure_sufficient_stack(|| self.eval_expr_inner(expr))
//! }
//! ```

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than [`RED_ZONE`] bytes remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; run `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

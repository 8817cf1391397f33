//! Control-flow result of evaluating a statement.

/// Whether a statement produced a value through `return`.
///
/// `return` is not an error: it travels up as [`Flow::Present`] through
/// blocks, loops and conditionals until a function call consumes it. Only a
/// [`Block`](la_ir::Block) (stops at the first present result) and a `while`
/// loop (exits) act on it; `if` passes its branch result through untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[must_use]
pub enum Flow {
    /// Execution fell through.
    #[default]
    Absent,
    /// A `return` produced this value.
    Present(i32),
}

impl Flow {
    #[inline]
    pub fn is_present(self) -> bool {
        matches!(self, Flow::Present(_))
    }

    /// The returned value, or `default` when execution fell through.
    #[inline]
    pub fn value_or(self, default: i32) -> i32 {
        match self {
            Flow::Present(value) => value,
            Flow::Absent => default,
        }
    }
}

//! Function call evaluation.

use la_ir::{Expr, Span};
use smallvec::SmallVec;

use super::Interpreter;
use crate::environment::Frame;
use crate::errors::{undefined_function, EvalResult};

/// Most La calls pass a handful of arguments.
type Arguments = SmallVec<[i32; 4]>;

impl<'a> Interpreter<'a> {
    /// Call the function `name` resolves to from the current frame.
    ///
    /// The call frame's parent is the scope captured at declaration, not the
    /// caller's frame. The function is bound under its own name in the call
    /// frame so the body can call itself. Arguments are evaluated in the
    /// caller's frame and bound by position; surplus arguments are dropped
    /// and surplus parameters stay unbound.
    #[tracing::instrument(level = "debug", skip_all, fields(function = name))]
    pub(super) fn eval_call(
        &mut self,
        name: &'a str,
        arguments: &'a [Expr],
        span: Span,
    ) -> EvalResult<i32> {
        let function = self
            .frame
            .resolve_function(name)
            .ok_or_else(|| undefined_function(name, span))?;

        let mut call_frame = Frame::child_of(function.environment().clone());
        call_frame.declare_function(name, function.clone());

        let mut values = Arguments::new();
        for argument in arguments {
            values.push(self.eval_expr(argument)?);
        }
        for (parameter, value) in function.parameters().iter().zip(values) {
            call_frame.declare_variable(parameter, value);
        }

        let flow = self.with_frame(call_frame, |scoped| scoped.eval_block(function.body()))?;
        let result = flow.value_or(0);
        tracing::debug!(result, "return");
        Ok(result)
    }
}

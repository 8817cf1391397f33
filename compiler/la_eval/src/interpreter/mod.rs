//! Tree-walking interpreter for La.
//!
//! # Architecture
//!
//! The interpreter owns a stack of live [`Frame`]s. The top of the stack is
//! the scope statements currently declare into and resolve from; everything
//! below it is suspended (an enclosing block or a caller).
//!
//! A new frame is pushed for every loop iteration, every taken `if` branch
//! and every function call, always through the RAII guard in
//! `scope_guard.rs` so the frame is popped on every exit path, including
//! `?` on an error.
//!
//! Statements return a [`Flow`]; expressions return an `i32`. The AST is
//! borrowed for the interpreter's lifetime `'a`, which lets frames key their
//! maps by the names stored in the tree and lets closures point straight at
//! their declaration.

mod function_call;
mod scope_guard;

pub use scope_guard::ScopedInterpreter;

use std::mem;
use std::rc::Rc;

use la_ir::{Block, Expr, ExprKind, File, Stmt, StmtKind};
use la_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::environment::{Frame, Function};
use crate::errors::{
    division_by_zero, redeclaration, undefined_variable, unexpected_return, EvalResult,
};
use crate::operators::evaluate_binary;
use crate::print_handler::SharedPrintHandler;
use crate::{EvalError, Flow};

/// Evaluates one program against a root frame and an output sink.
pub struct Interpreter<'a> {
    /// Current scope.
    frame: Frame<'a>,
    /// Suspended scopes, innermost last.
    suspended: Vec<Frame<'a>>,
    print_handler: SharedPrintHandler,
}

impl<'a> Interpreter<'a> {
    /// Interpreter with an empty root frame writing `println` output to
    /// `print_handler`.
    pub fn new(print_handler: SharedPrintHandler) -> Self {
        Interpreter {
            frame: Frame::root(),
            suspended: Vec::new(),
            print_handler,
        }
    }

    /// Run a whole program.
    ///
    /// Fails with `UnexpectedReturn` if a top-level statement produces a
    /// value, i.e. a `return` that is not inside any function body.
    pub fn evaluate_file(&mut self, file: &'a File) -> Result<(), EvalError> {
        tracing::debug!(statements = file.block.statements.len(), "evaluating file");
        for stmt in &file.block.statements {
            if self.eval_stmt(stmt)?.is_present() {
                return Err(unexpected_return(stmt.span));
            }
        }
        Ok(())
    }

    /// The scope statements currently run in.
    pub fn frame(&self) -> &Frame<'a> {
        &self.frame
    }

    #[cfg(test)]
    pub(crate) fn frame_mut(&mut self) -> &mut Frame<'a> {
        &mut self.frame
    }

    /// Number of live frames, including the root.
    pub fn depth(&self) -> usize {
        self.suspended.len() + 1
    }

    pub(crate) fn push_frame(&mut self, frame: Frame<'a>) {
        let outer = mem::replace(&mut self.frame, frame);
        self.suspended.push(outer);
        trace!(depth = self.depth(), "push frame");
    }

    pub(crate) fn pop_frame(&mut self) {
        if let Some(outer) = self.suspended.pop() {
            self.frame = outer;
        }
        trace!(depth = self.depth(), "pop frame");
    }

    /// Run statements in order, stopping at the first `return`.
    pub(crate) fn eval_block(&mut self, block: &'a Block) -> EvalResult {
        for stmt in &block.statements {
            let flow = self.eval_stmt(stmt)?;
            if flow.is_present() {
                return Ok(flow);
            }
        }
        Ok(Flow::Absent)
    }

    /// Run `block` in a fresh child of the current frame.
    fn eval_nested_block(&mut self, block: &'a Block) -> EvalResult {
        let frame = self.frame.child();
        self.with_frame(frame, |scoped| scoped.eval_block(block))
    }

    fn eval_stmt(&mut self, stmt: &'a Stmt) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_stmt_inner(stmt))
    }

    fn eval_stmt_inner(&mut self, stmt: &'a Stmt) -> EvalResult {
        match &stmt.kind {
            StmtKind::FunctionDeclaration(declaration) => {
                // Snapshot first: the closure must not see its own name.
                let environment = Rc::new(self.frame.freeze());
                trace!(name = %declaration.name, "declare function");
                self.frame.declare_function(
                    &declaration.name,
                    Function::new(declaration, environment),
                );
                Ok(Flow::Absent)
            }

            StmtKind::VariableDeclaration { name, value } => {
                if self.frame.resolve_variable(name).is_some() {
                    return Err(redeclaration(name, stmt.span));
                }
                let initial = match value {
                    Some(value) => self.eval_expr(value)?,
                    None => 0,
                };
                trace!(%name, initial, "declare variable");
                self.frame.declare_variable(name, initial);
                Ok(Flow::Absent)
            }

            StmtKind::While { condition, body } => {
                while self.eval_expr(condition)? != 0 {
                    let flow = self.eval_nested_block(body)?;
                    if flow.is_present() {
                        return Ok(flow);
                    }
                }
                Ok(Flow::Absent)
            }

            StmtKind::If {
                condition,
                body,
                else_body,
            } => {
                let taken = if self.eval_expr(condition)? != 0 {
                    Some(body)
                } else {
                    else_body.as_ref()
                };
                match taken {
                    Some(block) => self.eval_nested_block(block),
                    None => Ok(Flow::Absent),
                }
            }

            StmtKind::VariableAssignment { name, value } => {
                let variable = self
                    .frame
                    .resolve_variable(name)
                    .ok_or_else(|| undefined_variable(name, stmt.span))?;
                variable.set(self.eval_expr(value)?);
                Ok(Flow::Absent)
            }

            StmtKind::Return(value) => Ok(Flow::Present(self.eval_expr(value)?)),

            StmtKind::Println(arguments) => {
                let mut line = String::new();
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        line.push(' ');
                    }
                    line.push_str(&self.eval_expr(argument)?.to_string());
                }
                line.push('\n');
                self.print_handler.write_line(&line)?;
                Ok(Flow::Absent)
            }

            StmtKind::Expr(expr) => {
                self.eval_expr(expr)?;
                Ok(Flow::Absent)
            }
        }
    }

    pub(crate) fn eval_expr(&mut self, expr: &'a Expr) -> EvalResult<i32> {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr))
    }

    fn eval_expr_inner(&mut self, expr: &'a Expr) -> EvalResult<i32> {
        match &expr.kind {
            ExprKind::Literal(value) => Ok(*value),

            ExprKind::VariableIdentifier(name) => self
                .frame
                .resolve_variable(name)
                .map(|variable| variable.get())
                .ok_or_else(|| undefined_variable(name, expr.span)),

            ExprKind::Binary { left, op, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                evaluate_binary(*op, left, right).map_err(|_| division_by_zero(expr.span))
            }

            ExprKind::FunctionCall { name, arguments } => self.eval_call(name, arguments, expr.span),
        }
    }
}

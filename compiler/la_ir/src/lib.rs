//! La IR - the program tree shared by every La tool.
//!
//! This crate contains the data structures the frontend produces and the
//! evaluator consumes:
//! - [`Span`] byte ranges and the [`LineOffsetTable`] that turns them into
//!   `line:column` positions
//! - [`BinaryOp`], the fixed token-to-operator table
//! - the AST ([`File`], [`Block`], [`Stmt`], [`Expr`])
//! - [`printer`], the indented AST dump used by `la parse`
//!
//! # Design Philosophy
//!
//! - **Immutable trees**: nodes are built once by the parser (or by hand in
//!   tests) and never mutated; the evaluator borrows them for the whole run.
//! - **Closed node set**: statements and expressions are enums, and every
//!   consumer dispatches with an exhaustive `match`.

pub mod ast;
mod line_table;
mod operators;
pub mod printer;
mod span;

pub use ast::{Block, Expr, ExprKind, File, FunctionDeclaration, Stmt, StmtKind};
pub use line_table::LineOffsetTable;
pub use operators::BinaryOp;
pub use span::{Span, SpanError};

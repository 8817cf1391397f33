//! Indented AST dump.
//!
//! One node per line, children indented by two spaces, each node tagged with
//! the `line:column` of its first token:
//!
//! ```text
//! File (1:0)
//!   Block (1:0)
//!     Variable declaration (1:0), value = a
//!       Literal (1:8), value = 10
//! ```
//!
//! Positions come from spans, so the source text the tree was parsed from
//! must be passed alongside it.

use crate::ast::{Block, Expr, ExprKind, File, Stmt, StmtKind};
use crate::{LineOffsetTable, Span};

const INDENT: usize = 2;

/// Render `file` as an indented dump.
pub fn print_file(file: &File, source: &str) -> String {
    let mut printer = AstPrinter::new(source);
    printer.file(file);
    printer.out
}

struct AstPrinter<'src> {
    source: &'src str,
    lines: LineOffsetTable,
    out: String,
    indent: usize,
}

impl<'src> AstPrinter<'src> {
    fn new(source: &'src str) -> Self {
        AstPrinter {
            source,
            lines: LineOffsetTable::build(source),
            out: String::new(),
            indent: 0,
        }
    }

    fn file(&mut self, file: &File) {
        self.entity(file.span, "File", None);
        self.nested(|p| p.block(&file.block));
    }

    fn block(&mut self, block: &Block) {
        self.entity(block.span, "Block", None);
        self.nested(|p| {
            for stmt in &block.statements {
                p.stmt(stmt);
            }
        });
    }

    fn stmt(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::FunctionDeclaration(decl) => {
                self.entity(stmt.span, "Function declaration", Some(&decl.name));
                self.nested(|p| p.block(&decl.body));
            }
            StmtKind::VariableDeclaration { name, value } => {
                self.entity(stmt.span, "Variable declaration", Some(name));
                if let Some(value) = value {
                    self.nested(|p| p.expr(value));
                }
            }
            StmtKind::While { condition, body } => {
                self.entity(stmt.span, "While", None);
                self.nested(|p| {
                    p.expr(condition);
                    p.block(body);
                });
            }
            StmtKind::If {
                condition,
                body,
                else_body,
            } => {
                self.entity(stmt.span, "If", None);
                self.nested(|p| {
                    p.expr(condition);
                    p.block(body);
                    if let Some(else_body) = else_body {
                        p.block(else_body);
                    }
                });
            }
            StmtKind::VariableAssignment { name, value } => {
                self.entity(stmt.span, "Variable assignment", Some(name));
                self.nested(|p| p.expr(value));
            }
            StmtKind::Return(value) => {
                self.entity(stmt.span, "Return", None);
                self.nested(|p| p.expr(value));
            }
            StmtKind::Println(arguments) => {
                self.entity(stmt.span, "Println", None);
                self.nested(|p| {
                    for argument in arguments {
                        p.expr(argument);
                    }
                });
            }
            StmtKind::Expr(expr) => self.expr(expr),
        }
    }

    fn expr(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::FunctionCall { name, arguments } => {
                self.entity(expr.span, "Function call", Some(name));
                self.nested(|p| {
                    for argument in arguments {
                        p.expr(argument);
                    }
                });
            }
            ExprKind::Binary { left, op, right } => {
                self.entity(expr.span, "Binary expression", Some(op.dump_name()));
                self.nested(|p| {
                    p.expr(left);
                    p.expr(right);
                });
            }
            ExprKind::VariableIdentifier(name) => {
                self.entity(expr.span, "Variable identifier", Some(name));
            }
            ExprKind::Literal(value) => {
                self.entity(expr.span, "Literal", Some(&value.to_string()));
            }
        }
    }

    fn entity(&mut self, span: Span, label: &str, value: Option<&str>) {
        let (line, column) = self.lines.line_column(self.source, span.start);
        self.out.push_str(&" ".repeat(self.indent));
        self.out.push_str(label);
        self.out.push_str(&format!(" ({line}:{column})"));
        if let Some(value) = value {
            self.out.push_str(", value = ");
            self.out.push_str(value);
        }
        self.out.push('\n');
    }

    fn nested(&mut self, body: impl FnOnce(&mut Self)) {
        self.indent += INDENT;
        body(self);
        self.indent -= INDENT;
    }
}

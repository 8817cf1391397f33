//! Statement and block grammar.
//!
//! Expressions live in `expr.rs`.

mod expr;

use la_ir::{Block, FunctionDeclaration, Span, Stmt, StmtKind};
use la_lexer::TokenKind;
use la_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse statements up to (not including) `end` or EOF.
    pub(crate) fn parse_block_until(&mut self, end: TokenKind) -> Result<Block, ParseError> {
        let mut statements = Vec::new();
        while !self.cursor.check(end) && !self.cursor.is_at_end() {
            statements.push(self.parse_stmt()?);
        }

        let span = match (statements.first(), statements.last()) {
            (Some(first), Some(last)) => first.span.merge(last.span),
            _ => Span::point(self.cursor.current_span().start),
        };
        Ok(Block { statements, span })
    }

    /// `{ block }`
    fn parse_braced_block(&mut self) -> Result<Block, ParseError> {
        self.cursor.expect(TokenKind::LBrace)?;
        let block = self.parse_block_until(TokenKind::RBrace)?;
        self.cursor.expect(TokenKind::RBrace)?;
        Ok(block)
    }

    fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        ensure_sufficient_stack(|| self.parse_stmt_inner())
    }

    fn parse_stmt_inner(&mut self) -> Result<Stmt, ParseError> {
        let start = self.cursor.current_span();
        trace!(kind = ?self.cursor.current_kind(), at = ?start, "statement");

        let kind = match self.cursor.current_kind() {
            TokenKind::Fun => self.parse_function()?,
            TokenKind::Var => self.parse_var()?,
            TokenKind::While => {
                self.cursor.advance();
                let condition = self.parse_paren_condition()?;
                let body = self.parse_braced_block()?;
                StmtKind::While { condition, body }
            }
            TokenKind::If => self.parse_if()?,
            TokenKind::Return => {
                self.cursor.advance();
                StmtKind::Return(self.parse_expr()?)
            }
            TokenKind::Println => {
                self.cursor.advance();
                StmtKind::Println(self.parse_arguments()?)
            }
            TokenKind::Ident if self.cursor.peek_next_kind() == TokenKind::Assign => {
                let name = self.cursor.expect_ident()?.to_string();
                self.cursor.advance();
                let value = self.parse_expr()?;
                StmtKind::VariableAssignment { name, value }
            }
            _ => StmtKind::Expr(self.parse_expr()?),
        };

        Ok(Stmt::new(kind, start.merge(self.cursor.previous_span())))
    }

    /// `fun name(a, b) { body }`
    fn parse_function(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.expect(TokenKind::Fun)?;
        let name = self.cursor.expect_ident()?.to_string();

        self.cursor.expect(TokenKind::LParen)?;
        let mut parameters = Vec::new();
        if !self.cursor.check(TokenKind::RParen) {
            loop {
                parameters.push(self.cursor.expect_ident()?.to_string());
                if !self.cursor.check(TokenKind::Comma) {
                    break;
                }
                self.cursor.advance();
            }
        }
        self.cursor.expect(TokenKind::RParen)?;

        let body = self.parse_braced_block()?;
        Ok(StmtKind::FunctionDeclaration(FunctionDeclaration {
            name,
            parameters,
            body,
        }))
    }

    /// `var name` or `var name = value`
    fn parse_var(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.expect(TokenKind::Var)?;
        let name = self.cursor.expect_ident()?.to_string();
        let value = if self.cursor.check(TokenKind::Assign) {
            self.cursor.advance();
            Some(self.parse_expr()?)
        } else {
            None
        };
        Ok(StmtKind::VariableDeclaration { name, value })
    }

    fn parse_if(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.expect(TokenKind::If)?;
        let condition = self.parse_paren_condition()?;
        let body = self.parse_braced_block()?;
        let else_body = if self.cursor.check(TokenKind::Else) {
            self.cursor.advance();
            Some(self.parse_braced_block()?)
        } else {
            None
        };
        Ok(StmtKind::If {
            condition,
            body,
            else_body,
        })
    }

    /// `( expr )` after `while` / `if`.
    fn parse_paren_condition(&mut self) -> Result<la_ir::Expr, ParseError> {
        self.cursor.expect(TokenKind::LParen)?;
        let condition = self.parse_expr()?;
        self.cursor.expect(TokenKind::RParen)?;
        Ok(condition)
    }
}

//! Expression parsing.
//!
//! Binary operators use precedence climbing over
//! [`BinaryOp::precedence`]; every level is left associative.

use la_ir::{BinaryOp, Expr, ExprKind, Span};
use la_lexer::TokenKind;
use la_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

/// An expression plus the source it was written as.
///
/// `extent` differs from `expr.span` only for parenthesized expressions,
/// where it also covers the parentheses.
struct Operand {
    expr: Expr,
    extent: Span,
}

impl Parser<'_> {
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_operand().map(|operand| operand.expr)
    }

    fn parse_operand(&mut self) -> Result<Operand, ParseError> {
        ensure_sufficient_stack(|| self.parse_binary(1))
    }

    fn parse_binary(&mut self, min_precedence: u8) -> Result<Operand, ParseError> {
        let mut left = self.parse_primary()?;

        while let Some(op) = self.match_binary_op() {
            let precedence = op.precedence();
            if precedence < min_precedence {
                break;
            }
            self.cursor.advance();
            let right = self.parse_binary(precedence + 1)?;

            let span = left.extent.merge(right.extent);
            left = Operand {
                expr: Expr::new(
                    ExprKind::Binary {
                        left: Box::new(left.expr),
                        op,
                        right: Box::new(right.expr),
                    },
                    span,
                ),
                extent: span,
            };
        }

        Ok(left)
    }

    fn match_binary_op(&self) -> Option<BinaryOp> {
        BinaryOp::from_token(self.cursor.current_text())
    }

    /// `name(args)`, `name`, literal or `( expr )`.
    fn parse_primary(&mut self) -> Result<Operand, ParseError> {
        let token = self.cursor.current();
        match token.kind {
            TokenKind::Ident => {
                let name = self.cursor.expect_ident()?.to_string();
                let kind = if self.cursor.check(TokenKind::LParen) {
                    let arguments = self.parse_arguments()?;
                    ExprKind::FunctionCall { name, arguments }
                } else {
                    ExprKind::VariableIdentifier(name)
                };
                Ok(Self::plain(kind, token.span.merge(self.cursor.previous_span())))
            }
            TokenKind::Int => {
                let text = self.cursor.current_text();
                let value = text
                    .parse::<i32>()
                    .map_err(|_| ParseError::LiteralOutOfRange {
                        text: text.to_string(),
                        span: token.span,
                    })?;
                self.cursor.advance();
                Ok(Self::plain(ExprKind::Literal(value), token.span))
            }
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.parse_operand()?;
                self.cursor.expect(TokenKind::RParen)?;
                Ok(Operand {
                    expr: inner.expr,
                    extent: token.span.merge(self.cursor.previous_span()),
                })
            }
            _ => Err(self.cursor.unexpected("expression")),
        }
    }

    /// `( expr, ... )` for calls and `println`.
    pub(crate) fn parse_arguments(&mut self) -> Result<Vec<Expr>, ParseError> {
        self.cursor.expect(TokenKind::LParen)?;
        let mut arguments = Vec::new();
        if !self.cursor.check(TokenKind::RParen) {
            loop {
                arguments.push(self.parse_expr()?);
                if !self.cursor.check(TokenKind::Comma) {
                    break;
                }
                self.cursor.advance();
            }
        }
        self.cursor.expect(TokenKind::RParen)?;
        Ok(arguments)
    }

    fn plain(kind: ExprKind, span: Span) -> Operand {
        Operand {
            expr: Expr::new(kind, span),
            extent: span,
        }
    }
}

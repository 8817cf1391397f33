//! Token cursor for navigating the token stream.

use la_ir::Span;
use la_lexer::{Token, TokenKind, TokenList};

use crate::ParseError;

/// Position in a [`TokenList`].
///
/// The list always ends with EOF and the grammar never advances past it, so
/// `current()` is always a real token.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList, source: &'a str) -> Self {
        Cursor {
            tokens,
            source,
            pos: 0,
        }
    }

    #[inline]
    pub fn current(&self) -> Token {
        self.tokens.get(self.pos)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Source text of the current token.
    #[inline]
    pub fn current_text(&self) -> &'a str {
        self.current().text(self.source)
    }

    /// Span of the last consumed token.
    #[inline]
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens.get(self.pos - 1).span
        } else {
            Span::DUMMY
        }
    }

    #[inline]
    pub fn peek_next_kind(&self) -> TokenKind {
        self.tokens.get(self.pos + 1).kind
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// Consume the current token. Never moves past EOF.
    pub fn advance(&mut self) -> Token {
        let token = self.current();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    /// Consume a token of `kind` or fail with what was found instead.
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(kind.display_name()))
        }
    }

    /// Consume an identifier and return its text.
    pub fn expect_ident(&mut self) -> Result<&'a str, ParseError> {
        let token = self.expect(TokenKind::Ident)?;
        Ok(token.text(self.source))
    }

    /// Error for the current token, given a description of what would have
    /// been accepted.
    pub fn unexpected(&self, expected: &'static str) -> ParseError {
        let token = self.current();
        ParseError::UnexpectedToken {
            expected,
            found: token.kind,
            span: token.span,
        }
    }
}

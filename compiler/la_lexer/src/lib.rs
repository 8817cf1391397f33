//! Lexer for La using logos.
//!
//! Produces a [`TokenList`] terminated by an [`TokenKind::Eof`] token.
//! Whitespace (including newlines) and `//` comments are trivia and never
//! reach the parser: La statements need no separator.

mod token;

pub use token::{Token, TokenKind, TokenList};

use la_ir::Span;
use logos::Logos;
use thiserror::Error;

/// Raw token from logos, before span conversion.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("fun")]
    Fun,
    #[token("var")]
    Var,
    #[token("while")]
    While,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("return")]
    Return,
    #[token("println")]
    Println,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,

    #[token("==")]
    EqEq,
    #[token("=")]
    Assign,
    #[token("!=")]
    NotEq,
    #[token("<=")]
    LtEq,
    #[token("<")]
    Lt,
    #[token(">=")]
    GtEq,
    #[token(">")]
    Gt,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,

    #[regex(r"[a-zA-Z_][a-zA-Z_0-9]*")]
    Ident,

    // Range-checked by the parser so the error can name the literal.
    #[regex(r"0|[1-9][0-9]*")]
    Int,
}

/// Lexing failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unexpected character `{text}`")]
    UnexpectedCharacter { text: String, span: Span },
    #[error("source file exceeds {} bytes", u32::MAX)]
    SourceTooLarge,
}

impl LexError {
    /// Location of the offending text, if there is one.
    pub fn span(&self) -> Option<Span> {
        match self {
            LexError::UnexpectedCharacter { span, .. } => Some(*span),
            LexError::SourceTooLarge => None,
        }
    }
}

/// Tokenize `source`.
///
/// Stops at the first character that starts no token.
pub fn lex(source: &str) -> Result<TokenList, LexError> {
    let mut tokens = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::try_from_range(logos.span()).map_err(|_| LexError::SourceTooLarge)?;

        match token_result {
            Ok(RawToken::LineComment) => {}
            Ok(raw) => tokens.push(Token::new(convert_token(raw), span)),
            Err(()) => {
                return Err(LexError::UnexpectedCharacter {
                    text: logos.slice().to_string(),
                    span,
                });
            }
        }
    }

    let eof = u32::try_from(source.len()).map_err(|_| LexError::SourceTooLarge)?;
    tokens.push(Token::new(TokenKind::Eof, Span::point(eof)));

    Ok(TokenList::new(tokens))
}

fn convert_token(raw: RawToken) -> TokenKind {
    match raw {
        RawToken::Fun => TokenKind::Fun,
        RawToken::Var => TokenKind::Var,
        RawToken::While => TokenKind::While,
        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::Return => TokenKind::Return,
        RawToken::Println => TokenKind::Println,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Comma => TokenKind::Comma,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::Assign => TokenKind::Assign,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::AmpAmp => TokenKind::AmpAmp,
        RawToken::PipePipe => TokenKind::PipePipe,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::Ident => TokenKind::Ident,
        RawToken::Int => TokenKind::Int,
        // Filtered out by `lex` before conversion.
        RawToken::LineComment => TokenKind::Eof,
    }
}

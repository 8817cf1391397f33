//! Recursive descent parser for La.
//!
//! Turns source text into a [`File`]. The grammar has no statement
//! separators: every statement kind starts with a distinct token, except
//! assignment and bare expressions, which are told apart by one token of
//! lookahead (`IDENT =`).
//!
//! Spans follow one rule: a node starts at its first token and ends at its
//! last. Two exceptions keep the AST dump stable:
//! - an empty block is a point span at the token that closes it;
//! - a binary expression starts at its left operand's opening parenthesis,
//!   if the operand was parenthesized.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::ParseError;

use la_ir::File;
use la_lexer::TokenList;

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, source: &'a str) -> Self {
        Parser {
            cursor: Cursor::new(tokens, source),
        }
    }

    /// Parse the whole token stream as a file.
    pub fn parse_file(mut self) -> Result<File, ParseError> {
        let block = self.parse_block_until(la_lexer::TokenKind::Eof)?;
        self.cursor.expect(la_lexer::TokenKind::Eof)?;
        Ok(File::new(block))
    }
}

/// Lex and parse `source`.
pub fn parse(source: &str) -> Result<File, ParseError> {
    let tokens = la_lexer::lex(source)?;
    Parser::new(&tokens, source).parse_file()
}

#[cfg(test)]
mod tests;

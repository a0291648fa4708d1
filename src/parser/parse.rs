//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct, its error type and the token
//! helpers. The precedence levels live in `expressions` as a separate
//! `impl Parser` block.

use crate::parser::ast::Expr;
use crate::parser::lexer::{LexError, Lexer, Token, TokenKind};
use thiserror::Error;

/// Deepest allowed nesting of unary operators and parentheses
pub const MAX_NESTING_DEPTH: usize = 64;

/// Most binary operators allowed in one expression
pub const MAX_BINARY_OPERATORS: usize = 256;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Parse error at column {column}: {message}")]
pub struct ParseError {
    pub message: String,
    pub column: usize,
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError {
            message: err.message,
            column: err.column,
        }
    }
}

/// Recursive descent parser for the expression grammar
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
    pub(crate) depth: usize,
    pub(crate) operators: usize,
}

impl Parser {
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize()?;
        Ok(Self {
            tokens,
            position: 0,
            depth: 0,
            operators: 0,
        })
    }

    /// Parse one complete expression; trailing tokens are an error
    pub fn parse_complete(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expression()?;
        if !self.is_at_end() {
            return Err(self.error(format!("Unexpected {}", self.peek().kind)));
        }
        Ok(expr)
    }

    // ===== Helper methods =====

    pub(crate) fn match_token(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.peek().kind) == std::mem::discriminant(kind)
    }

    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.position += 1;
        }
        self.previous()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.position.saturating_sub(1)]
    }

    pub(crate) fn expect_token(&mut self, kind: &TokenKind, message: &str) -> Result<(), ParseError> {
        if self.match_token(kind) {
            Ok(())
        } else {
            Err(self.error(format!("{}, found {}", message, self.peek().kind)))
        }
    }

    pub(crate) fn error(&self, message: String) -> ParseError {
        ParseError {
            message,
            column: self.peek().column,
        }
    }

    /// Track one level of nesting; fails past [`MAX_NESTING_DEPTH`]
    pub(crate) fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error("Expression nested too deeply".to_string()));
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Count one binary operator; fails past [`MAX_BINARY_OPERATORS`]
    ///
    /// Binary chains build left-deep trees, so this bounds tree depth the
    /// same way [`Parser::enter`] does for parentheses.
    pub(crate) fn count_operator(&mut self) -> Result<(), ParseError> {
        if self.operators >= MAX_BINARY_OPERATORS {
            return Err(self.error("Expression has too many operators".to_string()));
        }
        self.operators += 1;
        Ok(())
    }
}

/// Parse `source` as a single expression
pub fn parse_expression(source: &str) -> Result<Expr, ParseError> {
    Parser::new(source)?.parse_complete()
}

//! Expression parser
//!
//! This module turns the value side of a REPL line into an [`ast::Expr`]:
//! - [`lexer`]: Tokenization (text → tokens)
//! - [`parse`]: The [`parse::Parser`] struct, errors and the entry point
//! - `expressions`: Precedence levels, as an `impl Parser` block
//! - [`ast`]: Expression node definitions
//!
//! # Supported Grammar
//!
//! Numeric, string and boolean literals, variable names, arithmetic
//! `+ - * / %`, comparisons, `&& || !` and parentheses. Nothing else: no
//! calls, no member access, no assignment. Statement-level shapes (imports,
//! classes, `new`, method calls) are recognized by regular expressions in
//! [`crate::interpreter::patterns`], not here.

pub mod ast;
mod expressions;
pub mod lexer;
pub mod parse;

pub use parse::{parse_expression, ParseError, Parser};

//! # Introduction
//!
//! javaterm is a portfolio terminal with a simulated Java REPL. Nothing is
//! compiled or executed: each line is classified by its text and answered
//! with fabricated output, with a small expression evaluator for arithmetic
//! over literals and variables.
//!
//! ## Pipeline
//!
//! ```text
//! Input line → Shell → submit_line → classify → handler → Outcome → Transcript → TUI
//! ```
//!
//! 1. [`shell`]: command mode (`help`, `java`, `clear`, ...) and Java mode.
//! 2. [`interpreter`]: [`interpreter::start_session`] /
//!    [`interpreter::submit_line`], classification and statement handlers.
//! 3. [`parser`]: lexer and recursive-descent parser for the expression grammar.
//! 4. [`memory`]: tagged [`memory::value::Value`]s and the per-session
//!    [`memory::environment::Environment`].
//! 5. [`transcript`]: styled output log shared by the front-ends.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use javaterm::interpreter::{start_session, submit_line, Outcome};
//!
//! let mut env = start_session();
//! assert_eq!(submit_line(&mut env, "x = 5;"), Outcome::output(""));
//! assert_eq!(submit_line(&mut env, "x * 2;"), Outcome::output("10"));
//! assert_eq!(submit_line(&mut env, "exit()"), Outcome::Exit);
//! ```

pub mod interpreter;
pub mod memory;
pub mod parser;
pub mod shell;
pub mod transcript;
pub mod ui;

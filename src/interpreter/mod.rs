//! Pseudo-Java line interpreter
//!
//! This module provides the core execution logic:
//! - [`engine`]: `start_session` / `submit_line` and the [`engine::Outcome`] type
//! - [`classify`]: ordered routing of a line to one statement kind
//! - [`statements`]: one handler per statement kind
//! - [`expressions`]: the narrow evaluator for literals, variables and operators
//! - [`methods`]: canned responses for method calls on objects
//! - [`patterns`]: every regular expression the interpreter matches
//! - [`errors`]: the non-fatal error taxonomy
//!
//! # Execution Model
//!
//! Nothing is really executed. Each line is classified by its text, and the
//! matching handler updates the session [`Environment`] and fabricates output.
//! Only the expression evaluator computes anything, and it can only read
//! literals and bound variables.
//!
//! [`Environment`]: crate::memory::environment::Environment

pub mod classify;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod expressions;
pub mod methods;
pub mod patterns;
pub mod statements;

pub use engine::{start_session, submit_line, Outcome};

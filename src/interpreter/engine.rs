//! Session entry points
//!
//! [`start_session`] creates an [`Environment`]; [`submit_line`] runs one line
//! against it and reports an [`Outcome`]. A line is trimmed, checked for the
//! exit command, classified, and handed to exactly one statement handler.
//! Each call runs to completion before returning.

use crate::interpreter::classify::{classify, StatementKind};
use crate::interpreter::constants::EXIT_COMMAND;
use crate::interpreter::errors::InterpreterError;
use crate::interpreter::statements::{
    execute_assignment, execute_class, execute_construction, execute_expression, execute_import,
    execute_method_call, execute_print, Reply,
};
use crate::memory::environment::Environment;
use tracing::{debug, info};

/// Result of submitting one line
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Blank input; nothing happened
    Empty,
    /// `exit()` was entered; the caller should end the session
    Exit,
    /// The statement succeeded. `terminate` is set by `System.exit(...)`
    /// and leaves ending the session up to the caller.
    Output { text: String, terminate: bool },
    /// The statement was rejected; the environment is unchanged
    Error(InterpreterError),
}

impl Outcome {
    /// Shorthand for a non-terminating output
    pub fn output(text: impl Into<String>) -> Self {
        Outcome::Output {
            text: text.into(),
            terminate: false,
        }
    }
}

impl From<Result<Reply, InterpreterError>> for Outcome {
    fn from(result: Result<Reply, InterpreterError>) -> Self {
        match result {
            Ok(reply) => Outcome::Output {
                text: reply.text,
                terminate: reply.terminate,
            },
            Err(err) => Outcome::Error(err),
        }
    }
}

/// Start a session with only the standard imports
pub fn start_session() -> Environment {
    info!("java session started");
    Environment::new()
}

/// Run one line of input against `env`
pub fn submit_line(env: &mut Environment, text: &str) -> Outcome {
    let line = text.trim();

    if line.is_empty() {
        return Outcome::Empty;
    }
    if line.eq_ignore_ascii_case(EXIT_COMMAND) {
        info!("java session exit requested");
        return Outcome::Exit;
    }

    env.record(line);
    run_statement(env, line).into()
}

fn run_statement(env: &mut Environment, line: &str) -> Result<Reply, InterpreterError> {
    let kind = classify(line)?;
    debug!(?kind, line, "classified");

    match kind {
        StatementKind::Import => execute_import(env, line),
        StatementKind::ClassDefinition => execute_class(env, line),
        StatementKind::Print => execute_print(env, line),
        StatementKind::Construction => execute_construction(env, line),
        StatementKind::Assignment => execute_assignment(env, line),
        StatementKind::MethodCall => execute_method_call(env, line),
        StatementKind::Expression => execute_expression(env, line),
    }
}

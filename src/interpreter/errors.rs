//! Error types for the pseudo-interpreter
//!
//! Every rejected line produces an [`InterpreterError`]. None of them are
//! fatal: the session keeps its environment and accepts the next line.
//! The [`ErrorKind`] groups errors by cause; the message is what the user sees.

use thiserror::Error;

/// Category of a rejected line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing statement terminator or unbalanced block
    SyntaxIncomplete,
    /// The line matched a statement category but not its shape
    InvalidStatementShape,
    /// Undeclared class or unbound variable
    UnresolvedSymbol,
    /// The expression evaluator could not produce a value
    EvaluationFailure,
}

/// A rejected line, with the message shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpreterError {
    #[error("';' expected")]
    MissingTerminator,

    #[error("Invalid import statement")]
    InvalidImport,

    #[error("Invalid class definition")]
    InvalidClass,

    #[error("Invalid print statement")]
    InvalidPrint,

    #[error("Invalid object creation")]
    InvalidConstruction,

    #[error("Invalid assignment")]
    InvalidAssignment,

    #[error("Invalid method call")]
    InvalidMethodCall,

    #[error("Cannot find symbol: class {name}")]
    UnknownClass { name: String },

    #[error("Cannot find symbol: variable {name}")]
    UnknownVariable { name: String },

    /// `reason` is kept for logs; the message only names the expression
    #[error("Cannot evaluate expression: {expr}")]
    Evaluation { expr: String, reason: String },
}

impl InterpreterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            InterpreterError::MissingTerminator => ErrorKind::SyntaxIncomplete,
            InterpreterError::InvalidImport
            | InterpreterError::InvalidClass
            | InterpreterError::InvalidPrint
            | InterpreterError::InvalidConstruction
            | InterpreterError::InvalidAssignment
            | InterpreterError::InvalidMethodCall => ErrorKind::InvalidStatementShape,
            InterpreterError::UnknownClass { .. } | InterpreterError::UnknownVariable { .. } => {
                ErrorKind::UnresolvedSymbol
            }
            InterpreterError::Evaluation { .. } => ErrorKind::EvaluationFailure,
        }
    }
}

/// Why the expression evaluator gave up
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("{0}")]
    Parse(#[from] crate::parser::ParseError),

    #[error("undefined variable '{0}'")]
    UndefinedVariable(String),

    #[error("operator '{op}' cannot be applied to {left} and {right}")]
    TypeMismatch {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },

    #[error("operator '{op}' cannot be applied to {operand}")]
    UnaryTypeMismatch {
        op: &'static str,
        operand: &'static str,
    },

    #[error("integer overflow in {0}")]
    Overflow(String),

    #[error("division by zero")]
    DivisionByZero,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(InterpreterError::MissingTerminator.to_string(), "';' expected");
        assert_eq!(
            InterpreterError::UnknownClass {
                name: "Frobnicator".to_string()
            }
            .to_string(),
            "Cannot find symbol: class Frobnicator"
        );
        assert_eq!(
            InterpreterError::Evaluation {
                expr: "a + +".to_string(),
                reason: "whatever".to_string(),
            }
            .to_string(),
            "Cannot evaluate expression: a + +"
        );
    }

    #[test]
    fn test_kinds() {
        assert_eq!(InterpreterError::InvalidImport.kind(), ErrorKind::InvalidStatementShape);
        assert_eq!(
            InterpreterError::UnknownVariable {
                name: "foo".to_string()
            }
            .kind(),
            ErrorKind::UnresolvedSymbol
        );
    }
}

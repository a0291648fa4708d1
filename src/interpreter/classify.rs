//! Statement classification
//!
//! A trimmed, non-empty line is first checked for completeness, then sorted
//! into exactly one [`StatementKind`]. The checks run in a fixed order and
//! the first match wins. Later checks are looser than earlier ones (almost
//! anything contains `=`), so reordering them changes which handler sees a
//! line.

use crate::interpreter::errors::InterpreterError;
use crate::interpreter::patterns::{
    is_balanced_block, ASSIGNMENT_MARKER, CLASS_MARKER, CONSTRUCTION_MARKER, IMPORT_PREFIX,
    METHOD_CALL_HINT, PRINT_MARKER, TERMINATOR,
};

/// Handler a line is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Import,
    ClassDefinition,
    Print,
    Construction,
    Assignment,
    MethodCall,
    Expression,
}

/// A line is complete if it ends with `;`, mentions a class, or is a
/// balanced brace block
pub fn is_complete(line: &str) -> bool {
    line.ends_with(TERMINATOR) || line.contains(CLASS_MARKER) || is_balanced_block(line)
}

/// Route a trimmed line to its handler
pub fn classify(line: &str) -> Result<StatementKind, InterpreterError> {
    if !is_complete(line) {
        return Err(InterpreterError::MissingTerminator);
    }

    let kind = if line.starts_with(IMPORT_PREFIX) {
        StatementKind::Import
    } else if line.contains(CLASS_MARKER) {
        StatementKind::ClassDefinition
    } else if line.contains(PRINT_MARKER) {
        StatementKind::Print
    } else if line.contains(CONSTRUCTION_MARKER) {
        StatementKind::Construction
    } else if line.contains(ASSIGNMENT_MARKER) {
        StatementKind::Assignment
    } else if METHOD_CALL_HINT.is_match(line) {
        StatementKind::MethodCall
    } else {
        StatementKind::Expression
    };

    Ok(kind)
}

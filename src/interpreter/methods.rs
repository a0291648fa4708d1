//! Canned method responses
//!
//! Objects carry no state, so a method call is answered from a fixed table
//! keyed on the receiver's kind and the method name. Unknown combinations
//! answer [`UNKNOWN_METHOD_RESPONSE`].

use crate::interpreter::constants::UNKNOWN_METHOD_RESPONSE;
use crate::memory::value::{BuiltinClass, ClassOrigin, Value};

/// What a receiver looks like to the response table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiverKind {
    /// A raw string value, a boolean literal or a `String` handle
    String,
    Builtin(BuiltinClass),
    /// Instances of user-declared classes, and non-object values
    Opaque,
}

impl ReceiverKind {
    pub fn of(value: &Value) -> Self {
        match value {
            // Boolean literals behave like the text they were written as
            Value::Str(_) | Value::Bool(_) => ReceiverKind::String,
            Value::Object(handle) => match handle.origin {
                ClassOrigin::Builtin(BuiltinClass::String) => ReceiverKind::String,
                ClassOrigin::Builtin(class) => ReceiverKind::Builtin(class),
                ClassOrigin::Declared => ReceiverKind::Opaque,
            },
            Value::Int(_) | Value::Float(_) => ReceiverKind::Opaque,
        }
    }
}

const LIST_RESPONSES: &[(&str, &str)] = &[
    ("add", "true"),
    ("size", "1"),
    ("get", "null"),
    ("isEmpty", "false"),
    ("contains", "false"),
    ("remove", "null"),
    ("clear", ""),
];

const MAP_RESPONSES: &[(&str, &str)] = &[
    ("put", "null"),
    ("get", "null"),
    ("size", "0"),
    ("containsKey", "false"),
    ("isEmpty", "true"),
    ("remove", "null"),
];

const STRING_RESPONSES: &[(&str, &str)] = &[
    ("length", "0"),
    ("charAt", ""),
    ("substring", ""),
    ("toUpperCase", ""),
    ("toLowerCase", ""),
    ("isEmpty", "true"),
];

const INTEGER_RESPONSES: &[(&str, &str)] = &[("intValue", "0"), ("toString", "0")];

const SCANNER_RESPONSES: &[(&str, &str)] = &[
    ("nextLine", ""),
    ("nextInt", "0"),
    ("hasNext", "false"),
    ("close", ""),
];

fn table(kind: ReceiverKind) -> &'static [(&'static str, &'static str)] {
    match kind {
        ReceiverKind::String => STRING_RESPONSES,
        ReceiverKind::Builtin(BuiltinClass::ArrayList) => LIST_RESPONSES,
        ReceiverKind::Builtin(BuiltinClass::HashMap) => MAP_RESPONSES,
        ReceiverKind::Builtin(BuiltinClass::Integer) => INTEGER_RESPONSES,
        ReceiverKind::Builtin(BuiltinClass::Scanner) => SCANNER_RESPONSES,
        ReceiverKind::Builtin(BuiltinClass::String) => STRING_RESPONSES,
        ReceiverKind::Opaque => &[],
    }
}

/// Canned output for calling `method` on a receiver of `kind`
pub fn canned_response(kind: ReceiverKind, method: &str) -> &'static str {
    table(kind)
        .iter()
        .find(|(name, _)| *name == method)
        .map_or(UNKNOWN_METHOD_RESPONSE, |(_, response)| *response)
}

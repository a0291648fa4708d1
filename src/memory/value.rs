//! Runtime value representation
//!
//! This module defines the [`Value`] enum, which represents every value a REPL
//! variable can hold. Values are tagged so handlers can match on kind instead
//! of guessing from text.
//!
//! # Value Types
//!
//! - [`Value::Str`]: string contents without quotes
//! - [`Value::Int`]: 64-bit signed integer
//! - [`Value::Float`]: 64-bit float
//! - [`Value::Bool`]: `true` / `false`
//! - [`Value::Object`]: synthetic [`ObjectHandle`] produced by `new`
//!
//! # Object Handles
//!
//! Handles carry no field state. The class tag and its [`ClassOrigin`] are
//! kept as first-class fields so method-call simulation never has to infer
//! the class from the rendered `Class@hex` text.

use std::fmt;

/// Runtime values in the interpreter
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Object(ObjectHandle),
}

impl Value {
    /// Short kind name used in diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "String",
            Value::Int(_) => "int",
            Value::Float(_) => "double",
            Value::Bool(_) => "boolean",
            Value::Object(_) => "object",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Numeric view of the value, promoting integers
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{}", s),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => {
                // Whole floats keep one fractional digit (2.0, not 2)
                if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e16 {
                    write!(f, "{:.1}", x)
                } else {
                    write!(f, "{}", x)
                }
            }
            Value::Bool(b) => write!(f, "{}", b),
            Value::Object(handle) => write!(f, "{}", handle),
        }
    }
}

/// Classes the interpreter recognizes without a prior declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinClass {
    String,
    Integer,
    ArrayList,
    HashMap,
    Scanner,
}

impl BuiltinClass {
    pub const ALL: [BuiltinClass; 5] = [
        BuiltinClass::String,
        BuiltinClass::Integer,
        BuiltinClass::ArrayList,
        BuiltinClass::HashMap,
        BuiltinClass::Scanner,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            BuiltinClass::String => "String",
            BuiltinClass::Integer => "Integer",
            BuiltinClass::ArrayList => "ArrayList",
            BuiltinClass::HashMap => "HashMap",
            BuiltinClass::Scanner => "Scanner",
        }
    }
}

/// Where the class behind a handle came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassOrigin {
    Builtin(BuiltinClass),
    Declared,
}

/// Synthetic object identity rendered as `<ClassName>@<hex-id>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectHandle {
    pub class_name: String,
    pub origin: ClassOrigin,
    pub id: u32,
}

impl ObjectHandle {
    pub fn new(class_name: impl Into<String>, origin: ClassOrigin, id: u32) -> Self {
        ObjectHandle {
            class_name: class_name.into(),
            origin,
            id,
        }
    }
}

impl fmt::Display for ObjectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{:x}", self.class_name, self.id)
    }
}

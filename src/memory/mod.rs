//! Memory model for the pseudo-interpreter
//!
//! - [`value`]: Runtime value representation (String, Int, Float, Bool, Object)
//! - [`environment`]: Per-session variables, declared classes, imports and history
//!
//! Nothing here is shared between sessions; each REPL session owns exactly one
//! [`environment::Environment`].

pub mod environment;
pub mod value;

//! Session environment
//!
//! An [`Environment`] owns everything a REPL session remembers between lines:
//! bound variables, declared classes (kept as raw source), active imports and
//! the submitted-line history. It is passed explicitly to every
//! [`submit_line`](crate::interpreter::engine::submit_line) call, so independent
//! sessions never share state.

use crate::interpreter::constants::STANDARD_IMPORTS;
use crate::memory::value::{BuiltinClass, ClassOrigin, ObjectHandle, Value};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::{FxHashMap, FxHashSet};

/// Session-scoped interpreter state
#[derive(Debug, Clone)]
pub struct Environment {
    variables: FxHashMap<String, Value>,
    declared_classes: FxHashMap<String, String>,
    active_imports: FxHashSet<String>,
    history: Vec<String>,
    rng: StdRng,
}

impl Environment {
    /// Fresh environment seeded with the standard imports
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Fresh environment whose object handle ids are reproducible
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Environment {
            variables: FxHashMap::default(),
            declared_classes: FxHashMap::default(),
            active_imports: STANDARD_IMPORTS.iter().map(|s| s.to_string()).collect(),
            history: Vec::new(),
            rng,
        }
    }

    /// Return to the initial session state. The id generator keeps running.
    pub fn reset(&mut self) {
        self.variables.clear();
        self.declared_classes.clear();
        self.active_imports = STANDARD_IMPORTS.iter().map(|s| s.to_string()).collect();
        self.history.clear();
    }

    // ===== Variables =====

    pub fn get_var(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    pub fn has_var(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Bind `name`, replacing any previous value
    pub fn set_var(&mut self, name: impl Into<String>, value: Value) {
        self.variables.insert(name.into(), value);
    }

    pub fn var_count(&self) -> usize {
        self.variables.len()
    }

    /// Variables sorted by name, for display
    pub fn variables_sorted(&self) -> Vec<(&str, &Value)> {
        let mut vars: Vec<(&str, &Value)> = self
            .variables
            .iter()
            .map(|(name, value)| (name.as_str(), value))
            .collect();
        vars.sort_by(|a, b| a.0.cmp(b.0));
        vars
    }

    // ===== Classes =====

    pub fn declare_class(&mut self, name: impl Into<String>, source: impl Into<String>) {
        self.declared_classes.insert(name.into(), source.into());
    }

    pub fn class_source(&self, name: &str) -> Option<&str> {
        self.declared_classes.get(name).map(String::as_str)
    }

    pub fn class_count(&self) -> usize {
        self.declared_classes.len()
    }

    pub fn class_names_sorted(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.declared_classes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Resolve a class name for construction. Declared classes shadow built-ins.
    pub fn resolve_class(&self, name: &str) -> Option<ClassOrigin> {
        if self.declared_classes.contains_key(name) {
            Some(ClassOrigin::Declared)
        } else {
            BuiltinClass::from_name(name).map(ClassOrigin::Builtin)
        }
    }

    /// Generate a new handle for an instance of `class_name`
    pub fn new_handle(&mut self, class_name: &str, origin: ClassOrigin) -> ObjectHandle {
        ObjectHandle::new(class_name, origin, self.rng.random::<u32>())
    }

    // ===== Imports =====

    /// Add an import path; returns `false` when it was already active
    pub fn add_import(&mut self, path: impl Into<String>) -> bool {
        self.active_imports.insert(path.into())
    }

    pub fn imports_sorted(&self) -> Vec<&str> {
        let mut imports: Vec<&str> = self.active_imports.iter().map(String::as_str).collect();
        imports.sort_unstable();
        imports
    }

    // ===== History =====

    pub fn record(&mut self, line: impl Into<String>) {
        self.history.push(line.into());
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

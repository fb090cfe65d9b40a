//! Lexical scopes
//!
//! Each scope owns its bindings and points at the scope it is nested in.
//! Scopes are shared (`Rc<RefCell<..>>`) because closures keep their
//! declaring scope alive after the block that created it has finished.

use crate::token::Token;
use crate::value::{RuntimeError, Value};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Shared handle to a scope
pub type EnvRef = Rc<RefCell<Environment>>;

/// A single scope in the scope chain
#[derive(Debug, Default)]
pub struct Environment {
    /// `None` marks a variable declared without an initializer
    values: HashMap<String, Option<Value>>,
    enclosing: Option<EnvRef>,
}

impl Environment {
    /// Create a global (outermost) scope
    pub fn global() -> EnvRef {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Create a scope nested inside `enclosing`
    pub fn enclosed(enclosing: EnvRef) -> EnvRef {
        Rc::new(RefCell::new(Self {
            values: HashMap::new(),
            enclosing: Some(enclosing),
        }))
    }

    /// Bind `name` in this scope, replacing any existing binding here
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), Some(value));
    }

    /// Bind `name` in this scope without a value
    pub fn declare(&mut self, name: impl Into<String>) {
        self.values.insert(name.into(), None);
    }

    /// Enclosing scope, if any
    pub fn enclosing(&self) -> Option<EnvRef> {
        self.enclosing.clone()
    }

    /// Look up a variable, innermost scope first
    pub fn get(&self, name: &Token) -> Result<Value, RuntimeError> {
        match self.values.get(&name.lexeme) {
            Some(Some(value)) => Ok(value.clone()),
            Some(None) => Err(RuntimeError::UninitializedVariable { name: name.clone() }),
            None => {
                let mut scope = self.enclosing.clone();
                while let Some(env) = scope {
                    let env = env.borrow();
                    match env.values.get(&name.lexeme) {
                        Some(Some(value)) => return Ok(value.clone()),
                        Some(None) => {
                            return Err(RuntimeError::UninitializedVariable { name: name.clone() })
                        }
                        None => scope = env.enclosing.clone(),
                    }
                }
                Err(RuntimeError::UndefinedVariable { name: name.clone() })
            }
        }
    }

    /// Overwrite an existing binding in whichever scope owns it
    ///
    /// Never creates a binding.
    pub fn assign(&mut self, name: &Token, value: Value) -> Result<(), RuntimeError> {
        if let Some(slot) = self.values.get_mut(&name.lexeme) {
            *slot = Some(value);
            return Ok(());
        }

        let mut scope = self.enclosing.clone();
        while let Some(env) = scope {
            let mut env = env.borrow_mut();
            if let Some(slot) = env.values.get_mut(&name.lexeme) {
                *slot = Some(value);
                return Ok(());
            }
            scope = env.enclosing.clone();
        }

        Err(RuntimeError::UndefinedVariable { name: name.clone() })
    }

    /// Value bound to `name` in this scope only, if initialized
    pub fn get_value(&self, name: &str) -> Option<Value> {
        self.values.get(name).cloned().flatten()
    }

    /// Bindings of this scope only, sorted by name
    ///
    /// Uninitialized variables are listed with `None`.
    pub fn bindings(&self) -> Vec<(String, Option<Value>)> {
        let mut bindings: Vec<_> = self
            .values
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        bindings.sort_by(|a, b| a.0.cmp(&b.0));
        bindings
    }

    /// Whether `name` is bound in this scope
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }
}

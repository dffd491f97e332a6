//! Lexical environments.
//!
//! An [`Environment`] is a shared handle to one [`Scope`]. Scopes link to
//! their enclosing scope, so lookups walk outward until the global scope.
//! Closures keep their defining scope alive by holding a handle to it, and
//! every holder sees the same mutable bindings.

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use tscript_ir::Token;

use crate::{RuntimeError, Value};

/// Single-threaded shared, mutable cell.
///
/// All scope allocation goes through [`LocalScope::new`].
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// Whether both handles point to the same scope.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Bindings of one scope plus the link outward.
#[derive(Default)]
pub struct Scope {
    values: FxHashMap<String, Value>,
    enclosing: Option<Environment>,
}

/// Handle to a scope. Cloning the handle shares the scope.
#[derive(Clone)]
pub struct Environment(LocalScope<Scope>);

impl Environment {
    /// A scope with no enclosing scope.
    pub fn new() -> Self {
        Environment(LocalScope::new(Scope::default()))
    }

    /// A fresh scope nested inside `enclosing`.
    pub fn with_enclosing(enclosing: &Environment) -> Self {
        Environment(LocalScope::new(Scope {
            values: FxHashMap::default(),
            enclosing: Some(enclosing.clone()),
        }))
    }

    pub fn enclosing(&self) -> Option<Environment> {
        self.0.borrow().enclosing.clone()
    }

    /// Bind `name` in this scope. Replaces an existing binding in this
    /// scope and shadows any outer one.
    pub fn define(&self, name: impl Into<String>, value: Value) {
        self.0.borrow_mut().values.insert(name.into(), value);
    }

    /// Look `name` up through the scope chain.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        let scope = self.0.borrow();
        if let Some(value) = scope.values.get(name) {
            return Some(value.clone());
        }
        scope.enclosing.as_ref()?.lookup(name)
    }

    /// Like [`Environment::lookup`], failing with `UndefinedVariable`.
    pub fn get(&self, name: &Token) -> Result<Value, RuntimeError> {
        self.lookup(&name.lexeme)
            .ok_or_else(|| RuntimeError::undefined_variable(name))
    }

    /// Overwrite the nearest existing binding of `name`. Never creates one.
    pub fn assign(&self, name: &Token, value: Value) -> Result<(), RuntimeError> {
        let mut scope = self.0.borrow_mut();
        if let Some(slot) = scope.values.get_mut(name.lexeme.as_str()) {
            *slot = value;
            return Ok(());
        }
        match &scope.enclosing {
            Some(enclosing) => enclosing.assign(name, value),
            None => Err(RuntimeError::undefined_variable(name)),
        }
    }

    #[inline]
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        self.0.ptr_eq(&other.0)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.0.borrow();
        let mut names: Vec<&str> = scope.values.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Environment")
            .field("names", &names)
            .field("has_enclosing", &scope.enclosing.is_some())
            .finish()
    }
}

//! RAII environment switching.
//!
//! [`ScopedInterpreter`] installs an environment and puts the previous one
//! back when dropped, so a failing block or call never leaves the
//! interpreter inside a dead scope.
//!
//! ```text
//! let env = Environment::with_enclosing(&interpreter.env);
//! interpreter.with_env(env, |scoped| scoped.execute(stmt))
//! ```

use std::ops::{Deref, DerefMut};

use super::Interpreter;
use crate::Environment;

/// Guard that restores the previous environment on drop.
///
/// Derefs to the interpreter, so it is used exactly like one.
pub struct ScopedInterpreter<'a> {
    interpreter: &'a mut Interpreter,
    previous: Option<Environment>,
}

impl Drop for ScopedInterpreter<'_> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            self.interpreter.env = previous;
        }
    }
}

impl Deref for ScopedInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Install `env` as the current environment until the guard drops.
    pub fn scoped(&mut self, env: Environment) -> ScopedInterpreter<'_> {
        let previous = std::mem::replace(&mut self.env, env);
        ScopedInterpreter {
            interpreter: self,
            previous: Some(previous),
        }
    }

    /// Run `f` with `env` installed, restoring the previous environment
    /// afterwards.
    pub fn with_env<T, F>(&mut self, env: Environment, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_>) -> T,
    {
        let mut scoped = self.scoped(env);
        f(&mut scoped)
    }
}

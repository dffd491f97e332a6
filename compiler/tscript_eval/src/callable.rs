//! Callable values: user functions and natives share one call path.

use std::fmt;
use std::rc::Rc;

use tscript_ir::{FunctionDecl, Token};

use crate::{Environment, Interpreter, RuntimeError, Value};

/// How many arguments a callable accepts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Arity {
    Fixed(usize),
    /// Any number of arguments; the callable validates them itself.
    Variadic,
}

impl Arity {
    #[inline]
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Fixed(n) => n == count,
            Arity::Variadic => true,
        }
    }
}

/// A user-defined function closed over its defining environment.
pub struct FunctionValue {
    pub declaration: Rc<FunctionDecl>,
    pub closure: Environment,
}

/// Native function signature. An `Err` message becomes a runtime error at
/// the call's closing paren.
pub type NativeFn = fn(&mut Interpreter, &[Value]) -> Result<Value, String>;

/// A function implemented by the host.
#[derive(Copy, Clone)]
pub struct NativeFunction {
    pub name: &'static str,
    pub arity: Arity,
    pub func: NativeFn,
}

/// Anything that can appear before `(...)`.
#[derive(Clone)]
pub enum Callable {
    User(Rc<FunctionValue>),
    Native(NativeFunction),
}

impl Callable {
    pub fn name(&self) -> &str {
        match self {
            Callable::User(function) => &function.declaration.name.lexeme,
            Callable::Native(native) => native.name,
        }
    }

    pub fn arity(&self) -> Arity {
        match self {
            Callable::User(function) => Arity::Fixed(function.declaration.params.len()),
            Callable::Native(native) => native.arity,
        }
    }

    /// Invoke with already-evaluated arguments. Arity is checked by the
    /// caller.
    pub fn call(
        &self,
        interpreter: &mut Interpreter,
        args: Vec<Value>,
        paren: &Token,
    ) -> Result<Value, RuntimeError> {
        match self {
            Callable::User(function) => interpreter.call_function(function, args, paren),
            Callable::Native(native) => (native.func)(interpreter, &args)
                .map_err(|message| RuntimeError::native_failure(paren, message)),
        }
    }

    /// Identity comparison. Natives are identified by name.
    pub fn ptr_eq(&self, other: &Callable) -> bool {
        match (self, other) {
            (Callable::User(a), Callable::User(b)) => Rc::ptr_eq(a, b),
            (Callable::Native(a), Callable::Native(b)) => a.name == b.name,
            _ => false,
        }
    }
}

impl fmt::Display for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callable::User(function) => write!(f, "<fn {}>", function.declaration.name.lexeme),
            Callable::Native(native) => write!(f, "<native fn {}>", native.name),
        }
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

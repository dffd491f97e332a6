//! Tree-walking evaluator for T-Script.
//!
//! The [`Interpreter`] walks the statement list produced by
//! `tscript_parse` directly; there is no lowering step. State lives in a
//! chain of [`Environment`]s rooted at the interpreter's globals, and
//! output goes through a [`SharedPrintHandler`] so hosts can capture it.
//!
//! ```text
//! let mut interpreter = InterpreterBuilder::new()
//!     .print_handler(buffer_handler())
//!     .build();
//! interpreter.interpret(&statements)?;
//! ```

mod callable;
mod environment;
mod errors;
mod interpreter;
mod natives;
mod operators;
mod print_handler;
mod value;

pub use callable::{Arity, Callable, FunctionValue, NativeFn, NativeFunction};
pub use environment::{Environment, LocalScope, Scope};
pub use errors::{RuntimeError, RuntimeErrorKind};
pub use interpreter::{
    Flow, Interpreter, InterpreterBuilder, ScopedInterpreter, DEFAULT_MAX_CALL_DEPTH,
};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use value::Value;

//! Native functions bound in the global scope.

use crate::{Arity, Callable, Environment, Interpreter, NativeFunction, Value};

/// `print(a, b, ...)`: writes the arguments separated by spaces, then a
/// newline. At least one argument is required.
pub(crate) const PRINT: NativeFunction = NativeFunction {
    name: "print",
    arity: Arity::Variadic,
    func: print,
};

fn print(interpreter: &mut Interpreter, args: &[Value]) -> Result<Value, String> {
    if args.is_empty() {
        return Err("print expects at least one argument".to_string());
    }
    let line = args
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    interpreter.print_handler().println(&line);
    Ok(Value::Null)
}

/// Bind every native into `globals`.
pub(crate) fn register(globals: &Environment) {
    for native in [PRINT] {
        globals.define(native.name, Value::Callable(Callable::Native(native)));
    }
}

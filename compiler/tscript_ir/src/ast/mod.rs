//! Abstract syntax tree.
//!
//! Two closed node families: [`Expr`] and [`Stmt`]. Consumers (the
//! evaluator, the printer) dispatch with exhaustive `match`.
//!
//! Every node owns its children; the only sharing is the `Rc` around
//! [`FunctionDecl`], which lets function values reference their declaration
//! without cloning the body.

mod expr;
pub mod printer;
mod stmt;

pub use expr::{Expr, LiteralValue};
pub use stmt::{FunctionDecl, Stmt};

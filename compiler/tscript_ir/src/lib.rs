//! T-Script IR - the vocabulary shared by every interpreter phase.
//!
//! - [`Span`]: byte ranges into the source text
//! - [`Token`] / [`TokenKind`]: lexer output, parser input
//! - [`ast`]: the closed `Expr` and `Stmt` node sets plus the s-expression
//!   printer
//! - [`number`]: display formatting for the language's 64-bit numbers
//!
//! Nothing in this crate depends on another interpreter crate.

pub mod ast;
pub mod number;
mod span;
mod token;

pub use ast::{Expr, FunctionDecl, LiteralValue, Stmt};
pub use span::Span;
pub use token::{Token, TokenKind, TokenLiteral};

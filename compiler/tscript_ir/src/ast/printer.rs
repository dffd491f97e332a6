//! Parenthesized prefix rendering of the AST.
//!
//! `1 + 2 * x` prints as `(+ 1 (* 2 x))`. The output is meant for humans
//! and tests; it is not parseable T-Script.

use std::fmt::{self, Write};

use tscript_stack::ensure_sufficient_stack;

use super::{Expr, LiteralValue, Stmt};
use crate::number::format_number;

/// Render one expression.
pub fn print_expr(expr: &Expr) -> String {
    expr.to_string()
}

/// Render a program, one top-level statement per line.
pub fn print_program(statements: &[Stmt]) -> String {
    let mut out = String::new();
    for stmt in statements {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{stmt}");
    }
    out
}

pub(crate) fn write_expr(f: &mut impl Write, expr: &Expr) -> fmt::Result {
    ensure_sufficient_stack(|| match expr {
        Expr::Literal(value) => write_literal(f, value),
        Expr::Variable { name } => f.write_str(&name.lexeme),
        Expr::Assign { name, value } => {
            write!(f, "(= {} ", name.lexeme)?;
            write_expr(f, value)?;
            f.write_char(')')
        }
        Expr::Binary {
            left,
            operator,
            right,
        }
        | Expr::Logical {
            left,
            operator,
            right,
        } => parenthesize(f, &operator.lexeme, &[left.as_ref(), right.as_ref()]),
        Expr::Unary { operator, right } => parenthesize(f, &operator.lexeme, &[right.as_ref()]),
        Expr::Ternary {
            condition,
            then_branch,
            else_branch,
        } => parenthesize(
            f,
            "?:",
            &[condition.as_ref(), then_branch.as_ref(), else_branch.as_ref()],
        ),
        Expr::Grouping(inner) => parenthesize(f, "group", &[inner.as_ref()]),
        Expr::Call { callee, args, .. } => {
            f.write_str("(call ")?;
            write_expr(f, callee)?;
            for arg in args {
                f.write_char(' ')?;
                write_expr(f, arg)?;
            }
            f.write_char(')')
        }
        Expr::Postfix { name, operator } => write!(f, "({} {})", name.lexeme, operator.lexeme),
        Expr::Prefix { operator, name } => write!(f, "({} {})", operator.lexeme, name.lexeme),
    })
}

pub(crate) fn write_stmt(f: &mut impl Write, stmt: &Stmt) -> fmt::Result {
    ensure_sufficient_stack(|| match stmt {
        Stmt::Expression(expr) => parenthesize(f, "expr", &[expr]),
        Stmt::Var { name, initializer } => {
            write!(f, "(var {}", name.lexeme)?;
            if let Some(init) = initializer {
                f.write_char(' ')?;
                write_expr(f, init)?;
            }
            f.write_char(')')
        }
        Stmt::Block(statements) => {
            f.write_str("(block")?;
            write_stmts(f, statements)?;
            f.write_char(')')
        }
        Stmt::If {
            condition,
            then_branch,
            else_branch,
        } => {
            f.write_str("(if ")?;
            write_expr(f, condition)?;
            f.write_char(' ')?;
            write_stmt(f, then_branch)?;
            if let Some(else_branch) = else_branch {
                f.write_char(' ')?;
                write_stmt(f, else_branch)?;
            }
            f.write_char(')')
        }
        Stmt::While { condition, body } => {
            f.write_str("(while ")?;
            write_expr(f, condition)?;
            f.write_char(' ')?;
            write_stmt(f, body)?;
            f.write_char(')')
        }
        Stmt::Function(decl) => {
            write!(f, "(fun {} (", decl.name.lexeme)?;
            for (i, param) in decl.params.iter().enumerate() {
                if i > 0 {
                    f.write_char(' ')?;
                }
                f.write_str(&param.lexeme)?;
            }
            f.write_char(')')?;
            write_stmts(f, &decl.body)?;
            f.write_char(')')
        }
        Stmt::Return { value, .. } => match value {
            Some(value) => parenthesize(f, "return", &[value]),
            None => f.write_str("(return)"),
        },
    })
}

fn write_stmts(f: &mut impl Write, statements: &[Stmt]) -> fmt::Result {
    for stmt in statements {
        f.write_char(' ')?;
        write_stmt(f, stmt)?;
    }
    Ok(())
}

fn write_literal(f: &mut impl Write, value: &LiteralValue) -> fmt::Result {
    match value {
        LiteralValue::Null => f.write_str("null"),
        LiteralValue::Bool(b) => write!(f, "{b}"),
        LiteralValue::Number(n) => f.write_str(&format_number(*n)),
        LiteralValue::String(s) => write!(f, "{s:?}"),
    }
}

fn parenthesize(f: &mut impl Write, name: &str, exprs: &[&Expr]) -> fmt::Result {
    write!(f, "({name}")?;
    for expr in exprs {
        f.write_char(' ')?;
        write_expr(f, expr)?;
    }
    f.write_char(')')
}

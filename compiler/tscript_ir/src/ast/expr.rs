//! Expression nodes.

use std::fmt;
use std::mem;

use crate::Token;

/// Value of a literal expression.
#[derive(Clone, Debug, PartialEq)]
pub enum LiteralValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

/// Expression node.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Literal(LiteralValue),
    Variable {
        name: Token,
    },
    Assign {
        name: Token,
        value: Box<Expr>,
    },
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    /// Short-circuiting `&&` / `||`.
    Logical {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    Unary {
        operator: Token,
        right: Box<Expr>,
    },
    Ternary {
        condition: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
    Grouping(Box<Expr>),
    /// `paren` is the closing `)`, used to locate call diagnostics.
    Call {
        callee: Box<Expr>,
        paren: Token,
        args: Vec<Expr>,
    },
    /// `x++` / `x--`
    Postfix {
        name: Token,
        operator: Token,
    },
    /// `++x` / `--x`
    Prefix {
        operator: Token,
        name: Token,
    },
}

impl Expr {
    #[inline]
    pub fn binary(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    #[inline]
    pub fn logical(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Logical {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    /// No boxed children.
    #[inline]
    fn is_leaf(&self) -> bool {
        matches!(
            self,
            Expr::Literal(_) | Expr::Variable { .. } | Expr::Postfix { .. } | Expr::Prefix { .. }
        )
    }

    /// Move every non-leaf child into `out`, leaving placeholders behind.
    fn take_children(&mut self, out: &mut Vec<Expr>) {
        match self {
            Expr::Literal(_)
            | Expr::Variable { .. }
            | Expr::Postfix { .. }
            | Expr::Prefix { .. } => {}
            Expr::Assign { value: inner, .. }
            | Expr::Unary { right: inner, .. }
            | Expr::Grouping(inner) => take_child(inner, out),
            Expr::Binary { left, right, .. } | Expr::Logical { left, right, .. } => {
                take_child(left, out);
                take_child(right, out);
            }
            Expr::Ternary {
                condition,
                then_branch,
                else_branch,
            } => {
                take_child(condition, out);
                take_child(then_branch, out);
                take_child(else_branch, out);
            }
            Expr::Call { callee, args, .. } => {
                take_child(callee, out);
                for arg in args {
                    take_child(arg, out);
                }
            }
        }
    }
}

#[inline]
fn take_child(slot: &mut Expr, out: &mut Vec<Expr>) {
    if !slot.is_leaf() {
        out.push(mem::replace(slot, Expr::Literal(LiteralValue::Null)));
    }
}

/// Frees nested boxes from a work list, so dropping a deep tree does not
/// recurse once per level.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.take_children(&mut pending);
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::printer::write_expr(f, self)
    }
}

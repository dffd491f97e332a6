//! Statement nodes.

use std::fmt;
use std::mem;
use std::rc::Rc;

use super::Expr;
use crate::Token;

/// A `fun` declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDecl {
    pub name: Token,
    pub params: Vec<Token>,
    pub body: Vec<Stmt>,
}

/// Statement node.
///
/// There is no `for` node: the parser lowers `for` loops into a block
/// around a `While`.
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    Expression(Expr),
    Var {
        name: Token,
        initializer: Option<Expr>,
    },
    Block(Vec<Stmt>),
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    While {
        condition: Expr,
        body: Box<Stmt>,
    },
    Function(Rc<FunctionDecl>),
    Return {
        keyword: Token,
        value: Option<Expr>,
    },
}

impl Stmt {
    /// Move nested statements into `out`. Expressions free themselves.
    fn take_children(&mut self, out: &mut Vec<Stmt>) {
        match self {
            Stmt::Expression(_) | Stmt::Var { .. } | Stmt::Return { .. } => {}
            Stmt::Block(statements) => out.append(statements),
            Stmt::If {
                then_branch,
                else_branch,
                ..
            } => {
                out.push(take_child(then_branch));
                if let Some(else_branch) = else_branch.take() {
                    out.push(*else_branch);
                }
            }
            Stmt::While { body, .. } => out.push(take_child(body)),
            Stmt::Function(decl) => {
                // A function value still holding the declaration frees the
                // body when it goes.
                if let Some(decl) = Rc::get_mut(decl) {
                    out.append(&mut decl.body);
                }
            }
        }
    }
}

#[inline]
fn take_child(slot: &mut Stmt) -> Stmt {
    mem::replace(slot, Stmt::Block(Vec::new()))
}

/// Iterative, like the `Drop` for [`Expr`].
impl Drop for Stmt {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut stmt) = pending.pop() {
            stmt.take_children(&mut pending);
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::printer::write_stmt(f, self)
    }
}

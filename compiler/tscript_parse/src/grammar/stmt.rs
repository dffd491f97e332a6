//! Statement and declaration parsing.

use std::rc::Rc;

use tscript_ir::{Expr, FunctionDecl, LiteralValue, Stmt, TokenKind};
use tscript_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser, MAX_ARITY};

impl Parser<'_> {
    /// `fun` / `var` declarations, or any other statement.
    pub(crate) fn declaration(&mut self) -> Result<Stmt, ParseError> {
        ensure_sufficient_stack(|| {
            tracing::trace!(
                line = self.cursor.peek().line,
                kind = %self.cursor.current_kind(),
                "declaration"
            );
            if self.cursor.eat(TokenKind::Fun).is_some() {
                self.function()
            } else if self.cursor.eat(TokenKind::Var).is_some() {
                self.var_declaration()
            } else {
                self.statement()
            }
        })
    }

    fn statement(&mut self) -> Result<Stmt, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Return => self.return_statement(),
            TokenKind::For => self.for_statement(),
            TokenKind::While => self.while_statement(),
            TokenKind::If => self.if_statement(),
            TokenKind::LeftBrace => {
                self.cursor.advance();
                Ok(Stmt::Block(self.block()?))
            }
            _ => self.expression_statement(),
        }
    }

    fn function(&mut self) -> Result<Stmt, ParseError> {
        let name = self
            .cursor
            .expect(TokenKind::Identifier, "expected function name")?
            .clone();
        self.cursor
            .expect(TokenKind::LeftParen, "expected '(' after function name")?;

        let mut params = Vec::new();
        if !self.cursor.check(TokenKind::RightParen) {
            loop {
                if params.len() >= MAX_ARITY {
                    return Err(ParseError::too_many_parameters(self.cursor.peek()));
                }
                let param = self
                    .cursor
                    .expect(TokenKind::Identifier, "expected parameter name")?;
                params.push(param.clone());
                if self.cursor.eat(TokenKind::Comma).is_none() {
                    break;
                }
            }
        }
        self.cursor
            .expect(TokenKind::RightParen, "expected ')' after parameters")?;
        self.cursor
            .expect(TokenKind::LeftBrace, "expected '{' before function body")?;
        let body = self.block()?;

        Ok(Stmt::Function(Rc::new(FunctionDecl { name, params, body })))
    }

    fn var_declaration(&mut self) -> Result<Stmt, ParseError> {
        let name = self
            .cursor
            .expect(TokenKind::Identifier, "expected variable name")?
            .clone();
        let initializer = if self.cursor.eat(TokenKind::Equal).is_some() {
            Some(self.expression()?)
        } else {
            None
        };
        self.cursor.expect(
            TokenKind::Semicolon,
            "expected ';' after variable declaration",
        )?;

        Ok(Stmt::Var { name, initializer })
    }

    fn return_statement(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.cursor.advance().clone();
        let value = if self.cursor.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.cursor
            .expect(TokenKind::Semicolon, "expected ';' after return value")?;

        Ok(Stmt::Return { keyword, value })
    }

    /// `for` has no node of its own; it is lowered here to
    /// `{ init; while (cond) { body; incr; } }`.
    fn for_statement(&mut self) -> Result<Stmt, ParseError> {
        self.cursor.advance();
        self.cursor
            .expect(TokenKind::LeftParen, "expected '(' after 'for'")?;

        let initializer = if self.cursor.eat(TokenKind::Semicolon).is_some() {
            None
        } else if self.cursor.eat(TokenKind::Var).is_some() {
            Some(self.var_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let condition = if self.cursor.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.cursor
            .expect(TokenKind::Semicolon, "expected ';' after loop condition")?;

        let increment = if self.cursor.check(TokenKind::RightParen) {
            None
        } else {
            Some(self.expression()?)
        };
        self.cursor
            .expect(TokenKind::RightParen, "expected ')' after for clauses")?;

        let mut body = self.statement()?;
        if let Some(increment) = increment {
            body = Stmt::Block(vec![body, Stmt::Expression(increment)]);
        }
        body = Stmt::While {
            condition: condition.unwrap_or(Expr::Literal(LiteralValue::Bool(true))),
            body: Box::new(body),
        };
        if let Some(initializer) = initializer {
            body = Stmt::Block(vec![initializer, body]);
        }

        Ok(body)
    }

    fn while_statement(&mut self) -> Result<Stmt, ParseError> {
        self.cursor.advance();
        self.cursor
            .expect(TokenKind::LeftParen, "expected '(' after 'while'")?;
        let condition = self.expression()?;
        self.cursor
            .expect(TokenKind::RightParen, "expected ')' after condition")?;
        let body = self.statement()?;

        Ok(Stmt::While {
            condition,
            body: Box::new(body),
        })
    }

    fn if_statement(&mut self) -> Result<Stmt, ParseError> {
        self.cursor.advance();
        self.cursor
            .expect(TokenKind::LeftParen, "expected '(' after 'if'")?;
        let condition = self.expression()?;
        self.cursor
            .expect(TokenKind::RightParen, "expected ')' after if condition")?;

        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.cursor.eat(TokenKind::Else).is_some() {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    /// Declarations up to the closing `}`; the `{` is already consumed.
    fn block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();
        while !self.cursor.check(TokenKind::RightBrace) && !self.cursor.is_at_end() {
            statements.push(self.declaration()?);
        }
        self.cursor
            .expect(TokenKind::RightBrace, "expected '}' after block")?;
        Ok(statements)
    }

    fn expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.expression()?;
        self.cursor
            .expect(TokenKind::Semicolon, "expected ';' after expression")?;
        Ok(Stmt::Expression(expr))
    }
}

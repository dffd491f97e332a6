//! Expression parsing.
//!
//! One method per precedence level, loosest first:
//!
//! | level      | operators        | assoc |
//! |------------|------------------|-------|
//! | assignment | `=`              | right |
//! | ternary    | `? :`            | right |
//! | or         | `\|\|`           | left  |
//! | and        | `&&`             | left  |
//! | equality   | `== !=`          | left  |
//! | bitwise    | `& \|`           | left  |
//! | comparison | `> >= < <=`      | left  |
//! | term       | `+ -`            | left  |
//! | factor     | `* /`            | left  |
//! | unary      | `! - ++x --x`    | right |
//! | postfix    | `x++ x--`        | none  |
//! | call       | `f(args)`        | left  |

use tscript_ir::{Expr, LiteralValue, Token, TokenKind, TokenLiteral};
use tscript_stack::ensure_sufficient_stack;

use crate::recovery::TokenSet;
use crate::{ParseError, Parser, MAX_ARITY};

const EQUALITY_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::EqualEqual)
    .with(TokenKind::BangEqual);

const BITWISE_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::Amp)
    .with(TokenKind::Pipe);

const COMPARISON_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::Greater)
    .with(TokenKind::GreaterEqual)
    .with(TokenKind::Less)
    .with(TokenKind::LessEqual);

const TERM_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::Plus)
    .with(TokenKind::Minus);

const FACTOR_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::Star)
    .with(TokenKind::Slash);

const INCREMENT_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::PlusPlus)
    .with(TokenKind::MinusMinus);

const UNARY_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::Bang)
    .with(TokenKind::Minus);

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Deeply nested input grows the stack instead of overflowing it.
    pub(crate) fn expression(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.assignment())
    }

    fn assignment(&mut self) -> Result<Expr, ParseError> {
        let target = self.ternary()?;

        if let Some(equals) = self.cursor.eat(TokenKind::Equal) {
            let value = self.assignment()?;
            return match &target {
                Expr::Variable { name } => Ok(Expr::Assign {
                    name: name.clone(),
                    value: Box::new(value),
                }),
                _ => Err(ParseError::invalid_assignment_target(equals)),
            };
        }

        Ok(target)
    }

    fn ternary(&mut self) -> Result<Expr, ParseError> {
        let condition = self.or()?;

        if self.cursor.eat(TokenKind::Question).is_none() {
            return Ok(condition);
        }
        let then_branch = self.expression()?;
        self.cursor.expect(
            TokenKind::Colon,
            "expected ':' after then branch of ternary",
        )?;
        let else_branch = self.ternary()?;

        Ok(Expr::Ternary {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        })
    }

    fn or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.and()?;
        while let Some(operator) = self.cursor.eat(TokenKind::PipePipe) {
            let right = self.and()?;
            left = Expr::logical(left, operator.clone(), right);
        }
        Ok(left)
    }

    fn and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.equality()?;
        while let Some(operator) = self.cursor.eat(TokenKind::AmpAmp) {
            let right = self.equality()?;
            left = Expr::logical(left, operator.clone(), right);
        }
        Ok(left)
    }

    fn equality(&mut self) -> Result<Expr, ParseError> {
        self.binary_level(EQUALITY_OPS, Self::bitwise)
    }

    /// `&` and `|` bind tighter than equality but looser than comparison.
    fn bitwise(&mut self) -> Result<Expr, ParseError> {
        self.binary_level(BITWISE_OPS, Self::comparison)
    }

    fn comparison(&mut self) -> Result<Expr, ParseError> {
        self.binary_level(COMPARISON_OPS, Self::term)
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        self.binary_level(TERM_OPS, Self::factor)
    }

    fn factor(&mut self) -> Result<Expr, ParseError> {
        self.binary_level(FACTOR_OPS, Self::unary)
    }

    /// One left-associative binary precedence level.
    #[inline]
    fn binary_level(
        &mut self,
        ops: TokenSet,
        next: fn(&mut Self) -> Result<Expr, ParseError>,
    ) -> Result<Expr, ParseError> {
        let mut left = next(self)?;
        while let Some(operator) = self.cursor.eat_any(ops) {
            let right = next(self)?;
            left = Expr::binary(left, operator.clone(), right);
        }
        Ok(left)
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        if let Some(operator) = self.cursor.eat_any(INCREMENT_OPS) {
            return match &self.unary()? {
                Expr::Variable { name } => Ok(Expr::Prefix {
                    operator: operator.clone(),
                    name: name.clone(),
                }),
                _ => Err(ParseError::invalid_prefix_target(operator)),
            };
        }

        if let Some(operator) = self.cursor.eat_any(UNARY_OPS) {
            let right = self.unary()?;
            return Ok(Expr::Unary {
                operator: operator.clone(),
                right: Box::new(right),
            });
        }

        self.postfix()
    }

    fn postfix(&mut self) -> Result<Expr, ParseError> {
        let expr = self.call()?;

        let Some(operator) = self.cursor.eat_any(INCREMENT_OPS) else {
            return Ok(expr);
        };
        match &expr {
            Expr::Variable { name } => Ok(Expr::Postfix {
                name: name.clone(),
                operator: operator.clone(),
            }),
            _ => Err(ParseError::invalid_postfix_target(operator)),
        }
    }

    fn call(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.primary()?;
        while self.cursor.eat(TokenKind::LeftParen).is_some() {
            expr = self.finish_call(expr)?;
        }
        Ok(expr)
    }

    /// Argument list and closing paren; the `(` is already consumed.
    fn finish_call(&mut self, callee: Expr) -> Result<Expr, ParseError> {
        let mut args = Vec::new();
        if !self.cursor.check(TokenKind::RightParen) {
            loop {
                if args.len() >= MAX_ARITY {
                    return Err(ParseError::too_many_arguments(self.cursor.peek()));
                }
                args.push(self.expression()?);
                if self.cursor.eat(TokenKind::Comma).is_none() {
                    break;
                }
            }
        }
        let paren = self
            .cursor
            .expect(TokenKind::RightParen, "expected ')' after arguments")?;

        Ok(Expr::Call {
            callee: Box::new(callee),
            paren: paren.clone(),
            args,
        })
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.cursor.peek();
        let expr = match token.kind {
            TokenKind::False => Expr::Literal(LiteralValue::Bool(false)),
            TokenKind::True => Expr::Literal(LiteralValue::Bool(true)),
            TokenKind::Null => Expr::Literal(LiteralValue::Null),
            TokenKind::Number | TokenKind::String => Expr::Literal(literal_value(token)),
            TokenKind::Identifier => Expr::Variable {
                name: token.clone(),
            },
            TokenKind::LeftParen => {
                self.cursor.advance();
                let inner = self.expression()?;
                self.cursor
                    .expect(TokenKind::RightParen, "expected ')' after expression")?;
                return Ok(Expr::Grouping(Box::new(inner)));
            }
            _ => return Err(ParseError::expected_expression(token)),
        };
        self.cursor.advance();
        Ok(expr)
    }
}

/// Decoded value of a NUMBER or STRING token.
fn literal_value(token: &Token) -> LiteralValue {
    match &token.literal {
        Some(TokenLiteral::Number(n)) => LiteralValue::Number(*n),
        Some(TokenLiteral::String(s)) => LiteralValue::String(s.clone()),
        None => {
            debug_assert!(false, "literal token without payload: {token}");
            LiteralValue::Null
        }
    }
}

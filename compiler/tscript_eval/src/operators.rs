//! Binary and unary operator semantics.
//!
//! No implicit conversions: `+` takes two numbers or two strings, every
//! other arithmetic, comparison and bitwise operator takes two numbers.

use tscript_ir::{Token, TokenKind};

use crate::{RuntimeError, Value};

/// Evaluate `left <operator> right` for a non-short-circuiting operator.
pub(crate) fn binary(operator: &Token, left: Value, right: Value) -> Result<Value, RuntimeError> {
    match operator.kind {
        TokenKind::EqualEqual => return Ok(Value::Bool(left == right)),
        TokenKind::BangEqual => return Ok(Value::Bool(left != right)),
        TokenKind::Plus => return add(operator, left, right),
        _ => {}
    }

    let (Value::Number(a), Value::Number(b)) = (&left, &right) else {
        return Err(RuntimeError::operands_must_be_numbers(operator));
    };
    let (a, b) = (*a, *b);
    let value = match operator.kind {
        TokenKind::Minus => Value::Number(a - b),
        TokenKind::Star => Value::Number(a * b),
        // IEEE: x / 0 is +-Infinity or NaN, never an error.
        TokenKind::Slash => Value::Number(a / b),
        TokenKind::Greater => Value::Bool(a > b),
        TokenKind::GreaterEqual => Value::Bool(a >= b),
        TokenKind::Less => Value::Bool(a < b),
        TokenKind::LessEqual => Value::Bool(a <= b),
        TokenKind::Amp => Value::Number(f64::from(to_int32(a) & to_int32(b))),
        TokenKind::Pipe => Value::Number(f64::from(to_int32(a) | to_int32(b))),
        kind => unreachable!("parser produced binary expression with operator {kind:?}"),
    };
    Ok(value)
}

fn add(operator: &Token, left: Value, right: Value) -> Result<Value, RuntimeError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::String(a), Value::String(b)) => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(&a);
            joined.push_str(&b);
            Ok(Value::String(joined.into()))
        }
        _ => Err(RuntimeError::operands_must_be_numbers_or_strings(operator)),
    }
}

/// Evaluate `-x` or `!x`.
pub(crate) fn unary(operator: &Token, operand: &Value) -> Result<Value, RuntimeError> {
    match operator.kind {
        TokenKind::Bang => Ok(Value::Bool(!operand.is_truthy())),
        TokenKind::Minus => operand
            .as_number()
            .map(|n| Value::Number(-n))
            .ok_or_else(|| RuntimeError::operand_must_be_number(operator)),
        kind => unreachable!("parser produced unary expression with operator {kind:?}"),
    }
}

/// Convert to a 32-bit signed integer: truncate toward zero, wrap modulo
/// 2^32. NaN and infinities become 0.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    reason = "value is reduced into [0, 2^32) before the cast"
)]
pub(crate) fn to_int32(n: f64) -> i32 {
    const TWO_32: f64 = 4_294_967_296.0;
    if !n.is_finite() {
        return 0;
    }
    let wrapped = n.trunc().rem_euclid(TWO_32);
    (wrapped as u32) as i32
}

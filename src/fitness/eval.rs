//! Arithmetic evaluator for flat expressions.
//!
//! Grammar (whitespace is not accepted):
//!
//! ```text
//! expr   := term   (('+' | '-') term)*
//! term   := number (('*' | '/') number)*
//! number := digit+
//! ```
//!
//! `*` and `/` bind tighter than `+` and `-`; operators of equal precedence
//! associate to the left. Arithmetic is `f64` with real division, so
//! `7/2` evaluates to `3.5`. The only numeric failures are division by zero
//! and a non-finite intermediate value.

use crate::error::EvalError;
use std::iter::Peekable;
use std::str::CharIndices;

/// Evaluates `expr`.
///
/// # Examples
///
/// ```
/// use u_exprga::fitness::eval::evaluate;
/// use u_exprga::error::EvalError;
///
/// assert_eq!(evaluate("2+3*4"), Ok(14.0));
/// assert_eq!(evaluate("8/0"), Err(EvalError::DivisionByZero));
/// ```
pub fn evaluate(expr: &str) -> Result<f64, EvalError> {
    if expr.is_empty() {
        return Err(EvalError::Empty);
    }
    let mut parser = Parser {
        chars: expr.char_indices().peekable(),
    };
    let value = parser.expr()?;
    match parser.chars.next() {
        Some((pos, ch)) => Err(EvalError::UnexpectedChar { ch, pos }),
        None => Ok(value),
    }
}

struct Parser<'a> {
    chars: Peekable<CharIndices<'a>>,
}

impl Parser<'_> {
    fn expr(&mut self) -> Result<f64, EvalError> {
        let mut acc = self.term()?;
        loop {
            match self.peek_char() {
                Some('+') => {
                    self.chars.next();
                    acc = finite(acc + self.term()?)?;
                }
                Some('-') => {
                    self.chars.next();
                    acc = finite(acc - self.term()?)?;
                }
                _ => return Ok(acc),
            }
        }
    }

    fn term(&mut self) -> Result<f64, EvalError> {
        let mut acc = self.number()?;
        loop {
            match self.peek_char() {
                Some('*') => {
                    self.chars.next();
                    acc = finite(acc * self.number()?)?;
                }
                Some('/') => {
                    self.chars.next();
                    let rhs = self.number()?;
                    if rhs == 0.0 {
                        return Err(EvalError::DivisionByZero);
                    }
                    acc = finite(acc / rhs)?;
                }
                _ => return Ok(acc),
            }
        }
    }

    fn number(&mut self) -> Result<f64, EvalError> {
        let mut value: Option<f64> = None;
        while let Some(d) = self.peek_char().and_then(|c| c.to_digit(10)) {
            self.chars.next();
            value = Some(finite(value.unwrap_or(0.0) * 10.0 + d as f64)?);
        }
        match (value, self.chars.peek()) {
            (Some(v), _) => Ok(v),
            (None, None) => Err(EvalError::UnexpectedEnd),
            (None, Some(&(pos, ch))) => Err(EvalError::UnexpectedChar { ch, pos }),
        }
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }
}

fn finite(v: f64) -> Result<f64, EvalError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(EvalError::Overflow)
    }
}

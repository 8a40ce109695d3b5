//! Evaluation of postfix (reverse Polish) arithmetic, e.g. `3 4 + 5 *`.

use std::error::Error;
use std::fmt;

use lifo_core::Stack;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

/// A pure binary operator. `a` is the operand that was pushed first.
pub type BinaryOp = fn(a: f64, b: f64) -> Result<f64, EvalError>;

/// Evaluate `expr` with the default operators `+ - * /`.
pub fn eval_postfix(expr: &str) -> Result<f64, EvalError> {
    Evaluator::default().eval(expr)
}

/// Maps an operator symbol to the function that implements it.
#[derive(Clone)]
pub struct Operators {
    table: FxHashMap<SmolStr, BinaryOp>,
}

impl Operators {
    pub fn empty() -> Self {
        Self { table: FxHashMap::default() }
    }

    /// Register `op` under `symbol`, returning the operator it replaced if any.
    pub fn insert(&mut self, symbol: impl Into<SmolStr>, op: BinaryOp) -> Option<BinaryOp> {
        let symbol = symbol.into();
        assert!(
            !symbol.is_empty() && !symbol.chars().any(char::is_whitespace),
            "operator symbol must be a single non-empty token"
        );
        self.table.insert(symbol, op)
    }

    #[must_use]
    pub fn with(mut self, symbol: impl Into<SmolStr>, op: BinaryOp) -> Self {
        self.insert(symbol, op);
        self
    }

    #[inline]
    pub fn get(&self, symbol: &str) -> Option<BinaryOp> {
        self.table.get(symbol).copied()
    }

    /// The registered symbols in sorted order.
    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols = self.table.keys().map(SmolStr::as_str).collect::<Vec<_>>();
        symbols.sort_unstable();
        symbols
    }
}

impl Default for Operators {
    fn default() -> Self {
        Self::empty().with("+", add).with("-", sub).with("*", mul).with("/", div)
    }
}

impl fmt::Debug for Operators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.symbols()).finish()
    }
}

fn add(a: f64, b: f64) -> Result<f64, EvalError> {
    Ok(a + b)
}

fn sub(a: f64, b: f64) -> Result<f64, EvalError> {
    Ok(a - b)
}

fn mul(a: f64, b: f64) -> Result<f64, EvalError> {
    Ok(a * b)
}

fn div(a: f64, b: f64) -> Result<f64, EvalError> {
    if b == 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    Ok(a / b)
}

#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    operators: Operators,
}

impl Evaluator {
    pub fn new(operators: Operators) -> Self {
        Self { operators }
    }

    pub fn operators(&self) -> &Operators {
        &self.operators
    }

    /// Evaluate a whitespace separated postfix expression.
    /// Each operator pops `b` and then `a` and pushes `a op b`.
    /// Exactly one value must remain once every token has been consumed.
    #[tracing::instrument(level = "debug", skip(self), ret, err)]
    pub fn eval(&self, expr: &str) -> Result<f64, EvalError> {
        let mut stack = Stack::new();
        for (position, token) in expr.split_whitespace().enumerate() {
            if let Some(op) = self.operators.get(token) {
                let underflow =
                    || InvalidExpression::Underflow { token: SmolStr::new(token), position };
                let b = stack.pop().map_err(|_| underflow())?;
                let a = stack.pop().map_err(|_| underflow())?;
                let value = op(a, b)?;
                tracing::trace!(a, b, token, value, "apply operator");
                stack.push(value);
            } else {
                let value = parse_number(token)
                    .ok_or_else(|| InvalidExpression::UnknownToken { token: token.into(), position })?;
                stack.push(value);
            }
        }

        let value = stack.pop().map_err(|_| InvalidExpression::Empty)?;
        if !stack.is_empty() {
            return Err(InvalidExpression::Leftover { count: stack.size() + 1 }.into());
        }

        Ok(value)
    }
}

fn parse_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    InvalidExpression(InvalidExpression),
    DivisionByZero,
}

impl From<InvalidExpression> for EvalError {
    fn from(err: InvalidExpression) -> Self {
        EvalError::InvalidExpression(err)
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::InvalidExpression(err) => write!(f, "invalid expression: {err}"),
            EvalError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl Error for EvalError {}

/// The ways a postfix expression can be malformed.
/// `position` is the zero-based index of the offending token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidExpression {
    Empty,
    Underflow { token: SmolStr, position: usize },
    UnknownToken { token: SmolStr, position: usize },
    Leftover { count: usize },
}

impl fmt::Display for InvalidExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidExpression::Empty => write!(f, "empty expression"),
            InvalidExpression::Underflow { token, position } => {
                write!(f, "operator `{token}` at token {position} needs two operands")
            }
            InvalidExpression::UnknownToken { token, position } => {
                write!(f, "unknown token `{token}` at token {position}")
            }
            InvalidExpression::Leftover { count } => {
                write!(f, "expected a single result but {count} values remain")
            }
        }
    }
}

impl Error for InvalidExpression {}

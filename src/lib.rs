mod display;
mod input;
pub mod logging;
mod session;
mod terminal;

pub use display::{format_number, format_outcome};
pub use input::InputSystem;
pub use session::{Session, SessionError};
pub use terminal::{Console, Script, Terminal};

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

use Operator::*;

/// Why a calculation produced no number. The `Display` text is what the
/// user sees in place of the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Error: Division by zero!")]
    DivisionByZero,
    #[error("Invalid operator!")]
    InvalidOperator,
}

impl Operator {
    #[cfg(test)]
    const ALL: [Operator; 4] = [Add, Sub, Mul, Div];

    pub fn symbol(self) -> char {
        match self {
            Add => '+',
            Sub => '-',
            Mul => '*',
            Div => '/',
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        match self {
            Add => Ok(lhs + rhs),
            Sub => Ok(lhs - rhs),
            Mul => Ok(lhs * rhs),
            Div => {
                if rhs == 0.0 {
                    Err(CalcError::DivisionByZero)
                } else {
                    Ok(lhs / rhs)
                }
            }
        }
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Add),
            "-" => Ok(Sub),
            "*" => Ok(Mul),
            "/" => Ok(Div),
            _ => Err(CalcError::InvalidOperator),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Applies the operator named by `operator` to the two operands.
///
/// Symbols outside `+ - * /` yield [`CalcError::InvalidOperator`] rather
/// than a panic, so callers holding raw user text can pass it straight in.
pub fn calculate(lhs: f64, operator: &str, rhs: f64) -> Result<f64, CalcError> {
    operator.parse::<Operator>()?.apply(lhs, rhs)
}

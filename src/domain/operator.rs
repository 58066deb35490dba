//! Binary operator domain type.
//!
//! This module defines the [`Operator`] enum representing the four arithmetic
//! operations a keypad exposes. Operators parse from and print as their keypad
//! symbol, and serialize as the symbol string so the backend wire protocol
//! carries `"+"`, `"-"`, `"*"`, `"/"` exactly as the keypad produced them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A binary arithmetic operator awaiting application.
///
/// The serde representation is the bare symbol string, matching what the
/// keypad buttons are labeled with and what the backend protocol expects.
///
/// # Examples
///
/// ```
/// use remcalc::Operator;
///
/// assert_eq!(Operator::from_symbol('+'), Some(Operator::Add));
/// assert_eq!(Operator::Divide.symbol(), '/');
/// assert_eq!(Operator::from_symbol('%'), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (`+`).
    #[serde(rename = "+")]
    Add,

    /// Subtraction (`-`).
    #[serde(rename = "-")]
    Subtract,

    /// Multiplication (`*`).
    #[serde(rename = "*")]
    Multiply,

    /// Division (`/`).
    #[serde(rename = "/")]
    Divide,
}

impl Operator {
    /// Parses a keypad symbol into an operator.
    ///
    /// Returns `None` for any character outside `{+, -, *, /}`.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Returns the keypad symbol for this operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

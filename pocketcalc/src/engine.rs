//! Calculator state machine
//!
//! Holds the entry being typed and at most one pending operator together
//! with the operand captured when it was pressed. There is no expression
//! parsing and no precedence: pressing a second operator simply replaces
//! the first.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::format::{format_number, is_non_finite};
use crate::keypad::Key;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("not a digit: {0:?}")]
    InvalidDigit(char),
    #[error("not an operator: {0:?}")]
    InvalidOperator(String),
}

/// A single decimal digit, 0 through 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digit(u8);

impl Digit {
    /// For compile-time tables; out-of-range values fail const evaluation.
    pub const fn from_const(d: u8) -> Self {
        assert!(d <= 9, "digit out of range");
        Digit(d)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.value())
    }
}

impl TryFrom<char> for Digit {
    type Error = EngineError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .map(|d| Digit(d as u8))
            .ok_or(EngineError::InvalidDigit(c))
    }
}

impl TryFrom<u8> for Digit {
    type Error = EngineError;

    fn try_from(d: u8) -> Result<Self, Self::Error> {
        if d <= 9 {
            Ok(Digit(d))
        } else {
            Err(EngineError::InvalidDigit(char::from(b'0'.saturating_add(d))))
        }
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Plain IEEE-754 arithmetic; dividing by zero yields infinity or NaN.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
            Operator::Mul => lhs * rhs,
            Operator::Div => lhs / rhs,
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = EngineError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Operator::ALL
            .into_iter()
            .find(|op| op.symbol() == c)
            .ok_or_else(|| EngineError::InvalidOperator(c.to_string()))
    }
}

impl FromStr for Operator {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Operator::try_from(c),
            _ => Err(EngineError::InvalidOperator(s.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    PendingOperator,
}

/// An operator waiting for its right-hand operand.
#[derive(Debug, Clone, PartialEq)]
struct Pending {
    operator: Operator,
    operand: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    entry: String,
    pending: Option<Pending>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            entry: "0".to_string(),
            pending: None,
        }
    }

    /// The text shown on the display.
    pub fn current_entry(&self) -> &str {
        &self.entry
    }

    /// Left-hand operand, empty when no operator is pending.
    pub fn stored_operand(&self) -> &str {
        self.pending.as_ref().map_or("", |p| p.operand.as_str())
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.as_ref().map(|p| p.operator)
    }

    pub fn mode(&self) -> Mode {
        if self.pending.is_some() {
            Mode::PendingOperator
        } else {
            Mode::Idle
        }
    }

    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(d) => self.press_digit(d),
            Key::Operator(op) => self.press_operator(op),
            Key::Equals => self.press_equals(),
            Key::Clear => self.press_clear(),
        }
        tracing::trace!(mode = ?self.mode(), entry = %self.entry, "key handled");
    }

    pub fn press_digit(&mut self, digit: Digit) {
        // a lone zero or an infinite/NaN result is replaced, not extended
        if self.entry == "0" || is_non_finite(&self.entry) {
            self.entry.clear();
        }
        self.entry.push(digit.as_char());
        tracing::debug!(digit = %digit, entry = %self.entry, "digit");
    }

    pub fn press_operator(&mut self, operator: Operator) {
        let operand = std::mem::replace(&mut self.entry, "0".to_string());
        self.pending = Some(Pending { operator, operand });
        tracing::debug!(%operator, stored = %self.stored_operand(), "operator");
    }

    pub fn press_equals(&mut self) {
        let Some(Pending { operator, operand }) = self.pending.take() else {
            return;
        };

        let lhs = parse_operand(&operand);
        let rhs = parse_operand(&self.entry);
        let result = operator.apply(lhs, rhs);
        self.entry = format_number(result);
        tracing::debug!(%operand, %operator, rhs = %rhs, entry = %self.entry, "equals");
    }

    pub fn press_clear(&mut self) {
        *self = Self::new();
        tracing::debug!("clear");
    }
}

fn parse_operand(text: &str) -> f64 {
    text.parse().unwrap_or_else(|err| {
        tracing::warn!(text, %err, "operand is not a number");
        f64::NAN
    })
}

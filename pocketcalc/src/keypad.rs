//! Keypad layout
//!
//! ```text
//! 7 8 9 /
//! 4 5 6 *
//! 1 2 3 -
//! 0 C = +
//! ```

use egui::Color32;
use pocketcore::theme::Palette;

use crate::engine::{Digit, Operator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(Digit),
    Operator(Operator),
    Clear,
    Equals,
}

/// What a key does, which decides its colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    Digit,
    Operator,
    Clear,
    Equals,
}

impl Key {
    pub fn label(self) -> String {
        match self {
            Key::Digit(d) => d.to_string(),
            Key::Operator(op) => op.to_string(),
            Key::Clear => "C".to_string(),
            Key::Equals => "=".to_string(),
        }
    }

    pub fn role(self) -> KeyRole {
        match self {
            Key::Digit(_) => KeyRole::Digit,
            Key::Operator(_) => KeyRole::Operator,
            Key::Clear => KeyRole::Clear,
            Key::Equals => KeyRole::Equals,
        }
    }

    /// Fill colour for this key under `palette`.
    pub fn fill(self, palette: Palette) -> Color32 {
        match self.role() {
            KeyRole::Digit => palette.key,
            KeyRole::Operator => Palette::OPERATOR,
            KeyRole::Clear => Palette::CLEAR,
            KeyRole::Equals => Palette::EQUALS,
        }
    }
}

const fn digit(d: u8) -> Key {
    Key::Digit(Digit::from_const(d))
}

pub const ROWS: [[Key; 4]; 4] = [
    [digit(7), digit(8), digit(9), Key::Operator(Operator::Div)],
    [digit(4), digit(5), digit(6), Key::Operator(Operator::Mul)],
    [digit(1), digit(2), digit(3), Key::Operator(Operator::Sub)],
    [digit(0), Key::Clear, Key::Equals, Key::Operator(Operator::Add)],
];

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Vec<Vec<String>> {
        ROWS.iter()
            .map(|row| row.iter().map(|k| k.label()).collect())
            .collect()
    }

    #[test]
    fn test_layout() {
        assert_eq!(
            labels(),
            vec![
                vec!["7", "8", "9", "/"],
                vec!["4", "5", "6", "*"],
                vec!["1", "2", "3", "-"],
                vec!["0", "C", "=", "+"],
            ]
        );
    }

    #[test]
    fn test_every_digit_and_operator_present() {
        let keys: Vec<Key> = ROWS.iter().flatten().copied().collect();
        for d in 0..=9u8 {
            assert!(keys.contains(&Key::Digit(Digit::try_from(d).unwrap())));
        }
        for op in Operator::ALL {
            assert!(keys.contains(&Key::Operator(op)));
        }
        assert_eq!(keys.iter().filter(|k| k.role() == KeyRole::Clear).count(), 1);
        assert_eq!(keys.iter().filter(|k| k.role() == KeyRole::Equals).count(), 1);
    }

    #[test]
    fn test_fill_by_role() {
        assert_eq!(digit(3).fill(Palette::DARK), Palette::DARK.key);
        assert_eq!(digit(3).fill(Palette::LIGHT), Palette::LIGHT.key);
        assert_eq!(Key::Operator(Operator::Add).fill(Palette::DARK), Palette::OPERATOR);
        assert_eq!(Key::Clear.fill(Palette::LIGHT), Palette::CLEAR);
        assert_eq!(Key::Equals.fill(Palette::LIGHT), Palette::EQUALS);
    }
}

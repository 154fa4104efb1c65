//! Keyboard input to calculator symbols

use crate::engine::{BinaryOp, Symbol};
use egui::Key;

/// Symbol for a typed character, if it means anything to the calculator.
pub fn symbol_for_char(c: char) -> Option<Symbol> {
    let symbol = match c {
        '0'..='9' => Symbol::Digit(c as u8 - b'0'),
        '.' | ',' => Symbol::Decimal,
        '+' => Symbol::Operator(BinaryOp::Add),
        '-' | '−' => Symbol::Operator(BinaryOp::Subtract),
        '*' | 'x' | 'X' | '×' => Symbol::Operator(BinaryOp::Multiply),
        '/' | '÷' => Symbol::Operator(BinaryOp::Divide),
        '=' => Symbol::Equals,
        '%' => Symbol::Percent,
        'r' | 'R' | '√' => Symbol::Sqrt,
        'n' | 'N' | '±' => Symbol::Negate,
        _ => return None,
    };
    Some(symbol)
}

/// Symbol for a key that does not produce text.
pub fn symbol_for_key(key: Key) -> Option<Symbol> {
    match key {
        Key::Enter => Some(Symbol::Equals),
        Key::Backspace => Some(Symbol::Backspace),
        Key::Escape | Key::Delete => Some(Symbol::ClearAll),
        _ => None,
    }
}

/// Shortcut reference shown in the help window.
pub const SHORTCUTS: &[(&str, &str)] = &[
    ("0-9  .", "type a number"),
    ("+ - * /", "operators"),
    ("Enter  =", "evaluate"),
    ("%", "percent"),
    ("r", "square root"),
    ("n", "change sign"),
    ("Backspace", "delete last digit"),
    ("Esc", "clear (AC)"),
    ("Ctrl+C", "copy result"),
    ("Ctrl+V", "paste number"),
];

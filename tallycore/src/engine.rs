//! Input/evaluation state machine
//!
//! The calculator evaluates one pending binary operation at a time, left to
//! right, with no precedence. Every input is a [`Symbol`]; the GUI feeds
//! them in from button clicks and key presses and reads back the display.
//!
//! ```text
//!   Entering ──op──▶ OperatorPending ──digit──▶ Entering ──=──▶ Result
//!      ▲                                                          │
//!      └────────────────────────── digit ◀────────────────────────┘
//!   any state ──÷0 / √-x──▶ Error ──AC──▶ Entering
//! ```

use crate::error::CalcError;
use crate::format::{format_number, parse_numeral, value_of};
use crate::history::{HistoryEntry, HistoryLog};

/// Shown instead of a number while the machine is in the error state.
pub const ERROR_MARKER: &str = "Error";

/// Longest number the keypad will let you type.
const MAX_DIGITS: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    /// Symbol used in the expression line and history.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "×",
            BinaryOp::Divide => "÷",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryOp {
    Clear,
    Recall,
    Add,
    Subtract,
}

/// Everything the calculator accepts as input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// 0 through 9; anything larger is ignored.
    Digit(u8),
    Decimal,
    Operator(BinaryOp),
    Negate,
    Percent,
    Sqrt,
    ClearAll,
    Backspace,
    Equals,
    Memory(MemoryOp),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Digits are being typed.
    Entering,
    /// An operator was chosen; the next digit starts the second operand.
    OperatorPending,
    /// An evaluation or function just produced the displayed value.
    Result,
    /// Only AC is accepted.
    Error,
}

/// Apply `op` to two operands.
pub fn evaluate(lhs: f64, op: BinaryOp, rhs: f64) -> Result<f64, CalcError> {
    let result = match op {
        BinaryOp::Add => lhs + rhs,
        BinaryOp::Subtract => lhs - rhs,
        BinaryOp::Multiply => lhs * rhs,
        BinaryOp::Divide => {
            if rhs == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            lhs / rhs
        }
    };
    if result.is_finite() {
        Ok(result)
    } else {
        Err(CalcError::Overflow)
    }
}

/// Square root, refusing negative input.
pub fn square_root(value: f64) -> Result<f64, CalcError> {
    if value < 0.0 {
        Err(CalcError::NegativeSquareRoot)
    } else {
        Ok(value.sqrt())
    }
}

/// What the presentation layer needs after an input.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayUpdate {
    pub display: String,
    pub expression: String,
    /// Set when the input completed a calculation.
    pub entry: Option<HistoryEntry>,
    pub error: Option<CalcError>,
}

/// Calculator registers. History lives outside, in [`Calculator`].
#[derive(Debug, Clone, PartialEq)]
pub struct CalcState {
    input: String,
    operand1: f64,
    operator: Option<BinaryOp>,
    phase: Phase,
    error: Option<CalcError>,
    memory: f64,
    expression: String,
}

impl Default for CalcState {
    fn default() -> Self {
        Self {
            input: "0".to_string(),
            operand1: 0.0,
            operator: None,
            phase: Phase::Entering,
            error: None,
            memory: 0.0,
            expression: String::new(),
        }
    }
}

/// Pure form of the state machine: the old state is left untouched.
pub fn apply_symbol(state: &CalcState, symbol: Symbol) -> (CalcState, DisplayUpdate) {
    let mut next = state.clone();
    let entry = next.apply(symbol);
    let update = next.update(entry);
    (next, update)
}

impl CalcState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main display: the current numeral, or the error marker.
    pub fn display(&self) -> &str {
        if self.phase == Phase::Error {
            ERROR_MARKER
        } else {
            &self.input
        }
    }

    pub fn current_input(&self) -> &str {
        &self.input
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn operand1(&self) -> f64 {
        self.operand1
    }

    pub fn operator(&self) -> Option<BinaryOp> {
        self.operator
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn error(&self) -> Option<CalcError> {
        self.error
    }

    pub fn has_error(&self) -> bool {
        self.phase == Phase::Error
    }

    /// True right after `=` or a function result: the next digit starts a
    /// new number.
    pub fn fresh_result(&self) -> bool {
        self.phase == Phase::Result
    }

    pub fn memory(&self) -> f64 {
        self.memory
    }

    /// Run one input through the machine. Returns the history entry when
    /// the input completed a calculation.
    pub fn apply(&mut self, symbol: Symbol) -> Option<HistoryEntry> {
        if self.phase == Phase::Error && symbol != Symbol::ClearAll {
            tracing::debug!(?symbol, "ignored in error state");
            return None;
        }

        match symbol {
            Symbol::Digit(d) => {
                if let Some(c) = char::from_digit(u32::from(d), 10) {
                    self.push_digit(c);
                }
                None
            }
            Symbol::Decimal => {
                self.push_decimal();
                None
            }
            Symbol::Operator(op) => self.set_operator(op),
            Symbol::Equals => match self.operator {
                Some(op) => self.evaluate_pending(op).ok(),
                None => None,
            },
            Symbol::ClearAll => {
                self.clear_all();
                None
            }
            Symbol::Negate => {
                self.negate();
                None
            }
            Symbol::Percent => {
                self.input = format_number(value_of(&self.input) / 100.0);
                self.phase = Phase::Result;
                None
            }
            Symbol::Sqrt => {
                match square_root(value_of(&self.input)) {
                    Ok(root) => {
                        self.input = format_number(root);
                        self.phase = Phase::Result;
                    }
                    Err(e) => self.fail(e),
                }
                None
            }
            Symbol::Backspace => {
                self.backspace();
                None
            }
            Symbol::Memory(op) => {
                self.memory_op(op);
                None
            }
        }
    }

    /// Feed an externally supplied numeral as if it had been typed.
    /// Returns false, leaving the state alone, if the text is not a plain
    /// number or the machine is in the error state.
    pub fn enter_numeral(&mut self, text: &str) -> bool {
        if self.phase == Phase::Error {
            return false;
        }
        match parse_numeral(text) {
            Some(numeral) => {
                self.input = numeral;
                self.phase = Phase::Entering;
                true
            }
            None => {
                tracing::debug!(text, "rejected non-numeric input");
                false
            }
        }
    }

    fn update(&self, entry: Option<HistoryEntry>) -> DisplayUpdate {
        DisplayUpdate {
            display: self.display().to_string(),
            expression: self.expression.clone(),
            entry,
            error: self.error,
        }
    }

    fn push_digit(&mut self, c: char) {
        if self.phase != Phase::Entering {
            self.input = c.to_string();
            self.phase = Phase::Entering;
            return;
        }
        if self.input.bytes().filter(u8::is_ascii_digit).count() >= MAX_DIGITS {
            return;
        }
        match self.input.as_str() {
            "0" => self.input = c.to_string(),
            "-0" => self.input = format!("-{}", c),
            _ => self.input.push(c),
        }
    }

    fn push_decimal(&mut self) {
        if self.phase != Phase::Entering {
            self.input = "0.".to_string();
            self.phase = Phase::Entering;
        } else if !self.input.contains('.') {
            self.input.push('.');
        }
    }

    fn set_operator(&mut self, op: BinaryOp) -> Option<HistoryEntry> {
        let mut entry = None;
        if let Some(pending) = self.operator {
            if self.phase == Phase::OperatorPending {
                // no second operand yet, just swap the operator
                self.operator = Some(op);
                self.expression = format!("{} {}", format_number(self.operand1), op.symbol());
                return None;
            }
            match self.evaluate_pending(pending) {
                Ok(done) => entry = Some(done),
                Err(_) => return None,
            }
        }

        self.operand1 = value_of(&self.input);
        self.operator = Some(op);
        self.expression = format!("{} {}", format_number(self.operand1), op.symbol());
        self.phase = Phase::OperatorPending;
        entry
    }

    fn evaluate_pending(&mut self, op: BinaryOp) -> Result<HistoryEntry, CalcError> {
        let rhs = value_of(&self.input);
        let expression = format!(
            "{} {} {}",
            format_number(self.operand1),
            op.symbol(),
            format_number(rhs)
        );

        match evaluate(self.operand1, op, rhs) {
            Ok(result) => {
                let text = format_number(result);
                tracing::debug!(%expression, result = %text, "evaluated");
                self.input = text.clone();
                self.operand1 = result;
                self.operator = None;
                self.phase = Phase::Result;
                self.expression = format!("{} =", expression);
                Ok(HistoryEntry::new(expression, text))
            }
            Err(e) => {
                self.expression = format!("{} =", expression);
                self.fail(e);
                Err(e)
            }
        }
    }

    fn fail(&mut self, error: CalcError) {
        tracing::debug!(%error, "calculation failed");
        self.error = Some(error);
        self.operator = None;
        self.phase = Phase::Error;
    }

    fn clear_all(&mut self) {
        self.input = "0".to_string();
        self.operand1 = 0.0;
        self.operator = None;
        self.error = None;
        self.phase = Phase::Entering;
        self.expression.clear();
    }

    fn negate(&mut self) {
        if value_of(&self.input) == 0.0 {
            return;
        }
        self.input = match self.input.strip_prefix('-') {
            Some(rest) => rest.to_string(),
            None => format!("-{}", self.input),
        };
    }

    fn backspace(&mut self) {
        if self.phase != Phase::Entering {
            return;
        }
        self.input.pop();
        if self.input.is_empty() || self.input == "-" {
            self.input = "0".to_string();
        }
    }

    fn memory_op(&mut self, op: MemoryOp) {
        let next = match op {
            MemoryOp::Clear => 0.0,
            MemoryOp::Recall => {
                self.input = format_number(self.memory);
                self.phase = Phase::Result;
                return;
            }
            MemoryOp::Add => self.memory + value_of(&self.input),
            MemoryOp::Subtract => self.memory - value_of(&self.input),
        };
        if next.is_finite() {
            self.memory = next;
        } else {
            tracing::warn!(?op, "memory overflow, value kept");
        }
    }
}

/// A calculator session: the state machine plus its history log.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: CalcState,
    history: HistoryLog,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history(history: HistoryLog) -> Self {
        Self {
            state: CalcState::default(),
            history,
        }
    }

    /// Apply one input, recording any completed calculation.
    pub fn press(&mut self, symbol: Symbol) -> DisplayUpdate {
        let entry = self.state.apply(symbol);
        if let Some(done) = &entry {
            self.history.append(done.clone());
        }
        self.state.update(entry)
    }

    /// Apply a sequence of inputs; returns the last update.
    pub fn press_all(&mut self, symbols: impl IntoIterator<Item = Symbol>) -> DisplayUpdate {
        for symbol in symbols {
            self.press(symbol);
        }
        self.state.update(None)
    }

    pub fn enter_numeral(&mut self, text: &str) -> bool {
        self.state.enter_numeral(text)
    }

    pub fn state(&self) -> &CalcState {
        &self.state
    }

    pub fn display(&self) -> &str {
        self.state.display()
    }

    pub fn expression(&self) -> &str {
        self.state.expression()
    }

    pub fn memory(&self) -> f64 {
        self.state.memory()
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Text for "copy result": the latest history result, or whatever is on
    /// the display when nothing has been calculated yet.
    pub fn copy_text(&self) -> String {
        self.history
            .latest_result_text()
            .unwrap_or_else(|| self.state.display())
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(s: &str) -> Vec<Symbol> {
        s.chars()
            .map(|c| match c {
                '.' => Symbol::Decimal,
                d => Symbol::Digit(d.to_digit(10).map(|v| v as u8).unwrap_or(0)),
            })
            .collect()
    }

    fn calc_with(symbols: &[Symbol]) -> Calculator {
        let mut calc = Calculator::new();
        calc.press_all(symbols.iter().copied());
        calc
    }

    const ADD: Symbol = Symbol::Operator(BinaryOp::Add);
    const SUB: Symbol = Symbol::Operator(BinaryOp::Subtract);
    const MUL: Symbol = Symbol::Operator(BinaryOp::Multiply);
    const DIV: Symbol = Symbol::Operator(BinaryOp::Divide);

    #[test]
    fn test_initial_state() {
        let calc = Calculator::new();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.expression(), "");
        assert_eq!(calc.state().phase(), Phase::Entering);
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_typing_digits() {
        let calc = calc_with(&digits("0123.45"));
        assert_eq!(calc.display(), "123.45");
        assert_eq!(calc.state().phase(), Phase::Entering);
    }

    #[test]
    fn test_single_decimal_point() {
        let calc = calc_with(&digits("1.2.3."));
        assert_eq!(calc.display(), "1.23");
    }

    #[test]
    fn test_leading_decimal() {
        let calc = calc_with(&digits(".5"));
        assert_eq!(calc.display(), "0.5");
    }

    #[test]
    fn test_digit_cap() {
        let calc = calc_with(&digits("12345678901234567890"));
        assert_eq!(calc.display(), "123456789012345");
    }

    #[test]
    fn test_typed_input_always_parses() {
        for seq in ["0", "00", "1.", "9.99999999999999", "0.000", "123456789012345678"] {
            let calc = calc_with(&digits(seq));
            let value: f64 = calc.display().parse().expect("numeral");
            assert!(value.is_finite(), "{} -> {}", seq, calc.display());
        }
    }

    #[test]
    fn test_evaluate_basic_ops() {
        assert_eq!(evaluate(2.5, BinaryOp::Add, 4.0), Ok(6.5));
        assert_eq!(evaluate(2.5, BinaryOp::Subtract, 4.0), Ok(-1.5));
        assert_eq!(evaluate(2.5, BinaryOp::Multiply, 4.0), Ok(10.0));
        assert_eq!(evaluate(10.0, BinaryOp::Divide, 4.0), Ok(2.5));
        assert_eq!(evaluate(7.0, BinaryOp::Divide, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(evaluate(0.0, BinaryOp::Divide, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(evaluate(f64::MAX, BinaryOp::Multiply, 10.0), Err(CalcError::Overflow));
    }

    #[test]
    fn test_simple_addition() {
        let mut calc = Calculator::new();
        calc.press_all(digits("12"));
        let update = calc.press(ADD);
        assert_eq!(update.expression, "12 +");
        assert_eq!(calc.state().phase(), Phase::OperatorPending);
        calc.press_all(digits("34"));
        let update = calc.press(Symbol::Equals);
        assert_eq!(update.display, "46");
        assert_eq!(update.expression, "12 + 34 =");
        let entry = update.entry.expect("history entry");
        assert_eq!(entry.expression_text(), "12 + 34");
        assert_eq!(entry.result_text(), "46");
        assert_eq!(calc.state().phase(), Phase::Result);
        assert_eq!(calc.state().operator(), None);
    }

    #[test]
    fn test_chained_operations() {
        let mut symbols = digits("5");
        symbols.push(ADD);
        symbols.extend(digits("3"));
        symbols.push(ADD);
        let mut calc = calc_with(&symbols);
        assert_eq!(calc.display(), "8");
        assert_eq!(calc.expression(), "8 +");
        calc.press_all(digits("2"));
        calc.press(Symbol::Equals);
        assert_eq!(calc.display(), "10");
        let results: Vec<&str> = calc.history().all().map(HistoryEntry::result_text).collect();
        assert_eq!(results, vec!["8", "10"]);
    }

    #[test]
    fn test_no_precedence() {
        let mut symbols = digits("2");
        symbols.push(ADD);
        symbols.extend(digits("3"));
        symbols.push(MUL);
        symbols.extend(digits("4"));
        symbols.push(Symbol::Equals);
        let calc = calc_with(&symbols);
        assert_eq!(calc.display(), "20");
    }

    #[test]
    fn test_operator_replaced_before_second_operand() {
        let mut symbols = digits("9");
        symbols.push(ADD);
        symbols.push(SUB);
        let calc = calc_with(&symbols);
        assert_eq!(calc.expression(), "9 -");
        assert_eq!(calc.state().operator(), Some(BinaryOp::Subtract));
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_equals_without_operator_is_noop() {
        let mut calc = calc_with(&digits("42"));
        let update = calc.press(Symbol::Equals);
        assert_eq!(update.display, "42");
        assert!(update.entry.is_none());
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_equals_reuses_display_as_second_operand() {
        let mut symbols = digits("5");
        symbols.push(ADD);
        symbols.push(Symbol::Equals);
        let calc = calc_with(&symbols);
        assert_eq!(calc.display(), "10");
    }

    #[test]
    fn test_digit_after_result_starts_new_number() {
        let mut symbols = digits("2");
        symbols.push(MUL);
        symbols.extend(digits("3"));
        symbols.push(Symbol::Equals);
        symbols.extend(digits("7"));
        let calc = calc_with(&symbols);
        assert_eq!(calc.display(), "7");
        assert_eq!(calc.state().phase(), Phase::Entering);
    }

    #[test]
    fn test_operator_after_result_continues_from_it() {
        let mut symbols = digits("2");
        symbols.push(MUL);
        symbols.extend(digits("3"));
        symbols.push(Symbol::Equals);
        symbols.push(SUB);
        symbols.extend(digits("1"));
        symbols.push(Symbol::Equals);
        let calc = calc_with(&symbols);
        assert_eq!(calc.display(), "5");
        assert_eq!(calc.history().len(), 2);
    }

    #[test]
    fn test_division_by_zero() {
        let mut symbols = digits("8");
        symbols.push(DIV);
        symbols.extend(digits("0"));
        let mut calc = calc_with(&symbols);
        let update = calc.press(Symbol::Equals);
        assert_eq!(update.display, ERROR_MARKER);
        assert_eq!(update.error, Some(CalcError::DivisionByZero));
        assert!(calc.state().has_error());
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_division_by_zero_while_chaining() {
        let mut symbols = digits("8");
        symbols.push(DIV);
        symbols.extend(digits("0"));
        symbols.push(ADD);
        let calc = calc_with(&symbols);
        assert_eq!(calc.display(), ERROR_MARKER);
        assert_eq!(calc.state().error(), Some(CalcError::DivisionByZero));
    }

    #[test]
    fn test_error_ignores_everything_but_clear() {
        let mut symbols = digits("1");
        symbols.push(DIV);
        symbols.extend(digits("0"));
        symbols.push(Symbol::Equals);
        let mut calc = calc_with(&symbols);
        let before = calc.state().clone();
        for symbol in [
            Symbol::Digit(5),
            Symbol::Decimal,
            ADD,
            Symbol::Equals,
            Symbol::Negate,
            Symbol::Percent,
            Symbol::Sqrt,
            Symbol::Backspace,
            Symbol::Memory(MemoryOp::Add),
            Symbol::Memory(MemoryOp::Recall),
        ] {
            calc.press(symbol);
            assert_eq!(calc.state(), &before, "{:?} changed the error state", symbol);
        }
        assert!(!calc.enter_numeral("12"));
        assert_eq!(calc.state(), &before);
    }

    #[test]
    fn test_clear_all_from_any_state() {
        let mut error = digits("1");
        error.extend([DIV, Symbol::Digit(0), Symbol::Equals]);
        let mut pending = digits("4");
        pending.push(ADD);
        let mut result = pending.clone();
        result.extend([Symbol::Digit(1), Symbol::Equals]);

        for symbols in [digits("123.4"), pending, result, error] {
            let mut calc = calc_with(&symbols);
            let update = calc.press(Symbol::ClearAll);
            assert_eq!(update.display, "0");
            assert_eq!(update.expression, "");
            assert_eq!(calc.state().phase(), Phase::Entering);
            assert_eq!(calc.state().operator(), None);
            assert_eq!(calc.state().error(), None);
        }
    }

    #[test]
    fn test_clear_all_keeps_memory_and_history() {
        let mut symbols = digits("3");
        symbols.extend([Symbol::Memory(MemoryOp::Add), ADD, Symbol::Digit(1), Symbol::Equals]);
        symbols.push(Symbol::ClearAll);
        let calc = calc_with(&symbols);
        assert_eq!(calc.memory(), 3.0);
        assert_eq!(calc.history().len(), 1);
    }

    #[test]
    fn test_history_tracks_display() {
        let mut calc = Calculator::new();
        for (a, b) in [("7", "6"), ("1.5", "2"), ("100", "0.25")] {
            calc.press_all(digits(a));
            calc.press(MUL);
            calc.press_all(digits(b));
            let before = calc.history().len();
            calc.press(Symbol::Equals);
            assert_eq!(calc.history().len(), before + 1);
            assert_eq!(calc.history().latest_result_text(), Some(calc.display()));
        }
    }

    #[test]
    fn test_negate() {
        let mut calc = calc_with(&digits("12.5"));
        calc.press(Symbol::Negate);
        assert_eq!(calc.display(), "-12.5");
        assert_eq!(calc.state().phase(), Phase::Entering);
        calc.press(Symbol::Negate);
        assert_eq!(calc.display(), "12.5");
    }

    #[test]
    fn test_negate_zero_stays_zero() {
        let calc = calc_with(&[Symbol::Negate]);
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_negate_then_keep_typing() {
        let mut symbols = digits("4");
        symbols.push(Symbol::Negate);
        symbols.extend(digits("2"));
        let calc = calc_with(&symbols);
        assert_eq!(calc.display(), "-42");
    }

    #[test]
    fn test_percent() {
        let mut symbols = digits("50");
        symbols.push(Symbol::Percent);
        let calc = calc_with(&symbols);
        assert_eq!(calc.display(), "0.5");
        assert!(calc.state().fresh_result());
    }

    #[test]
    fn test_sqrt() {
        let mut symbols = digits("9");
        symbols.push(Symbol::Sqrt);
        let calc = calc_with(&symbols);
        assert_eq!(calc.display(), "3");
        assert_eq!(calc.state().phase(), Phase::Result);

        assert_eq!(square_root(-1.0), Err(CalcError::NegativeSquareRoot));
        assert_eq!(square_root(9.0), Ok(3.0));
    }

    #[test]
    fn test_sqrt_of_negative() {
        let mut symbols = digits("1");
        symbols.extend([Symbol::Negate, Symbol::Sqrt]);
        let calc = calc_with(&symbols);
        assert_eq!(calc.display(), ERROR_MARKER);
        assert_eq!(calc.state().error(), Some(CalcError::NegativeSquareRoot));
    }

    #[test]
    fn test_sqrt_as_second_operand() {
        let mut symbols = digits("9");
        symbols.push(ADD);
        symbols.extend(digits("16"));
        symbols.extend([Symbol::Sqrt, Symbol::Equals]);
        let calc = calc_with(&symbols);
        assert_eq!(calc.display(), "13");
        assert_eq!(calc.history().latest().map(HistoryEntry::expression_text), Some("9 + 4"));
    }

    #[test]
    fn test_memory_ops() {
        let mut calc = calc_with(&digits("5"));
        calc.press(Symbol::Memory(MemoryOp::Add));
        calc.press(Symbol::Memory(MemoryOp::Add));
        calc.press(Symbol::ClearAll);
        calc.press_all(digits("3"));
        calc.press(Symbol::Memory(MemoryOp::Subtract));
        assert_eq!(calc.memory(), 7.0);

        calc.press(Symbol::ClearAll);
        calc.press(Symbol::Memory(MemoryOp::Recall));
        assert_eq!(calc.display(), "7");
        assert_eq!(calc.state().phase(), Phase::Result);

        calc.press(Symbol::Memory(MemoryOp::Clear));
        assert_eq!(calc.memory(), 0.0);
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_backspace() {
        let mut calc = calc_with(&digits("12.3"));
        calc.press(Symbol::Backspace);
        assert_eq!(calc.display(), "12.");
        calc.press(Symbol::Backspace);
        calc.press(Symbol::Backspace);
        assert_eq!(calc.display(), "1");
        calc.press(Symbol::Backspace);
        assert_eq!(calc.display(), "0");
        calc.press(Symbol::Backspace);
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_backspace_negative_number() {
        let mut symbols = digits("7");
        symbols.extend([Symbol::Negate, Symbol::Backspace]);
        let calc = calc_with(&symbols);
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_backspace_ignored_on_result() {
        let mut symbols = digits("12");
        symbols.extend([ADD, Symbol::Digit(3), Symbol::Equals, Symbol::Backspace]);
        let calc = calc_with(&symbols);
        assert_eq!(calc.display(), "15");
    }

    #[test]
    fn test_enter_numeral() {
        let mut calc = calc_with(&digits("9"));
        assert!(calc.enter_numeral(" 3.75 "));
        assert_eq!(calc.display(), "3.75");
        assert_eq!(calc.state().phase(), Phase::Entering);

        assert!(!calc.enter_numeral("hello"));
        assert_eq!(calc.display(), "3.75");
    }

    #[test]
    fn test_pasted_number_as_second_operand() {
        let mut calc = calc_with(&digits("10"));
        calc.press(SUB);
        assert!(calc.enter_numeral("2.5"));
        calc.press(Symbol::Equals);
        assert_eq!(calc.display(), "7.5");
    }

    #[test]
    fn test_apply_symbol_is_pure() {
        let start = CalcState::new();
        let (after_digit, update) = apply_symbol(&start, Symbol::Digit(7));
        assert_eq!(start.display(), "0");
        assert_eq!(update.display, "7");
        let (after_op, _) = apply_symbol(&after_digit, ADD);
        let (after_rhs, _) = apply_symbol(&after_op, Symbol::Digit(1));
        let (_, update) = apply_symbol(&after_rhs, Symbol::Equals);
        assert_eq!(update.display, "8");
        assert_eq!(update.entry, Some(HistoryEntry::new("7 + 1", "8")));
    }

    #[test]
    fn test_invalid_digit_ignored() {
        let calc = calc_with(&[Symbol::Digit(4), Symbol::Digit(12)]);
        assert_eq!(calc.display(), "4");
    }

    #[test]
    fn test_copy_text() {
        let mut calc = calc_with(&digits("64"));
        assert_eq!(calc.copy_text(), "64");
        calc.press(Symbol::Sqrt);
        calc.press(ADD);
        calc.press(Symbol::Digit(1));
        calc.press(Symbol::Equals);
        calc.press_all(digits("5"));
        assert_eq!(calc.copy_text(), "9");
    }

    #[test]
    fn test_overflow_is_an_error() {
        let mut calc = Calculator::new();
        assert!(calc.enter_numeral("999999999999999"));
        for _ in 0..25 {
            calc.press(MUL);
            calc.enter_numeral("999999999999999");
        }
        calc.press(Symbol::Equals);
        assert_eq!(calc.display(), ERROR_MARKER);
        assert_eq!(calc.state().error(), Some(CalcError::Overflow));
    }
}

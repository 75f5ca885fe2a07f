//! Calculation engine
//!
//! `CalcState` is the whole calculator: the display text, the running
//! accumulator, the pending operator, the entry flag and the history line.
//! Every button press is one call to [`CalcState::apply`], which mutates the
//! state and returns the two strings the shell shows.
//!
//! Operators chain strictly left to right: pressing an operator while one is
//! already pending collapses the pending one into the accumulator first.

use crate::format::{is_marker, parse_display, Formatter, ERROR_MARKER};
use crate::input::{Input, Operator};

/// One-shot preview message. Replaces the derived preview until the next input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    DivideByZero,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::DivideByZero => "Cannot divide by zero",
        }
    }
}

/// What the shell renders after an input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Output {
    pub display: String,
    pub preview: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalcState {
    display: String,
    accumulator: f64,
    pending: Option<Operator>,
    awaiting_operand: bool,
    history: String,
    notice: Option<Notice>,
    formatter: Formatter,
}

impl Default for CalcState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalcState {
    pub fn new() -> Self {
        Self::with_formatter(Formatter::default())
    }

    pub fn with_formatter(formatter: Formatter) -> Self {
        Self {
            display: "0".to_string(),
            accumulator: 0.0,
            pending: None,
            awaiting_operand: true,
            history: String::new(),
            notice: None,
            formatter,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    pub fn pending(&self) -> Option<Operator> {
        self.pending
    }

    /// True when the next digit starts a fresh number.
    pub fn is_awaiting_operand(&self) -> bool {
        self.awaiting_operand
    }

    pub fn history(&self) -> &str {
        &self.history
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn formatter(&self) -> Formatter {
        self.formatter
    }

    /// Apply one button press and return what to show.
    pub fn apply(&mut self, input: Input) -> Output {
        self.notice = None;

        match input {
            Input::Digit(d) => self.input_digit(d),
            Input::Point => self.input_point(),
            Input::ToggleSign => self.toggle_sign(),
            Input::Percent => self.percent(),
            Input::AllClear | Input::ClearEntry => self.clear(),
            Input::SoftClear => self.soft_clear(),
            Input::Backspace => self.backspace(),
            Input::Operator(op) => self.set_operation(op),
            Input::Equals => self.equals(),
        }

        self.output()
    }

    pub fn output(&self) -> Output {
        Output {
            display: self.display.clone(),
            preview: self.preview(),
        }
    }

    /// Preview line derived from the current state.
    pub fn preview(&self) -> String {
        if let Some(notice) = self.notice {
            return notice.message().to_string();
        }
        if self.history.is_empty() {
            return String::new();
        }
        if self.pending.is_none() || self.awaiting_operand {
            return self.history.clone();
        }
        format!("{} {}", self.history, self.display)
    }

    fn operand(&self) -> Option<f64> {
        parse_display(&self.display)
    }

    fn input_digit(&mut self, d: u8) {
        let Some(ch) = char::from_digit(u32::from(d), 10) else {
            tracing::debug!(digit = d, "ignoring out-of-range digit");
            return;
        };

        if self.awaiting_operand || self.display == "0" {
            self.display = ch.to_string();
            self.awaiting_operand = false;
        } else {
            self.display.push(ch);
        }
    }

    fn input_point(&mut self) {
        if self.awaiting_operand {
            self.display = "0.".to_string();
            self.awaiting_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    fn toggle_sign(&mut self) {
        if let Some(val) = self.operand() {
            self.display = self.formatter.format(-val);
            // markers are never typed into
            if is_marker(&self.display) {
                self.awaiting_operand = true;
            }
        }
    }

    fn percent(&mut self) {
        if let Some(val) = self.operand() {
            self.display = self.formatter.format(val / 100.0);
            self.awaiting_operand = true;
        }
    }

    fn clear(&mut self) {
        *self = Self::with_formatter(self.formatter);
    }

    fn soft_clear(&mut self) {
        self.display = "0".to_string();
        self.awaiting_operand = true;
    }

    fn backspace(&mut self) {
        let computed_marker = self.awaiting_operand && is_marker(&self.display);
        if computed_marker || self.display.chars().count() <= 1 {
            self.display = "0".to_string();
        } else {
            self.display.pop();
            if self.display == "-" {
                self.display = "0".to_string();
            }
        }

        if self.display == "0" {
            self.awaiting_operand = true;
        }
    }

    fn set_operation(&mut self, op: Operator) {
        let Some(value) = self.operand() else {
            return;
        };

        if let Some(prev) = self.pending {
            self.history.push(' ');
            self.history.push_str(&self.display);
            self.history.push(' ');
            self.history.push_str(prev.symbol());
            self.calculate();
        } else {
            self.accumulator = value;
            self.history = self.display.clone();
        }

        self.history.push(' ');
        self.history.push_str(op.symbol());
        self.pending = Some(op);
        self.awaiting_operand = true;
    }

    fn equals(&mut self) {
        if self.pending.is_none() || self.operand().is_none() {
            return;
        }

        self.calculate();
        self.pending = None;
        self.history.clear();
        self.awaiting_operand = true;
    }

    /// Collapse the pending operation into the accumulator.
    fn calculate(&mut self) {
        let (Some(op), Some(rhs)) = (self.pending, self.operand()) else {
            return;
        };

        if op == Operator::Divide && rhs == 0.0 {
            tracing::debug!(accumulator = self.accumulator, "division by zero");
            self.display = ERROR_MARKER.to_string();
            self.history.clear();
            self.pending = None;
            self.awaiting_operand = true;
            self.notice = Some(Notice::DivideByZero);
            return;
        }

        self.accumulator = op.apply(self.accumulator, rhs);
        self.display = self.formatter.format(self.accumulator);
    }
}

/// Pure transition: consume a state and an input, return the next state.
pub fn step(mut state: CalcState, input: Input) -> (CalcState, Output) {
    let output = state.apply(input);
    (state, output)
}

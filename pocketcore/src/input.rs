//! Input vocabulary — one variant per calculator button

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Returned by [`Input::from_str`] for a symbol no button produces.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown input symbol: {0:?}")]
pub struct UnknownSymbol(pub String);

/// The four binary operators, applied strictly left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Symbol shown on the button and written into the history line.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// Plain IEEE arithmetic. Division by zero is the caller's business.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// 0 through 9
    Digit(u8),
    Point,
    ToggleSign,
    Percent,
    /// Full reset (AC)
    AllClear,
    /// Full reset (CE); behaves exactly like `AllClear`
    ClearEntry,
    /// Display-only reset (C)
    SoftClear,
    Backspace,
    Operator(Operator),
    Equals,
}

impl Input {
    pub const ADD: Input = Input::Operator(Operator::Add);
    pub const SUBTRACT: Input = Input::Operator(Operator::Subtract);
    pub const MULTIPLY: Input = Input::Operator(Operator::Multiply);
    pub const DIVIDE: Input = Input::Operator(Operator::Divide);

    /// Digit input, or `None` if `d` is not a single decimal digit.
    pub fn digit(d: u8) -> Option<Input> {
        (d <= 9).then_some(Input::Digit(d))
    }

    /// Map a button symbol to its input. Unknown symbols yield `None`.
    pub fn from_symbol(symbol: &str) -> Option<Input> {
        let input = match symbol {
            "." => Input::Point,
            "±" => Input::ToggleSign,
            "%" => Input::Percent,
            "AC" => Input::AllClear,
            "CE" => Input::ClearEntry,
            "C" => Input::SoftClear,
            "←" => Input::Backspace,
            "+" => Input::ADD,
            "-" => Input::SUBTRACT,
            "×" => Input::MULTIPLY,
            "÷" => Input::DIVIDE,
            "=" => Input::Equals,
            _ => {
                let mut chars = symbol.chars();
                let d = chars.next()?.to_digit(10)?;
                if chars.next().is_some() {
                    return None;
                }
                Input::Digit(d as u8)
            }
        };
        Some(input)
    }

    /// Canonical button symbol for this input.
    pub fn symbol(self) -> &'static str {
        const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        match self {
            Input::Digit(d) => DIGITS.get(d as usize).copied().unwrap_or("?"),
            Input::Point => ".",
            Input::ToggleSign => "±",
            Input::Percent => "%",
            Input::AllClear => "AC",
            Input::ClearEntry => "CE",
            Input::SoftClear => "C",
            Input::Backspace => "←",
            Input::Operator(op) => op.symbol(),
            Input::Equals => "=",
        }
    }
}

impl FromStr for Input {
    type Err = UnknownSymbol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Input::from_symbol(s).ok_or_else(|| UnknownSymbol(s.to_string()))
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_symbol_maps_back() {
        let all = [
            "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "±", "%", "AC", "CE", "C", "←",
            "+", "-", "×", "÷", "=",
        ];
        for sym in all {
            let input = Input::from_symbol(sym).unwrap();
            assert_eq!(input.symbol(), sym);
        }
    }

    #[test]
    fn test_unknown_symbols() {
        assert_eq!(Input::from_symbol(""), None);
        assert_eq!(Input::from_symbol("12"), None);
        assert_eq!(Input::from_symbol("*"), None);
        assert_eq!(Input::from_symbol("sqrt"), None);
        let err = "x".parse::<Input>().unwrap_err();
        assert_eq!(err, UnknownSymbol("x".to_string()));
        assert_eq!(err.to_string(), "unknown input symbol: \"x\"");
    }

    #[test]
    fn test_digit_constructor() {
        assert_eq!(Input::digit(7), Some(Input::Digit(7)));
        assert_eq!(Input::digit(10), None);
    }

    #[test]
    fn test_operator_apply() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(Operator::Subtract.apply(2.0, 3.0), -1.0);
        assert_eq!(Operator::Multiply.apply(2.0, 3.0), 6.0);
        assert_eq!(Operator::Divide.apply(3.0, 2.0), 1.5);
        assert_eq!(Operator::Multiply.to_string(), "×");
    }
}

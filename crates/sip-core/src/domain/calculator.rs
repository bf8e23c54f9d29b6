//! Calculator arithmetic and the keypad input state machine.
//!
//! Operands travel through the machine as display strings, the same way
//! the keypad shows them, and are parsed back to `f64` only when an
//! operator or function needs a value.

use std::f64::consts;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::DomainError;

/// Text shown in place of a result when an evaluation fails.
pub const ERROR_SENTINEL: &str = "Error";

/// Longest display string shown verbatim before switching to exponent form.
const MAX_DISPLAY_LEN: usize = 12;

/// Why an evaluation produced the error sentinel instead of a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("argument outside the function's domain")]
    OutOfDomain,
}

/// Binary operator on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operator {
    /// Map a keyboard character to an operator.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Symbol used when rendering expressions.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_key(c),
            _ => None,
        }
        .ok_or_else(|| DomainError::Validation(format!("Unknown operator: {s}")))
    }
}

/// Apply a binary operator. Division by zero yields the error sentinel.
pub fn compute(a: f64, b: f64, op: Operator) -> Result<f64, CalcError> {
    match op {
        Operator::Add => Ok(a + b),
        Operator::Subtract => Ok(a - b),
        Operator::Multiply => Ok(a * b),
        Operator::Divide if b == 0.0 => Err(CalcError::DivisionByZero),
        Operator::Divide => Ok(a / b),
    }
}

/// Single-argument functions and constants from the advanced keypad.
/// Trigonometric functions take degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnaryOp {
    Sqrt,
    Power,
    Inv,
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
    Pi,
    E,
}

impl UnaryOp {
    pub fn apply(self, x: f64) -> Result<f64, CalcError> {
        let radians = x * consts::PI / 180.0;
        match self {
            Self::Sqrt if x < 0.0 => Err(CalcError::OutOfDomain),
            Self::Sqrt => Ok(x.sqrt()),
            Self::Power => Ok(x * x),
            Self::Inv if x == 0.0 => Err(CalcError::DivisionByZero),
            Self::Inv => Ok(1.0 / x),
            Self::Sin => Ok(radians.sin()),
            Self::Cos => Ok(radians.cos()),
            Self::Tan => Ok(radians.tan()),
            Self::Log | Self::Ln if x <= 0.0 => Err(CalcError::OutOfDomain),
            Self::Log => Ok(x.log10()),
            Self::Ln => Ok(x.ln()),
            Self::Pi => Ok(consts::PI),
            Self::E => Ok(consts::E),
        }
    }
}

impl FromStr for UnaryOp {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sqrt" => Ok(Self::Sqrt),
            "power" => Ok(Self::Power),
            "inv" => Ok(Self::Inv),
            "sin" => Ok(Self::Sin),
            "cos" => Ok(Self::Cos),
            "tan" => Ok(Self::Tan),
            "log" => Ok(Self::Log),
            "ln" => Ok(Self::Ln),
            "pi" => Ok(Self::Pi),
            "e" => Ok(Self::E),
            other => Err(DomainError::Validation(format!("Unknown function: {other}"))),
        }
    }
}

/// A calculation result as stored in history: a number or the error text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CalcValue {
    Number(f64),
    Text(String),
}

impl CalcValue {
    pub fn error() -> Self {
        Self::Text(ERROR_SENTINEL.to_string())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Text(text) if text == ERROR_SENTINEL)
    }

    /// Accept the JSON shapes a client may post as a result.
    /// `null` and non-scalar values are rejected.
    pub fn from_json(value: serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => n.as_f64().map(Self::Number),
            serde_json::Value::String(s) => Some(Self::Text(s)),
            _ => None,
        }
    }

    /// Display string for this value.
    pub fn to_display_string(&self) -> String {
        match self {
            Self::Number(n) => format_number(*n),
            Self::Text(text) => text.clone(),
        }
    }
}

impl From<Result<f64, CalcError>> for CalcValue {
    fn from(result: Result<f64, CalcError>) -> Self {
        match result {
            Ok(n) => Self::Number(n),
            Err(_) => Self::error(),
        }
    }
}

/// One binary evaluation, ready to be recorded in history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub expression: String,
    pub result: CalcValue,
}

/// Evaluate `a op b` and render the expression the way the keypad shows it.
pub fn evaluate(a: f64, b: f64, op: Operator) -> Evaluation {
    Evaluation {
        expression: format!("{} {} {}", format_number(a), op.symbol(), format_number(b)),
        result: compute(a, b, op).into(),
    }
}

/// Render a number the way a browser prints it: integral values without a
/// fraction, `-0` as `0`, infinities spelled out, and exponent form
/// (`1e+21`, `1.5e-7`) outside `1e-6 <= |n| < 1e21`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        String::from(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        "0".to_string()
    } else if !(1e-6..1e21).contains(&n.abs()) {
        sign_exponent(format!("{n:e}"))
    } else {
        n.to_string()
    }
}

/// `1e21` -> `1e+21`; negative exponents are left alone.
fn sign_exponent(formatted: String) -> String {
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

/// Shorten long display strings to exponent form with four fraction digits.
pub fn format_display(value: &str) -> String {
    if value.chars().count() <= MAX_DISPLAY_LEN {
        return value.to_string();
    }
    to_exponential(parse_operand(value))
}

fn to_exponential(n: f64) -> String {
    if !n.is_finite() {
        return format_number(n);
    }
    sign_exponent(format!("{n:.4e}"))
}

fn parse_operand(value: &str) -> f64 {
    value.trim().parse().unwrap_or(f64::NAN)
}

/// A key press accepted by [`Calculator::press`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(char),
    Operator(Operator),
    Equals,
    Clear,
    Backspace,
    ToggleSign,
    Percent,
    Function(UnaryOp),
}

impl FromStr for Key {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_digit() || c == '.' {
                return Ok(Self::Digit(c));
            }
            if let Some(op) = Operator::from_key(c) {
                return Ok(Self::Operator(op));
            }
        }

        match s {
            "Enter" | "=" | "equals" => Ok(Self::Equals),
            "Escape" | "clear" => Ok(Self::Clear),
            "Backspace" | "backspace" => Ok(Self::Backspace),
            "toggleSign" => Ok(Self::ToggleSign),
            "%" | "percent" => Ok(Self::Percent),
            other => other
                .parse()
                .map(Self::Function)
                .map_err(|_| DomainError::Validation(format!("Unknown key: {other}"))),
        }
    }
}

/// Keypad state: the display, the stored left operand, the pending
/// operator, and whether the next digit starts a fresh display.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    current: String,
    previous: String,
    operation: Option<Operator>,
    reset_display: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            current: "0".to_string(),
            previous: String::new(),
            operation: None,
            reset_display: false,
        }
    }

    /// Raw display value.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Display value, shortened when too long.
    pub fn display(&self) -> String {
        format_display(&self.current)
    }

    /// The pending expression line, e.g. `"12 +"`.
    pub fn expression(&self) -> String {
        match self.operation {
            Some(op) => format!("{} {}", self.previous, op.symbol()),
            None => self.previous.clone(),
        }
    }

    pub fn pending_operation(&self) -> Option<Operator> {
        self.operation
    }

    pub fn input_digit(&mut self, digit: char) {
        if !(digit.is_ascii_digit() || digit == '.') {
            return;
        }

        if self.reset_display {
            self.current = if digit == '.' {
                "0.".to_string()
            } else {
                digit.to_string()
            };
            self.reset_display = false;
            return;
        }

        if digit == '.' && self.current.contains('.') {
            return;
        }
        if digit == '0' && self.current == "0" {
            return;
        }
        if digit != '.' && self.current == "0" {
            self.current = digit.to_string();
        } else {
            self.current.push(digit);
        }
    }

    /// Select an operator. A pending `a op b` is evaluated first, so
    /// `1 + 2 +` shows `3`.
    pub fn input_operator(&mut self, op: Operator) -> Option<Evaluation> {
        let mut evaluation = None;

        let chained = self
            .operation
            .filter(|_| !self.previous.is_empty() && !self.reset_display);
        if let Some(pending) = chained {
            let evaluated = self.evaluate_pending(pending);
            self.current = evaluated.result.to_display_string();
            evaluation = Some(evaluated);
        }

        self.previous = self.current.clone();
        self.operation = Some(op);
        self.reset_display = true;
        evaluation
    }

    /// Finish the pending evaluation. On error the display falls back to `0`.
    pub fn equals(&mut self) -> Option<Evaluation> {
        let op = self.operation?;
        let evaluation = self.evaluate_pending(op);

        self.current = if evaluation.result.is_error() {
            "0".to_string()
        } else {
            evaluation.result.to_display_string()
        };
        self.previous.clear();
        self.operation = None;
        self.reset_display = true;
        Some(evaluation)
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn toggle_sign(&mut self) {
        self.current = format_number(-parse_operand(&self.current));
    }

    pub fn percent(&mut self) {
        self.current = format_number(parse_operand(&self.current) / 100.0);
    }

    pub fn backspace(&mut self) {
        if self.current.chars().count() <= 1 {
            self.current = "0".to_string();
        } else {
            self.current.pop();
        }
    }

    /// Apply a function to the display. An error leaves the display
    /// untouched, but the next digit still starts fresh.
    pub fn apply(&mut self, func: UnaryOp) -> Result<f64, CalcError> {
        let result = func.apply(parse_operand(&self.current));
        if let Ok(value) = result {
            self.current = format_number(value);
        }
        self.reset_display = true;
        result
    }

    /// Dispatch a key press. Returns the evaluation it triggered, if any.
    pub fn press(&mut self, key: Key) -> Option<Evaluation> {
        match key {
            Key::Digit(d) => self.input_digit(d),
            Key::Operator(op) => return self.input_operator(op),
            Key::Equals => return self.equals(),
            Key::Clear => self.clear(),
            Key::Backspace => self.backspace(),
            Key::ToggleSign => self.toggle_sign(),
            Key::Percent => self.percent(),
            Key::Function(func) => {
                let _ = self.apply(func);
            }
        }
        None
    }

    fn evaluate_pending(&self, op: Operator) -> Evaluation {
        evaluate(parse_operand(&self.previous), parse_operand(&self.current), op)
    }
}

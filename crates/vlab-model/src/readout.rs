//! Derived-quantity readouts.

use std::fmt;

use serde::Serialize;

/// A derived scalar with an explicit non-finite state.
///
/// Non-finite arithmetic results are mapped to `Infinite`/`Undefined` here so
/// they never reach readout text or scene geometry as raw `NaN`/`inf`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "lowercase")]
pub enum Quantity {
    Finite(f64),
    Infinite,
    Undefined,
}

impl Quantity {
    /// Classify a raw `f64`.
    pub fn from_f64(x: f64) -> Self {
        if x.is_finite() {
            Quantity::Finite(x)
        } else if x.is_infinite() {
            Quantity::Infinite
        } else {
            Quantity::Undefined
        }
    }

    pub fn finite(self) -> Option<f64> {
        match self {
            Quantity::Finite(x) => Some(x),
            _ => None,
        }
    }

    pub fn is_finite(self) -> bool {
        matches!(self, Quantity::Finite(_))
    }
}

impl From<f64> for Quantity {
    fn from(x: f64) -> Self {
        Quantity::from_f64(x)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Finite(x) => write!(f, "{x:.2}"),
            Quantity::Infinite => f.write_str("\u{221E}"),
            Quantity::Undefined => f.write_str("\u{2014}"),
        }
    }
}

/// One line of the results panel, e.g. `Range (R): 22.96 m`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Readout {
    pub label: &'static str,
    pub symbol: &'static str,
    pub unit: &'static str,
    pub value: Quantity,
    /// Text shown instead of a number when `value` is not finite.
    #[serde(skip)]
    pub non_finite_text: &'static str,
    /// Qualitative readouts carry text instead of a number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Readout {
    pub fn new(label: &'static str, symbol: &'static str, unit: &'static str, value: f64) -> Self {
        Self {
            label,
            symbol,
            unit,
            value: Quantity::from_f64(value),
            non_finite_text: "\u{2014}",
            text: None,
        }
    }

    /// A readout whose value is a phrase, e.g. `Image Nature: Real, inverted`.
    pub fn text(label: &'static str, text: impl Into<String>) -> Self {
        Self {
            label,
            symbol: "",
            unit: "",
            value: Quantity::Undefined,
            non_finite_text: "\u{2014}",
            text: Some(text.into()),
        }
    }

    pub fn with_quantity(mut self, value: Quantity) -> Self {
        self.value = value;
        self
    }

    /// Override the placeholder used for a non-finite value.
    pub fn when_non_finite(mut self, text: &'static str) -> Self {
        self.non_finite_text = text;
        self
    }

    /// Value with unit, two decimals.
    pub fn value_text(&self) -> String {
        if let Some(text) = &self.text {
            return text.clone();
        }
        match self.value {
            Quantity::Finite(x) if self.unit.is_empty() => format!("{x:.2}"),
            Quantity::Finite(x) => format!("{x:.2} {}", self.unit),
            _ => self.non_finite_text.to_string(),
        }
    }

    /// Label part, with the symbol in parentheses when there is one.
    pub fn label_text(&self) -> String {
        if self.symbol.is_empty() {
            self.label.to_string()
        } else {
            format!("{} ({})", self.label, self.symbol)
        }
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label_text(), self.value_text())
    }
}

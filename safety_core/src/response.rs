//! # Calculator Response
//!
//! The shared value object returned by multi-step calculations. Alongside
//! the headline figure, a response carries an ordered breakdown of the
//! arithmetic steps that produced it, ready for rendering in an inspection
//! report.
//!
//! The breakdown is purely presentational: stripping it never changes
//! `value`, and re-running the same calculator with identical inputs always
//! produces an identical `value`.
//!
//! ## Example
//!
//! ```rust
//! use safety_core::calculations::anchorage;
//!
//! let response = anchorage::calculate(5.0, 4.0, 3.0);
//! assert_eq!(response.display_value(), "8");
//! for step in &response.breakdown {
//!     println!("{}: {}", step.label, step.text);
//! }
//! ```

use serde::{Deserialize, Serialize};

/// One explanatory step in a calculation breakdown.
///
/// ## JSON Example
///
/// ```json
/// { "label": "Front and back walls", "text": "4m (W) × 3m (H) = 12m² exposed area" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    /// Short label naming the step (e.g., "Total anchors")
    pub label: String,

    /// Explanation of the step, with the arithmetic shown
    pub text: String,
}

impl BreakdownEntry {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        BreakdownEntry {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// Result of a multi-step calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "value": 1.25,
///   "value_suffix": "m",
///   "breakdown": [
///     { "label": "Half of platform height", "text": "2.5m × 0.5 = 1.25m" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorResponse {
    /// The primary numeric result (e.g., required anchor count, required
    /// runout in metres)
    pub value: f64,

    /// Unit string appended when displaying the value (e.g., "m", "")
    pub value_suffix: String,

    /// Ordered arithmetic steps, in the order the calculation was performed
    pub breakdown: Vec<BreakdownEntry>,
}

impl CalculatorResponse {
    /// Create a response with no breakdown steps yet.
    pub fn new(value: f64, value_suffix: impl Into<String>) -> Self {
        CalculatorResponse {
            value,
            value_suffix: value_suffix.into(),
            breakdown: Vec::new(),
        }
    }

    /// Append a breakdown step.
    pub fn push_step(&mut self, label: impl Into<String>, text: impl Into<String>) {
        self.breakdown.push(BreakdownEntry::new(label, text));
    }

    /// Format the headline figure with its unit suffix, e.g. "8" or "1.25m".
    ///
    /// Whole-number values drop the decimal point so anchor counts render
    /// as "8" rather than "8.0".
    pub fn display_value(&self) -> String {
        if self.value.fract() == 0.0 {
            format!("{}{}", self.value as i64, self.value_suffix)
        } else {
            format!("{}{}", self.value, self.value_suffix)
        }
    }
}

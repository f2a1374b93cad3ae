//! # safety_core - EN 14960 Safety Calculation Engine
//!
//! `safety_core` encodes the deterministic formulas of BS EN 14960-1:2019
//! (inflatable play equipment) as a pure calculation library: required
//! anchor counts, slide runout and containing-wall rules, material and
//! equipment limits, and user capacity by height band.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Free functions that take measurements and return results
//! - **Total**: Missing form fields arrive as `None` and degrade to defined
//!   defaults; no calculator ever errors
//! - **JSON-First**: All input and result types implement Serialize/Deserialize
//! - **Auditable**: Multi-step calculations carry a human-readable breakdown
//!   of every arithmetic step for the inspection report
//!
//! ## Quick Start
//!
//! ```rust
//! use safety_core::calculations::anchorage;
//!
//! // How many ground anchors does a 5m × 4m × 3m castle need?
//! let result = anchorage::calculate(5.0, 4.0, 3.0);
//! assert_eq!(result.display_value(), "8");
//!
//! // The breakdown documents each step for the report
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("Total anchors"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Anchorage, slide, and capacity calculators
//! - [`equipment`] - Blower pressure, fall height, and exit checks
//! - [`materials`] - Rope and fabric requirements
//! - [`response`] - Shared calculation result with breakdown
//! - [`standard`] - EN 14960-1:2019 clause references
//! - [`units`] - Type-safe metric unit wrappers

pub mod calculations;
pub mod equipment;
pub mod materials;
pub mod response;
pub mod standard;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use response::{BreakdownEntry, CalculatorResponse};
pub use units::{Metres, Millimetres};

//! # Safety Calculations
//!
//! The numeric calculators for EN 14960 inspections. Each calculator is a
//! set of pure, free functions over primitive inputs:
//!
//! - Missing measurements arrive as `None` and degrade to a defined default
//!   (`0`, `false`, or a zero-value response) rather than erroring, so a
//!   partially filled-in inspection form can still probe the calculators.
//! - Multi-step calculations return a
//!   [`CalculatorResponse`](crate::response::CalculatorResponse) whose
//!   breakdown documents each arithmetic step for the report.
//!
//! Modules with an inspector-facing pass/fail surface additionally follow
//! the pattern:
//!
//! - `*Input` - measured values for one unit (JSON-serializable)
//! - `*Assessment` - per-check results with a combined `passes()`
//! - `assess(input) -> *Assessment` - pure assessment function
//!
//! ## Available Calculations
//!
//! - [`anchorage`] - Required ground-anchor counts (wind load, Annex A)
//! - [`slide`] - Runout, containing walls, and permanent-roof rules
//! - [`capacity`] - Occupant counts per user height band

pub mod anchorage;
pub mod capacity;
pub mod slide;

// Re-export commonly used types
pub use anchorage::{AnchorageAssessment, AnchorageInput};
pub use capacity::{HeightBand, UserCapacity};
pub use slide::{ContainmentTier, SlideAssessment, SlideInput};

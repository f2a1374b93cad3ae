//! # Anchorage Calculation
//!
//! Computes the number of ground anchors required to hold an inflatable
//! against wind load, per EN 14960-1:2019 Annex A.
//!
//! ## Formula
//!
//! Annex A models the wind force on each exposed face as
//!
//! ```text
//! F = 0.5 × Cw × ρ × V² × A
//! ```
//!
//! with Cw = 1.5, ρ = 1.24 kg/m³ and V = 11.1 m/s pre-combined into the
//! single coefficient 114. Each anchor point is rated for 1600 N, a 1.5×
//! safety margin is applied, and the standard mandates a minimum of six
//! anchorage points regardless of computed load:
//!
//! ```text
//! anchors per face = ceil(A × 114 × 1.5 / 1600)
//! total = max((front + sides) × 2, 6)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use safety_core::calculations::anchorage;
//!
//! // A 5m × 4m × 3m castle needs 8 anchors
//! let result = anchorage::calculate(5.0, 4.0, 3.0);
//! assert_eq!(result.value, 8.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::response::CalculatorResponse;
use crate::units::{round_dp, Metres};

/// Constants for the Annex A anchorage calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorConstants {
    /// Pre-combined wind-load coefficient (0.5 × Cw × ρ × V²)
    pub area_coefficient: f64,
    /// Rated holding force of a single anchor point (Newtons)
    pub base_divisor: f64,
    /// Safety margin applied to the computed wind force
    pub safety_factor: f64,
    /// Minimum anchorage points mandated by the standard
    pub minimum_anchors: u32,
}

/// Anchorage constants per EN 14960-1:2019 Annex A.
pub const ANCHOR_CONSTANTS: AnchorConstants = AnchorConstants {
    area_coefficient: 114.0,
    base_divisor: 1600.0,
    safety_factor: 1.5,
    minimum_anchors: 6,
};

/// Number of anchors required to hold one exposed face of the given area.
///
/// Missing, zero, or negative areas degrade to 0 rather than failing, so a
/// partially filled-in inspection form can still probe the calculator.
pub fn required_anchors(area_m2: Option<f64>) -> u32 {
    let area = match area_m2 {
        Some(a) if a > 0.0 => a,
        _ => return 0,
    };
    let c = ANCHOR_CONSTANTS;
    ((area * c.area_coefficient * c.safety_factor) / c.base_divisor).ceil() as u32
}

/// Full anchorage calculation for a unit of the given dimensions (metres).
///
/// Exposed areas are rounded to one decimal place before the per-face count,
/// the per-face counts are doubled (front/back and left/right), and the
/// total is floored at the six-anchor minimum. The caller is responsible
/// for supplying positive dimensions; zero or negative values propagate
/// zero counts through [`required_anchors`].
pub fn calculate(length: f64, width: f64, height: f64) -> CalculatorResponse {
    let c = ANCHOR_CONSTANTS;

    let front_area = round_dp(width * height, 1);
    let sides_area = round_dp(length * height, 1);
    let required_front = required_anchors(Some(front_area));
    let required_sides = required_anchors(Some(sides_area));

    let before_minimum = (required_front + required_sides) * 2;
    let total_required = before_minimum.max(c.minimum_anchors);

    let mut response = CalculatorResponse::new(f64::from(total_required), "");
    response.push_step(
        "Front and back area",
        format!("{}m (W) × {}m (H) = {}m² exposed", width, height, front_area),
    );
    response.push_step(
        "Left and right area",
        format!("{}m (L) × {}m (H) = {}m² exposed", length, height, sides_area),
    );
    response.push_step(
        "Front and back anchors",
        format!(
            "ceil(({}m² × {} × {}) / {}N) = {} each",
            front_area, c.area_coefficient, c.safety_factor, c.base_divisor, required_front
        ),
    );
    response.push_step(
        "Left and right anchors",
        format!(
            "ceil(({}m² × {} × {}) / {}N) = {} each",
            sides_area, c.area_coefficient, c.safety_factor, c.base_divisor, required_sides
        ),
    );
    response.push_step(
        "Total anchors",
        format!(
            "({} + {}) × 2 = {}",
            required_front, required_sides, before_minimum
        ),
    );
    if before_minimum < c.minimum_anchors {
        response.push_step(
            "Minimum applies",
            format!(
                "Calculated total {} is below the mandated minimum of {} anchorage points",
                before_minimum, c.minimum_anchors
            ),
        );
    }
    response
}

/// Input for an anchorage assessment.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "BC-2024-017",
///   "length": 5.0,
///   "width": 4.0,
///   "height": 3.0,
///   "anchors_fitted": 8
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnchorageInput {
    /// Unit serial or report label (e.g., "BC-2024-017")
    pub label: String,

    /// Platform length in metres
    pub length: Metres,

    /// Platform width in metres
    pub width: Metres,

    /// Platform height in metres
    pub height: Metres,

    /// Number of anchor points actually fitted to the unit
    pub anchors_fitted: u32,
}

/// Result of an anchorage assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnchorageAssessment {
    /// Anchors required for the unit's dimensions
    pub required_anchors: u32,

    /// Anchors fitted, as reported by the inspector
    pub anchors_fitted: u32,

    /// The full calculation with breakdown, for the report
    pub calculation: CalculatorResponse,
}

impl AnchorageAssessment {
    /// The unit passes when at least the required number of anchors is fitted.
    pub fn passes(&self) -> bool {
        self.anchors_fitted >= self.required_anchors
    }
}

/// Assess the anchorage fitted to a unit against the computed requirement.
pub fn assess(input: &AnchorageInput) -> AnchorageAssessment {
    let calculation = calculate(
        input.length.value(),
        input.width.value(),
        input.height.value(),
    );
    AnchorageAssessment {
        required_anchors: calculation.value as u32,
        anchors_fitted: input.anchors_fitted,
        calculation,
    }
}

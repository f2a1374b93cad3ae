//! # Material Requirements
//!
//! Rope and fabric requirements per EN 14960-1:2019 4.2.1 and 4.2.12.
//!
//! Climbing and gripping ropes must be thick enough to grip and too thick
//! to loop around a user's neck, so the diameter is bounded on both ends.
//! Fabric strengths are fixed minimums reported as display strings.

use serde::{Deserialize, Serialize};

/// Allowed rope diameter range (millimetres).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RopeConstants {
    /// Minimum rope diameter
    pub min_diameter: f64,
    /// Maximum rope diameter
    pub max_diameter: f64,
}

/// Rope diameter limits per EN 14960-1:2019 4.2.12.
pub const ROPE_CONSTANTS: RopeConstants = RopeConstants {
    min_diameter: 18.0,
    max_diameter: 45.0,
};

/// Minimum fabric strengths (Newtons).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FabricConstants {
    /// Minimum tensile strength
    pub min_tensile_newtons: f64,
    /// Minimum tear strength
    pub min_tear_newtons: f64,
}

/// Fabric strength minimums per EN 14960-1:2019 4.2.1.
pub const FABRIC_CONSTANTS: FabricConstants = FabricConstants {
    min_tensile_newtons: 1850.0,
    min_tear_newtons: 350.0,
};

/// Whether a rope diameter falls within the allowed range (inclusive).
///
/// Returns `false` for a missing measurement.
pub fn valid_rope_diameter(diameter_mm: Option<f64>) -> bool {
    let range = ROPE_CONSTANTS.min_diameter..=ROPE_CONSTANTS.max_diameter;
    matches!(diameter_mm, Some(d) if range.contains(&d))
}

/// Fabric tensile strength requirement as a display string.
pub fn fabric_tensile_requirement() -> String {
    format!("{} Newtons minimum", FABRIC_CONSTANTS.min_tensile_newtons)
}

/// Fabric tear strength requirement as a display string.
pub fn fabric_tear_requirement() -> String {
    format!("{} Newtons minimum", FABRIC_CONSTANTS.min_tear_newtons)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rope_diameter_boundaries() {
        assert!(valid_rope_diameter(Some(18.0)));
        assert!(valid_rope_diameter(Some(45.0)));
        assert!(!valid_rope_diameter(Some(17.0)));
        assert!(!valid_rope_diameter(Some(46.0)));
        assert!(!valid_rope_diameter(None));
    }

    #[test]
    fn test_rope_diameter_mid_range() {
        assert!(valid_rope_diameter(Some(30.0)));
    }

    #[test]
    fn test_fabric_requirement_strings() {
        assert_eq!(fabric_tensile_requirement(), "1850 Newtons minimum");
        assert_eq!(fabric_tear_requirement(), "350 Newtons minimum");
    }
}

//! # Slide Safety Calculation
//!
//! Runout length, containing-wall height, and permanent-roof requirements
//! for inflatable slides, per EN 14960-1:2019 4.2.8 and 4.2.9.
//!
//! ## Containment Tiers
//!
//! Requirements scale with platform height. Adjacent tiers share their
//! boundary value, and a boundary height always resolves to the **lower**
//! tier (comparisons run in ascending order, first match wins):
//!
//! | Platform height | Requirement                                     |
//! |-----------------|-------------------------------------------------|
//! | ≤ 0.6m          | No containing walls required                    |
//! | 0.6m – 3.0m     | Walls at least the height of the tallest user   |
//! | 3.0m – 6.0m     | Walls at 1.25 × user height, or a permanent roof|
//! | 6.0m – 8.0m     | Walls at 1.25 × user height AND a permanent roof|
//! | > 8.0m          | Never compliant (exceeds the safe height limit) |
//!
//! ## Runout
//!
//! The landing zone past the base of a slide must be at least half the
//! platform height, never less than 300mm, plus 500mm when a stop-wall is
//! fitted at the runout end:
//!
//! ```text
//! runout = max(platform_height × 0.5, 0.3) [+ 0.5 with stop-wall]
//! ```
//!
//! ## Example
//!
//! ```rust
//! use safety_core::calculations::slide;
//!
//! let runout = slide::required_runout(Some(2.5), false);
//! assert_eq!(runout.value, 1.25);
//! assert_eq!(runout.display_value(), "1.25m");
//! ```

use serde::{Deserialize, Serialize};

use crate::response::CalculatorResponse;
use crate::units::{round_dp, Metres};

/// Platform height thresholds separating the containment tiers (metres).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeightTiers {
    /// At or below this height no containing walls are required
    pub no_walls_required: f64,
    /// Upper bound of the tier requiring walls at user height
    pub basic_walls: f64,
    /// Upper bound of the tier requiring enhanced walls or a roof
    pub enhanced_walls: f64,
    /// Above this height a platform is never compliant
    pub max_safe_height: f64,
}

/// Containment tier thresholds per EN 14960-1:2019 4.2.8.
pub const HEIGHT_TIERS: HeightTiers = HeightTiers {
    no_walls_required: 0.6,
    basic_walls: 3.0,
    enhanced_walls: 6.0,
    max_safe_height: 8.0,
};

/// Constants for the runout calculation (metres).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunoutConstants {
    /// Runout length as a fraction of platform height
    pub platform_height_ratio: f64,
    /// Absolute minimum runout length
    pub minimum_runout: f64,
    /// Extra length required when a stop-wall is fitted
    pub stop_wall_addition: f64,
}

/// Runout constants per EN 14960-1:2019 4.2.9.
pub const RUNOUT_CONSTANTS: RunoutConstants = RunoutConstants {
    platform_height_ratio: 0.5,
    minimum_runout: 0.3,
    stop_wall_addition: 0.5,
};

/// Constants for the containing-wall height calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallConstants {
    /// Wall height multiplier applied to user height in the enhanced tiers
    pub enhanced_height_multiplier: f64,
}

/// Wall constants per EN 14960-1:2019 4.2.8.
pub const WALL_CONSTANTS: WallConstants = WallConstants {
    enhanced_height_multiplier: 1.25,
};

/// Containment tier for a platform height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainmentTier {
    /// Platform low enough that no containing walls are required
    NoWallsRequired,
    /// Walls must be at least the height of the tallest user
    BasicWalls,
    /// Walls at 1.25 × user height, or a permanent roof instead
    EnhancedWalls,
    /// Walls at 1.25 × user height and a permanent roof
    EnhancedWallsWithRoof,
    /// Platform exceeds the safe height limit
    ExceedsSafeHeight,
}

impl ContainmentTier {
    /// Resolve the tier for a platform height.
    ///
    /// Boundary heights (0.6, 3.0, 6.0, 8.0) resolve to the lower tier.
    /// Returns `None` for negative heights, which match no tier.
    pub fn for_platform_height(platform_height: f64) -> Option<Self> {
        let t = HEIGHT_TIERS;
        if platform_height < 0.0 {
            None
        } else if platform_height <= t.no_walls_required {
            Some(ContainmentTier::NoWallsRequired)
        } else if platform_height <= t.basic_walls {
            Some(ContainmentTier::BasicWalls)
        } else if platform_height <= t.enhanced_walls {
            Some(ContainmentTier::EnhancedWalls)
        } else if platform_height <= t.max_safe_height {
            Some(ContainmentTier::EnhancedWallsWithRoof)
        } else {
            Some(ContainmentTier::ExceedsSafeHeight)
        }
    }
}

/// Required runout length in metres for a slide of the given platform height.
///
/// Missing, zero, or negative platform heights degrade to 0.
pub fn runout_value(platform_height: Option<f64>, has_stop_wall: bool) -> f64 {
    let height = match platform_height {
        Some(h) if h > 0.0 => h,
        _ => return 0.0,
    };
    let c = RUNOUT_CONSTANTS;
    let base = (height * c.platform_height_ratio).max(c.minimum_runout);
    if has_stop_wall {
        base + c.stop_wall_addition
    } else {
        base
    }
}

/// Required runout length with the full calculation breakdown.
///
/// Same value as [`runout_value`]; the degenerate-input guard returns a
/// zero-value response with an empty breakdown.
pub fn required_runout(platform_height: Option<f64>, has_stop_wall: bool) -> CalculatorResponse {
    let height = match platform_height {
        Some(h) if h > 0.0 => h,
        _ => return CalculatorResponse::new(0.0, "m"),
    };
    let c = RUNOUT_CONSTANTS;
    let calculated = height * c.platform_height_ratio;
    let base = calculated.max(c.minimum_runout);
    let value = if has_stop_wall {
        base + c.stop_wall_addition
    } else {
        base
    };

    let mut response = CalculatorResponse::new(value, "m");
    response.push_step(
        "Half of platform height",
        format!("{}m × {} = {}m", height, c.platform_height_ratio, calculated),
    );
    response.push_step(
        "Absolute minimum",
        format!("Runout must always be at least {}m (300mm)", c.minimum_runout),
    );
    response.push_step(
        "Required runout",
        format!(
            "The greater of {}m and {}m = {}m",
            calculated, c.minimum_runout, base
        ),
    );
    if has_stop_wall {
        response.push_step(
            "Stop-wall fitted",
            format!("{}m + {}m = {}m", base, c.stop_wall_addition, value),
        );
    }
    response
}

/// Whether a measured runout meets the requirement for the platform height.
///
/// Returns `false` when either measurement is missing.
pub fn meets_runout_requirements(
    runout_length: Option<f64>,
    platform_height: Option<f64>,
    has_stop_wall: bool,
) -> bool {
    let (runout, height) = match (runout_length, platform_height) {
        (Some(r), Some(h)) => (r, h),
        _ => return false,
    };
    runout >= runout_value(Some(height), has_stop_wall)
}

/// Whether the containment fitted to a platform meets its tier's rule.
///
/// Returns `false` when any of the four inputs is missing.
pub fn meets_height_requirements(
    platform_height: Option<f64>,
    user_height: Option<f64>,
    containing_wall_height: Option<f64>,
    has_permanent_roof: Option<bool>,
) -> bool {
    let (platform, user, wall, roof) = match (
        platform_height,
        user_height,
        containing_wall_height,
        has_permanent_roof,
    ) {
        (Some(p), Some(u), Some(w), Some(r)) => (p, u, w, r),
        _ => return false,
    };

    let tier = match ContainmentTier::for_platform_height(platform) {
        Some(tier) => tier,
        None => return false,
    };
    let enhanced = user * WALL_CONSTANTS.enhanced_height_multiplier;
    match tier {
        ContainmentTier::NoWallsRequired => true,
        ContainmentTier::BasicWalls => wall >= user,
        ContainmentTier::EnhancedWalls => roof || wall >= enhanced,
        ContainmentTier::EnhancedWallsWithRoof => roof && wall >= enhanced,
        ContainmentTier::ExceedsSafeHeight => false,
    }
}

/// Required containing-wall height with the full calculation breakdown.
///
/// The enhanced tiers round the required height to two decimal places.
/// When `has_permanent_roof` is supplied, a note records whether a roof is
/// fitted. Missing or non-positive platform or user heights return a
/// zero-value response with an empty breakdown.
pub fn wall_height_requirements(
    platform_height: Option<f64>,
    user_height: Option<f64>,
    has_permanent_roof: Option<bool>,
) -> CalculatorResponse {
    let (platform, user) = match (platform_height, user_height) {
        (Some(p), Some(u)) if p > 0.0 && u > 0.0 => (p, u),
        _ => return CalculatorResponse::new(0.0, "m"),
    };

    let t = HEIGHT_TIERS;
    let multiplier = WALL_CONSTANTS.enhanced_height_multiplier;
    // Platform is known positive, so a tier always resolves.
    let tier = ContainmentTier::for_platform_height(platform)
        .unwrap_or(ContainmentTier::ExceedsSafeHeight);

    let mut response = match tier {
        ContainmentTier::NoWallsRequired => {
            let mut response = CalculatorResponse::new(0.0, "m");
            response.push_step(
                "No walls required",
                format!(
                    "Platform height {}m is at or below the {}m threshold",
                    platform, t.no_walls_required
                ),
            );
            response
        }
        ContainmentTier::BasicWalls => {
            let mut response = CalculatorResponse::new(user, "m");
            response.push_step(
                "Walls at user height",
                format!(
                    "Platform height {}m requires walls at least the tallest user height: {}m",
                    platform, user
                ),
            );
            response
        }
        ContainmentTier::EnhancedWalls => {
            let required = round_dp(user * multiplier, 2);
            let mut response = CalculatorResponse::new(required, "m");
            response.push_step(
                "Enhanced walls",
                format!(
                    "Platform height {}m requires walls at {} × user height, or a permanent roof",
                    platform, multiplier
                ),
            );
            response.push_step(
                "Wall height",
                format!("{}m × {} = {}m", user, multiplier, required),
            );
            response
        }
        ContainmentTier::EnhancedWallsWithRoof => {
            let required = round_dp(user * multiplier, 2);
            let mut response = CalculatorResponse::new(required, "m");
            response.push_step(
                "Enhanced walls and roof",
                format!(
                    "Platform height {}m requires walls at {} × user height and a permanent roof",
                    platform, multiplier
                ),
            );
            response.push_step(
                "Wall height",
                format!("{}m × {} = {}m", user, multiplier, required),
            );
            response
        }
        ContainmentTier::ExceedsSafeHeight => {
            let mut response = CalculatorResponse::new(0.0, "m");
            response.push_step(
                "Exceeds safe height",
                format!(
                    "Platform height {}m exceeds the {}m safe limit",
                    platform, t.max_safe_height
                ),
            );
            response
        }
    };

    if let Some(roof) = has_permanent_roof {
        response.push_step(
            "Permanent roof",
            if roof {
                "A permanent roof is fitted"
            } else {
                "No permanent roof is fitted"
            },
        );
    }
    response
}

/// Whether a platform is tall enough to need a permanent roof (above 6m).
pub fn requires_permanent_roof(platform_height: Option<f64>) -> bool {
    matches!(platform_height, Some(h) if h > HEIGHT_TIERS.enhanced_walls)
}

/// Input for a slide assessment.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "SL-2024-003",
///   "platform_height": 2.5,
///   "tallest_user_height": 1.5,
///   "containing_wall_height": 1.8,
///   "runout_length": 1.5,
///   "has_stop_wall": false,
///   "has_permanent_roof": false
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideInput {
    /// Unit serial or report label (e.g., "SL-2024-003")
    pub label: String,

    /// Slide platform height in metres
    pub platform_height: Metres,

    /// Height of the tallest permitted user in metres
    pub tallest_user_height: Metres,

    /// Measured containing-wall height in metres
    pub containing_wall_height: Metres,

    /// Measured runout length in metres
    pub runout_length: Metres,

    /// Whether a stop-wall is fitted at the runout end
    pub has_stop_wall: bool,

    /// Whether the platform has a permanent roof
    pub has_permanent_roof: bool,
}

/// Result of a slide assessment.
///
/// Each check is reported individually so the inspection form can show
/// separate pass/fail columns; `passes()` combines them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideAssessment {
    /// Required runout with breakdown
    pub required_runout: CalculatorResponse,

    /// Required containing-wall height with breakdown
    pub required_wall_height: CalculatorResponse,

    /// Containment meets the tier rule for the platform height
    pub meets_wall_height: bool,

    /// Measured runout meets the requirement
    pub meets_runout: bool,

    /// Roof requirement is satisfied (not needed, or needed and fitted)
    pub meets_roof_requirement: bool,

    /// Platform is tall enough that a permanent roof is mandatory
    pub requires_permanent_roof: bool,
}

impl SlideAssessment {
    /// All individual checks pass.
    pub fn passes(&self) -> bool {
        self.meets_wall_height && self.meets_runout && self.meets_roof_requirement
    }
}

/// Assess a slide's measured containment and runout against the standard.
pub fn assess(input: &SlideInput) -> SlideAssessment {
    let platform = Some(input.platform_height.value());
    let user = Some(input.tallest_user_height.value());
    let wall = Some(input.containing_wall_height.value());
    let runout = Some(input.runout_length.value());
    let roof = Some(input.has_permanent_roof);

    let needs_roof = requires_permanent_roof(platform);
    SlideAssessment {
        required_runout: required_runout(platform, input.has_stop_wall),
        required_wall_height: wall_height_requirements(platform, user, roof),
        meets_wall_height: meets_height_requirements(platform, user, wall, roof),
        meets_runout: meets_runout_requirements(runout, platform, input.has_stop_wall),
        meets_roof_requirement: !needs_roof || input.has_permanent_roof,
        requires_permanent_roof: needs_roof,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runout_is_half_platform_height() {
        // 2.5 × 0.5 = 1.25, above the 0.3 minimum
        assert_eq!(runout_value(Some(2.5), false), 1.25);
    }

    #[test]
    fn test_runout_minimum_floor() {
        // 0.1 × 0.5 = 0.05, floored to the 0.3 absolute minimum
        assert_eq!(runout_value(Some(0.1), false), 0.3);
    }

    #[test]
    fn test_runout_degenerate_input() {
        assert_eq!(runout_value(None, false), 0.0);
        assert_eq!(runout_value(Some(0.0), false), 0.0);
        assert_eq!(runout_value(Some(-2.0), true), 0.0);
    }

    #[test]
    fn test_stop_wall_adds_half_metre() {
        for height in [0.1, 0.5, 1.0, 2.5, 6.0] {
            let without = runout_value(Some(height), false);
            let with = runout_value(Some(height), true);
            assert_eq!(with, without + 0.5, "stop-wall addition at {}m", height);
        }
    }

    #[test]
    fn test_required_runout_breakdown() {
        let result = required_runout(Some(2.5), false);
        assert_eq!(result.value, 1.25);
        assert_eq!(result.value_suffix, "m");

        let labels: Vec<&str> = result.breakdown.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Half of platform height", "Absolute minimum", "Required runout"]
        );
        assert_eq!(result.breakdown[0].text, "2.5m × 0.5 = 1.25m");
    }

    #[test]
    fn test_required_runout_stop_wall_step() {
        let result = required_runout(Some(2.0), true);
        assert_eq!(result.value, 1.5);
        assert_eq!(result.breakdown.len(), 4);
        assert_eq!(result.breakdown[3].label, "Stop-wall fitted");
        assert_eq!(result.breakdown[3].text, "1m + 0.5m = 1.5m");
    }

    #[test]
    fn test_required_runout_zero_guard() {
        let result = required_runout(Some(0.0), true);
        assert_eq!(result.value, 0.0);
        assert!(result.breakdown.is_empty());
    }

    #[test]
    fn test_runout_check() {
        assert!(meets_runout_requirements(Some(1.3), Some(2.5), false));
        assert!(!meets_runout_requirements(Some(1.2), Some(2.5), false));
        assert!(!meets_runout_requirements(None, Some(2.5), false));
        assert!(!meets_runout_requirements(Some(1.3), None, false));
    }

    #[test]
    fn test_height_requirements_nil_guard() {
        assert!(!meets_height_requirements(None, Some(1.5), Some(2.0), Some(false)));
        assert!(!meets_height_requirements(Some(2.0), None, Some(2.0), Some(false)));
        assert!(!meets_height_requirements(Some(2.0), Some(1.5), None, Some(false)));
        assert!(!meets_height_requirements(Some(2.0), Some(1.5), Some(2.0), None));
    }

    #[test]
    fn test_height_requirements_tiers() {
        // Under 0.6m: always compliant
        assert!(meets_height_requirements(Some(0.5), Some(1.5), Some(0.0), Some(false)));
        // Basic tier: walls at user height
        assert!(meets_height_requirements(Some(2.0), Some(2.0), Some(2.5), Some(false)));
        assert!(!meets_height_requirements(Some(2.0), Some(2.0), Some(1.9), Some(false)));
        // Enhanced tier: 1.25 × user, or a roof
        assert!(meets_height_requirements(Some(4.0), Some(4.0), Some(5.0), Some(false)));
        assert!(!meets_height_requirements(Some(4.0), Some(4.0), Some(4.8), Some(false)));
        assert!(meets_height_requirements(Some(4.0), Some(4.0), Some(0.0), Some(true)));
        // Top tier: 1.25 × user AND a roof
        assert!(meets_height_requirements(Some(7.0), Some(7.0), Some(8.75), Some(true)));
        assert!(!meets_height_requirements(Some(7.0), Some(7.0), Some(8.75), Some(false)));
        // Beyond 8m: never compliant
        assert!(!meets_height_requirements(Some(9.0), Some(7.0), Some(12.0), Some(true)));
    }

    #[test]
    fn test_tier_boundaries_resolve_downward() {
        // Exactly 0.6m: no walls required
        assert!(meets_height_requirements(Some(0.6), Some(1.5), Some(0.0), Some(false)));
        // Exactly 3.0m: basic tier, user-height walls suffice
        assert!(meets_height_requirements(Some(3.0), Some(2.0), Some(2.0), Some(false)));
        // Exactly 6.0m: enhanced tier, roof alone suffices
        assert!(meets_height_requirements(Some(6.0), Some(2.0), Some(0.0), Some(true)));
        // Exactly 8.0m: top tier, roof plus enhanced walls still compliant
        assert!(meets_height_requirements(Some(8.0), Some(2.0), Some(2.5), Some(true)));
        assert!(!meets_height_requirements(Some(8.01), Some(2.0), Some(2.5), Some(true)));
    }

    #[test]
    fn test_containment_tier_lookup() {
        assert_eq!(
            ContainmentTier::for_platform_height(0.0),
            Some(ContainmentTier::NoWallsRequired)
        );
        assert_eq!(
            ContainmentTier::for_platform_height(3.0),
            Some(ContainmentTier::BasicWalls)
        );
        assert_eq!(
            ContainmentTier::for_platform_height(6.0),
            Some(ContainmentTier::EnhancedWalls)
        );
        assert_eq!(
            ContainmentTier::for_platform_height(8.0),
            Some(ContainmentTier::EnhancedWallsWithRoof)
        );
        assert_eq!(
            ContainmentTier::for_platform_height(8.5),
            Some(ContainmentTier::ExceedsSafeHeight)
        );
        assert_eq!(ContainmentTier::for_platform_height(-1.0), None);
    }

    #[test]
    fn test_wall_height_no_walls_tier() {
        let result = wall_height_requirements(Some(0.5), Some(1.5), None);
        assert_eq!(result.value, 0.0);
        assert_eq!(result.breakdown.len(), 1);
        assert_eq!(result.breakdown[0].label, "No walls required");
    }

    #[test]
    fn test_wall_height_basic_tier() {
        let result = wall_height_requirements(Some(2.0), Some(1.5), None);
        assert_eq!(result.value, 1.5);
        assert_eq!(result.value_suffix, "m");
    }

    #[test]
    fn test_wall_height_enhanced_tier() {
        // 1.8 × 1.25 = 2.25
        let result = wall_height_requirements(Some(4.0), Some(1.8), None);
        assert_eq!(result.value, 2.25);
        assert_eq!(result.breakdown[1].text, "1.8m × 1.25 = 2.25m");
    }

    #[test]
    fn test_wall_height_roof_note() {
        let with_roof = wall_height_requirements(Some(7.0), Some(2.0), Some(true));
        assert_eq!(with_roof.value, 2.5);
        let note = with_roof.breakdown.last().unwrap();
        assert_eq!(note.label, "Permanent roof");
        assert_eq!(note.text, "A permanent roof is fitted");

        let without_roof = wall_height_requirements(Some(7.0), Some(2.0), Some(false));
        assert_eq!(
            without_roof.breakdown.last().unwrap().text,
            "No permanent roof is fitted"
        );
    }

    #[test]
    fn test_wall_height_beyond_safe_limit() {
        let result = wall_height_requirements(Some(9.0), Some(2.0), None);
        assert_eq!(result.value, 0.0);
        assert_eq!(result.breakdown[0].label, "Exceeds safe height");
    }

    #[test]
    fn test_wall_height_degenerate_input() {
        assert_eq!(wall_height_requirements(None, Some(1.5), None).value, 0.0);
        assert_eq!(wall_height_requirements(Some(2.0), None, None).value, 0.0);
        assert_eq!(wall_height_requirements(Some(-2.0), Some(1.5), None).value, 0.0);
        assert!(wall_height_requirements(Some(0.0), Some(1.5), None)
            .breakdown
            .is_empty());
    }

    #[test]
    fn test_requires_permanent_roof() {
        assert!(!requires_permanent_roof(None));
        assert!(!requires_permanent_roof(Some(6.0)));
        assert!(requires_permanent_roof(Some(6.1)));
    }

    #[test]
    fn test_slide_assessment_passes() {
        let input = SlideInput {
            label: "SL-2024-003".to_string(),
            platform_height: Metres(2.5),
            tallest_user_height: Metres(1.5),
            containing_wall_height: Metres(1.8),
            runout_length: Metres(1.5),
            has_stop_wall: false,
            has_permanent_roof: false,
        };
        let assessment = assess(&input);
        assert_eq!(assessment.required_runout.value, 1.25);
        assert!(assessment.meets_wall_height);
        assert!(assessment.meets_runout);
        assert!(assessment.meets_roof_requirement);
        assert!(!assessment.requires_permanent_roof);
        assert!(assessment.passes());
    }

    #[test]
    fn test_slide_assessment_missing_roof_fails() {
        let input = SlideInput {
            label: "SL-2024-004".to_string(),
            platform_height: Metres(7.0),
            tallest_user_height: Metres(1.5),
            containing_wall_height: Metres(2.0),
            runout_length: Metres(4.0),
            has_stop_wall: false,
            has_permanent_roof: false,
        };
        let assessment = assess(&input);
        assert!(assessment.requires_permanent_roof);
        assert!(!assessment.meets_roof_requirement);
        assert!(!assessment.meets_wall_height);
        assert!(!assessment.passes());
    }

    #[test]
    fn test_slide_assessment_serialization_roundtrip() {
        let input = SlideInput {
            label: "SL-2024-003".to_string(),
            platform_height: Metres(2.5),
            tallest_user_height: Metres(1.5),
            containing_wall_height: Metres(1.8),
            runout_length: Metres(1.5),
            has_stop_wall: false,
            has_permanent_roof: false,
        };
        let json = serde_json::to_string(&assess(&input)).unwrap();
        let roundtrip: SlideAssessment = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.required_runout.value, 1.25);
        assert!(roundtrip.passes());
    }
}

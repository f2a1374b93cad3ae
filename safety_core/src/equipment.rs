//! # Equipment Checks
//!
//! Blower pressure, fall-off height, and exit provision per
//! EN 14960-1:2019 4.2.7, 4.2.11 and 4.4.1.

use serde::{Deserialize, Serialize};

/// Operating limits for ancillary equipment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquipmentLimits {
    /// Minimum blower operating pressure (kPa)
    pub min_pressure_kpa: f64,
    /// Maximum fall-off height at open sides (metres)
    pub max_fall_height: f64,
    /// Occupancy above which multiple emergency exits are required
    pub multi_exit_threshold: u32,
}

/// Equipment limits per EN 14960-1:2019.
pub const EQUIPMENT_LIMITS: EquipmentLimits = EquipmentLimits {
    min_pressure_kpa: 1.0,
    max_fall_height: 0.6,
    multi_exit_threshold: 15,
};

/// Whether the measured blower pressure reaches the 1.0 kPa minimum.
///
/// Returns `false` for a missing measurement.
pub fn valid_pressure(pressure_kpa: Option<f64>) -> bool {
    matches!(pressure_kpa, Some(p) if p >= EQUIPMENT_LIMITS.min_pressure_kpa)
}

/// Whether an open-side fall height is within the 0.6m maximum.
///
/// Returns `false` for a missing measurement.
pub fn valid_fall_height(height_m: Option<f64>) -> bool {
    matches!(height_m, Some(h) if h <= EQUIPMENT_LIMITS.max_fall_height)
}

/// Whether the rated occupancy requires more than one emergency exit.
///
/// Returns `false` for a missing count.
pub fn requires_multiple_exits(user_count: Option<u32>) -> bool {
    matches!(user_count, Some(n) if n > EQUIPMENT_LIMITS.multi_exit_threshold)
}

//! # User Capacity Calculation
//!
//! Recommended maximum occupant counts per user height band, from the play
//! area dimensions, per EN 14960-1:2019 4.1.2.
//!
//! The standard allocates a minimum play area per user that grows with user
//! height:
//!
//! | Height band | Area per user |
//! |-------------|---------------|
//! | 1.0m        | 1.0 m²        |
//! | 1.2m        | 1.33 m²       |
//! | 1.5m        | 1.66 m²       |
//! | 1.8m        | 2.0 m²        |
//!
//! ## Example
//!
//! ```rust
//! use safety_core::calculations::capacity;
//!
//! let counts = capacity::calculate(Some(10.0), Some(10.0), None);
//! assert_eq!(counts.users_1000mm, 100);
//! assert_eq!(counts.users_1800mm, 50);
//! ```

use serde::{Deserialize, Serialize};

/// Reference user height bands used to size occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeightBand {
    /// Users up to 1.0m tall
    #[serde(rename = "1000mm")]
    H1000,
    /// Users up to 1.2m tall
    #[serde(rename = "1200mm")]
    H1200,
    /// Users up to 1.5m tall
    #[serde(rename = "1500mm")]
    H1500,
    /// Users up to 1.8m tall
    #[serde(rename = "1800mm")]
    H1800,
}

impl HeightBand {
    /// All height bands in ascending order
    pub const ALL: [HeightBand; 4] = [
        HeightBand::H1000,
        HeightBand::H1200,
        HeightBand::H1500,
        HeightBand::H1800,
    ];

    /// Band height in millimetres
    pub fn millimetres(&self) -> u32 {
        match self {
            HeightBand::H1000 => 1000,
            HeightBand::H1200 => 1200,
            HeightBand::H1500 => 1500,
            HeightBand::H1800 => 1800,
        }
    }

    /// Band height in metres
    pub fn metres(&self) -> f64 {
        f64::from(self.millimetres()) / 1000.0
    }

    /// Play area allocated per user in this band (m²)
    pub fn area_divisor(&self) -> f64 {
        match self {
            HeightBand::H1000 => 1.0,
            HeightBand::H1200 => 1.33,
            HeightBand::H1500 => 1.66,
            HeightBand::H1800 => 2.0,
        }
    }

    /// Display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            HeightBand::H1000 => "1.0m",
            HeightBand::H1200 => "1.2m",
            HeightBand::H1500 => "1.5m",
            HeightBand::H1800 => "1.8m",
        }
    }
}

impl std::fmt::Display for HeightBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Recommended maximum occupant counts per height band.
///
/// ## JSON Example
///
/// ```json
/// { "users_1000mm": 100, "users_1200mm": 75, "users_1500mm": 60, "users_1800mm": 50 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserCapacity {
    /// Users up to 1.0m tall
    pub users_1000mm: u32,
    /// Users up to 1.2m tall
    pub users_1200mm: u32,
    /// Users up to 1.5m tall
    pub users_1500mm: u32,
    /// Users up to 1.8m tall
    pub users_1800mm: u32,
}

impl UserCapacity {
    /// Occupant count for a single band.
    pub fn for_band(&self, band: HeightBand) -> u32 {
        match band {
            HeightBand::H1000 => self.users_1000mm,
            HeightBand::H1200 => self.users_1200mm,
            HeightBand::H1500 => self.users_1500mm,
            HeightBand::H1800 => self.users_1800mm,
        }
    }
}

/// Compute recommended occupant counts from the play-area dimensions.
///
/// A missing length or width returns zero counts across all bands. When
/// `max_user_height` is supplied, bands taller than the cap report zero;
/// otherwise every band is sized as `floor(area / divisor)`.
pub fn calculate(
    length: Option<f64>,
    width: Option<f64>,
    max_user_height: Option<f64>,
) -> UserCapacity {
    let (length, width) = match (length, width) {
        (Some(l), Some(w)) => (l, w),
        _ => return UserCapacity::default(),
    };
    let area = length * width;

    let capacity = |band: HeightBand| -> u32 {
        match max_user_height {
            Some(max) if band.metres() > max => 0,
            _ => (area / band.area_divisor()).floor().max(0.0) as u32,
        }
    };

    UserCapacity {
        users_1000mm: capacity(HeightBand::H1000),
        users_1200mm: capacity(HeightBand::H1200),
        users_1500mm: capacity(HeightBand::H1500),
        users_1800mm: capacity(HeightBand::H1800),
    }
}

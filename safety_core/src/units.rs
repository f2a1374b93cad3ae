//! # Unit Types
//!
//! Type-safe wrappers for the measurement units used in inspections. These
//! provide compile-time safety against unit confusion while remaining
//! lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - EN 14960 uses a small, consistent set of metric units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## Metric Units (Primary)
//!
//! All calculations use metric units as this matches EN 14960:
//! - Length: metres (m), millimetres (mm)
//! - Area: square metres (m²)
//! - Pressure: kilopascals (kPa)
//!
//! ## Example
//!
//! ```rust
//! use safety_core::units::{Metres, Millimetres};
//!
//! let platform = Metres(2.5);
//! let platform_mm: Millimetres = platform.into();
//! assert_eq!(platform_mm.0, 2500.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metres(pub f64);

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimetres(pub f64);

impl From<Metres> for Millimetres {
    fn from(m: Metres) -> Self {
        Millimetres(m.0 * 1000.0)
    }
}

impl From<Millimetres> for Metres {
    fn from(mm: Millimetres) -> Self {
        Metres(mm.0 / 1000.0)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMetres(pub f64);

impl Mul for Metres {
    type Output = SquareMetres;
    fn mul(self, rhs: Metres) -> Self::Output {
        SquareMetres(self.0 * rhs.0)
    }
}

// ============================================================================
// Pressure Units
// ============================================================================

/// Pressure in kilopascals (kPa)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilopascals(pub f64);

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Metres);
impl_arithmetic!(Millimetres);
impl_arithmetic!(SquareMetres);
impl_arithmetic!(Kilopascals);

// ============================================================================
// Rounding
// ============================================================================

/// Round a value to a fixed number of decimal places.
///
/// Reported figures in an inspection record are rounded (exposed areas to
/// one decimal place, wall heights to two); the calculators round with this
/// helper so tests and callers see the same figures.
pub fn round_dp(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

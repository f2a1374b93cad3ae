//! # EN 14960 Clause References
//!
//! Clause references to BS EN 14960-1:2019 (Inflatable play equipment —
//! Safety requirements and test methods) for the rules this engine encodes.
//!
//! These constants provide traceable citations for inspection reports: each
//! calculator documents the clause it implements, and report renderers can
//! print the citation next to the computed figure.

/// Clause references for BS EN 14960-1:2019.
pub mod en_ref {
    // Anchorage
    /// Wind-load model for anchorage (0.5 × Cw × ρ × V² × A)
    pub const ANCHORAGE_WIND_LOAD: &str = "EN 14960-1:2019 Annex A";
    /// Minimum of six anchorage points per inflatable
    pub const ANCHORAGE_MINIMUM: &str = "EN 14960-1:2019 4.3.6";

    // Slides and platforms
    /// Containing wall heights around raised platforms
    pub const CONTAINING_WALLS: &str = "EN 14960-1:2019 4.2.8";
    /// Slide runout length and stop-walls
    pub const SLIDE_RUNOUT: &str = "EN 14960-1:2019 4.2.9";
    /// Permanent roof requirement for tall platforms
    pub const PERMANENT_ROOF: &str = "EN 14960-1:2019 4.2.8.3";

    // Users
    /// Play area per user by height band
    pub const USER_CAPACITY: &str = "EN 14960-1:2019 4.1.2";

    // Materials
    /// Rope diameter limits for climbing and gripping ropes
    pub const ROPE_DIAMETER: &str = "EN 14960-1:2019 4.2.12";
    /// Fabric tensile and tear strength
    pub const FABRIC_STRENGTH: &str = "EN 14960-1:2019 4.2.1";

    // Equipment
    /// Minimum blower operating pressure
    pub const BLOWER_PRESSURE: &str = "EN 14960-1:2019 4.4.1";
    /// Maximum fall-off height at open sides
    pub const FALL_HEIGHT: &str = "EN 14960-1:2019 4.2.7";
    /// Exit provision and evacuation
    pub const EXITS: &str = "EN 14960-1:2019 4.2.11";
}

//! Design constants — NHV floor, habitat geometry, input bounds, module kinds.
//!
//! These are plain constants with no UI dependency. Both the design logic
//! and the native simtest harness use these.

/// Minimum Net Habitable Volume floor in m³ per crew member.
///
/// Derived externally (bottom-up methodology) from the 4-crew minimum of
/// 115.83 m³ total.
pub const MIN_NHV_PER_CREW: f64 = 28.96;

/// Fixed cylinder height in meters for the simplified habitat model.
pub const HABITAT_HEIGHT: f64 = 8.0;

/// Crew size input bounds (inclusive).
pub const CREW_SIZE_MIN: u8 = 2;
pub const CREW_SIZE_MAX: u8 = 8;
pub const CREW_SIZE_DEFAULT: u8 = 4;

/// Cylinder radius input bounds in meters (inclusive).
pub const RADIUS_MIN: f64 = 3.0;
pub const RADIUS_MAX: f64 = 6.0;
pub const RADIUS_DEFAULT: f64 = 4.0;

/// Horizontal placement spread as a fraction of the diameter: module x/z
/// coordinates are randomized over ±(PLACEMENT_SPREAD / 2)·radius.
pub const PLACEMENT_SPREAD: f64 = 1.8;

/// Margin factor applied to scene axis ranges so boundary geometry is not
/// flush against the viewport edge.
pub const SCENE_AXIS_MARGIN: f64 = 1.2;

/// Sample count for the habitat boundary rings in the render scene.
pub const BOUNDARY_RING_SAMPLES: usize = 50;

pub mod module_kinds {
    pub const SLEEP: u8 = 0;
    pub const GALLEY: u8 = 1;
    pub const ECLSS: u8 = 2;
    pub const SOCIAL: u8 = 3;
    pub const EXERCISE: u8 = 4;
    pub const MEDICAL: u8 = 5;

    /// Number of module kinds in the palette.
    pub const COUNT: u8 = 6;

    /// Returns true if this kind id is crew-accommodation space (private or group).
    pub fn is_habitation(kind: u8) -> bool {
        matches!(kind, SLEEP | SOCIAL)
    }

    /// Returns true if this kind id is a systems module rather than living space.
    pub fn is_systems(kind: u8) -> bool {
        matches!(kind, ECLSS)
    }
}

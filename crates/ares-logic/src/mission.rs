//! Mission parameters — crew size, cylinder radius, habitat class.
//!
//! The design UI collects these through sliders and a radio group; this
//! module provides the data model and validation logic for those inputs,
//! independent of any UI framework.

use serde::{Deserialize, Serialize};

use crate::constants::{
    CREW_SIZE_DEFAULT, CREW_SIZE_MAX, CREW_SIZE_MIN, HABITAT_HEIGHT, RADIUS_DEFAULT, RADIUS_MAX,
    RADIUS_MIN,
};

// ============================================================================
// HABITAT CLASSES
// ============================================================================

/// Habitat construction class, constrained by launch vehicle capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum HabitatClass {
    /// Class I — metallic, launched fully outfitted.
    Metallic = 0,
    /// Class II — inflatable, deployed and outfitted in place.
    Inflatable = 1,
    /// Class III — constructed from in-situ resources.
    IsruDerived = 2,
}

/// Habitat class metadata.
#[derive(Debug, Clone)]
pub struct HabitatClassInfo {
    pub name: &'static str,
    pub description: &'static str,
}

impl HabitatClass {
    pub fn info(&self) -> HabitatClassInfo {
        match self {
            Self::Metallic => HabitatClassInfo {
                name: "Metallic (Class I)",
                description: "Rigid shell launched fully integrated. Volume limited by fairing.",
            },
            Self::Inflatable => HabitatClassInfo {
                name: "Inflatable (Class II)",
                description: "Soft-goods shell deployed on site. Larger volume per launch mass.",
            },
            Self::IsruDerived => HabitatClassInfo {
                name: "ISRU Derived (Class III)",
                description: "Built from local materials. Volume decoupled from launch vehicle.",
            },
        }
    }

    pub fn from_u8(val: u8) -> Option<Self> {
        match val {
            0 => Some(Self::Metallic),
            1 => Some(Self::Inflatable),
            2 => Some(Self::IsruDerived),
            _ => None,
        }
    }
}

// ============================================================================
// MISSION PARAMETERS
// ============================================================================

/// User-editable mission parameters. Transient inputs, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionParams {
    /// Crew size (2–8).
    pub crew_size: u8,
    /// Cylinder radius in meters (3.0–6.0).
    pub radius_m: f64,
    /// Habitat construction class (index into HabitatClass).
    pub habitat_class: u8,
}

impl Default for MissionParams {
    fn default() -> Self {
        Self {
            crew_size: CREW_SIZE_DEFAULT,
            radius_m: RADIUS_DEFAULT,
            habitat_class: HabitatClass::Inflatable as u8,
        }
    }
}

impl MissionParams {
    /// Gross pressurized volume of the cylindrical shell in m³ (π·r²·h).
    ///
    /// Context figure only; the constraint evaluator works from functional
    /// module volumes, not the shell.
    pub fn pressurized_volume(&self) -> f64 {
        std::f64::consts::PI * self.radius_m * self.radius_m * HABITAT_HEIGHT
    }
}

/// Parameter validation error.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    /// Crew size outside the supported range.
    CrewSizeOutOfRange(u8),
    /// Radius outside the supported range (or not finite).
    RadiusOutOfRange(f64),
    /// Unknown habitat class id.
    InvalidHabitatClass(u8),
}

/// Validate mission parameters, returning all errors found.
///
/// A well-behaved UI keeps these in range through its slider bounds; this
/// is the equivalent guard for programmatic callers.
pub fn validate_params(params: &MissionParams) -> Vec<ParamError> {
    let mut errors = Vec::new();

    if !(CREW_SIZE_MIN..=CREW_SIZE_MAX).contains(&params.crew_size) {
        errors.push(ParamError::CrewSizeOutOfRange(params.crew_size));
    }
    if !params.radius_m.is_finite() || !(RADIUS_MIN..=RADIUS_MAX).contains(&params.radius_m) {
        errors.push(ParamError::RadiusOutOfRange(params.radius_m));
    }
    if HabitatClass::from_u8(params.habitat_class).is_none() {
        errors.push(ParamError::InvalidHabitatClass(params.habitat_class));
    }

    errors
}

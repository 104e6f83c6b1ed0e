//! Static functional-module catalog.
//!
//! Each module kind a designer can place carries fixed metadata: display
//! name, pressurized volume, display color, and footprint dimensions.
//! Volumes follow NASA habitability reference figures (e.g. minimum private
//! quarters, Meal Prep-2, Exercise-2, Medical-3).

use serde::{Deserialize, Serialize};

use crate::constants::module_kinds;

/// A placeable functional-module kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum ModuleKind {
    /// Private sleep quarters.
    Sleep = 0,
    /// Galley and meal preparation.
    Galley = 1,
    /// Environmental control and life support.
    Eclss = 2,
    /// Group social, recreation, and training space.
    Social = 3,
    /// Exercise and recreation equipment.
    Exercise = 4,
    /// Medical bay.
    Medical = 5,
}

/// Static metadata for a module kind.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleSpec {
    pub name: &'static str,
    /// Pressurized volume in m³. Always positive.
    pub volume_m3: f64,
    /// Display color name for rendering.
    pub color: &'static str,
    /// Footprint dimensions in meters (width, depth, height).
    pub footprint_m: [f64; 3],
}

impl ModuleKind {
    pub fn spec(&self) -> ModuleSpec {
        match self {
            Self::Sleep => ModuleSpec {
                name: "Sleep Quarters",
                volume_m3: 13.96,
                color: "orange",
                footprint_m: [2.0, 3.5, 2.0],
            },
            Self::Galley => ModuleSpec {
                name: "Galley/Prep",
                volume_m3: 3.30,
                color: "green",
                footprint_m: [1.5, 1.5, 1.5],
            },
            Self::Eclss => ModuleSpec {
                name: "ECLSS/Life Support",
                volume_m3: 4.00,
                color: "lightblue",
                footprint_m: [1.0, 4.0, 1.0],
            },
            Self::Social => ModuleSpec {
                name: "Group Social/Rec",
                volume_m3: 18.20,
                color: "red",
                footprint_m: [4.0, 4.0, 1.5],
            },
            Self::Exercise => ModuleSpec {
                name: "Exercise/Rec",
                volume_m3: 6.12,
                color: "purple",
                footprint_m: [2.5, 1.2, 2.0],
            },
            Self::Medical => ModuleSpec {
                name: "Medical Bay",
                volume_m3: 5.80,
                color: "yellow",
                footprint_m: [2.0, 2.0, 1.5],
            },
        }
    }

    pub fn from_u8(val: u8) -> Option<Self> {
        match val {
            module_kinds::SLEEP => Some(Self::Sleep),
            module_kinds::GALLEY => Some(Self::Galley),
            module_kinds::ECLSS => Some(Self::Eclss),
            module_kinds::SOCIAL => Some(Self::Social),
            module_kinds::EXERCISE => Some(Self::Exercise),
            module_kinds::MEDICAL => Some(Self::Medical),
            _ => None,
        }
    }

    /// All module kinds in palette display order.
    pub fn all() -> [ModuleKind; module_kinds::COUNT as usize] {
        [
            Self::Sleep,
            Self::Galley,
            Self::Eclss,
            Self::Social,
            Self::Exercise,
            Self::Medical,
        ]
    }

    /// Palette button label, e.g. `Sleep Quarters (14.0 m³)`.
    pub fn palette_label(&self) -> String {
        let spec = self.spec();
        format!("{} ({:.1} m³)", spec.name, spec.volume_m3)
    }
}

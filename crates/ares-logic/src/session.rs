//! Design actions and the aggregate design report.
//!
//! The UI drives the tool through exactly two actions — add a module,
//! clear all modules — and redraws from a [`DesignReport`] recomputed on
//! every interaction. State is explicit: handlers take the layout and
//! mission parameters as arguments rather than touching globals.

use serde::{Deserialize, Serialize};

use crate::catalog::ModuleKind;
use crate::evaluator::{evaluate, ConstraintFeedback};
use crate::layout::HabitatLayout;
use crate::manifest::{build_manifest, ManifestEntry};
use crate::mission::MissionParams;
use crate::placement::{CylinderBounds, PlacementStrategy};
use crate::scene::{build_scene, RenderScene};

/// A user-triggered design action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DesignAction {
    /// Place one module of the given catalog kind id.
    AddModule(u8),
    /// Remove every placed module.
    ClearAll,
}

/// Action handling error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// The kind id does not name a catalog entry.
    UnknownModuleKind(u8),
}

impl std::fmt::Display for ActionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownModuleKind(id) => write!(f, "unknown module kind id {id}"),
        }
    }
}

impl std::error::Error for ActionError {}

/// Apply a design action to the layout.
///
/// New modules get their position from the injected placement strategy,
/// bounded by the cylinder derived from the mission parameters.
pub fn apply_action(
    layout: &mut HabitatLayout,
    action: DesignAction,
    params: &MissionParams,
    strategy: &mut impl PlacementStrategy,
) -> Result<(), ActionError> {
    match action {
        DesignAction::AddModule(kind_id) => {
            let kind =
                ModuleKind::from_u8(kind_id).ok_or(ActionError::UnknownModuleKind(kind_id))?;
            let bounds = CylinderBounds::from_params(params);
            let position = strategy.place(&bounds);
            layout.add_module(kind, position);
            Ok(())
        }
        DesignAction::ClearAll => {
            layout.clear();
            Ok(())
        }
    }
}

/// Everything the UI displays after an interaction.
#[derive(Debug, Clone, Serialize)]
pub struct DesignReport {
    /// Total occupied volume in m³, summed from the manifest.
    pub occupied_volume: f64,
    /// Constraint feedback (required NHV, utilization, tier, message).
    pub feedback: ConstraintFeedback,
    /// Tabular module manifest in placement order.
    pub manifest: Vec<ManifestEntry>,
    /// 3D scene data for the habitat view.
    pub scene: RenderScene,
}

/// Build the full design report for the current layout and parameters.
///
/// The occupied volume is recomputed from the module list on every call;
/// nothing is cached between interactions.
pub fn build_report(layout: &HabitatLayout, params: &MissionParams) -> DesignReport {
    let occupied_volume = layout.total_volume();
    let feedback = evaluate(params.crew_size, occupied_volume);
    let bounds = CylinderBounds::from_params(params);

    DesignReport {
        occupied_volume,
        feedback,
        manifest: build_manifest(layout),
        scene: build_scene(layout, &bounds),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::module_kinds;
    use crate::evaluator::StatusTier;
    use crate::placement::FixedPlacement;

    #[test]
    fn add_action_places_module() {
        let mut layout = HabitatLayout::new();
        let params = MissionParams::default();
        let mut strategy = FixedPlacement::at([1.0, 0.0, -1.0]);

        apply_action(
            &mut layout,
            DesignAction::AddModule(module_kinds::SLEEP),
            &params,
            &mut strategy,
        )
        .unwrap();

        assert_eq!(layout.len(), 1);
        assert_eq!(layout.modules()[0].position, [1.0, 0.0, -1.0]);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let mut layout = HabitatLayout::new();
        let params = MissionParams::default();
        let mut strategy = FixedPlacement::default();

        let err = apply_action(
            &mut layout,
            DesignAction::AddModule(42),
            &params,
            &mut strategy,
        )
        .unwrap_err();
        assert_eq!(err, ActionError::UnknownModuleKind(42));
        assert!(layout.is_empty());
    }

    #[test]
    fn clear_action_empties_layout() {
        let mut layout = HabitatLayout::new();
        let params = MissionParams::default();
        let mut strategy = FixedPlacement::default();
        for _ in 0..3 {
            apply_action(
                &mut layout,
                DesignAction::AddModule(module_kinds::SOCIAL),
                &params,
                &mut strategy,
            )
            .unwrap();
        }

        apply_action(&mut layout, DesignAction::ClearAll, &params, &mut strategy).unwrap();
        assert!(layout.is_empty());
        assert_eq!(layout.total_volume(), 0.0);
    }

    #[test]
    fn report_reflects_layout() {
        let mut layout = HabitatLayout::new();
        let params = MissionParams::default();
        layout.add_module(ModuleKind::Sleep, [0.0; 3]);
        layout.add_module(ModuleKind::Medical, [0.0; 3]);

        let report = build_report(&layout, &params);
        assert!((report.occupied_volume - (13.96 + 5.80)).abs() < 1e-9);
        assert_eq!(report.manifest.len(), 2);
        assert_eq!(report.scene.markers.len(), 2);
        assert_eq!(report.feedback.tier, StatusTier::Critical);
    }

    #[test]
    fn empty_report_is_empty_tier() {
        let report = build_report(&HabitatLayout::new(), &MissionParams::default());
        assert_eq!(report.occupied_volume, 0.0);
        assert_eq!(report.feedback.tier, StatusTier::Empty);
        assert!(report.manifest.is_empty());
        assert!(report.scene.markers.is_empty());
    }

    #[test]
    fn report_never_caches_volume() {
        let mut layout = HabitatLayout::new();
        let params = MissionParams::default();

        let before = build_report(&layout, &params);
        layout.add_module(ModuleKind::Galley, [0.0; 3]);
        let after = build_report(&layout, &params);

        assert_eq!(before.occupied_volume, 0.0);
        assert!((after.occupied_volume - 3.30).abs() < 1e-9);
    }
}

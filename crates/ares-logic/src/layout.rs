//! Placed-module layout state.
//!
//! Explicit session state passed into and returned from the action
//! handlers and the evaluator — no process-wide singleton. Placed modules
//! are created on add, destroyed wholesale on clear, and never otherwise
//! mutated.

use serde::Serialize;

use crate::catalog::ModuleKind;

/// A module instance placed in the habitat.
#[derive(Debug, Clone, Serialize)]
pub struct PlacedModule {
    /// Sequence number, unique within a layout.
    pub id: u32,
    /// Catalog kind this instance references.
    pub kind: ModuleKind,
    /// Display name copied from the catalog entry.
    pub name: &'static str,
    /// Volume in m³ copied from the catalog entry.
    pub volume_m3: f64,
    /// Display color copied from the catalog entry.
    pub color: &'static str,
    /// 3D position within habitat bounds, assigned at creation.
    pub position: [f64; 3],
}

/// The set of currently placed modules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HabitatLayout {
    modules: Vec<PlacedModule>,
    next_id: u32,
}

impl HabitatLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a module of the given kind at the given position, returning
    /// the instance id.
    pub fn add_module(&mut self, kind: ModuleKind, position: [f64; 3]) -> u32 {
        let spec = kind.spec();
        let id = self.next_id;
        self.modules.push(PlacedModule {
            id,
            kind,
            name: spec.name,
            volume_m3: spec.volume_m3,
            color: spec.color,
            position,
        });
        self.next_id += 1;
        id
    }

    /// Remove all placed modules and restart the id sequence.
    pub fn clear(&mut self) {
        self.modules.clear();
        self.next_id = 0;
    }

    /// Total occupied volume in m³, always recomputed from the module list.
    pub fn total_volume(&self) -> f64 {
        self.modules.iter().map(|m| m.volume_m3).sum()
    }

    pub fn modules(&self) -> &[PlacedModule] {
        &self.modules
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_layout_is_empty() {
        let layout = HabitatLayout::new();
        assert!(layout.is_empty());
        assert_eq!(layout.total_volume(), 0.0);
    }

    #[test]
    fn add_copies_catalog_metadata() {
        let mut layout = HabitatLayout::new();
        let id = layout.add_module(ModuleKind::Galley, [0.5, -1.0, 2.0]);
        assert_eq!(id, 0);
        let module = &layout.modules()[0];
        assert_eq!(module.name, "Galley/Prep");
        assert!((module.volume_m3 - 3.30).abs() < 1e-9);
        assert_eq!(module.color, "green");
        assert_eq!(module.position, [0.5, -1.0, 2.0]);
    }

    #[test]
    fn ids_are_sequential() {
        let mut layout = HabitatLayout::new();
        for i in 0..5u32 {
            let id = layout.add_module(ModuleKind::Sleep, [0.0; 3]);
            assert_eq!(id, i);
        }
        assert_eq!(layout.len(), 5);
    }

    #[test]
    fn total_volume_is_sum() {
        let mut layout = HabitatLayout::new();
        layout.add_module(ModuleKind::Sleep, [0.0; 3]);
        layout.add_module(ModuleKind::Eclss, [0.0; 3]);
        layout.add_module(ModuleKind::Medical, [0.0; 3]);
        assert!((layout.total_volume() - (13.96 + 4.00 + 5.80)).abs() < 1e-9);
    }

    #[test]
    fn clear_resets_volume_and_ids() {
        let mut layout = HabitatLayout::new();
        layout.add_module(ModuleKind::Social, [0.0; 3]);
        layout.add_module(ModuleKind::Exercise, [0.0; 3]);
        layout.clear();
        assert!(layout.is_empty());
        assert_eq!(layout.total_volume(), 0.0);
        // Id sequence restarts after a clear
        assert_eq!(layout.add_module(ModuleKind::Sleep, [0.0; 3]), 0);
    }
}

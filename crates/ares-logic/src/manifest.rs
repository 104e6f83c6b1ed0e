//! Tabular module manifest for display.
//!
//! Rows of (module name, volume) pairs in placement order — the data
//! behind the UI's manifest table.

use serde::{Deserialize, Serialize};

use crate::layout::HabitatLayout;

/// One row of the habitat module manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub module: String,
    pub volume_m3: f64,
}

/// Build the manifest from the current layout, in placement order.
pub fn build_manifest(layout: &HabitatLayout) -> Vec<ManifestEntry> {
    layout
        .modules()
        .iter()
        .map(|m| ManifestEntry {
            module: m.name.to_string(),
            volume_m3: m.volume_m3,
        })
        .collect()
}

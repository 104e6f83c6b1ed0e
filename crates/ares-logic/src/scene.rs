//! Render-ready 3D scene data for the habitat view.
//!
//! Produces plain coordinate data any plotting layer can draw directly:
//! the cylinder boundary rings, one marker per placed module, and the
//! axis ranges. The vertical-axis swizzle (layout y becomes the plotted
//! vertical coordinate, layout z the depth coordinate) happens here so
//! renderers consume markers as-is.
//!
//! Module locations are decorative; the constraint evaluation never reads
//! this data.

use serde::{Deserialize, Serialize};

use crate::constants::{BOUNDARY_RING_SAMPLES, SCENE_AXIS_MARGIN};
use crate::layout::HabitatLayout;
use crate::placement::CylinderBounds;

/// A sampled horizontal circle of the habitat boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundaryRing {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// Constant vertical coordinate of the ring.
    pub z: f64,
}

/// A single module marker in plot coordinates.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleMarker {
    pub x: f64,
    /// Depth axis (layout z).
    pub y: f64,
    /// Vertical axis (layout y).
    pub z: f64,
    pub color: &'static str,
    /// Hover label, e.g. `Sleep Quarters (14.0 m³)`.
    pub label: String,
}

/// Symmetric axis ranges for the habitat view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AxisRanges {
    /// Half-extent of the two horizontal axes.
    pub horizontal: f64,
    /// Half-extent of the vertical axis.
    pub vertical: f64,
}

/// Everything the presentation layer needs to draw the habitat.
#[derive(Debug, Clone, Serialize)]
pub struct RenderScene {
    pub floor_ring: BoundaryRing,
    pub ceiling_ring: BoundaryRing,
    pub markers: Vec<ModuleMarker>,
    pub axes: AxisRanges,
}

fn boundary_ring(radius: f64, z: f64) -> BoundaryRing {
    let mut x = Vec::with_capacity(BOUNDARY_RING_SAMPLES);
    let mut y = Vec::with_capacity(BOUNDARY_RING_SAMPLES);
    for i in 0..BOUNDARY_RING_SAMPLES {
        // Endpoint-inclusive sweep so the ring visually closes
        let theta = 2.0 * std::f64::consts::PI * i as f64 / (BOUNDARY_RING_SAMPLES - 1) as f64;
        x.push(radius * theta.cos());
        y.push(radius * theta.sin());
    }
    BoundaryRing { x, y, z }
}

/// Build the render scene for the current layout and bounds.
pub fn build_scene(layout: &HabitatLayout, bounds: &CylinderBounds) -> RenderScene {
    let half_height = bounds.height_m / 2.0;

    let markers = layout
        .modules()
        .iter()
        .map(|m| ModuleMarker {
            x: m.position[0],
            y: m.position[2],
            z: m.position[1],
            color: m.color,
            label: format!("{} ({:.1} m³)", m.name, m.volume_m3),
        })
        .collect();

    RenderScene {
        floor_ring: boundary_ring(bounds.radius_m, -half_height),
        ceiling_ring: boundary_ring(bounds.radius_m, half_height),
        markers,
        axes: AxisRanges {
            horizontal: bounds.radius_m * SCENE_AXIS_MARGIN,
            vertical: half_height * SCENE_AXIS_MARGIN,
        },
    }
}

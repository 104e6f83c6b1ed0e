//! Module placement within the habitat cylinder.
//!
//! Placement is decorative: it feeds the render scene and has no effect on
//! the constraint evaluation. The strategy is injectable so headless runs
//! and tests can use deterministic positions.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{HABITAT_HEIGHT, PLACEMENT_SPREAD};
use crate::mission::MissionParams;

/// Bounding region for module placement, derived from mission parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CylinderBounds {
    pub radius_m: f64,
    pub height_m: f64,
}

impl CylinderBounds {
    pub fn from_params(params: &MissionParams) -> Self {
        Self {
            radius_m: params.radius_m,
            height_m: HABITAT_HEIGHT,
        }
    }

    /// Half-extent of the horizontal placement box (x and z axes).
    pub fn horizontal_extent(&self) -> f64 {
        self.radius_m * PLACEMENT_SPREAD / 2.0
    }

    /// Whether a position lies within the placement box.
    pub fn contains(&self, position: [f64; 3]) -> bool {
        let h = self.horizontal_extent();
        let half_height = self.height_m / 2.0;
        position[0].abs() <= h && position[1].abs() <= half_height && position[2].abs() <= h
    }
}

/// Source of positions for newly placed modules.
pub trait PlacementStrategy {
    fn place(&mut self, bounds: &CylinderBounds) -> [f64; 3];
}

/// Uniform random placement within the cylinder bounds: x and z over
/// ±0.9·radius, y over ±height/2.
#[derive(Debug)]
pub struct RandomPlacement<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomPlacement<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PlacementStrategy for RandomPlacement<R> {
    fn place(&mut self, bounds: &CylinderBounds) -> [f64; 3] {
        [
            (self.rng.gen::<f64>() - 0.5) * bounds.radius_m * PLACEMENT_SPREAD,
            (self.rng.gen::<f64>() - 0.5) * bounds.height_m,
            (self.rng.gen::<f64>() - 0.5) * bounds.radius_m * PLACEMENT_SPREAD,
        ]
    }
}

/// Deterministic placement returning a fixed position, for tests and
/// headless validation.
#[derive(Debug, Clone, Default)]
pub struct FixedPlacement {
    pub position: [f64; 3],
}

impl FixedPlacement {
    pub fn at(position: [f64; 3]) -> Self {
        Self { position }
    }
}

impl PlacementStrategy for FixedPlacement {
    fn place(&mut self, _bounds: &CylinderBounds) -> [f64; 3] {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn bounds_from_default_params() {
        let bounds = CylinderBounds::from_params(&MissionParams::default());
        assert_eq!(bounds.radius_m, 4.0);
        assert_eq!(bounds.height_m, HABITAT_HEIGHT);
        assert!((bounds.horizontal_extent() - 3.6).abs() < 1e-9);
    }

    #[test]
    fn contains_accepts_center_and_rejects_outside() {
        let bounds = CylinderBounds {
            radius_m: 4.0,
            height_m: 8.0,
        };
        assert!(bounds.contains([0.0, 0.0, 0.0]));
        assert!(bounds.contains([3.6, 4.0, -3.6]));
        assert!(!bounds.contains([3.7, 0.0, 0.0]));
        assert!(!bounds.contains([0.0, 4.1, 0.0]));
    }

    #[test]
    fn random_placement_stays_in_bounds() {
        let bounds = CylinderBounds {
            radius_m: 4.0,
            height_m: 8.0,
        };
        let mut strategy = RandomPlacement::new(StdRng::seed_from_u64(7));
        for _ in 0..1000 {
            let position = strategy.place(&bounds);
            assert!(bounds.contains(position), "{position:?} escaped bounds");
        }
    }

    #[test]
    fn random_placement_uses_full_height() {
        let bounds = CylinderBounds {
            radius_m: 4.0,
            height_m: 8.0,
        };
        let mut strategy = RandomPlacement::new(StdRng::seed_from_u64(11));
        let mut top = false;
        let mut bottom = false;
        for _ in 0..500 {
            let y = strategy.place(&bounds)[1];
            top |= y > 2.0;
            bottom |= y < -2.0;
        }
        assert!(top && bottom, "placement should spread across the height");
    }

    #[test]
    fn fixed_placement_is_deterministic() {
        let bounds = CylinderBounds {
            radius_m: 4.0,
            height_m: 8.0,
        };
        let mut strategy = FixedPlacement::at([1.0, 2.0, -1.0]);
        assert_eq!(strategy.place(&bounds), [1.0, 2.0, -1.0]);
        assert_eq!(strategy.place(&bounds), [1.0, 2.0, -1.0]);
    }
}

//! Net Habitable Volume constraint evaluation.
//!
//! The one computational contract of the design tool: given crew size and
//! the total placed functional-module volume, compute the required NHV,
//! the utilization percentage, and a four-tier habitability status. Pure
//! function, no side effects.
//!
//! Tier presentation metadata (symbol, color) lives on [`StatusTier`] so
//! the UI layer never re-derives classification logic.

use serde::{Deserialize, Serialize};

use crate::constants::MIN_NHV_PER_CREW;

/// Utilization floor (percent) below which a design is critically short.
pub const CRITICAL_FLOOR_PCT: f64 = 80.0;

/// Discrete habitability classification, ordered worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum StatusTier {
    /// No modules placed yet; informational.
    Empty = 0,
    /// Utilization below the 80% floor.
    Critical = 1,
    /// Utilization between 80% and 100%.
    Caution = 2,
    /// Requirement satisfied or exceeded.
    Met = 3,
}

impl StatusTier {
    /// Display symbol for the status banner.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Empty | Self::Caution => "🟡",
            Self::Critical => "🔴",
            Self::Met => "✅",
        }
    }

    /// Banner background color as a hex string.
    pub fn color_hex(&self) -> &'static str {
        match self {
            Self::Empty => "#FFD700",
            Self::Critical => "#DC143C",
            Self::Caution => "#FFA500",
            Self::Met => "#3CB371",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Empty => "EMPTY",
            Self::Critical => "CRITICAL",
            Self::Caution => "CAUTION",
            Self::Met => "MET",
        }
    }

    /// Ordering rank: tiers never regress as placed volume grows.
    pub fn rank(&self) -> u8 {
        *self as u8
    }
}

/// Result of a constraint evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstraintFeedback {
    /// Minimum required NHV in m³ for the given crew size.
    pub required_nhv: f64,
    /// Utilization of the requirement in percent (0 when nothing required).
    pub occupied_pct: f64,
    /// Discrete classification.
    pub tier: StatusTier,
    /// Human-readable status message for the banner.
    pub message: String,
}

impl ConstraintFeedback {
    pub fn symbol(&self) -> &'static str {
        self.tier.symbol()
    }

    pub fn color_hex(&self) -> &'static str {
        self.tier.color_hex()
    }
}

/// Evaluate the NHV constraint for a crew size and total module volume.
///
/// Classification is first-match in tier order: an empty layout is always
/// `Empty` regardless of the requirement, then the 80% floor, then the
/// 100% threshold. The division is guarded so a zero requirement yields
/// 0% utilization rather than a failure.
pub fn evaluate(crew_size: u8, total_module_volume: f64) -> ConstraintFeedback {
    let required_nhv = MIN_NHV_PER_CREW * crew_size as f64;
    let occupied_pct = if required_nhv > 0.0 {
        (total_module_volume / required_nhv) * 100.0
    } else {
        0.0
    };

    let (tier, message) = if total_module_volume == 0.0 {
        (
            StatusTier::Empty,
            "Add modules to the habitat to calculate Net Habitable Volume (NHV) utilization."
                .to_string(),
        )
    } else if occupied_pct < CRITICAL_FLOOR_PCT {
        let floor_volume = required_nhv * CRITICAL_FLOOR_PCT / 100.0;
        let shortfall = floor_volume - total_module_volume;
        (
            StatusTier::Critical,
            format!(
                "CRITICAL: Occupied volume ({total_module_volume:.1} m³) is too low: \
                 {shortfall:.1} m³ short of the 80% minimum goal. Design requires \
                 {required_nhv:.1} m³ of functional space."
            ),
        )
    } else if occupied_pct < 100.0 {
        let deficit = required_nhv - total_module_volume;
        (
            StatusTier::Caution,
            format!(
                "CAUTION: NHV utilization is {occupied_pct:.0}%. Still requires \
                 {deficit:.1} m³ of space. Zoning review recommended."
            ),
        )
    } else {
        (
            StatusTier::Met,
            format!(
                "CONSTRAINTS MET: Total calculated functional NHV \
                 ({total_module_volume:.1} m³) meets or exceeds the minimum requirement."
            ),
        )
    };

    ConstraintFeedback {
        required_nhv,
        occupied_pct,
        tier,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_nhv_scales_with_crew() {
        for crew in 2..=8u8 {
            let feedback = evaluate(crew, 0.0);
            assert!(
                (feedback.required_nhv - MIN_NHV_PER_CREW * crew as f64).abs() < 1e-9,
                "crew {crew}"
            );
        }
    }

    #[test]
    fn empty_layout_is_empty_tier() {
        let feedback = evaluate(4, 0.0);
        assert_eq!(feedback.tier, StatusTier::Empty);
        assert!((feedback.required_nhv - 115.84).abs() < 1e-9);
        assert_eq!(feedback.occupied_pct, 0.0);
        assert_eq!(feedback.symbol(), "🟡");
        assert_eq!(feedback.color_hex(), "#FFD700");
    }

    #[test]
    fn below_floor_is_critical() {
        // 80 / 115.84 ≈ 69.06% < 80%
        let feedback = evaluate(4, 80.0);
        assert_eq!(feedback.tier, StatusTier::Critical);
        assert!((feedback.occupied_pct - 69.06).abs() < 0.01);
        assert!(feedback.message.contains("CRITICAL"));
        assert!(feedback.message.contains("115.8"));
        assert_eq!(feedback.color_hex(), "#DC143C");
    }

    #[test]
    fn critical_message_states_shortfall() {
        // 80% floor for 4 crew is 92.672 m³; 80.0 placed → 12.7 m³ short
        let feedback = evaluate(4, 80.0);
        assert!(feedback.message.contains("12.7 m³ short"), "{}", feedback.message);
    }

    #[test]
    fn between_floor_and_requirement_is_caution() {
        // 100 / 115.84 ≈ 86.35%
        let feedback = evaluate(4, 100.0);
        assert_eq!(feedback.tier, StatusTier::Caution);
        assert!((feedback.occupied_pct - 86.33).abs() < 0.01);
        // Remaining deficit: 115.84 - 100 = 15.84 → "15.8"
        assert!(feedback.message.contains("15.8"), "{}", feedback.message);
    }

    #[test]
    fn at_or_above_requirement_is_met() {
        // 120 / 115.84 ≈ 103.6%
        let feedback = evaluate(4, 120.0);
        assert_eq!(feedback.tier, StatusTier::Met);
        assert!((feedback.occupied_pct - 103.59).abs() < 0.01);
        assert_eq!(feedback.symbol(), "✅");
        assert_eq!(feedback.color_hex(), "#3CB371");
    }

    #[test]
    fn exact_requirement_is_met() {
        let feedback = evaluate(4, 115.84);
        assert_eq!(feedback.tier, StatusTier::Met);
        assert!((feedback.occupied_pct - 100.0).abs() < 1e-9);
    }

    #[test]
    fn floor_boundary() {
        // 80% floor for 4 crew sits at 92.672 m³
        assert_eq!(evaluate(4, 92.6).tier, StatusTier::Critical);
        assert_eq!(evaluate(4, 92.7).tier, StatusTier::Caution);
    }

    #[test]
    fn zero_requirement_guarded() {
        let feedback = evaluate(0, 0.0);
        assert_eq!(feedback.occupied_pct, 0.0);
        assert_eq!(feedback.tier, StatusTier::Empty);
    }

    #[test]
    fn utilization_monotonic_in_volume() {
        for crew in 2..=8u8 {
            let mut last_pct = -1.0;
            let mut last_rank = 0u8;
            for step in 0..200 {
                let volume = step as f64 * 1.5;
                let feedback = evaluate(crew, volume);
                assert!(
                    feedback.occupied_pct >= last_pct,
                    "utilization regressed at crew={crew} volume={volume}"
                );
                assert!(
                    feedback.tier.rank() >= last_rank,
                    "tier regressed at crew={crew} volume={volume}"
                );
                last_pct = feedback.occupied_pct;
                last_rank = feedback.tier.rank();
            }
        }
    }

    #[test]
    fn tier_rank_ordering() {
        assert!(StatusTier::Empty.rank() < StatusTier::Critical.rank());
        assert!(StatusTier::Critical.rank() < StatusTier::Caution.rank());
        assert!(StatusTier::Caution.rank() < StatusTier::Met.rank());
    }
}

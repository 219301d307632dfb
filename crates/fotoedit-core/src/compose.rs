//! Effect compositor: turn `(preset, intensity, adjustments)` into a fully
//! resolved operator chain.
//!
//! The resolved chain is a pure function of its inputs. Preview and export
//! both consume it, which is what keeps them visually in lockstep.

use serde::{Deserialize, Serialize};

use crate::catalog::{ChainOp, FilterPreset, OpKind, OpUnit};
use crate::consts::{ADJUSTMENT_MAX, DEFAULT_ADJUSTMENT, INTENSITY_MAX};

/// The three global adjustment sliders, in percent (100 = no change).
///
/// Applied after the preset chain regardless of which preset is selected,
/// and never scaled by intensity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Adjustments {
    pub brightness: f32,
    pub contrast: f32,
    pub saturation: f32,
}

impl Default for Adjustments {
    fn default() -> Self {
        Self {
            brightness: DEFAULT_ADJUSTMENT,
            contrast: DEFAULT_ADJUSTMENT,
            saturation: DEFAULT_ADJUSTMENT,
        }
    }
}

impl Adjustments {
    /// Clamp all three sliders into their valid [0, 200] range.
    pub fn clamped(self) -> Self {
        Self {
            brightness: self.brightness.clamp(0.0, ADJUSTMENT_MAX),
            contrast: self.contrast.clamp(0.0, ADJUSTMENT_MAX),
            saturation: self.saturation.clamp(0.0, ADJUSTMENT_MAX),
        }
    }
}

/// Resolve the operator chain for one render.
///
/// Preset operators come first, in catalog order, each magnitude scaled by
/// `intensity / 100` (the scale factor is the same for percent, degree and
/// unitless magnitudes). `Raw` tokens pass through unscaled. The three
/// adjustment operators are appended unconditionally, in fixed order.
/// Downstream appliers must respect the sequence; the operators do not
/// commute.
pub fn resolve_chain(preset: &FilterPreset, intensity: f32, adjustments: &Adjustments) -> Vec<ChainOp> {
    let factor = intensity.clamp(0.0, INTENSITY_MAX) / 100.0;
    let adj = adjustments.clamped();

    let mut resolved = Vec::with_capacity(preset.chain.len() + 3);

    if !preset.is_identity() {
        for op in &preset.chain {
            resolved.push(match op {
                ChainOp::Filter { kind, value, unit } => ChainOp::filter(*kind, value * factor, *unit),
                ChainOp::Raw(token) => ChainOp::Raw(token.clone()),
            });
        }
    }

    resolved.push(ChainOp::filter(OpKind::Brightness, adj.brightness, OpUnit::Percent));
    resolved.push(ChainOp::filter(OpKind::Contrast, adj.contrast, OpUnit::Percent));
    resolved.push(ChainOp::filter(OpKind::Saturate, adj.saturation, OpUnit::Percent));

    resolved
}

/// Render a resolved chain the way it would appear in a stylesheet,
/// useful for logs and the CLI `filters` listing.
pub fn chain_to_string(chain: &[ChainOp]) -> String {
    chain
        .iter()
        .map(|op| op.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

//! Dead-zone shaping for analog stick vectors.
//!
//! Uses a radial (circular) dead zone rather than a per-axis (square) one,
//! so response is consistent regardless of direction. Three response modes
//! are supported:
//!
//! - [`DeadZoneType::Axial`]: binary threshold, snap to the nearest of the
//!   eight octants at magnitude 1.0. Digital-feel input; analog gradation is
//!   discarded on purpose.
//! - [`DeadZoneType::Scrubbed`]: subtract the inner radius and rescale the
//!   remainder linearly so the usable range maps onto `[0, 1]`.
//! - [`DeadZoneType::PowerCurve`]: Scrubbed, then a power response curve on
//!   the magnitude for fine low-magnitude control. Direction is unchanged.

use serde::{Deserialize, Serialize};

use crate::config::ShapingConfig;
use crate::keystroke::Direction;

/// Selectable dead-zone response mode. Exactly one is active per stick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum DeadZoneType {
    Axial,
    Scrubbed,
    PowerCurve,
}

impl DeadZoneType {
    /// The next mode in the cycle. Wraps PowerCurve back to Axial.
    pub fn cycled(self) -> DeadZoneType {
        match self {
            DeadZoneType::Axial => DeadZoneType::Scrubbed,
            DeadZoneType::Scrubbed => DeadZoneType::PowerCurve,
            DeadZoneType::PowerCurve => DeadZoneType::Axial,
        }
    }
}

/// A shaped stick sample: unit direction plus magnitude in `[0, 1]`.
///
/// Neutral is the zero direction with zero magnitude.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ShapedStick {
    /// Unit direction, or `(0, 0)` when neutral.
    pub direction: (f32, f32),
    /// Shaped magnitude in `[0, 1]`. Axial mode only ever reports 0 or 1.
    pub magnitude: f32,
}

impl ShapedStick {
    pub const NEUTRAL: ShapedStick = ShapedStick {
        direction: (0.0, 0.0),
        magnitude: 0.0,
    };

    pub fn is_neutral(&self) -> bool {
        self.magnitude == 0.0
    }
}

/// Shape a raw stick vector under the given mode.
///
/// A raw magnitude at or below the inner dead-zone radius yields Neutral in
/// every mode; the zero vector is always Neutral.
pub fn shape(raw: (f32, f32), mode: DeadZoneType, config: &ShapingConfig) -> ShapedStick {
    let (x, y) = raw;
    let magnitude = (x * x + y * y).sqrt();
    if magnitude <= config.dead_zone || magnitude == 0.0 {
        return ShapedStick::NEUTRAL;
    }

    match mode {
        DeadZoneType::Axial => ShapedStick {
            direction: Direction::from_vector(x, y).unit_vector(),
            magnitude: 1.0,
        },
        DeadZoneType::Scrubbed => ShapedStick {
            direction: (x / magnitude, y / magnitude),
            magnitude: rescale(magnitude, config.dead_zone),
        },
        DeadZoneType::PowerCurve => ShapedStick {
            direction: (x / magnitude, y / magnitude),
            magnitude: rescale(magnitude, config.dead_zone).powf(config.power_exponent),
        },
    }
}

/// Map `[dead_zone, 1]` linearly onto `[0, 1]`, clamping overshoot.
///
/// Corner vectors can exceed magnitude 1.0 before clamping (a square input
/// region reaches ~1.414 on the diagonal); that is expected.
fn rescale(magnitude: f32, dead_zone: f32) -> f32 {
    ((magnitude - dead_zone) / (1.0 - dead_zone)).min(1.0)
}

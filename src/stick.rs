//! Per-frame thumbstick state: raw vectors plus their shaped results.

use crate::config::ShapingConfig;
use crate::deadzone::{shape, DeadZoneType, ShapedStick};

/// Stick selector for queries.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum StickId {
    Left,
    Right,
}

/// One stick's raw vector and its shaped output for the current frame.
#[derive(Debug, Clone, Copy, Default)]
struct Thumbstick {
    raw: (f32, f32),
    shaped: ShapedStick,
}

/// Both sticks plus the currently selected dead-zone mode.
///
/// Shaped values are recomputed on every update and never persist beyond
/// the frame; edge state lives in the wrapper, not here.
#[derive(Debug, Clone)]
pub struct ThumbstickState {
    mode: DeadZoneType,
    left: Thumbstick,
    right: Thumbstick,
}

impl ThumbstickState {
    pub fn new(mode: DeadZoneType) -> Self {
        Self {
            mode,
            left: Thumbstick::default(),
            right: Thumbstick::default(),
        }
    }

    /// Reshape both sticks from this frame's raw vectors.
    ///
    /// A mode selected since the last frame takes effect here; there is no
    /// interpolation or hysteresis across the switch.
    pub fn update(&mut self, left_raw: (f32, f32), right_raw: (f32, f32), config: &ShapingConfig) {
        self.left = Thumbstick {
            raw: left_raw,
            shaped: shape(left_raw, self.mode, config),
        };
        self.right = Thumbstick {
            raw: right_raw,
            shaped: shape(right_raw, self.mode, config),
        };
    }

    /// Clear both sticks to neutral (used for keyboard/disconnected frames).
    pub fn clear(&mut self) {
        self.left = Thumbstick::default();
        self.right = Thumbstick::default();
    }

    /// Shaped direction and magnitude for the selected stick.
    pub fn shaped(&self, stick: StickId) -> ShapedStick {
        match stick {
            StickId::Left => self.left.shaped,
            StickId::Right => self.right.shaped,
        }
    }

    /// This frame's raw vector for the selected stick.
    pub fn raw(&self, stick: StickId) -> (f32, f32) {
        match stick {
            StickId::Left => self.left.raw,
            StickId::Right => self.right.raw,
        }
    }

    pub fn mode(&self) -> DeadZoneType {
        self.mode
    }

    /// Select a mode. Takes effect on the next update.
    pub fn set_mode(&mut self, mode: DeadZoneType) {
        self.mode = mode;
    }

    /// Advance to the next mode in the Axial -> Scrubbed -> PowerCurve cycle.
    pub fn cycle_mode(&mut self) -> DeadZoneType {
        self.mode = self.mode.cycled();
        self.mode
    }
}

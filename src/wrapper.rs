//! Per-slot controller wrapper: the stable per-frame query surface.
//!
//! One wrapper exists per logical player slot. Each frame the external loop
//! feeds it a [`RawInputSnapshot`]; the wrapper shapes the sticks, classifies
//! the active keystroke set, and diffs it against the previous frame for
//! release edges. Every query between one update and the next observes the
//! same frozen result.
//!
//! Rebinding a player to a different physical slot is done by discarding the
//! wrapper and constructing a new one; there is no in-place rebind, and the
//! selected dead-zone mode does not carry over.

use tracing::{debug, trace};

use crate::classify::{classify, direction_of, TriggerPair};
use crate::config::{ControllerConfig, ShapingConfig};
use crate::deadzone::{DeadZoneType, ShapedStick};
use crate::edge::{released_between, KeystrokeSet};
use crate::error::ConfigError;
use crate::keystroke::{Direction, Keystroke, KeystrokeId, Phase};
use crate::snapshot::{ButtonStates, RawInputSnapshot};
use crate::stick::{StickId, ThumbstickState};

/// Normalizes one logical player's raw input, frame by frame.
pub struct ControllerWrapper {
    slot_index: usize,
    keyboard_fallback: bool,
    shaping: ShapingConfig,
    thumbsticks: ThumbstickState,
    plugged_in: bool,
    using_keyboard: bool,
    previous: KeystrokeSet,
    current: KeystrokeSet,
    released: KeystrokeSet,
}

impl ControllerWrapper {
    /// Build a wrapper for the given physical slot.
    ///
    /// Fallback policy and shaping parameters come from the config; the
    /// dead-zone mode starts at Axial and can be changed afterwards.
    pub fn new(slot_index: usize, config: ControllerConfig) -> Result<Self, ConfigError> {
        config.shaping.validate()?;
        Ok(Self {
            slot_index,
            keyboard_fallback: config.keyboard_fallback,
            shaping: config.shaping,
            thumbsticks: ThumbstickState::new(DeadZoneType::Axial),
            plugged_in: false,
            using_keyboard: false,
            previous: KeystrokeSet::EMPTY,
            current: KeystrokeSet::EMPTY,
            released: KeystrokeSet::EMPTY,
        })
    }

    /// Consume this frame's raw snapshot and refresh the query surface.
    ///
    /// Call exactly once per frame. An unplugged pad falls back to the
    /// keyboard key map when enabled, otherwise the frame classifies as
    /// all-neutral; neither case is an error.
    pub fn update(&mut self, snapshot: &RawInputSnapshot) {
        self.previous = self.current;

        self.plugged_in = snapshot.connected;
        let use_keyboard = !snapshot.connected && self.keyboard_fallback;
        if use_keyboard != self.using_keyboard {
            debug!(
                "slot {}: input source now {}",
                self.slot_index,
                if use_keyboard { "keyboard" } else { "gamepad" }
            );
        }
        self.using_keyboard = use_keyboard;

        let (direction, buttons, triggers) = if snapshot.connected {
            self.sample_pad(snapshot)
        } else if use_keyboard {
            self.sample_keyboard(snapshot)
        } else {
            // Unplugged with fallback disabled: fail-soft neutral frame.
            self.thumbsticks.clear();
            (Direction::Neutral, ButtonStates::default(), TriggerPair::default())
        };

        self.current = classify(
            direction,
            &buttons,
            triggers,
            self.shaping.trigger_threshold,
            false,
        );
        self.released = released_between(&self.previous, &self.current);

        trace!(
            "slot {}: direction {:?}, {} active, {} released",
            self.slot_index,
            direction,
            self.current.len(),
            self.released.len()
        );
    }

    fn sample_pad(&mut self, snapshot: &RawInputSnapshot) -> (Direction, ButtonStates, TriggerPair) {
        self.thumbsticks
            .update(snapshot.left_stick, snapshot.right_stick, &self.shaping);

        // The d-pad is digital and wins over the stick for discrete
        // classification; the shaped-stick queries stay analog-only.
        let direction = if snapshot.buttons.any_dpad() {
            let (x, y) = snapshot.buttons.dpad_vector();
            Direction::from_vector(x, y)
        } else {
            direction_of(&self.thumbsticks.shaped(StickId::Left))
        };

        let triggers = TriggerPair {
            left: snapshot.left_trigger,
            right: snapshot.right_trigger,
        };
        (direction, snapshot.buttons, triggers)
    }

    fn sample_keyboard(&mut self, snapshot: &RawInputSnapshot) -> (Direction, ButtonStates, TriggerPair) {
        // No analog gradation from a keyboard: direction keys produce
        // full-magnitude axial-equivalent octants and the stick queries
        // report neutral.
        self.thumbsticks.clear();

        let keys = &snapshot.keyboard;
        let (x, y) = keys.direction_vector();
        let buttons = ButtonStates {
            a: keys.a,
            b: keys.b,
            x: keys.x,
            y: keys.y,
            left_shoulder: keys.left_shoulder,
            right_shoulder: keys.right_shoulder,
            ..ButtonStates::default()
        };
        let triggers = TriggerPair {
            left: if keys.left_trigger { 1.0 } else { 0.0 },
            right: if keys.right_trigger { 1.0 } else { 0.0 },
        };
        (Direction::from_vector(x, y), buttons, triggers)
    }

    /// Whether the keystroke is in this frame's active or release set.
    ///
    /// Facing is caller-supplied per query, never wrapper state: with
    /// `flipped` set, the queried identity is mirrored before lookup, so two
    /// callers may disagree on facing within the same frame.
    pub fn check_keystroke(&self, keystroke: Keystroke, flipped: bool) -> bool {
        let id = if flipped {
            keystroke.id.mirrored()
        } else {
            keystroke.id
        };
        match keystroke.phase {
            Phase::Active => self.current.contains(id),
            Phase::Released => self.released.contains(id),
        }
    }

    /// Press edge: active this frame, inactive the previous frame.
    ///
    /// This is the restart signal for consumer-owned hold timers.
    pub fn pressed_this_frame(&self, id: KeystrokeId, flipped: bool) -> bool {
        let id = if flipped { id.mirrored() } else { id };
        self.current.contains(id) && !self.previous.contains(id)
    }

    /// Shaped direction and magnitude for a stick, as of the last update.
    pub fn shaped_direction(&self, stick: StickId) -> ShapedStick {
        self.thumbsticks.shaped(stick)
    }

    /// Whether the physical pad reported plugged-in at the last update.
    pub fn is_plugged_in(&self) -> bool {
        self.plugged_in
    }

    /// Whether the last update sourced input from the keyboard fallback.
    pub fn is_using_keyboard(&self) -> bool {
        self.using_keyboard
    }

    pub fn dead_zone_mode(&self) -> DeadZoneType {
        self.thumbsticks.mode()
    }

    /// Select a dead-zone mode. Takes effect on the next update.
    pub fn set_dead_zone_mode(&mut self, mode: DeadZoneType) {
        if mode != self.thumbsticks.mode() {
            debug!("slot {}: dead-zone mode {:?}", self.slot_index, mode);
        }
        self.thumbsticks.set_mode(mode);
    }

    /// Advance the dead-zone mode cycle and return the new mode.
    pub fn cycle_dead_zone_mode(&mut self) -> DeadZoneType {
        let mode = self.thumbsticks.cycle_mode();
        debug!("slot {}: dead-zone mode {:?}", self.slot_index, mode);
        mode
    }

    /// This frame's full active set (unflipped identities).
    pub fn active_keystrokes(&self) -> KeystrokeSet {
        self.current
    }

    /// This frame's release edges (unflipped identities).
    pub fn released_keystrokes(&self) -> KeystrokeSet {
        self.released
    }

    pub fn slot_index(&self) -> usize {
        self.slot_index
    }
}

//! Keystroke classification: shaped direction + buttons + triggers into the
//! current frame's active set.
//!
//! Directions are mutually exclusive: exactly one directional keystroke
//! (possibly Neutral) is in every classified set. Buttons are independent of
//! each other and of the direction.

use crate::deadzone::ShapedStick;
use crate::edge::KeystrokeSet;
use crate::keystroke::{Direction, KeystrokeId, PadButton};
use crate::snapshot::ButtonStates;

/// Discrete direction of a shaped stick sample.
///
/// Axial mode is already snapped; Scrubbed and PowerCurve keep a continuous
/// angle, which is bucketed into the same eight sectors here. Magnitude is
/// not consulted beyond the neutral test, so continuous consumers can read
/// it separately from the shaped sample.
pub fn direction_of(shaped: &ShapedStick) -> Direction {
    if shaped.is_neutral() {
        Direction::Neutral
    } else {
        Direction::from_vector(shaped.direction.0, shaped.direction.1)
    }
}

/// Analog trigger values for one frame, in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TriggerPair {
    pub left: f32,
    pub right: f32,
}

/// Build the active keystroke set for one frame.
///
/// `facing_flipped` applies the facing-relative remap to the direction
/// before it is finalized: with the flag set, Forward means "raw back". The
/// remap is pure and must be reapplied from the flag every frame; it is
/// never baked into stick state. Buttons never remap.
pub fn classify(
    direction: Direction,
    buttons: &ButtonStates,
    triggers: TriggerPair,
    trigger_threshold: f32,
    facing_flipped: bool,
) -> KeystrokeSet {
    let mut active = KeystrokeSet::EMPTY;

    let direction = if facing_flipped {
        direction.mirrored()
    } else {
        direction
    };
    active.insert(KeystrokeId::Direction(direction));

    if buttons.a {
        active.insert(KeystrokeId::Button(PadButton::A));
    }
    if buttons.b {
        active.insert(KeystrokeId::Button(PadButton::B));
    }
    if buttons.x {
        active.insert(KeystrokeId::Button(PadButton::X));
    }
    if buttons.y {
        active.insert(KeystrokeId::Button(PadButton::Y));
    }
    if buttons.left_shoulder {
        active.insert(KeystrokeId::Button(PadButton::LeftShoulder));
    }
    if buttons.right_shoulder {
        active.insert(KeystrokeId::Button(PadButton::RightShoulder));
    }
    if triggers.left > trigger_threshold {
        active.insert(KeystrokeId::Button(PadButton::LeftTrigger));
    }
    if triggers.right > trigger_threshold {
        active.insert(KeystrokeId::Button(PadButton::RightTrigger));
    }

    active
}

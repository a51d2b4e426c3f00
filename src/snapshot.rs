//! Raw per-frame input snapshot consumed by the wrapper.
//!
//! The snapshot is produced once per frame by an external sampling
//! collaborator (whatever backend polls the OS) and destroyed afterwards.
//! The normalization core never talks to a device itself.

/// Boolean state of every tracked physical pad button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonStates {
    pub a: bool,
    pub b: bool,
    pub x: bool,
    pub y: bool,
    pub left_shoulder: bool,
    pub right_shoulder: bool,
    pub dpad_up: bool,
    pub dpad_down: bool,
    pub dpad_left: bool,
    pub dpad_right: bool,
}

impl ButtonStates {
    /// Whether any d-pad button is held.
    pub fn any_dpad(&self) -> bool {
        self.dpad_up || self.dpad_down || self.dpad_left || self.dpad_right
    }

    /// D-pad combination as a digital direction vector.
    ///
    /// Opposing buttons cancel out. Components are -1, 0, or 1.
    pub fn dpad_vector(&self) -> (f32, f32) {
        let x = (self.dpad_right as i8 - self.dpad_left as i8) as f32;
        let y = (self.dpad_up as i8 - self.dpad_down as i8) as f32;
        (x, y)
    }
}

/// Key-down state of the fixed keyboard-to-pad mapping.
///
/// Keys are already resolved to their logical meaning by the sampling
/// collaborator; this layer never sees scancodes. Keyboard input is purely
/// digital, so "triggers" here are booleans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub a: bool,
    pub b: bool,
    pub x: bool,
    pub y: bool,
    pub left_shoulder: bool,
    pub right_shoulder: bool,
    pub left_trigger: bool,
    pub right_trigger: bool,
}

impl KeyboardKeys {
    /// Held direction keys as a digital direction vector.
    pub fn direction_vector(&self) -> (f32, f32) {
        let x = (self.right as i8 - self.left as i8) as f32;
        let y = (self.up as i8 - self.down as i8) as f32;
        (x, y)
    }
}

/// One physical input slot's raw state for a single frame.
///
/// Stick vectors are in `[-1, 1] x [-1, 1]` with +y up; triggers are in
/// `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawInputSnapshot {
    /// Whether the physical pad reported as plugged in this frame.
    pub connected: bool,
    pub left_stick: (f32, f32),
    pub right_stick: (f32, f32),
    pub left_trigger: f32,
    pub right_trigger: f32,
    pub buttons: ButtonStates,
    pub keyboard: KeyboardKeys,
}

impl RawInputSnapshot {
    /// A connected pad with everything at rest.
    pub fn idle() -> Self {
        Self {
            connected: true,
            ..Self::default()
        }
    }

    /// An unplugged pad. Keyboard state may still be populated.
    pub fn unplugged() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dpad_vector_combines_and_cancels() {
        let mut buttons = ButtonStates::default();
        assert_eq!(buttons.dpad_vector(), (0.0, 0.0));
        assert!(!buttons.any_dpad());

        buttons.dpad_up = true;
        buttons.dpad_right = true;
        assert_eq!(buttons.dpad_vector(), (1.0, 1.0));
        assert!(buttons.any_dpad());

        buttons.dpad_left = true;
        assert_eq!(buttons.dpad_vector(), (0.0, 1.0));
    }

    #[test]
    fn test_keyboard_direction_vector() {
        let mut keys = KeyboardKeys::default();
        keys.down = true;
        keys.left = true;
        assert_eq!(keys.direction_vector(), (-1.0, -1.0));
    }

    #[test]
    fn test_idle_snapshot_is_connected_and_quiet() {
        let snapshot = RawInputSnapshot::idle();
        assert!(snapshot.connected);
        assert_eq!(snapshot.left_stick, (0.0, 0.0));
        assert_eq!(snapshot.left_trigger, 0.0);
        assert!(!RawInputSnapshot::unplugged().connected);
    }
}

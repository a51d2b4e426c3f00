//! Closed keystroke model: directions, buttons, and press/release phases.
//!
//! Every input the normalization layer can report is drawn from a fixed,
//! closed set of identities: the eight directional octants plus Neutral, and
//! the eight pad buttons. Each identity exists in two phases (`Active` while
//! held, `Released` for the single frame after it drops), so the full
//! keystroke space is exactly `2 * KeystrokeId::COUNT` values.
//!
//! Because the enums are closed, a query for an identity outside the set is
//! unrepresentable rather than a runtime error.

/// One of the eight directional octants, or Neutral.
///
/// Forward is +x when the logical entity faces right (unflipped). The
/// vertical axis is +y up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Neutral,
    Up,
    UpForward,
    Forward,
    DownForward,
    Down,
    DownBack,
    Back,
    UpBack,
}

impl Direction {
    /// All directions, Neutral included.
    pub const ALL: [Direction; 9] = [
        Direction::Neutral,
        Direction::Up,
        Direction::UpForward,
        Direction::Forward,
        Direction::DownForward,
        Direction::Down,
        Direction::DownBack,
        Direction::Back,
        Direction::UpBack,
    ];

    /// Bucket a non-zero vector into the nearest 45-degree octant.
    ///
    /// Sectors are 45 degrees wide, centered on each octant direction. A
    /// vector landing exactly on a sector boundary goes to the octant on the
    /// clockwise side of the boundary. The zero vector is Neutral.
    pub fn from_vector(x: f32, y: f32) -> Direction {
        if x == 0.0 && y == 0.0 {
            return Direction::Neutral;
        }
        let deg = y.atan2(x).to_degrees();
        let sector = ((deg / 45.0 + 0.5).ceil() as i32 - 1).rem_euclid(8);
        match sector {
            0 => Direction::Forward,
            1 => Direction::UpForward,
            2 => Direction::Up,
            3 => Direction::UpBack,
            4 => Direction::Back,
            5 => Direction::DownBack,
            6 => Direction::Down,
            7 => Direction::DownForward,
            _ => unreachable!(),
        }
    }

    /// Unit vector for this octant; Neutral is the zero vector.
    pub fn unit_vector(self) -> (f32, f32) {
        const DIAG: f32 = std::f32::consts::FRAC_1_SQRT_2;
        match self {
            Direction::Neutral => (0.0, 0.0),
            Direction::Up => (0.0, 1.0),
            Direction::UpForward => (DIAG, DIAG),
            Direction::Forward => (1.0, 0.0),
            Direction::DownForward => (DIAG, -DIAG),
            Direction::Down => (0.0, -1.0),
            Direction::DownBack => (-DIAG, -DIAG),
            Direction::Back => (-1.0, 0.0),
            Direction::UpBack => (-DIAG, DIAG),
        }
    }

    /// Swap Forward and Back, including the diagonals containing them.
    ///
    /// This is the facing-relative remap: "Forward" always means "toward the
    /// direction the entity faces". Up, Down, and Neutral are unchanged. The
    /// remap is an involution.
    pub fn mirrored(self) -> Direction {
        match self {
            Direction::Forward => Direction::Back,
            Direction::Back => Direction::Forward,
            Direction::UpForward => Direction::UpBack,
            Direction::UpBack => Direction::UpForward,
            Direction::DownForward => Direction::DownBack,
            Direction::DownBack => Direction::DownForward,
            other => other,
        }
    }

    fn index(self) -> usize {
        match self {
            Direction::Neutral => 0,
            Direction::Up => 1,
            Direction::UpForward => 2,
            Direction::Forward => 3,
            Direction::DownForward => 4,
            Direction::Down => 5,
            Direction::DownBack => 6,
            Direction::Back => 7,
            Direction::UpBack => 8,
        }
    }
}

/// Physical pad buttons tracked as keystrokes.
///
/// The analog triggers actuate as buttons once past the configured
/// threshold; their analog values are not part of the keystroke model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PadButton {
    A,
    B,
    X,
    Y,
    LeftShoulder,
    RightShoulder,
    LeftTrigger,
    RightTrigger,
}

impl PadButton {
    /// All buttons, in query order.
    pub const ALL: [PadButton; 8] = [
        PadButton::A,
        PadButton::B,
        PadButton::X,
        PadButton::Y,
        PadButton::LeftShoulder,
        PadButton::RightShoulder,
        PadButton::LeftTrigger,
        PadButton::RightTrigger,
    ];

    fn index(self) -> usize {
        match self {
            PadButton::A => 0,
            PadButton::B => 1,
            PadButton::X => 2,
            PadButton::Y => 3,
            PadButton::LeftShoulder => 4,
            PadButton::RightShoulder => 5,
            PadButton::LeftTrigger => 6,
            PadButton::RightTrigger => 7,
        }
    }
}

/// A keystroke identity: one direction or one button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeystrokeId {
    Direction(Direction),
    Button(PadButton),
}

impl KeystrokeId {
    /// Number of distinct identities.
    pub const COUNT: usize = Direction::ALL.len() + PadButton::ALL.len();

    /// All identities: directions first, then buttons.
    pub const ALL: [KeystrokeId; KeystrokeId::COUNT] = [
        KeystrokeId::Direction(Direction::Neutral),
        KeystrokeId::Direction(Direction::Up),
        KeystrokeId::Direction(Direction::UpForward),
        KeystrokeId::Direction(Direction::Forward),
        KeystrokeId::Direction(Direction::DownForward),
        KeystrokeId::Direction(Direction::Down),
        KeystrokeId::Direction(Direction::DownBack),
        KeystrokeId::Direction(Direction::Back),
        KeystrokeId::Direction(Direction::UpBack),
        KeystrokeId::Button(PadButton::A),
        KeystrokeId::Button(PadButton::B),
        KeystrokeId::Button(PadButton::X),
        KeystrokeId::Button(PadButton::Y),
        KeystrokeId::Button(PadButton::LeftShoulder),
        KeystrokeId::Button(PadButton::RightShoulder),
        KeystrokeId::Button(PadButton::LeftTrigger),
        KeystrokeId::Button(PadButton::RightTrigger),
    ];

    /// Stable index in `[0, COUNT)`, usable for per-identity storage.
    pub fn index(self) -> usize {
        match self {
            KeystrokeId::Direction(d) => d.index(),
            KeystrokeId::Button(b) => Direction::ALL.len() + b.index(),
        }
    }

    /// Apply the facing remap. Buttons are unaffected.
    pub fn mirrored(self) -> KeystrokeId {
        match self {
            KeystrokeId::Direction(d) => KeystrokeId::Direction(d.mirrored()),
            button => button,
        }
    }
}

/// Whether a keystroke is currently held or was released this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Active,
    Released,
}

/// A queryable keystroke: an identity plus its phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Keystroke {
    pub id: KeystrokeId,
    pub phase: Phase,
}

impl Keystroke {
    /// The held variant of an identity.
    pub fn active(id: KeystrokeId) -> Keystroke {
        Keystroke { id, phase: Phase::Active }
    }

    /// The release-edge variant of an identity.
    pub fn released(id: KeystrokeId) -> Keystroke {
        Keystroke { id, phase: Phase::Released }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_space_is_closed_and_total() {
        assert_eq!(Direction::ALL.len(), 9);
        assert_eq!(PadButton::ALL.len(), 8);
        assert_eq!(KeystrokeId::COUNT, 17);
        // Every active keystroke has exactly one release twin.
        assert_eq!(KeystrokeId::COUNT * 2, 34);
    }

    #[test]
    fn test_indices_are_distinct_and_dense() {
        let mut seen = [false; KeystrokeId::COUNT];
        for id in KeystrokeId::ALL {
            let idx = id.index();
            assert!(!seen[idx], "duplicate index {idx} for {id:?}");
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_cardinal_octants() {
        assert_eq!(Direction::from_vector(1.0, 0.0), Direction::Forward);
        assert_eq!(Direction::from_vector(-1.0, 0.0), Direction::Back);
        assert_eq!(Direction::from_vector(0.0, 1.0), Direction::Up);
        assert_eq!(Direction::from_vector(0.0, -1.0), Direction::Down);
    }

    #[test]
    fn test_diagonal_octants() {
        assert_eq!(Direction::from_vector(0.7, 0.7), Direction::UpForward);
        assert_eq!(Direction::from_vector(-0.7, 0.7), Direction::UpBack);
        assert_eq!(Direction::from_vector(0.7, -0.7), Direction::DownForward);
        assert_eq!(Direction::from_vector(-0.7, -0.7), Direction::DownBack);
    }

    #[test]
    fn test_zero_vector_is_neutral() {
        assert_eq!(Direction::from_vector(0.0, 0.0), Direction::Neutral);
    }

    #[test]
    fn test_sector_boundary_goes_clockwise() {
        // 67.5 degrees sits exactly between Up and UpForward; clockwise
        // (decreasing angle) from the boundary is UpForward.
        let rad = 67.5_f32.to_radians();
        assert_eq!(
            Direction::from_vector(rad.cos(), rad.sin()),
            Direction::UpForward
        );
        // Likewise -67.5 between DownForward and Down resolves to Down.
        let rad = (-67.5_f32).to_radians();
        assert_eq!(Direction::from_vector(rad.cos(), rad.sin()), Direction::Down);
    }

    #[test]
    fn test_mirror_swaps_forward_and_back() {
        assert_eq!(Direction::Forward.mirrored(), Direction::Back);
        assert_eq!(Direction::UpForward.mirrored(), Direction::UpBack);
        assert_eq!(Direction::DownBack.mirrored(), Direction::DownForward);
        assert_eq!(Direction::Up.mirrored(), Direction::Up);
        assert_eq!(Direction::Down.mirrored(), Direction::Down);
        assert_eq!(Direction::Neutral.mirrored(), Direction::Neutral);
    }

    #[test]
    fn test_mirror_is_involution() {
        for d in Direction::ALL {
            assert_eq!(d.mirrored().mirrored(), d);
        }
        for id in KeystrokeId::ALL {
            assert_eq!(id.mirrored().mirrored(), id);
        }
    }

    #[test]
    fn test_buttons_unaffected_by_mirror() {
        for b in PadButton::ALL {
            assert_eq!(KeystrokeId::Button(b).mirrored(), KeystrokeId::Button(b));
        }
    }

    #[test]
    fn test_unit_vectors_round_trip_through_bucketing() {
        for d in Direction::ALL {
            let (x, y) = d.unit_vector();
            assert_eq!(Direction::from_vector(x, y), d);
        }
    }
}

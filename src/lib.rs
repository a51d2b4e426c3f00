//! Per-frame controller-input normalization.
//!
//! `padwrap` turns noisy raw device samples into a stable, enumerable,
//! edge-triggered keystroke model that game logic can query cheaply and
//! deterministically:
//!
//! - discrete press/hold/release keystrokes with a one-frame release window
//! - facing-relative Forward/Back interpretation for side-view control
//!   schemes, applied per query rather than per wrapper
//! - configurable dead-zone shaping (axial snap, linear scrub, power curve)
//! - keyboard fallback when the physical pad is unplugged
//!
//! The crate never touches a device. An external collaborator samples the
//! OS once per frame into a [`RawInputSnapshot`]; a [`ControllerWrapper`]
//! per logical player consumes it:
//!
//! ```
//! use padwrap::{
//!     ControllerConfig, ControllerWrapper, Direction, Keystroke, KeystrokeId,
//!     RawInputSnapshot,
//! };
//!
//! let mut controller = ControllerWrapper::new(0, ControllerConfig::default())?;
//!
//! let mut snapshot = RawInputSnapshot::idle();
//! snapshot.left_stick = (0.9, 0.1);
//! controller.update(&snapshot);
//!
//! let forward = Keystroke::active(KeystrokeId::Direction(Direction::Forward));
//! assert!(controller.check_keystroke(forward, false));
//! # Ok::<(), padwrap::ConfigError>(())
//! ```

pub mod classify;
pub mod config;
pub mod deadzone;
pub mod edge;
pub mod error;
pub mod keystroke;
pub mod snapshot;
pub mod stick;
pub mod timer;
pub mod wrapper;

pub use config::{ControllerConfig, ShapingConfig};
pub use deadzone::{DeadZoneType, ShapedStick};
pub use edge::KeystrokeSet;
pub use error::ConfigError;
pub use keystroke::{Direction, Keystroke, KeystrokeId, PadButton, Phase};
pub use snapshot::{ButtonStates, KeyboardKeys, RawInputSnapshot};
pub use stick::{StickId, ThumbstickState};
pub use timer::{HoldTimer, KeystrokeTimers};
pub use wrapper::ControllerWrapper;

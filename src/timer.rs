//! Consumer-owned hold timers, one per keystroke identity.
//!
//! The wrapper itself never tracks how long a keystroke has been held; a
//! consumer that cares owns a [`KeystrokeTimers`] and drives it once per
//! frame from the wrapper's edge queries. Timers restart on press edges and
//! accumulate only while the keystroke stays continuously active.

use crate::keystroke::{Keystroke, KeystrokeId};
use crate::wrapper::ControllerWrapper;

/// Measures how long something has been continuously active.
#[derive(Debug, Clone, Copy, Default)]
pub struct HoldTimer {
    elapsed: f32,
    running: bool,
}

impl HoldTimer {
    /// Begin timing from zero.
    pub fn restart(&mut self) {
        self.elapsed = 0.0;
        self.running = true;
    }

    /// Stop timing and reset.
    pub fn stop(&mut self) {
        self.elapsed = 0.0;
        self.running = false;
    }

    /// Accumulate one frame's delta while running.
    pub fn update(&mut self, dt: f32) {
        if self.running {
            self.elapsed += dt;
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Seconds since the last restart, or zero when stopped.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

/// One hold timer per keystroke identity.
#[derive(Debug, Clone)]
pub struct KeystrokeTimers {
    timers: [HoldTimer; KeystrokeId::COUNT],
}

impl Default for KeystrokeTimers {
    fn default() -> Self {
        Self::new()
    }
}

impl KeystrokeTimers {
    pub fn new() -> Self {
        Self {
            timers: [HoldTimer::default(); KeystrokeId::COUNT],
        }
    }

    /// Drive every timer from this frame's wrapper state.
    ///
    /// Call once per frame, after `wrapper.update`. Facing does not matter
    /// for hold measurement, so identities are read unflipped.
    pub fn update(&mut self, wrapper: &ControllerWrapper, dt: f32) {
        for id in KeystrokeId::ALL {
            let timer = &mut self.timers[id.index()];
            if wrapper.pressed_this_frame(id, false) {
                timer.restart();
            }
            if wrapper.check_keystroke(Keystroke::active(id), false) {
                timer.update(dt);
            } else {
                timer.stop();
            }
        }
    }

    /// Seconds the identity has been continuously active, zero if inactive.
    pub fn held_for(&self, id: KeystrokeId) -> f32 {
        self.timers[id.index()].elapsed()
    }
}

//! The rotational state machine: one wheel's accumulated rotation, current
//! velocity and interaction mode, with guarded transitions and silent
//! recovery from floating-point anomalies.

use rand::Rng;
use strum::Display as StrumDisplay;

use crate::angle;
use crate::tracker::VelocityTracker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    Idle,
    Dragging,
    Spinning,
}

impl Mode {
    /// Every cross-state move is legal; re-entering the current state is not.
    /// Spurious events (a drag-end without a drag-start, a second spin press
    /// mid-spin) fall out as rejected self-transitions.
    fn allows(self, to: Mode) -> bool {
        matches!(
            (self, to),
            (Mode::Idle, Mode::Dragging)
                | (Mode::Idle, Mode::Spinning)
                | (Mode::Dragging, Mode::Idle)
                | (Mode::Dragging, Mode::Spinning)
                | (Mode::Spinning, Mode::Idle)
                | (Mode::Spinning, Mode::Dragging)
        )
    }
}

#[derive(Debug)]
pub struct SpinState {
    /// Unbounded running total in degrees; only normalized by the stepper.
    pub(crate) rotation: f64,
    /// Degrees per ~60 Hz frame.
    pub(crate) velocity: f64,
    mode: Mode,
    last_sample_angle: f64,
    last_update_ms: u64,
}

impl Default for SpinState {
    fn default() -> Self {
        Self::new()
    }
}

impl SpinState {
    pub fn new() -> Self {
        Self {
            rotation: 0.0,
            velocity: 0.0,
            mode: Mode::Idle,
            last_sample_angle: 0.0,
            last_update_ms: 0,
        }
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn last_update_ms(&self) -> u64 {
        self.last_update_ms
    }

    /// Requests a mode change. A rejected request is not an error; it returns
    /// `false` and leaves the state untouched so the caller can drop the
    /// spurious event.
    pub fn transition(&mut self, to: Mode) -> bool {
        if !self.mode.allows(to) {
            log::debug!("rejected transition {} -> {}", self.mode, to);
            return false;
        }
        log::debug!("state: {} -> {}", self.mode, to);
        self.mode = to;
        true
    }

    /// Recovers in place from non-finite rotation or velocity. The wheel is
    /// decorative, so a visible stutter beats halting the animation loop.
    pub fn sanitize(&mut self, perpetual_floor: f64) {
        if !self.velocity.is_finite() {
            let recovered = if self.velocity.is_nan() || self.velocity.is_sign_positive() {
                perpetual_floor
            } else {
                -perpetual_floor
            };
            log::debug!("non-finite velocity recovered to {recovered}");
            self.velocity = recovered;
        }
        if !self.rotation.is_finite() {
            log::debug!("non-finite rotation reset to 0");
            self.rotation = 0.0;
        }
    }

    pub fn begin_drag(
        &mut self,
        start_angle: f64,
        now_ms: u64,
        tracker: &mut VelocityTracker,
    ) -> bool {
        if !self.transition(Mode::Dragging) {
            return false;
        }
        self.last_sample_angle = start_angle;
        self.last_update_ms = now_ms;
        tracker.clear();
        true
    }

    /// Applies one drag-move while dragging, accumulating the shortest-path
    /// delta into the rotation and feeding the velocity tracker. Returns the
    /// applied delta, or `None` outside of a drag.
    pub fn apply_drag_delta(
        &mut self,
        new_angle: f64,
        now_ms: u64,
        tracker: &mut VelocityTracker,
    ) -> Option<f64> {
        if self.mode != Mode::Dragging {
            return None;
        }
        let delta = angle::difference(self.last_sample_angle, new_angle);
        self.rotation += delta;
        self.last_sample_angle = new_angle;
        self.last_update_ms = now_ms;
        tracker.record(new_angle, now_ms);
        Some(delta)
    }

    /// Converts the tracked drag history into a throw and starts spinning.
    /// Returns the resulting velocity, or `None` outside of a drag.
    pub fn end_drag(&mut self, drag_multiplier: f64, tracker: &mut VelocityTracker) -> Option<f64> {
        if self.mode != Mode::Dragging {
            return None;
        }
        let velocity = tracker.release() * drag_multiplier;
        tracker.clear();
        self.velocity = velocity;
        self.transition(Mode::Spinning);
        Some(velocity)
    }

    /// The spin-button path: a uniform throw in [-max/2, +max/2), no drag
    /// involved. Rejected (and the velocity untouched) unless the spinning
    /// transition is legal.
    pub fn spin_random<R: Rng>(&mut self, rng: &mut R, max_velocity: f64) -> bool {
        if !(max_velocity > 0.0 && max_velocity.is_finite()) {
            return false;
        }
        if !self.transition(Mode::Spinning) {
            return false;
        }
        self.velocity = rng.random_range(-max_velocity / 2.0..max_velocity / 2.0);
        true
    }

    /// Explicit reset back to the freshly-constructed state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

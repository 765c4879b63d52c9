//! The wheel facade: the single object a host UI talks to.
//!
//! Inbound it takes the raw collaborator events (drag start/move/end, spin
//! button, animation ticks); outbound it hands back plain values — the new
//! rotation to render, and the settled index exactly once per spin. It owns
//! the spin state, the drag-velocity tracker, the validated tunables and the
//! angular layout, and contains no scheduling of its own.

use rand::Rng;
use thiserror::Error;

use crate::angle;
use crate::physics::{self, PhysicsConfig, PhysicsConfigError};
use crate::resolver::{ResolveError, WheelLayout};
use crate::state::{Mode, SpinState};
use crate::tracker::VelocityTracker;

#[derive(Debug, Error, PartialEq)]
pub enum WheelError {
    #[error(transparent)]
    Physics(#[from] PhysicsConfigError),
    #[error(transparent)]
    Layout(#[from] ResolveError),
}

/// What one animation tick produced: the rotation to render, and the
/// committed result index if this tick settled the spin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickOutcome {
    pub rotation: f64,
    pub settled: Option<usize>,
}

#[derive(Debug)]
pub struct Wheel {
    state: SpinState,
    tracker: VelocityTracker,
    config: PhysicsConfig,
    layout: WheelLayout,
    /// Set while a spin still owes the collaborator a result.
    result_pending: bool,
}

impl Wheel {
    pub fn new(config: PhysicsConfig, item_count: usize) -> Result<Self, WheelError> {
        config.validate()?;
        let layout = WheelLayout::new(item_count)?;
        Ok(Self {
            state: SpinState::new(),
            tracker: VelocityTracker::new(),
            config,
            layout,
            result_pending: false,
        })
    }

    pub fn rotation(&self) -> f64 {
        self.state.rotation()
    }

    pub fn velocity(&self) -> f64 {
        self.state.velocity()
    }

    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn item_count(&self) -> usize {
        self.layout.item_count()
    }

    /// Rebuilds the layout when the card set changes. Any pending result is
    /// dropped; its index would refer to the old layout.
    pub fn set_item_count(&mut self, item_count: usize) -> Result<(), WheelError> {
        self.layout = WheelLayout::new(item_count)?;
        self.result_pending = false;
        Ok(())
    }

    /// Pointer went down on the wheel. Returns whether the drag was accepted;
    /// a grab mid-spin is legal and captures the wheel.
    pub fn on_drag_start(
        &mut self,
        x: f64,
        y: f64,
        center_x: f64,
        center_y: f64,
        now_ms: u64,
    ) -> bool {
        let bearing = angle::from_coords(x, y, center_x, center_y);
        if !self.state.begin_drag(bearing, now_ms, &mut self.tracker) {
            return false;
        }
        self.result_pending = false;
        true
    }

    /// Pointer moved during a drag. Returns the new rotation to render, or
    /// `None` when no drag is live (the collaborator drops the event).
    pub fn on_drag_move(
        &mut self,
        x: f64,
        y: f64,
        center_x: f64,
        center_y: f64,
        now_ms: u64,
    ) -> Option<f64> {
        let bearing = angle::from_coords(x, y, center_x, center_y);
        self.state
            .apply_drag_delta(bearing, now_ms, &mut self.tracker)?;
        Some(self.state.rotation())
    }

    /// Pointer released: the tracked history becomes a throw and the wheel
    /// starts spinning. Returns `false` for a drag-end without a drag.
    pub fn on_drag_end(&mut self) -> bool {
        let Some(velocity) = self
            .state
            .end_drag(self.config.drag_multiplier, &mut self.tracker)
        else {
            return false;
        };
        log::debug!("drag released with velocity {velocity:.3}");
        self.result_pending = true;
        true
    }

    /// The spin button: a random throw from the thread RNG.
    pub fn on_spin_button(&mut self) -> bool {
        self.spin_with_rng(&mut rand::rng())
    }

    /// Seedable variant of [`Wheel::on_spin_button`] for reproducible spins.
    pub fn spin_with_rng<R: Rng>(&mut self, rng: &mut R) -> bool {
        if !self.state.spin_random(rng, self.config.max_velocity) {
            return false;
        }
        log::debug!("spin button threw velocity {:.3}", self.state.velocity());
        self.result_pending = true;
        true
    }

    /// One animation tick. Settle policy: the result is committed the first
    /// time a spinning tick ends at or below `min_velocity`; after that the
    /// wheel keeps creeping at the perpetual floor for visual continuity, but
    /// the index is reported exactly once per spin.
    pub fn on_animation_tick(&mut self, delta_ms: f64) -> TickOutcome {
        physics::step(&mut self.state, delta_ms, &self.config);

        let mut settled = None;
        if self.state.mode() == Mode::Spinning
            && self.result_pending
            && self.state.velocity().abs() <= self.config.min_velocity
        {
            let index = self.layout.resolve(self.state.rotation());
            log::info!(
                "settled on item {index} (rotation {:.2})",
                self.state.rotation()
            );
            self.result_pending = false;
            settled = Some(index);
        }

        TickOutcome {
            rotation: self.state.rotation(),
            settled,
        }
    }

    /// Forcibly stops the wheel (the only way a spin ever truly halts).
    pub fn halt(&mut self) -> bool {
        if !self.state.transition(Mode::Idle) {
            return false;
        }
        self.state.velocity = 0.0;
        self.result_pending = false;
        true
    }

    /// Back to the freshly-built state; layout and tunables are kept.
    pub fn reset(&mut self) {
        self.state.reset();
        self.tracker.clear();
        self.result_pending = false;
    }
}

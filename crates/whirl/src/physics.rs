//! Friction stepper and its tunables.
//!
//! One `step` advances a spinning wheel by one animation tick: friction
//! multiply, clamp, perpetual-motion floor, then rotation update. The delta
//! time is a validity gate only — velocity is expressed in degrees per frame,
//! so a dropped or duplicated frame shows up as a stutter, never as NaN.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::angle;
use crate::state::{Mode, SpinState};

/// Immutable physics tunables, validated once at wheel construction.
///
/// Defaults are the hand-tuned feel constants of the original wheel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Per-tick velocity multiplier, in (0, 1).
    pub friction: f64,
    /// Settle threshold: a spin at or below this commits its result.
    pub min_velocity: f64,
    /// Velocity magnitude a spinning wheel never decays below.
    pub perpetual_floor: f64,
    /// Hard clamp on velocity magnitude, degrees per frame.
    pub max_velocity: f64,
    /// Scale applied to the measured release velocity of a throw.
    pub drag_multiplier: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            friction: 0.985,
            min_velocity: 0.05,
            perpetual_floor: 0.02,
            max_velocity: 25.0,
            drag_multiplier: 0.8,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum PhysicsConfigError {
    #[error("friction must lie in (0, 1), got {0}")]
    Friction(f64),
    #[error("max velocity must be positive and finite, got {0}")]
    MaxVelocity(f64),
    #[error("min velocity must be positive and finite, got {0}")]
    MinVelocity(f64),
    #[error("perpetual floor must be positive and no greater than max velocity, got {0}")]
    PerpetualFloor(f64),
    #[error("drag multiplier must be positive and finite, got {0}")]
    DragMultiplier(f64),
}

impl PhysicsConfig {
    pub fn validate(&self) -> Result<(), PhysicsConfigError> {
        if !(self.friction > 0.0 && self.friction < 1.0) {
            return Err(PhysicsConfigError::Friction(self.friction));
        }
        if !(self.max_velocity > 0.0 && self.max_velocity.is_finite()) {
            return Err(PhysicsConfigError::MaxVelocity(self.max_velocity));
        }
        if !(self.min_velocity > 0.0 && self.min_velocity.is_finite()) {
            return Err(PhysicsConfigError::MinVelocity(self.min_velocity));
        }
        if !(self.perpetual_floor > 0.0 && self.perpetual_floor <= self.max_velocity) {
            return Err(PhysicsConfigError::PerpetualFloor(self.perpetual_floor));
        }
        if !(self.drag_multiplier > 0.0 && self.drag_multiplier.is_finite()) {
            return Err(PhysicsConfigError::DragMultiplier(self.drag_multiplier));
        }
        Ok(())
    }
}

/// Advances the state by one tick while spinning; a no-op in any other mode
/// or for a non-finite or non-positive delta.
///
/// Invariant: once `step` has run in spinning mode, the velocity magnitude
/// never decays below `perpetual_floor` — the wheel creeps forever instead of
/// stopping dead, until an external idle/dragging transition halts it.
pub fn step(state: &mut SpinState, delta_ms: f64, config: &PhysicsConfig) {
    if state.mode() != Mode::Spinning {
        return;
    }
    if !delta_ms.is_finite() || delta_ms <= 0.0 {
        return;
    }
    state.sanitize(config.perpetual_floor);

    state.velocity *= config.friction;
    state.velocity = clamp_velocity(state.velocity, config);
    state.velocity = ensure_perpetual(state.velocity, config.perpetual_floor);
    state.rotation = angle::normalize(state.rotation + state.velocity);

    log::trace!(
        "step: rotation {:.3} velocity {:.3}",
        state.rotation,
        state.velocity
    );
}

fn clamp_velocity(velocity: f64, config: &PhysicsConfig) -> f64 {
    if !velocity.is_finite() {
        return config.perpetual_floor;
    }
    velocity.clamp(-config.max_velocity, config.max_velocity)
}

fn ensure_perpetual(velocity: f64, floor: f64) -> f64 {
    if velocity.abs() < floor {
        // Sign of zero counts as positive.
        if velocity >= 0.0 { floor } else { -floor }
    } else {
        velocity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spinning_state(velocity: f64) -> SpinState {
        let mut state = SpinState::new();
        assert!(state.transition(Mode::Spinning));
        state.velocity = velocity;
        state
    }

    #[test]
    fn default_config_is_valid() {
        assert_eq!(PhysicsConfig::default().validate(), Ok(()));
    }

    #[test]
    fn out_of_range_tunables_are_rejected() {
        let mut config = PhysicsConfig::default();
        config.friction = 1.0;
        assert!(matches!(
            config.validate(),
            Err(PhysicsConfigError::Friction(_))
        ));

        let mut config = PhysicsConfig::default();
        config.max_velocity = 0.0;
        assert!(matches!(
            config.validate(),
            Err(PhysicsConfigError::MaxVelocity(_))
        ));

        let mut config = PhysicsConfig::default();
        config.perpetual_floor = -0.5;
        assert!(matches!(
            config.validate(),
            Err(PhysicsConfigError::PerpetualFloor(_))
        ));

        let mut config = PhysicsConfig::default();
        config.min_velocity = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(PhysicsConfigError::MinVelocity(_))
        ));

        let mut config = PhysicsConfig::default();
        config.drag_multiplier = 0.0;
        assert!(matches!(
            config.validate(),
            Err(PhysicsConfigError::DragMultiplier(_))
        ));
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: PhysicsConfig = serde_json::from_str(r#"{"friction": 0.9}"#).unwrap();
        assert_eq!(config.friction, 0.9);
        assert_eq!(config.max_velocity, PhysicsConfig::default().max_velocity);
    }

    #[test]
    fn friction_decays_monotonically_until_the_floor() {
        let config = PhysicsConfig {
            friction: 0.9,
            perpetual_floor: 0.02,
            ..PhysicsConfig::default()
        };
        let mut state = spinning_state(10.0);

        let mut previous = state.velocity();
        while previous > config.perpetual_floor {
            step(&mut state, 16.0, &config);
            assert!(
                state.velocity() < previous || state.velocity() == config.perpetual_floor,
                "velocity {} did not decay from {}",
                state.velocity(),
                previous
            );
            previous = state.velocity();
        }

        // Once at the floor it stays exactly there.
        for _ in 0..50 {
            step(&mut state, 16.0, &config);
            assert_eq!(state.velocity(), config.perpetual_floor);
        }
    }

    #[test]
    fn floor_preserves_the_spin_direction() {
        let config = PhysicsConfig::default();
        let mut state = spinning_state(-0.001);
        step(&mut state, 16.0, &config);
        assert_eq!(state.velocity(), -config.perpetual_floor);

        let mut state = spinning_state(0.0);
        step(&mut state, 16.0, &config);
        assert_eq!(state.velocity(), config.perpetual_floor);
    }

    #[test]
    fn bad_delta_times_leave_the_state_untouched() {
        let config = PhysicsConfig::default();
        for delta in [f64::NAN, 0.0, -5.0, f64::INFINITY] {
            let mut state = spinning_state(10.0);
            state.rotation = 42.0;
            step(&mut state, delta, &config);
            assert_eq!(state.velocity(), 10.0);
            assert_eq!(state.rotation(), 42.0);
        }
    }

    #[test]
    fn step_is_a_noop_outside_spinning() {
        let config = PhysicsConfig::default();
        let mut state = SpinState::new();
        state.velocity = 10.0;
        step(&mut state, 16.0, &config);
        assert_eq!(state.rotation(), 0.0);
        assert_eq!(state.velocity(), 10.0);
    }

    #[test]
    fn runaway_velocity_is_clamped() {
        let config = PhysicsConfig::default();
        let mut state = spinning_state(1e9);
        step(&mut state, 16.0, &config);
        assert_eq!(state.velocity(), config.max_velocity);
    }

    #[test]
    fn non_finite_velocity_recovers_to_the_floor() {
        let config = PhysicsConfig::default();
        let mut state = spinning_state(f64::NAN);
        step(&mut state, 16.0, &config);
        assert_eq!(state.velocity(), config.perpetual_floor);
        assert!(state.rotation().is_finite());
    }

    #[test]
    fn rotation_stays_normalized_while_spinning() {
        let config = PhysicsConfig::default();
        let mut state = spinning_state(25.0);
        for _ in 0..200 {
            step(&mut state, 16.0, &config);
            assert!(state.rotation() > -180.0 && state.rotation() <= 180.0);
        }
    }
}

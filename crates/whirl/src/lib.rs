//! Rotational physics core for a spin-the-wheel picker.
//!
//! The wheel itself is decorative: a host UI lays food-category cards in a
//! circle, forwards pointer events and animation ticks here, and renders
//! whatever rotation comes back. This crate owns everything with actual
//! behavior in it — drag-to-velocity conversion, friction decay with a
//! perpetual-motion floor, the idle/dragging/spinning state machine and the
//! final rotation-to-index resolution. It never schedules anything on its
//! own: time arrives as explicit `now_ms`/`delta_ms` parameters, so the whole
//! engine runs identically under a display refresh loop or a fake clock in
//! tests.

pub mod angle;
pub mod physics;
pub mod resolver;
pub mod state;
pub mod tracker;
pub mod wheel;

pub use physics::{PhysicsConfig, PhysicsConfigError};
pub use resolver::{ResolveError, WheelLayout, resolve};
pub use state::{Mode, SpinState};
pub use tracker::VelocityTracker;
pub use wheel::{TickOutcome, Wheel, WheelError};

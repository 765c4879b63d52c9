//! Maps a settled rotation to the card sitting under the fixed pointer.
//!
//! Cards are laid out evenly around the circle, item 0 centered at the top
//! (0°) and indices increasing clockwise. The wheel rotates underneath a
//! fixed pointer at the top, so the selected index is derived from how far
//! the layout has been carried past it, with a half-step offset because each
//! card owns the arc centered on its own angle.

use thiserror::Error;

use crate::angle;

const FULL_TURN: f64 = 360.0;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("item count must be a positive integer, got {0}")]
    InvalidItemCount(usize),
}

/// Angular layout for a given number of cards. Rebuilt whenever the item set
/// changes; cheap enough that nothing is cached beyond the step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelLayout {
    item_count: usize,
    angle_step: f64,
}

impl WheelLayout {
    pub fn new(item_count: usize) -> Result<Self, ResolveError> {
        if item_count == 0 {
            return Err(ResolveError::InvalidItemCount(item_count));
        }
        Ok(Self {
            item_count,
            angle_step: FULL_TURN / item_count as f64,
        })
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn angle_step(&self) -> f64 {
        self.angle_step
    }

    /// Resolves the selected index for a rotation. The rotation may be any
    /// real number (the accumulator is unbounded); it is normalized into
    /// [0, 360) here.
    pub fn resolve(&self, rotation: f64) -> usize {
        let normalized = angle::normalize(rotation).rem_euclid(FULL_TURN);
        let offset = (FULL_TURN - normalized + self.angle_step / 2.0).rem_euclid(FULL_TURN);
        let index = (offset / self.angle_step) as usize;
        // Float rounding can graze the upper edge; keep the index in range.
        index.min(self.item_count - 1)
    }
}

/// One-shot convenience over [`WheelLayout`].
pub fn resolve(rotation: f64, item_count: usize) -> Result<usize, ResolveError> {
    Ok(WheelLayout::new(item_count)?.resolve(rotation))
}

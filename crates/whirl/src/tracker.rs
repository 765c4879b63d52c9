//! Rolling window of drag samples used to estimate the release velocity of a
//! throw. Samples are pruned both by age and by count so a long, slow drag
//! never dominates the estimate and memory stays bounded.

use std::collections::VecDeque;

use crate::angle;

/// Samples older than this relative to the newest one are dropped.
pub const SAMPLE_WINDOW_MS: u64 = 100;
/// Hard cap on retained samples.
pub const MAX_SAMPLES: usize = 10;

/// Velocity is reported in degrees per ~60 Hz frame.
const FRAME_MS: f64 = 16.67;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSample {
    pub angle: f64,
    pub timestamp_ms: u64,
}

#[derive(Debug, Default)]
pub struct VelocityTracker {
    samples: VecDeque<DragSample>,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a sample and prunes the window.
    ///
    /// Timestamps are caller-supplied milliseconds and assumed monotonic per
    /// the event-ordering contract; a stale timestamp merely shrinks the
    /// window, it never underflows.
    pub fn record(&mut self, angle: f64, timestamp_ms: u64) {
        self.samples.push_back(DragSample {
            angle,
            timestamp_ms,
        });
        let cutoff = timestamp_ms.saturating_sub(SAMPLE_WINDOW_MS);
        while self
            .samples
            .front()
            .is_some_and(|s| s.timestamp_ms < cutoff)
        {
            self.samples.pop_front();
        }
        while self.samples.len() > MAX_SAMPLES {
            self.samples.pop_front();
        }
    }

    /// Angular velocity implied by the retained window, in degrees per frame.
    ///
    /// Returns 0 when there is nothing to measure: fewer than two samples, or
    /// all samples sharing one timestamp (guards the divide by zero).
    pub fn release(&self) -> f64 {
        if self.samples.len() < 2 {
            return 0.0;
        }
        let (Some(oldest), Some(newest)) = (self.samples.front(), self.samples.back()) else {
            return 0.0;
        };
        let elapsed_ms = newest.timestamp_ms.saturating_sub(oldest.timestamp_ms);
        if elapsed_ms == 0 {
            return 0.0;
        }
        angle::difference(oldest.angle, newest.angle) / elapsed_ms as f64 * FRAME_MS
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

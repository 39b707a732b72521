// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Drag velocity sampling
//!
//! Release velocity is estimated from the drag deltas within a short window
//! before release. Input devices report anywhere between ~30 Hz and 1 kHz, so
//! the window should span several samples at the low end while the buffer
//! stays small; zero deltas are never recorded.

use crate::geom::Vec2;
use smallvec::SmallVec;
use std::time::{Duration, Instant};

const MAX_SAMPLES: usize = 8;

/// A buffer of recent delta samples used to estimate velocity
#[derive(Clone, Debug, Default)]
pub struct Samples {
    samples: SmallVec<[(Instant, Vec2); MAX_SAMPLES]>,
    next: usize, // index of next insert
}

impl Samples {
    /// Clear all samples
    pub fn clear(&mut self) {
        self.samples.clear();
        self.next = 0;
    }

    /// Push a new sample
    pub fn push_delta(&mut self, now: Instant, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        if self.samples.len() < MAX_SAMPLES {
            self.samples.push((now, delta));
        } else {
            self.samples[self.next] = (now, delta);
            self.next = (self.next + 1) % MAX_SAMPLES;
        }
    }

    /// Calculate average velocity over the `period` ending at `now`
    ///
    /// Units: content units per second. Returns zero for an empty period.
    pub fn velocity(&self, now: Instant, period: Duration) -> Vec2 {
        let secs = period.as_secs_f32();
        if secs <= 0.0 {
            return Vec2::ZERO;
        }
        let start = now.checked_sub(period);

        let mut delta = Vec2::ZERO;
        for sample in &self.samples {
            if start.is_none_or(|start| sample.0 > start) && sample.0 <= now {
                delta += sample.1;
            }
        }

        delta / secs
    }
}

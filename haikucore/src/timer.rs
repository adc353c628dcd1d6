//! Countdown timers driven by frame deltas

/// Counts down from its interval and fires once on reaching zero, then
/// re-arms with `next` (which may differ from the first interval).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Countdown {
    remaining: f32,
    next: f32,
}

impl Countdown {
    /// First firing after `first` seconds, then every `every` seconds.
    pub fn new(first: f32, every: f32) -> Self {
        Self {
            remaining: first,
            next: every,
        }
    }

    pub fn every(secs: f32) -> Self {
        Self::new(secs, secs)
    }

    /// Advance by `dt`. Returns `true` on the frame the countdown hits zero.
    /// Overshoot is not carried over; at most one firing per call.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining -= dt.max(0.0);
        if self.remaining <= 0.0 {
            self.remaining = self.next;
            true
        } else {
            false
        }
    }

    pub fn remaining(&self) -> f32 {
        self.remaining.max(0.0)
    }
}

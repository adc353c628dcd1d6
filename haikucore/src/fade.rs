//! Timed transitions for fades and hover highlights
//!
//! A [`Transition`] holds a value between 0.0 and 1.0. Each frame it is
//! told whether its target is on; it then moves toward 1.0 over `in_secs`
//! or back toward 0.0 over `out_secs`. Reversing mid-way continues from
//! the current value, so a haiku that dies while still fading in simply
//! turns around.

/// Default fade-in/out duration for haiku items, in seconds.
pub const FADE_SECS: f32 = 1.0;

/// Hover highlight ramp durations, in seconds.
pub const HOVER_IN_SECS: f32 = 0.2;
pub const HOVER_OUT_SECS: f32 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    in_secs: f32,
    out_secs: f32,
    value: f32,
}

impl Transition {
    pub fn new(in_secs: f32, out_secs: f32) -> Self {
        Self {
            in_secs,
            out_secs,
            value: 0.0,
        }
    }

    /// Advance by `dt` seconds toward 1.0 when `on`, toward 0.0 otherwise.
    pub fn update(&mut self, dt: f32, on: bool) {
        let dt = dt.max(0.0);
        if on {
            self.value = step(self.value, dt, self.in_secs);
        } else {
            self.value = -step(-self.value, dt, self.out_secs);
        }
        self.value = self.value.clamp(0.0, 1.0);
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Value with a quadratic ease-out applied, for visual ramps.
    pub fn eased(&self) -> f32 {
        ease_out_quad(self.value)
    }

    pub fn is_zero(&self) -> bool {
        self.value <= 0.0
    }

    pub fn is_one(&self) -> bool {
        self.value >= 1.0
    }
}

/// Move `value` up by `dt / secs`; a zero duration jumps straight to 1.0.
fn step(value: f32, dt: f32, secs: f32) -> f32 {
    if secs <= 0.0 {
        1.0
    } else {
        value + dt / secs
    }
}

/// Linear interpolation between two values
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn ease_out_quad(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramps_up_then_down() {
        let mut t = Transition::new(1.0, 2.0);
        assert!(t.is_zero());
        t.update(0.5, true);
        assert!((t.value() - 0.5).abs() < 1e-6);
        t.update(0.6, true);
        assert!(t.is_one());
        t.update(1.0, false);
        assert!((t.value() - 0.5).abs() < 1e-6);
        t.update(1.0, false);
        assert!(t.is_zero());
    }

    #[test]
    fn test_stays_in_range() {
        let mut t = Transition::new(0.2, 0.4);
        for i in 0..100 {
            t.update(0.07, i % 7 < 4);
            assert!((0.0..=1.0).contains(&t.value()));
        }
        t.update(-5.0, true);
        assert!((0.0..=1.0).contains(&t.value()));
    }

    #[test]
    fn test_reverse_mid_fade() {
        let mut t = Transition::new(1.0, 1.0);
        t.update(0.3, true);
        t.update(0.1, false);
        assert!((t.value() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let mut t = Transition::new(0.0, 0.0);
        t.update(0.01, true);
        assert!(t.is_one());
        t.update(0.01, false);
        assert!(t.is_zero());
    }

    #[test]
    fn test_eased_endpoints() {
        let mut t = Transition::new(1.0, 1.0);
        assert_eq!(t.eased(), 0.0);
        t.update(1.0, true);
        assert_eq!(t.eased(), 1.0);
    }
}

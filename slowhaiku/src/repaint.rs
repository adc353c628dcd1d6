//! Repaint scheduling for the haiku field
//!
//! egui only redraws when asked. While anything fades or a hover ramp is
//! running we repaint at a steady frame rate; otherwise we sleep until the
//! field's next timer is due. Input wakes egui on its own.

use std::time::Duration;

/// Frame interval while something is animating (~30 fps).
const ANIMATION_INTERVAL: Duration = Duration::from_millis(33);

/// Cap on the frame delta handed to the field, so a stalled frame does
/// not skip a whole fade.
pub const MAX_FRAME_DT: f32 = 0.25;

/// Longest sleep between repaints. Must not exceed [`MAX_FRAME_DT`]:
/// a longer sleep would be clipped to the cap and the field's timers
/// would fall behind the wall clock.
const MAX_IDLE: Duration = Duration::from_millis(250);

/// Why the next repaint was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepaintReason {
    Animating,
    TimerDue,
    /// Paused (detail view open); only input will wake us.
    Idle,
}

#[derive(Debug, Default)]
pub struct RepaintController {
    frame: u64,
    last_reason: Option<RepaintReason>,
}

impl RepaintController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick the delay before the next repaint from the field's wake hint.
    pub fn plan(next_wake: Option<f32>) -> (RepaintReason, Option<Duration>) {
        match next_wake {
            Some(secs) if secs <= 0.0 => (RepaintReason::Animating, Some(ANIMATION_INTERVAL)),
            Some(secs) => {
                let wait = Duration::from_secs_f32(secs).min(MAX_IDLE);
                (RepaintReason::TimerDue, Some(wait.max(ANIMATION_INTERVAL)))
            }
            None => (RepaintReason::Idle, None),
        }
    }

    /// Call at the end of `update()`.
    pub fn end_frame(&mut self, ctx: &egui::Context, next_wake: Option<f32>) {
        self.frame += 1;
        let (reason, delay) = Self::plan(next_wake);
        if self.last_reason != Some(reason) {
            tracing::trace!(?reason, frame = self.frame, "repaint mode changed");
            self.last_reason = Some(reason);
        }
        if let Some(delay) = delay {
            ctx.request_repaint_after(delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use haikucore::{Corpus, FieldConfig, FrameInput, HaikuField, HaikuStyle, LawEntry};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_plan() {
        assert_eq!(
            RepaintController::plan(Some(0.0)),
            (RepaintReason::Animating, Some(ANIMATION_INTERVAL))
        );
        assert_eq!(
            RepaintController::plan(Some(0.5)),
            (RepaintReason::TimerDue, Some(Duration::from_millis(500)))
        );
        assert_eq!(
            RepaintController::plan(Some(30.0)),
            (RepaintReason::TimerDue, Some(Duration::from_millis(250)))
        );
        assert_eq!(RepaintController::plan(Some(0.001)).1, Some(ANIMATION_INTERVAL));
        assert_eq!(RepaintController::plan(None), (RepaintReason::Idle, None));
    }

    #[test]
    fn test_idle_sleep_fits_frame_cap() {
        assert!(MAX_IDLE.as_secs_f32() <= MAX_FRAME_DT);
    }

    #[test]
    fn test_timers_keep_wall_clock_time() {
        let laws = vec![LawEntry {
            name: "A".to_string(),
            url: "u".to_string(),
            haikus: vec!["abc".to_string(), "defgh".to_string()],
        }];
        let corpus = Corpus::new(laws, 100).unwrap();
        let measure = |text: &str, style: HaikuStyle| {
            egui::vec2(text.chars().count() as f32 * 20.0 * style.scale(), 24.0 * style.scale())
        };
        let canvas = egui::vec2(1920.0, 1080.0);
        let mut field = HaikuField::new(FieldConfig::default());
        let mut rng = StdRng::seed_from_u64(42);

        // Sleep exactly as long as the repaint plan asks, then feed the
        // capped delta the app would compute.
        let mut wall = 0.0_f32;
        let mut dt = 0.0_f32;
        let mut retired_at = None;
        for _ in 0..10_000 {
            field.tick(&FrameInput::idle(dt, canvas), &corpus, &measure, &mut rng);
            if field.items().iter().any(|item| item.is_dying()) {
                retired_at = Some(wall);
                break;
            }
            let (_, delay) = RepaintController::plan(field.next_wake());
            let delay = delay.expect("field is never paused here").as_secs_f32();
            wall += delay;
            dt = delay.min(MAX_FRAME_DT);
        }

        let retired_at = retired_at.expect("no item was retired");
        assert!(!field.is_empty());
        assert!((4.9..=5.1).contains(&retired_at), "first retirement at {retired_at}s");
    }
}

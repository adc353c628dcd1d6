//! The haiku field — owns what is on screen and decides what happens next
//!
//! One [`HaikuField::tick`] per frame. The field keeps its own timers and
//! only advances them by the `dt` it is handed, so a test can drive it
//! second by second without a window.
//!
//! Per tick:
//!
//! 1. While a detail view is open, a click closes it and nothing else
//!    happens: no retirements, no spawns, timers paused.
//! 2. The die timer retires the oldest item that is not already dying.
//! 3. Fully faded-out items are dropped.
//! 4. The spawn timer adds a haiku if there is room and a free spot.
//! 5. A click on an item opens its detail view.
//! 6. Fades and hover ramps advance.

use crate::config::FieldConfig;
use crate::corpus::{Corpus, HaikuDetails};
use crate::item::HaikuItem;
use crate::placement::{place_item, TextMeasure};
use crate::style::HaikuStyle;
use crate::timer::Countdown;
use egui::{Color32, Pos2, Rect, Vec2};
use rand::Rng;

/// What the host saw this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Seconds since the previous frame.
    pub dt: f32,
    /// Drawable area.
    pub canvas: Vec2,
    /// Pointer position, if over the window.
    pub pointer: Option<Pos2>,
    /// A primary click happened this frame (at `pointer`).
    pub clicked: bool,
}

impl FrameInput {
    pub fn idle(dt: f32, canvas: Vec2) -> Self {
        Self {
            dt,
            canvas,
            pointer: None,
            clicked: false,
        }
    }
}

/// One text to paint.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawRequest {
    pub rect: Rect,
    pub text: String,
    pub style: HaikuStyle,
    /// Hover tint and fade alpha already applied.
    pub color: Color32,
}

/// Every haiku on screen plus the timers that add and retire them.
pub struct HaikuField {
    config: FieldConfig,
    /// Insertion order, oldest first. Never longer than `config.capacity`.
    items: Vec<HaikuItem>,
    /// Retires the oldest live item: first after `first_die_secs`, then every `die_secs`.
    die_timer: Countdown,
    /// Attempts one spawn every `spawn_secs`.
    spawn_timer: Countdown,
    /// Open detail view. While set, both timers are paused.
    detail: Option<HaikuDetails>,
    /// Id handed to the next placed item.
    next_id: u64,
    /// Set once the initial fill has run on a real canvas.
    populated: bool,
}

impl HaikuField {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            die_timer: Countdown::new(config.first_die_secs, config.die_secs),
            spawn_timer: Countdown::every(config.spawn_secs),
            config,
            items: Vec::new(),
            detail: None,
            next_id: 0,
            populated: false,
        }
    }

    /// Items in insertion order; index 0 is the oldest.
    pub fn items(&self) -> &[HaikuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The haiku shown in the detail view, if one is open.
    pub fn detail(&self) -> Option<&HaikuDetails> {
        self.detail.as_ref()
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    pub fn is_animating(&self) -> bool {
        self.items.iter().any(HaikuItem::is_animating)
    }

    /// Seconds until the field will change without input. Zero while
    /// something is animating; `None` while paused by the detail view.
    pub fn next_wake(&self) -> Option<f32> {
        if self.is_animating() {
            return Some(0.0);
        }
        if self.detail.is_some() {
            return None;
        }
        Some(self.die_timer.remaining().min(self.spawn_timer.remaining()))
    }

    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        input: &FrameInput,
        corpus: &Corpus,
        measure: &dyn TextMeasure,
        rng: &mut R,
    ) {
        if !self.populated && input.canvas.x > 0.0 && input.canvas.y > 0.0 {
            self.populate(input.canvas, corpus, measure, rng);
        }

        if self.detail.is_some() {
            if input.clicked {
                self.detail = None;
            }
            for item in &mut self.items {
                item.update(input.dt, false);
            }
            return;
        }

        if self.die_timer.tick(input.dt) {
            self.retire_oldest();
        }

        self.items.retain(|item| !item.is_dead());

        if self.spawn_timer.tick(input.dt) {
            self.try_spawn(input.canvas, corpus, measure, rng);
        }

        if input.clicked {
            if let Some(pos) = input.pointer {
                self.detail = self
                    .items
                    .iter()
                    .rev()
                    .find(|item| item.contains(pos))
                    .map(|item| item.details().clone());
            }
        }

        let pointer = if self.detail.is_some() { None } else { input.pointer };
        for item in &mut self.items {
            let hovered = pointer.map_or(false, |p| item.contains(p));
            item.update(input.dt, hovered);
        }
    }

    /// Fill the screen at startup.
    fn populate<R: Rng + ?Sized>(&mut self, canvas: Vec2, corpus: &Corpus, measure: &dyn TextMeasure, rng: &mut R) {
        self.populated = true;
        for _ in 0..self.config.initial_spawns {
            self.try_spawn(canvas, corpus, measure, rng);
        }
        tracing::info!(items = self.items.len(), "populated haiku field");
    }

    /// Start fading out the oldest item that is still alive.
    /// Returns its id, or `None` when every item is already dying.
    pub fn retire_oldest(&mut self) -> Option<u64> {
        let item = self.items.iter_mut().find(|item| !item.is_dying())?;
        item.die();
        Some(item.id())
    }

    /// Draw a haiku and try to place it. Returns whether an item was added.
    pub fn try_spawn<R: Rng + ?Sized>(
        &mut self,
        canvas: Vec2,
        corpus: &Corpus,
        measure: &dyn TextMeasure,
        rng: &mut R,
    ) -> bool {
        if self.items.len() >= self.config.capacity {
            return false;
        }
        let details = match corpus.pick_random_haiku(rng) {
            Ok(details) => details,
            Err(e) => {
                tracing::warn!("skipping spawn: {e}");
                return false;
            }
        };
        let placed = place_item(
            self.next_id,
            details,
            &self.items,
            canvas,
            measure,
            &self.config.placement,
            &self.config.fade,
            rng,
        );
        match placed {
            Some(item) => {
                self.next_id += 1;
                self.items.push(item);
                true
            }
            None => {
                tracing::debug!("no free spot for haiku, skipping this round");
                false
            }
        }
    }

    /// Texts to paint this frame, oldest first.
    pub fn draw_list(&self) -> Vec<DrawRequest> {
        self.items
            .iter()
            .filter(|item| item.alpha() > 0.0)
            .map(|item| DrawRequest {
                rect: item.region(),
                text: item.details().text.clone(),
                style: item.style(),
                color: item.color(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{LawEntry, DEFAULT_MAX_ATTEMPTS};
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const CANVAS: Vec2 = Vec2::new(1920.0, 1080.0);

    fn corpus() -> Corpus {
        let laws = vec![LawEntry {
            name: "A".to_string(),
            url: "u".to_string(),
            haikus: vec!["abc".to_string(), "defgh".to_string()],
        }];
        Corpus::new(laws, DEFAULT_MAX_ATTEMPTS).unwrap()
    }

    fn measure(text: &str, style: HaikuStyle) -> Vec2 {
        Vec2::new(text.chars().count() as f32 * 20.0 * style.scale(), 24.0 * style.scale())
    }

    fn quiet_config() -> FieldConfig {
        FieldConfig {
            initial_spawns: 0,
            ..FieldConfig::default()
        }
    }

    #[test]
    fn test_initial_population_bounded() {
        let mut field = HaikuField::new(FieldConfig {
            capacity: 3,
            initial_spawns: 9,
            ..FieldConfig::default()
        });
        let mut rng = StdRng::seed_from_u64(1);
        field.tick(&FrameInput::idle(0.0, CANVAS), &corpus(), &measure, &mut rng);
        assert!(field.len() <= 3);
        assert!(field.len() > 0);
    }

    #[test]
    fn test_no_population_without_canvas() {
        let mut field = HaikuField::new(FieldConfig::default());
        let mut rng = StdRng::seed_from_u64(1);
        field.tick(&FrameInput::idle(0.016, Vec2::ZERO), &corpus(), &measure, &mut rng);
        assert!(field.is_empty());
    }

    #[test]
    fn test_retire_oldest_skips_dying() {
        let mut field = HaikuField::new(quiet_config());
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..3 {
            assert!(field.try_spawn(CANVAS, &corpus(), &measure, &mut rng));
        }
        let ids: Vec<u64> = field.items().iter().map(HaikuItem::id).collect();
        assert_eq!(field.retire_oldest(), Some(ids[0]));
        assert_eq!(field.retire_oldest(), Some(ids[1]));
        assert_eq!(field.retire_oldest(), Some(ids[2]));
        assert_eq!(field.retire_oldest(), None);
    }

    #[test]
    fn test_spawn_skipped_when_pick_gives_up() {
        // StepRng(0, 0) always draws index 0, so every pick lands on the empty law.
        let laws = vec![
            LawEntry {
                name: "empty".to_string(),
                url: "u0".to_string(),
                haikus: Vec::new(),
            },
            LawEntry {
                name: "B".to_string(),
                url: "u1".to_string(),
                haikus: vec!["ok".to_string()],
            },
        ];
        let corpus = Corpus::new(laws, 1).unwrap();
        let mut field = HaikuField::new(FieldConfig {
            spawn_secs: 0.1,
            ..FieldConfig::default()
        });
        let mut rng = StepRng::new(0, 0);

        for _ in 0..50 {
            field.tick(&FrameInput::idle(0.05, CANVAS), &corpus, &measure, &mut rng);
        }
        assert!(field.is_empty());
        assert!(!field.try_spawn(CANVAS, &corpus, &measure, &mut rng));

        // The field is still usable once the draws succeed again.
        let mut rng = StdRng::seed_from_u64(11);
        let mut spawned = false;
        for _ in 0..100 {
            spawned |= field.try_spawn(CANVAS, &corpus, &measure, &mut rng);
        }
        assert!(spawned);
        assert_eq!(field.items()[0].details().law_name, "B");
    }

    #[test]
    fn test_spawn_respects_capacity() {
        let mut field = HaikuField::new(FieldConfig {
            capacity: 2,
            initial_spawns: 0,
            ..FieldConfig::default()
        });
        let mut rng = StdRng::seed_from_u64(3);
        let mut added = 0;
        for _ in 0..10 {
            if field.try_spawn(CANVAS, &corpus(), &measure, &mut rng) {
                added += 1;
            }
            assert!(field.len() <= 2);
        }
        assert_eq!(added, 2);
    }

    #[test]
    fn test_click_opens_and_closes_detail() {
        let mut field = HaikuField::new(quiet_config());
        let mut rng = StdRng::seed_from_u64(4);
        assert!(field.try_spawn(CANVAS, &corpus(), &measure, &mut rng));
        let target = field.items()[0].region().center();
        let text = field.items()[0].details().text.clone();

        let click = FrameInput {
            dt: 0.016,
            canvas: CANVAS,
            pointer: Some(target),
            clicked: true,
        };
        field.tick(&click, &corpus(), &measure, &mut rng);
        assert_eq!(field.detail().map(|d| d.text.clone()), Some(text));
        assert_eq!(field.next_wake(), Some(0.0));

        field.tick(&click, &corpus(), &measure, &mut rng);
        assert!(field.detail().is_none());
    }

    #[test]
    fn test_click_on_empty_space_does_nothing() {
        let mut field = HaikuField::new(quiet_config());
        let mut rng = StdRng::seed_from_u64(4);
        let click = FrameInput {
            dt: 0.016,
            canvas: CANVAS,
            pointer: Some(Pos2::new(5.0, 5.0)),
            clicked: true,
        };
        field.tick(&click, &corpus(), &measure, &mut rng);
        assert!(field.detail().is_none());
    }

    #[test]
    fn test_hover_ramps_only_under_pointer() {
        let mut field = HaikuField::new(quiet_config());
        let mut rng = StdRng::seed_from_u64(6);
        assert!(field.try_spawn(CANVAS, &corpus(), &measure, &mut rng));
        let inside = field.items()[0].region().center();
        let input = FrameInput {
            dt: 0.5,
            canvas: CANVAS,
            pointer: Some(inside),
            clicked: false,
        };
        field.tick(&input, &corpus(), &measure, &mut rng);
        assert_eq!(field.items()[0].hover(), 1.0);
        assert!(!field.items()[0].is_dying());

        let away = FrameInput {
            pointer: None,
            ..input
        };
        field.tick(&away, &corpus(), &measure, &mut rng);
        assert_eq!(field.items()[0].hover(), 0.0);
    }

    #[test]
    fn test_draw_list_skips_invisible() {
        let mut field = HaikuField::new(quiet_config());
        let mut rng = StdRng::seed_from_u64(7);
        assert!(field.try_spawn(CANVAS, &corpus(), &measure, &mut rng));
        assert!(field.draw_list().is_empty());
        field.tick(&FrameInput::idle(0.5, CANVAS), &corpus(), &measure, &mut rng);
        let list = field.draw_list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].rect, field.items()[0].region());
        assert_eq!(list[0].color.a(), 128);
    }

    #[test]
    fn test_next_wake_counts_down() {
        let mut field = HaikuField::new(quiet_config());
        let mut rng = StdRng::seed_from_u64(8);
        field.tick(&FrameInput::idle(1.0, CANVAS), &corpus(), &measure, &mut rng);
        // Die timer fires first at 5 s.
        assert_eq!(field.next_wake(), Some(4.0));
    }
}

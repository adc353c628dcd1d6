//! Random placement with a bounded number of tries
//!
//! A new haiku gets a random style and a random position that keeps it
//! fully on the canvas. A candidate is accepted when, grown by the margin
//! on every side, it touches no region already on screen. After the
//! configured number of misses the spawn is skipped for this round; the
//! next spawn draws a new haiku and tries again.

use crate::config::{FadeTimings, PlacementConfig};
use crate::corpus::HaikuDetails;
use crate::item::HaikuItem;
use crate::style::HaikuStyle;
use egui::{Pos2, Rect, Vec2};
use rand::Rng;

/// Measures how much room a text takes at a given style.
pub trait TextMeasure {
    fn measure(&self, text: &str, style: HaikuStyle) -> Vec2;
}

impl<F> TextMeasure for F
where
    F: Fn(&str, HaikuStyle) -> Vec2,
{
    fn measure(&self, text: &str, style: HaikuStyle) -> Vec2 {
        self(text, style)
    }
}

/// Whether `candidate`, grown by `margin`, overlaps any of `existing`.
pub fn collides(candidate: Rect, existing: &[Rect], margin: f32) -> bool {
    let grown = candidate.expand(margin);
    existing.iter().any(|other| grown.intersects(*other))
}

/// Try up to `cfg.attempts` uniformly random positions for a box of `size`.
pub fn find_free_region<R: Rng + ?Sized>(
    size: Vec2,
    existing: &[Rect],
    canvas: Vec2,
    cfg: &PlacementConfig,
    rng: &mut R,
) -> Option<Rect> {
    let max_x = canvas.x - size.x;
    let max_y = canvas.y - size.y;
    if max_x < 0.0 || max_y < 0.0 {
        return None;
    }

    for _ in 0..cfg.attempts {
        let pos = Pos2::new(rng.gen_range(0.0..=max_x), rng.gen_range(0.0..=max_y));
        let candidate = Rect::from_min_size(pos, size);
        if !collides(candidate, existing, cfg.margin) {
            return Some(candidate);
        }
    }
    None
}

/// Style, measure and place a haiku among `existing`. `None` means no free
/// spot was found this time.
#[allow(clippy::too_many_arguments)]
pub fn place_item<R: Rng + ?Sized>(
    id: u64,
    details: HaikuDetails,
    existing: &[HaikuItem],
    canvas: Vec2,
    measure: &dyn TextMeasure,
    cfg: &PlacementConfig,
    timings: &FadeTimings,
    rng: &mut R,
) -> Option<HaikuItem> {
    let style = HaikuStyle::random(rng);
    let size = measure.measure(&details.text, style);
    let regions: Vec<Rect> = existing.iter().map(HaikuItem::region).collect();

    let region = find_free_region(size, &regions, canvas, cfg, rng)?;
    tracing::debug!(text = %details.text, ?style, ?region, "placed haiku");
    Some(HaikuItem::new(id, details, style, region, timings))
}

//! A haiku on screen: where it sits, how big it is, how visible it is

use crate::config::FadeTimings;
use crate::corpus::HaikuDetails;
use crate::fade::{lerp, Transition};
use crate::style::HaikuStyle;
use egui::{Color32, Pos2, Rect};

/// Resting text color.
pub const TEXT_COLOR: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);

/// Color the text drifts toward while hovered.
pub const HOVER_COLOR: Color32 = Color32::from_rgb(0xa8, 0x3c, 0x32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadePhase {
    FadingIn,
    Steady,
    FadingOut,
}

#[derive(Debug, Clone)]
pub struct HaikuItem {
    /// Unique within one field, increasing with insertion order.
    id: u64,
    /// Text and source law, shown again in the detail view.
    details: HaikuDetails,
    style: HaikuStyle,
    /// Screen rectangle the text was measured into. Fixed for life.
    region: Rect,
    /// Opacity ramp: up while living, down once dying.
    fade: Transition,
    /// 0 = ink color, 1 = hover tint.
    hover: Transition,
    /// Cleared by [`HaikuItem::die`]; never set again.
    living: bool,
}

impl HaikuItem {
    pub fn new(id: u64, details: HaikuDetails, style: HaikuStyle, region: Rect, timings: &FadeTimings) -> Self {
        Self {
            id,
            details,
            style,
            region,
            fade: Transition::new(timings.fade_in, timings.fade_out),
            hover: Transition::new(timings.hover_in, timings.hover_out),
            living: true,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn details(&self) -> &HaikuDetails {
        &self.details
    }

    pub fn style(&self) -> HaikuStyle {
        self.style
    }

    pub fn region(&self) -> Rect {
        self.region
    }

    pub fn contains(&self, pos: Pos2) -> bool {
        self.region.contains(pos)
    }

    /// Advance fade and hover ramps by `dt` seconds.
    pub fn update(&mut self, dt: f32, hovered: bool) {
        self.fade.update(dt, self.living);
        self.hover.update(dt, hovered);
    }

    /// Start fading out. There is no way back.
    pub fn die(&mut self) {
        self.living = false;
    }

    pub fn is_dying(&self) -> bool {
        !self.living
    }

    /// Dying and fully faded out; ready to be dropped.
    pub fn is_dead(&self) -> bool {
        !self.living && self.fade.is_zero()
    }

    pub fn alpha(&self) -> f32 {
        self.fade.value()
    }

    pub fn hover(&self) -> f32 {
        self.hover.value()
    }

    pub fn phase(&self) -> FadePhase {
        if !self.living {
            FadePhase::FadingOut
        } else if self.fade.is_one() {
            FadePhase::Steady
        } else {
            FadePhase::FadingIn
        }
    }

    /// Still changing on screen: fading, or with a hover ramp in flight.
    pub fn is_animating(&self) -> bool {
        let hover = self.hover.value();
        self.phase() != FadePhase::Steady || (hover > 0.0 && hover < 1.0)
    }

    /// Text color with hover tint and fade alpha applied.
    pub fn color(&self) -> Color32 {
        let t = self.hover.eased();
        let mix = |a: u8, b: u8| lerp(a as f32, b as f32, t).round() as u8;
        Color32::from_rgba_unmultiplied(
            mix(TEXT_COLOR.r(), HOVER_COLOR.r()),
            mix(TEXT_COLOR.g(), HOVER_COLOR.g()),
            mix(TEXT_COLOR.b(), HOVER_COLOR.b()),
            (self.alpha() * 255.0).round() as u8,
        )
    }
}

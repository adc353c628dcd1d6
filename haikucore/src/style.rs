//! Visual styles — the four text sizes a haiku can be drawn at

use rand::Rng;

/// Base font size in points; styles scale from this.
pub const BASE_FONT_SIZE: f32 = 36.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HaikuStyle {
    Small,
    Medium,
    Large,
    Huge,
}

impl HaikuStyle {
    pub const ALL: [HaikuStyle; 4] = [
        HaikuStyle::Small,
        HaikuStyle::Medium,
        HaikuStyle::Large,
        HaikuStyle::Huge,
    ];

    /// Uniform choice among [`HaikuStyle::ALL`].
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn index(&self) -> usize {
        match self {
            HaikuStyle::Small => 0,
            HaikuStyle::Medium => 1,
            HaikuStyle::Large => 2,
            HaikuStyle::Huge => 3,
        }
    }

    pub fn scale(&self) -> f32 {
        match self {
            HaikuStyle::Small => 1.0,
            HaikuStyle::Medium => 1.2,
            HaikuStyle::Large => 1.5,
            HaikuStyle::Huge => 2.4,
        }
    }

    pub fn font_size(&self, base: f32) -> f32 {
        base * self.scale()
    }
}

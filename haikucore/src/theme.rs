//! slowHaiku theme — warm paper, charcoal ink
//!
//! Haiku are mostly Japanese, so a CJK-capable font is loaded from disk
//! (default `ipamp.ttf`). Without it egui's bundled fonts are used and CJK
//! glyphs will not render.

use crate::item::TEXT_COLOR;
use crate::style::HaikuStyle;
use egui::{Color32, FontData, FontDefinitions, FontFamily, FontId, Rounding, Stroke, Visuals};
use std::path::PathBuf;

pub struct HaikuColors;

impl HaikuColors {
    pub const PAPER: Color32 = Color32::from_rgb(240, 236, 229);
    pub const INK: Color32 = TEXT_COLOR;
    /// Veil drawn over the field behind the detail view.
    pub const VEIL: Color32 = Color32::from_rgba_premultiplied(24, 24, 22, 180);
}

/// Font and size configuration for the screensaver.
pub struct HaikuTheme {
    pub font_file: String,
    pub base_font_size: f32,
}

impl HaikuTheme {
    pub fn new(font_file: impl Into<String>, base_font_size: f32) -> Self {
        Self {
            font_file: font_file.into(),
            base_font_size,
        }
    }

    /// Places a font file is looked for, in order.
    fn font_search_paths(&self) -> Vec<PathBuf> {
        let name = self.font_file.as_str();
        let mut paths = vec![PathBuf::from(name), PathBuf::from("fonts").join(name)];

        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                paths.push(dir.join(name));
                paths.push(dir.join("fonts").join(name));
                // Cargo workspace: exe is in target/debug or target/release
                if let Some(workspace) = dir.parent().and_then(|p| p.parent()) {
                    paths.push(workspace.join("slowhaiku/fonts").join(name));
                }
            }
        }

        paths.push(PathBuf::from("/usr/share/fonts/opentype/ipafont-mincho").join(name));
        paths.push(PathBuf::from("/usr/share/fonts/truetype/ipafont").join(name));
        paths.push(PathBuf::from("/usr/share/fonts").join(name));
        paths
    }

    fn load_font(&self) -> Option<Vec<u8>> {
        self.font_search_paths()
            .into_iter()
            .find_map(|path| std::fs::read(&path).ok())
    }

    /// Install fonts and visuals on an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut fonts = FontDefinitions::default();
        match self.load_font() {
            Some(data) => {
                fonts.font_data.insert("haiku".to_owned(), FontData::from_owned(data));
                fonts
                    .families
                    .entry(FontFamily::Proportional)
                    .or_default()
                    .insert(0, "haiku".to_owned());
            }
            None => {
                tracing::warn!(font = %self.font_file, "font not found, CJK text will not render");
            }
        }
        ctx.set_fonts(fonts);

        let mut visuals = Visuals::light();
        visuals.panel_fill = HaikuColors::PAPER;
        visuals.window_fill = HaikuColors::PAPER;
        visuals.window_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::new(1.0, HaikuColors::INK);
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.override_text_color = Some(HaikuColors::INK);
        ctx.set_visuals(visuals);
    }

    pub fn font_id(&self, style: HaikuStyle) -> FontId {
        FontId::proportional(style.font_size(self.base_font_size))
    }

    /// Frame for the detail card: paper fill, thin ink outline.
    pub fn detail_frame() -> egui::Frame {
        egui::Frame::none()
            .fill(HaikuColors::PAPER)
            .stroke(Stroke::new(1.0, HaikuColors::INK))
            .inner_margin(egui::Margin::symmetric(48.0, 32.0))
    }
}

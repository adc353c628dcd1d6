//! slowHaiku — haiku about laws, drifting in and out on a quiet screen

use egui::{Align2, Color32, Context, Id, Key, LayerId, Order};
use haikucore::config::FieldConfig;
use haikucore::theme::HaikuColors;
use haikucore::{Corpus, FrameInput, HaikuDetails, HaikuField, HaikuStyle, HaikuTheme};
use rand::rngs::StdRng;
use std::time::Instant;

use crate::repaint::{RepaintController, MAX_FRAME_DT};

pub struct SlowHaikuApp {
    field: HaikuField,
    corpus: Corpus,
    theme: HaikuTheme,
    rng: StdRng,
    fullscreen: bool,
    last_update: Instant,
    repaint: RepaintController,
}

impl SlowHaikuApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        corpus: Corpus,
        theme: HaikuTheme,
        field: FieldConfig,
        fullscreen: bool,
        rng: StdRng,
    ) -> Self {
        Self {
            field: HaikuField::new(field),
            corpus,
            theme,
            rng,
            fullscreen,
            last_update: Instant::now(),
            repaint: RepaintController::new(),
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        let (escape, toggle_fullscreen) = ctx.input(|i| {
            (
                i.key_pressed(Key::Escape),
                i.key_pressed(Key::F11) || (i.modifiers.command && i.key_pressed(Key::F)),
            )
        });

        if escape {
            if self.field.detail().is_some() {
                self.field.close_detail();
            } else {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
        if toggle_fullscreen {
            self.fullscreen = !self.fullscreen;
            ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(self.fullscreen));
        }
    }

    fn frame_input(&mut self, ctx: &Context) -> FrameInput {
        let now = Instant::now();
        let dt = now.duration_since(self.last_update).as_secs_f32().min(MAX_FRAME_DT);
        self.last_update = now;

        let (pointer, clicked) = ctx.input(|i| {
            let pointer = i.pointer.interact_pos().or_else(|| i.pointer.hover_pos());
            (pointer, i.pointer.primary_clicked())
        });

        FrameInput {
            dt,
            canvas: ctx.screen_rect().size(),
            pointer,
            clicked,
        }
    }

    fn draw_field(&self, ctx: &Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(HaikuColors::PAPER))
            .show(ctx, |ui| {
                let painter = ui.painter();
                for req in self.field.draw_list() {
                    painter.text(
                        req.rect.min,
                        Align2::LEFT_TOP,
                        req.text,
                        self.theme.font_id(req.style),
                        req.color,
                    );
                }
            });
    }

    fn draw_detail(&self, ctx: &Context, detail: &HaikuDetails) {
        let screen = ctx.screen_rect();
        ctx.layer_painter(LayerId::new(Order::Middle, Id::new("haiku_veil")))
            .rect_filled(screen, 0.0, HaikuColors::VEIL);

        egui::Area::new(Id::new("haiku_detail"))
            .order(Order::Foreground)
            .anchor(Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .interactable(false)
            .show(ctx, |ui| {
                HaikuTheme::detail_frame().show(ui, |ui| {
                    ui.set_max_width(screen.width() * 0.8);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new(&detail.text)
                                .font(self.theme.font_id(HaikuStyle::Huge))
                                .color(HaikuColors::INK),
                        );
                        ui.add_space(24.0);
                        ui.label(
                            egui::RichText::new(&detail.law_name)
                                .font(self.theme.font_id(HaikuStyle::Small))
                                .color(HaikuColors::INK),
                        );
                        ui.add_space(4.0);
                        ui.label(
                            egui::RichText::new(&detail.law_url)
                                .size(14.0)
                                .color(Color32::from_gray(110)),
                        );
                        ui.add_space(16.0);
                        ui.label(egui::RichText::new("click anywhere to close").size(12.0));
                    });
                });
            });
    }
}

impl eframe::App for SlowHaikuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        let input = self.frame_input(ctx);
        let theme = &self.theme;
        let measure = |text: &str, style: HaikuStyle| {
            let font_id = theme.font_id(style);
            ctx.fonts(|f| f.layout_no_wrap(text.to_owned(), font_id, Color32::WHITE).size())
        };
        self.field.tick(&input, &self.corpus, &measure, &mut self.rng);

        self.draw_field(ctx);
        if let Some(detail) = self.field.detail() {
            self.draw_detail(ctx, detail);
        }

        self.repaint.end_frame(ctx, self.field.next_wake());
    }
}


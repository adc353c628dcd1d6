//! slowHaiku — fullscreen haiku screensaver for the Slow Computer

mod app;
mod repaint;

use anyhow::Context as _;
use eframe::NativeOptions;
use haikucore::config::resolve_asset;
use haikucore::corpus::load_laws_from_path;
use haikucore::{AppConfig, Corpus, HaikuTheme};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = AppConfig::load();

    let data_path = resolve_asset(&config.data_path);
    let laws = load_laws_from_path(&data_path)
        .with_context(|| format!("loading laws from {}", data_path.display()))?;
    let corpus = Corpus::new(laws, config.max_pick_attempts)
        .context("the law corpus has no haiku that can be shown")?;
    tracing::info!(laws = corpus.len(), haikus = corpus.eligible_count(), "corpus ready");

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([1280.0, 800.0])
        .with_title("slowHaiku")
        .with_fullscreen(config.fullscreen);

    let options = NativeOptions {
        viewport,
        ..Default::default()
    };

    let theme = HaikuTheme::new(config.font_file.clone(), config.base_font_size);
    let field = config.field.clone();
    let fullscreen = config.fullscreen;

    eframe::run_native(
        "slowHaiku",
        options,
        Box::new(move |cc| {
            theme.apply(&cc.egui_ctx);
            Box::new(app::SlowHaikuApp::new(cc, corpus, theme, field, fullscreen, rng))
        }),
    )
    .map_err(|e| anyhow::anyhow!("slowHaiku window failed: {e}"))
}

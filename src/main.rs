mod app;
mod chart;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::Context;
use app::CardioscopeApp;
use eframe::egui;

const DATA_PATH: &str = "data/heart.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // The dataset is loaded once at startup and shared read-only for the
    // whole session; a load failure aborts startup.
    let dataset = data::loader::load_csv(Path::new(DATA_PATH))
        .with_context(|| format!("failed to load {DATA_PATH}"))?;
    log::info!("Loaded {} patient records", dataset.len());

    let state = state::AppState::new(dataset)?;
    log::info!(
        "{} records after removing missing cholesterol readings",
        state.cleaned.len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Cardioscope – Heart Failure Explorer",
        options,
        Box::new(|_cc| Ok(Box::new(CardioscopeApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}

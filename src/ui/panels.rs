use eframe::egui::{self, Color32, RichText, Slider, Ui};

use crate::chart::{
    BOX_Y_OPTIONS, ChartKind, SCATTER_X_OPTIONS, SCATTER_Y_OPTIONS, STRIP_X_OPTIONS,
    STRIP_Y_OPTIONS,
};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – chart and age-window controls
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Explore");
    ui.separator();

    ui.strong("Chart type");
    ui.radio_value(&mut state.chart_kind, ChartKind::Box, "Box plot");
    ui.radio_value(&mut state.chart_kind, ChartKind::Heatmap, "Correlation heatmap");
    ui.radio_value(&mut state.chart_kind, ChartKind::Scatter, "Scatter plot");
    ui.radio_value(&mut state.chart_kind, ChartKind::Strip, "Strip plot");
    ui.separator();

    match state.chart_kind {
        ChartKind::Box => {
            field_combo(ui, "box_y", "Pick one for y-axis", &mut state.box_y, &BOX_Y_OPTIONS);
            ui.label("x-axis is fixed to Sex.");
        }
        ChartKind::Heatmap => {
            ui.label("Pairwise Pearson correlation over all numeric columns.");
        }
        ChartKind::Scatter => {
            field_combo(
                ui,
                "scatter_x",
                "Pick one for x-axis",
                &mut state.scatter_x,
                &SCATTER_X_OPTIONS,
            );
            field_combo(
                ui,
                "scatter_y",
                "Pick one for y-axis",
                &mut state.scatter_y,
                &SCATTER_Y_OPTIONS,
            );
        }
        ChartKind::Strip => {
            field_combo(
                ui,
                "strip_x",
                "Pick one for x-axis",
                &mut state.strip_x,
                &STRIP_X_OPTIONS,
            );
            field_combo(
                ui,
                "strip_y",
                "Pick one for y-axis",
                &mut state.strip_y,
                &STRIP_Y_OPTIONS,
            );
        }
    }

    ui.separator();
    ui.strong("Age window (stats tables)");
    let (lo, hi) = state.age_bounds;
    ui.add(Slider::new(&mut state.age_min, lo..=hi).text("min age"));
    // The max slider's floor follows the min selection so the window can
    // never invert.
    ui.add(Slider::new(&mut state.age_max, state.age_min..=hi).text("max age"));
    state.clamp_age_window();
}

/// One field selector, restricted to the declared option list.
fn field_combo(
    ui: &mut Ui,
    id: &str,
    label: &str,
    current: &mut &'static str,
    options: &[&'static str],
) {
    ui.label(label);
    egui::ComboBox::from_id_salt(id)
        .selected_text(*current)
        .show_ui(ui, |ui: &mut Ui| {
            for &option in options {
                if ui.selectable_label(*current == option, option).clicked() {
                    *current = option;
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} patients loaded, {} after cleaning",
            state.raw.len(),
            state.cleaned.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Load a replacement CSV with the same schema as the startup file.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open heart-failure data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_csv(&path) {
            Ok(dataset) => {
                log::info!("Loaded {} patient records from {}", dataset.len(), path.display());
                if let Err(e) = state.replace_dataset(dataset) {
                    log::error!("Failed to clean dataset: {e}");
                    state.status_message = Some(format!("Error: {e}"));
                }
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

use std::ops::RangeInclusive;

use eframe::egui::{self, Align2, Color32, FontId, RichText, ScrollArea, Sense, Ui};
use egui_extras::{Column, TableBuilder};
use egui_plot::{BoxElem, BoxPlot, BoxSpread, GridMark, Legend, Plot, PlotPoints, Points};

use crate::chart::{ChartEntry, ChartKind, ChartLookup, ChartSpec};
use crate::color::{self, OutcomeColors};
use crate::data::model::{Sex, category_labels};
use crate::data::stats::{self, StatsTable};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Central panel: stats tables, then the selected chart with its narrative
// ---------------------------------------------------------------------------

pub fn central_panel(ui: &mut Ui, state: &AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            stats_section(ui, state);
            ui.separator();
            chart_section(ui, state);
        });
}

// ---------------------------------------------------------------------------
// Descriptive-statistics tables
// ---------------------------------------------------------------------------

fn stats_section(ui: &mut Ui, state: &AppState) {
    ui.heading("Data Tables with Descriptive Statistics");

    show_describe(ui, state, "stats_events", "Patients with heart disease", true, None);
    show_describe(
        ui,
        state,
        "stats_no_events",
        "Patients without heart disease",
        false,
        None,
    );

    let window = (state.age_min, state.age_max);
    show_describe(
        ui,
        state,
        "stats_events_windowed",
        &format!(
            "With events, age between {} yrs and {} yrs",
            window.0, window.1
        ),
        true,
        Some(window),
    );
    show_describe(
        ui,
        state,
        "stats_no_events_windowed",
        &format!(
            "No events, age between {} yrs and {} yrs",
            window.0, window.1
        ),
        false,
        Some(window),
    );
}

fn show_describe(
    ui: &mut Ui,
    state: &AppState,
    id: &str,
    title: &str,
    outcome: bool,
    age_window: Option<(u32, u32)>,
) {
    egui::CollapsingHeader::new(RichText::new(title).strong())
        .id_salt(id)
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            match stats::describe_partition(&state.cleaned, outcome, age_window) {
                Ok(table) => stats_table(ui, id, &table),
                Err(e) => {
                    ui.colored_label(Color32::RED, e.to_string());
                }
            }
        });
}

fn stats_table(ui: &mut Ui, id: &str, table: &StatsTable) {
    ui.push_id(id, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(90.0))
            .columns(Column::remainder(), StatsTable::STAT_NAMES.len())
            .header(18.0, |mut header| {
                header.col(|_ui| {});
                for name in StatsTable::STAT_NAMES {
                    header.col(|ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|mut body| {
                for s in &table.rows {
                    body.row(16.0, |mut row| {
                        row.col(|ui| {
                            ui.label(&s.column);
                        });
                        row.col(|ui| {
                            ui.label(s.count.to_string());
                        });
                        for v in [s.mean, s.std, s.min, s.q25, s.median, s.q75, s.max] {
                            row.col(|ui| {
                                ui.label(fmt_stat(v));
                            });
                        }
                    });
                }
            });
    });
}

fn fmt_stat(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else {
        format!("{v:.2}")
    }
}

// ---------------------------------------------------------------------------
// Chart + narrative
// ---------------------------------------------------------------------------

fn chart_section(ui: &mut Ui, state: &AppState) {
    match state.current_lookup() {
        ChartLookup::NoNarrativeAvailable => {
            ui.label("No chart is defined for this combination.");
        }
        ChartLookup::Found(entry) => {
            ui.strong(entry.spec.title);
            render_chart(ui, state, entry);
            ui.add_space(4.0);
            ui.label(entry.narrative);
        }
    }
}

fn render_chart(ui: &mut Ui, state: &AppState, entry: &ChartEntry) {
    match entry.spec.kind {
        ChartKind::Box => box_chart(ui, state, &entry.spec),
        ChartKind::Heatmap => heatmap(ui, state),
        ChartKind::Scatter => points_chart(ui, state, &entry.spec, false),
        ChartKind::Strip => points_chart(ui, state, &entry.spec, true),
    }
}

// ---- Box family ----

fn box_chart(ui: &mut Ui, state: &AppState, spec: &ChartSpec) {
    let mut elems = Vec::new();
    for (i, label) in Sex::LABELS.iter().enumerate() {
        let mut values: Vec<f64> = state
            .cleaned
            .records
            .iter()
            .filter(|r| r.sex.index() == i)
            .filter_map(|r| r.numeric(spec.y))
            .collect();
        if values.is_empty() {
            continue;
        }
        values.sort_by(f64::total_cmp);
        let spread = BoxSpread::new(
            values[0],
            stats::quantile(&values, 0.25),
            stats::quantile(&values, 0.5),
            stats::quantile(&values, 0.75),
            values[values.len() - 1],
        );
        elems.push(BoxElem::new(i as f64, spread).name(*label));
    }

    let mut plot = Plot::new("box_chart")
        .height(380.0)
        .x_axis_label(spec.x_title)
        .y_axis_label(spec.y_title)
        .legend(Legend::default());
    if let Some(labels) = category_labels(spec.x) {
        plot = plot.x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            category_tick(labels, mark.value)
        });
    }
    plot.show(ui, |plot_ui| {
        plot_ui.box_plot(BoxPlot::new(elems));
    });
}

// ---- Heatmap ----

fn heatmap(ui: &mut Ui, state: &AppState) {
    let corr = stats::correlation_matrix(&state.cleaned);

    egui::Grid::new("corr_grid")
        .spacing([2.0, 2.0])
        .show(ui, |ui: &mut Ui| {
            ui.label("");
            for label in &corr.labels {
                ui.label(RichText::new(*label).small().strong());
            }
            ui.end_row();
            for (i, row) in corr.values.iter().enumerate() {
                ui.label(RichText::new(corr.labels[i]).small().strong());
                for &v in row {
                    corr_cell(ui, v);
                }
                ui.end_row();
            }
        });
}

/// One annotated correlation cell: diverging fill, value as text.
fn corr_cell(ui: &mut Ui, v: f64) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(72.0, 26.0), Sense::hover());
    ui.painter().rect_filled(rect, 2.0, color::diverging(v));

    let text = if v.is_nan() {
        "–".to_string()
    } else {
        format!("{v:.2}")
    };
    let text_color = if !v.is_nan() && v.abs() > 0.55 {
        Color32::WHITE
    } else {
        Color32::DARK_GRAY
    };
    ui.painter().text(
        rect.center(),
        Align2::CENTER_CENTER,
        text,
        FontId::proportional(11.0),
        text_color,
    );
}

// ---- Scatter and strip families ----

/// Scatter and strip share a renderer; the strip variant jitters the
/// categorical axes so overlapping category points spread out.
fn points_chart(ui: &mut Ui, state: &AppState, spec: &ChartSpec, jitter: bool) {
    let jitter_x = jitter && category_labels(spec.x).is_some();
    let jitter_y = jitter && category_labels(spec.y).is_some();

    let mut plot = Plot::new("points_chart")
        .height(380.0)
        .x_axis_label(spec.x_title)
        .y_axis_label(spec.y_title)
        .legend(Legend::default());
    if let Some(labels) = category_labels(spec.x) {
        plot = plot.x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            category_tick(labels, mark.value)
        });
    }
    if let Some(labels) = category_labels(spec.y) {
        plot = plot.y_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            category_tick(labels, mark.value)
        });
    }
    plot.show(ui, |plot_ui| {
        for outcome in [false, true] {
            let points: PlotPoints = state
                .cleaned
                .records
                .iter()
                .enumerate()
                .filter(|(_, r)| r.heart_disease == outcome)
                .filter_map(|(i, r)| {
                    let mut x = r.axis_value(spec.x)?;
                    let mut y = r.axis_value(spec.y)?;
                    if jitter_x {
                        x += jitter_offset(i);
                    }
                    if jitter_y {
                        y += jitter_offset(i.wrapping_add(0x9e37));
                    }
                    Some([x, y])
                })
                .collect();

            plot_ui.points(
                Points::new(points)
                    .name(OutcomeColors::label_for(outcome))
                    .color(state.outcome_colors.color_for(outcome))
                    .radius(2.0),
            );
        }
    });
}

/// Deterministic per-row jitter in [-0.3, 0.3]; the same row always lands in
/// the same spot, so redraws are stable.
fn jitter_offset(i: usize) -> f64 {
    let h = (i as u64)
        .wrapping_mul(0x9E37_79B9_7F4A_7C15)
        .rotate_left(31);
    ((h >> 11) as f64 / (1u64 << 53) as f64 - 0.5) * 0.6
}

// ---- Categorical axis labelling ----

/// Tick label for a categorical axis: the category name at integer
/// positions, nothing in between.
fn category_tick(labels: &[&str], value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    match labels.get(rounded as usize) {
        Some(label) => (*label).to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_ticks_only_at_integer_positions() {
        let labels = ["Up", "Flat", "Down"];
        assert_eq!(category_tick(&labels, 0.0), "Up");
        assert_eq!(category_tick(&labels, 2.0), "Down");
        assert_eq!(category_tick(&labels, 1.5), "");
        assert_eq!(category_tick(&labels, -1.0), "");
        assert_eq!(category_tick(&labels, 3.0), "");
    }

    #[test]
    fn jitter_is_deterministic_and_bounded() {
        for i in 0..1000 {
            let j = jitter_offset(i);
            assert_eq!(j, jitter_offset(i));
            assert!((-0.3..=0.3).contains(&j));
        }
        assert_ne!(jitter_offset(1), jitter_offset(2));
    }
}

use crate::chart::{self, ChartKind, ChartLookup};
use crate::color::OutcomeColors;
use crate::data::error::DataError;
use crate::data::filter::remove_zero_rows;
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Fallback slider bounds when a dataset has no rows.
const DEFAULT_AGE_BOUNDS: (u32, u32) = (28, 78);

/// The full UI state, independent of rendering.
///
/// The raw dataset is kept verbatim; `cleaned` is the working copy with
/// Cholesterol == 0 rows removed. Neither is mutated after ingest.
pub struct AppState {
    /// Dataset exactly as loaded.
    pub raw: Dataset,

    /// Working dataset: Cholesterol == 0 rows removed.
    pub cleaned: Dataset,

    /// Which chart family is shown.
    pub chart_kind: ChartKind,

    /// Box family: the y-axis field (x is fixed to Sex).
    pub box_y: &'static str,

    /// Scatter family selections.
    pub scatter_x: &'static str,
    pub scatter_y: &'static str,

    /// Strip family selections.
    pub strip_x: &'static str,
    pub strip_y: &'static str,

    /// Age window for the dynamic stats tables (inclusive).
    pub age_min: u32,
    pub age_max: u32,

    /// Observed Age extent of the cleaned dataset; slider bounds.
    pub age_bounds: (u32, u32),

    /// Series colours for outcome-coloured charts.
    pub outcome_colors: OutcomeColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the state from a freshly loaded dataset, running the one
    /// cleaning pass.
    pub fn new(raw: Dataset) -> Result<Self, DataError> {
        let cleaned = remove_zero_rows(&raw, "Cholesterol")?;
        let age_bounds = cleaned.age_extent().unwrap_or(DEFAULT_AGE_BOUNDS);

        Ok(AppState {
            raw,
            cleaned,
            chart_kind: ChartKind::Box,
            box_y: chart::BOX_Y_OPTIONS[0],
            scatter_x: chart::SCATTER_X_OPTIONS[0],
            scatter_y: chart::SCATTER_Y_OPTIONS[0],
            strip_x: chart::STRIP_X_OPTIONS[0],
            strip_y: chart::STRIP_Y_OPTIONS[0],
            age_min: age_bounds.0,
            age_max: age_bounds.1,
            age_bounds,
            outcome_colors: OutcomeColors::default(),
            status_message: None,
        })
    }

    /// Ingest a replacement dataset (File → Open…), resetting the age window
    /// to the new extent and keeping the chart selections.
    pub fn replace_dataset(&mut self, raw: Dataset) -> Result<(), DataError> {
        let cleaned = remove_zero_rows(&raw, "Cholesterol")?;
        self.age_bounds = cleaned.age_extent().unwrap_or(DEFAULT_AGE_BOUNDS);
        self.age_min = self.age_bounds.0;
        self.age_max = self.age_bounds.1;
        self.raw = raw;
        self.cleaned = cleaned;
        self.status_message = None;
        Ok(())
    }

    /// Keep the age window ordered and inside the slider bounds. The max
    /// slider's floor is the current min, so the window can never invert.
    pub fn clamp_age_window(&mut self) {
        self.age_min = self.age_min.clamp(self.age_bounds.0, self.age_bounds.1);
        self.age_max = self.age_max.clamp(self.age_min, self.age_bounds.1);
    }

    /// Resolve the current selections against the chart tables.
    pub fn current_lookup(&self) -> ChartLookup {
        match self.chart_kind {
            ChartKind::Box => chart::lookup_chart(ChartKind::Box, "Sex", self.box_y),
            ChartKind::Heatmap => chart::lookup_chart(ChartKind::Heatmap, "", ""),
            ChartKind::Scatter => {
                chart::lookup_chart(ChartKind::Scatter, self.scatter_x, self.scatter_y)
            }
            ChartKind::Strip => chart::lookup_chart(ChartKind::Strip, self.strip_x, self.strip_y),
        }
    }
}

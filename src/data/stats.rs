use super::error::DataError;
use super::filter;
use super::model::{Dataset, NUMERIC_COLUMNS};

// ---------------------------------------------------------------------------
// Descriptive statistics (pandas `describe()` semantics)
// ---------------------------------------------------------------------------

/// Eight-number summary of one numeric column.
///
/// An empty column yields `count == 0` with NaN everywhere else; a single
/// value yields a NaN standard deviation. Degenerate, never an error.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Per-column summaries in request order.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsTable {
    pub rows: Vec<ColumnSummary>,
}

impl StatsTable {
    /// Header labels matching the fields of [`ColumnSummary`], in order.
    pub const STAT_NAMES: [&'static str; 8] =
        ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];
}

/// Summarize the given numeric columns over all rows of `dataset`.
pub fn summarize(dataset: &Dataset, columns: &[&str]) -> Result<StatsTable, DataError> {
    let rows = columns
        .iter()
        .map(|col| {
            let values = dataset.numeric_column(col)?;
            Ok(summarize_column(col, &values))
        })
        .collect::<Result<Vec<_>, DataError>>()?;
    Ok(StatsTable { rows })
}

/// The outcome-partitioned summary behind the dashboard's stats tables.
///
/// Restricts to rows whose HeartDisease flag equals `outcome`, then (when an
/// age window is given) to rows with Age inside the inclusive window. The
/// outcome column is always excluded from the summarized set, and Age too in
/// windowed mode. The window is validated against the full dataset's
/// observed Age extent, not the partition's.
pub fn describe_partition(
    dataset: &Dataset,
    outcome: bool,
    age_window: Option<(u32, u32)>,
) -> Result<StatsTable, DataError> {
    let partition = filter::outcome_partition(dataset, outcome);

    let excluded: &[&str] = match age_window {
        Some((min, max)) => {
            filter::validate_age_window(dataset, min, max)?;
            &["Age", "HeartDisease"]
        }
        None => &["HeartDisease"],
    };
    let columns: Vec<&str> = NUMERIC_COLUMNS
        .iter()
        .copied()
        .filter(|c| !excluded.contains(c))
        .collect();

    let subset = match age_window {
        Some((min, max)) => filter::filter_by_age(&partition, min, max)?,
        None => partition,
    };
    summarize(&subset, &columns)
}

fn summarize_column(column: &str, values: &[f64]) -> ColumnSummary {
    let count = values.len();
    if count == 0 {
        return ColumnSummary {
            column: column.to_string(),
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            q25: f64::NAN,
            median: f64::NAN,
            q75: f64::NAN,
            max: f64::NAN,
        };
    }

    let mean = values.iter().sum::<f64>() / count as f64;
    // Sample standard deviation (n - 1), NaN for a single observation.
    let std = if count < 2 {
        f64::NAN
    } else {
        let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        (ss / (count - 1) as f64).sqrt()
    };

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    ColumnSummary {
        column: column.to_string(),
        count,
        mean,
        std,
        min: sorted[0],
        q25: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        q75: quantile(&sorted, 0.75),
        max: sorted[count - 1],
    }
}

/// Linearly interpolated quantile of an already sorted slice, `q` in [0, 1].
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let frac = pos - lo as f64;
        sorted[lo] + (sorted[hi] - sorted[lo]) * frac
    }
}

// ---------------------------------------------------------------------------
// Pearson correlation matrix (heatmap input)
// ---------------------------------------------------------------------------

/// Pairwise correlations over [`NUMERIC_COLUMNS`], row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrMatrix {
    pub labels: Vec<&'static str>,
    pub values: Vec<Vec<f64>>,
}

/// Full pairwise Pearson correlation matrix over the numeric columns.
/// Cells involving a constant column, or computed over fewer than two rows,
/// are NaN.
pub fn correlation_matrix(dataset: &Dataset) -> CorrMatrix {
    let columns: Vec<Vec<f64>> = NUMERIC_COLUMNS
        .iter()
        .map(|col| {
            dataset
                .records
                .iter()
                .filter_map(|r| r.numeric(col))
                .collect()
        })
        .collect();

    let n = columns.len();
    let mut values = vec![vec![f64::NAN; n]; n];
    for i in 0..n {
        for j in i..n {
            let c = pearson(&columns[i], &columns[j]);
            values[i][j] = c;
            values[j][i] = c;
        }
    }

    CorrMatrix {
        labels: NUMERIC_COLUMNS.to_vec(),
        values,
    }
}

fn pearson(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len();
    if n < 2 || n != b.len() {
        return f64::NAN;
    }
    let mean_a = a.iter().sum::<f64>() / n as f64;
    let mean_b = b.iter().sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (x, y) in a.iter().zip(b) {
        let dx = x - mean_a;
        let dy = y - mean_b;
        cov += dx * dy;
        var_a += dx * dx;
        var_b += dy * dy;
    }
    if var_a == 0.0 || var_b == 0.0 {
        return f64::NAN;
    }
    cov / (var_a.sqrt() * var_b.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::remove_zero_rows;
    use crate::data::model::{ChestPainType, Record, RestingEcg, Sex, StSlope};

    fn record(age: u32, cholesterol: f64, heart_disease: bool) -> Record {
        Record {
            age,
            sex: Sex::Male,
            chest_pain_type: ChestPainType::Asy,
            resting_bp: 130.0,
            cholesterol,
            fasting_bs: false,
            resting_ecg: RestingEcg::Normal,
            max_hr: 150.0,
            exercise_angina: false,
            oldpeak: 1.0,
            st_slope: StSlope::Flat,
            heart_disease,
        }
    }

    #[test]
    fn quantiles_interpolate_linearly() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&sorted, 0.25), 1.75);
        assert_eq!(quantile(&sorted, 0.5), 2.5);
        assert_eq!(quantile(&sorted, 0.75), 3.25);
        assert_eq!(quantile(&sorted, 0.0), 1.0);
        assert_eq!(quantile(&sorted, 1.0), 4.0);
        assert_eq!(quantile(&[7.0], 0.5), 7.0);
        assert!(quantile(&[], 0.5).is_nan());
    }

    #[test]
    fn summarize_matches_hand_computed_values() {
        let ds = Dataset::new(vec![
            record(40, 200.0, false),
            record(50, 220.0, false),
            record(60, 240.0, true),
        ]);
        let table = summarize(&ds, &["Cholesterol"]).expect("summarize");
        let s = &table.rows[0];
        assert_eq!(s.count, 3);
        assert_eq!(s.mean, 220.0);
        assert_eq!(s.std, 20.0);
        assert_eq!(s.min, 200.0);
        assert_eq!(s.median, 220.0);
        assert_eq!(s.max, 240.0);
    }

    #[test]
    fn summarize_unknown_column() {
        let ds = Dataset::new(vec![record(40, 200.0, false)]);
        assert_eq!(
            summarize(&ds, &["Age", "Nope"]),
            Err(DataError::UnknownColumn("Nope".to_string()))
        );
    }

    #[test]
    fn empty_row_set_is_degenerate_not_an_error() {
        let table = summarize(&Dataset::default(), &["Age", "Cholesterol"])
            .expect("empty summarize");
        assert_eq!(table.rows.len(), 2);
        for s in &table.rows {
            assert_eq!(s.count, 0);
            assert!(s.mean.is_nan());
            assert!(s.std.is_nan());
            assert!(s.median.is_nan());
        }
    }

    // The end-to-end fixture: clean then partition by outcome, one surviving
    // cholesterol value on each side.
    #[test]
    fn clean_then_partition_fixture() {
        let ds = Dataset::new(vec![
            record(54, 0.0, true),
            record(61, 240.0, true),
            record(47, 0.0, false),
            record(39, 180.0, false),
        ]);
        let cleaned = remove_zero_rows(&ds, "Cholesterol").expect("clean");

        let with_events = describe_partition(&cleaned, true, None).expect("events");
        let chol = with_events
            .rows
            .iter()
            .find(|s| s.column == "Cholesterol")
            .expect("cholesterol row");
        assert_eq!(chol.count, 1);
        assert_eq!(chol.mean, 240.0);
        assert!(chol.std.is_nan());

        let without = describe_partition(&cleaned, false, None).expect("no events");
        let chol = without
            .rows
            .iter()
            .find(|s| s.column == "Cholesterol")
            .expect("cholesterol row");
        assert_eq!(chol.count, 1);
        assert_eq!(chol.mean, 180.0);
    }

    #[test]
    fn describe_partition_drops_outcome_and_windowed_age() {
        let ds = Dataset::new(vec![record(40, 200.0, true), record(50, 220.0, true)]);

        let overall = describe_partition(&ds, true, None).expect("overall");
        let columns: Vec<&str> = overall.rows.iter().map(|s| s.column.as_str()).collect();
        assert!(columns.contains(&"Age"));
        assert!(!columns.contains(&"HeartDisease"));

        let windowed = describe_partition(&ds, true, Some((40, 50))).expect("windowed");
        let columns: Vec<&str> = windowed.rows.iter().map(|s| s.column.as_str()).collect();
        assert!(!columns.contains(&"Age"));
        assert!(!columns.contains(&"HeartDisease"));
    }

    #[test]
    fn describe_partition_rejects_invalid_window() {
        let ds = Dataset::new(vec![record(40, 200.0, true), record(50, 220.0, false)]);
        assert_eq!(
            describe_partition(&ds, true, Some((50, 40))),
            Err(DataError::InvalidRange { min: 50, max: 40 })
        );
        // Window validated against the full dataset's extent, so a partition
        // narrower than the window is fine.
        assert!(describe_partition(&ds, true, Some((40, 50))).is_ok());
    }

    #[test]
    fn empty_partition_is_degenerate() {
        let ds = Dataset::new(vec![record(40, 200.0, false)]);
        let table = describe_partition(&ds, true, None).expect("empty partition");
        assert!(table.rows.iter().all(|s| s.count == 0 && s.mean.is_nan()));
    }

    #[test]
    fn correlation_diagonal_and_symmetry() {
        let ds = Dataset::new(vec![
            record(40, 200.0, false),
            record(50, 220.0, false),
            record(60, 240.0, true),
        ]);
        let m = correlation_matrix(&ds);
        assert_eq!(m.labels.len(), m.values.len());

        let age = m.labels.iter().position(|&l| l == "Age").expect("Age");
        let chol = m
            .labels
            .iter()
            .position(|&l| l == "Cholesterol")
            .expect("Cholesterol");

        // Age and Cholesterol rise in lockstep in this fixture.
        assert!((m.values[age][chol] - 1.0).abs() < 1e-12);
        assert_eq!(m.values[age][chol], m.values[chol][age]);
        assert!((m.values[age][age] - 1.0).abs() < 1e-12);

        // RestingBP is constant, so its correlations are undefined.
        let bp = m
            .labels
            .iter()
            .position(|&l| l == "RestingBP")
            .expect("RestingBP");
        assert!(m.values[bp][age].is_nan());
    }

    #[test]
    fn correlation_bounds() {
        let ds = Dataset::new(vec![
            record(40, 240.0, true),
            record(50, 220.0, false),
            record(60, 210.0, true),
            record(70, 190.0, false),
        ]);
        let m = correlation_matrix(&ds);
        for row in &m.values {
            for &v in row {
                assert!(v.is_nan() || (-1.0 - 1e-12..=1.0 + 1e-12).contains(&v));
            }
        }
    }
}

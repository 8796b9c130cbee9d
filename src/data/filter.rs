use super::error::DataError;
use super::model::{Dataset, is_numeric_column};

// ---------------------------------------------------------------------------
// Row filters: each returns a new Dataset, the input is never mutated
// ---------------------------------------------------------------------------

/// Drop every row whose `column` value equals zero, keeping survivor order.
///
/// Used once at ingest on `Cholesterol`, where a literal 0 encodes a missing
/// measurement. Idempotent. Unknown columns are an explicit error rather
/// than a silent no-op.
pub fn remove_zero_rows(dataset: &Dataset, column: &str) -> Result<Dataset, DataError> {
    if !is_numeric_column(column) {
        return Err(DataError::UnknownColumn(column.to_string()));
    }
    let records = dataset
        .records
        .iter()
        .filter(|r| r.numeric(column) != Some(0.0))
        .cloned()
        .collect();
    Ok(Dataset::new(records))
}

/// Keep rows with `min <= Age <= max` (inclusive both ends).
///
/// An inverted window is rejected; the caller is expected to have validated
/// the bounds against the dataset's observed extent (see
/// [`validate_age_window`]).
pub fn filter_by_age(dataset: &Dataset, min: u32, max: u32) -> Result<Dataset, DataError> {
    if min > max {
        return Err(DataError::InvalidRange { min, max });
    }
    let records = dataset
        .records
        .iter()
        .filter(|r| (min..=max).contains(&r.age))
        .cloned()
        .collect();
    Ok(Dataset::new(records))
}

/// Reject a window that is inverted or falls outside the dataset's observed
/// Age extent. An empty dataset has no extent and accepts any ordered window.
pub fn validate_age_window(dataset: &Dataset, min: u32, max: u32) -> Result<(), DataError> {
    if min > max {
        return Err(DataError::InvalidRange { min, max });
    }
    if let Some((lo, hi)) = dataset.age_extent() {
        if min < lo || max > hi {
            return Err(DataError::InvalidRange { min, max });
        }
    }
    Ok(())
}

/// Rows whose HeartDisease flag equals `flag`.
pub fn outcome_partition(dataset: &Dataset, flag: bool) -> Dataset {
    let records = dataset
        .records
        .iter()
        .filter(|r| r.heart_disease == flag)
        .cloned()
        .collect();
    Dataset::new(records)
}

#[cfg(test)]
mod tests {
    use super::*;
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

    fn fixture() -> Dataset {
        Dataset::new(vec![
            record(54, 0.0, true),
            record(61, 240.0, true),
            record(47, 0.0, false),
            record(39, 180.0, false),
        ])
    }

    #[test]
    fn removes_zero_rows_and_keeps_order() {
        let cleaned = remove_zero_rows(&fixture(), "Cholesterol").expect("clean");
        assert!(cleaned.records.iter().all(|r| r.cholesterol != 0.0));
        let ages: Vec<u32> = cleaned.records.iter().map(|r| r.age).collect();
        assert_eq!(ages, [61, 39]);
    }

    #[test]
    fn remove_zero_rows_is_idempotent() {
        let once = remove_zero_rows(&fixture(), "Cholesterol").expect("clean");
        let twice = remove_zero_rows(&once, "Cholesterol").expect("clean again");
        assert_eq!(once.records, twice.records);
    }

    #[test]
    fn remove_zero_rows_does_not_mutate_input() {
        let ds = fixture();
        let _ = remove_zero_rows(&ds, "Cholesterol").expect("clean");
        assert_eq!(ds.len(), 4);
    }

    #[test]
    fn remove_zero_rows_unknown_column() {
        assert_eq!(
            remove_zero_rows(&fixture(), "Chol"),
            Err(DataError::UnknownColumn("Chol".to_string()))
        );
    }

    #[test]
    fn age_window_is_inclusive() {
        let ds = fixture();
        let windowed = filter_by_age(&ds, 39, 54).expect("filter");
        let ages: Vec<u32> = windowed.records.iter().map(|r| r.age).collect();
        assert_eq!(ages, [54, 47, 39]);
    }

    #[test]
    fn widening_the_window_never_removes_rows() {
        let ds = fixture();
        let narrow = filter_by_age(&ds, 45, 55).expect("narrow");
        let wide = filter_by_age(&ds, 39, 61).expect("wide");
        for r in &narrow.records {
            assert!(wide.records.contains(r));
        }
    }

    #[test]
    fn inverted_window_is_rejected() {
        let ds = fixture();
        assert_eq!(
            filter_by_age(&ds, 60, 40),
            Err(DataError::InvalidRange { min: 60, max: 40 })
        );
        assert_eq!(
            validate_age_window(&ds, 60, 40),
            Err(DataError::InvalidRange { min: 60, max: 40 })
        );
    }

    #[test]
    fn window_outside_observed_extent_is_rejected() {
        let ds = fixture(); // ages 39..=61
        assert!(validate_age_window(&ds, 39, 61).is_ok());
        assert_eq!(
            validate_age_window(&ds, 20, 61),
            Err(DataError::InvalidRange { min: 20, max: 61 })
        );
        assert_eq!(
            validate_age_window(&ds, 39, 90),
            Err(DataError::InvalidRange { min: 39, max: 90 })
        );
        // No extent to violate on an empty dataset.
        assert!(validate_age_window(&Dataset::default(), 20, 90).is_ok());
    }

    #[test]
    fn outcome_partition_splits_by_flag() {
        let ds = fixture();
        let with_events = outcome_partition(&ds, true);
        let without = outcome_partition(&ds, false);
        assert_eq!(with_events.len(), 2);
        assert_eq!(without.len(), 2);
        assert!(with_events.records.iter().all(|r| r.heart_disease));
        assert!(without.records.iter().all(|r| !r.heart_disease));
    }
}

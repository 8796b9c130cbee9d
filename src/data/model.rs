use std::fmt;

use super::error::DataError;

// ---------------------------------------------------------------------------
// Categorical columns
// ---------------------------------------------------------------------------

/// Patient sex as recorded in the source CSV (`M` / `F`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const LABELS: [&'static str; 2] = ["M", "F"];

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "M" => Some(Sex::Male),
            "F" => Some(Sex::Female),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Chest pain type: typical angina, atypical angina, non-anginal pain,
/// asymptomatic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChestPainType {
    Ta,
    Ata,
    Nap,
    Asy,
}

impl ChestPainType {
    pub const LABELS: [&'static str; 4] = ["TA", "ATA", "NAP", "ASY"];

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "TA" => Some(ChestPainType::Ta),
            "ATA" => Some(ChestPainType::Ata),
            "NAP" => Some(ChestPainType::Nap),
            "ASY" => Some(ChestPainType::Asy),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Resting electrocardiogram result category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestingEcg {
    Normal,
    St,
    Lvh,
}

impl RestingEcg {
    pub const LABELS: [&'static str; 3] = ["Normal", "ST", "LVH"];

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Normal" => Some(RestingEcg::Normal),
            "ST" => Some(RestingEcg::St),
            "LVH" => Some(RestingEcg::Lvh),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Slope of the peak exercise ST segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StSlope {
    Up,
    Flat,
    Down,
}

impl StSlope {
    pub const LABELS: [&'static str; 3] = ["Up", "Flat", "Down"];

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Up" => Some(StSlope::Up),
            "Flat" => Some(StSlope::Flat),
            "Down" => Some(StSlope::Down),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

macro_rules! impl_display_via_labels {
    ($($ty:ty),*) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(Self::LABELS[self.index()])
            }
        }
    )*};
}

impl_display_via_labels!(Sex, ChestPainType, RestingEcg, StSlope);

// ---------------------------------------------------------------------------
// Record – one patient observation (one CSV row)
// ---------------------------------------------------------------------------

/// A single patient observation.
///
/// `cholesterol == 0.0` denotes a missing measurement, never a true zero
/// reading; the ingest path removes those rows before any analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub age: u32,
    pub sex: Sex,
    pub chest_pain_type: ChestPainType,
    pub resting_bp: f64,
    pub cholesterol: f64,
    pub fasting_bs: bool,
    pub resting_ecg: RestingEcg,
    pub max_hr: f64,
    pub exercise_angina: bool,
    pub oldpeak: f64,
    pub st_slope: StSlope,
    pub heart_disease: bool,
}

/// The columns a pandas-style `describe()` / `corr()` would see: everything
/// numeric or 0/1-coded, in schema order.
pub const NUMERIC_COLUMNS: [&str; 7] = [
    "Age",
    "RestingBP",
    "Cholesterol",
    "FastingBS",
    "MaxHR",
    "Oldpeak",
    "HeartDisease",
];

/// Whether `column` names one of the numeric columns.
pub fn is_numeric_column(column: &str) -> bool {
    NUMERIC_COLUMNS.contains(&column)
}

/// Category labels for a categorical column, in axis order, or `None` for
/// numeric / unknown columns.
pub fn category_labels(column: &str) -> Option<&'static [&'static str]> {
    match column {
        "Sex" => Some(&Sex::LABELS),
        "ChestPainType" => Some(&ChestPainType::LABELS),
        "RestingECG" => Some(&RestingEcg::LABELS),
        "ST_Slope" => Some(&StSlope::LABELS),
        _ => None,
    }
}

impl Record {
    /// Numeric value of a column, with 0/1 flags widened to `f64`.
    /// `None` for categorical or unknown column names.
    pub fn numeric(&self, column: &str) -> Option<f64> {
        match column {
            "Age" => Some(f64::from(self.age)),
            "RestingBP" => Some(self.resting_bp),
            "Cholesterol" => Some(self.cholesterol),
            "FastingBS" => Some(f64::from(u8::from(self.fasting_bs))),
            "MaxHR" => Some(self.max_hr),
            "Oldpeak" => Some(self.oldpeak),
            "HeartDisease" => Some(f64::from(u8::from(self.heart_disease))),
            _ => None,
        }
    }

    /// Plot-axis coordinate of a column: the value itself for numeric
    /// columns, the category index for categorical ones.
    pub fn axis_value(&self, column: &str) -> Option<f64> {
        if let Some(v) = self.numeric(column) {
            return Some(v);
        }
        let idx = match column {
            "Sex" => self.sex.index(),
            "ChestPainType" => self.chest_pain_type.index(),
            "RestingECG" => self.resting_ecg.index(),
            "ST_Slope" => self.st_slope.index(),
            _ => return None,
        };
        Some(idx as f64)
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// An ordered, immutable collection of patient records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Dataset { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All values of a numeric column, in row order.
    pub fn numeric_column(&self, column: &str) -> Result<Vec<f64>, DataError> {
        if !is_numeric_column(column) {
            return Err(DataError::UnknownColumn(column.to_string()));
        }
        Ok(self
            .records
            .iter()
            .filter_map(|r| r.numeric(column))
            .collect())
    }

    /// Observed (min, max) of the Age column, `None` when empty.
    pub fn age_extent(&self) -> Option<(u32, u32)> {
        let first = self.records.first()?.age;
        let mut lo = first;
        let mut hi = first;
        for r in &self.records[1..] {
            lo = lo.min(r.age);
            hi = hi.max(r.age);
        }
        Some((lo, hi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn numeric_column_rejects_unknown_names() {
        let ds = Dataset::new(vec![record(40, 200.0, false)]);
        assert_eq!(
            ds.numeric_column("Colesterol"),
            Err(DataError::UnknownColumn("Colesterol".to_string()))
        );
        // Categorical columns are not numeric either.
        assert!(ds.numeric_column("Sex").is_err());
    }

    #[test]
    fn flags_widen_to_zero_one() {
        let r = record(40, 200.0, true);
        assert_eq!(r.numeric("HeartDisease"), Some(1.0));
        assert_eq!(r.numeric("FastingBS"), Some(0.0));
    }

    #[test]
    fn axis_value_uses_category_index() {
        let r = record(40, 200.0, false);
        assert_eq!(r.axis_value("ChestPainType"), Some(3.0)); // ASY
        assert_eq!(r.axis_value("Age"), Some(40.0));
        assert_eq!(r.axis_value("NotAColumn"), None);
    }

    #[test]
    fn age_extent_covers_all_rows() {
        let ds = Dataset::new(vec![
            record(55, 200.0, false),
            record(28, 180.0, true),
            record(78, 240.0, true),
        ]);
        assert_eq!(ds.age_extent(), Some((28, 78)));
        assert_eq!(Dataset::default().age_extent(), None);
    }
}

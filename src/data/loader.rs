use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use super::model::{ChestPainType, Dataset, Record, RestingEcg, Sex, StSlope};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the heart-failure dataset from a CSV file.
///
/// Expected layout: one header row with the exact column names
/// `Age,Sex,ChestPainType,RestingBP,Cholesterol,FastingBS,RestingECG,MaxHR,
/// ExerciseAngina,Oldpeak,ST_Slope,HeartDisease`, one row per patient.
/// Missing cholesterol measurements are encoded as literal `0`.
pub fn load_csv(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_csv(file).with_context(|| format!("loading {}", path.display()))
}

/// Parse the dataset from any reader (used directly by tests).
pub fn read_csv(input: impl Read) -> Result<Dataset> {
    let mut reader = csv::Reader::from_reader(input);
    let mut records = Vec::new();

    for (row_no, result) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;
        let record = raw
            .into_record()
            .with_context(|| format!("CSV row {row_no}"))?;
        records.push(record);
    }

    Ok(Dataset::new(records))
}

// ---------------------------------------------------------------------------
// Raw row – the CSV cells before categorical decoding
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Age")]
    age: u32,
    #[serde(rename = "Sex")]
    sex: String,
    #[serde(rename = "ChestPainType")]
    chest_pain_type: String,
    #[serde(rename = "RestingBP")]
    resting_bp: f64,
    #[serde(rename = "Cholesterol")]
    cholesterol: f64,
    #[serde(rename = "FastingBS")]
    fasting_bs: u8,
    #[serde(rename = "RestingECG")]
    resting_ecg: String,
    #[serde(rename = "MaxHR")]
    max_hr: f64,
    #[serde(rename = "ExerciseAngina")]
    exercise_angina: String,
    #[serde(rename = "Oldpeak")]
    oldpeak: f64,
    #[serde(rename = "ST_Slope")]
    st_slope: String,
    #[serde(rename = "HeartDisease")]
    heart_disease: u8,
}

impl RawRecord {
    fn into_record(self) -> Result<Record> {
        let sex = Sex::from_code(&self.sex)
            .with_context(|| format!("unrecognised Sex '{}'", self.sex))?;
        let chest_pain_type = ChestPainType::from_code(&self.chest_pain_type)
            .with_context(|| format!("unrecognised ChestPainType '{}'", self.chest_pain_type))?;
        let resting_ecg = RestingEcg::from_code(&self.resting_ecg)
            .with_context(|| format!("unrecognised RestingECG '{}'", self.resting_ecg))?;
        let st_slope = StSlope::from_code(&self.st_slope)
            .with_context(|| format!("unrecognised ST_Slope '{}'", self.st_slope))?;

        let exercise_angina = match self.exercise_angina.as_str() {
            "Y" => true,
            "N" => false,
            other => bail!("unrecognised ExerciseAngina '{other}'"),
        };

        Ok(Record {
            age: self.age,
            sex,
            chest_pain_type,
            resting_bp: self.resting_bp,
            cholesterol: self.cholesterol,
            fasting_bs: parse_flag(self.fasting_bs, "FastingBS")?,
            resting_ecg,
            max_hr: self.max_hr,
            exercise_angina,
            oldpeak: self.oldpeak,
            st_slope,
            heart_disease: parse_flag(self.heart_disease, "HeartDisease")?,
        })
    }
}

fn parse_flag(value: u8, column: &str) -> Result<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => bail!("{column} must be 0 or 1, got {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "Age,Sex,ChestPainType,RestingBP,Cholesterol,FastingBS,\
                          RestingECG,MaxHR,ExerciseAngina,Oldpeak,ST_Slope,HeartDisease";

    fn parse(rows: &str) -> Result<Dataset> {
        read_csv(Cursor::new(format!("{HEADER}\n{rows}\n")))
    }

    #[test]
    fn parses_a_valid_row() {
        let ds = parse("49,F,NAP,160,180,0,Normal,156,N,1,Flat,1").expect("parse");
        assert_eq!(ds.len(), 1);
        let r = &ds.records[0];
        assert_eq!(r.age, 49);
        assert_eq!(r.sex, Sex::Female);
        assert_eq!(r.chest_pain_type, ChestPainType::Nap);
        assert_eq!(r.cholesterol, 180.0);
        assert!(!r.fasting_bs);
        assert!(!r.exercise_angina);
        assert_eq!(r.st_slope, StSlope::Flat);
        assert!(r.heart_disease);
    }

    #[test]
    fn preserves_row_order() {
        let ds = parse(
            "40,M,ATA,140,289,0,Normal,172,N,0,Up,0\n\
             49,F,NAP,160,180,0,Normal,156,N,1,Flat,1\n\
             37,M,ATA,130,283,0,ST,98,N,0,Up,0",
        )
        .expect("parse");
        let ages: Vec<u32> = ds.records.iter().map(|r| r.age).collect();
        assert_eq!(ages, [40, 49, 37]);
    }

    #[test]
    fn rejects_unknown_categorical_code() {
        let err = parse("40,M,XXX,140,289,0,Normal,172,N,0,Up,0").unwrap_err();
        assert!(format!("{err:#}").contains("ChestPainType"));
    }

    #[test]
    fn rejects_non_binary_outcome() {
        let err = parse("40,M,ATA,140,289,0,Normal,172,N,0,Up,2").unwrap_err();
        assert!(format!("{err:#}").contains("HeartDisease"));
    }

    #[test]
    fn rejects_missing_columns() {
        let input = "Age,Sex\n40,M\n";
        assert!(read_csv(Cursor::new(input)).is_err());
    }
}

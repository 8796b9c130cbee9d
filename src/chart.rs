//! Chart selection: a static lookup from (chart kind, field selection) to a
//! render spec plus its narrative paragraph.
//!
//! The tables below are the whole behaviour: four chart families, each with
//! a fixed set of (x, y) combinations, every combination carrying its own
//! title, axis titles, and commentary. `lookup_chart` is total; anything
//! outside the tables yields [`ChartLookup::NoNarrativeAvailable`].

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Box,
    Heatmap,
    Scatter,
    Strip,
}

/// Everything the renderer needs: fields, colour dimension, titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub x: &'static str,
    pub y: &'static str,
    /// Colour dimension; `None` for the box family and the heatmap.
    pub color: Option<&'static str>,
    /// Colour-scheme identifier carried through to the renderer.
    pub color_scheme: Option<&'static str>,
    pub title: &'static str,
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub color_title: Option<&'static str>,
}

/// One table entry: the spec and its commentary.
#[derive(Debug, PartialEq, Eq)]
pub struct ChartEntry {
    pub spec: ChartSpec,
    pub narrative: &'static str,
}

/// Result of a lookup. Total over all inputs: off-table combinations get a
/// well-defined placeholder instead of a panic or a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartLookup {
    Found(&'static ChartEntry),
    NoNarrativeAvailable,
}

// ---------------------------------------------------------------------------
// Option lists – what the side panel offers, and the table key space
// ---------------------------------------------------------------------------

pub const BOX_Y_OPTIONS: [&str; 5] = ["Age", "RestingBP", "Cholesterol", "MaxHR", "Oldpeak"];
pub const SCATTER_X_OPTIONS: [&str; 2] = ["Age", "ChestPainType"];
pub const SCATTER_Y_OPTIONS: [&str; 2] = ["Cholesterol", "RestingECG"];
pub const STRIP_X_OPTIONS: [&str; 3] = ["ChestPainType", "Sex", "ST_Slope"];
pub const STRIP_Y_OPTIONS: [&str; 5] = ["Cholesterol", "RestingECG", "MaxHR", "Oldpeak", "Age"];

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

/// Resolve a selection to its chart spec and narrative.
///
/// The box family keys on `y` alone (`x` is fixed to `Sex`); the heatmap
/// ignores both fields.
pub fn lookup_chart(kind: ChartKind, x: &str, y: &str) -> ChartLookup {
    let table: &'static [ChartEntry] = match kind {
        ChartKind::Box => &BOX_TABLE,
        ChartKind::Heatmap => return ChartLookup::Found(&HEATMAP_ENTRY),
        ChartKind::Scatter => &SCATTER_TABLE,
        ChartKind::Strip => &STRIP_TABLE,
    };
    match table.iter().find(|e| e.spec.x == x && e.spec.y == y) {
        Some(entry) => ChartLookup::Found(entry),
        None => ChartLookup::NoNarrativeAvailable,
    }
}

// ---------------------------------------------------------------------------
// Table constructors
// ---------------------------------------------------------------------------

const COLOR_TITLE: &str = "Heart Disease (0 is no and 1 is yes)";

const fn colored(
    kind: ChartKind,
    scheme: &'static str,
    x: &'static str,
    y: &'static str,
    title: &'static str,
    x_title: &'static str,
    y_title: &'static str,
    narrative: &'static str,
) -> ChartEntry {
    ChartEntry {
        spec: ChartSpec {
            kind,
            x,
            y,
            color: Some("HeartDisease"),
            color_scheme: Some(scheme),
            title,
            x_title,
            y_title,
            color_title: Some(COLOR_TITLE),
        },
        narrative,
    }
}

const fn boxed(y: &'static str, title: &'static str) -> ChartEntry {
    ChartEntry {
        spec: ChartSpec {
            kind: ChartKind::Box,
            x: "Sex",
            y,
            color: None,
            color_scheme: None,
            title,
            x_title: "Sex",
            y_title: y,
            color_title: None,
        },
        narrative: BOX_NARRATIVE,
    }
}

// ---------------------------------------------------------------------------
// Box family – y against Sex, one shared commentary
// ---------------------------------------------------------------------------

const BOX_NARRATIVE: &str = "Our graph shows data gathered by hospital facilities in diffrent regions. Our graph plots all of the usable data to show corralation between Age, Sex, Cholesterol, and RestingBP.We wanted to show the corralation because we want to be able to use this data to predicte heart attacks.Anyone viewing the chart can see that people with high cholesterol and of older age are way more likly to have heart failure then a younger person with significantly lower/lesser amounts of cholesterol. You can see by average where one lies for a liklyhood of heartfaluire based on their on all these factors";

static BOX_TABLE: [ChartEntry; 5] = [
    boxed("Age", "Age by Sex"),
    boxed("RestingBP", "RestingBP by Sex"),
    boxed("Cholesterol", "Cholesterol by Sex"),
    boxed("MaxHR", "MaxHR by Sex"),
    boxed("Oldpeak", "Oldpeak by Sex"),
];

// ---------------------------------------------------------------------------
// Heatmap – full pairwise Pearson correlation matrix
// ---------------------------------------------------------------------------

static HEATMAP_ENTRY: ChartEntry = ChartEntry {
    spec: ChartSpec {
        kind: ChartKind::Heatmap,
        x: "",
        y: "",
        color: None,
        color_scheme: None,
        title: "Heatmap Comparison",
        x_title: "",
        y_title: "",
        color_title: None,
    },
    narrative: "The heatmap tells us the relationship between each numerical variable to each other numerical variable. When a value on the heatmap is between 0 to 1, that shows direct proportionality, whereas a value between -1 to 0 shows inverse proportionality. A value of 0 shows a complete lack of a relationship between the 2 variables, while a value of 1 shows a perfectly proportional relationship between the variables. The heatmap seems to suggest a relatively strong correlation between heart disease to maximum heart rate and to old peak (the relation between exercise and ST depressions.) Specifically, the heatmap suggests that patients with heart disease have a lower maximum heart rate and a higher old peak. There also appears to be a negative correlation between age and maximum heart rate, while there is a posiive correlation between age and heart disease, suggesting that older patients may have a lower maximum heart rate, but that older patients also have a higher chance of heart disease. Lastly, there is a positive correlation between heart disease and fasting blood sugar, as well as heart disease and cholesterol. Therefore, this heatmap suggests that higher fasting blood sugar increases risks of heart disease, as does higher levels of cholesterol.",
};

// ---------------------------------------------------------------------------
// Scatter family – 4 combinations, ggplot2 scheme
// ---------------------------------------------------------------------------

static SCATTER_TABLE: [ChartEntry; 4] = [
    colored(
        ChartKind::Scatter,
        "ggplot2",
        "Age",
        "Cholesterol",
        "Age Vs. Cholesterol",
        "Age",
        "Cholesterol",
        "This scatter plot above illustrates the relationship between a patient's age, cholesterol levels, and whether or not they have heart disease. Patients over the age of 50  often having a higher cholesterol level, being put at risk for developing or having heart disease compared to those who are younger and share similar cholesterol levels. Besides the few outliers, the plot suggests that higher risks of heart disease are connected to cholesterol levels, which tend to rise as we age, seen with the increase of confirmed cases among the older patients. Overall, older patients are more at risk of developing heart diseases than their younger counterparts.",
    ),
    colored(
        ChartKind::Scatter,
        "ggplot2",
        "Age",
        "RestingECG",
        "Age and RestingECG",
        "Age",
        "RestingECG",
        "This scatter plot above illustrates the relationship between a patient's age, RestingECG, and whether or not they have heart disease. Patients with LVH and Normal resting ECGs are less likely to have heart disease, whereas those with ST resting EGC's have a higher chance of developing or having a heart disease. However, age also seems to correlate with the differing ECGs, with patients over their 50s being more susceptible to heart disease and those under 50 having less of a risk. Overall those with LVH and normal resting EGC's are less prone to having heart disease, whereas those with ST have a higher risk. ",
    ),
    colored(
        ChartKind::Scatter,
        "ggplot2",
        "ChestPainType",
        "Cholesterol",
        "Chest Pain Type in correlation to Cholesterol",
        "ChestPainType",
        "Cholesterol",
        "This scatter plot above illustrates the relationship between a patient's chest pain type, cholesterol levels, and whether or not they have heart disease. Patients who experience chest pains such as ATA, NAP, and TA are less likely to have some form of heart disease, the plot suggesting that those who do experience it, to be at lower risk. At the same time, those who experience ASY chest pains often have higher cholesterol and face having heart disease or being at risk. Overall those who experience ASY are more likely to have heart disease than those who get chest pains such as ATA, NAP, and TA.",
    ),
    colored(
        ChartKind::Scatter,
        "ggplot2",
        "ChestPainType",
        "RestingECG",
        "Chest Pain Type and RestingECG",
        "ChestPainType",
        "RestingECG",
        "This scatter plot above illustrates the relationship between a patient's Chest Pain Type, RestingECG, and whether or not they have heart disease. Patients who experience chest pains such as ATA, NAP, and TA are less likely to have some form of heart disease, the plot suggesting that those who do experience it are at lower risk. Those with an LVH (resting ECG) and an ASY Chest Pain Type are at a higher risk than those with an average ECG or other chest pain type. Overall those who have LVH and ASY Chest Pain types are more at risk for developing a Heart Disease.",
    ),
];

// ---------------------------------------------------------------------------
// Strip family – 15 combinations, seaborn scheme
// ---------------------------------------------------------------------------

static STRIP_TABLE: [ChartEntry; 15] = [
    colored(
        ChartKind::Strip,
        "seaborn",
        "ChestPainType",
        "Cholesterol",
        "Chest Pain Type, Cholesterol, and Heart Disease",
        "Chest Pain Type",
        "Cholesterol",
        "The strip plot tells us the relationship between a patient's chest pain type, their cholesterol levels, and whether or not they have heart disease. Patients who experience ATA, TA, and NAP type chest pain seem to more frequently not have heart disease, suggesting that people who experience ATA, TA, and NAP type chest pain are at a lower risk of developing heart disease. Patients who experience ASY type chest pain seem to more frequently have heart disease, suggesting that people who experience ASY type chest pain are at a higher risk of developing heart disease. Except for a few outliers, the different types of chest pain that patients experience does not seem to be connected to increased or decreased cholesterol levels, suggesting that chest pain type and cholesterol levels do not have much of a connection. Patients who have heart disease appear to on average have slightly higher cholesterol levels than patients who do not have heart disease, implying that people who have higher cholesterol levels are at a slightly higher risk of developing heart disease than people who have lower cholesterol levels.",
    ),
    colored(
        ChartKind::Strip,
        "seaborn",
        "ChestPainType",
        "RestingECG",
        "Chest Pain Type, Resting Electrocardiogram, and Heart Disease",
        "Chest Pain Type",
        "Resting Electrocardiogram",
        "The strip plot tells us the relationship between a patient's chest pain type, their resting electrocardiogram result, and whether or not they have heart disease. Patients who experience ATA, TA, and NAP type chest pain seem to more frequently not have heart disease, while patients who experience ASY type chest pain seem to more frequently have heart disease, suggesting that ASY type chest pain is a risk factor for heart disease. Within each resting ECG category the same pattern holds, and patients with an ST resting ECG appear to have heart disease somewhat more often than patients with a Normal resting ECG. Overall, ASY type chest pain appears to be the stronger signal, with an abnormal resting ECG adding to the risk.",
    ),
    colored(
        ChartKind::Strip,
        "seaborn",
        "ChestPainType",
        "MaxHR",
        "Chest Pain Type, Maximum Heart Rate, and Heart Disease",
        "Chest Pain Type",
        "Maximum Heart Rate",
        "The strip plot tells us the relationship between a patient's chest pain type, their maximum heart rate, and whether or not they have heart disease. Patients who experience ATA, TA, and NAP type chest pain seem to more frequently not have heart disease, suggesting that people who experience ATA, TA, and NAP type chest pain are at a lower risk of developing heart disease. Patients who experience ASY type chest pain seem to more frequently have heart disease, suggesting that people who experience ASY type chest pain are at a higher risk of developing heart disease. Patients with ATA, TA, and NAP type chest pain also appear to on average have a higher maximum heart rate than patients experiencing ASY type chest pain. Additionally, patients with heart disease appear to typically have a lower maximum heart rate than patients without heart disease, suggesting that people with a lower maximum heart rate are more at risk of developing heart disease. Overall, both ASY type chest pain and a lower maximum heart rate appear to be risk factors for heart disease.",
    ),
    colored(
        ChartKind::Strip,
        "seaborn",
        "ChestPainType",
        "Oldpeak",
        "Chest Pain Type, Oldpeak, and Heart Disease",
        "Chest Pain Type",
        "Oldpeak",
        "The strip plot tells us the relationship between a patient's chest pain type, their oldpeak, and whether or not they have heart disease. Patients who experience ATA, TA, and NAP type chest pain seem to more frequently not have heart disease, suggesting that people who experience ATA, TA, and NAP type chest pain are at a lower risk of developing heart disease. Patients who experience ASY type chest pain seem to more frequently have heart disease, suggesting that people who experience ASY type chest pain are at a higher risk of developing heart disease. Patients with ATA, TA, and NAP type chest pain typically appear to have an oldpeak ranging from 0 to 3, while patients experiencing ASY Type Chest pain to on average have an oldpeak ranging from -2 to 6. Additionally, patients with heart disease often appear to have much higher or lower oldpeaks than patients without heart disease, suggesting that people with an abnormally high or low oldpeak are more likely to develop heart disease. Overall, both ASY type chest pain and an abnormally high or low oldpeak appear to be risk factors for heart disease.",
    ),
    colored(
        ChartKind::Strip,
        "seaborn",
        "ChestPainType",
        "Age",
        "Chest Pain Type, Age, and Heart Disease",
        "Chest Pain Type",
        "Age",
        "The strip plot tells us the relationship between a patient's chest pain type, their age whether or not they have heart disease. Patients who experience ATA, TA, and NAP type chest pain seem to more frequently not have heart disease, suggesting that people who experience ATA, TA, and NAP type chest pain are at a lower risk of developing heart disease. Patients who experience ASY type chest pain seem to more frequently have heart disease, suggesting that people who experience ASY type chest pain are at a higher risk of developing heart disease. Generally, the age of patients does not appear to impact the type of chest pain they experience. However, a significant majority of older patients have heart disease, while only some of the younger patients have heart disease, suggesting that the older someone is, the more likely they are to develop heart disease. Overall, both ASY type chest pain and old age appear to be risk factors for heart disease.",
    ),
    colored(
        ChartKind::Strip,
        "seaborn",
        "Sex",
        "Cholesterol",
        "Sex, Cholesterol, and Heart Disease",
        "Sex",
        "Cholesterol",
        "The strip plot tells us the relationship between a patient's sex, their cholesterol levels, and whether or not they have heart disease. More than half of the male patients appear to have heart disease, while only a small amount of the female patients have heart disease, suggesting that males are more likely to develop heart disease. Additionally, patients with heart disease appear to on average have slightly higher cholesterol levels than people without heart disease, suggesting that people with higher cholesterol levels are at risk of developing heart disease. Overall, higher cholesterol levels appear to be a risk factor for heart disease, and males also need to be more wary about developing heart disease than females.",
    ),
    colored(
        ChartKind::Strip,
        "seaborn",
        "Sex",
        "RestingECG",
        "Sex, Resting Electrocardiogram, and Heart Disease",
        "Sex",
        "Resting Electrocardiogram",
        "The strip plot tells us the relationship between a patient's sex, their resting electrocardiogram result, and whether or not they have heart disease. More than half of the male patients appear to have heart disease, while only a small amount of the female patients have heart disease, suggesting that males are more likely to develop heart disease. Within each resting ECG category the male patients are still affected more often, and patients with an ST or LVH resting ECG appear to have heart disease somewhat more frequently than patients with a Normal result. Overall, males need to be more wary about developing heart disease than females, and an abnormal resting ECG appears to add to the risk.",
    ),
    colored(
        ChartKind::Strip,
        "seaborn",
        "Sex",
        "MaxHR",
        "Sex, Maximum Heart Rate, and Heart Disease",
        "Sex",
        "MaxHR",
        "The strip plot tells us the relationship between a patient's sex, their maximum heart rate, and whether or not they have heart disease. More than half of the male patients appear to have heart disease, while only a small amount of the female patients have heart disease, suggesting that males are more likely to develop heart disease. Additionally, patients with heart disease on average appear to have a lower maximum heart rate than patients without heart disease, suggesting that people with low maximum heart rates are more at risk of developing heart disease. Overall, a low maximum heart rate appears to be a risk factor for heart disease, and males also need to be more wary about developing heart disease than females.",
    ),
    colored(
        ChartKind::Strip,
        "seaborn",
        "Sex",
        "Oldpeak",
        "Sex, Oldpeak, and Heart Disease",
        "Sex",
        "Oldpeak",
        "The strip plot tells us the relationship between a patient's sex, their oldpeak, and whether or not they have heart disease. More than half of the male patients appear to have heart disease, while only a small amount of the female patients have heart disease, suggesting that males are more likely to develop heart disease. Male patients also appear to typically have larger or smaller oldpeaks than female patients, with the oldpeaks of male patients ranging from 6 to -2, while the oldpeaks of female patients only really range from 4 to 0. Patients with heart disease often appear to have much higher or lower oldpeaks than patients without heart disease, suggesting that people with an abnormally high or low oldpeak are more likely to develop heart disease. Overall, an abnormally large or small oldpeak appears to be a risk factor for heart disease, and males need to be more wary of developing heart disease than females.",
    ),
    colored(
        ChartKind::Strip,
        "seaborn",
        "Sex",
        "Age",
        "Sex, Age, and Heart Disease",
        "Sex",
        "Age",
        "The strip plot tells us the relationship between a patient's sex, their age, and whether or not they have heart disease. More than half of the male patients appear to have heart disease, while only a small amount of the female patients have heart disease, suggesting that males are more likely to develop heart disease. Additionally, patients with heart disease on average are older than people without heart disease, suggesting that older people are more at risk of developing heart disease. Overall, older age is a risk factor for heart disease, and males need to be more wary about developing heart disease than females.",
    ),
    colored(
        ChartKind::Strip,
        "seaborn",
        "ST_Slope",
        "Cholesterol",
        "ST Slope, Cholesterol, and Heart Disease",
        "ST Slope",
        "Cholesterol",
        "The strip plot tells us the relationship between a patient's ST slope, their cholesterol levels, and whether or not they have heart disease. Patients with an Up ST slope seem to more frequently not have heart disease, while patients with a Flat or Down ST slope seem to more frequently have heart disease, suggesting that a Flat or Down ST slope is a risk factor for heart disease. Cholesterol levels do not appear to differ much between the three slope categories, though patients with heart disease appear to on average have slightly higher cholesterol levels than patients without heart disease. Overall, a Flat or Down ST slope appears to be the stronger risk factor, with higher cholesterol levels adding to the risk.",
    ),
    colored(
        ChartKind::Strip,
        "seaborn",
        "ST_Slope",
        "RestingECG",
        "ST Slope, Resting Electrocardiogram, and Heart Disease",
        "ST Slope",
        "Resting Electrocardiogram",
        "The strip plot tells us the relationship between a patient's ST slope, their resting electrocardiogram result, and whether or not they have heart disease. Patients with an Up ST slope seem to more frequently not have heart disease, while patients with a Flat or Down ST slope seem to more frequently have heart disease, suggesting that a Flat or Down ST slope is a risk factor for heart disease. The pattern holds within each resting ECG category, with patients combining a Flat or Down slope and an ST or LVH resting ECG appearing to be affected most often. Overall, a Flat or Down ST slope appears to be a risk factor for heart disease, especially alongside an abnormal resting ECG.",
    ),
    colored(
        ChartKind::Strip,
        "seaborn",
        "ST_Slope",
        "MaxHR",
        "ST Slope, Maximum Heart Rate, and Heart Disease",
        "ST Slope",
        "MaxHR",
        "The strip plot tells us the relationship between a patient's ST slope, their maximum heart rate, and whether or not they have heart disease. Patients with an Up ST slope seem to more frequently not have heart disease, while patients with a Flat or Down ST slope seem to more frequently have heart disease, suggesting that a Flat or Down ST slope is a risk factor for heart disease. Patients with an Up ST slope also appear to on average have a higher maximum heart rate than patients with a Flat or Down slope, and patients with heart disease typically have a lower maximum heart rate than patients without heart disease. Overall, both a Flat or Down ST slope and a lower maximum heart rate appear to be risk factors for heart disease.",
    ),
    colored(
        ChartKind::Strip,
        "seaborn",
        "ST_Slope",
        "Oldpeak",
        "ST Slope, Oldpeak, and Heart Disease",
        "ST Slope",
        "Oldpeak",
        "The strip plot tells us the relationship between a patient's ST slope, their oldpeak, and whether or not they have heart disease. Patients with an Up ST slope seem to more frequently not have heart disease and typically have an oldpeak close to 0, while patients with a Flat or Down ST slope seem to more frequently have heart disease and show much higher or lower oldpeaks. Patients with heart disease often appear to have an abnormally high or low oldpeak regardless of slope category, suggesting that oldpeak and ST slope capture related aspects of the same stress-test response. Overall, both a Flat or Down ST slope and an abnormally high or low oldpeak appear to be risk factors for heart disease.",
    ),
    colored(
        ChartKind::Strip,
        "seaborn",
        "ST_Slope",
        "Age",
        "ST Slope, Age, and Heart Disease",
        "ST Slope",
        "Age",
        "The strip plot tells us the relationship between a patient's ST slope, their age, and whether or not they have heart disease. Patients with an Up ST slope seem to more frequently not have heart disease, while patients with a Flat or Down ST slope seem to more frequently have heart disease, suggesting that a Flat or Down ST slope is a risk factor for heart disease. Older patients appear somewhat more often in the Flat and Down categories, and within every slope category the older patients have heart disease more frequently than the younger ones. Overall, both a Flat or Down ST slope and older age appear to be risk factors for heart disease.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn expect_found(lookup: ChartLookup) -> &'static ChartEntry {
        match lookup {
            ChartLookup::Found(entry) => entry,
            ChartLookup::NoNarrativeAvailable => panic!("expected a table entry"),
        }
    }

    #[test]
    fn scatter_age_cholesterol_titles() {
        let entry = expect_found(lookup_chart(ChartKind::Scatter, "Age", "Cholesterol"));
        assert_eq!(entry.spec.title, "Age Vs. Cholesterol");
        assert_eq!(entry.spec.x_title, "Age");
        assert_eq!(entry.spec.y_title, "Cholesterol");
        assert_eq!(
            entry.spec.color_title,
            Some("Heart Disease (0 is no and 1 is yes)")
        );
        assert_eq!(entry.spec.color_scheme, Some("ggplot2"));
    }

    #[test]
    fn strip_sex_maxhr_title() {
        let entry = expect_found(lookup_chart(ChartKind::Strip, "Sex", "MaxHR"));
        assert_eq!(entry.spec.title, "Sex, Maximum Heart Rate, and Heart Disease");
        assert_eq!(entry.spec.y_title, "MaxHR");
        assert_eq!(entry.spec.color_scheme, Some("seaborn"));
    }

    #[test]
    fn off_table_combinations_are_placeholders_not_panics() {
        assert_eq!(
            lookup_chart(ChartKind::Scatter, "Age", "Age"),
            ChartLookup::NoNarrativeAvailable
        );
        assert_eq!(
            lookup_chart(ChartKind::Strip, "Oldpeak", "Sex"),
            ChartLookup::NoNarrativeAvailable
        );
        assert_eq!(
            lookup_chart(ChartKind::Box, "Sex", "HeartDisease"),
            ChartLookup::NoNarrativeAvailable
        );
    }

    #[test]
    fn every_declared_scatter_combination_has_an_entry() {
        for x in SCATTER_X_OPTIONS {
            for y in SCATTER_Y_OPTIONS {
                let entry = expect_found(lookup_chart(ChartKind::Scatter, x, y));
                assert_eq!(entry.spec.color, Some("HeartDisease"));
                assert!(!entry.narrative.is_empty());
            }
        }
        assert_eq!(SCATTER_TABLE.len(), 4);
    }

    #[test]
    fn every_declared_strip_combination_has_an_entry() {
        for x in STRIP_X_OPTIONS {
            for y in STRIP_Y_OPTIONS {
                let entry = expect_found(lookup_chart(ChartKind::Strip, x, y));
                assert_eq!(entry.spec.color, Some("HeartDisease"));
                // No placeholder commentary: every narrative goes beyond the
                // shared opening clause.
                assert!(entry.narrative.len() > 100);
            }
        }
        assert_eq!(STRIP_TABLE.len(), 15);
    }

    #[test]
    fn box_family_is_keyed_by_y_alone() {
        for y in BOX_Y_OPTIONS {
            let entry = expect_found(lookup_chart(ChartKind::Box, "Sex", y));
            assert_eq!(entry.spec.x, "Sex");
            assert_eq!(entry.spec.color, None);
            assert_eq!(entry.narrative, BOX_NARRATIVE);
        }
    }

    #[test]
    fn heatmap_ignores_the_field_selection() {
        let a = lookup_chart(ChartKind::Heatmap, "", "");
        let b = lookup_chart(ChartKind::Heatmap, "Age", "Cholesterol");
        assert_eq!(a, b);
        let entry = expect_found(a);
        assert_eq!(entry.spec.title, "Heatmap Comparison");
    }
}

//! Writes a synthetic `data/heart.csv` so the app can be tried without the
//! real dataset. Marginals are loosely matched to the published
//! heart-failure data, including a fraction of Cholesterol == 0 rows so the
//! cleaning pass has something to remove.

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Weighted pick from (label, weight) pairs; weights sum to ~1.
    fn choose<'a>(&mut self, options: &[(&'a str, f64)]) -> &'a str {
        let mut roll = self.next_f64();
        for &(label, weight) in options {
            if roll < weight {
                return label;
            }
            roll -= weight;
        }
        options[options.len() - 1].0
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);
    let n_rows = 400;

    std::fs::create_dir_all("data").expect("Failed to create data directory");
    let output_path = "data/heart.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    writer
        .write_record([
            "Age",
            "Sex",
            "ChestPainType",
            "RestingBP",
            "Cholesterol",
            "FastingBS",
            "RestingECG",
            "MaxHR",
            "ExerciseAngina",
            "Oldpeak",
            "ST_Slope",
            "HeartDisease",
        ])
        .expect("Failed to write header");

    for _ in 0..n_rows {
        // Sample the outcome first and condition the covariates on it, so
        // the charts show the associations the narratives talk about.
        let heart_disease = rng.chance(0.55);

        let (age_mu, male_p, bp_mu, chol_mu, bs_p, hr_mu, angina_p, oldpeak_mu) =
            if heart_disease {
                (57.0, 0.90, 134.0, 250.0, 0.33, 127.0, 0.62, 1.3)
            } else {
                (50.0, 0.65, 130.0, 238.0, 0.16, 148.0, 0.13, 0.4)
            };

        let chest_pain = if heart_disease {
            rng.choose(&[("TA", 0.04), ("ATA", 0.05), ("NAP", 0.14), ("ASY", 0.77)])
        } else {
            rng.choose(&[("TA", 0.11), ("ATA", 0.33), ("NAP", 0.35), ("ASY", 0.21)])
        };
        let resting_ecg = if heart_disease {
            rng.choose(&[("Normal", 0.56), ("ST", 0.21), ("LVH", 0.23)])
        } else {
            rng.choose(&[("Normal", 0.66), ("ST", 0.13), ("LVH", 0.21)])
        };
        let st_slope = if heart_disease {
            rng.choose(&[("Up", 0.12), ("Flat", 0.73), ("Down", 0.15)])
        } else {
            rng.choose(&[("Up", 0.74), ("Flat", 0.21), ("Down", 0.05)])
        };

        let age = rng.gauss(age_mu, 8.5).clamp(28.0, 77.0).round();
        let resting_bp = rng.gauss(bp_mu, 17.0).clamp(90.0, 200.0).round();
        // Literal 0 encodes a missing cholesterol measurement.
        let cholesterol = if rng.chance(0.12) {
            0.0
        } else {
            rng.gauss(chol_mu, 52.0).clamp(85.0, 603.0).round()
        };
        let max_hr = rng.gauss(hr_mu, 23.0).clamp(60.0, 202.0).round();
        let oldpeak = (rng.gauss(oldpeak_mu, 1.0).clamp(-2.6, 6.2) * 10.0).round() / 10.0;

        writer
            .write_record([
                format!("{age}"),
                if rng.chance(male_p) { "M" } else { "F" }.to_string(),
                chest_pain.to_string(),
                format!("{resting_bp}"),
                format!("{cholesterol}"),
                u8::from(rng.chance(bs_p)).to_string(),
                resting_ecg.to_string(),
                format!("{max_hr}"),
                if rng.chance(angina_p) { "Y" } else { "N" }.to_string(),
                format!("{oldpeak}"),
                st_slope.to_string(),
                u8::from(heart_disease).to_string(),
            ])
            .expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {n_rows} synthetic patient records to {output_path}");
}

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Outcome colours: HeartDisease flag → Color32
// ---------------------------------------------------------------------------

/// The two series colours used by every outcome-coloured chart.
#[derive(Debug, Clone)]
pub struct OutcomeColors {
    no_event: Color32,
    event: Color32,
}

impl Default for OutcomeColors {
    fn default() -> Self {
        let palette = generate_palette(2);
        OutcomeColors {
            no_event: palette[1],
            event: palette[0],
        }
    }
}

impl OutcomeColors {
    pub fn color_for(&self, heart_disease: bool) -> Color32 {
        if heart_disease {
            self.event
        } else {
            self.no_event
        }
    }

    /// Legend label for an outcome value.
    pub fn label_for(heart_disease: bool) -> &'static str {
        if heart_disease {
            "heart disease"
        } else {
            "no heart disease"
        }
    }
}

// ---------------------------------------------------------------------------
// Diverging scale for correlation cells
// ---------------------------------------------------------------------------

/// Map a correlation in [-1, 1] to a blue–white–red diverging colour.
/// NaN (degenerate cells) renders as neutral gray.
pub fn diverging(v: f64) -> Color32 {
    const NEG: Color32 = Color32::from_rgb(48, 98, 190);
    const MID: Color32 = Color32::from_rgb(238, 238, 238);
    const POS: Color32 = Color32::from_rgb(196, 48, 66);

    if v.is_nan() {
        return Color32::GRAY;
    }
    let v = v.clamp(-1.0, 1.0) as f32;
    if v < 0.0 {
        lerp(MID, NEG, -v)
    } else {
        lerp(MID, POS, v)
    }
}

fn lerp(a: Color32, b: Color32, t: f32) -> Color32 {
    let mix = |x: u8, y: u8| -> u8 { (x as f32 + (y as f32 - x as f32) * t).round() as u8 };
    Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size_and_distinct_entries() {
        let p = generate_palette(6);
        assert_eq!(p.len(), 6);
        assert_ne!(p[0], p[3]);
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn diverging_endpoints() {
        assert_eq!(diverging(0.0), Color32::from_rgb(238, 238, 238));
        assert_eq!(diverging(1.0), Color32::from_rgb(196, 48, 66));
        assert_eq!(diverging(-1.0), Color32::from_rgb(48, 98, 190));
        assert_eq!(diverging(f64::NAN), Color32::GRAY);
        // Out-of-range values clamp rather than overflow.
        assert_eq!(diverging(3.0), diverging(1.0));
    }

    #[test]
    fn outcome_colors_are_distinct() {
        let c = OutcomeColors::default();
        assert_ne!(c.color_for(true), c.color_for(false));
    }
}

// Heatmap overlay geometry derived from prediction confidence
use crate::models::{ConfidenceLevel, Prediction};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Predictions at or below this confidence get no overlay region
pub const MIN_OVERLAY_CONFIDENCE: f64 = 0.2;

const CENTER_MIN: f64 = 25.0;
const CENTER_MAX: f64 = 75.0;
const BASE_RADIUS: f64 = 8.0;
const RADIUS_PER_CONFIDENCE: f64 = 17.0;

/// One elliptical hotspot, all lengths in percent of the image size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapRegion {
    pub label: String,
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub peak_opacity: f64,
    pub mid_opacity: f64,
    pub color: String,
    pub level: ConfidenceLevel,
}

impl HeatmapRegion {
    /// Whether the whole circle lies inside the image
    pub fn fits_image(&self) -> bool {
        self.center_x - self.radius >= 0.0
            && self.center_x + self.radius <= 100.0
            && self.center_y - self.radius >= 0.0
            && self.center_y + self.radius <= 100.0
    }
}

pub fn level_color(level: ConfidenceLevel) -> &'static str {
    match level {
        ConfidenceLevel::High => "#FF3366",
        ConfidenceLevel::Moderate => "#FFCC00",
        ConfidenceLevel::Low => "#00CCFF",
    }
}

pub fn overlay_regions<R: Rng + ?Sized>(predictions: &[Prediction], rng: &mut R) -> Vec<HeatmapRegion> {
    predictions
        .iter()
        .filter(|p| p.confidence > MIN_OVERLAY_CONFIDENCE)
        .map(|p| {
            let level = p.level();
            HeatmapRegion {
                label: p.label.clone(),
                center_x: round2(rng.gen_range(CENTER_MIN..=CENTER_MAX)),
                center_y: round2(rng.gen_range(CENTER_MIN..=CENTER_MAX)),
                radius: round2(BASE_RADIUS + p.confidence * RADIUS_PER_CONFIDENCE),
                peak_opacity: round2(p.confidence * 0.7),
                mid_opacity: round2(p.confidence * 0.4),
                color: level_color(level).to_string(),
                level,
            }
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

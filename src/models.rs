use serde::{Deserialize, Serialize};

/// A simulated finding shown to the user as if an AI model produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: String,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Prediction {
    pub fn level(&self) -> ConfidenceLevel {
        ConfidenceLevel::from_confidence(self.confidence)
    }

    pub fn percent(&self) -> f64 {
        self.confidence * 100.0
    }
}

/// Output of one demo generation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DemoResult {
    pub predictions: Vec<Prediction>,
    pub recommendations: Vec<String>,
}

impl DemoResult {
    pub fn top_prediction(&self) -> Option<&Prediction> {
        self.predictions.first()
    }
}

/// Severity tier used when colouring confidences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    Low,
    Moderate,
    High,
}

impl ConfidenceLevel {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence > 0.7 {
            ConfidenceLevel::High
        } else if confidence > 0.4 {
            ConfidenceLevel::Moderate
        } else {
            ConfidenceLevel::Low
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConfidenceLevel::Low => "low",
            ConfidenceLevel::Moderate => "moderate",
            ConfidenceLevel::High => "high",
        }
    }
}

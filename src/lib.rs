//! Simulated medical-imaging analysis results for product demos.
//!
//! Predictions are sampled from static condition catalogs with an injected
//! random source, so a seeded [`rand::rngs::StdRng`] reproduces a result exactly.

pub mod catalog;
pub mod cli_output;
pub mod config;
pub mod error;
pub mod generator;
pub mod heatmap;
pub mod models;
pub mod record;
pub mod report;

pub use catalog::{catalog, find_condition, Category, Condition, GENERAL_RECOMMENDATIONS};
pub use config::DemoConfig;
pub use error::{DemoError, Result};
pub use generator::{assemble, generate, generate_from_entropy, generate_named, DemoGenerator};
pub use heatmap::{overlay_regions, HeatmapRegion};
pub use models::{ConfidenceLevel, DemoResult, Prediction};
pub use record::{AnalysisRecord, RecentAnalyses};

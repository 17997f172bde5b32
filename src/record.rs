// Demo analysis records and the bounded recent-analyses list
use crate::catalog::Category;
use crate::heatmap::HeatmapRegion;
use crate::models::{DemoResult, Prediction};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

pub const NO_FINDINGS: &str = "No findings";
pub const DEFAULT_RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: String,
    pub category: Category,
    pub created_at: DateTime<Utc>,
    pub predictions: Vec<Prediction>,
    pub recommendations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay: Option<Vec<HeatmapRegion>>,
}

impl AnalysisRecord {
    pub fn new(category: Category, result: DemoResult) -> Self {
        Self::at(category, result, Utc::now())
    }

    /// Build a record stamped with `created_at`; the id is derived from it.
    pub fn at(category: Category, result: DemoResult, created_at: DateTime<Utc>) -> Self {
        Self {
            id: format!("demo-{}", created_at.timestamp_millis()),
            category,
            created_at,
            predictions: result.predictions,
            recommendations: result.recommendations,
            overlay: None,
        }
    }

    pub fn with_overlay(mut self, overlay: Vec<HeatmapRegion>) -> Self {
        self.overlay = Some(overlay);
        self
    }

    /// Suffix the id so records stamped in the same millisecond stay distinct
    pub fn with_sequence(mut self, sequence: usize) -> Self {
        self.id = format!("demo-{}-{}", self.created_at.timestamp_millis(), sequence);
        self
    }

    pub fn primary_finding(&self) -> &str {
        self.predictions
            .first()
            .map(|p| p.label.as_str())
            .unwrap_or(NO_FINDINGS)
    }
}

/// Newest-first list that keeps at most `limit` records
#[derive(Debug, Clone)]
pub struct RecentAnalyses {
    limit: usize,
    items: VecDeque<AnalysisRecord>,
}

impl Default for RecentAnalyses {
    fn default() -> Self {
        Self::new(DEFAULT_RECENT_LIMIT)
    }
}

impl RecentAnalyses {
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            limit,
            items: VecDeque::with_capacity(limit),
        }
    }

    pub fn push(&mut self, record: AnalysisRecord) {
        self.items.push_front(record);
        self.items.truncate(self.limit);
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnalysisRecord> {
        self.items.iter()
    }

    pub fn latest(&self) -> Option<&AnalysisRecord> {
        self.items.front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

// Demo result generator: samples catalog conditions and fabricates confidences
use crate::catalog::{catalog, Category, Condition, GENERAL_RECOMMENDATIONS};
use crate::error::Result;
use crate::models::{DemoResult, Prediction};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Number of general lifestyle draws appended to every result
pub const DEFAULT_GENERAL_PICKS: usize = 3;

/// Confidences are whole hundredths in this range, i.e. (0.10, 0.95]
const CONFIDENCE_HUNDREDTHS: std::ops::RangeInclusive<u32> = 11..=95;

#[derive(Debug, Clone)]
pub struct DemoGenerator {
    general_picks: usize,
}

impl Default for DemoGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoGenerator {
    pub fn new() -> Self {
        Self {
            general_picks: DEFAULT_GENERAL_PICKS,
        }
    }

    pub fn with_general_picks(mut self, picks: usize) -> Self {
        self.general_picks = picks;
        self
    }

    pub fn general_picks(&self) -> usize {
        self.general_picks
    }

    /// Generate one demo result for `category`, drawing all randomness from `rng`.
    ///
    /// Draw order is fixed (condition count, shuffle, confidences, general picks),
    /// so an identically seeded `rng` reproduces the result exactly.
    pub fn generate<R: Rng + ?Sized>(&self, category: Category, rng: &mut R) -> DemoResult {
        let conditions = select_conditions(category, rng);

        let selected: Vec<(&Condition, f64)> = conditions
            .into_iter()
            .map(|condition| (condition, random_confidence(rng)))
            .collect();

        let general: Vec<&str> = (0..self.general_picks)
            .map(|_| pick_general(rng))
            .collect();

        debug!(
            "Selected {} {} condition(s): {:?}",
            selected.len(),
            category,
            selected.iter().map(|(c, conf)| (c.label, *conf)).collect::<Vec<_>>()
        );

        assemble(&selected, &general)
    }

    /// Like [`generate`](Self::generate) but parses the category name first.
    pub fn generate_named<R: Rng + ?Sized>(&self, name: &str, rng: &mut R) -> Result<DemoResult> {
        let category: Category = name.parse()?;
        Ok(self.generate(category, rng))
    }
}

pub fn generate<R: Rng + ?Sized>(category: Category, rng: &mut R) -> DemoResult {
    DemoGenerator::new().generate(category, rng)
}

pub fn generate_named<R: Rng + ?Sized>(name: &str, rng: &mut R) -> Result<DemoResult> {
    DemoGenerator::new().generate_named(name, rng)
}

pub fn generate_from_entropy(category: Category) -> DemoResult {
    let mut rng = StdRng::from_entropy();
    generate(category, &mut rng)
}

/// Seeded when a seed is given, OS entropy otherwise
pub fn demo_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Pick 1..=k distinct conditions, in selection order
pub fn select_conditions<R: Rng + ?Sized>(category: Category, rng: &mut R) -> Vec<&'static Condition> {
    let conditions = catalog(category);
    let count = rng.gen_range(category.condition_range()).min(conditions.len());

    let mut shuffled: Vec<&'static Condition> = conditions.iter().collect();
    shuffled.shuffle(rng);
    shuffled.truncate(count);
    shuffled
}

pub fn random_confidence<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    f64::from(rng.gen_range(CONFIDENCE_HUNDREDTHS)) / 100.0
}

fn pick_general<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    GENERAL_RECOMMENDATIONS[rng.gen_range(0..GENERAL_RECOMMENDATIONS.len())]
}

/// Build a result from concrete draws.
///
/// `selected` is in selection order. Predictions come out sorted by confidence
/// descending with ties kept in selection order. Recommendations keep the first
/// occurrence of each string: condition advice first, then `general`.
pub fn assemble(selected: &[(&Condition, f64)], general: &[&str]) -> DemoResult {
    let mut predictions: Vec<Prediction> = selected
        .iter()
        .map(|(condition, confidence)| Prediction {
            label: condition.label.to_string(),
            confidence: *confidence,
            description: Some(condition.description.to_string()),
        })
        .collect();

    // sort_by is stable
    predictions.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    let mut recommendations = Vec::new();
    for (condition, _) in selected {
        for rec in condition.recommendations {
            push_unique(&mut recommendations, rec);
        }
    }
    for rec in general {
        push_unique(&mut recommendations, rec);
    }

    DemoResult {
        predictions,
        recommendations,
    }
}

fn push_unique(list: &mut Vec<String>, item: &str) {
    if !list.iter().any(|existing| existing == item) {
        list.push(item.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_condition;
    use std::collections::HashSet;

    fn condition_recs(category: Category, result: &DemoResult) -> HashSet<&'static str> {
        result
            .predictions
            .iter()
            .filter_map(|p| find_condition(category, &p.label))
            .flat_map(|c| c.recommendations.iter().copied())
            .collect()
    }

    #[test]
    fn test_prediction_counts_within_bounds() {
        for category in Category::ALL {
            let range = category.condition_range();
            let mut seen_counts = HashSet::new();
            for seed in 0..500 {
                let mut rng = StdRng::seed_from_u64(seed);
                let result = generate(category, &mut rng);
                assert!(range.contains(&result.predictions.len()), "{category} seed {seed}");
                seen_counts.insert(result.predictions.len());
            }
            assert_eq!(seen_counts.len(), range.count(), "{category} never hit every count");
        }
    }

    #[test]
    fn test_labels_belong_to_requested_catalog() {
        for category in Category::ALL {
            for seed in 0..200 {
                let mut rng = StdRng::seed_from_u64(seed);
                let result = generate(category, &mut rng);
                let labels: HashSet<_> = result.predictions.iter().map(|p| &p.label).collect();
                assert_eq!(labels.len(), result.predictions.len(), "duplicate condition selected");
                for p in &result.predictions {
                    let condition = find_condition(category, &p.label)
                        .unwrap_or_else(|| panic!("{} not in {category} catalog", p.label));
                    assert_eq!(p.description.as_deref(), Some(condition.description));
                }
            }
        }
    }

    #[test]
    fn test_confidence_bounds_and_precision() {
        for seed in 0..300 {
            let mut rng = StdRng::seed_from_u64(seed);
            for p in generate(Category::Chest, &mut rng).predictions {
                assert!(p.confidence > 0.1 && p.confidence <= 0.95, "{}", p.confidence);
                assert_eq!((p.confidence * 100.0).round() / 100.0, p.confidence);
            }
        }
    }

    #[test]
    fn test_predictions_sorted_descending() {
        for category in Category::ALL {
            for seed in 0..200 {
                let mut rng = StdRng::seed_from_u64(seed);
                let result = generate(category, &mut rng);
                for pair in result.predictions.windows(2) {
                    assert!(pair[0].confidence >= pair[1].confidence);
                }
            }
        }
    }

    #[test]
    fn test_recommendations_unique_and_bounded() {
        for category in Category::ALL {
            for seed in 0..200 {
                let mut rng = StdRng::seed_from_u64(seed);
                let result = generate(category, &mut rng);

                let unique: HashSet<_> = result.recommendations.iter().collect();
                assert_eq!(unique.len(), result.recommendations.len());

                let specific = condition_recs(category, &result).len();
                assert!(result.recommendations.len() >= specific);
                assert!(result.recommendations.len() <= specific + DEFAULT_GENERAL_PICKS);
            }
        }
    }

    #[test]
    fn test_same_seed_same_output() {
        for category in Category::ALL {
            let a = generate(category, &mut StdRng::seed_from_u64(1234));
            let b = generate(category, &mut StdRng::seed_from_u64(1234));
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_fixed_pneumonia_example() {
        let pneumonia = find_condition(Category::Chest, "Pneumonia").unwrap();
        let general = [
            GENERAL_RECOMMENDATIONS[0],
            GENERAL_RECOMMENDATIONS[4],
            GENERAL_RECOMMENDATIONS[2],
        ];
        let result = assemble(&[(pneumonia, 0.82)], &general);

        assert_eq!(
            result.predictions,
            vec![Prediction {
                label: "Pneumonia".to_string(),
                confidence: 0.82,
                description: Some("Inflammation of the air sacs in one or both lungs".to_string()),
            }]
        );
        assert_eq!(result.recommendations.len(), 7);
        assert_eq!(&result.recommendations[..4], pneumonia.recommendations);
        assert_eq!(&result.recommendations[4..], &general);
    }

    #[test]
    fn test_general_collisions_under_fill() {
        let copd = find_condition(Category::Chest, "COPD").unwrap();
        let same = GENERAL_RECOMMENDATIONS[1];
        let result = assemble(&[(copd, 0.5)], &[same, same, same]);
        assert_eq!(result.recommendations.len(), 5);
        assert_eq!(result.recommendations.last().map(String::as_str), Some(same));
    }

    #[test]
    fn test_shared_condition_advice_is_deduplicated() {
        let lung_mass = find_condition(Category::Chest, "Lung Mass").unwrap();
        let pneumothorax = find_condition(Category::Chest, "Pneumothorax").unwrap();
        let result = assemble(&[(lung_mass, 0.4), (pneumothorax, 0.6)], &[]);

        // "Smoking cessation if applicable" appears in both
        assert_eq!(result.recommendations.len(), 7);
        assert_eq!(result.recommendations[2], "Smoking cessation if applicable");
        assert_eq!(result.recommendations[4], "Urgent medical evaluation if symptoms worsen");
        assert_eq!(result.predictions[0].label, "Pneumothorax");
    }

    #[test]
    fn test_ties_keep_selection_order() {
        let stroke = find_condition(Category::Ct, "Stroke").unwrap();
        let atrophy = find_condition(Category::Ct, "Atrophy").unwrap();
        let result = assemble(&[(stroke, 0.5), (atrophy, 0.5)], &[]);
        assert_eq!(result.predictions[0].label, "Stroke");
        assert_eq!(result.predictions[1].label, "Atrophy");

        let result = assemble(&[(atrophy, 0.5), (stroke, 0.5)], &[]);
        assert_eq!(result.predictions[0].label, "Atrophy");
    }

    #[test]
    fn test_zero_general_picks() {
        let generator = DemoGenerator::new().with_general_picks(0);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let result = generator.generate(Category::Skin, &mut rng);
            assert_eq!(result.recommendations.len(), condition_recs(Category::Skin, &result).len());
        }
    }

    #[test]
    fn test_generate_named_rejects_unknown() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(generate_named("mri", &mut rng).is_err());

        let result = generate_named("xray", &mut rng).unwrap();
        for p in &result.predictions {
            assert!(find_condition(Category::Chest, &p.label).is_some());
        }
    }

    #[test]
    fn test_entropy_generation_respects_bounds() {
        let result = generate_from_entropy(Category::Ct);
        assert!(Category::Ct.condition_range().contains(&result.predictions.len()));
    }
}

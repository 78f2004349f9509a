//! Per-paper classification: impact category, citation rates and reading
//! difficulty, all evaluated against an explicit reference date.

pub mod category;
pub mod complexity;
pub mod insights;
pub mod ranking;
pub mod velocity;
pub mod views;

pub use category::{categorize, Category, CategoryStrategy};
pub use complexity::{complexity_score, ComplexityLevel};
pub use insights::{extract_insights, Insights, MetricKind, MetricMatch};
pub use ranking::{rank, relevance_score};
pub use velocity::{citation_metrics, CitationMetrics, Momentum};
pub use views::{
    category_counts, complexity_counts, filter_by_complexity, sort_by_category, CategoryCounts,
    ComplexityCounts,
};

use log::debug;
use serde::{Serialize, Serializer};
use time::Date;

use crate::common::{round1, Paper};

fn round_display<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    value.map(round1).serialize(serializer)
}

/// Everything derived for one paper.
///
/// Rates are kept unrounded; they are rounded to one decimal only on output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub category: Option<Category>,
    pub category_badge: Option<&'static str>,
    pub complexity_level: ComplexityLevel,
    pub complexity_color: &'static str,
    pub complexity_score: u32,
    pub complexity_description: &'static str,
    #[serde(serialize_with = "round_display")]
    pub citation_velocity: Option<f64>,
    #[serde(serialize_with = "round_display")]
    pub recent_velocity: Option<f64>,
    pub momentum: Option<Momentum>,
    #[serde(serialize_with = "round_display")]
    pub acceleration: Option<f64>,
    #[serde(serialize_with = "round_display")]
    pub age: Option<f64>,
}

/// A source paper with its derived fields alongside
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedPaper {
    #[serde(flatten)]
    pub paper: Paper,
    #[serde(flatten)]
    pub classification: Classification,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insights: Option<Insights>,
}

/// Classifies papers with one category strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    pub strategy: CategoryStrategy,
}

impl Classifier {
    pub fn new(strategy: CategoryStrategy) -> Self {
        Self { strategy }
    }

    pub fn classify(&self, paper: &Paper, now: Date) -> Classification {
        let score = complexity_score(paper);
        let level = ComplexityLevel::from_score(score);

        let mut classification = Classification {
            category: None,
            category_badge: None,
            complexity_level: level,
            complexity_color: level.badge_color(),
            complexity_score: score,
            complexity_description: level.description(),
            citation_velocity: None,
            recent_velocity: None,
            momentum: None,
            acceleration: None,
            age: None,
        };

        let Some(metrics) = citation_metrics(paper, now) else {
            debug!("Paper {} has no usable publication date", paper.id);
            return classification;
        };

        classification.category = categorize(self.strategy, &metrics);
        classification.category_badge = classification.category.map(|c| c.badge_color());
        classification.age = Some(metrics.age);
        classification.citation_velocity = metrics.velocity;
        if self.strategy == CategoryStrategy::Momentum {
            classification.recent_velocity = metrics.recent_velocity;
            classification.momentum = metrics.momentum;
            classification.acceleration = metrics.acceleration;
        }
        classification
    }

    pub fn classify_paper(&self, paper: Paper, now: Date) -> ClassifiedPaper {
        let classification = self.classify(&paper, now);
        ClassifiedPaper {
            paper,
            classification,
            insights: None,
        }
    }
}

/// Classify with the default momentum strategy
pub fn classify(paper: &Paper, now: Date) -> Classification {
    Classifier::default().classify(paper, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    const NOW: Date = date!(2024 - 06 - 30);

    #[test]
    fn test_undatable_paper() {
        let c = classify(&Paper::new("W1", "No date at all").with_citations(9000), NOW);
        assert!(c.category.is_none());
        assert!(c.age.is_none());
        assert!(c.citation_velocity.is_none());
        assert_eq!(c.complexity_level, ComplexityLevel::Beginner);
    }

    #[test]
    fn test_foundational_worked_example() {
        let paper = Paper::new("W1", "Attention").with_year(2016).with_citations(6000);
        let c = classify(&paper, NOW);
        assert_eq!(c.category, Some(Category::Foundational));
        assert!((c.age.unwrap() - 8.0).abs() < 0.01);
        assert!((c.citation_velocity.unwrap() - 750.0).abs() < 1.0);
    }

    #[test]
    fn test_trending_worked_example_velocity_strategy() {
        let paper = Paper::new("W1", "Fresh").with_year(2022).with_citations(150);
        let c = Classifier::new(CategoryStrategy::Velocity).classify(&paper, NOW);
        assert_eq!(c.category, Some(Category::Trending));
        assert!((c.citation_velocity.unwrap() - 75.0).abs() < 0.1);
        assert!(c.momentum.is_none());
    }

    #[test]
    fn test_too_new_is_recent_without_velocity() {
        let mut paper = Paper::new("W1", "Preprint").with_citations(4000);
        paper.publication_date = Some("2024-05-01".to_string());
        let c = classify(&paper, NOW);
        assert_eq!(c.category, Some(Category::Recent));
        assert!(c.citation_velocity.is_none());
        assert!(c.momentum.is_none());
        assert!(c.age.unwrap() < 0.5);
    }

    #[test]
    fn test_velocity_null_iff_young_or_undated() {
        let papers = [
            Paper::new("a", "t").with_year(2024),
            Paper::new("b", "t").with_year(2023),
            Paper::new("c", "t"),
            Paper::new("d", "t").with_year(1999),
        ];
        for paper in &papers {
            let c = classify(paper, NOW);
            let young_or_undated = c.age.map_or(true, |age| age < 0.5);
            assert_eq!(c.citation_velocity.is_none(), young_or_undated, "paper {}", paper.id);
        }
    }

    #[test]
    fn test_velocity_rounded_on_output_only() {
        let paper = Paper::new("W1", "Odd").with_year(2021).with_citations(100);
        let classified = Classifier::default().classify_paper(paper, NOW);
        let raw = classified.classification.citation_velocity.unwrap();
        assert!((raw - 33.333).abs() < 0.01);
        let json = serde_json::to_value(&classified).unwrap();
        assert_eq!(json["citation_velocity"], 33.3);
        assert_eq!(json["id"], "W1");
        assert_eq!(json["complexity_level"], "Beginner");
    }

    #[test]
    fn test_badge_colors_in_output() {
        let paper = Paper::new("W1", "Attention").with_year(2016).with_citations(6000);
        let json = serde_json::to_value(Classifier::default().classify_paper(paper, NOW)).unwrap();
        assert_eq!(json["category"], "Foundational");
        assert_eq!(json["category_badge"], "gold");
        assert_eq!(json["complexity_color"], "green");

        let undated = Classifier::default().classify_paper(Paper::new("W2", "Undated"), NOW);
        let json = serde_json::to_value(undated).unwrap();
        assert!(json["category_badge"].is_null());
        assert_eq!(json["complexity_color"], "green");
    }
}

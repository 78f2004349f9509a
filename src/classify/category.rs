use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::velocity::{CitationMetrics, Momentum};

/// Coarse citation-impact label, at most one per paper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Category {
    Foundational,
    Trending,
    #[serde(rename = "Highly Cited")]
    HighlyCited,
    Emerging,
    Established,
    Recent,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Foundational => "Foundational",
            Category::Trending => "Trending",
            Category::HighlyCited => "Highly Cited",
            Category::Emerging => "Emerging",
            Category::Established => "Established",
            Category::Recent => "Recent",
        }
    }

    /// Badge color used by the list view
    pub fn badge_color(&self) -> &'static str {
        match self {
            Category::Foundational => "gold",
            Category::Trending => "green",
            Category::HighlyCited => "purple",
            Category::Emerging => "teal",
            Category::Established => "gray",
            Category::Recent => "blue",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which rule set assigns categories. The two are never mixed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CategoryStrategy {
    /// Velocity, recent velocity and momentum from per-year counts
    #[default]
    Momentum,
    /// Lifetime velocity only; ignores per-year counts
    Velocity,
}

impl CategoryStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryStrategy::Momentum => "momentum",
            CategoryStrategy::Velocity => "velocity",
        }
    }
}

/// Assign a category from citation metrics using the given strategy
pub fn categorize(strategy: CategoryStrategy, metrics: &CitationMetrics) -> Option<Category> {
    if !metrics.is_measurable() {
        return Some(Category::Recent);
    }
    match strategy {
        CategoryStrategy::Momentum => categorize_by_momentum(metrics),
        CategoryStrategy::Velocity => categorize_by_velocity(metrics),
    }
}

fn categorize_by_momentum(m: &CitationMetrics) -> Option<Category> {
    let c = m.citation_count;
    let age = m.age;
    let v = m.velocity.unwrap_or(0.0);
    let rv = m.recent_velocity.unwrap_or(v);
    let momentum = m.momentum.unwrap_or(Momentum::Unknown);
    let accelerating = momentum == Momentum::Accelerating;

    if c >= 5000
        || (age >= 15.0 && c >= 1000)
        || (age >= 10.0 && c >= 2000 && rv >= 50.0)
        || (age >= 5.0 && c >= 3000 && rv >= 100.0)
    {
        return Some(Category::Foundational);
    }

    if (1.0..=5.0).contains(&age)
        && momentum != Momentum::Declining
        && (v >= 200.0 || (v >= 100.0 && c >= 200) || (v >= 50.0 && c >= 300 && accelerating))
    {
        return Some(Category::Trending);
    }

    if (0.5..=3.0).contains(&age)
        && accelerating
        && ((c >= 30 && v >= 20.0)
            || (c >= 80 && v >= 30.0)
            || (c >= 50 && m.acceleration.is_some_and(|a| a >= 15.0)))
    {
        return Some(Category::Emerging);
    }

    if (age > 5.0 && age <= 15.0 && c >= 500)
        || (age > 15.0 && c >= 300 && rv >= 20.0)
        || (age > 5.0 && rv >= 50.0)
        || (1000..5000).contains(&c)
    {
        return Some(Category::HighlyCited);
    }

    if (3.0..=10.0).contains(&age)
        && !accelerating
        && ((100..500).contains(&c) || (10.0..50.0).contains(&v))
    {
        return Some(Category::Established);
    }

    if age < 2.5 {
        return Some(Category::Recent);
    }

    None
}

fn categorize_by_velocity(m: &CitationMetrics) -> Option<Category> {
    let c = m.citation_count;
    let age = m.age;
    let v = m.velocity.unwrap_or(0.0);

    if c >= 5000 || (age >= 10.0 && c >= 1000) || (age >= 5.0 && c >= 2000) {
        return Some(Category::Foundational);
    }

    if (1.0..=5.0).contains(&age)
        && (v >= 200.0 || (v >= 50.0 && c >= 100) || (v >= 20.0 && c >= 200))
    {
        return Some(Category::Trending);
    }

    if (age > 5.0 && c >= 500) || (age > 5.0 && v >= 50.0) || c >= 1000 {
        return Some(Category::HighlyCited);
    }

    if (0.5..=3.0).contains(&age) && ((c >= 20 && v >= 10.0) || c >= 50) {
        return Some(Category::Emerging);
    }

    if age >= 3.0 && (c >= 100 || v >= 10.0) {
        return Some(Category::Established);
    }

    if age < 3.0 {
        return Some(Category::Recent);
    }

    None
}

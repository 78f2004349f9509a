use clap::ValueEnum;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::common::Paper;

/// Terms that signal a paper assumes specialist background
pub const ADVANCED_TERMS: &[&str] = &[
    "theorem",
    "lemma",
    "corollary",
    "proposition",
    "asymptotic",
    "stochastic",
    "hierarchical",
    "eigenvalue",
    "manifold",
    "topology",
    "gaussian",
    "bayesian",
    "convex",
    "optimization",
    "eigendecomposition",
    "tensor",
    "gradient descent",
    "regularization",
    "backpropagation",
    "adversarial",
    "variational",
];

/// Terms that signal methodological content. Disjoint from ADVANCED_TERMS.
pub const INTERMEDIATE_TERMS: &[&str] = &[
    "analysis",
    "framework",
    "methodology",
    "empirical",
    "statistical",
    "algorithm",
    "correlation",
    "distribution",
    "hypothesis",
    "parameter",
    "evaluation",
    "implementation",
    "architecture",
    "metric",
];

const ADVANCED_WEIGHT: u32 = 8;
const INTERMEDIATE_WEIGHT: u32 = 4;
const MAX_SCORE: u32 = 100;

/// Whole-word, case-insensitive alternation over a term list
fn vocabulary_pattern(terms: &[&str]) -> Regex {
    let alternation = terms
        .iter()
        .map(|term| regex::escape(term).replace(' ', r"\s+"))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).unwrap()
}

lazy_static! {
    static ref ADVANCED_PATTERN: Regex = vocabulary_pattern(ADVANCED_TERMS);
    static ref INTERMEDIATE_PATTERN: Regex = vocabulary_pattern(INTERMEDIATE_TERMS);
}

/// Estimated reading difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum ComplexityLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ComplexityLevel {
    pub fn from_score(score: u32) -> Self {
        if score >= 50 {
            ComplexityLevel::Advanced
        } else if score >= 30 {
            ComplexityLevel::Intermediate
        } else {
            ComplexityLevel::Beginner
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplexityLevel::Beginner => "Beginner",
            ComplexityLevel::Intermediate => "Intermediate",
            ComplexityLevel::Advanced => "Advanced",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ComplexityLevel::Beginner => "Accessible to newcomers",
            ComplexityLevel::Intermediate => "Some background knowledge helpful",
            ComplexityLevel::Advanced => "Requires strong background in the field",
        }
    }

    pub fn badge_color(&self) -> &'static str {
        match self {
            ComplexityLevel::Beginner => "green",
            ComplexityLevel::Intermediate => "yellow",
            ComplexityLevel::Advanced => "red",
        }
    }
}

impl std::fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn word_length_points(text: &str) -> u32 {
    let (chars, words) = text
        .split_whitespace()
        .fold((0usize, 0usize), |(chars, words), word| (chars + word.chars().count(), words + 1));
    let avg = chars as f64 / words.max(1) as f64;
    if avg > 6.0 {
        15
    } else if avg > 5.0 {
        10
    } else {
        5
    }
}

fn reference_points(referenced_works: u32) -> u32 {
    match referenced_works {
        n if n > 50 => 20,
        n if n > 30 => 15,
        n if n > 15 => 10,
        _ => 5,
    }
}

fn citation_points(citation_count: u64) -> u32 {
    match citation_count {
        n if n >= 10_000 => 10,
        n if n >= 1_000 => 5,
        _ => 0,
    }
}

/// Heuristic difficulty score in [0, 100]
pub fn complexity_score(paper: &Paper) -> u32 {
    let text = paper.text();

    let advanced = ADVANCED_PATTERN.find_iter(&text).count() as u32;
    let intermediate = INTERMEDIATE_PATTERN.find_iter(&text).count() as u32;

    let score = word_length_points(&text)
        + advanced.saturating_mul(ADVANCED_WEIGHT)
        + intermediate.saturating_mul(INTERMEDIATE_WEIGHT)
        + reference_points(paper.referenced_works_count.unwrap_or(0))
        + citation_points(paper.citation_count);

    score.min(MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_plain_title_is_beginner() {
        let paper = Paper::new("W1", "the cat");
        let score = complexity_score(&paper);
        assert_eq!(score, 10);
        assert_eq!(ComplexityLevel::from_score(score), ComplexityLevel::Beginner);
    }

    #[test]
    fn test_empty_paper_still_scores() {
        let paper = Paper::new("W1", "");
        assert_eq!(complexity_score(&paper), 10);
    }

    #[test]
    fn test_dense_vocabulary_is_advanced() {
        let paper = Paper::new("W1", "Variational Bounds").with_abstract(
            "We prove a theorem on convex optimization of stochastic gradient descent.",
        );
        let score = complexity_score(&paper);
        assert!(score >= 50, "score was {}", score);
        assert_eq!(ComplexityLevel::from_score(score), ComplexityLevel::Advanced);
    }

    #[test]
    fn test_terms_match_whole_words_only() {
        assert_eq!(INTERMEDIATE_PATTERN.find_iter("metrics and parameters").count(), 0);
        assert_eq!(ADVANCED_PATTERN.find_iter("built on tensorflow").count(), 0);
        assert_eq!(INTERMEDIATE_PATTERN.find_iter("one metric, one parameter").count(), 2);
        assert_eq!(ADVANCED_PATTERN.find_iter("a tensor.").count(), 1);
    }

    #[test]
    fn test_every_occurrence_counts() {
        let once = Paper::new("W1", "a theorem");
        let twice = Paper::new("W1", "a theorem theorem");
        assert_eq!(complexity_score(&twice) - complexity_score(&once), ADVANCED_WEIGHT);
    }

    #[test]
    fn test_case_insensitive_multi_word_term() {
        let paper = Paper::new("W1", "on Gradient  Descent");
        assert_eq!(ADVANCED_PATTERN.find_iter(&paper.text()).count(), 1);
    }

    #[test]
    fn test_reference_and_citation_bonuses() {
        let mut paper = Paper::new("W1", "the cat").with_citations(12_000);
        paper.referenced_works_count = Some(60);
        assert_eq!(complexity_score(&paper), 5 + 20 + 10);
    }

    #[test]
    fn test_score_is_clamped() {
        let text = "theorem ".repeat(30);
        let paper = Paper::new("W1", &text);
        assert_eq!(complexity_score(&paper), 100);
    }

    #[test]
    fn test_level_thresholds() {
        assert_eq!(ComplexityLevel::from_score(29), ComplexityLevel::Beginner);
        assert_eq!(ComplexityLevel::from_score(30), ComplexityLevel::Intermediate);
        assert_eq!(ComplexityLevel::from_score(49), ComplexityLevel::Intermediate);
        assert_eq!(ComplexityLevel::from_score(50), ComplexityLevel::Advanced);
    }

    #[test]
    fn test_vocabularies_are_disjoint() {
        for term in INTERMEDIATE_TERMS {
            assert!(!ADVANCED_TERMS.contains(term), "{} in both lists", term);
        }
    }
}

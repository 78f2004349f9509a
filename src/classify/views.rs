use serde::Serialize;

use super::{Category, ClassifiedPaper, ComplexityLevel};

/// Papers of one category, ordered the way that category is browsed
pub fn sort_by_category(papers: &[ClassifiedPaper], category: Category) -> Vec<ClassifiedPaper> {
    let mut selected: Vec<ClassifiedPaper> = papers
        .iter()
        .filter(|p| p.classification.category == Some(category))
        .cloned()
        .collect();

    let citations = |p: &ClassifiedPaper| p.paper.citation_count;
    let velocity = |p: &ClassifiedPaper| p.classification.citation_velocity.unwrap_or(0.0);

    selected.sort_by(|a, b| match category {
        Category::Foundational | Category::HighlyCited | Category::Established => {
            citations(b).cmp(&citations(a))
        }
        Category::Trending => velocity(b).total_cmp(&velocity(a)),
        // Velocities within the same whole-number band tie, then citations decide
        Category::Emerging => velocity(b)
            .floor()
            .total_cmp(&velocity(a).floor())
            .then_with(|| citations(b).cmp(&citations(a))),
        Category::Recent => b
            .paper
            .publication_year
            .unwrap_or(0)
            .cmp(&a.paper.publication_year.unwrap_or(0)),
    });
    selected
}

/// Number of papers per category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub total: usize,
    pub foundational: usize,
    pub trending: usize,
    pub highly_cited: usize,
    pub emerging: usize,
    pub established: usize,
    pub recent: usize,
    pub uncategorized: usize,
}

impl CategoryCounts {
    pub fn get(&self, category: Option<Category>) -> usize {
        match category {
            Some(Category::Foundational) => self.foundational,
            Some(Category::Trending) => self.trending,
            Some(Category::HighlyCited) => self.highly_cited,
            Some(Category::Emerging) => self.emerging,
            Some(Category::Established) => self.established,
            Some(Category::Recent) => self.recent,
            None => self.uncategorized,
        }
    }
}

pub fn category_counts(papers: &[ClassifiedPaper]) -> CategoryCounts {
    let mut counts = CategoryCounts {
        total: papers.len(),
        ..Default::default()
    };
    for paper in papers {
        let slot = match paper.classification.category {
            Some(Category::Foundational) => &mut counts.foundational,
            Some(Category::Trending) => &mut counts.trending,
            Some(Category::HighlyCited) => &mut counts.highly_cited,
            Some(Category::Emerging) => &mut counts.emerging,
            Some(Category::Established) => &mut counts.established,
            Some(Category::Recent) => &mut counts.recent,
            None => &mut counts.uncategorized,
        };
        *slot += 1;
    }
    counts
}

pub fn filter_by_complexity(papers: &[ClassifiedPaper], level: ComplexityLevel) -> Vec<ClassifiedPaper> {
    papers
        .iter()
        .filter(|p| p.classification.complexity_level == level)
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComplexityCounts {
    pub beginner: usize,
    pub intermediate: usize,
    pub advanced: usize,
}

pub fn complexity_counts(papers: &[ClassifiedPaper]) -> ComplexityCounts {
    papers
        .iter()
        .fold(ComplexityCounts::default(), |mut counts, paper| {
            match paper.classification.complexity_level {
                ComplexityLevel::Beginner => counts.beginner += 1,
                ComplexityLevel::Intermediate => counts.intermediate += 1,
                ComplexityLevel::Advanced => counts.advanced += 1,
            }
            counts
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Classifier;
    use crate::common::Paper;
    use time::macros::date;

    fn classified(id: &str, year: i32, citations: u64) -> ClassifiedPaper {
        let paper = Paper::new(id, "the cat").with_year(year).with_citations(citations);
        Classifier::default().classify_paper(paper, date!(2024 - 06 - 30))
    }

    fn tagged(id: &str, category: Category, velocity: f64, citations: u64) -> ClassifiedPaper {
        let mut paper = classified(id, 2022, citations);
        paper.classification.category = Some(category);
        paper.classification.citation_velocity = Some(velocity);
        paper
    }

    fn ids(papers: &[ClassifiedPaper]) -> Vec<&str> {
        papers.iter().map(|p| p.paper.id.as_str()).collect()
    }

    #[test]
    fn test_foundational_sorted_by_citations() {
        let papers = vec![
            classified("a", 2000, 6000),
            classified("b", 2024, 5),
            classified("c", 1995, 9000),
        ];
        let sorted = sort_by_category(&papers, Category::Foundational);
        let ids: Vec<&str> = sorted.iter().map(|p| p.paper.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a"]);
    }

    #[test]
    fn test_trending_sorted_by_velocity() {
        let papers = vec![classified("slow", 2021, 700), classified("fast", 2022, 900)];
        let sorted = sort_by_category(&papers, Category::Trending);
        let ids: Vec<&str> = sorted.iter().map(|p| p.paper.id.as_str()).collect();
        assert_eq!(ids, vec!["fast", "slow"]);
    }

    #[test]
    fn test_recent_sorted_by_year() {
        let papers = vec![classified("older", 2023, 1), classified("newer", 2024, 1)];
        let sorted = sort_by_category(&papers, Category::Recent);
        assert_eq!(sorted[0].paper.id, "newer");
    }

    #[test]
    fn test_counts() {
        let papers = vec![
            classified("a", 2000, 6000),
            classified("b", 2024, 5),
            classified("c", 2010, 5),
            classified("d", 1990, 9000),
        ];
        let counts = category_counts(&papers);
        assert_eq!(counts.total, 4);
        assert_eq!(counts.foundational, 2);
        assert_eq!(counts.recent, 1);
        assert_eq!(counts.get(None), 1);

        let levels = complexity_counts(&papers);
        assert_eq!(levels.beginner, 4);
        assert_eq!(filter_by_complexity(&papers, ComplexityLevel::Advanced).len(), 0);
    }

    #[test]
    fn test_emerging_velocity_band_then_citations() {
        let papers = vec![
            tagged("a", Category::Emerging, 10.2, 5),
            tagged("b", Category::Emerging, 10.9, 50),
            tagged("c", Category::Emerging, 12.1, 1),
            tagged("d", Category::Emerging, 3.0, 900),
        ];
        let sorted = sort_by_category(&papers, Category::Emerging);
        assert_eq!(ids(&sorted), vec!["c", "b", "a", "d"]);
    }

    #[test]
    fn test_emerging_sort_is_total_over_many_papers() {
        // Mixed velocities and citation counts that chain across band edges
        let mut state: u64 = 0x2545_f491_4f6c_dd1d;
        let mut next = move || {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            state >> 33
        };
        let papers: Vec<ClassifiedPaper> = (0..150)
            .map(|i| {
                let velocity = (next() % 4000) as f64 / 100.0;
                let citations = next() % 1000;
                tagged(&format!("p{}", i), Category::Emerging, velocity, citations)
            })
            .collect();

        let sorted = sort_by_category(&papers, Category::Emerging);
        assert_eq!(sorted.len(), 150);
        for pair in sorted.windows(2) {
            let key = |p: &ClassifiedPaper| {
                (p.classification.citation_velocity.unwrap().floor(), p.paper.citation_count)
            };
            let (band_a, cites_a) = key(&pair[0]);
            let (band_b, cites_b) = key(&pair[1]);
            assert!(band_a > band_b || (band_a == band_b && cites_a >= cites_b));
        }
    }

    #[test]
    fn test_highly_cited_and_established_sorted_by_citations() {
        for category in [Category::HighlyCited, Category::Established] {
            let papers = vec![
                tagged("low", category, 90.0, 400),
                tagged("other", Category::Recent, 0.0, 99_999),
                tagged("high", category, 1.0, 3000),
                tagged("mid", category, 50.0, 1200),
            ];
            let sorted = sort_by_category(&papers, category);
            assert_eq!(ids(&sorted), vec!["high", "mid", "low"], "{}", category);
        }
    }
}

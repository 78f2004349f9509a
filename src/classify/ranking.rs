use super::ClassifiedPaper;

/// Recency bonus plus log-scaled citation weight
pub fn relevance_score(age: Option<f64>, citation_count: u64) -> f64 {
    let recency = match age {
        Some(age) if age <= 2.0 => 30.0,
        Some(age) if age <= 5.0 => 15.0,
        _ => 0.0,
    };
    recency + (citation_count.max(1) as f64).log10() * 20.0
}

/// Order papers for the unfiltered view, most relevant first.
///
/// Stable: papers with equal scores keep their input order.
pub fn rank(mut papers: Vec<ClassifiedPaper>) -> Vec<ClassifiedPaper> {
    papers.sort_by(|a, b| {
        let score_a = relevance_score(a.classification.age, a.paper.citation_count);
        let score_b = relevance_score(b.classification.age, b.paper.citation_count);
        score_b.total_cmp(&score_a)
    });
    papers
}

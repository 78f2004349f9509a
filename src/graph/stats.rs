use serde::Serialize;

use super::Node;

/// Identifies one paper in summaries
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaperSummary {
    pub id: String,
    pub title: String,
    pub citation_count: u64,
}

impl From<&Node> for PaperSummary {
    fn from(node: &Node) -> Self {
        Self {
            id: node.paper.id.clone(),
            title: node.paper.title.clone(),
            citation_count: node.citation_count(),
        }
    }
}

/// Aggregates over the currently visible nodes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkStats {
    pub total_papers: usize,
    pub most_cited: PaperSummary,
    pub avg_citations: f64,
    /// Average citations per year of average age
    pub citation_velocity: f64,
    pub year_range: String,
}

/// Compute stats over `nodes`; `None` when there are none
pub fn network_stats(nodes: &[Node], current_year: i32) -> Option<NetworkStats> {
    let first = nodes.first()?;

    let most_cited = nodes.iter().skip(1).fold(first, |best, node| {
        if node.citation_count() > best.citation_count() {
            node
        } else {
            best
        }
    });

    let total_citations: f64 = nodes.iter().map(|n| n.citation_count() as f64).sum();
    let avg_citations = total_citations / nodes.len() as f64;

    let years: Vec<i32> = nodes.iter().filter_map(|n| n.paper.publication_year).collect();

    let citation_velocity = if years.is_empty() {
        avg_citations
    } else {
        let avg_year = years.iter().map(|&y| y as f64).sum::<f64>() / years.len() as f64;
        let avg_age = current_year as f64 - avg_year;
        if avg_age > 0.0 {
            avg_citations / avg_age
        } else {
            avg_citations
        }
    };

    let year_range = match (years.iter().min(), years.iter().max()) {
        (Some(min), Some(max)) => format!("{}-{}", min, max),
        _ => "N/A".to_string(),
    };

    Some(NetworkStats {
        total_papers: nodes.len(),
        most_cited: PaperSummary::from(most_cited),
        avg_citations,
        citation_velocity,
        year_range,
    })
}

use serde::Serialize;
use std::collections::{HashMap, HashSet};

use super::{Graph, Node};

pub const DEFAULT_RELATED_CAP: usize = 5;
pub const DEFAULT_READING_PATH_LEN: usize = 3;

/// Direct citation neighbors of the focal paper
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RelatedPapers {
    /// Papers the focal paper cites
    pub foundational: Vec<Node>,
    /// Papers citing the focal paper
    pub building_on: Vec<Node>,
    /// Outgoing citations of the focal paper before capping
    pub total_references: usize,
}

fn collect_ranked<'a>(graph: &'a Graph, ids: impl Iterator<Item = &'a str>, cap: usize) -> Vec<Node> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut nodes: Vec<&Node> = ids
        .filter(|id| seen.insert(*id))
        .filter_map(|id| graph.node(id))
        .collect();
    nodes.sort_by(|a, b| b.citation_count().cmp(&a.citation_count()));
    nodes.into_iter().take(cap).cloned().collect()
}

/// Rank the focal paper's neighbors in both citation directions
pub fn related(graph: &Graph, focal_id: &str, cap: usize) -> RelatedPapers {
    let outgoing = graph.edges().iter().filter(|e| e.citing() == focal_id);
    let incoming = graph.edges().iter().filter(|e| e.cited() == focal_id);

    RelatedPapers {
        foundational: collect_ranked(graph, outgoing.clone().map(|e| e.cited()), cap),
        building_on: collect_ranked(graph, incoming.map(|e| e.citing()), cap),
        total_references: outgoing.count(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredPrerequisite {
    #[serde(flatten)]
    pub node: Node,
    pub prerequisite_score: f64,
    /// How many papers in this graph cite it
    pub cited_by_in_network: usize,
}

/// Suggested reading order ending at the focal paper
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReadingPath {
    pub prerequisites: Vec<ScoredPrerequisite>,
    pub path: Vec<String>,
    pub total_references: usize,
}

/// Pick the best-connected, most cited and oldest references to read first
pub fn reading_path(graph: &Graph, focal_id: &str, current_year: i32, len: usize) -> ReadingPath {
    let Some(focal) = graph.node(focal_id) else {
        return ReadingPath::default();
    };

    let mut in_degree: HashMap<&str, usize> = HashMap::new();
    for edge in graph.edges() {
        *in_degree.entry(edge.cited()).or_insert(0) += 1;
    }

    let references: Vec<&Node> = graph
        .edges()
        .iter()
        .filter(|e| e.citing() == focal_id)
        .filter_map(|e| graph.node(e.cited()))
        .collect();
    let total_references = references.len();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut scored: Vec<ScoredPrerequisite> = references
        .into_iter()
        .filter(|node| seen.insert(node.id()))
        .map(|node| {
            let degree = in_degree.get(node.id()).copied().unwrap_or(0);
            let age = node
                .paper
                .publication_year
                .map_or(0, |year| current_year.saturating_sub(year)) as f64;
            ScoredPrerequisite {
                node: node.clone(),
                prerequisite_score: degree as f64 * 100.0 + node.citation_count() as f64 * 0.1 + age * 2.0,
                cited_by_in_network: degree,
            }
        })
        .collect();

    scored.sort_by(|a, b| b.prerequisite_score.total_cmp(&a.prerequisite_score));
    scored.truncate(len);

    let mut path: Vec<String> = scored.iter().map(|p| p.node.paper.id.clone()).collect();
    path.push(focal.paper.id.clone());

    ReadingPath {
        prerequisites: scored,
        path,
        total_references,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{project, RawGraph};

    fn graph(json: &str) -> Graph {
        let raw: RawGraph = serde_json::from_str(json).unwrap();
        project(raw)
    }

    fn ids(nodes: &[Node]) -> Vec<&str> {
        nodes.iter().map(Node::id).collect()
    }

    #[test]
    fn test_worked_example() {
        let g = graph(
            r#"{"nodes": [{"id": "A", "type": "main"}, {"id": "B"}, {"id": "C"}],
                "edges": [{"source": "A", "target": "B"}, {"source": "C", "target": "A"}]}"#,
        );
        let result = related(&g, "A", DEFAULT_RELATED_CAP);
        assert_eq!(ids(&result.foundational), vec!["B"]);
        assert_eq!(ids(&result.building_on), vec!["C"]);
        assert_eq!(result.total_references, 1);
    }

    #[test]
    fn test_sorted_capped_and_deduplicated() {
        let mut nodes = vec![r#"{"id": "A", "type": "main"}"#.to_string()];
        let mut edges = Vec::new();
        for i in 0..8 {
            nodes.push(format!(r#"{{"id": "R{}", "citation_count": {}}}"#, i, i * 10));
            edges.push(format!(r#"{{"source": "A", "target": "R{}"}}"#, i));
        }
        edges.push(r#"{"source": "A", "target": "R7"}"#.to_string());
        let g = graph(&format!(
            r#"{{"nodes": [{}], "edges": [{}]}}"#,
            nodes.join(","),
            edges.join(",")
        ));

        let result = related(&g, "A", DEFAULT_RELATED_CAP);
        assert_eq!(ids(&result.foundational), vec!["R7", "R6", "R5", "R4", "R3"]);
        assert_eq!(result.total_references, 9);
        assert!(result.total_references >= result.foundational.len());
        assert!(result.building_on.is_empty());
    }

    #[test]
    fn test_cited_by_edges_point_the_other_way() {
        let g = graph(
            r#"{"nodes": [{"id": "A"}, {"id": "B"}],
                "edges": [{"source": "A", "target": "B", "type": "is-cited-by"}]}"#,
        );
        let result = related(&g, "A", 5);
        assert!(result.foundational.is_empty());
        assert_eq!(ids(&result.building_on), vec!["B"]);
    }

    #[test]
    fn test_unknown_focal_is_empty() {
        let g = graph(r#"{"nodes": [{"id": "A"}], "edges": []}"#);
        let result = related(&g, "Z", 5);
        assert_eq!(result, RelatedPapers::default());
        assert_eq!(reading_path(&g, "Z", 2024, 3), ReadingPath::default());
    }

    #[test]
    fn test_reading_path_prefers_connected_references() {
        let g = graph(
            r#"{"nodes": [{"id": "A", "publication_year": 2020},
                          {"id": "B", "publication_year": 2010, "citation_count": 50},
                          {"id": "C", "publication_year": 2019, "citation_count": 5000},
                          {"id": "D", "publication_year": 2015, "citation_count": 10},
                          {"id": "E", "publication_year": 2000}],
                "edges": [{"source": "A", "target": "B"}, {"source": "A", "target": "C"},
                          {"source": "A", "target": "D"}, {"source": "A", "target": "E"},
                          {"source": "C", "target": "B"}, {"source": "D", "target": "B"}]}"#,
        );
        let path = reading_path(&g, "A", 2024, DEFAULT_READING_PATH_LEN);
        // B: 3*100 + 5 + 28; C: 100 + 500 + 10; E: 100 + 0 + 48; D: 100 + 1 + 18
        let order: Vec<&str> = path.prerequisites.iter().map(|p| p.node.id()).collect();
        assert_eq!(order, vec!["C", "B", "E"]);
        assert_eq!(path.path, vec!["C", "B", "E", "A"]);
        assert_eq!(path.total_references, 4);
        assert_eq!(path.prerequisites[1].cited_by_in_network, 3);
    }

    #[test]
    fn test_reading_path_with_extreme_year() {
        let g = graph(
            r#"{"nodes": [{"id": "A", "type": "main"}, {"id": "B", "publication_year": -2147483648}],
                "edges": [{"source": "A", "target": "B"}]}"#,
        );
        let path = reading_path(&g, "A", 2024, DEFAULT_READING_PATH_LEN);
        assert_eq!(path.path, vec!["B", "A"]);
        assert!(path.prerequisites[0].prerequisite_score.is_finite());
    }
}

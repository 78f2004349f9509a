//! Citation graph around a focal paper: projection from the raw payload,
//! visual attributes, filtering, aggregate statistics and neighbor ranking.

pub mod filter;
pub mod projector;
pub mod related;
pub mod stats;
pub mod visual;

pub use filter::{filter, NetworkFilter, PaperTypeFilter};
pub use projector::{project, EndpointRef, RawEdge, RawGraph, RawNode};
pub use related::{reading_path, related, ReadingPath, RelatedPapers, ScoredPrerequisite};
pub use stats::{network_stats, NetworkStats, PaperSummary};
pub use visual::{render, ColorScheme, RenderGraph, RenderNode, VisualConfig};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::common::Paper;

/// Position of a node relative to the focal paper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    /// The focal paper
    Main,
    /// Cites the focal paper
    Citing,
    /// Cited by the focal paper
    Referenced,
    Other,
}

impl NodeRole {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "main" | "center" | "focal" => NodeRole::Main,
            "citing" | "citation" => NodeRole::Citing,
            "referenced" | "reference" | "cited" => NodeRole::Referenced,
            _ => NodeRole::Other,
        }
    }
}

/// How an edge's endpoints relate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Source cites target
    References,
    /// Source is cited by target
    CitedBy,
    /// Untagged; read as source cites target
    Implicit,
}

impl EdgeKind {
    pub fn parse(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return EdgeKind::Implicit;
        };
        match value.trim().to_lowercase().replace('-', "_").as_str() {
            "cites" | "references" | "reference" | "references_target" => EdgeKind::References,
            "cited_by" | "is_cited_by" => EdgeKind::CitedBy,
            _ => EdgeKind::Implicit,
        }
    }
}

/// Directed edge between two node ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub kind: EdgeKind,
}

impl Edge {
    pub fn new(source: &str, target: &str, kind: EdgeKind) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            kind,
        }
    }

    pub fn cites(source: &str, target: &str) -> Self {
        Self::new(source, target, EdgeKind::References)
    }

    /// Id of the paper doing the citing
    pub fn citing(&self) -> &str {
        match self.kind {
            EdgeKind::CitedBy => &self.target,
            EdgeKind::References | EdgeKind::Implicit => &self.source,
        }
    }

    /// Id of the paper being cited
    pub fn cited(&self) -> &str {
        match self.kind {
            EdgeKind::CitedBy => &self.source,
            EdgeKind::References | EdgeKind::Implicit => &self.target,
        }
    }
}

/// Transient simulation state owned by the renderer. Never written here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutState {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    #[serde(flatten)]
    pub paper: Paper,
    #[serde(rename = "type")]
    pub role: NodeRole,
    #[serde(skip)]
    pub layout: LayoutState,
}

impl Node {
    pub fn id(&self) -> &str {
        &self.paper.id
    }

    pub fn citation_count(&self) -> u64 {
        self.paper.citation_count
    }
}

/// Projected citation graph
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    center: Option<String>,
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Build from nodes and edges as given. Ids must be unique.
    pub(crate) fn from_parts(center: Option<String>, nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        let index = nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (node.paper.id.clone(), i))
            .collect();
        Self {
            center,
            nodes,
            index,
            edges,
        }
    }

    pub fn center(&self) -> Option<&str> {
        self.center.as_deref()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn is_center(&self, id: &str) -> bool {
        self.center.as_deref() == Some(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_kind_parse() {
        assert_eq!(EdgeKind::parse(Some("cites")), EdgeKind::References);
        assert_eq!(EdgeKind::parse(Some("references")), EdgeKind::References);
        assert_eq!(EdgeKind::parse(Some("is-cited-by")), EdgeKind::CitedBy);
        assert_eq!(EdgeKind::parse(Some("cited_by")), EdgeKind::CitedBy);
        assert_eq!(EdgeKind::parse(Some("related")), EdgeKind::Implicit);
        assert_eq!(EdgeKind::parse(None), EdgeKind::Implicit);
    }

    #[test]
    fn test_edge_direction_follows_kind() {
        let forward = Edge::cites("A", "B");
        assert_eq!((forward.citing(), forward.cited()), ("A", "B"));

        let inverse = Edge::new("A", "B", EdgeKind::CitedBy);
        assert_eq!((inverse.citing(), inverse.cited()), ("B", "A"));
    }

    #[test]
    fn test_node_role_parse() {
        assert_eq!(NodeRole::parse("main"), NodeRole::Main);
        assert_eq!(NodeRole::parse("Citing"), NodeRole::Citing);
        assert_eq!(NodeRole::parse("referenced"), NodeRole::Referenced);
        assert_eq!(NodeRole::parse("something"), NodeRole::Other);
    }

    #[test]
    fn test_edge_serialization() {
        let json = serde_json::to_value(Edge::new("A", "B", EdgeKind::CitedBy)).unwrap();
        assert_eq!(json["type"], "cited_by");
        assert_eq!(json["source"], "A");
    }
}

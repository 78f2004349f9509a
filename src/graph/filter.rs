use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{Graph, Node, NodeRole};

/// Which side of the focal paper to keep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PaperTypeFilter {
    #[default]
    All,
    /// Papers the focal paper builds on
    Foundational,
    /// Papers building on the focal paper
    Influential,
}

impl PaperTypeFilter {
    pub fn keeps(&self, role: NodeRole) -> bool {
        match self {
            PaperTypeFilter::All => true,
            PaperTypeFilter::Foundational => matches!(role, NodeRole::Referenced | NodeRole::Main),
            PaperTypeFilter::Influential => matches!(role, NodeRole::Citing | NodeRole::Main),
        }
    }
}

/// User-selected network predicates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkFilter {
    pub paper_type: PaperTypeFilter,
    pub min_citations: u64,
}

impl NetworkFilter {
    pub fn new(paper_type: PaperTypeFilter, min_citations: u64) -> Self {
        Self {
            paper_type,
            min_citations,
        }
    }

    pub fn keeps(&self, node: &Node) -> bool {
        self.paper_type.keeps(node.role) && node.citation_count() >= self.min_citations
    }

    pub fn is_noop(&self) -> bool {
        self.paper_type == PaperTypeFilter::All && self.min_citations == 0
    }
}

/// Apply a filter, keeping only edges whose endpoints both survive.
///
/// Idempotent: filtering the result again with the same filter is a no-op.
pub fn filter(graph: &Graph, network_filter: &NetworkFilter) -> Graph {
    if network_filter.is_noop() {
        return graph.clone();
    }

    let nodes: Vec<Node> = graph
        .nodes()
        .iter()
        .filter(|node| network_filter.keeps(node))
        .cloned()
        .collect();

    let kept: HashSet<&str> = nodes.iter().map(Node::id).collect();
    let edges = graph
        .edges()
        .iter()
        .filter(|e| kept.contains(e.source.as_str()) && kept.contains(e.target.as_str()))
        .cloned()
        .collect();

    Graph::from_parts(graph.center().map(str::to_string), nodes, edges)
}

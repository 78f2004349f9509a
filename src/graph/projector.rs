use log::debug;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;

use super::{Edge, EdgeKind, Graph, LayoutState, Node, NodeRole};
use crate::common::Paper;

/// Edge endpoint as it arrives: a bare id or an embedded node object
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EndpointRef {
    Id(String),
    Node { id: String },
}

impl EndpointRef {
    pub fn id(&self) -> &str {
        match self {
            EndpointRef::Id(id) => id,
            EndpointRef::Node { id } => id,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawEdge {
    pub source: EndpointRef,
    pub target: EndpointRef,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Graph node as delivered: a paper record plus an optional `type` flag
#[derive(Debug, Clone)]
pub struct RawNode {
    pub paper: Paper,
    pub role: Option<String>,
}

impl<'de> Deserialize<'de> for RawNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let role = value.get("type").and_then(Value::as_str).map(str::to_string);
        let paper = Paper::deserialize(value).map_err(serde::de::Error::custom)?;
        Ok(Self { paper, role })
    }
}

/// Graph payload for one focal paper
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGraph {
    #[serde(default)]
    pub nodes: Vec<RawNode>,
    #[serde(default)]
    pub edges: Vec<RawEdge>,
    #[serde(default, alias = "centerNode")]
    pub center_node: Option<String>,
}

fn infer_role(id: &str, center: Option<&str>, edges: &[Edge]) -> NodeRole {
    let Some(center) = center else {
        return NodeRole::Other;
    };
    if id == center {
        return NodeRole::Main;
    }
    if edges.iter().any(|e| e.citing() == id && e.cited() == center) {
        NodeRole::Citing
    } else if edges.iter().any(|e| e.citing() == center && e.cited() == id) {
        NodeRole::Referenced
    } else {
        NodeRole::Other
    }
}

/// Convert a raw payload into a [`Graph`].
///
/// A repeated node id keeps its first position with the latest record.
/// Edges with an endpoint outside the node set are dropped here.
pub fn project(raw: RawGraph) -> Graph {
    let mut positions: HashMap<String, usize> = HashMap::with_capacity(raw.nodes.len());
    let mut entries: Vec<RawNode> = Vec::with_capacity(raw.nodes.len());
    for node in raw.nodes {
        match positions.get(&node.paper.id) {
            Some(&i) => entries[i] = node,
            None => {
                positions.insert(node.paper.id.clone(), entries.len());
                entries.push(node);
            }
        }
    }

    let center = raw
        .center_node
        .filter(|id| positions.contains_key(id))
        .or_else(|| {
            entries
                .iter()
                .find(|n| n.role.as_deref().map(NodeRole::parse) == Some(NodeRole::Main))
                .map(|n| n.paper.id.clone())
        });

    let total_edges = raw.edges.len();
    let edges: Vec<Edge> = raw
        .edges
        .into_iter()
        .map(|e| Edge::new(e.source.id(), e.target.id(), EdgeKind::parse(e.kind.as_deref())))
        .filter(|e| positions.contains_key(&e.source) && positions.contains_key(&e.target))
        .collect();

    if edges.len() < total_edges {
        debug!(
            "Dropped {} of {} edges with endpoints outside the node set",
            total_edges - edges.len(),
            total_edges
        );
    }

    let nodes = entries
        .into_iter()
        .map(|raw_node| {
            let is_center = center.as_deref() == Some(raw_node.paper.id.as_str());
            let role = match raw_node.role.as_deref().map(NodeRole::parse) {
                _ if is_center => NodeRole::Main,
                // Only the resolved center keeps the main role
                Some(NodeRole::Main) => NodeRole::Other,
                Some(flagged) => flagged,
                None => infer_role(&raw_node.paper.id, center.as_deref(), &edges),
            };
            Node {
                paper: raw_node.paper,
                role,
                layout: LayoutState::default(),
            }
        })
        .collect();

    Graph::from_parts(center, nodes, edges)
}

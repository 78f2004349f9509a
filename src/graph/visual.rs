use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::{Edge, Graph, Node, NodeRole};

pub const CENTER_COLOR: &str = "#ffffff";
pub const CITING_COLOR: &str = "#10b981";
pub const REFERENCED_COLOR: &str = "#3b82f6";
pub const NEUTRAL_COLOR: &str = "#6b7280";

/// Citation-tier bands, highest first
pub const TIER_COLORS: [(u64, &str); 3] = [(10_000, "#f59e0b"), (1_000, "#8b5cf6"), (0, "#64748b")];

/// How node colors are chosen. A projection uses exactly one scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ColorScheme {
    /// Center, citing, referenced, other
    #[default]
    Role,
    /// Three fixed bands by citation count
    CitationTier,
}

/// Inputs to the renderer's node styling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualConfig {
    pub min_size: f64,
    pub max_size: f64,
    pub scale_factor: f64,
    pub color_scheme: ColorScheme,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            min_size: 12.0,
            max_size: 35.0,
            scale_factor: 2.5,
            color_scheme: ColorScheme::Role,
        }
    }
}

impl VisualConfig {
    /// Radius on a log scale so heavily cited outliers do not dominate
    pub fn node_size(&self, citation_count: u64) -> f64 {
        let size = self.min_size + (citation_count as f64 + 1.0).ln() * self.scale_factor;
        size.clamp(self.min_size, self.max_size.max(self.min_size))
    }

    pub fn node_color(&self, node: &Node, graph: &Graph) -> &'static str {
        match self.color_scheme {
            ColorScheme::Role => {
                if graph.is_center(node.id()) {
                    return CENTER_COLOR;
                }
                match node.role {
                    NodeRole::Citing => CITING_COLOR,
                    NodeRole::Referenced => REFERENCED_COLOR,
                    NodeRole::Main | NodeRole::Other => NEUTRAL_COLOR,
                }
            }
            ColorScheme::CitationTier => TIER_COLORS
                .iter()
                .find(|&&(floor, _)| node.citation_count() >= floor)
                .map_or(NEUTRAL_COLOR, |&(_, color)| color),
        }
    }
}

/// Node as handed to the renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderNode {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    pub citation_count: u64,
    #[serde(rename = "type")]
    pub role: NodeRole,
    pub size: f64,
    pub color: &'static str,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderGraph {
    pub center_node: Option<String>,
    pub nodes: Vec<RenderNode>,
    pub edges: Vec<Edge>,
}

/// Read-only render view of a graph
pub fn render(graph: &Graph, config: &VisualConfig) -> RenderGraph {
    let nodes = graph
        .nodes()
        .iter()
        .map(|node| RenderNode {
            id: node.paper.id.clone(),
            title: node.paper.title.clone(),
            year: node.paper.publication_year,
            citation_count: node.citation_count(),
            role: node.role,
            size: config.node_size(node.citation_count()),
            color: config.node_color(node, graph),
            x: node.layout.x,
            y: node.layout.y,
            vx: node.layout.vx,
            vy: node.layout.vy,
        })
        .collect();

    RenderGraph {
        center_node: graph.center().map(str::to_string),
        nodes,
        edges: graph.edges().to_vec(),
    }
}

use anyhow::Result;
use log::{info, warn};
use serde::Serialize;
use std::time::Instant;

use crate::cli::GraphArgs;
use crate::common::{
    format_citation_count, format_elapsed, read_graph_payload, resolve_now, setup_logging,
    truncate_text, write_json, GraphStats,
};
use crate::graph::{
    filter, network_stats, project, reading_path, related, render, NetworkFilter, NetworkStats,
    RawGraph, ReadingPath, RelatedPapers, RenderGraph, VisualConfig,
};

/// Everything the graph and stats panels need for one focal paper
#[derive(Debug, Serialize)]
pub struct GraphReport {
    pub focal: Option<String>,
    pub filter: NetworkFilter,
    pub graph: RenderGraph,
    pub filtered: RenderGraph,
    pub stats: Option<NetworkStats>,
    pub related: Option<RelatedPapers>,
    pub reading_path: Option<ReadingPath>,
}

pub fn run_graph(args: GraphArgs) -> Result<GraphStats> {
    let start_time = Instant::now();

    setup_logging(&args.log_level)?;

    let now = resolve_now(args.now.as_deref())?;

    info!("Starting citation graph analysis");
    info!("Input: {}", args.input);
    info!("Output: {}", args.output);

    let raw: RawGraph = read_graph_payload(&args.input)?;
    let raw_edges = raw.edges.len();
    let graph = project(raw);

    let visual = VisualConfig {
        min_size: args.min_size,
        max_size: args.max_size,
        scale_factor: args.scale_factor,
        color_scheme: args.color_scheme,
    };
    let network_filter = NetworkFilter::new(args.paper_type, args.min_citations);

    let filtered = filter(&graph, &network_filter);
    let stats = network_stats(filtered.nodes(), now.year());

    let focal = args.focal.clone().or_else(|| graph.center().map(str::to_string));
    let (related_papers, path) = match focal.as_deref() {
        Some(focal_id) if graph.contains(focal_id) => (
            Some(related(&graph, focal_id, args.related_cap)),
            Some(reading_path(&graph, focal_id, now.year(), args.reading_path_len)),
        ),
        Some(focal_id) => {
            warn!("Focal paper {} is not in the graph", focal_id);
            (None, None)
        }
        None => {
            warn!("Graph has no center node and no --focal was given");
            (None, None)
        }
    };

    let summary = GraphStats {
        nodes: graph.len(),
        edges: graph.edges().len(),
        dropped_edges: raw_edges - graph.edges().len(),
        filtered_nodes: filtered.len(),
        filtered_edges: filtered.edges().len(),
    };

    let report = GraphReport {
        focal,
        filter: network_filter,
        graph: render(&graph, &visual),
        filtered: render(&filtered, &visual),
        stats,
        related: related_papers,
        reading_path: path,
    };

    write_json(&args.output, &report)?;

    info!("==================== FINAL SUMMARY ====================");
    info!("Total execution time: {}", format_elapsed(start_time.elapsed()));
    info!("Nodes: {} | Edges: {} | Dropped edges: {}", summary.nodes, summary.edges, summary.dropped_edges);
    info!(
        "After filter ({:?}, min citations {}): {} nodes, {} edges",
        network_filter.paper_type, network_filter.min_citations, summary.filtered_nodes, summary.filtered_edges
    );
    match &report.stats {
        Some(s) => {
            info!(
                "Most cited: {} ({} citations)",
                truncate_text(&s.most_cited.title, 50),
                format_citation_count(s.most_cited.citation_count)
            );
            info!(
                "Avg citations: {:.0} | Velocity: {:.0}/yr | Years: {}",
                s.avg_citations, s.citation_velocity, s.year_range
            );
        }
        None => info!("No papers match the current filter"),
    }
    if let Some(r) = &report.related {
        info!(
            "Related: showing {} of {} references, {} citing papers",
            r.foundational.len(),
            r.total_references,
            r.building_on.len()
        );
    }
    info!("Output file: {}", args.output);
    info!("========================================================");

    Ok(summary)
}

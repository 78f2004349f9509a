use clap::{Parser, Subcommand};

use crate::classify::{Category, CategoryStrategy, ComplexityLevel};
use crate::graph::related::{DEFAULT_READING_PATH_LEN, DEFAULT_RELATED_CAP};
use crate::graph::{ColorScheme, PaperTypeFilter};

#[derive(Parser)]
#[command(name = "citation-graph-analytics")]
#[command(about = "Classify papers and analyze the citation graph around a focal paper")]
#[command(version = "1.0.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify search-result papers by impact category and reading difficulty
    Classify(ClassifyArgs),

    /// Project a citation graph, apply network filters, and rank related papers
    Graph(GraphArgs),
}

#[derive(Parser, Clone)]
pub struct ClassifyArgs {
    /// Papers as a JSON array, a {"results": [...]} page, or JSONL (optionally .gz)
    #[arg(short, long, required = true)]
    pub input: String,

    /// Output JSONL file with classified papers
    #[arg(short, long, default_value = "classified.jsonl")]
    pub output: String,

    /// Category rule set
    #[arg(long, value_enum, default_value = "momentum")]
    pub strategy: CategoryStrategy,

    /// Keep only this category, in its browsing order (default: all, by relevance)
    #[arg(long, value_enum)]
    pub category: Option<Category>,

    /// Keep only this complexity level
    #[arg(long, value_enum)]
    pub complexity: Option<ComplexityLevel>,

    /// Maximum number of input papers to classify
    #[arg(long, default_value = "100")]
    pub limit: usize,

    /// Reference date for ages (YYYY-MM-DD, default: today UTC)
    #[arg(long)]
    pub now: Option<String>,

    /// Attach abstract highlights to each paper
    #[arg(long, default_value = "false")]
    pub insights: bool,

    /// Also write per-category and per-complexity counts to this JSON file
    #[arg(long)]
    pub counts_output: Option<String>,

    /// Logging level (DEBUG, INFO, WARN, ERROR)
    #[arg(short, long, default_value = "INFO")]
    pub log_level: String,
}

#[derive(Parser, Clone)]
pub struct GraphArgs {
    /// Graph payload JSON: {nodes, edges, center_node}
    #[arg(short, long, required = true)]
    pub input: String,

    /// Output JSON report
    #[arg(short, long, default_value = "graph_report.json")]
    pub output: String,

    /// Focal paper id (default: the graph's center node)
    #[arg(long)]
    pub focal: Option<String>,

    /// Which side of the focal paper to keep
    #[arg(long, value_enum, default_value = "all")]
    pub paper_type: PaperTypeFilter,

    /// Drop nodes with fewer citations
    #[arg(long, default_value = "0")]
    pub min_citations: u64,

    /// Node coloring scheme
    #[arg(long, value_enum, default_value = "role")]
    pub color_scheme: ColorScheme,

    /// Smallest node radius
    #[arg(long, default_value = "12")]
    pub min_size: f64,

    /// Largest node radius
    #[arg(long, default_value = "35")]
    pub max_size: f64,

    /// Radius added per unit of ln(citations + 1)
    #[arg(long, default_value = "2.5")]
    pub scale_factor: f64,

    /// Maximum papers per related list
    #[arg(long, default_value_t = DEFAULT_RELATED_CAP)]
    pub related_cap: usize,

    /// Number of prerequisite papers in the reading path
    #[arg(long, default_value_t = DEFAULT_READING_PATH_LEN)]
    pub reading_path_len: usize,

    /// Reference date for ages (YYYY-MM-DD, default: today UTC)
    #[arg(long)]
    pub now: Option<String>,

    /// Logging level (DEBUG, INFO, WARN, ERROR)
    #[arg(short, long, default_value = "INFO")]
    pub log_level: String,
}

pub mod classify;
pub mod graph;

pub use classify::run_classify;
pub use graph::run_graph;

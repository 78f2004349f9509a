use anyhow::Result;
use clap::Parser;

use citation_graph_analytics::cli::{Cli, Commands};
use citation_graph_analytics::commands::{run_classify, run_graph};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Classify(args) => {
            run_classify(args)?;
        }
        Commands::Graph(args) => {
            run_graph(args)?;
        }
    }

    Ok(())
}

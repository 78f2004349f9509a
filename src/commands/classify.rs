use anyhow::Result;
use log::{debug, info};
use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;

use crate::classify::{
    category_counts, complexity_counts, extract_insights, filter_by_complexity, rank, sort_by_category,
    CategoryCounts, ClassifiedPaper, Classifier, ComplexityCounts,
};
use crate::cli::ClassifyArgs;
use crate::common::{
    create_count_progress_bar, format_elapsed, read_papers, resolve_now, setup_logging, write_json,
    write_jsonl, ClassifyStats,
};

#[derive(Debug, Serialize)]
struct ClassificationCounts {
    categories: CategoryCounts,
    complexity: ComplexityCounts,
}

pub fn run_classify(args: ClassifyArgs) -> Result<ClassifyStats> {
    let start_time = Instant::now();

    setup_logging(&args.log_level)?;

    let now = resolve_now(args.now.as_deref())?;

    info!("Starting paper classification");
    info!("Input: {}", args.input);
    info!("Output: {}", args.output);
    info!("Strategy: {}", args.strategy.as_str());
    info!("Reference date: {}", now);

    let mut papers = read_papers(&args.input)?;
    let papers_read = papers.len();
    if papers.len() > args.limit {
        debug!("Keeping first {} of {} papers", args.limit, papers.len());
        papers.truncate(args.limit);
    }

    let classifier = Classifier::new(args.strategy);
    let pb = create_count_progress_bar(papers.len() as u64, "classifying");

    let classified: Vec<ClassifiedPaper> = papers
        .into_par_iter()
        .map(|paper| {
            let insights = if args.insights { extract_insights(&paper) } else { None };
            let mut result = classifier.classify_paper(paper, now);
            result.insights = insights;
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_and_clear();

    let counts = ClassificationCounts {
        categories: category_counts(&classified),
        complexity: complexity_counts(&classified),
    };

    let mut selected = match args.category {
        Some(category) => {
            info!("Selecting category: {}", category);
            sort_by_category(&classified, category)
        }
        None => rank(classified.clone()),
    };

    if let Some(level) = args.complexity {
        info!("Selecting complexity level: {}", level);
        selected = filter_by_complexity(&selected, level);
    }

    let papers_written = write_jsonl(&args.output, &selected)?;

    if let Some(counts_path) = &args.counts_output {
        write_json(counts_path, &counts)?;
    }

    let stats = ClassifyStats {
        papers_read,
        papers_classified: classified.len(),
        uncategorized: counts.categories.uncategorized,
        papers_written,
    };

    info!("==================== FINAL SUMMARY ====================");
    info!("Total execution time: {}", format_elapsed(start_time.elapsed()));
    info!("Papers read: {}", stats.papers_read);
    info!("Papers classified: {}", stats.papers_classified);
    info!(
        "Foundational: {} | Trending: {} | Highly Cited: {} | Emerging: {} | Established: {} | Recent: {}",
        counts.categories.foundational,
        counts.categories.trending,
        counts.categories.highly_cited,
        counts.categories.emerging,
        counts.categories.established,
        counts.categories.recent,
    );
    info!("Uncategorized: {}", stats.uncategorized);
    info!(
        "Beginner: {} | Intermediate: {} | Advanced: {}",
        counts.complexity.beginner, counts.complexity.intermediate, counts.complexity.advanced
    );
    info!("Papers written: {}", stats.papers_written);
    info!("Output file: {}", args.output);
    if let Some(counts_path) = &args.counts_output {
        info!("Counts file: {}", counts_path);
    }
    info!("========================================================");

    Ok(stats)
}

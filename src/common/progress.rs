use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar over a known number of papers
pub fn create_count_progress_bar(total_items: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total_items);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
    {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb.set_message(message.to_string());
    pb
}

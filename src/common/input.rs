use anyhow::{anyhow, Context, Result};
use flate2::read::GzDecoder;
use log::warn;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use super::types::Paper;

/// Open a file for reading, decompressing `.gz` transparently
pub fn open_input(path: &str) -> Result<Box<dyn BufRead>> {
    if !Path::new(path).exists() {
        return Err(anyhow!("Input file does not exist: {}", path));
    }
    let file = File::open(path).with_context(|| format!("Failed to open input file: {}", path))?;
    if path.ends_with(".gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

fn read_to_string(path: &str) -> Result<String> {
    let mut reader = open_input(path)?;
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .with_context(|| format!("Failed to read input file: {}", path))?;
    Ok(content)
}

/// Read paper records from a JSON array, a `{"results": [...]}` page, or JSONL.
///
/// Malformed JSONL lines are logged and skipped.
pub fn read_papers(path: &str) -> Result<Vec<Paper>> {
    let content = read_to_string(path)?;
    let trimmed = content.trim_start();

    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed)
            .with_context(|| format!("Failed to parse paper array: {}", path));
    }

    if trimmed.starts_with('{') {
        if let Ok(page) = serde_json::from_str::<Value>(trimmed) {
            if let Some(results) = page.get("results") {
                return serde_json::from_value(results.clone())
                    .with_context(|| format!("Failed to parse search results: {}", path));
            }
            // A single document spread over several lines cannot be JSONL
            if trimmed.trim_end().lines().count() > 1 {
                return Err(anyhow!(
                    "Input is a JSON object without a \"results\" array: {}",
                    path
                ));
            }
        }
    }

    Ok(parse_jsonl(&content))
}

fn parse_jsonl<T: DeserializeOwned>(content: &str) -> Vec<T> {
    let mut records = Vec::new();
    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<T>(line) {
            Ok(record) => records.push(record),
            Err(e) => warn!("Skipping malformed record on line {}: {}", line_no + 1, e),
        }
    }
    records
}

/// Read a graph payload, accepting it bare or wrapped as `{"graph": {...}}`
pub fn read_graph_payload<T: DeserializeOwned>(path: &str) -> Result<T> {
    let content = read_to_string(path)?;
    let mut value: Value =
        serde_json::from_str(&content).with_context(|| format!("Failed to parse graph JSON: {}", path))?;
    if let Some(inner) = value.get_mut("graph") {
        value = inner.take();
    }
    serde_json::from_value(value).with_context(|| format!("Invalid graph payload: {}", path))
}

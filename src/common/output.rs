use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};

/// Write one JSON document per line
pub fn write_jsonl<T: Serialize>(path: &str, records: &[T]) -> Result<usize> {
    let file = File::create(path).with_context(|| format!("Failed to create output file: {}", path))?;
    let mut writer = BufWriter::new(file);
    for record in records {
        serde_json::to_writer(&mut writer, record).context("Failed to serialize record")?;
        writer.write_all(b"\n")?;
    }
    writer.flush().with_context(|| format!("Failed to flush output file: {}", path))?;
    Ok(records.len())
}

/// Write a single pretty-printed JSON document
pub fn write_json<T: Serialize>(path: &str, value: &T) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create output file: {}", path))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).context("Failed to serialize output")?;
    writer.write_all(b"\n")?;
    writer.flush().with_context(|| format!("Failed to flush output file: {}", path))?;
    Ok(())
}

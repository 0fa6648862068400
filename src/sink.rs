use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

/// One collected listing link.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkRow {
    pub href: String,
}

/// One harvested contact. `email` is empty when a detail page had a name
/// but no decodable address.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactRow {
    pub name: String,
    pub email: String,
}

/// Append-only destination for scraped rows.
///
/// Rows are written in the order they are produced and never rewritten.
pub trait Sink<T> {
    fn append(&mut self, record: &T) -> Result<()>;
}

/// CSV file sink. `create` truncates any previous run's file and writes the
/// header up front; each `append` flushes, so a partial row is never
/// observable in the file.
pub struct CsvSink {
    writer: csv::Writer<File>,
}

impl CsvSink {
    pub fn create<P: AsRef<Path>>(path: P, header: &[&str]) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.write_record(header)?;
        writer.flush()?;
        Ok(Self { writer })
    }
}

impl<T: Serialize> Sink<T> for CsvSink {
    fn append(&mut self, record: &T) -> Result<()> {
        self.writer.serialize(record)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// In-memory sink for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySink<T> {
    pub rows: Vec<T>,
}

#[cfg(test)]
impl<T> MemorySink<T> {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }
}

#[cfg(test)]
impl<T: Clone> Sink<T> for MemorySink<T> {
    fn append(&mut self, record: &T) -> Result<()> {
        self.rows.push(record.clone());
        Ok(())
    }
}

// ── Tests ──

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// One scrape target: `name` keys the output filenames, `path` is the
/// URL suffix appended to the site root.
#[derive(Debug, Clone, Deserialize)]
pub struct Target {
    pub name: String,
    pub path: String,
}

/// Target catalog loaded from the subdomains JSON file.
#[derive(Debug, Deserialize)]
pub struct Catalog {
    pub data: Vec<Target>,
}

impl Catalog {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("Failed to parse catalog JSON")
    }

    pub fn get(&self, index: usize) -> Option<&Target> {
        self.data.get(index)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }
}

// ── Tests ──

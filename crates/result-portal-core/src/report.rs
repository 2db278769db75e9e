//! Result report type with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ResultSummary;

/// A computed result together with when and from what it was produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultReport {
    /// When the report was created.
    pub generated_at: DateTime<Utc>,
    /// Form file the result was computed from, if any.
    #[serde(default)]
    pub source: Option<String>,
    pub summary: ResultSummary,
}

impl ResultReport {
    pub fn new(summary: ResultSummary, source: Option<String>) -> Self {
        Self {
            generated_at: Utc::now(),
            source,
            summary,
        }
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize report")
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: ResultReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}

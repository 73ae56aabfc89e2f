//! Report output
//!
//! Writes a `PlanOutcome` as pretty-printed JSON, either to a file or to
//! stdout when no path is given.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use shared::PlanOutcome;

use crate::error::PlannerResult;
use crate::traits::ReportSink;

/// Pretty JSON report writer
#[derive(Debug, Clone, Default)]
pub struct JsonReportWriter {
    /// Target file; `None` writes to stdout
    path: Option<PathBuf>,
}

impl JsonReportWriter {
    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        Self { path: Some(path.into()) }
    }

    pub fn to_stdout() -> Self {
        Self { path: None }
    }

    pub fn render(outcome: &PlanOutcome) -> PlannerResult<String> {
        let mut json = serde_json::to_string_pretty(outcome)?;
        json.push('\n');
        Ok(json)
    }
}

#[async_trait]
impl ReportSink for JsonReportWriter {
    async fn write_report(&self, outcome: &PlanOutcome) -> PlannerResult<()> {
        let json = Self::render(outcome)?;

        match &self.path {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent).await?;
                }
                // Atomic replace through a sibling temp file
                let temp_path = path.with_extension("json.tmp");
                fs::write(&temp_path, json.as_bytes()).await?;
                fs::rename(&temp_path, path).await?;
                tracing::debug!(path = %path.display(), "Wrote plan report");
            }
            None => {
                let mut stdout = tokio::io::stdout();
                stdout.write_all(json.as_bytes()).await?;
                stdout.flush().await?;
            }
        }
        Ok(())
    }
}

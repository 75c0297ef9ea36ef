//! Versioned JSON envelope around the audit report.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use cps_model::AuditReport;

#[derive(Debug, Clone, Serialize)]
pub struct ReportEnvelope {
    pub schema: String,
    pub schema_version: u32,
    pub generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codebook: Option<String>,
    pub report: AuditReport,
}

impl ReportEnvelope {
    pub fn new(report: AuditReport, codebook: Option<&Path>) -> Self {
        Self {
            schema: "cps-audit.report".to_string(),
            schema_version: 1,
            generated_at: Utc::now().to_rfc3339(),
            codebook: codebook.map(|path| path.display().to_string()),
            report,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serialize audit report")
    }
}

pub fn write_json_report(envelope: &ReportEnvelope, path: &Path) -> Result<()> {
    let json = envelope.to_json()?;
    std::fs::write(path, json)
        .with_context(|| format!("write report: {}", path.display()))
}

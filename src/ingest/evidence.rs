use crate::error::{BaitScanError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// Evidence gathered after the initial pass: photo counts per unit id and
/// external report counts per listing URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EvidenceFile {
    pub photo_counts: BTreeMap<String, i32>,
    pub report_counts: BTreeMap<String, u32>,
}

impl EvidenceFile {
    pub fn is_empty(&self) -> bool {
        self.photo_counts.is_empty() && self.report_counts.is_empty()
    }
}

pub fn load_evidence(path: &Path) -> Result<EvidenceFile> {
    if !path.exists() {
        return Err(BaitScanError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let evidence: EvidenceFile = serde_json::from_str(&content)
        .map_err(|e| BaitScanError::InputParse(format!("{}: {}", path.display(), e)))?;
    info!(
        path = %path.display(),
        photo_counts = evidence.photo_counts.len(),
        report_counts = evidence.report_counts.len(),
        "loaded evidence"
    );
    Ok(evidence)
}

pub mod json;
pub mod md;

use crate::error::{BaitScanError, Result};
use crate::types::report::ScanReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &ScanReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(BaitScanError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

use crate::types::report::ScanReport;

pub fn to_json(report: &ScanReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

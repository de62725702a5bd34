use crate::types::scoring::{FactorKind, ScoreFactor};

pub fn report_count_factor(report_count: u32, weight: f64) -> ScoreFactor {
    let raw_score = match report_count {
        0 => 0,
        1 => 40,
        2 => 70,
        _ => 100,
    };
    let reason = if report_count == 0 {
        "no external reports".to_string()
    } else {
        format!("{report_count} external report(s)")
    };
    ScoreFactor::new(FactorKind::ReportCount, raw_score, weight, reason)
}

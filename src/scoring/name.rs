use crate::types::listing::ListingRecord;
use crate::types::scoring::{FactorKind, ScoreFactor};

pub fn missing_name_factor(record: &ListingRecord, weight: f64) -> ScoreFactor {
    if record.has_name() {
        ScoreFactor::new(FactorKind::MissingName, 0, weight, "building name given")
    } else {
        ScoreFactor::new(FactorKind::MissingName, 100, weight, "building name missing")
    }
}

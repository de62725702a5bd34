use crate::types::listing::AddressDetail;
use crate::types::scoring::{FactorKind, ScoreFactor};

pub fn address_factor(detail: AddressDetail, weight: f64) -> ScoreFactor {
    let (raw_score, reason) = match detail {
        AddressDetail::Full => (0, "street-level address given"),
        AddressDetail::Town => (40, "address stops at the town name"),
        AddressDetail::Ward => (80, "address stops at the ward or city"),
        AddressDetail::None => (100, "no usable address"),
    };
    ScoreFactor::new(FactorKind::AddressVagueness, raw_score, weight, reason)
}

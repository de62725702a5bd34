use crate::market::MarketTable;
use crate::types::listing::ListingRecord;
use crate::types::scoring::{FactorKind, ScoreFactor};

/// Full score when the rent undercuts the lowest plausible rent for the
/// region, regardless of room type or location.
pub fn implausibly_cheap_factor(
    record: &ListingRecord,
    market: &MarketTable,
    weight: f64,
) -> ScoreFactor {
    let kind = FactorKind::ImplausiblyCheap;
    if record.rent_man_yen <= 0.0 {
        return ScoreFactor::skipped(kind, weight, "rent unknown (skipped)");
    }

    let floor = market.minimum_plausible_rent(record.region);
    if record.rent_man_yen < floor {
        ScoreFactor::new(
            kind,
            100,
            weight,
            format!(
                "rent {:.2} is below the {} floor of {:.1}",
                record.rent_man_yen, record.region, floor
            ),
        )
    } else {
        ScoreFactor::new(
            kind,
            0,
            weight,
            format!("rent {:.2} is within the plausible range", record.rent_man_yen),
        )
    }
}

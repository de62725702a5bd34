use crate::market::{adjust_market_rent, MarketTable};
use crate::types::listing::ListingRecord;
use crate::types::scoring::{FactorKind, ScoreFactor};

/// Gap bands as (upper gap bound, raw score reached at that bound). Between
/// bounds the score ramps linearly from the previous band's score.
const GAP_BANDS: [(f64, u32); 4] = [(0.05, 0), (0.15, 30), (0.25, 60), (0.40, 100)];

pub fn price_gap_factor(record: &ListingRecord, market: &MarketTable, weight: f64) -> ScoreFactor {
    let kind = FactorKind::PriceGap;
    let Some(base) =
        market.lookup_market_rent(record.region, &record.subdivision, &record.layout)
    else {
        return ScoreFactor::skipped(
            kind,
            weight,
            format!(
                "no market data for {} {} (skipped)",
                record.region,
                if record.subdivision.is_empty() {
                    "-"
                } else {
                    record.subdivision.as_str()
                }
            ),
        );
    };
    if record.rent_man_yen <= 0.0 {
        return ScoreFactor::skipped(kind, weight, "rent unknown (skipped)");
    }

    let adjusted = adjust_market_rent(base, record.age_years, record.walk_minutes);
    if adjusted <= 0.0 {
        return ScoreFactor::skipped(kind, weight, "adjusted market rent unavailable (skipped)");
    }

    let gap = (adjusted - record.rent_man_yen) / adjusted;
    let raw_score = gap_score(gap);
    let reason = if gap <= 0.0 {
        format!(
            "rent {:.2} is at or above adjusted market rent {:.2} (table {:.1})",
            record.rent_man_yen, adjusted, base
        )
    } else {
        format!(
            "rent {:.2} is {:.0}% below adjusted market rent {:.2} (table {:.1})",
            record.rent_man_yen,
            gap * 100.0,
            adjusted,
            base
        )
    };
    ScoreFactor::new(kind, raw_score, weight, reason)
}

/// Maps a relative gap below market to a 0-100 raw score.
pub fn gap_score(gap: f64) -> u32 {
    let (first_bound, _) = GAP_BANDS[0];
    if gap <= first_bound {
        return 0;
    }

    let mut lower = GAP_BANDS[0];
    for upper in GAP_BANDS.iter().skip(1) {
        if gap <= upper.0 {
            let span = upper.0 - lower.0;
            let rise = f64::from(upper.1 - lower.1);
            return lower.1 + (rise * (gap - lower.0) / span).round() as u32;
        }
        lower = *upper;
    }
    100
}

pub mod data;

use crate::types::listing::Region;
use data::{OSAKA_MIN_RENT, OSAKA_RENT, STANDARD_LAYOUTS, TOKYO_MIN_RENT, TOKYO_RENT};
use std::collections::HashMap;

const AGE_DISCOUNT_PER_YEAR: f64 = 0.01;
const AGE_DISCOUNT_CAP: f64 = 0.30;
const WALK_FREE_MINUTES: i32 = 5;
const WALK_DISCOUNT_PER_MINUTE: f64 = 0.02;
const WALK_DISCOUNT_CAP: f64 = 0.20;

#[derive(Debug, Clone, Default)]
struct RegionTable {
    minimum_rent: f64,
    subdivisions: HashMap<String, HashMap<String, f64>>,
}

/// Region → subdivision → room type → average rent (万円), plus a rent floor
/// per region.
#[derive(Debug, Clone)]
pub struct MarketTable {
    regions: HashMap<Region, RegionTable>,
}

impl Default for MarketTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl MarketTable {
    pub fn empty() -> Self {
        Self {
            regions: HashMap::new(),
        }
    }

    /// Tokyo's 23 wards and Osaka's 24 wards.
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        table.set_minimum_rent(Region::Tokyo, TOKYO_MIN_RENT);
        table.set_minimum_rent(Region::Osaka, OSAKA_MIN_RENT);
        for (region, rows) in [
            (Region::Tokyo, &TOKYO_RENT[..]),
            (Region::Osaka, &OSAKA_RENT[..]),
        ] {
            for (subdivision, rents) in rows {
                for (layout, rent) in STANDARD_LAYOUTS.iter().zip(rents.iter()) {
                    table.insert(region, subdivision, layout, *rent);
                }
            }
        }
        table
    }

    pub fn insert(&mut self, region: Region, subdivision: &str, layout: &str, rent: f64) {
        self.regions
            .entry(region)
            .or_default()
            .subdivisions
            .entry(subdivision.to_string())
            .or_default()
            .insert(layout.to_string(), rent);
    }

    pub fn set_minimum_rent(&mut self, region: Region, rent: f64) {
        self.regions.entry(region).or_default().minimum_rent = rent;
    }

    /// Average rent for the unit's room type after folding it onto a cataloged
    /// type. `None` means the region or subdivision is not covered and the
    /// rent cannot be evaluated; it never means zero.
    pub fn lookup_market_rent(&self, region: Region, subdivision: &str, layout: &str) -> Option<f64> {
        let rents = self.regions.get(&region)?.subdivisions.get(subdivision)?;
        rents
            .get(lookup_layout(layout).as_str())
            .copied()
            .filter(|rent| *rent > 0.0)
    }

    /// Lowest rent a legitimate unit in `region` could plausibly ask.
    /// Regions without their own floor use Tokyo's.
    pub fn minimum_plausible_rent(&self, region: Region) -> f64 {
        self.regions
            .get(&region)
            .map(|table| table.minimum_rent)
            .filter(|rent| *rent > 0.0)
            .unwrap_or(TOKYO_MIN_RENT)
    }

    #[allow(dead_code)]
    pub fn subdivision_count(&self, region: Region) -> usize {
        self.regions
            .get(&region)
            .map(|table| table.subdivisions.len())
            .unwrap_or(0)
    }
}

/// Folds a room-type code onto one of the cataloged layouts, rounding up to
/// the nearest larger standard type.
pub fn lookup_layout(layout: &str) -> String {
    let upper: String = layout
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect::<String>()
        .to_uppercase();

    if STANDARD_LAYOUTS.contains(&upper.as_str()) {
        return upper;
    }

    let fallback = match upper.chars().next() {
        Some('2') if upper == "2K" => "2DK",
        Some('2') if upper.contains('L') => "2LDK",
        Some('2') => "2DK",
        Some('3') | Some('4') => "2LDK",
        Some('1') if upper.contains('L') => "1LDK",
        Some('1') if upper.contains('D') => "1DK",
        _ => "1K",
    };
    fallback.to_string()
}

/// Discounts the table rent for building age (1%/year, capped at 30%) and
/// walking distance (2%/minute beyond 5 minutes, capped at 20%). The two
/// discounts add; the result is rounded to two decimals. Unknown (negative)
/// age or distance earns no discount.
pub fn adjust_market_rent(base_rent: f64, age_years: i32, walk_minutes: i32) -> f64 {
    let age_discount = if age_years > 0 {
        (f64::from(age_years) * AGE_DISCOUNT_PER_YEAR).min(AGE_DISCOUNT_CAP)
    } else {
        0.0
    };
    let walk_discount = if walk_minutes > WALK_FREE_MINUTES {
        (f64::from(walk_minutes - WALK_FREE_MINUTES) * WALK_DISCOUNT_PER_MINUTE)
            .min(WALK_DISCOUNT_CAP)
    } else {
        0.0
    };

    let adjusted = base_rent * (1.0 - age_discount - walk_discount);
    (adjusted * 100.0).round() / 100.0
}

pub mod address;
pub mod building;
pub mod layout;
pub mod rent;

use crate::types::listing::{AddressDetail, ListingRecord, RawListing};
use chrono::{Datelike, Utc};

pub use address::{classify_address_detail, extract_region, extract_subdivision};
pub use building::{parse_age, parse_walk_minutes};
pub use layout::normalize_layout;
pub use rent::{parse_area, parse_management_fee, parse_rent};

/// Folds full-width ASCII (digits, Latin letters, punctuation) to half-width
/// and the ideographic space to a plain space.
pub fn fold_width(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            '\u{FF01}'..='\u{FF5E}' => char::from_u32(ch as u32 - 0xFEE0).unwrap_or(ch),
            '\u{3000}' => ' ',
            _ => ch,
        })
        .collect()
}

/// Folds width and drops all whitespace.
pub(crate) fn compact(text: &str) -> String {
    fold_width(text)
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect()
}

/// Turns raw listing fragments into a `ListingRecord`.
///
/// The only state is the calendar year used to convert a built year into an
/// age, so that results do not drift with the wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalizer {
    reference_year: i32,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(Utc::now().year())
    }
}

impl Normalizer {
    pub fn new(reference_year: i32) -> Self {
        Self { reference_year }
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    pub fn parse_age(&self, text: &str) -> i32 {
        parse_age(text, self.reference_year)
    }

    pub fn address_detail(&self, address: &str) -> AddressDetail {
        classify_address_detail(address)
    }

    pub fn normalize(&self, raw: &RawListing) -> ListingRecord {
        ListingRecord {
            name: raw.name.trim().to_string(),
            rent_man_yen: parse_rent(&raw.rent),
            management_fee_man_yen: parse_management_fee(&raw.management_fee),
            address: raw.address.trim().to_string(),
            region: extract_region(&raw.address),
            subdivision: extract_subdivision(&raw.address),
            layout: normalize_layout(&raw.layout),
            area_text: raw.area.trim().to_string(),
            area_sqm: parse_area(&raw.area),
            age_years: self.parse_age(&raw.age),
            walk_minutes: parse_walk_minutes(&raw.access),
            station: raw.access.trim().to_string(),
            photo_count: raw.photo_count.filter(|count| *count >= 0).unwrap_or(-1),
            external_report_count: 0,
            source_site: raw.site.clone(),
            url: raw.url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::listing::Region;

    #[test]
    fn fold_width_converts_full_width_digits_and_letters() {
        assert_eq!(fold_width("１２３ＬＤＫ"), "123LDK");
        assert_eq!(fold_width("西新宿１－２"), "西新宿1-2");
        assert_eq!(fold_width("新宿区"), "新宿区");
    }

    #[test]
    fn normalize_builds_record_from_fragments() {
        let raw = RawListing {
            id: Some("unit-1".to_string()),
            site: "suumo".to_string(),
            url: "https://suumo.jp/chintai/jnc_000001/".to_string(),
            name: " メゾン西新宿 ".to_string(),
            rent: "7.5万円".to_string(),
            management_fee: "5000円".to_string(),
            address: "東京都新宿区西新宿１-２-３".to_string(),
            layout: "１Ｋ".to_string(),
            area: "25.5m²".to_string(),
            age: "築12年".to_string(),
            access: "JR山手線/新宿駅 歩7分".to_string(),
            photo_count: None,
        };

        let record = Normalizer::new(2026).normalize(&raw);
        assert_eq!(record.name, "メゾン西新宿");
        assert_eq!(record.rent_man_yen, 7.5);
        assert_eq!(record.management_fee_man_yen, 0.0);
        assert_eq!(record.region, Region::Tokyo);
        assert_eq!(record.subdivision, "新宿区");
        assert_eq!(record.layout, "1K");
        assert_eq!(record.area_sqm, 25.5);
        assert_eq!(record.age_years, 12);
        assert_eq!(record.walk_minutes, 7);
        assert_eq!(record.photo_count, -1);
        assert_eq!(record.external_report_count, 0);
        assert_eq!(record.source_site, "suumo");
    }

    #[test]
    fn normalize_treats_negative_photo_count_as_unknown() {
        let raw = RawListing {
            photo_count: Some(-3),
            ..RawListing::default()
        };
        let record = Normalizer::new(2026).normalize(&raw);
        assert_eq!(record.photo_count, -1);
        assert_eq!(record.age_years, -1);
        assert_eq!(record.walk_minutes, -1);
        assert_eq!(record.region, Region::Other);
    }

    #[test]
    fn normalizer_age_uses_reference_year() {
        assert_eq!(Normalizer::new(2026).parse_age("2016年3月"), 10);
        assert_eq!(Normalizer::new(2030).parse_age("2016年3月"), 14);
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identity of one scanned unit, assigned by whoever produced the
/// fragment bundle. Stable for the lifetime of a scan pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(String);

impl UnitId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Tokyo,
    Osaka,
    Other,
}

impl Region {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tokyo => "tokyo",
            Self::Osaka => "osaka",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How precisely an address pins down a building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressDetail {
    Full,
    Town,
    Ward,
    None,
}

/// One fragment bundle as scraped from a listing page, before normalization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawListing {
    pub id: Option<String>,
    pub site: String,
    pub url: String,
    pub name: String,
    pub rent: String,
    pub management_fee: String,
    pub address: String,
    pub layout: String,
    pub area: String,
    pub age: String,
    pub access: String,
    /// Absent when the page cannot show the full gallery (list pages).
    pub photo_count: Option<i32>,
}

/// A normalized candidate unit.
///
/// Unknown numeric values use sentinels rather than `Option`: rent and fee
/// use `0.0`, age, walk and photo count use `-1`. Scorers branch on sign.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingRecord {
    pub name: String,
    pub rent_man_yen: f64,
    pub management_fee_man_yen: f64,
    pub address: String,
    pub region: Region,
    pub subdivision: String,
    pub layout: String,
    pub area_text: String,
    pub area_sqm: f64,
    pub age_years: i32,
    pub walk_minutes: i32,
    pub station: String,
    pub photo_count: i32,
    pub external_report_count: u32,
    pub source_site: String,
    pub url: String,
}

impl Default for ListingRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            rent_man_yen: 0.0,
            management_fee_man_yen: 0.0,
            address: String::new(),
            region: Region::Other,
            subdivision: String::new(),
            layout: String::new(),
            area_text: String::new(),
            area_sqm: 0.0,
            age_years: -1,
            walk_minutes: -1,
            station: String::new(),
            photo_count: -1,
            external_report_count: 0,
            source_site: String::new(),
            url: String::new(),
        }
    }
}

impl ListingRecord {
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Copy of this record with every `Some` field of `patch` written over it.
    pub fn with_patch(&self, patch: &ListingPatch) -> Self {
        let mut next = self.clone();
        if let Some(photo_count) = patch.photo_count {
            next.photo_count = photo_count;
        }
        if let Some(report_count) = patch.external_report_count {
            next.external_report_count = report_count;
        }
        next
    }
}

/// Late-arriving evidence for a unit. Only `Some` fields are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingPatch {
    pub photo_count: Option<i32>,
    pub external_report_count: Option<u32>,
}

impl ListingPatch {
    pub fn photos(count: i32) -> Self {
        Self {
            photo_count: Some(count),
            ..Self::default()
        }
    }

    pub fn reports(count: u32) -> Self {
        Self {
            external_report_count: Some(count),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.photo_count.is_none() && self.external_report_count.is_none()
    }

    /// Folds `later` into `self`; fields set in `later` win.
    pub fn merge(&mut self, later: &ListingPatch) {
        if later.photo_count.is_some() {
            self.photo_count = later.photo_count;
        }
        if later.external_report_count.is_some() {
            self.external_report_count = later.external_report_count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_uses_unknown_sentinels() {
        let record = ListingRecord::default();
        assert_eq!(record.age_years, -1);
        assert_eq!(record.walk_minutes, -1);
        assert_eq!(record.photo_count, -1);
        assert_eq!(record.rent_man_yen, 0.0);
        assert!(!record.has_name());
    }

    #[test]
    fn with_patch_only_overwrites_present_fields() {
        let record = ListingRecord {
            photo_count: 4,
            external_report_count: 1,
            ..ListingRecord::default()
        };

        let patched = record.with_patch(&ListingPatch::reports(3));
        assert_eq!(patched.photo_count, 4);
        assert_eq!(patched.external_report_count, 3);
        assert_eq!(record.external_report_count, 1);
    }

    #[test]
    fn merge_keeps_earlier_fields_and_lets_later_win() {
        let mut patch = ListingPatch::photos(2);
        patch.merge(&ListingPatch::reports(1));
        patch.merge(&ListingPatch::photos(6));
        assert_eq!(patch.photo_count, Some(6));
        assert_eq!(patch.external_report_count, Some(1));
        assert!(!patch.is_empty());
    }

    #[test]
    fn raw_listing_fields_default_when_absent() {
        let raw: RawListing =
            serde_json::from_str(r#"{"site": "suumo", "rent": "7.5万円"}"#).expect("should parse");
        assert_eq!(raw.site, "suumo");
        assert!(raw.address.is_empty());
        assert!(raw.photo_count.is_none());
        assert!(raw.id.is_none());
    }
}

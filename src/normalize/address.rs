use super::fold_width;
use crate::types::listing::{AddressDetail, Region};
use once_cell::sync::Lazy;
use regex::Regex;

// Leading prefecture; the subdivision is searched for after it.
static PREFECTURE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"東京都|北海道|(?:京都|大阪)府|\S{2,3}県").unwrap());
// A ward, optionally behind its designated city ("大阪市都島区" yields "都島区").
static WARD_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\S{1,5}?市)?(\S{1,4}?区)").unwrap());
static CITY_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S{1,4}?市").unwrap());
static LOT_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+\s*[-−‐ー]\s*\d+|\d+番").unwrap());
static TRAILING_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\D\d+$").unwrap());

pub fn extract_region(address: &str) -> Region {
    if address.contains("東京") {
        Region::Tokyo
    } else if address.contains("大阪") {
        Region::Osaka
    } else {
        Region::Other
    }
}

/// Ward (区) name, or city (市) name when the address has no ward; empty
/// when neither is present.
pub fn extract_subdivision(address: &str) -> String {
    subdivision_span(address)
        .map(|(start, end)| address[start..end].to_string())
        .unwrap_or_default()
}

/// Byte span of the subdivision within `address`.
fn subdivision_span(address: &str) -> Option<(usize, usize)> {
    let offset = PREFECTURE
        .find(address)
        .map(|prefecture| prefecture.end())
        .unwrap_or(0);
    let rest = &address[offset..];

    WARD_TOKEN
        .captures(rest)
        .and_then(|caps| caps.get(1))
        .or_else(|| CITY_TOKEN.find(rest))
        .map(|found| (offset + found.start(), offset + found.end()))
}

/// Classifies how precisely the address locates the building.
///
/// A locality ending in a bare number ("西落合1") counts as `Full`: several
/// sites drop the 丁目 marker but keep its number.
pub fn classify_address_detail(address: &str) -> AddressDetail {
    let normalized = fold_width(address);
    let normalized = normalized.trim();
    if normalized.is_empty() {
        return AddressDetail::None;
    }

    if LOT_NUMBER.is_match(normalized) || normalized.contains("丁目") {
        return AddressDetail::Full;
    }

    if let Some((_, end)) = subdivision_span(normalized) {
        let locality = normalized[end..].trim();
        if TRAILING_NUMBER.is_match(locality) {
            return AddressDetail::Full;
        }
        if locality.chars().count() >= 2 {
            return AddressDetail::Town;
        }
        return AddressDetail::Ward;
    }

    if normalized.contains('区') || normalized.contains('市') {
        return AddressDetail::Ward;
    }

    AddressDetail::None
}

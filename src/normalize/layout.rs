use super::compact;
use once_cell::sync::Lazy;
use regex::Regex;

static EXACT_LAYOUT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[1-4][RKDL]+$").unwrap());
static EMBEDDED_LAYOUT: Lazy<Regex> = Lazy::new(|| Regex::new(r"([1-4])([RKDL]+)").unwrap());

const STUDIO_SYNONYMS: [&str; 2] = ["ワンルーム", "STUDIO"];

/// Normalizes a room-type string ("１ＬＤＫ", "ワンルーム", "1LDK+S") to its
/// canonical code. Unrecognized input is returned unchanged so a later
/// lookup can still try it.
pub fn normalize_layout(text: &str) -> String {
    let cleaned = compact(text).to_uppercase();
    if cleaned.is_empty() {
        return String::new();
    }
    if STUDIO_SYNONYMS.contains(&cleaned.as_str()) {
        return "1R".to_string();
    }
    if EXACT_LAYOUT.is_match(&cleaned) {
        return cleaned;
    }
    match EMBEDDED_LAYOUT.captures(&cleaned) {
        Some(caps) => format!("{}{}", &caps[1], &caps[2]),
        None => text.to_string(),
    }
}

use super::compact;
use once_cell::sync::Lazy;
use regex::Regex;

static AGE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"築(\d{1,2})年").unwrap());
static BUILT_YEAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\D)((?:19|20)\d{2})(?:\D|$)").unwrap());
static WALK_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"歩(\d+)分").unwrap());

/// Building age in years: 0 for new construction, -1 when unknown.
/// A built year ("2016年3月") is measured against `reference_year`.
pub fn parse_age(text: &str, reference_year: i32) -> i32 {
    let cleaned = compact(text);
    if cleaned.contains("新築") {
        return 0;
    }

    if let Some(age) = AGE_PATTERN
        .captures(&cleaned)
        .and_then(|caps| caps[1].parse::<i32>().ok())
    {
        return age;
    }

    if let Some(year) = BUILT_YEAR_PATTERN
        .captures(&cleaned)
        .and_then(|caps| caps[1].parse::<i32>().ok())
    {
        return (reference_year - year).max(0);
    }

    -1
}

/// Walking minutes from "歩N分"; -1 when absent.
pub fn parse_walk_minutes(text: &str) -> i32 {
    let cleaned = compact(text);
    WALK_PATTERN
        .captures(&cleaned)
        .and_then(|caps| caps[1].parse::<i32>().ok())
        .unwrap_or(-1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_age_recognizes_new_construction() {
        assert_eq!(parse_age("新築", 2026), 0);
        assert_eq!(parse_age("新築・未入居", 2026), 0);
    }

    #[test]
    fn parse_age_reads_years_since_built() {
        assert_eq!(parse_age("築5年", 2026), 5);
        assert_eq!(parse_age("築 ２３ 年", 2026), 23);
    }

    #[test]
    fn parse_age_converts_built_year() {
        assert_eq!(parse_age("2016年3月", 2026), 10);
        assert_eq!(parse_age("1998年築", 2026), 28);
        assert_eq!(parse_age("２０２６年１月", 2026), 0);
    }

    #[test]
    fn parse_age_floors_future_years_at_zero() {
        assert_eq!(parse_age("2028年3月竣工予定", 2026), 0);
    }

    #[test]
    fn parse_age_unknown_is_negative() {
        assert_eq!(parse_age("", 2026), -1);
        assert_eq!(parse_age("築年数不明", 2026), -1);
        assert_eq!(parse_age("1850年", 2026), -1);
    }

    #[test]
    fn parse_walk_minutes_reads_walk_phrase() {
        assert_eq!(parse_walk_minutes("JR山手線/新宿駅 歩7分"), 7);
        assert_eq!(parse_walk_minutes("徒歩１２分"), 12);
        assert_eq!(parse_walk_minutes("バス10分"), -1);
        assert_eq!(parse_walk_minutes(""), -1);
    }
}

use super::compact;
use once_cell::sync::Lazy;
use regex::Regex;

// "7.5万", optionally followed directly by a sub-万 yen amount ("7万5000").
static MAN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)万(\d{1,4})?").unwrap());
static YEN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d[\d,]+").unwrap());
static AREA_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*(?:m|㎡)").unwrap());

const NO_FEE_TOKENS: [&str; 3] = ["-", "なし", "込み"];

/// Parses a rent string into 万円 (ten-thousand yen) units; 0 when unparseable.
///
/// Accepts "7.5万円", "7万5000円", "75,000円" and full-width digits. Bare yen
/// amounts below 10,000 are rejected as fragments of something else.
pub fn parse_rent(text: &str) -> f64 {
    let cleaned = compact(text);
    if cleaned.is_empty() {
        return 0.0;
    }

    if let Some(caps) = MAN_PATTERN.captures(&cleaned) {
        let man = caps
            .get(1)
            .and_then(|whole| whole.as_str().parse::<f64>().ok())
            .unwrap_or(0.0);
        let sen = caps
            .get(2)
            .and_then(|yen| yen.as_str().parse::<f64>().ok())
            .unwrap_or(0.0);
        return man + sen / 10_000.0;
    }

    if let Some(found) = YEN_PATTERN.find(&cleaned) {
        let yen = found
            .as_str()
            .replace(',', "")
            .parse::<f64>()
            .unwrap_or(0.0);
        if yen >= 10_000.0 {
            return yen / 10_000.0;
        }
    }

    0.0
}

/// Like `parse_rent`, with the explicit "no fee" tokens mapped to 0.
pub fn parse_management_fee(text: &str) -> f64 {
    let cleaned = compact(text);
    if NO_FEE_TOKENS.contains(&cleaned.as_str()) {
        return 0.0;
    }
    parse_rent(&cleaned)
}

/// Floor area in square metres; 0 when unparseable.
pub fn parse_area(text: &str) -> f64 {
    let cleaned = compact(text);
    AREA_PATTERN
        .captures(&cleaned)
        .and_then(|caps| caps.get(1))
        .and_then(|value| value.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rent_handles_man_forms() {
        assert_eq!(parse_rent("7.5万円"), 7.5);
        assert_eq!(parse_rent("12万"), 12.0);
        assert_eq!(parse_rent("７.５万円"), 7.5);
        assert_eq!(parse_rent(" 8.2 万円 "), 8.2);
    }

    #[test]
    fn parse_rent_adds_thousands_after_man() {
        assert_eq!(parse_rent("7万5000円"), 7.5);
        assert_eq!(parse_rent("10万2000円"), 10.2);
    }

    #[test]
    fn parse_rent_ignores_unrelated_numbers_after_man() {
        assert_eq!(parse_rent("8.5万円 (管理費 5000円)"), 8.5);
    }

    #[test]
    fn parse_rent_converts_bare_yen() {
        assert_eq!(parse_rent("75,000円"), 7.5);
        assert_eq!(parse_rent("75000円"), 7.5);
        assert_eq!(parse_rent("１２０,０００円"), 12.0);
    }

    #[test]
    fn parse_rent_rejects_garbage_and_small_amounts() {
        assert_eq!(parse_rent("abc"), 0.0);
        assert_eq!(parse_rent(""), 0.0);
        assert_eq!(parse_rent("5000円"), 0.0);
        assert_eq!(parse_rent("-"), 0.0);
    }

    #[test]
    fn management_fee_maps_none_tokens_to_zero() {
        assert_eq!(parse_management_fee("-"), 0.0);
        assert_eq!(parse_management_fee("なし"), 0.0);
        assert_eq!(parse_management_fee("込み"), 0.0);
        assert_eq!(parse_management_fee("－"), 0.0);
        assert_eq!(parse_management_fee("1.2万円"), 1.2);
        assert_eq!(parse_management_fee("12,000円"), 1.2);
    }

    #[test]
    fn parse_area_reads_square_metres() {
        assert_eq!(parse_area("25.5m²"), 25.5);
        assert_eq!(parse_area("３０㎡"), 30.0);
        assert_eq!(parse_area("広め"), 0.0);
    }
}

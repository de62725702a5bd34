use crate::types::listing::ListingRecord;
use crate::types::report::ScanReport;
use crate::types::scoring::RiskLevel;

pub fn to_markdown(report: &ScanReport) -> String {
    let mut output = String::new();
    output.push_str("# Bait Listing Scan\n\n");
    output.push_str(&format!(
        "Site: {} ({} units, generated {})\n\n",
        report.summary.site, report.summary.total, report.generated_at
    ));

    output.push_str("## Summary\n\n");
    for level in [
        RiskLevel::Danger,
        RiskLevel::Warning,
        RiskLevel::Caution,
        RiskLevel::Safe,
    ] {
        output.push_str(&format!(
            "- {}: {} ({})\n",
            level,
            report.summary.count(level),
            level.badge_color()
        ));
    }
    output.push('\n');

    output.push_str("## Units\n\n");
    if report.units.is_empty() {
        output.push_str("- none\n");
        return output;
    }

    for unit in &report.units {
        output.push_str(&format!(
            "### [{}] {} ({})\n\n",
            unit.score.level,
            display_name(&unit.record),
            unit.id
        ));
        output.push_str(&format!(
            "Score {}/100, rent {}, {} {}\n\n",
            unit.score.total,
            display_rent(unit.record.rent_man_yen),
            or_dash(&unit.record.subdivision),
            or_dash(&unit.record.layout)
        ));
        if !unit.record.url.is_empty() {
            output.push_str(&format!("{}\n\n", unit.record.url));
        }
        for factor in unit
            .score
            .factors
            .iter()
            .filter(|factor| factor.weighted_score > 0)
        {
            output.push_str(&format!(
                "- {} +{}: {}\n",
                factor.kind.title(),
                factor.weighted_score,
                factor.reason
            ));
        }
        output.push('\n');
    }

    output
}

fn display_name(record: &ListingRecord) -> &str {
    if record.has_name() {
        record.name.trim()
    } else {
        "(no name)"
    }
}

fn display_rent(rent: f64) -> String {
    if rent > 0.0 {
        format!("{rent:.2}万円")
    } else {
        "unknown".to_string()
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::sample_report;
    use crate::types::report::LevelSummary;

    #[test]
    fn markdown_report_contains_sections() {
        let rendered = to_markdown(&sample_report());
        assert!(rendered.contains("# Bait Listing Scan"));
        assert!(rendered.contains("## Summary"));
        assert!(rendered.contains("- danger: 1"));
        assert!(rendered.contains("### [danger] (no name) (bait-1)"));
        assert!(rendered.contains("Score 82/100, rent 2.80万円, 港区 1K"));
    }

    #[test]
    fn markdown_lists_only_contributing_factors() {
        let rendered = to_markdown(&sample_report());
        assert!(rendered.contains("+30: rent 2.80 is 77% below"));
        assert!(!rendered.contains("no external reports"));
    }

    #[test]
    fn empty_report_says_none() {
        let mut report = sample_report();
        report.units.clear();
        report.summary = LevelSummary::new("suumo");
        let rendered = to_markdown(&report);
        assert!(rendered.contains("## Units\n\n- none"));
    }
}

use crate::ingest::{EvidenceFile, ListingBatch};
use crate::market::MarketTable;
use crate::normalize::Normalizer;
use crate::scoring::ScoringEngine;
use crate::session::ScanSession;
use crate::types::config::ScanConfig;
use crate::types::report::{ScanReport, UnitReport};
use chrono::{SecondsFormat, Utc};
use tracing::{debug, info};

pub fn build_engine(config: &ScanConfig) -> ScoringEngine {
    let normalizer = config
        .reference_year()
        .map(Normalizer::new)
        .unwrap_or_default();
    let weights = config.weights();
    debug!(
        reference_year = normalizer.reference_year(),
        weights = ?weights.as_array(),
        "built scoring engine"
    );
    ScoringEngine::new(normalizer, MarketTable::builtin(), weights)
}

/// Normalizes and registers every listing of the batch under the batch's
/// site, then folds in evidence.
pub fn scan(
    engine: ScoringEngine,
    batch: ListingBatch,
    evidence: Option<&EvidenceFile>,
) -> ScanSession {
    let mut session = ScanSession::new(engine, batch.site);
    for listing in batch.listings {
        let record = session.engine().normalizer().normalize(&listing.raw);
        session.register(listing.id, record);
    }

    if let Some(evidence) = evidence.filter(|evidence| !evidence.is_empty()) {
        let photos = session.apply_photo_counts(&evidence.photo_counts);
        let reports = session.apply_report_counts(&evidence.report_counts);
        info!(photos, reports, "applied evidence");
    }

    let summary = session.summarize();
    info!(
        site = %summary.site,
        units = session.len(),
        danger = summary.danger,
        warning = summary.warning,
        "scan complete"
    );
    session
}

/// Snapshot of the session, riskiest units first.
pub fn build_report(session: &ScanSession) -> ScanReport {
    let units = session
        .iter()
        .map(|(id, record, score)| UnitReport {
            id: id.clone(),
            record: record.clone(),
            score: score.clone(),
        })
        .collect();
    let mut report = ScanReport {
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        summary: session.summarize(),
        units,
    };
    report.sort_units();
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::parse_listings;
    use crate::types::scoring::RiskLevel;
    use std::collections::BTreeMap;

    const LISTINGS: &str = r#"[
        {"id": "safe", "url": "https://example.jp/1", "name": "メゾン西新宿",
         "rent": "9万円", "address": "東京都新宿区西新宿1-2-3", "layout": "1K",
         "age": "築3年", "access": "新宿駅 歩4分", "photo_count": 12},
        {"id": "bait", "url": "https://example.jp/2", "name": "",
         "rent": "2.8万円", "address": "東京都港区", "layout": "1K",
         "photo_count": 0}
    ]"#;

    fn engine() -> ScoringEngine {
        let config: ScanConfig = toml::from_str(
            r#"
[normalize]
reference_year = 2026
"#,
        )
        .expect("config should parse");
        build_engine(&config)
    }

    #[test]
    fn build_engine_uses_configured_year() {
        assert_eq!(engine().normalizer().reference_year(), 2026);
    }

    #[test]
    fn scan_registers_every_listing() {
        let batch = parse_listings(LISTINGS, "suumo").expect("fixture should parse");
        let session = scan(engine(), batch, None);

        assert_eq!(session.len(), 2);
        let summary = session.summarize();
        assert_eq!(summary.count(RiskLevel::Safe), 1);
        assert_eq!(summary.count(RiskLevel::Danger), 1);
    }

    #[test]
    fn evidence_is_folded_in() {
        let batch = parse_listings(LISTINGS, "suumo").expect("fixture should parse");
        let evidence = EvidenceFile {
            photo_counts: BTreeMap::from([("safe".to_string(), 0)]),
            report_counts: BTreeMap::from([("https://example.jp/1".to_string(), 3)]),
        };
        let session = scan(engine(), batch, Some(&evidence));

        let (record, score) = session
            .get(&crate::types::listing::UnitId::new("safe"))
            .expect("unit should be stored");
        assert_eq!(record.photo_count, 0);
        assert_eq!(record.external_report_count, 3);
        assert_eq!(score.total, 30);
    }

    #[test]
    fn summary_uses_site_named_by_listings_file() {
        let content = format!(r#"{{"site": "homes", "listings": {LISTINGS}}}"#);
        let batch = parse_listings(&content, "unknown").expect("fixture should parse");
        let session = scan(engine(), batch, None);

        assert_eq!(session.summarize().site, "homes");
        assert_eq!(build_report(&session).summary.site, "homes");
    }

    #[test]
    fn report_lists_riskiest_first() {
        let batch = parse_listings(LISTINGS, "suumo").expect("fixture should parse");
        let session = scan(engine(), batch, None);
        let report = build_report(&session);

        let ids: Vec<&str> = report.units.iter().map(|unit| unit.id.as_str()).collect();
        assert_eq!(ids, vec!["bait", "safe"]);
        assert_eq!(report.summary.total, 2);
        assert!(report.generated_at.ends_with('Z'));
    }
}

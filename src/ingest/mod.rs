pub mod evidence;

use crate::error::{BaitScanError, Result};
use crate::types::listing::{RawListing, UnitId};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::path::Path;
use tracing::info;

pub use evidence::{load_evidence, EvidenceFile};

/// Hex characters kept from a derived unit id.
const DERIVED_ID_LEN: usize = 16;

/// Accepted layouts of a listings file: a bare array, or an object with a
/// `listings` array and an optional default `site`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListingsFile {
    Bare(Vec<RawListing>),
    Wrapped {
        #[serde(default)]
        site: Option<String>,
        listings: Vec<RawListing>,
    },
}

/// A fragment bundle with its resolved identity and site.
#[derive(Debug, Clone)]
pub struct IngestedListing {
    pub id: UnitId,
    pub raw: RawListing,
}

/// Every bundle of one listings file, plus the site the file was scraped
/// from: the file's own `site` when it names one, else the caller's default.
#[derive(Debug, Clone)]
pub struct ListingBatch {
    pub site: String,
    pub listings: Vec<IngestedListing>,
}

pub fn load_listings(path: &Path, default_site: &str) -> Result<ListingBatch> {
    if !path.exists() {
        return Err(BaitScanError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let batch = parse_listings(&content, default_site)
        .map_err(|e| BaitScanError::InputParse(format!("{}: {}", path.display(), e)))?;
    info!(
        path = %path.display(),
        site = %batch.site,
        count = batch.listings.len(),
        "loaded listings"
    );
    Ok(batch)
}

pub fn parse_listings(
    content: &str,
    default_site: &str,
) -> std::result::Result<ListingBatch, serde_json::Error> {
    let (file_site, raws) = match serde_json::from_str::<ListingsFile>(content)? {
        ListingsFile::Bare(listings) => (None, listings),
        ListingsFile::Wrapped { site, listings } => (site, listings),
    };
    let site = file_site
        .map(|site| site.trim().to_string())
        .filter(|site| !site.is_empty())
        .unwrap_or_else(|| default_site.to_string());

    let listings = raws
        .into_iter()
        .enumerate()
        .map(|(position, mut raw)| {
            if raw.site.trim().is_empty() {
                raw.site = site.clone();
            }
            let id = resolve_unit_id(&raw, position);
            IngestedListing { id, raw }
        })
        .collect();
    Ok(ListingBatch { site, listings })
}

/// The bundle's own id when present, else a hash of its site, position and
/// content.
pub fn resolve_unit_id(raw: &RawListing, position: usize) -> UnitId {
    match raw.id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => UnitId::new(id),
        _ => derive_unit_id(raw, position),
    }
}

fn derive_unit_id(raw: &RawListing, position: usize) -> UnitId {
    let position = position.to_string();
    let mut hasher = Sha256::new();
    for part in [
        raw.site.as_str(),
        position.as_str(),
        raw.name.as_str(),
        raw.address.as_str(),
        raw.layout.as_str(),
        raw.rent.as_str(),
    ] {
        hasher.update(part.as_bytes());
        hasher.update([0u8]);
    }
    let digest = hasher.finalize();
    let hex: String = digest.iter().map(|byte| format!("{byte:02x}")).collect();
    UnitId::new(&hex[..DERIVED_ID_LEN])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn parses_bare_array_with_default_site() {
        let batch = parse_listings(
            r#"[{"id": "a1", "name": "ハイツ", "rent": "5万円"}]"#,
            "suumo",
        )
        .expect("bare array should parse");
        let listings = &batch.listings;

        assert_eq!(batch.site, "suumo");
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].id.as_str(), "a1");
        assert_eq!(listings[0].raw.site, "suumo");
        assert_eq!(listings[0].raw.rent, "5万円");
    }

    #[test]
    fn wrapped_file_site_overrides_default() {
        let batch = parse_listings(
            r#"{"site": "homes", "listings": [{"name": "x"}, {"name": "y", "site": "athome"}]}"#,
            "suumo",
        )
        .expect("wrapped object should parse");
        let listings = &batch.listings;

        assert_eq!(batch.site, "homes");
        assert_eq!(listings[0].raw.site, "homes");
        assert_eq!(listings[1].raw.site, "athome");
    }

    #[test]
    fn blank_file_site_falls_back_to_default() {
        let batch = parse_listings(r#"{"site": " ", "listings": []}"#, "suumo")
            .expect("wrapped object should parse");
        assert_eq!(batch.site, "suumo");
        assert!(batch.listings.is_empty());
    }

    #[test]
    fn derived_ids_are_stable_and_position_sensitive() {
        let content = r#"[{"name": "同じ"}, {"name": "同じ"}]"#;
        let first = parse_listings(content, "suumo").expect("should parse").listings;
        let second = parse_listings(content, "suumo").expect("should parse").listings;

        assert_eq!(first[0].id, second[0].id);
        assert_ne!(first[0].id, first[1].id);
        assert_eq!(first[0].id.as_str().len(), DERIVED_ID_LEN);
    }

    #[test]
    fn blank_id_is_replaced_by_derived_id() {
        let raw = RawListing {
            id: Some("  ".to_string()),
            ..RawListing::default()
        };
        assert_eq!(resolve_unit_id(&raw, 0).as_str().len(), DERIVED_ID_LEN);
    }

    #[test]
    fn load_listings_reports_missing_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = load_listings(&dir.path().join("nope.json"), "suumo")
            .expect_err("missing file should fail");
        assert!(matches!(err, BaitScanError::PathNotFound(_)));
    }

    #[test]
    fn load_listings_reports_malformed_json() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("listings.json");
        fs::write(&path, "{\"listings\": 3}").expect("fixture should write");

        let err = load_listings(&path, "suumo").expect_err("bad shape should fail");
        assert!(matches!(err, BaitScanError::InputParse(_)));
    }
}

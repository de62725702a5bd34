use crate::error::BaitScanError;
use crate::scoring::FactorWeights;
use crate::types::scoring::FactorKind;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScanConfig {
    pub scan: Option<ScanSection>,
    pub normalize: Option<NormalizeConfig>,
    pub scoring: Option<ScoringConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScanSection {
    #[serde(default = "default_site")]
    pub site: String,
}

fn default_site() -> String {
    "unknown".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct NormalizeConfig {
    pub reference_year: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub weights: Option<HashMap<String, f64>>,
}

impl ScanConfig {
    pub fn site(&self) -> String {
        self.scan
            .as_ref()
            .map(|scan| scan.site.clone())
            .unwrap_or_else(default_site)
    }

    pub fn reference_year(&self) -> Option<i32> {
        self.normalize
            .as_ref()
            .and_then(|normalize| normalize.reference_year)
    }

    /// Defaults with any configured per-factor weight written over them.
    pub fn weights(&self) -> FactorWeights {
        let mut weights = FactorWeights::default();
        if let Some(overrides) = self.configured_weights() {
            for kind in FactorKind::ALL {
                if let Some(weight) = overrides.get(kind.key()) {
                    weights.set(kind, *weight);
                }
            }
        }
        weights
    }

    fn configured_weights(&self) -> Option<&HashMap<String, f64>> {
        self.scoring
            .as_ref()
            .and_then(|scoring| scoring.weights.as_ref())
    }

    pub fn validate(&self) -> Result<(), BaitScanError> {
        if let Some(weights) = self.configured_weights() {
            let mut unknown = weights
                .keys()
                .filter(|key| !FactorKind::ALL.iter().any(|kind| kind.key() == key.as_str()))
                .cloned()
                .collect::<Vec<_>>();
            if !unknown.is_empty() {
                unknown.sort();
                return Err(BaitScanError::ConfigParse(format!(
                    "scoring.weights contains unknown key(s): {}",
                    unknown.join(", ")
                )));
            }
        }

        let weights = self.weights().as_array();
        if weights.iter().any(|weight| !(0.0..=1.0).contains(weight)) {
            return Err(BaitScanError::ConfigParse(
                "scoring.weights values must be between 0.0 and 1.0".to_string(),
            ));
        }
        let weight_sum: f64 = weights.iter().sum();
        if (weight_sum - 1.0).abs() > 0.001 {
            return Err(BaitScanError::ConfigParse(format!(
                "scoring.weights must sum to 1.0 (found {:.3})",
                weight_sum
            )));
        }

        if let Some(year) = self.reference_year() {
            if !(1900..=2999).contains(&year) {
                return Err(BaitScanError::ConfigParse(format!(
                    "normalize.reference_year out of range: {year}"
                )));
            }
        }

        if let Some(scan) = &self.scan {
            if scan.site.trim().is_empty() {
                return Err(BaitScanError::ConfigParse(
                    "scan.site must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

use crate::types::listing::{ListingRecord, UnitId};
use crate::types::scoring::{CompositeScore, RiskLevel};
use serde::Serialize;

/// Per-level unit counts for one scan pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LevelSummary {
    pub site: String,
    pub total: usize,
    pub safe: usize,
    pub caution: usize,
    pub warning: usize,
    pub danger: usize,
}

impl LevelSummary {
    pub fn new(site: impl Into<String>) -> Self {
        Self {
            site: site.into(),
            ..Self::default()
        }
    }

    pub fn record(&mut self, level: RiskLevel) {
        self.total += 1;
        match level {
            RiskLevel::Safe => self.safe += 1,
            RiskLevel::Caution => self.caution += 1,
            RiskLevel::Warning => self.warning += 1,
            RiskLevel::Danger => self.danger += 1,
        }
    }

    pub fn count(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::Safe => self.safe,
            RiskLevel::Caution => self.caution,
            RiskLevel::Warning => self.warning,
            RiskLevel::Danger => self.danger,
        }
    }

    pub fn highest_level(&self) -> Option<RiskLevel> {
        [
            RiskLevel::Danger,
            RiskLevel::Warning,
            RiskLevel::Caution,
            RiskLevel::Safe,
        ]
        .into_iter()
        .find(|level| self.count(*level) > 0)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UnitReport {
    pub id: UnitId,
    pub record: ListingRecord,
    pub score: CompositeScore,
}

/// A normalized record with its identity, before scoring.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedUnit {
    pub id: UnitId,
    pub record: ListingRecord,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub generated_at: String,
    pub summary: LevelSummary,
    pub units: Vec<UnitReport>,
}

impl ScanReport {
    /// Riskiest first; ties keep scan order.
    pub fn sort_units(&mut self) {
        self.units
            .sort_by(|left, right| right.score.total.cmp(&left.score.total));
    }

    pub fn retain_min_level(&mut self, min_level: RiskLevel) {
        self.units.retain(|unit| unit.score.level >= min_level);
    }
}

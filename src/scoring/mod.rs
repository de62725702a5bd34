pub mod address;
pub mod cheap;
pub mod name;
pub mod photos;
pub mod price_gap;
pub mod reports;

use crate::market::MarketTable;
use crate::normalize::Normalizer;
use crate::types::listing::{ListingRecord, RawListing};
use crate::types::scoring::{CompositeScore, FactorKind, ScoreFactor};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorWeights {
    pub price_gap: f64,
    pub address_vagueness: f64,
    pub missing_name: f64,
    pub few_photos: f64,
    pub implausibly_cheap: f64,
    pub report_count: f64,
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            price_gap: 0.30,
            address_vagueness: 0.15,
            missing_name: 0.10,
            few_photos: 0.15,
            implausibly_cheap: 0.15,
            report_count: 0.15,
        }
    }
}

impl FactorWeights {
    pub fn weight(&self, kind: FactorKind) -> f64 {
        match kind {
            FactorKind::PriceGap => self.price_gap,
            FactorKind::AddressVagueness => self.address_vagueness,
            FactorKind::MissingName => self.missing_name,
            FactorKind::FewPhotos => self.few_photos,
            FactorKind::ImplausiblyCheap => self.implausibly_cheap,
            FactorKind::ReportCount => self.report_count,
        }
    }

    pub fn set(&mut self, kind: FactorKind, weight: f64) {
        let slot = match kind {
            FactorKind::PriceGap => &mut self.price_gap,
            FactorKind::AddressVagueness => &mut self.address_vagueness,
            FactorKind::MissingName => &mut self.missing_name,
            FactorKind::FewPhotos => &mut self.few_photos,
            FactorKind::ImplausiblyCheap => &mut self.implausibly_cheap,
            FactorKind::ReportCount => &mut self.report_count,
        };
        *slot = weight;
    }

    /// Weights in `FactorKind::ALL` order.
    pub fn as_array(&self) -> [f64; 6] {
        FactorKind::ALL.map(|kind| self.weight(kind))
    }
}

/// Scores normalized listings against the market table.
///
/// Pure: the same record always produces the same `CompositeScore`, and no
/// input makes it fail. A factor that lacks the data it needs scores 0.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    normalizer: Normalizer,
    market: MarketTable,
    weights: FactorWeights,
}

impl ScoringEngine {
    pub fn new(normalizer: Normalizer, market: MarketTable, weights: FactorWeights) -> Self {
        Self {
            normalizer,
            market,
            weights,
        }
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn market(&self) -> &MarketTable {
        &self.market
    }

    pub fn score(&self, record: &ListingRecord) -> CompositeScore {
        let factors = FactorKind::ALL
            .iter()
            .map(|kind| self.evaluate(*kind, record))
            .collect();
        CompositeScore::from_factors(factors)
    }

    pub fn score_raw(&self, raw: &RawListing) -> (ListingRecord, CompositeScore) {
        let record = self.normalizer.normalize(raw);
        let score = self.score(&record);
        (record, score)
    }

    fn evaluate(&self, kind: FactorKind, record: &ListingRecord) -> ScoreFactor {
        let weight = self.weights.weight(kind);
        match kind {
            FactorKind::PriceGap => price_gap::price_gap_factor(record, &self.market, weight),
            FactorKind::AddressVagueness => {
                address::address_factor(self.normalizer.address_detail(&record.address), weight)
            }
            FactorKind::MissingName => name::missing_name_factor(record, weight),
            FactorKind::FewPhotos => photos::few_photos_factor(record.photo_count, weight),
            FactorKind::ImplausiblyCheap => {
                cheap::implausibly_cheap_factor(record, &self.market, weight)
            }
            FactorKind::ReportCount => {
                reports::report_count_factor(record.external_report_count, weight)
            }
        }
    }
}

use crate::scoring::ScoringEngine;
use crate::types::listing::{ListingPatch, ListingRecord, UnitId};
use crate::types::report::LevelSummary;
use crate::types::scoring::CompositeScore;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

#[derive(Debug, Clone)]
struct Entry {
    record: ListingRecord,
    score: CompositeScore,
    evidence: ListingPatch,
}

/// Current record and score per unit for one scan pass.
///
/// Evidence patches accumulate per unit, so a photo count applied before a
/// report count survives the second rescore. When several sub-units share
/// an identity the highest-scoring variant is kept.
#[derive(Debug, Clone)]
pub struct ScanSession {
    engine: ScoringEngine,
    site: String,
    entries: HashMap<UnitId, Entry>,
    order: Vec<UnitId>,
}

impl ScanSession {
    pub fn new(engine: ScoringEngine, site: impl Into<String>) -> Self {
        Self {
            engine,
            site: site.into(),
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Scores `record` and stores it under `id` unless an equal or higher
    /// total is already stored there. Returns the score now stored for `id`.
    pub fn register(&mut self, id: UnitId, record: ListingRecord) -> &CompositeScore {
        match self.entries.get(&id) {
            None => {
                let score = self.engine.score(&record);
                debug!(unit = %id, total = score.total, level = %score.level, "registered unit");
                self.order.push(id.clone());
                self.entries.insert(
                    id.clone(),
                    Entry {
                        record,
                        score,
                        evidence: ListingPatch::default(),
                    },
                );
            }
            Some(existing) => {
                let evidence = existing.evidence;
                let candidate = record.with_patch(&evidence);
                let score = self.engine.score(&candidate);
                if score.total > existing.score.total {
                    debug!(
                        unit = %id,
                        previous = existing.score.total,
                        total = score.total,
                        "replaced unit with higher-scoring variant"
                    );
                    self.entries.insert(
                        id.clone(),
                        Entry {
                            record: candidate,
                            score,
                            evidence,
                        },
                    );
                } else {
                    debug!(
                        unit = %id,
                        kept = existing.score.total,
                        candidate = score.total,
                        "kept existing variant"
                    );
                }
            }
        }

        &self.entries[&id].score
    }

    /// Writes `patch` over the stored record and rescores it. Unknown ids are
    /// ignored and return `None`.
    pub fn apply_evidence(&mut self, id: &UnitId, patch: &ListingPatch) -> Option<CompositeScore> {
        let Some(entry) = self.entries.get_mut(id) else {
            debug!(unit = %id, "evidence for unknown unit ignored");
            return None;
        };
        if patch.is_empty() {
            return Some(entry.score.clone());
        }

        entry.evidence.merge(patch);
        entry.record = entry.record.with_patch(patch);
        let previous = entry.score.total;
        entry.score = self.engine.score(&entry.record);
        debug!(
            unit = %id,
            previous,
            total = entry.score.total,
            level = %entry.score.level,
            "rescored unit"
        );
        Some(entry.score.clone())
    }

    /// Applies photo counts per unit. Negative counts are ignored. Returns the
    /// number of units rescored.
    pub fn apply_photo_counts(&mut self, counts: &BTreeMap<String, i32>) -> usize {
        counts
            .iter()
            .filter(|(_, count)| **count >= 0)
            .filter_map(|(id, count)| {
                self.apply_evidence(&UnitId::new(id.as_str()), &ListingPatch::photos(*count))
            })
            .count()
    }

    /// Applies report counts keyed by listing URL to every unit carrying that
    /// URL. Returns the number of units rescored.
    pub fn apply_report_counts(&mut self, counts: &BTreeMap<String, u32>) -> usize {
        let targets: Vec<(UnitId, u32)> = self
            .order
            .iter()
            .filter_map(|id| {
                let url = &self.entries.get(id)?.record.url;
                if url.is_empty() {
                    return None;
                }
                counts.get(url).map(|count| (id.clone(), *count))
            })
            .collect();

        targets
            .into_iter()
            .filter_map(|(id, count)| self.apply_evidence(&id, &ListingPatch::reports(count)))
            .count()
    }

    pub fn get(&self, id: &UnitId) -> Option<(&ListingRecord, &CompositeScore)> {
        self.entries
            .get(id)
            .map(|entry| (&entry.record, &entry.score))
    }

    /// Stored units in the order they were first registered.
    pub fn iter(&self) -> impl Iterator<Item = (&UnitId, &ListingRecord, &CompositeScore)> {
        self.order.iter().filter_map(|id| {
            self.entries
                .get(id)
                .map(|entry| (id, &entry.record, &entry.score))
        })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Drops every unit, as on a new scan pass.
    #[allow(dead_code)]
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    pub fn summarize(&self) -> LevelSummary {
        let mut summary = LevelSummary::new(self.site.as_str());
        for (_, _, score) in self.iter() {
            summary.record(score.level);
        }
        summary
    }
}

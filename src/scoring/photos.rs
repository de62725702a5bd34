use crate::types::scoring::{FactorKind, ScoreFactor};

/// Raw score by photo count; a negative count means the count was never
/// observed and the factor is skipped.
pub fn few_photos_factor(photo_count: i32, weight: f64) -> ScoreFactor {
    let kind = FactorKind::FewPhotos;
    if photo_count < 0 {
        return ScoreFactor::skipped(kind, weight, "photo count unknown (skipped)");
    }

    let raw_score = match photo_count {
        0 => 100,
        1..=2 => 70,
        3..=4 => 30,
        _ => 0,
    };
    ScoreFactor::new(kind, raw_score, weight, format!("{photo_count} photo(s)"))
}

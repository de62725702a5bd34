use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    PriceGap,
    AddressVagueness,
    MissingName,
    FewPhotos,
    ImplausiblyCheap,
    ReportCount,
}

impl FactorKind {
    /// Evaluation order; also the order of `CompositeScore::factors`.
    pub const ALL: [FactorKind; 6] = [
        Self::PriceGap,
        Self::AddressVagueness,
        Self::MissingName,
        Self::FewPhotos,
        Self::ImplausiblyCheap,
        Self::ReportCount,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::PriceGap => "price_gap",
            Self::AddressVagueness => "address_vagueness",
            Self::MissingName => "missing_name",
            Self::FewPhotos => "few_photos",
            Self::ImplausiblyCheap => "implausibly_cheap",
            Self::ReportCount => "report_count",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::PriceGap => "Gap to market rent",
            Self::AddressVagueness => "Vague address",
            Self::MissingName => "Missing building name",
            Self::FewPhotos => "Few photos",
            Self::ImplausiblyCheap => "Implausibly cheap",
            Self::ReportCount => "User reports",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreFactor {
    #[serde(rename = "name")]
    pub kind: FactorKind,
    pub raw_score: u32,
    pub weight: f64,
    pub weighted_score: u32,
    pub reason: String,
}

impl ScoreFactor {
    pub fn new(kind: FactorKind, raw_score: u32, weight: f64, reason: impl Into<String>) -> Self {
        let raw_score = raw_score.min(100);
        Self {
            kind,
            raw_score,
            weight,
            weighted_score: (f64::from(raw_score) * weight).round() as u32,
            reason: reason.into(),
        }
    }

    /// A factor that could not be evaluated and contributes nothing.
    pub fn skipped(kind: FactorKind, weight: f64, reason: impl Into<String>) -> Self {
        Self::new(kind, 0, weight, reason)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Safe,
    Caution,
    Warning,
    Danger,
}

impl RiskLevel {
    pub const CAUTION_FROM: u32 = 20;
    pub const WARNING_FROM: u32 = 45;
    pub const DANGER_FROM: u32 = 70;

    pub fn from_total(total: u32) -> Self {
        if total < Self::CAUTION_FROM {
            Self::Safe
        } else if total < Self::WARNING_FROM {
            Self::Caution
        } else if total < Self::DANGER_FROM {
            Self::Warning
        } else {
            Self::Danger
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Caution => "caution",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }

    pub fn badge_color(self) -> &'static str {
        match self {
            Self::Safe => "#4caf50",
            Self::Caution => "#ffc107",
            Self::Warning => "#ff9800",
            Self::Danger => "#f44336",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositeScore {
    pub total: u32,
    pub level: RiskLevel,
    pub factors: Vec<ScoreFactor>,
}

impl CompositeScore {
    pub fn from_factors(factors: Vec<ScoreFactor>) -> Self {
        let sum: u32 = factors.iter().map(|factor| factor.weighted_score).sum();
        let total = sum.min(100);
        Self {
            total,
            level: RiskLevel::from_total(total),
            factors,
        }
    }

    pub fn factor(&self, kind: FactorKind) -> Option<&ScoreFactor> {
        self.factors.iter().find(|factor| factor.kind == kind)
    }
}

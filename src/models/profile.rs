use std::collections::HashMap;
use std::fmt::Display;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Discrete band derived from a 0-10 numeric rating
///
/// Thresholds are boundary-inclusive: a vote average of exactly 8.0 is
/// Excellent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RatingBucket {
    Excellent,
    Good,
    Average,
    BelowAverage,
    Poor,
}

impl RatingBucket {
    /// Buckets a vote average using the fixed thresholds
    pub fn from_vote_average(rating: f64) -> Self {
        if rating >= 8.0 {
            RatingBucket::Excellent
        } else if rating >= 7.0 {
            RatingBucket::Good
        } else if rating >= 6.0 {
            RatingBucket::Average
        } else if rating >= 5.0 {
            RatingBucket::BelowAverage
        } else {
            RatingBucket::Poor
        }
    }

    /// Label used in persisted profiles and reason strings
    pub fn label(&self) -> &'static str {
        match self {
            RatingBucket::Excellent => "excellent",
            RatingBucket::Good => "good",
            RatingBucket::Average => "average",
            RatingBucket::BelowAverage => "below_average",
            RatingBucket::Poor => "poor",
        }
    }
}

impl Display for RatingBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Derives a decade label like "1990s" from an ISO date string
///
/// Unparseable dates yield `None` and are skipped by callers.
pub fn decade_label(date: &str) -> Option<String> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let year = chrono::Datelike::year(&parsed);
    Some(format!("{}s", (year / 10) * 10))
}

/// Kind of user interaction that feeds the preference profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    Watch,
    Like,
    Search,
    Skip,
}

impl InteractionKind {
    /// Fixed multiplier applied to the base interaction weight
    ///
    /// Watching carries the strongest signal; skipping is the only negative
    /// one.
    pub fn multiplier(&self) -> f64 {
        match self {
            InteractionKind::Watch => 3.0,
            InteractionKind::Like => 2.5,
            InteractionKind::Search => 1.5,
            InteractionKind::Skip => -0.5,
        }
    }
}

/// One entry in the append-only interaction audit log
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InteractionEvent {
    pub item_id: i64,
    pub kind: InteractionKind,
    /// Epoch milliseconds
    pub timestamp: i64,
}

/// Accumulated per-category preference weights for a single user
///
/// A missing key is equivalent to a weight of zero. Weights are never
/// normalized and can grow without bound or go negative under repeated
/// skips. The profile is only ever created empty, incrementally mutated
/// through the interaction recorder, or wholly reset.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PreferenceProfile {
    #[serde(default)]
    pub genre_weights: HashMap<i32, f64>,
    #[serde(default)]
    pub language_weights: HashMap<String, f64>,
    #[serde(default)]
    pub decade_weights: HashMap<String, f64>,
    #[serde(default)]
    pub rating_weights: HashMap<RatingBucket, f64>,
}

impl PreferenceProfile {
    /// Creates an empty profile
    pub fn new() -> Self {
        Self::default()
    }

    pub fn genre_weight(&self, id: i32) -> f64 {
        self.genre_weights.get(&id).copied().unwrap_or(0.0)
    }

    pub fn language_weight(&self, language: &str) -> f64 {
        self.language_weights.get(language).copied().unwrap_or(0.0)
    }

    pub fn decade_weight(&self, decade: &str) -> f64 {
        self.decade_weights.get(decade).copied().unwrap_or(0.0)
    }

    pub fn rating_weight(&self, bucket: RatingBucket) -> f64 {
        self.rating_weights.get(&bucket).copied().unwrap_or(0.0)
    }

    /// Whether no interaction has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.genre_weights.is_empty()
            && self.language_weights.is_empty()
            && self.decade_weights.is_empty()
            && self.rating_weights.is_empty()
    }
}

/// Relevance score for a single item, computed per ranking pass
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationScore {
    pub item_id: i64,
    pub score: f64,
    /// Up to 3 human-readable justifications, most significant first
    pub reasons: Vec<String>,
}

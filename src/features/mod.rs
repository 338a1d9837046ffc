//! Feature derivation from attempt history: ratios → rolling stats → one
//! fixed-width vector for model input.

mod derive;
pub mod stats;

pub use derive::FeatureDeriver;

use serde::{Deserialize, Serialize};

/// Number of features the model expects.
pub const FEATURE_DIM: usize = 9;

/// Declared field order of [`FeatureVector`]. This is the scaler's input
/// order; [`FeatureVector::to_array`] must flatten in exactly this order.
pub const FEATURE_NAMES: [&str; FEATURE_DIM] = [
    "recent_performance",
    "performance_trend",
    "avg_difficulty_performance",
    "current_difficulty",
    "overall_performance",
    "performance_variance",
    "max_difficulty_attempted",
    "min_performance",
    "max_performance",
];

/// Summary of a learner's state as of the most recent attempt. Ephemeral:
/// exists only for the duration of one prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Rolling mean of performance ratio over the trailing window
    pub recent_performance: f64,
    /// Local slope of performance ratio over the trailing window
    pub performance_trend: f64,
    /// Mean ratio at the current attempt's difficulty, with fallback to the
    /// overall mean, then 0
    pub avg_difficulty_performance: f64,
    /// Difficulty of the most recent attempt
    pub current_difficulty: u8,
    /// Mean performance ratio over the whole history
    pub overall_performance: f64,
    /// Sample standard deviation of performance ratio
    pub performance_variance: f64,
    /// Highest difficulty seen in the history
    pub max_difficulty_attempted: u8,
    /// Lowest performance ratio in the history
    pub min_performance: f64,
    /// Highest performance ratio in the history
    pub max_performance: f64,
}

impl FeatureVector {
    /// Flatten in the [`FEATURE_NAMES`] order.
    pub fn to_array(&self) -> [f64; FEATURE_DIM] {
        [
            self.recent_performance,
            self.performance_trend,
            self.avg_difficulty_performance,
            self.current_difficulty as f64,
            self.overall_performance,
            self.performance_variance,
            self.max_difficulty_attempted as f64,
            self.min_performance,
            self.max_performance,
        ]
    }
}

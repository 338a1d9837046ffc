//! Predictor: validated history → features → scaled vector → regressed score,
//! clamped into the difficulty domain and rounded for presentation. Pure with
//! respect to one history and one model snapshot.

use crate::config::{DifficultyConfig, FeaturesConfig};
use crate::error::EngineError;
use crate::features::FeatureDeriver;
use crate::history::{validate_history, Attempt};
use crate::model::Model;
use serde::{Deserialize, Serialize};

/// Result of one prediction call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Recommended next difficulty, within the configured domain, 2 decimals
    pub prediction: f64,
    /// Version metadata from the model artifact, "unknown" when absent
    pub model_timestamp: String,
}

pub struct Predictor {
    deriver: FeatureDeriver,
    difficulty: DifficultyConfig,
}

impl Predictor {
    pub fn new(features: &FeaturesConfig, difficulty: DifficultyConfig) -> Self {
        Self {
            deriver: FeatureDeriver::new(features),
            difficulty,
        }
    }

    /// Predict the next difficulty for one learner. Structural validation
    /// happens before any feature is computed; the raw model output is
    /// clamped into the difficulty domain regardless of its magnitude.
    pub fn predict(
        &self,
        attempts: &[Attempt],
        model: &dyn Model,
    ) -> Result<Prediction, EngineError> {
        validate_history(attempts, &self.difficulty)?;

        let features = self.deriver.derive(attempts)?;
        let scaled = model.transform(&features.to_array());
        let raw = model.predict(&scaled);

        let clamped = raw.clamp(
            self.difficulty.min_level as f64,
            self.difficulty.max_level as f64,
        );
        Ok(Prediction {
            prediction: round2(clamped),
            model_timestamp: model.timestamp().unwrap_or("unknown").to_string(),
        })
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

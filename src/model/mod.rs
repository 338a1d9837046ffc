//! Inference-time model handle: a pre-fitted scaler + regressor pair, loaded
//! once and treated as read-only for the duration of every prediction.

mod linear;
mod store;

pub use linear::{LinearModel, RegressorParams, ScalerParams};
pub use store::ModelStore;

use crate::features::FEATURE_DIM;

/// Opaque trained model: standardizes a feature vector and regresses it to a
/// raw difficulty score. Implementations must be reentrant; the predictor
/// only ever takes `&self`.
pub trait Model: Send + Sync {
    /// Apply the fitted scaler, in the declared feature order.
    fn transform(&self, features: &[f64; FEATURE_DIM]) -> [f64; FEATURE_DIM];

    /// Regress a scaled vector to a raw (unclamped) score.
    fn predict(&self, scaled: &[f64; FEATURE_DIM]) -> f64;

    /// Version metadata echoed back to callers, when the artifact carries it.
    fn timestamp(&self) -> Option<&str> {
        None
    }
}

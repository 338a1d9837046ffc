//! Adaptive difficulty estimation engine.
//!
//! Modular structure:
//! - [`history`] — Attempt records and structural validation
//! - [`features`] — Feature derivation from attempt history
//! - [`model`] — Scaler+regressor artifact loading and the process-wide handle
//! - [`predictor`] — Clamped, rounded difficulty prediction
//! - [`logging`] — Structured JSON logging

pub mod config;
pub mod error;
pub mod features;
pub mod history;
pub mod logging;
pub mod model;
pub mod predictor;

pub use config::EngineConfig;
pub use error::EngineError;
pub use features::{FeatureDeriver, FeatureVector, FEATURE_DIM, FEATURE_NAMES};
pub use history::Attempt;
pub use logging::StructuredLogger;
pub use model::{LinearModel, Model, ModelStore};
pub use predictor::{Prediction, Predictor};

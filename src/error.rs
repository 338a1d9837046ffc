//! Engine error taxonomy: caller-correctable input problems vs missing model
//! infrastructure. Internal numeric degeneracy is never an error; the feature
//! deriver normalizes it to 0.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Structural problem in the attempt history: empty, malformed, or out of
    /// the valid ordinal domain. Recoverable by caller correction.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No trained model artifact could be obtained. Fatal for the prediction
    /// call; retry policy belongs to the caller.
    #[error("model unavailable: {0}")]
    ModelUnavailable(String),
}

//! Attempt history: the learner's past question attempts, ordered by
//! occurrence. The sequence is immutable input to one prediction; structural
//! validation happens here, before any feature is computed.

use crate::config::DifficultyConfig;
use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// One historical record of a learner answering a question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attempt {
    /// Points scored (>= 0)
    pub marks: f64,
    /// Maximum attainable points (> 0)
    pub max_marks: f64,
    /// Difficulty level of the question attempted (ordinal, default domain 1-5)
    pub difficulty: u8,
}

impl Attempt {
    pub fn performance_ratio(&self) -> f64 {
        self.marks / self.max_marks
    }
}

/// Reject malformed histories before the feature deriver runs. Checks each
/// record for finite, non-negative marks, positive max_marks, and a difficulty
/// inside the configured ordinal domain.
pub fn validate_history(
    attempts: &[Attempt],
    difficulty: &DifficultyConfig,
) -> Result<(), EngineError> {
    if attempts.is_empty() {
        return Err(EngineError::InvalidInput("attempt history is empty".into()));
    }
    for (i, a) in attempts.iter().enumerate() {
        if !a.marks.is_finite() || a.marks < 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "attempt {}: marks must be finite and >= 0, got {}",
                i, a.marks
            )));
        }
        if !a.max_marks.is_finite() || a.max_marks <= 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "attempt {}: max_marks must be finite and > 0, got {}",
                i, a.max_marks
            )));
        }
        if a.difficulty < difficulty.min_level || a.difficulty > difficulty.max_level {
            return Err(EngineError::InvalidInput(format!(
                "attempt {}: difficulty {} outside domain {}-{}",
                i, a.difficulty, difficulty.min_level, difficulty.max_level
            )));
        }
    }
    Ok(())
}

//! JSON scaler+regressor artifact: standard-scaler parameters and linear
//! regression coefficients, one vector entry per feature. Missing or malformed
//! artifacts are `ModelUnavailable`; there is no degraded no-model mode.

use super::Model;
use crate::error::EngineError;
use crate::features::FEATURE_DIM;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerParams {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressorParams {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ModelArtifact {
    scaler: ScalerParams,
    regressor: RegressorParams,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
}

#[derive(Debug)]
pub struct LinearModel {
    mean: Array1<f64>,
    scale: Array1<f64>,
    coefficients: Array1<f64>,
    intercept: f64,
    timestamp: Option<String>,
}

impl LinearModel {
    /// Load the artifact from `path`. Any failure to obtain a usable model
    /// (file missing, unreadable, unparseable, wrong dimensionality) is
    /// `ModelUnavailable`.
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        if !path.exists() {
            return Err(EngineError::ModelUnavailable(format!(
                "artifact not found at {}",
                path.display()
            )));
        }
        let data = std::fs::read_to_string(path).map_err(|e| {
            EngineError::ModelUnavailable(format!("cannot read {}: {}", path.display(), e))
        })?;
        let artifact: ModelArtifact = serde_json::from_str(&data).map_err(|e| {
            EngineError::ModelUnavailable(format!("cannot parse {}: {}", path.display(), e))
        })?;
        let model = Self::new(artifact.scaler, artifact.regressor, artifact.timestamp)?;
        tracing::info!(path = %path.display(), timestamp = model.timestamp.as_deref().unwrap_or("unknown"), "model artifact loaded");
        Ok(model)
    }

    pub fn new(
        scaler: ScalerParams,
        regressor: RegressorParams,
        timestamp: Option<String>,
    ) -> Result<Self, EngineError> {
        for (name, len) in [
            ("scaler.mean", scaler.mean.len()),
            ("scaler.scale", scaler.scale.len()),
            ("regressor.coefficients", regressor.coefficients.len()),
        ] {
            if len != FEATURE_DIM {
                return Err(EngineError::ModelUnavailable(format!(
                    "{} has {} entries, expected {}",
                    name, len, FEATURE_DIM
                )));
            }
        }
        // Zero-variance features scale by 1 (standard-scaler convention),
        // so a constant feature passes through centered instead of dividing
        // by zero.
        let scale = scaler
            .scale
            .iter()
            .map(|&s| if s.is_finite() && s > 0.0 { s } else { 1.0 })
            .collect::<Vec<f64>>();
        Ok(Self {
            mean: Array1::from(scaler.mean),
            scale: Array1::from(scale),
            coefficients: Array1::from(regressor.coefficients),
            intercept: regressor.intercept,
            timestamp,
        })
    }
}

impl Model for LinearModel {
    fn transform(&self, features: &[f64; FEATURE_DIM]) -> [f64; FEATURE_DIM] {
        let x = Array1::from(features.to_vec());
        let scaled = (x - &self.mean) / &self.scale;
        let mut out = [0.0f64; FEATURE_DIM];
        for (o, v) in out.iter_mut().zip(scaled.iter()) {
            *o = *v;
        }
        out
    }

    fn predict(&self, scaled: &[f64; FEATURE_DIM]) -> f64 {
        let x = Array1::from(scaled.to_vec());
        x.dot(&self.coefficients) + self.intercept
    }

    fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }
}

//! Deriver: attempt history → [`FeatureVector`].

use super::stats;
use super::FeatureVector;
use crate::config::FeaturesConfig;
use crate::error::EngineError;
use crate::history::Attempt;
use std::collections::HashMap;

/// Computes the model's feature vector from an ordered attempt history.
/// Stateless apart from the window size; one call per prediction.
pub struct FeatureDeriver {
    window: usize,
}

impl FeatureDeriver {
    pub fn new(config: &FeaturesConfig) -> Self {
        Self {
            window: config.window_attempts.max(1),
        }
    }

    /// Derive features as of the most recent attempt. The history must be
    /// non-empty and structurally valid (the predictor checks this before
    /// calling); an empty history is rejected here as well.
    pub fn derive(&self, attempts: &[Attempt]) -> Result<FeatureVector, EngineError> {
        let current = attempts
            .last()
            .ok_or_else(|| EngineError::InvalidInput("attempt history is empty".into()))?;

        let ratios: Vec<f64> = attempts.iter().map(Attempt::performance_ratio).collect();

        let recent = stats::rolling_mean(&ratios, self.window);
        let trend = stats::rolling_slope(&ratios, self.window);

        // Mean ratio per difficulty group; the current attempt's group is the
        // one looked up, with fallback to the overall mean, then 0.
        let mut groups: HashMap<u8, (f64, usize)> = HashMap::new();
        for a in attempts {
            let e = groups.entry(a.difficulty).or_insert((0.0, 0));
            e.0 += a.performance_ratio();
            e.1 += 1;
        }
        let overall = stats::mean(&ratios);
        let avg_difficulty = groups
            .get(&current.difficulty)
            .map(|(sum, n)| sum / *n as f64)
            .unwrap_or(overall);

        let min = ratios.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = ratios.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        Ok(FeatureVector {
            recent_performance: finite_or_zero(recent.last().copied().unwrap_or(0.0)),
            performance_trend: finite_or_zero(trend.last().copied().unwrap_or(0.0)),
            avg_difficulty_performance: finite_or_zero(avg_difficulty),
            current_difficulty: current.difficulty,
            overall_performance: finite_or_zero(overall),
            performance_variance: finite_or_zero(stats::sample_std(&ratios)),
            max_difficulty_attempted: attempts.iter().map(|a| a.difficulty).max().unwrap_or(0),
            min_performance: finite_or_zero(min),
            max_performance: finite_or_zero(max),
        })
    }
}

/// No NaN or infinity may reach the model; degenerate values become 0.
fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    fn attempt(marks: f64, max_marks: f64, difficulty: u8) -> Attempt {
        Attempt {
            marks,
            max_marks,
            difficulty,
        }
    }

    fn deriver() -> FeatureDeriver {
        FeatureDeriver::new(&FeaturesConfig::default())
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_history_is_invalid_input() {
        let err = deriver().derive(&[]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput(_)));
    }

    #[test]
    fn three_attempt_scenario() {
        let history = vec![
            attempt(5.0, 10.0, 2),
            attempt(7.0, 10.0, 2),
            attempt(9.0, 10.0, 3),
        ];
        let fv = deriver().derive(&history).unwrap();
        assert!(close(fv.recent_performance, 0.7));
        assert!(close(fv.performance_trend, 0.2));
        assert!(close(fv.overall_performance, 0.7));
        assert!(close(fv.performance_variance, 0.2));
        assert_eq!(fv.current_difficulty, 3);
        assert_eq!(fv.max_difficulty_attempted, 3);
        assert!(close(fv.min_performance, 0.5));
        assert!(close(fv.max_performance, 0.9));
        // current difficulty 3 has one attempt with ratio 0.9
        assert!(close(fv.avg_difficulty_performance, 0.9));
    }

    #[test]
    fn single_attempt_edge_values() {
        let history = vec![attempt(6.0, 10.0, 4)];
        let fv = deriver().derive(&history).unwrap();
        assert_eq!(fv.performance_trend, 0.0);
        assert_eq!(fv.performance_variance, 0.0);
        assert!(close(fv.recent_performance, 0.6));
        assert!(close(fv.min_performance, 0.6));
        assert!(close(fv.max_performance, 0.6));
        assert!(close(fv.avg_difficulty_performance, 0.6));
        assert_eq!(fv.current_difficulty, 4);
        assert_eq!(fv.max_difficulty_attempted, 4);
    }

    #[test]
    fn no_component_is_nan() {
        let histories = vec![
            vec![attempt(0.0, 10.0, 1)],
            vec![attempt(10.0, 10.0, 5); 7],
            vec![
                attempt(1.0, 4.0, 1),
                attempt(3.0, 4.0, 2),
                attempt(2.0, 4.0, 3),
                attempt(4.0, 4.0, 2),
            ],
        ];
        for h in histories {
            let fv = deriver().derive(&h).unwrap();
            for v in fv.to_array() {
                assert!(v.is_finite());
            }
        }
    }

    #[test]
    fn extrema_bound_the_ratios() {
        let history = vec![
            attempt(2.0, 10.0, 1),
            attempt(8.0, 10.0, 2),
            attempt(5.0, 10.0, 3),
        ];
        let fv = deriver().derive(&history).unwrap();
        for a in &history {
            let r = a.performance_ratio();
            assert!(fv.min_performance <= r && r <= fv.max_performance);
        }
        assert!(fv.min_performance <= fv.recent_performance);
        assert!(fv.recent_performance <= fv.max_performance);
    }

    #[test]
    fn appending_a_record_never_shrinks_extrema() {
        let mut history = vec![attempt(4.0, 10.0, 2), attempt(6.0, 10.0, 2)];
        let before = deriver().derive(&history).unwrap();
        history.push(attempt(10.0, 10.0, 3));
        let after = deriver().derive(&history).unwrap();
        assert!(after.max_performance >= before.max_performance);
        assert!(after.min_performance <= before.min_performance);
    }

    #[test]
    fn difficulty_group_mean_uses_current_group() {
        // Two attempts at difficulty 2 (ratios 0.2, 0.4), current at 2.
        let history = vec![
            attempt(2.0, 10.0, 2),
            attempt(9.0, 10.0, 3),
            attempt(4.0, 10.0, 2),
        ];
        let fv = deriver().derive(&history).unwrap();
        assert!(close(fv.avg_difficulty_performance, 0.3));
    }

    #[test]
    fn flat_performance_has_zero_trend_and_variance() {
        let history = vec![attempt(5.0, 10.0, 2); 5];
        let fv = deriver().derive(&history).unwrap();
        assert!(close(fv.performance_trend, 0.0));
        assert!(close(fv.performance_variance, 0.0));
    }
}

//! Process-wide current model. Loaded once ahead of time; a new version
//! replaces the whole handle, it never mutates the one in use. Readers take an
//! `Arc` snapshot, so an in-flight prediction keeps the version it started
//! with.

use super::Model;
use std::sync::{Arc, RwLock};

pub struct ModelStore {
    inner: RwLock<Arc<dyn Model>>,
}

impl ModelStore {
    pub fn new(model: Arc<dyn Model>) -> Self {
        Self {
            inner: RwLock::new(model),
        }
    }

    /// Snapshot of the current model for one prediction.
    pub fn current(&self) -> Arc<dyn Model> {
        self.inner.read().expect("model store lock").clone()
    }

    /// Publish a new model version.
    pub fn swap(&self, model: Arc<dyn Model>) {
        *self.inner.write().expect("model store lock") = model;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FEATURE_DIM;

    struct Fixed(f64);

    impl Model for Fixed {
        fn transform(&self, features: &[f64; FEATURE_DIM]) -> [f64; FEATURE_DIM] {
            *features
        }
        fn predict(&self, _scaled: &[f64; FEATURE_DIM]) -> f64 {
            self.0
        }
    }

    #[test]
    fn swap_replaces_handle_but_not_snapshots() {
        let store = ModelStore::new(Arc::new(Fixed(1.0)));
        let snapshot = store.current();
        store.swap(Arc::new(Fixed(2.0)));
        assert_eq!(snapshot.predict(&[0.0; FEATURE_DIM]), 1.0);
        assert_eq!(store.current().predict(&[0.0; FEATURE_DIM]), 2.0);
    }
}

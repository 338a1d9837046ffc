//! Engine entrypoint: load config and the trained artifact once, read one
//! attempt history (file argument or stdin), print one prediction as JSON.
//! Model loading is the only blocking step and happens before any prediction;
//! a new artifact version would be published through `ModelStore::swap`.

use adapt_engine::{
    config::EngineConfig, error::EngineError, history::Attempt, logging::StructuredLogger,
    model::LinearModel, model::ModelStore, predictor::Predictor,
};
use std::io::Read;
use std::sync::Arc;
use tracing::info;

fn read_history(arg: Option<String>) -> Result<Vec<Attempt>, EngineError> {
    let data = match arg {
        Some(path) => std::fs::read_to_string(&path)
            .map_err(|e| EngineError::InvalidInput(format!("cannot read {}: {}", path, e)))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| EngineError::InvalidInput(format!("cannot read stdin: {}", e)))?;
            buf
        }
    };
    serde_json::from_str(&data)
        .map_err(|e| EngineError::InvalidInput(format!("malformed attempt history: {}", e)))
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config_path = std::env::var("ADAPT_CONFIG_PATH")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| std::path::PathBuf::from("config.json"));
    let config = EngineConfig::load(&config_path);

    StructuredLogger::init(config.log.json, &config.log.level);

    info!(model_path = ?config.model_path, "adapt engine starting");

    let store = ModelStore::new(Arc::new(LinearModel::load(&config.model_path)?));

    let attempts = read_history(std::env::args().nth(1))?;
    info!(count = attempts.len(), "attempt history loaded");

    let predictor = Predictor::new(&config.features, config.difficulty.clone());
    let model = store.current();
    let result = predictor.predict(&attempts, model.as_ref())?;

    info!(
        prediction = result.prediction,
        model_timestamp = %result.model_timestamp,
        "prediction complete"
    );
    println!("{}", serde_json::to_string(&result)?);

    Ok(())
}

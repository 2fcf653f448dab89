use crate::exercise::EXERCISE_COUNT;
use crate::{Device, InferError, ModelSource, CLASSIFY_SIZE, HISTORY_SIZE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Classifier and history settings
///
/// Every field has a default, so `{}` is a valid configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Directory holding bundled model assets
    pub assets_dir: PathBuf,
    /// Model file name, resolved against `assets_dir`
    pub model_file: String,
    pub device: Device,
    pub intra_threads: usize,
    pub classify_size: f32,
    pub history_size: f32,
    /// Maximum number of history frames; `None` keeps every frame
    pub history_capacity: Option<usize>,
    /// Added to the model's output index before the label lookup; 1 for
    /// models whose output 0 is the first exercise
    pub label_offset: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            model_file: "rehabnet_img_model.onnx".to_string(),
            device: Device::Cpu,
            intra_threads: 4,
            classify_size: CLASSIFY_SIZE,
            history_size: HISTORY_SIZE,
            history_capacity: None,
            label_offset: 0,
        }
    }
}

impl ClassifierConfig {
    pub fn from_json_str(json: &str) -> Result<Self, InferError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| InferError::Config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, InferError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| InferError::Io(format!("failed to read config {}: {e}", path.display())))?;
        Self::from_json_str(&json)
    }

    pub fn model_path(&self) -> PathBuf {
        self.assets_dir.join(&self.model_file)
    }

    pub fn model_source(&self) -> ModelSource {
        ModelSource::File(self.model_path())
    }

    pub fn validate(&self) -> Result<(), InferError> {
        if self.model_file.is_empty() {
            return Err(InferError::Config("model_file must not be empty".to_string()));
        }
        if self.intra_threads == 0 {
            return Err(InferError::Config("intra_threads must be at least 1".to_string()));
        }
        for (name, size) in [
            ("classify_size", self.classify_size),
            ("history_size", self.history_size),
        ] {
            if !size.is_finite() || size <= 0.0 {
                return Err(InferError::Config(format!(
                    "{name} must be a positive number, got {size}"
                )));
            }
        }
        if self.history_capacity == Some(0) {
            return Err(InferError::Config(
                "history_capacity must be at least 1 when set".to_string(),
            ));
        }
        if self.label_offset > EXERCISE_COUNT {
            return Err(InferError::Config(format!(
                "label_offset must be at most {EXERCISE_COUNT}, got {}",
                self.label_offset
            )));
        }
        Ok(())
    }
}

use rehab_infer::{ClassifierConfig, InferError, Person};
use serde::Deserialize;
use std::path::Path;

/// Accepted layouts of a recorded keypoint file
#[derive(Deserialize)]
#[serde(untagged)]
enum FrameFile {
    List(Vec<Person>),
    Wrapped { frames: Vec<Person> },
}

pub fn parse_frames(json: &str) -> Result<Vec<Person>, InferError> {
    let file: FrameFile = serde_json::from_str(json)
        .map_err(|e| InferError::InvalidInput(format!("failed to parse frames: {e}")))?;
    Ok(match file {
        FrameFile::List(frames) | FrameFile::Wrapped { frames } => frames,
    })
}

pub fn load_frames(path: impl AsRef<Path>) -> Result<Vec<Person>, InferError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .map_err(|e| InferError::Io(format!("failed to read {}: {e}", path.display())))?;
    parse_frames(&json)
}

/// Point the config at an explicit model file instead of the bundled asset
pub fn override_model_path(config: &mut ClassifierConfig, model_path: &Path) {
    if let Some(dir) = model_path.parent() {
        config.assets_dir = dir.to_path_buf();
    }
    if let Some(name) = model_path.file_name() {
        config.model_file = name.to_string_lossy().into_owned();
    }
}

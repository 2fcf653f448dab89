use crate::Device;
use rehab_base::TensorError;
use std::fmt;

#[derive(Debug)]
pub enum InferError {
    BackendError(String),
    ModelLoad(String),
    UnsupportedDevice(Device),
    UnsupportedDtype(String),
    UnknownInput {
        name: String,
        expected_names: Vec<String>,
    },
    ShapeMismatch {
        expected: String,
        got: String,
    },
    /// Input that cannot be classified, e.g. keypoints with zero extent
    InvalidInput(String),
    /// Model produced a class index with no exercise label
    UnmappedClass(usize),
    Config(String),
    Io(String),
}

impl fmt::Display for InferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferError::BackendError(msg) => write!(f, "backend error: {msg}"),
            InferError::ModelLoad(msg) => write!(f, "model load error: {msg}"),
            InferError::UnsupportedDevice(device) => write!(f, "unsupported device: {device}"),
            InferError::UnsupportedDtype(msg) => write!(f, "unsupported dtype: {msg}"),
            InferError::UnknownInput {
                name,
                expected_names,
            } => write!(
                f,
                "unknown input '{name}', model expects one of: {}",
                expected_names.join(", ")
            ),
            InferError::ShapeMismatch { expected, got } => {
                write!(f, "shape mismatch: expected {expected}, got {got}")
            }
            InferError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            InferError::UnmappedClass(index) => {
                write!(f, "class index {index} has no exercise label")
            }
            InferError::Config(msg) => write!(f, "config error: {msg}"),
            InferError::Io(msg) => write!(f, "io error: {msg}"),
        }
    }
}

impl std::error::Error for InferError {}

impl From<std::io::Error> for InferError {
    fn from(err: std::io::Error) -> Self {
        InferError::Io(err.to_string())
    }
}

impl From<TensorError> for InferError {
    fn from(err: TensorError) -> Self {
        InferError::ShapeMismatch {
            expected: "consistent tensor shape".to_string(),
            got: err.to_string(),
        }
    }
}

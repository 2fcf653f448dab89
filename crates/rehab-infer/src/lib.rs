pub mod backend;
pub mod backends;
pub mod config;
pub mod device;
pub mod error;
pub mod exercise;
pub mod modelsource;
pub mod pose;
pub mod session;

pub use backend::Backend;
pub use config::ClassifierConfig;
pub use device::Device;
pub use error::InferError;
pub use exercise::{
    argmax, score, softmax, Classification, ExerciseClassifier, ExerciseLabel, ExerciseTracker,
    FrameHistory, UNDEFINED_PROBABILITY,
};
pub use modelsource::ModelSource;
pub use pose::{
    filter_body_keypoints, normalize, BodyPart, Keypoint, NormalizedFrame, Person,
    BODY_PART_COUNT, CLASSIFY_SIZE, HISTORY_SIZE,
};
pub use session::Session;

#[cfg(feature = "onnx")]
pub use backends::OnnxBackend;

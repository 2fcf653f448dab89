mod classifier;
mod history;
mod labels;
mod scorer;
mod tracker;

pub use classifier::{Classification, ExerciseClassifier, UNDEFINED_PROBABILITY};
pub use history::FrameHistory;
pub use labels::{ExerciseLabel, EXERCISE_COUNT};
pub use scorer::{argmax, score, softmax};
pub use tracker::ExerciseTracker;

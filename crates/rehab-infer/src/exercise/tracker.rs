use crate::pose::Person;
use crate::{Backend, ClassifierConfig, InferError};

use super::classifier::{Classification, ExerciseClassifier};
use super::history::FrameHistory;

/// Per-session pairing of a classifier with the frames recorded so far
pub struct ExerciseTracker {
    classifier: ExerciseClassifier,
    history: FrameHistory,
}

impl ExerciseTracker {
    pub fn new(classifier: ExerciseClassifier, history: FrameHistory) -> Self {
        Self {
            classifier,
            history,
        }
    }

    pub fn from_config(
        config: &ClassifierConfig,
        backend: &dyn Backend,
    ) -> Result<Self, InferError> {
        let classifier = ExerciseClassifier::from_config(config, backend)?;
        let history =
            FrameHistory::with_capacity_limit(config.history_capacity).with_size(config.history_size);
        Ok(Self::new(classifier, history))
    }

    #[cfg(feature = "onnx")]
    pub fn load(config: &ClassifierConfig) -> Result<Self, InferError> {
        let classifier = ExerciseClassifier::load(config)?;
        let history =
            FrameHistory::with_capacity_limit(config.history_capacity).with_size(config.history_size);
        Ok(Self::new(classifier, history))
    }

    /// Classify the exercise shown in a single frame
    pub fn estimate_exercise_for_frame(
        &mut self,
        person: &Person,
    ) -> Result<Classification, InferError> {
        self.classifier.classify(person)
    }

    /// Record a frame for later sequence analysis
    pub fn save_frame(&mut self, person: &Person) -> Result<(), InferError> {
        self.history.record(person)
    }

    /// Dump the recorded frames to the log; see [`FrameHistory::estimate_exercise`]
    pub fn estimate_exercise(&self) {
        self.history.estimate_exercise();
    }

    pub fn history(&self) -> &FrameHistory {
        &self.history
    }

    pub fn reset_history(&mut self) {
        self.history.clear();
    }

    pub fn classifier_mut(&mut self) -> &mut ExerciseClassifier {
        &mut self.classifier
    }
}

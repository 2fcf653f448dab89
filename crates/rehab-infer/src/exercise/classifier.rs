use crate::pose::{normalize, NormalizedFrame, Person, CLASSIFY_SIZE};
use crate::{Backend, ClassifierConfig, InferError, ModelSource, Session};
use rehab_base::Tensor;

use super::labels::ExerciseLabel;
use super::scorer::score;

/// Probability reported when the model's confidence is not a finite number
pub const UNDEFINED_PROBABILITY: f32 = -1.0;

/// Result of classifying one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub label: ExerciseLabel,
    /// Index of the winning score in the model output
    pub class_index: usize,
    /// Softmax probability in percent, or [`UNDEFINED_PROBABILITY`]
    pub probability: f32,
}

impl Classification {
    /// `false` when the probability is the `-1` sentinel, not a low score
    pub fn has_confidence(&self) -> bool {
        self.probability != UNDEFINED_PROBABILITY
    }
}

/// Exercise classifier around a loaded model session
///
/// The model is loaded when the classifier is built and released when it is
/// dropped. Callers sharing one classifier across threads wrap it in a `Mutex`.
pub struct ExerciseClassifier {
    session: Box<dyn Session>,
    classify_size: f32,
    label_offset: usize,
}

impl ExerciseClassifier {
    /// Load a model through the given backend
    ///
    /// Uses the default classification size (28) and label offset (0).
    pub fn new(model: ModelSource, backend: &dyn Backend) -> Result<Self, InferError> {
        let session = backend.load_model(model)?;
        if session.input_names().is_empty() {
            return Err(InferError::ModelLoad("model has no inputs".to_string()));
        }
        if session.output_names().is_empty() {
            return Err(InferError::ModelLoad("model has no outputs".to_string()));
        }
        log::info!(
            "exercise model loaded via {} backend (inputs={:?}, outputs={:?})",
            backend.name(),
            session.input_names(),
            session.output_names()
        );

        Ok(Self {
            session,
            classify_size: CLASSIFY_SIZE,
            label_offset: 0,
        })
    }

    /// Load the configured model asset through the given backend
    pub fn from_config(
        config: &ClassifierConfig,
        backend: &dyn Backend,
    ) -> Result<Self, InferError> {
        config.validate()?;
        Ok(Self::new(config.model_source(), backend)?
            .with_classify_size(config.classify_size)
            .with_label_offset(config.label_offset))
    }

    /// Load the configured model with ONNX Runtime on the configured device
    #[cfg(feature = "onnx")]
    pub fn load(config: &ClassifierConfig) -> Result<Self, InferError> {
        let backend = crate::backends::OnnxBackend::new(config.device.clone())
            .with_intra_threads(config.intra_threads);
        Self::from_config(config, &backend)
    }

    /// Set the normalization box size for classifier input (builder pattern)
    pub fn with_classify_size(mut self, size: f32) -> Self {
        self.classify_size = size;
        self
    }

    /// Set the offset added to model output indices before label lookup (builder pattern)
    pub fn with_label_offset(mut self, offset: usize) -> Self {
        self.label_offset = offset;
        self
    }

    pub fn classify_size(&self) -> f32 {
        self.classify_size
    }

    pub fn label_offset(&self) -> usize {
        self.label_offset
    }

    /// Map a model output index to its exercise
    ///
    /// # Errors
    /// `InferError::UnmappedClass` with the looked-up index when the label table
    /// has no entry, which means model and label table disagree.
    pub fn label_for(&self, class_index: usize) -> Result<ExerciseLabel, InferError> {
        let index = class_index
            .checked_add(self.label_offset)
            .ok_or(InferError::UnmappedClass(class_index))?;
        ExerciseLabel::from_class_index(index).ok_or(InferError::UnmappedClass(index))
    }

    /// Run the model on a flattened coordinate vector and return its raw class scores
    ///
    /// The vector is sent as a `[1, len]` tensor to the model's first input.
    /// The first declared output must be `[C]` or `[1, C]`; its length is
    /// whatever the model declares.
    pub fn scores(&mut self, input: &[f32]) -> Result<Vec<f32>, InferError> {
        let input_name = self
            .session
            .input_names()
            .first()
            .ok_or_else(|| InferError::BackendError("model has no inputs".to_string()))?
            .clone();
        let output_name = self
            .session
            .output_names()
            .first()
            .ok_or_else(|| InferError::BackendError("model has no outputs".to_string()))?
            .clone();

        let tensor = Tensor::batch_of_one(input.to_vec());
        let mut outputs = self.session.run(&[(input_name.as_str(), tensor)])?;

        let output = outputs.remove(&output_name).ok_or_else(|| {
            InferError::BackendError(format!("model produced no '{}' output", output_name))
        })?;

        let row = output
            .as_single_row()
            .filter(|row| !row.is_empty())
            .ok_or_else(|| InferError::ShapeMismatch {
                expected: "[C] or [1, C] with C >= 1".to_string(),
                got: format!("{:?}", output.shape),
            })?;

        Ok(row.to_vec())
    }

    /// Classify an already normalized frame
    pub fn classify_frame(&mut self, frame: &NormalizedFrame) -> Result<Classification, InferError> {
        let scores = self.scores(&frame.input_vector())?;
        let (class_index, probability) = score(&scores)?;
        let label = self.label_for(class_index)?;

        if probability == UNDEFINED_PROBABILITY {
            log::warn!("confidence undefined for class {} ({})", class_index, label);
        }

        Ok(Classification {
            label,
            class_index,
            probability,
        })
    }

    /// Filter, normalize and classify the keypoints of one person
    pub fn classify(&mut self, person: &Person) -> Result<Classification, InferError> {
        let frame = normalize(person, self.classify_size)?;
        let classification = self.classify_frame(&frame)?;
        log::debug!(
            "classified {} keypoints as '{}' ({:.1}%)",
            frame.len(),
            classification.label,
            classification.probability
        );
        Ok(classification)
    }
}

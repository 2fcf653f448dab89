#![allow(dead_code)]

use rehab_base::{Tensor, Vec2};
use rehab_infer::{Backend, BodyPart, InferError, ModelSource, Person, Session, BODY_PART_COUNT};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Backend whose sessions always answer with the same output tensor
pub struct MockBackend {
    pub output: Tensor<f32>,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
    /// Every input tensor the sessions have received
    pub seen: Rc<RefCell<Vec<Tensor<f32>>>>,
}

impl MockBackend {
    pub fn with_scores(scores: Vec<f32>) -> Self {
        Self::with_output(Tensor::batch_of_one(scores))
    }

    pub fn with_output(output: Tensor<f32>) -> Self {
        Self {
            output,
            inputs: vec!["keypoints".to_string()],
            outputs: vec!["logits".to_string()],
            seen: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl Backend for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    fn load_model(&self, model: ModelSource) -> Result<Box<dyn Session>, InferError> {
        model.load()?;
        Ok(Box::new(MockSession {
            output: self.output.clone(),
            inputs: self.inputs.clone(),
            outputs: self.outputs.clone(),
            seen: self.seen.clone(),
        }))
    }
}

pub struct MockSession {
    output: Tensor<f32>,
    inputs: Vec<String>,
    outputs: Vec<String>,
    seen: Rc<RefCell<Vec<Tensor<f32>>>>,
}

impl Session for MockSession {
    fn run(
        &mut self,
        inputs: &[(&str, Tensor<f32>)],
    ) -> Result<HashMap<String, Tensor<f32>>, InferError> {
        for (name, tensor) in inputs {
            if !self.inputs.iter().any(|n| n == name) {
                return Err(InferError::UnknownInput {
                    name: name.to_string(),
                    expected_names: self.inputs.clone(),
                });
            }
            self.seen.borrow_mut().push(tensor.clone());
        }
        Ok(self
            .outputs
            .iter()
            .map(|name| (name.clone(), self.output.clone()))
            .collect())
    }

    fn input_names(&self) -> &[String] {
        &self.inputs
    }

    fn output_names(&self) -> &[String] {
        &self.outputs
    }
}

pub fn dummy_model() -> ModelSource {
    ModelSource::Memory(vec![0x08, 0x01])
}

/// A standing figure roughly 100 wide and 200 tall, offset from the origin
pub fn standing_person() -> Person {
    let positions: [(f32, f32); BODY_PART_COUNT] = [
        (150.0, 20.0),  // nose
        (145.0, 15.0),  // left eye
        (155.0, 15.0),  // right eye
        (140.0, 18.0),  // left ear
        (160.0, 18.0),  // right ear
        (120.0, 60.0),  // left shoulder
        (180.0, 60.0),  // right shoulder
        (110.0, 100.0), // left elbow
        (190.0, 100.0), // right elbow
        (100.0, 140.0), // left wrist
        (200.0, 140.0), // right wrist
        (130.0, 140.0), // left hip
        (170.0, 140.0), // right hip
        (130.0, 190.0), // left knee
        (170.0, 190.0), // right knee
        (130.0, 240.0), // left ankle
        (170.0, 240.0), // right ankle
    ];
    Person::from_positions(positions.map(|(x, y)| Vec2::new(x, y)))
}

pub fn person_from_body_points(points: &[(BodyPart, f32, f32)]) -> Person {
    Person::new(
        points
            .iter()
            .map(|&(body_part, x, y)| rehab_infer::Keypoint {
                body_part,
                position: Vec2::new(x, y),
                score: 1.0,
            })
            .collect(),
    )
}

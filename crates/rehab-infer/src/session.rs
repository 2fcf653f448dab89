use crate::InferError;
use rehab_base::Tensor;
use std::collections::HashMap;

/// A loaded model, ready to run
///
/// `run` takes `&mut self`: a session is never driven from two places at once.
pub trait Session {
    fn run(
        &mut self,
        inputs: &[(&str, Tensor<f32>)],
    ) -> Result<HashMap<String, Tensor<f32>>, InferError>;
    fn input_names(&self) -> &[String];
    fn output_names(&self) -> &[String];
}

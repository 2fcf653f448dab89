use crate::{Backend, Device, InferError, ModelSource, Session};
use ndarray::ArrayD;
use ort::{inputs, session::Session as OrtSession, value::TensorRef};
use rehab_base::Tensor;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Intra-op thread count used when none is configured
pub const DEFAULT_INTRA_THREADS: usize = 4;

static ORT_INIT: OnceLock<()> = OnceLock::new();

fn ensure_ort_init() {
    ORT_INIT.get_or_init(|| {
        if let Err(e) = ort::init().with_name("rehab").commit() {
            log::warn!("failed to commit ONNX Runtime environment: {}", e);
        }
    });
}

/// ONNX Runtime backend
pub struct OnnxBackend {
    device: Device,
    intra_threads: usize,
}

impl OnnxBackend {
    pub fn new(device: Device) -> Self {
        Self {
            device,
            intra_threads: DEFAULT_INTRA_THREADS,
        }
    }

    /// Set the size of the runtime's intra-op thread pool (builder pattern)
    pub fn with_intra_threads(mut self, threads: usize) -> Self {
        self.intra_threads = threads.max(1);
        self
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    pub fn intra_threads(&self) -> usize {
        self.intra_threads
    }
}

impl Backend for OnnxBackend {
    fn name(&self) -> &str {
        "onnx"
    }

    fn load_model(&self, model: ModelSource) -> Result<Box<dyn Session>, InferError> {
        ensure_ort_init();

        let device = &self.device;
        let mut builder = OrtSession::builder()
            .map_err(|e| {
                InferError::BackendError(format!("failed to create session builder: {}", e))
            })?
            .with_intra_threads(self.intra_threads)
            .map_err(|e| {
                InferError::BackendError(format!("failed to set intra-op threads: {}", e))
            })?;

        builder = match device {
            Device::Cpu => {
                log::info!("[onnx] using CPU execution provider ({} threads)", self.intra_threads);
                builder
            }
            #[cfg(feature = "cuda")]
            Device::Cuda { device_id } => {
                use ort::execution_providers::CUDAExecutionProvider;
                log::info!("[onnx] using CUDA execution provider (device_id={})", device_id);
                builder
                    .with_execution_providers([CUDAExecutionProvider::default()
                        .with_device_id(*device_id)
                        .build()
                        .error_on_failure()])
                    .map_err(|_| InferError::UnsupportedDevice(device.clone()))?
            }
            #[cfg(not(feature = "cuda"))]
            Device::Cuda { .. } => {
                return Err(InferError::UnsupportedDevice(device.clone()));
            }
            #[cfg(feature = "nnapi")]
            Device::Nnapi => {
                use ort::execution_providers::NNAPIExecutionProvider;
                log::info!("[onnx] using NNAPI execution provider");
                builder
                    .with_execution_providers([NNAPIExecutionProvider::default()
                        .build()
                        .error_on_failure()])
                    .map_err(|_| InferError::UnsupportedDevice(device.clone()))?
            }
            #[cfg(not(feature = "nnapi"))]
            Device::Nnapi => {
                return Err(InferError::UnsupportedDevice(device.clone()));
            }
        };

        let bytes = model.load()?;
        let session = builder.commit_from_memory(&bytes).map_err(|e| {
            InferError::ModelLoad(format!("failed to build session from model: {}", e))
        })?;

        let input_names: Vec<String> = session.inputs.iter().map(|i| i.name.clone()).collect();
        let output_names: Vec<String> = session.outputs.iter().map(|o| o.name.clone()).collect();
        log::debug!(
            "[onnx] model loaded: inputs={:?} outputs={:?}",
            input_names,
            output_names
        );

        Ok(Box::new(OnnxSession {
            session,
            input_names,
            output_names,
        }))
    }
}

pub struct OnnxSession {
    session: OrtSession,
    input_names: Vec<String>,
    output_names: Vec<String>,
}

impl Session for OnnxSession {
    fn run(
        &mut self,
        inputs: &[(&str, Tensor<f32>)],
    ) -> Result<HashMap<String, Tensor<f32>>, InferError> {
        for (name, _) in inputs {
            if !self.input_names.iter().any(|n| n == name) {
                return Err(InferError::UnknownInput {
                    name: name.to_string(),
                    expected_names: self.input_names.clone(),
                });
            }
        }

        // Classifier models take a single flattened coordinate vector
        let [(name, tensor)] = inputs else {
            return Err(InferError::BackendError(format!(
                "expected exactly 1 input, got {}",
                inputs.len()
            )));
        };

        let array = tensor_to_ndarray(tensor.clone())?;
        let tensor_ref = TensorRef::from_array_view(array.view()).map_err(|e| {
            InferError::BackendError(format!("failed to create tensor ref: {}", e))
        })?;
        let outputs = self
            .session
            .run(inputs![*name => tensor_ref])
            .map_err(|e| InferError::BackendError(format!("inference failed: {}", e)))?;

        let mut result = HashMap::new();
        for output_name in &self.output_names {
            let array = outputs[output_name.as_str()]
                .try_extract_array::<f32>()
                .map_err(|e| {
                    InferError::UnsupportedDtype(format!(
                        "output '{}' is not f32: {}",
                        output_name, e
                    ))
                })?;
            result.insert(output_name.clone(), ndarray_to_tensor(array)?);
        }

        Ok(result)
    }

    fn input_names(&self) -> &[String] {
        &self.input_names
    }

    fn output_names(&self) -> &[String] {
        &self.output_names
    }
}

pub fn tensor_to_ndarray(tensor: Tensor<f32>) -> Result<ArrayD<f32>, InferError> {
    ArrayD::from_shape_vec(tensor.shape, tensor.data).map_err(|e| {
        InferError::BackendError(format!("failed to create ndarray from tensor: {}", e))
    })
}

pub fn ndarray_to_tensor(
    array: ndarray::ArrayView<'_, f32, ndarray::IxDyn>,
) -> Result<Tensor<f32>, InferError> {
    let shape = array.shape().to_vec();
    let data = array.iter().copied().collect();
    Ok(Tensor::new(shape, data)?)
}

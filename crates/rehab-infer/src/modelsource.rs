use crate::InferError;
use memmap2::Mmap;
use std::fs::File;
use std::ops::Deref;
use std::path::PathBuf;

pub enum ModelSource {
    File(PathBuf),
    Memory(Vec<u8>),
}

/// Model bytes ready to hand to a runtime
///
/// File sources are memory-mapped read-only rather than copied.
pub enum ModelBytes {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl Deref for ModelBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            ModelBytes::Mapped(mmap) => mmap,
            ModelBytes::Owned(bytes) => bytes,
        }
    }
}

impl ModelSource {
    pub fn load(self) -> Result<ModelBytes, InferError> {
        match self {
            ModelSource::File(path) => {
                let file = File::open(&path).map_err(|e| {
                    InferError::ModelLoad(format!("failed to open {}: {e}", path.display()))
                })?;
                // SAFETY: the mapping is read-only; model assets are not rewritten while loaded
                let mmap = unsafe { Mmap::map(&file) }.map_err(|e| {
                    InferError::ModelLoad(format!("failed to memory-map {}: {e}", path.display()))
                })?;
                if mmap.is_empty() {
                    return Err(InferError::ModelLoad(format!(
                        "model file {} is empty",
                        path.display()
                    )));
                }
                Ok(ModelBytes::Mapped(mmap))
            }
            ModelSource::Memory(bytes) => {
                if bytes.is_empty() {
                    return Err(InferError::ModelLoad("model buffer is empty".to_string()));
                }
                Ok(ModelBytes::Owned(bytes))
            }
        }
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Execution device requested for a model
///
/// Devices other than `Cpu` need the matching cargo feature (`cuda`, `nnapi`);
/// without it the backend refuses the device instead of falling back to CPU.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Device {
    #[default]
    Cpu,
    Cuda {
        device_id: i32,
    },
    Nnapi,
}

impl Device {
    pub fn is_cpu(&self) -> bool {
        matches!(self, Device::Cpu)
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Cpu => write!(f, "CPU"),
            Device::Cuda { device_id } => write!(f, "CUDA(device_id={device_id})"),
            Device::Nnapi => write!(f, "NNAPI"),
        }
    }
}

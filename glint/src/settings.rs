use crate::{accel::AcceleratorType, camera::CameraParameters, integrators::DEFAULT_MAX_LEVEL};

use serde::{Deserialize, Serialize};

use std::path::Path;

/// Everything about a render that isn't part of the scene.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Film width and height in pixels
    pub resolution: (u32, u32),
    /// Maximum number of bounces followed for a camera ray
    pub max_level: u32,
    pub accelerator: AcceleratorType,
    /// Worker threads, all cores if not set
    pub threads: Option<usize>,
    pub camera: CameraParameters,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            resolution: (640, 480),
            max_level: DEFAULT_MAX_LEVEL,
            accelerator: AcceleratorType::default(),
            threads: None,
            camera: CameraParameters::default(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

impl RenderSettings {
    /// Loads settings from a yaml file, fields missing from the file use their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .map_err(|why| format!("Could not open '{}': {}", path.display(), why))?;
        Self::from_yaml(std::io::BufReader::new(file))
    }

    pub fn from_yaml(reader: impl std::io::Read) -> Result<Self> {
        let ret: Self = serde_yaml::from_reader(reader)?;
        if ret.resolution.0 == 0 || ret.resolution.1 == 0 {
            return Err(format!(
                "Invalid resolution {}x{}",
                ret.resolution.0, ret.resolution.1
            )
            .into());
        }
        if ret.threads == Some(0) {
            return Err("Thread count can't be zero".into());
        }
        Ok(ret)
    }

    /// Returns the number of render threads to use.
    pub fn thread_count(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get)
    }
}

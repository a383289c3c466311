mod linear;
mod voxel_grid;

pub use linear::LinearScan;
pub use voxel_grid::{CellWalk, VoxelGrid, DEFAULT_DENSITY};

use crate::{
    geometry::{Geometries, Hit},
    math::Ray,
};

use serde::{Deserialize, Serialize};
use strum::Display;

use std::time::Instant;

/// Nearest and all-hits ray queries over a fixed set of [`Geometries`].
///
/// Built once before rendering and only read afterwards so it can be shared between
/// any number of render threads.
pub trait Accelerator: Send + Sync {
    /// Returns the geometries this `Accelerator` was built over.
    fn geometries(&self) -> &Geometries;

    /// Returns the hit closest to the ray origin.
    fn nearest_hit(&self, ray: &Ray<f32>) -> Option<Hit<'_>>;

    /// Returns every hit in `(0, t_max]`, in no particular order.
    fn all_hits(&self, ray: &Ray<f32>, t_max: f32) -> Vec<Hit<'_>>;
}

#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize, Display)]
pub enum AcceleratorType {
    /// Test every geometry for every ray
    Linear,
    /// Sparse uniform grid with roughly `density` cells per bounded geometry
    VoxelGrid { density: f32 },
}

impl Default for AcceleratorType {
    fn default() -> Self {
        AcceleratorType::VoxelGrid {
            density: DEFAULT_DENSITY,
        }
    }
}

impl AcceleratorType {
    /// Builds the `Accelerator` over `geometries`.
    pub fn build(self, geometries: Geometries) -> Box<dyn Accelerator> {
        let build_start = Instant::now();
        let geometry_count = geometries.len();

        let ret: Box<dyn Accelerator> = match self {
            AcceleratorType::Linear => Box::new(LinearScan::new(geometries)),
            AcceleratorType::VoxelGrid { density } => {
                Box::new(VoxelGrid::new(geometries, density))
            }
        };

        glint_info!(
            "{}: Built over {} geometries in {:.3}s",
            self,
            geometry_count,
            build_start.elapsed().as_secs_f32()
        );

        ret
    }
}

use super::Accelerator;
use crate::{
    geometry::{Geometries, Hit},
    math::Ray,
};

/// Brute force scan over every geometry.
pub struct LinearScan {
    geometries: Geometries,
}

impl LinearScan {
    pub fn new(geometries: Geometries) -> Self {
        Self { geometries }
    }
}

impl Accelerator for LinearScan {
    fn geometries(&self) -> &Geometries {
        &self.geometries
    }

    fn nearest_hit(&self, ray: &Ray<f32>) -> Option<Hit<'_>> {
        self.geometries.nearest(ray, f32::INFINITY)
    }

    fn all_hits(&self, ray: &Ray<f32>, t_max: f32) -> Vec<Hit<'_>> {
        self.geometries.intersect(ray, t_max)
    }
}

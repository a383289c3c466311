use super::{Light, LightSample};
use crate::{
    error::GeometryError,
    math::{Point3, Spectrum, Vec3},
};

// Based on Physically Based Rendering 3rd ed.
// https://pbr-book.org/3ed-2018/Light_Sources/Distant_Lights

/// Light from infinitely far away, e.g. the sun.
pub struct DirectionalLight {
    direction: Vec3<f32>,
    intensity: Spectrum<f32>,
}

impl DirectionalLight {
    /// Creates a new `DirectionalLight` with the given intensity shining toward `direction`.
    pub fn new(intensity: Spectrum<f32>, direction: Vec3<f32>) -> Result<Self, GeometryError> {
        Ok(Self {
            direction: direction.try_normalized()?,
            intensity,
        })
    }
}

impl Light for DirectionalLight {
    fn sample_li(&self, _p: Point3<f32>) -> LightSample {
        LightSample {
            l: self.direction,
            dist: f32::INFINITY,
            li: self.intensity,
        }
    }
}

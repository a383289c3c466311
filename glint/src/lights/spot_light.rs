use super::{Light, LightSample, PointLight};
use crate::{
    error::GeometryError,
    math::{Point3, Vec3},
};

/// A [`PointLight`] focused toward a direction.
///
/// Intensity falls off with `max(0, dir·l)^narrow_beam`, a `narrow_beam` of 1 is the
/// classic cosine spot and higher values tighten the beam.
pub struct SpotLight {
    point: PointLight,
    direction: Vec3<f32>,
    narrow_beam: u32,
}

impl SpotLight {
    /// Creates a new `SpotLight` from a point light pointed toward `direction`.
    pub fn new(point: PointLight, direction: Vec3<f32>) -> Result<Self, GeometryError> {
        Ok(Self {
            point,
            direction: direction.try_normalized()?,
            narrow_beam: 1,
        })
    }

    pub fn with_narrow_beam(mut self, narrow_beam: u32) -> Self {
        self.narrow_beam = narrow_beam;
        self
    }

    fn falloff(&self, l: Vec3<f32>) -> f32 {
        let cos_theta = self.direction.dot(l);
        if cos_theta <= 0.0 {
            0.0
        } else {
            cos_theta.powi(self.narrow_beam as i32)
        }
    }
}

impl Light for SpotLight {
    fn sample_li(&self, p: Point3<f32>) -> LightSample {
        let (l, dist, li) = self.point.falloff(p);
        LightSample {
            l,
            dist,
            li: li * self.falloff(l),
        }
    }
}

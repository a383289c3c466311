use crate::{
    error::GeometryError,
    math::{Point3, Ray, Vec3},
};

use serde::{Deserialize, Serialize};

/// Placement of a [`Camera`]
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CameraParameters {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vec3<f32>,
    /// Vertical field of view in degrees
    pub fov_y: f32,
}

impl Default for CameraParameters {
    fn default() -> Self {
        Self {
            position: Point3::new(0.0, 0.0, -10.0),
            target: Point3::new(0.0, 0.0, 0.0),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov_y: 45.0,
        }
    }
}

/// A simple pinhole camera
#[derive(Copy, Clone, Debug)]
pub struct Camera {
    position: Point3<f32>,
    forward: Vec3<f32>,
    // Scaled to span half of the image plane at unit distance
    right: Vec3<f32>,
    up: Vec3<f32>,
    res: (u32, u32),
}

impl Camera {
    /// Creates a new `Camera` for an image of `res` pixels.
    ///
    /// Fails if the view direction is zero or parallel to `up`.
    pub fn new(params: CameraParameters, res: (u32, u32)) -> Result<Self, GeometryError> {
        let forward = (params.target - params.position).try_normalized()?;
        let right = forward.cross(params.up);
        if right.len_sqr() < 1e-12 {
            return Err(GeometryError::DegenerateCamera);
        }
        let right = right.normalized();
        let up = right.cross(forward);

        let half_h = (params.fov_y.to_radians() / 2.0).tan();
        let half_w = half_h * (res.0 as f32) / (res.1 as f32);

        Ok(Self {
            position: params.position,
            forward,
            right: right * half_w,
            up: up * half_h,
            res,
        })
    }

    pub fn res(&self) -> (u32, u32) {
        self.res
    }

    /// Returns the ray through the center of pixel `(px, py)`, `(0, 0)` being top left.
    pub fn ray(&self, px: u32, py: u32) -> Ray<f32> {
        let x = 2.0 * ((px as f32) + 0.5) / (self.res.0 as f32) - 1.0;
        let y = 1.0 - 2.0 * ((py as f32) + 0.5) / (self.res.1 as f32);
        let d = self.forward + self.right * x + self.up * y;
        // The forward component keeps d non-zero
        Ray {
            o: self.position,
            d: d.normalized(),
        }
    }
}

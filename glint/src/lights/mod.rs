mod directional_light;
mod point_light;
mod spot_light;

pub use directional_light::DirectionalLight;
pub use point_light::{Attenuation, PointLight};
pub use spot_light::SpotLight;

use crate::math::{Point3, Spectrum, Vec3, BLACK};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Light_Sources/Light_Interface.html#Light

/// Sample from a light source for visibility testing and shading
#[derive(Copy, Clone, Debug)]
pub struct LightSample {
    /// Unit direction the light travels in, i.e. from the light toward the shaded point
    pub l: Vec3<f32>,
    /// Distance to the light, infinite for lights without a position
    pub dist: f32,
    /// Incoming intensity at the shaded point
    pub li: Spectrum<f32>,
}

pub trait Light: Send + Sync {
    /// Returns a [`LightSample`] from this `Light` to `p`.
    ///
    /// A `p` at the light's position gets a zero `l` and no radiance.
    fn sample_li(&self, p: Point3<f32>) -> LightSample;
}

/// Constant light reaching every surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AmbientLight {
    intensity: Spectrum<f32>,
}

/// No ambient light at all.
pub const NO_AMBIENT: AmbientLight = AmbientLight { intensity: BLACK };

impl AmbientLight {
    /// Creates a new `AmbientLight` from the light color `i_a` scaled by `k_a`.
    pub fn new(i_a: Spectrum<f32>, k_a: Spectrum<f32>) -> Self {
        Self {
            intensity: i_a * k_a,
        }
    }

    pub fn intensity(&self) -> Spectrum<f32> {
        self.intensity
    }
}

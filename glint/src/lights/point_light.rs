use super::{Light, LightSample};
use crate::math::{Point3, Spectrum, Vec3, BLACK};

/// Distance falloff coefficients, intensity is divided by `k_c + k_l·d + k_q·d²`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Attenuation {
    pub k_c: f32,
    pub k_l: f32,
    pub k_q: f32,
}

impl Default for Attenuation {
    fn default() -> Self {
        Self {
            k_c: 1.0,
            k_l: 0.0,
            k_q: 0.0,
        }
    }
}

impl Attenuation {
    #[inline]
    pub fn factor(&self, dist: f32) -> f32 {
        self.k_c + self.k_l * dist + self.k_q * dist * dist
    }
}

/// An omnidirectional light at a point.
pub struct PointLight {
    p: Point3<f32>,
    i: Spectrum<f32>,
    attenuation: Attenuation,
}

impl PointLight {
    /// Creates a new `PointLight` at `p` with the intensity `i` and no distance falloff.
    pub fn new(p: Point3<f32>, i: Spectrum<f32>) -> Self {
        Self {
            p,
            i,
            attenuation: Attenuation::default(),
        }
    }

    pub fn with_attenuation(mut self, attenuation: Attenuation) -> Self {
        self.attenuation = attenuation;
        self
    }

    pub fn position(&self) -> Point3<f32> {
        self.p
    }

    /// Returns the unit direction from the light to `p`, the distance and the attenuated intensity.
    ///
    /// A `p` at the light's position gets a zero direction and no intensity.
    pub(super) fn falloff(&self, p: Point3<f32>) -> (Vec3<f32>, f32, Spectrum<f32>) {
        let from_light = p - self.p;
        let dist = from_light.len();
        if dist == 0.0 {
            return (Vec3::zeros(), 0.0, BLACK);
        }
        let li = self.i / self.attenuation.factor(dist);
        (from_light / dist, dist, li)
    }
}

impl Light for PointLight {
    fn sample_li(&self, p: Point3<f32>) -> LightSample {
        let (l, dist, li) = self.falloff(p);
        LightSample { l, dist, li }
    }
}

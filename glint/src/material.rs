use crate::math::{Spectrum, BLACK, WHITE};

/// Phong-style surface coefficients.
///
/// Values aren't clamped, keeping them physically sane is up to the scene.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    /// Ambient
    pub k_a: Spectrum<f32>,
    /// Diffuse
    pub k_d: Spectrum<f32>,
    /// Specular
    pub k_s: Spectrum<f32>,
    /// Transmission
    pub k_t: Spectrum<f32>,
    /// Reflection
    pub k_r: Spectrum<f32>,
    /// Specular exponent
    pub shininess: u32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            k_a: WHITE,
            k_d: BLACK,
            k_s: BLACK,
            k_t: BLACK,
            k_r: BLACK,
            shininess: 0,
        }
    }
}

impl Material {
    pub fn with_k_a(mut self, k_a: Spectrum<f32>) -> Self {
        self.k_a = k_a;
        self
    }

    pub fn with_k_d(mut self, k_d: Spectrum<f32>) -> Self {
        self.k_d = k_d;
        self
    }

    pub fn with_k_s(mut self, k_s: Spectrum<f32>) -> Self {
        self.k_s = k_s;
        self
    }

    pub fn with_k_t(mut self, k_t: Spectrum<f32>) -> Self {
        self.k_t = k_t;
        self
    }

    pub fn with_k_r(mut self, k_r: Spectrum<f32>) -> Self {
        self.k_r = k_r;
        self
    }

    pub fn with_shininess(mut self, shininess: u32) -> Self {
        self.shininess = shininess;
        self
    }
}

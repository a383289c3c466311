mod whitted;

pub use whitted::{Whitted, DEFAULT_MAX_LEVEL, DELTA, INITIAL_K, MIN_CALC_COLOR_K};

use crate::math::{Spectrum, BLACK};

/// Result of tracing a single camera ray.
#[derive(Copy, Clone, Debug)]
pub struct RadianceResult {
    pub li: Spectrum<f32>,
    /// Number of scene queries made, including shadow and secondary rays
    pub ray_scene_intersections: usize,
}

impl Default for RadianceResult {
    fn default() -> Self {
        Self {
            li: BLACK,
            ray_scene_intersections: 0,
        }
    }
}

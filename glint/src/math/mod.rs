#[macro_use]
mod macros;

mod bounds;
mod common;
mod normal;
mod point;
mod ray;
mod spectrum;
mod vector;

pub use bounds::Bounds3;
pub use common::{FloatValueType, Maxi, Mini, ValueType};
pub use normal::{normal, Normal};
pub use point::{point3, Point3};
pub use ray::Ray;
pub use spectrum::{spectrum, Spectrum, BLACK, WHITE};
pub use vector::{vec3, Vec3};

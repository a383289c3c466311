#[macro_use]
mod macros;

pub mod accel;
pub mod camera;
pub mod error;
pub mod film;
pub mod geometry;
pub mod integrators;
pub mod lights;
pub mod material;
pub mod math;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod shapes;

#[doc(hidden)]
pub use log;

#[macro_use]
mod macros;
mod xml;

use crate::{
    accel::{Accelerator, AcceleratorType},
    geometry::{Geometries, Geometry, Hit},
    lights::{AmbientLight, Light},
    math::{Ray, Spectrum},
};

use std::{io::Read, path::Path, time::Instant};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Everything a ray can interact with.
///
/// Immutable once built, queries can be issued from any number of threads.
pub struct Scene {
    pub name: String,
    pub background: Spectrum<f32>,
    pub ambient: AmbientLight,
    pub lights: Vec<Box<dyn Light>>,
    accelerator: Box<dyn Accelerator>,
}

impl Scene {
    /// Starts building a new `Scene`.
    pub fn builder(name: &str) -> SceneBuilder {
        SceneBuilder::new(name)
    }

    /// Loads a scene from an xml file
    ///
    /// Also returns the time it took to load in seconds.
    pub fn load(path: &Path, accelerator: AcceleratorType) -> Result<(Scene, f32)> {
        let load_start = Instant::now();

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("scene")
            .to_string();
        let file = std::fs::File::open(path)
            .map_err(|why| format!("Could not open '{}': {}", path.display(), why))?;
        let scene = xml::load(std::io::BufReader::new(file), &name, accelerator)?;

        let total_secs = load_start.elapsed().as_secs_f32();

        glint_info!("XML: Loading took {:.2}s in total", total_secs);

        Ok((scene, total_secs))
    }

    /// Parses a scene from xml data.
    pub fn from_xml(
        reader: impl Read,
        name: &str,
        accelerator: AcceleratorType,
    ) -> Result<Scene> {
        xml::load(reader, name, accelerator)
    }

    pub fn geometries(&self) -> &Geometries {
        self.accelerator.geometries()
    }

    /// Returns the hit closest to the ray origin.
    pub fn nearest_hit(&self, ray: &Ray<f32>) -> Option<Hit<'_>> {
        self.accelerator.nearest_hit(ray)
    }

    /// Returns every hit in `(0, t_max]`.
    pub fn all_hits(&self, ray: &Ray<f32>, t_max: f32) -> Vec<Hit<'_>> {
        self.accelerator.all_hits(ray, t_max)
    }
}

/// Collects the parts of a [`Scene`].
///
/// Background and ambient light have to be set explicitly, [`SceneBuilder::build`] fails
/// without them.
pub struct SceneBuilder {
    name: String,
    background: Option<Spectrum<f32>>,
    ambient: Option<AmbientLight>,
    geometries: Geometries,
    lights: Vec<Box<dyn Light>>,
    accelerator: AcceleratorType,
}

impl SceneBuilder {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            background: None,
            ambient: None,
            geometries: Geometries::new(),
            lights: Vec::new(),
            accelerator: AcceleratorType::default(),
        }
    }

    pub fn background(mut self, background: Spectrum<f32>) -> Self {
        self.background = Some(background);
        self
    }

    pub fn ambient(mut self, ambient: AmbientLight) -> Self {
        self.ambient = Some(ambient);
        self
    }

    pub fn geometry(mut self, geometry: Geometry) -> Self {
        self.geometries.add(geometry);
        self
    }

    pub fn light(mut self, light: impl Light + 'static) -> Self {
        self.lights.push(Box::new(light));
        self
    }

    pub fn boxed_light(mut self, light: Box<dyn Light>) -> Self {
        self.lights.push(light);
        self
    }

    pub fn accelerator(mut self, accelerator: AcceleratorType) -> Self {
        self.accelerator = accelerator;
        self
    }

    /// Builds the [`Scene`] and its acceleration structure.
    pub fn build(self) -> Result<Scene> {
        let background = match self.background {
            Some(b) => b,
            None => return Err(format!("Scene '{}' has no background", self.name).into()),
        };
        let ambient = match self.ambient {
            Some(a) => a,
            None => return Err(format!("Scene '{}' has no ambient light", self.name).into()),
        };

        Ok(Scene {
            name: self.name,
            background,
            ambient,
            lights: self.lights,
            accelerator: self.accelerator.build(self.geometries),
        })
    }
}

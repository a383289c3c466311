use crate::{
    material::Material,
    math::{Bounds3, Normal, Point3, Ray, Spectrum, BLACK},
    shapes::Shape,
};

/// A [`Shape`] with its surface properties.
pub struct Geometry {
    shape: Box<dyn Shape>,
    material: Material,
    emission: Spectrum<f32>,
}

/// A ray hitting a [`Geometry`].
///
/// Only valid for the query that produced it.
#[derive(Copy, Clone)]
pub struct Hit<'a> {
    /// Hit distance along the ray
    pub t: f32,
    /// World position
    pub p: Point3<f32>,
    /// The geometry that was hit
    pub geometry: &'a Geometry,
}

impl<'a> std::fmt::Debug for Hit<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hit")
            .field("t", &self.t)
            .field("p", &self.p)
            .finish()
    }
}

impl Geometry {
    /// Creates a new `Geometry` with the default [`Material`] and no emission.
    pub fn new(shape: impl Shape + 'static) -> Self {
        Self {
            shape: Box::new(shape),
            material: Material::default(),
            emission: BLACK,
        }
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn with_emission(mut self, emission: Spectrum<f32>) -> Self {
        self.emission = emission;
        self
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn emission(&self) -> Spectrum<f32> {
        self.emission
    }

    pub fn shape(&self) -> &dyn Shape {
        self.shape.as_ref()
    }

    /// Returns the unit surface normal at `p`.
    pub fn normal(&self, p: Point3<f32>) -> Normal<f32> {
        self.shape.normal(p)
    }

    /// Returns the hits of `ray` in `(0, t_max]`, in no particular order.
    pub fn intersect(&self, ray: &Ray<f32>, t_max: f32) -> Vec<Hit<'_>> {
        self.shape
            .intersect(ray, t_max)
            .into_iter()
            .map(|t| self.hit(ray, t))
            .collect()
    }

    /// Returns the closest hit of `ray` in `(0, t_max]`.
    pub fn nearest(&self, ray: &Ray<f32>, t_max: f32) -> Option<Hit<'_>> {
        self.shape.nearest(ray, t_max).map(|t| self.hit(ray, t))
    }

    /// Returns the world space AABB or `None` if the underlying shape is unbounded.
    pub fn world_bound(&self) -> Option<Bounds3<f32>> {
        self.shape.world_bound()
    }

    fn hit(&self, ray: &Ray<f32>, t: f32) -> Hit<'_> {
        Hit {
            t,
            p: ray.point(t),
            geometry: self,
        }
    }
}

/// A collection of [`Geometry`] intersected as a whole.
#[derive(Default)]
pub struct Geometries {
    geometries: Vec<Geometry>,
}

impl Geometries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, geometry: Geometry) {
        self.geometries.push(geometry);
    }

    pub fn len(&self) -> usize {
        self.geometries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Geometry> {
        self.geometries.iter()
    }

    pub fn get(&self, i: usize) -> Option<&Geometry> {
        self.geometries.get(i)
    }

    /// Returns the hits of all children in `(0, t_max]`.
    ///
    /// There is no ordering guarantee, the caller has to pick the nearest if needed.
    pub fn intersect(&self, ray: &Ray<f32>, t_max: f32) -> Vec<Hit<'_>> {
        self.geometries
            .iter()
            .flat_map(|g| g.intersect(ray, t_max))
            .collect()
    }

    /// Returns the closest hit among all children in `(0, t_max]`.
    pub fn nearest(&self, ray: &Ray<f32>, t_max: f32) -> Option<Hit<'_>> {
        closest(self.geometries.iter().filter_map(|g| g.nearest(ray, t_max)))
    }

    /// Returns the union of the children's bounds.
    ///
    /// A single unbounded child makes the whole collection unbounded. An empty collection
    /// has no bounds either.
    pub fn world_bound(&self) -> Option<Bounds3<f32>> {
        let mut bounds = self.geometries.iter().map(|g| g.world_bound());
        let first = bounds.next()??;
        bounds.try_fold(first, |acc, b| b.map(|b| acc.union_b(b)))
    }
}

impl From<Vec<Geometry>> for Geometries {
    fn from(geometries: Vec<Geometry>) -> Self {
        Self { geometries }
    }
}

impl<'a> IntoIterator for &'a Geometries {
    type Item = &'a Geometry;
    type IntoIter = std::slice::Iter<'a, Geometry>;

    fn into_iter(self) -> Self::IntoIter {
        self.geometries.iter()
    }
}

/// Picks the hit with the smallest distance.
pub fn closest<'a>(hits: impl IntoIterator<Item = Hit<'a>>) -> Option<Hit<'a>> {
    hits.into_iter().reduce(|a, b| if b.t < a.t { b } else { a })
}

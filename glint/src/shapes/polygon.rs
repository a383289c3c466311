use super::{in_range, Plane, Shape, EPSILON};
use crate::{
    error::GeometryError,
    math::{Bounds3, Normal, Point3, Ray, Vec3},
};

/// A convex, planar polygon.
///
/// Vertices are expected in a consistent winding order, the normal follows it
/// by the right hand rule.
#[derive(Debug, Clone)]
pub struct Polygon {
    vertices: Vec<Point3<f32>>,
    plane: Plane,
}

impl Polygon {
    /// Creates a new `Polygon` from its vertices.
    ///
    /// Fails if there are fewer than three vertices, the first three are degenerate,
    /// any vertex is off the plane of the first three, the polygon is concave or a
    /// vertex touches another edge.
    pub fn new(vertices: Vec<Point3<f32>>) -> Result<Self, GeometryError> {
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices(vertices.len()));
        }

        let plane = Plane::from_points(vertices[0], vertices[1], vertices[2])?;
        let ret = Self { vertices, plane };
        if ret.vertices.len() > 3 {
            ret.validate()?;
        }

        Ok(ret)
    }

    pub fn vertices(&self) -> &[Point3<f32>] {
        &self.vertices
    }

    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    fn validate(&self) -> Result<(), GeometryError> {
        let vs = &self.vertices;
        let count = vs.len();
        let n = Vec3::from(self.plane.n());

        for (i, &v) in vs.iter().enumerate().skip(3) {
            if !self.plane.contains(v) {
                return Err(GeometryError::NonPlanarVertex(i));
            }
        }

        // Every turn has to go the same way around the normal for the polygon to be convex
        let mut winding = None;
        for i in 0..count {
            let prev = vs[(i + count - 1) % count];
            let next = vs[(i + 1) % count];
            let e0 = vs[i] - prev;
            let e1 = next - vs[i];
            if e0.is_zero() || e1.is_zero() {
                return Err(GeometryError::CoincidentPoints);
            }

            let turn = e0.cross(e1).dot(n);
            // Vertex on the line through its neighbours
            if turn.abs() <= EPSILON * e0.len() * e1.len() {
                return Err(GeometryError::VertexOnEdge(i));
            }
            match winding {
                None => winding = Some(turn > 0.0),
                Some(positive) => {
                    if positive != (turn > 0.0) {
                        return Err(GeometryError::ConcaveVertex(i));
                    }
                }
            }
        }

        for (i, &v) in vs.iter().enumerate() {
            for j in 0..count {
                let k = (j + 1) % count;
                // Skip the two edges adjacent to v
                if j == i || k == i {
                    continue;
                }
                if on_segment(v, vs[j], vs[k]) {
                    return Err(GeometryError::VertexOnEdge(i));
                }
            }
        }

        Ok(())
    }
}

/// Checks if `p` lies on the segment `a`-`b` within [`EPSILON`].
fn on_segment(p: Point3<f32>, a: Point3<f32>, b: Point3<f32>) -> bool {
    let ab = b - a;
    let ap = p - a;
    let len_sqr = ab.len_sqr();
    let t = ap.dot(ab) / len_sqr;
    if !(-EPSILON..=1.0 + EPSILON).contains(&t) {
        return false;
    }
    (ap - ab * t).len_sqr() <= EPSILON * EPSILON * len_sqr
}

impl Shape for Polygon {
    fn normal(&self, _p: Point3<f32>) -> Normal<f32> {
        self.plane.n()
    }

    fn intersect(&self, ray: &Ray<f32>, t_max: f32) -> Vec<f32> {
        let t = match self.plane.nearest(ray, t_max) {
            Some(t) => t,
            None => return Vec::new(),
        };

        // The hit has to be on the same side of every edge
        // Hits exactly on an edge or a vertex are misses
        let p = ray.point(t);
        let n = self.plane.n();
        let count = self.vertices.len();
        let mut sign = 0.0;
        for i in 0..count {
            let v0 = self.vertices[i];
            let edge = self.vertices[(i + 1) % count] - v0;
            let to_p = p - v0;
            // Compared as the sine of the angle between the edge and the hit
            let side = edge.cross(to_p).dot_n(n);
            if side.abs() <= EPSILON * edge.len() * to_p.len() {
                return Vec::new();
            }
            if sign == 0.0 {
                sign = side.signum();
            } else if sign != side.signum() {
                return Vec::new();
            }
        }

        if in_range(t, t_max) {
            vec![t]
        } else {
            Vec::new()
        }
    }

    fn world_bound(&self) -> Option<Bounds3<f32>> {
        let first = Bounds3::new(self.vertices[0], self.vertices[0]);
        Some(
            self.vertices[1..]
                .iter()
                .fold(first, |b, &v| b.union_p(v)),
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use glint::{
        error::GeometryError,
        math::{normal, point3, vec3, Bounds3, Point3, Ray, Vec3},
        shapes::{Axis, Cylinder, Plane, Polygon, Shape, Sphere, Triangle, Tube},
    };

    fn ray(o: Point3<f32>, d: Vec3<f32>) -> Ray<f32> {
        Ray::new(o, d).unwrap()
    }

    fn sorted(mut ts: Vec<f32>) -> Vec<f32> {
        ts.sort_by(|a, b| a.partial_cmp(b).unwrap());
        ts
    }

    #[test]
    fn sphere() {
        let s = Sphere::new(point3(0.0, 0.0, 3.0), 1.0).unwrap();
        let inf = f32::INFINITY;

        let ts = sorted(s.intersect(&ray(point3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 1.0)), inf));
        assert_eq!(ts.len(), 2);
        assert_abs_diff_eq!(ts[0], 2.0);
        assert_abs_diff_eq!(ts[1], 4.0);

        // Off-center chord, half length sqrt(1 - 0.5^2)
        let ts = sorted(s.intersect(&ray(point3(0.5, 0.0, 0.0), vec3(0.0, 0.0, 1.0)), inf));
        assert_eq!(ts.len(), 2);
        assert_abs_diff_eq!(ts[0], 3.0 - 0.75f32.sqrt(), epsilon = 1e-5);
        assert_abs_diff_eq!(ts[1], 3.0 + 0.75f32.sqrt(), epsilon = 1e-5);

        // From inside only the exit counts
        let ts = s.intersect(&ray(point3(0.0, 0.0, 3.0), vec3(1.0, 0.0, 0.0)), inf);
        assert_eq!(ts.len(), 1);
        assert_abs_diff_eq!(ts[0], 1.0);

        // Bounded query
        assert_eq!(
            s.intersect(&ray(point3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 1.0)), 3.0),
            vec![2.0]
        );
        assert_eq!(s.nearest(&ray(point3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 1.0)), inf), Some(2.0));

        // Behind, beside, tangent
        assert!(s
            .intersect(&ray(point3(0.0, 0.0, 5.0), vec3(0.0, 0.0, 1.0)), inf)
            .is_empty());
        assert!(s
            .intersect(&ray(point3(2.0, 0.0, 0.0), vec3(0.0, 0.0, 1.0)), inf)
            .is_empty());
        assert!(s
            .intersect(&ray(point3(1.0, 0.0, 0.0), vec3(0.0, 0.0, 1.0)), inf)
            .is_empty());

        assert_relative_eq!(s.normal(point3(0.0, 1.0, 3.0)), normal(0.0, 1.0, 0.0));
        assert_eq!(
            s.world_bound(),
            Some(Bounds3::new(point3(-1.0, -1.0, 2.0), point3(1.0, 1.0, 4.0)))
        );
    }

    #[test]
    fn sphere_invalid() {
        assert_eq!(
            Sphere::new(point3(0.0, 0.0, 0.0), 0.0).err(),
            Some(GeometryError::NonPositiveRadius)
        );
        assert_eq!(
            Sphere::new(point3(0.0, 0.0, 0.0), -1.0).err(),
            Some(GeometryError::NonPositiveRadius)
        );
    }

    #[test]
    fn plane() {
        let p = Plane::new(point3(0.0, 0.0, 5.0), vec3(0.0, 0.0, 2.0)).unwrap();
        assert_eq!(p.n(), normal(0.0, 0.0, 1.0));
        assert!(p.world_bound().is_none());

        let ts = p.intersect(&ray(point3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 1.0)), f32::INFINITY);
        assert_eq!(ts, vec![5.0]);
        // Slanted
        let ts = p.intersect(&ray(point3(0.0, 0.0, 0.0), vec3(0.0, 3.0, 4.0)), f32::INFINITY);
        assert_eq!(ts.len(), 1);
        assert_abs_diff_eq!(ts[0], 6.25, epsilon = 1e-5);
        // Parallel
        assert!(p
            .intersect(&ray(point3(0.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0)), f32::INFINITY)
            .is_empty());
        // Away
        assert!(p
            .intersect(&ray(point3(0.0, 0.0, 0.0), vec3(0.0, 0.0, -1.0)), f32::INFINITY)
            .is_empty());
        // Past t_max
        assert!(p
            .intersect(&ray(point3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 1.0)), 4.0)
            .is_empty());
    }

    #[test]
    fn plane_from_points() {
        let p = Plane::from_points(
            point3(0.0, 0.0, 1.0),
            point3(1.0, 0.0, 1.0),
            point3(0.0, 1.0, 1.0),
        )
        .unwrap();
        assert_eq!(p.n(), normal(0.0, 0.0, 1.0));
        assert!(p.contains(point3(5.0, -3.0, 1.0)));
        assert!(!p.contains(point3(5.0, -3.0, 1.1)));

        assert_eq!(
            Plane::from_points(
                point3(0.0, 0.0, 0.0),
                point3(0.0, 0.0, 0.0),
                point3(0.0, 1.0, 0.0)
            )
            .err(),
            Some(GeometryError::CoincidentPoints)
        );
        assert_eq!(
            Plane::from_points(
                point3(0.0, 0.0, 0.0),
                point3(1.0, 1.0, 1.0),
                point3(2.0, 2.0, 2.0)
            )
            .err(),
            Some(GeometryError::CollinearPoints)
        );
        assert_eq!(
            Plane::new(point3(0.0, 0.0, 0.0), Vec3::zeros()).err(),
            Some(GeometryError::ZeroVector)
        );
    }

    fn unit_triangle() -> Triangle {
        Triangle::new(
            point3(-1.0, -1.0, 3.0),
            point3(1.0, -1.0, 3.0),
            point3(0.0, 1.0, 3.0),
        )
        .unwrap()
    }

    #[test]
    fn triangle_interior() {
        let t = unit_triangle();
        let d = vec3(0.0, 0.0, 1.0);

        let ts = t.intersect(&ray(point3(0.0, 0.0, 0.0), d), f32::INFINITY);
        assert_eq!(ts.len(), 1);
        assert_abs_diff_eq!(ts[0], 3.0);

        // Near but inside each edge
        for o in [
            point3(0.0, -0.99, 0.0),
            point3(0.49, -0.01, 0.0),
            point3(-0.49, -0.01, 0.0),
        ] {
            assert_eq!(t.intersect(&ray(o, d), f32::INFINITY).len(), 1, "{:?}", o);
        }
    }

    #[test]
    fn triangle_boundary_misses() {
        let t = unit_triangle();
        let d = vec3(0.0, 0.0, 1.0);

        // Vertices
        for o in [
            point3(-1.0, -1.0, 0.0),
            point3(1.0, -1.0, 0.0),
            point3(0.0, 1.0, 0.0),
        ] {
            assert!(t.intersect(&ray(o, d), f32::INFINITY).is_empty(), "{:?}", o);
        }
        // Edges
        for o in [
            point3(0.0, -1.0, 0.0),
            point3(0.5, 0.0, 0.0),
            point3(-0.5, 0.0, 0.0),
        ] {
            assert!(t.intersect(&ray(o, d), f32::INFINITY).is_empty(), "{:?}", o);
        }
        // Edge extensions
        for o in [
            point3(3.0, -1.0, 0.0),
            point3(-3.0, -1.0, 0.0),
            point3(0.5, 2.0, 0.0),
        ] {
            assert!(t.intersect(&ray(o, d), f32::INFINITY).is_empty(), "{:?}", o);
        }
        // Parallel to the plane
        assert!(t
            .intersect(&ray(point3(0.0, 0.0, 3.0), vec3(1.0, 0.0, 0.0)), f32::INFINITY)
            .is_empty());
    }

    #[test]
    fn triangle_normal_and_bound() {
        let t = unit_triangle();
        assert_eq!(t.normal(point3(0.0, 0.0, 3.0)), normal(0.0, 0.0, 1.0));
        assert_eq!(
            t.world_bound(),
            Some(Bounds3::new(point3(-1.0, -1.0, 3.0), point3(1.0, 1.0, 3.0)))
        );
        assert!(Triangle::new(
            point3(0.0, 0.0, 0.0),
            point3(1.0, 0.0, 0.0),
            point3(2.0, 0.0, 0.0)
        )
        .is_err());
    }

    #[test]
    fn small_triangle_and_polygon() {
        let d = vec3(0.0, 0.0, 1.0);
        for s in [1.0, 1e-3, 4e-4, 1e-4, 1e-5] {
            let t = Triangle::new(
                point3(-s, -s, 3.0),
                point3(s, -s, 3.0),
                point3(0.0, s, 3.0),
            )
            .unwrap();
            let ts = t.intersect(&ray(point3(0.0, 0.0, 0.0), d), f32::INFINITY);
            assert_eq!(ts.len(), 1, "triangle half-size {}", s);
            assert_abs_diff_eq!(ts[0], 3.0);

            let p = Polygon::new(vec![
                point3(-s, -s, 3.0),
                point3(s, -s, 3.0),
                point3(s, s, 3.0),
                point3(-s, s, 3.0),
            ])
            .unwrap();
            let ts = p.intersect(&ray(point3(0.0, 0.0, 0.0), d), f32::INFINITY);
            assert_eq!(ts.len(), 1, "square half-size {}", s);
            assert_abs_diff_eq!(ts[0], 3.0);

            // Still strictly inside only
            let edge = ray(point3(0.0, -s, 0.0), d);
            assert!(t.intersect(&edge, f32::INFINITY).is_empty(), "{}", s);
            assert!(p.intersect(&edge, f32::INFINITY).is_empty(), "{}", s);
            let outside = ray(point3(2.0 * s, 0.0, 0.0), d);
            assert!(t.intersect(&outside, f32::INFINITY).is_empty(), "{}", s);
            assert!(p.intersect(&outside, f32::INFINITY).is_empty(), "{}", s);
        }
    }

    fn square() -> Vec<Point3<f32>> {
        vec![
            point3(0.0, 0.0, 2.0),
            point3(2.0, 0.0, 2.0),
            point3(2.0, 2.0, 2.0),
            point3(0.0, 2.0, 2.0),
        ]
    }

    #[test]
    fn polygon() {
        let p = Polygon::new(square()).unwrap();
        let d = vec3(0.0, 0.0, 1.0);
        assert_eq!(p.intersect(&ray(point3(1.0, 1.0, 0.0), d), f32::INFINITY), vec![2.0]);
        assert_eq!(p.intersect(&ray(point3(1.9, 0.1, 0.0), d), f32::INFINITY), vec![2.0]);
        // Outside, on an edge, on a vertex
        assert!(p.intersect(&ray(point3(3.0, 1.0, 0.0), d), f32::INFINITY).is_empty());
        assert!(p.intersect(&ray(point3(1.0, 0.0, 0.0), d), f32::INFINITY).is_empty());
        assert!(p.intersect(&ray(point3(2.0, 2.0, 0.0), d), f32::INFINITY).is_empty());

        assert_eq!(p.normal(point3(1.0, 1.0, 2.0)), normal(0.0, 0.0, 1.0));
        assert_eq!(
            p.world_bound(),
            Some(Bounds3::new(point3(0.0, 0.0, 2.0), point3(2.0, 2.0, 2.0)))
        );
    }

    #[test]
    fn polygon_invalid() {
        assert_eq!(
            Polygon::new(vec![point3(0.0, 0.0, 0.0), point3(1.0, 0.0, 0.0)]).err(),
            Some(GeometryError::TooFewVertices(2))
        );

        let mut vs = square();
        vs[3].z = 3.0;
        assert_eq!(Polygon::new(vs).err(), Some(GeometryError::NonPlanarVertex(3)));

        // Dart, the fourth vertex points inward
        let mut vs = square();
        vs[3] = point3(1.5, 0.5, 2.0);
        assert!(matches!(
            Polygon::new(vs).err(),
            Some(GeometryError::ConcaveVertex(_))
        ));

        // Vertex on the line between its neighbours
        let vs = vec![
            point3(0.0, 0.0, 0.0),
            point3(1.0, 0.0, 0.0),
            point3(2.0, 0.0, 0.0),
            point3(1.0, 1.0, 0.0),
        ];
        assert!(Polygon::new(vs).is_err());

        let mut vs = square();
        vs.insert(2, point3(2.0, 1.0, 2.0));
        assert_eq!(Polygon::new(vs).err(), Some(GeometryError::VertexOnEdge(2)));
    }

    #[test]
    fn tube() {
        let axis = Axis::new(point3(0.0, 0.0, 0.0), vec3(0.0, 2.0, 0.0)).unwrap();
        assert_eq!(axis.dir, vec3(0.0, 1.0, 0.0));
        let t = Tube::new(axis, 1.0).unwrap();
        assert!(t.world_bound().is_none());

        let ts = sorted(t.intersect(&ray(point3(0.0, 100.0, -5.0), vec3(0.0, 0.0, 1.0)), f32::INFINITY));
        assert_eq!(ts.len(), 2);
        assert_abs_diff_eq!(ts[0], 4.0);
        assert_abs_diff_eq!(ts[1], 6.0);

        // Slanted rays see the same circle through the projection
        let ts = sorted(t.intersect(&ray(point3(0.0, 0.0, -5.0), vec3(0.0, 1.0, 1.0)), f32::INFINITY));
        assert_eq!(ts.len(), 2);
        assert_abs_diff_eq!(ts[0], 4.0 * 2.0f32.sqrt(), epsilon = 1e-4);
        assert_abs_diff_eq!(ts[1], 6.0 * 2.0f32.sqrt(), epsilon = 1e-4);

        // Along the axis, tangent
        assert!(t
            .intersect(&ray(point3(0.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0)), f32::INFINITY)
            .is_empty());
        assert!(t
            .intersect(&ray(point3(1.0, 0.0, -5.0), vec3(0.0, 0.0, 1.0)), f32::INFINITY)
            .is_empty());

        assert_relative_eq!(t.normal(point3(0.0, 7.0, -1.0)), normal(0.0, 0.0, -1.0));
        assert_eq!(
            Tube::new(axis, 0.0).err(),
            Some(GeometryError::NonPositiveRadius)
        );
    }

    #[test]
    fn normal_on_axis() {
        // Any perpendicular will do, but it has to be a unit vector off the axis
        let axis = Axis::new(point3(0.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0)).unwrap();
        let n = axis.radial_normal(point3(0.0, 3.0, 0.0));
        assert_abs_diff_eq!(n, normal(0.0, 0.0, -1.0));
        let t = Tube::new(axis, 1.0).unwrap();
        assert_abs_diff_eq!(t.normal(point3(0.0, -2.0, 0.0)), normal(0.0, 0.0, -1.0));

        // Along x the first reference axis is parallel and the second one is used
        let axis = Axis::new(point3(1.0, 2.0, 3.0), vec3(-4.0, 0.0, 0.0)).unwrap();
        let n = axis.radial_normal(point3(5.0, 2.0, 3.0));
        assert_abs_diff_eq!(n, normal(0.0, 0.0, -1.0));
        let axis = Axis::new(point3(1.0, 2.0, 3.0), vec3(1.0, 0.0, 0.0)).unwrap();
        let n = axis.radial_normal(point3(5.0, 2.0, 3.0));
        assert_abs_diff_eq!(n, normal(0.0, 0.0, 1.0));

    }

    #[test]
    fn cylinder() {
        let axis = Axis::new(point3(0.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0)).unwrap();
        let c = Cylinder::new(axis, 1.0, 2.0).unwrap();

        // Side within the height
        let ts = sorted(c.intersect(&ray(point3(0.0, 1.0, -5.0), vec3(0.0, 0.0, 1.0)), f32::INFINITY));
        assert_eq!(ts, vec![4.0, 6.0]);
        // Side above the height misses
        assert!(c
            .intersect(&ray(point3(0.0, 3.0, -5.0), vec3(0.0, 0.0, 1.0)), f32::INFINITY)
            .is_empty());
        // Through both caps
        let ts = sorted(c.intersect(&ray(point3(0.5, -1.0, 0.0), vec3(0.0, 1.0, 0.0)), f32::INFINITY));
        assert_eq!(ts, vec![1.0, 3.0]);
        // Cap then side
        let ts = sorted(c.intersect(&ray(point3(0.0, 2.5, 0.0), vec3(0.0, -1.0, 1.0)), f32::INFINITY));
        assert_eq!(ts.len(), 2);
        assert_abs_diff_eq!(ts[0], 0.5 * 2.0f32.sqrt(), epsilon = 1e-5);
        assert_abs_diff_eq!(ts[1], 2.0f32.sqrt(), epsilon = 1e-5);

        assert_eq!(c.normal(point3(0.5, 0.0, 0.0)), normal(0.0, -1.0, 0.0));
        assert_eq!(c.normal(point3(0.5, 2.0, 0.0)), normal(0.0, 1.0, 0.0));
        assert_relative_eq!(c.normal(point3(1.0, 1.0, 0.0)), normal(1.0, 0.0, 0.0));

        assert_eq!(
            c.world_bound(),
            Some(Bounds3::new(point3(-1.0, -1.0, -1.0), point3(1.0, 3.0, 1.0)))
        );
        assert_eq!(
            Cylinder::new(axis, 1.0, 0.0).err(),
            Some(GeometryError::NonPositiveHeight)
        );
    }
}

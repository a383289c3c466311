#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use glint::{
        accel::AcceleratorType,
        geometry::{closest, Geometries, Geometry},
        math::{point3, vec3, Bounds3, Ray},
        shapes::{Plane, Sphere, Triangle},
    };

    fn scenario() -> Geometries {
        Geometries::from(vec![
            Geometry::new(Sphere::new(point3(0.0, 0.0, 3.0), 1.0).unwrap()),
            Geometry::new(Plane::new(point3(0.0, 0.0, 5.0), vec3(0.0, 0.0, 1.0)).unwrap()),
            Geometry::new(
                Triangle::new(
                    point3(-1.0, -1.0, 3.0),
                    point3(1.0, -1.0, 3.0),
                    point3(0.0, 1.0, 3.0),
                )
                .unwrap(),
            ),
        ])
    }

    #[test]
    fn hit_counts() {
        let g = scenario();
        let count = |o, d| g.intersect(&Ray::new(o, d).unwrap(), f32::INFINITY).len();

        assert_eq!(count(point3(0.0, 0.0, 0.0), vec3(0.0, -1.0, 0.0)), 0);
        assert_eq!(count(point3(0.0, -5.0, 2.5), vec3(0.0, 1.0, 0.0)), 2);
        assert_eq!(count(point3(0.0, 0.0, 4.5), vec3(0.0, 0.0, -1.0)), 3);
        assert_eq!(count(point3(0.0, 0.0, -1.0), vec3(0.0, 0.0, 1.0)), 4);
    }

    #[test]
    fn hit_records() {
        let g = scenario();
        let ray = Ray::new(point3(0.0, 0.0, -1.0), vec3(0.0, 0.0, 1.0)).unwrap();
        let mut ts: Vec<f32> = g.intersect(&ray, f32::INFINITY).iter().map(|h| h.t).collect();
        ts.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(ts, vec![3.0, 4.0, 5.0, 6.0]);

        let nearest = g.nearest(&ray, f32::INFINITY).unwrap();
        assert_abs_diff_eq!(nearest.t, 3.0);
        assert_abs_diff_eq!(nearest.p, point3(0.0, 0.0, 2.0));
        assert!(std::ptr::eq(nearest.geometry, g.get(0).unwrap()));

        let hits = g.intersect(&ray, f32::INFINITY);
        assert_eq!(closest(hits).map(|h| h.t), Some(3.0));

        // Bounded query
        assert_eq!(g.intersect(&ray, 4.5).len(), 2);
    }

    #[test]
    fn world_bound() {
        assert!(Geometries::new().world_bound().is_none());
        // The plane is unbounded
        assert!(scenario().world_bound().is_none());

        let g = Geometries::from(vec![
            Geometry::new(Sphere::new(point3(0.0, 0.0, 0.0), 1.0).unwrap()),
            Geometry::new(Sphere::new(point3(5.0, 0.0, 0.0), 2.0).unwrap()),
        ]);
        assert_eq!(
            g.world_bound(),
            Some(Bounds3::new(point3(-1.0, -2.0, -2.0), point3(7.0, 2.0, 2.0)))
        );
    }

    #[test]
    fn accelerators_agree_on_scenario() {
        for accelerator in [AcceleratorType::Linear, AcceleratorType::default()] {
            let accel = accelerator.build(scenario());
            let ray = Ray::new(point3(0.0, 0.0, -1.0), vec3(0.0, 0.0, 1.0)).unwrap();
            assert_eq!(accel.nearest_hit(&ray).map(|h| h.t), Some(3.0), "{}", accelerator);
            assert_eq!(accel.all_hits(&ray, f32::INFINITY).len(), 4, "{}", accelerator);
            assert_eq!(accel.all_hits(&ray, 4.5).len(), 2, "{}", accelerator);

            let ray = Ray::new(point3(0.0, 0.0, 4.5), vec3(0.0, 0.0, -1.0)).unwrap();
            assert_eq!(accel.all_hits(&ray, f32::INFINITY).len(), 3, "{}", accelerator);
            assert_abs_diff_eq!(accel.nearest_hit(&ray).unwrap().t, 0.5);
        }
    }
}

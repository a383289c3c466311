#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::panic;

    use glint::{
        error::GeometryError,
        math::{normal, point3, vec3, Normal, Vec3},
    };

    // Also covers the shared impls generated by the math macros

    #[test]
    fn new() {
        let v = Vec3::new(0.0, 1.0, 2.0);
        assert_eq!(v.x, 0.0);
        assert_eq!(v.y, 1.0);
        assert_eq!(v.z, 2.0);
        assert_eq!(vec3(0.0, 1.0, 2.0), v);
    }

    #[test]
    fn zeros() {
        assert_eq!(Vec3::zeros(), Vec3::new(0, 0, 0));
    }

    #[test]
    fn ones() {
        assert_eq!(Vec3::ones(), Vec3::new(1, 1, 1));
    }

    #[test]
    fn has_nans() {
        let result = panic::catch_unwind(|| Vec3::new(f32::NAN, 0.0, 0.0));
        assert!(result.is_err());
        let result = panic::catch_unwind(|| vec3(0.0, 0.0, f32::NAN));
        assert!(result.is_err());

        let mut v = Vec3::new(0.0, 0.0, 0.0);
        assert!(!v.has_nans());
        v.y = f32::NAN;
        assert!(v.has_nans());
    }

    #[test]
    fn dot() {
        assert_eq!(Vec3::new(2, 3, 4).dot(Vec3::new(5, 6, 7)), 2 * 5 + 3 * 6 + 4 * 7);
        assert_eq!(
            Vec3::new(2.0, 3.0, 4.0).dot_n(Normal::new(5.0, 6.0, 7.0)),
            2.0 * 5.0 + 3.0 * 6.0 + 4.0 * 7.0
        );
    }

    #[test]
    fn cross() {
        let x = vec3(1.0, 0.0, 0.0);
        let y = vec3(0.0, 1.0, 0.0);
        let z = vec3(0.0, 0.0, 1.0);
        assert_eq!(x.cross(y), z);
        assert_eq!(y.cross(z), x);
        assert_eq!(z.cross(x), y);
        assert_eq!(y.cross(x), -z);
        assert_eq!(
            vec3(2.0, 3.0, 4.0).cross(vec3(5.0, 6.0, 7.0)),
            vec3(3.0 * 7.0 - 4.0 * 6.0, 4.0 * 5.0 - 2.0 * 7.0, 2.0 * 6.0 - 3.0 * 5.0)
        );
    }

    #[test]
    fn len() {
        assert_eq!(Vec3::new(2, 3, 4).len_sqr(), 2 * 2 + 3 * 3 + 4 * 4);
        assert_abs_diff_eq!(
            Vec3::new(2.0, 3.0, 4.0).len(),
            ((2 * 2 + 3 * 3 + 4 * 4) as f32).sqrt()
        );
    }

    #[test]
    fn normalized() {
        assert_relative_eq!(
            Vec3::new(1.0, 1.0, 1.0).normalized(),
            Vec3::from(1.0 / 3.0f32.sqrt())
        );
        assert_relative_eq!(
            Vec3::new(0.0, 0.0, -3.0).try_normalized().unwrap(),
            vec3(0.0, 0.0, -1.0)
        );
        assert_eq!(
            Vec3::<f32>::zeros().try_normalized(),
            Err(GeometryError::ZeroVector)
        );
        assert!(Vec3::<f32>::zeros().is_zero());
        assert!(!vec3(0.0, 1e-30, 0.0).is_zero());
    }

    #[test]
    fn reflected() {
        let n = normal(0.0, 1.0, 0.0);
        assert_eq!(vec3(1.0, -1.0, 0.0).reflected(n), vec3(1.0, 1.0, 0.0));
        // Side of the normal doesn't matter
        assert_eq!(vec3(1.0, -1.0, 0.0).reflected(-n), vec3(1.0, 1.0, 0.0));
        // Tangent vectors are unchanged
        assert_eq!(vec3(1.0, 0.0, 2.0).reflected(n), vec3(1.0, 0.0, 2.0));
    }

    #[test]
    fn min_max() {
        let a = Vec3::new(0, 5, 2);
        let b = Vec3::new(3, 1, 2);
        assert_eq!(a.min(b), Vec3::new(0, 1, 2));
        assert_eq!(a.max(b), Vec3::new(3, 5, 2));
        assert_eq!(a.min_comp(), 0);
        assert_eq!(a.max_comp(), 5);
    }

    #[test]
    fn from() {
        assert_eq!(Vec3::from(2), Vec3::new(2, 2, 2));
        assert_eq!(Vec3::from(normal(1.0, 2.0, 3.0)), vec3(1.0, 2.0, 3.0));
        assert_eq!(Vec3::from(point3(1.0, 2.0, 3.0)), vec3(1.0, 2.0, 3.0));
    }

    #[test]
    fn index() {
        let mut v = Vec3::new(0, 1, 2);
        assert_eq!(v[0], 0);
        assert_eq!(v[1], 1);
        assert_eq!(v[2], 2);
        v[1] = 5;
        assert_eq!(v, Vec3::new(0, 5, 2));
        let result = panic::catch_unwind(|| Vec3::new(0, 1, 2)[3]);
        assert!(result.is_err());
    }

    #[test]
    fn ops() {
        let a = Vec3::new(1, 2, 3);
        let b = Vec3::new(4, 6, 8);
        assert_eq!(-Vec3::new(1.0, -2.0, 3.0), Vec3::new(-1.0, 2.0, -3.0));
        assert_eq!(a + b, Vec3::new(5, 8, 11));
        assert_eq!(b - a, Vec3::new(3, 4, 5));
        assert_eq!(a * 2, Vec3::new(2, 4, 6));
        assert_eq!(b / 2, Vec3::new(2, 3, 4));

        let mut v = a;
        v += b;
        assert_eq!(v, Vec3::new(5, 8, 11));
        v -= a;
        assert_eq!(v, b);
        v *= 2;
        assert_eq!(v, Vec3::new(8, 12, 16));
        v /= 4;
        assert_eq!(v, Vec3::new(2, 3, 4));
    }

    #[test]
    fn approx_eq() {
        let v = vec3(1.0, 2.0, 3.0);
        assert_abs_diff_eq!(v, v + Vec3::from(1e-7), epsilon = 1e-6);
        assert!(!approx::abs_diff_eq!(v, v + vec3(0.0, 0.0, 1e-3), epsilon = 1e-6));
        assert_relative_eq!(v * 1e6, v * 1e6 + Vec3::from(1e-2), max_relative = 1e-6);
    }
}

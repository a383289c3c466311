#[cfg(test)]
mod tests {
    use std::panic;

    use glint::math::{normal, vec3, Normal, Vec3};

    // Shared impls are covered by the vector tests

    #[test]
    fn new() {
        let n = Normal::new(0.0, 1.0, 2.0);
        assert_eq!(n.x, 0.0);
        assert_eq!(n.y, 1.0);
        assert_eq!(n.z, 2.0);
        assert_eq!(normal(0.0, 1.0, 2.0), n);

        let result = panic::catch_unwind(|| normal(f32::NAN, 0.0, 0.0));
        assert!(result.is_err());
    }

    #[test]
    fn dot_v() {
        assert_eq!(
            Normal::new(2, 3, 4).dot_v(Vec3::new(5, 6, 7)),
            2 * 5 + 3 * 6 + 4 * 7
        );
    }

    #[test]
    fn from() {
        assert_eq!(Normal::from(vec3(1.0, 2.0, 3.0)), normal(1.0, 2.0, 3.0));
    }

    #[test]
    fn ops() {
        assert_eq!(-normal(1.0, -2.0, 3.0), normal(-1.0, 2.0, -3.0));
        assert_eq!(normal(1.0, 2.0, 3.0) * 2.0, normal(2.0, 4.0, 6.0));
        assert_eq!(normal(2.0, 4.0, 6.0) / 2.0, normal(1.0, 2.0, 3.0));
    }
}

// Re-export glam for convenience
pub use glam::*;

// Ember math types
mod interval;
mod ray;

pub use interval::Interval;
pub use ray::Ray;

/// Reflect `v` about the normal `n`.
///
/// Assumes `n` is unit length.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_algebra() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    }

    #[test]
    fn test_unit_vector_length() {
        let v = Vec3::new(3.0, 4.0, 12.0);
        assert_eq!(v.length(), 13.0);
        assert!((v.normalize().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_reflect_flips_normal_component() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        let r = reflect(v, Vec3::Y);
        assert_eq!(r, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_reflect_keeps_length() {
        let v = Vec3::new(0.3, -0.8, 0.5);
        let n = Vec3::new(1.0, 1.0, 0.0).normalize();
        let r = reflect(v, n);
        assert!((r.length() - v.length()).abs() < 1e-6);
        assert!((r.dot(n) + v.dot(n)).abs() < 1e-6);
    }
}

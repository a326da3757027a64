//! Sphere primitive for ray tracing.

use crate::{
    hittable::{HitRecord, Hittable},
    MaterialId,
};
use ember_math::{Interval, Ray, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: MaterialId,
}

impl Sphere {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(center: Vec3, radius: f32, material: MaterialId) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> MaterialId {
        self.material
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool {
        // a t^2 + 2 b t + c = 0
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let b = oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - a * c;
        if discriminant <= 0.0 {
            return false;
        }

        let sqrtd = discriminant.sqrt();

        // Near root first, far root when the origin is inside or the near one is out of range
        let mut root = (-b - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (-b + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return false;
            }
        }

        rec.t = root;
        rec.p = ray.at(root);
        rec.normal = (rec.p - self.center) / self.radius;
        rec.material = self.material;

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere_at(center: Vec3, radius: f32) -> Sphere {
        Sphere::new(center, radius, MaterialId::default())
    }

    fn open_interval() -> Interval {
        Interval::new(0.001, f32::MAX)
    }

    #[test]
    fn test_sphere_hit_near_root() {
        let sphere = sphere_at(Vec3::new(0.0, 0.0, -1.0), 0.5);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let mut rec = HitRecord::default();

        assert!(sphere.hit(&ray, open_interval(), &mut rec));
        assert!((rec.t - 0.5).abs() < 1e-5);
        assert!((rec.p - Vec3::new(0.0, 0.0, -0.5)).length() < 1e-5);
    }

    #[test]
    fn test_sphere_miss_pointing_away() {
        let sphere = sphere_at(Vec3::new(0.0, 0.0, -1.0), 0.5);
        let mut rec = HitRecord::default();

        for direction in [Vec3::Z, Vec3::Y, Vec3::new(1.0, 0.0, 1.0), Vec3::new(-0.3, 0.2, 0.9)] {
            let ray = Ray::new(Vec3::ZERO, direction);
            assert!(!sphere.hit(&ray, open_interval(), &mut rec));
        }
        assert_eq!(rec, HitRecord::default());
    }

    #[test]
    fn test_sphere_normal_through_center() {
        let center = Vec3::new(1.0, 2.0, -5.0);
        let sphere = sphere_at(center, 2.0);
        let origin = Vec3::new(-3.0, 0.0, 1.0);
        let direction = (center - origin) * 0.37;
        let ray = Ray::new(origin, direction);
        let mut rec = HitRecord::default();

        assert!(sphere.hit(&ray, open_interval(), &mut rec));
        assert!((rec.normal.length() - 1.0).abs() < 1e-5);
        assert!((rec.normal + direction.normalize()).length() < 1e-5);
    }

    #[test]
    fn test_sphere_hit_from_inside_uses_far_root() {
        let sphere = sphere_at(Vec3::ZERO, 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let mut rec = HitRecord::default();

        assert!(sphere.hit(&ray, open_interval(), &mut rec));
        assert!((rec.t - 1.0).abs() < 1e-5);
        // Outward normal, not flipped towards the ray
        assert!((rec.normal - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn test_sphere_respects_bounds() {
        let sphere = sphere_at(Vec3::new(0.0, 0.0, -3.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let mut rec = HitRecord::default();

        // Both roots (2 and 4) beyond t_max
        assert!(!sphere.hit(&ray, Interval::new(0.001, 1.5), &mut rec));
        // Near root excluded, far root accepted
        assert!(sphere.hit(&ray, Interval::new(2.5, 10.0), &mut rec));
        assert!((rec.t - 4.0).abs() < 1e-5);
        // Endpoints are exclusive
        assert!(!sphere.hit(&ray, Interval::new(0.001, 2.0), &mut rec));
    }

    #[test]
    fn test_sphere_tangent_ray_misses() {
        let sphere = sphere_at(Vec3::new(0.0, 1.0, -2.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let mut rec = HitRecord::default();

        assert!(!sphere.hit(&ray, open_interval(), &mut rec));
    }

    #[test]
    fn test_sphere_records_material() {
        let material = MaterialId::from_index(3);
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -2.0), 0.5, material);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let mut rec = HitRecord::default();

        assert!(sphere.hit(&ray, open_interval(), &mut rec));
        assert_eq!(rec.material, material);
    }
}

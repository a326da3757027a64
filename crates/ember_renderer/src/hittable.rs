//! Hittable trait and HitRecord for ray-object intersection.

use crate::{MaterialId, Sphere};
use ember_math::{Interval, Ray, Vec3};

/// Record of a ray-object intersection.
///
/// Overwritten on every accepted candidate during a query, so after a
/// successful query it describes the nearest surface found.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub p: Vec3,
    /// Outward unit normal at the intersection
    pub normal: Vec3,
    /// Material of the surface that was hit
    pub material: MaterialId,
}

impl Default for HitRecord {
    fn default() -> Self {
        Self {
            t: 0.0,
            p: Vec3::ZERO,
            normal: Vec3::ZERO,
            material: MaterialId::default(),
        }
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable {
    /// Test if a ray hits this object strictly inside `ray_t`.
    ///
    /// Returns true if hit, and fills in the hit record. The record is left
    /// untouched on a miss.
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool;
}

/// Closed set of primitives stored in a scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Object {
    Sphere(Sphere),
}

impl Object {
    /// Material handle of the primitive.
    pub fn material(&self) -> MaterialId {
        match self {
            Object::Sphere(sphere) => sphere.material(),
        }
    }
}

impl From<Sphere> for Object {
    fn from(sphere: Sphere) -> Self {
        Object::Sphere(sphere)
    }
}

impl Hittable for Object {
    #[inline]
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool {
        match self {
            Object::Sphere(sphere) => sphere.hit(ray, ray_t, rec),
        }
    }
}

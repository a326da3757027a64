//! Materials describing how surfaces scatter light.

use crate::{hittable::HitRecord, random_in_unit_sphere};
use ember_math::{reflect, Ray, Vec3};
use rand::RngCore;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Outcome of a successful scatter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterRecord {
    /// Per-channel factor applied to light arriving along `scattered`
    pub attenuation: Color,
    /// Continuation of the path, starting at the hit point
    pub scattered: Ray,
}

/// Capability shared by every material.
pub trait Scatter {
    /// Scatter an incoming ray at a surface hit.
    ///
    /// Returns `None` if the ray is absorbed.
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterRecord>;
}

/// Lambertian (diffuse) material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }

    pub fn albedo(&self) -> Color {
        self.albedo
    }
}

impl Scatter for Lambertian {
    fn scatter(&self, _ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterRecord> {
        // Offset inside the unit ball tangent to the surface approximates a cosine lobe
        let target = rec.p + rec.normal + random_in_unit_sphere(rng);
        Some(ScatterRecord {
            attenuation: self.albedo,
            scattered: Ray::new(rec.p, target - rec.p),
        })
    }
}

/// Ideal mirror.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metal {
    albedo: Color,
}

impl Metal {
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }

    pub fn albedo(&self) -> Color {
        self.albedo
    }
}

impl Scatter for Metal {
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, _rng: &mut dyn RngCore) -> Option<ScatterRecord> {
        let reflected = reflect(ray_in.direction().normalize(), rec.normal);

        // Only rays leaving through the outer side of the surface survive
        if reflected.dot(rec.normal) > 0.0 {
            Some(ScatterRecord {
                attenuation: self.albedo,
                scattered: Ray::new(rec.p, reflected),
            })
        } else {
            None
        }
    }
}

/// Closed set of surface materials.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    Lambertian(Lambertian),
    Metal(Metal),
}

impl Material {
    pub fn lambertian(albedo: Color) -> Self {
        Material::Lambertian(Lambertian::new(albedo))
    }

    pub fn metal(albedo: Color) -> Self {
        Material::Metal(Metal::new(albedo))
    }

    pub fn albedo(&self) -> Color {
        match self {
            Material::Lambertian(m) => m.albedo(),
            Material::Metal(m) => m.albedo(),
        }
    }
}

impl Scatter for Material {
    #[inline]
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterRecord> {
        match self {
            Material::Lambertian(m) => m.scatter(ray_in, rec, rng),
            Material::Metal(m) => m.scatter(ray_in, rec, rng),
        }
    }
}

//! JSON scene descriptions and the built-in demo scene.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use ember_renderer::{Camera, Material, Scene, Vec3};
use serde::Deserialize;

/// Whole scene as stored on disk.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SceneDescription {
    pub camera: CameraDescription,
    pub materials: Vec<MaterialDescription>,
    pub spheres: Vec<SphereDescription>,
}

/// Camera placement. The aspect ratio comes from the image resolution.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CameraDescription {
    pub look_from: [f32; 3],
    pub look_at: [f32; 3],
    #[serde(default = "default_vup")]
    pub vup: [f32; 3],
    /// Vertical field of view in degrees
    pub vfov: f32,
}

fn default_vup() -> [f32; 3] {
    [0.0, 1.0, 0.0]
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MaterialDescription {
    Lambertian { albedo: [f32; 3] },
    Metal { albedo: [f32; 3] },
}

impl MaterialDescription {
    fn to_material(&self) -> Material {
        match self {
            MaterialDescription::Lambertian { albedo } => Material::lambertian(Vec3::from_array(*albedo)),
            MaterialDescription::Metal { albedo } => Material::metal(Vec3::from_array(*albedo)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SphereDescription {
    pub center: [f32; 3],
    pub radius: f32,
    /// Index into `materials`
    pub material: usize,
}

impl SceneDescription {
    /// Read a description from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Invalid scene file {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Three small spheres in a row, a fourth off to the side, a large
    /// ground sphere and a large mirror hanging overhead.
    pub fn demo() -> Self {
        use MaterialDescription::{Lambertian, Metal};

        let sphere = |center: [f32; 3], radius: f32, material: usize| SphereDescription {
            center,
            radius,
            material,
        };

        Self {
            camera: CameraDescription {
                look_from: [0.0, 0.5, 1.0],
                look_at: [0.0, 0.0, -4.0],
                vup: default_vup(),
                vfov: 100.0,
            },
            materials: vec![
                Lambertian { albedo: [0.8, 0.2, 0.2] },
                Metal { albedo: [0.7, 0.8, 0.2] },
                Metal { albedo: [0.7, 0.7, 0.9] },
                Lambertian { albedo: [0.9, 0.1, 0.2] },
                Lambertian { albedo: [0.8, 0.9, 0.1] },
                Metal { albedo: [0.3, 0.3, 0.9] },
            ],
            spheres: vec![
                sphere([0.0, 0.0, -1.0], 0.5, 0),
                sphere([-1.1, 0.0, -1.0], 0.5, 1),
                sphere([1.1, 0.0, -1.0], 0.5, 2),
                sphere([3.1, 2.0, 4.0], 0.5, 3),
                sphere([0.0, -50.5, 1.0], 50.0, 4),
                sphere([5.0, 26.5, -7.0], 25.0, 5),
            ],
        }
    }

    /// Build the camera and the scene arena.
    pub fn build(&self, aspect: f32) -> Result<(Camera, Scene)> {
        let camera = Camera::new(
            Vec3::from_array(self.camera.look_from),
            Vec3::from_array(self.camera.look_at),
            Vec3::from_array(self.camera.vup),
            self.camera.vfov,
            aspect,
        );

        let mut scene = Scene::new();
        let materials: Vec<_> = self
            .materials
            .iter()
            .map(|m| scene.add_material(m.to_material()))
            .collect();

        for (i, sphere) in self.spheres.iter().enumerate() {
            let material = *materials.get(sphere.material).ok_or_else(|| {
                anyhow!(
                    "Sphere {} references material {}, but only {} are defined",
                    i,
                    sphere.material,
                    materials.len()
                )
            })?;
            scene.add_sphere(Vec3::from_array(sphere.center), sphere.radius, material)?;
        }

        log::info!(
            "Built scene with {} materials and {} spheres",
            scene.material_count(),
            scene.object_count()
        );
        Ok((camera, scene))
    }
}

//! Ember renderer - CPU path tracing for sphere scenes.
//!
//! A single-threaded Monte Carlo path tracer. Geometry and materials live
//! in a [`Scene`] arena and are referred to by handles; the integrator
//! ([`scene_color`]) follows each camera ray through diffuse and mirror
//! bounces until it escapes to the sky, is absorbed, or runs out of depth.
//!
//! # Example
//!
//! ```ignore
//! use ember_renderer::{Camera, Material, RenderConfig, Scene, Vec3, render};
//!
//! let mut scene = Scene::new();
//! let red = scene.add_material(Material::lambertian(Vec3::new(0.8, 0.2, 0.2)));
//! scene.add_sphere(Vec3::new(0.0, 0.0, -1.0), 0.5, red)?;
//!
//! let config = RenderConfig::default();
//! let camera = Camera::new(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y, 90.0, config.aspect());
//! let film = render(&camera, &scene, &config);
//! ```

mod camera;
mod composite;
mod film;
mod hittable;
mod material;
mod output;
mod renderer;
mod sampling;
mod scene;
mod sphere;

pub use camera::Camera;
pub use composite::Composite;
pub use film::Film;
pub use hittable::{HitRecord, Hittable, Object};
pub use material::{Color, Lambertian, Material, Metal, Scatter, ScatterRecord};
pub use output::{save_png, save_ppm, write_png, write_ppm, OutputError, OutputResult};
pub use renderer::{
    gamma_correct, linear_to_gamma, render, render_pixel, render_with_progress, scene_color,
    sky_color, RenderConfig, DEFAULT_MAX_DEPTH, T_MIN,
};
pub use sampling::{gen_f32, pixel_rng, random_in_unit_sphere, MAX_REJECTION_ATTEMPTS};
pub use scene::{MaterialId, ObjectId, Scene, SceneError, SceneResult};
pub use sphere::Sphere;

/// Re-export math types from ember_math
pub use ember_math::{reflect, Interval, Ray, Vec3};

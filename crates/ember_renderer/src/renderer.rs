//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Iterative path construction with a bounded segment count
//! - Procedural sky gradient for escaping rays
//! - Jittered multi-sampling for anti-aliasing
//! - Square-root gamma encoding

use crate::{gen_f32, pixel_rng, Camera, Color, Film, HitRecord, Hittable, Scatter, Scene};
use ember_math::{Interval, Ray};
use rand::RngCore;

/// Default path segment budget.
pub const DEFAULT_MAX_DEPTH: u32 = 30;

/// Lower intersection bound for every traced segment.
///
/// Rays spawned on a surface would otherwise re-hit it at t ~ 0.
pub const T_MIN: f32 = 0.001;

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum number of path segments, the camera ray included
    pub max_depth: u32,
    /// Base seed for the per-pixel generators
    pub seed: u64,
}

impl RenderConfig {
    /// Image width divided by height.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 600,
            samples_per_pixel: 50,
            max_depth: DEFAULT_MAX_DEPTH,
            seed: 0,
        }
    }
}

/// Sky gradient seen by a ray that escapes the scene.
pub fn sky_color(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let t = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.45, 0.65, 1.0);
    (1.0 - t) * white + t * blue
}

/// Compute the color seen by a ray.
///
/// Follows the path through up to `max_depth` segments. The path ends with
/// the sky color when it escapes, or black when a material absorbs it or a
/// surface is hit on the last allowed segment. Attenuation compounds
/// multiplicatively along the way.
pub fn scene_color(ray: &Ray, scene: &Scene, max_depth: u32, rng: &mut dyn RngCore) -> Color {
    trace_path(ray, scene, max_depth, rng).0
}

/// Path color plus the number of segments traced.
fn trace_path(ray: &Ray, scene: &Scene, max_depth: u32, rng: &mut dyn RngCore) -> (Color, u32) {
    let mut ray = *ray;
    let mut throughput = Color::ONE;

    for depth in 1..=max_depth {
        let mut rec = HitRecord::default();
        if !scene.hit(&ray, Interval::new(T_MIN, f32::MAX), &mut rec) {
            return (throughput * sky_color(&ray), depth);
        }

        if depth == max_depth {
            return (Color::ZERO, depth);
        }

        let scattered = scene
            .material(rec.material)
            .and_then(|material| material.scatter(&ray, &rec, rng));
        match scattered {
            Some(result) => {
                throughput *= result.attenuation;
                ray = result.scattered;
            }
            None => return (Color::ZERO, depth),
        }
    }

    (Color::ZERO, 0)
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Gamma-encode every channel of a linear color.
#[inline]
pub fn gamma_correct(color: Color) -> Color {
    Color::new(
        linear_to_gamma(color.x),
        linear_to_gamma(color.y),
        linear_to_gamma(color.z),
    )
}

/// Render a single pixel with multi-sampling.
///
/// Returns the linear mean over all samples. Each sample jitters its
/// image-plane coordinate uniformly within the pixel footprint.
pub fn render_pixel(camera: &Camera, scene: &Scene, row: u32, col: u32, config: &RenderConfig) -> Color {
    let mut rng = pixel_rng(config.seed, row, col);
    let samples = config.samples_per_pixel.max(1);
    let mut pixel_color = Color::ZERO;

    for _ in 0..samples {
        let s = (col as f32 + gen_f32(&mut rng)) / config.width as f32;
        let t = (row as f32 + gen_f32(&mut rng)) / config.height as f32;
        let ray = camera.get_ray(s, t);
        pixel_color += scene_color(&ray, scene, config.max_depth, &mut rng);
    }

    pixel_color / samples as f32
}

/// Render the entire scene to a gamma-encoded film.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> Film {
    render_with_progress(camera, scene, config, |_| {})
}

/// Like [`render`], calling `on_row` after each finished scanline.
///
/// Scanlines are rendered from the top of the image down.
pub fn render_with_progress<F>(camera: &Camera, scene: &Scene, config: &RenderConfig, mut on_row: F) -> Film
where
    F: FnMut(u32),
{
    log::info!(
        "Rendering {}x{} @ {} spp, max depth {}, {} objects",
        config.width,
        config.height,
        config.samples_per_pixel,
        config.max_depth,
        scene.object_count()
    );
    let start = std::time::Instant::now();

    let mut film = Film::new(config.width, config.height);
    for row in (0..config.height).rev() {
        for col in 0..config.width {
            let color = render_pixel(camera, scene, row, col, config);
            film.set(row, col, gamma_correct(color));
        }
        on_row(row);
    }

    log::info!("Rendered in {:.2?}", start.elapsed());
    film
}

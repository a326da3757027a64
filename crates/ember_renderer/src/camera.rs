//! Camera for ray generation.

use ember_math::{Ray, Vec3};

/// Pinhole camera mapping image-plane coordinates to world-space rays.
///
/// All fields are derived once in [`Camera::new`]; the camera is immutable
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    origin: Vec3,
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
}

impl Camera {
    /// Create a camera at `look_from` facing `look_at`.
    ///
    /// - `vup`: approximate up direction, must not be parallel to the view axis
    /// - `vfov`: vertical field of view in degrees
    /// - `aspect`: image width divided by height
    pub fn new(look_from: Vec3, look_at: Vec3, vup: Vec3, vfov: f32, aspect: f32) -> Self {
        let half_height = (vfov.to_radians() / 2.0).tan();
        let half_width = aspect * half_height;

        // Orthonormal basis: w points backwards, u right, v up
        let w = (look_from - look_at).normalize();
        let u = vup.cross(w).normalize();
        let v = w.cross(u);

        Self {
            origin: look_from,
            lower_left_corner: look_from - half_width * u - half_height * v - w,
            horizontal: 2.0 * half_width * u,
            vertical: 2.0 * half_height * v,
        }
    }

    /// Ray from the eye through image-plane point `(s, t)`.
    ///
    /// `(0, 0)` is the lower-left corner and `(1, 1)` the upper-right one.
    #[inline]
    pub fn get_ray(&self, s: f32, t: f32) -> Ray {
        Ray::new(
            self.origin,
            self.lower_left_corner + s * self.horizontal + t * self.vertical - self.origin,
        )
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn lower_left_corner(&self) -> Vec3 {
        self.lower_left_corner
    }

    pub fn horizontal(&self) -> Vec3 {
        self.horizontal
    }

    pub fn vertical(&self) -> Vec3 {
        self.vertical
    }
}

//! Random sampling helpers.
//!
//! Every sampler takes the generator explicitly. Rendering seeds one
//! generator per pixel with [`pixel_rng`], so an image depends only on the
//! scene, the camera and the configured seed.

use ember_math::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Upper bound on rejection-sampling draws for [`random_in_unit_sphere`].
///
/// The acceptance rate is about 52%, so a uniform generator exhausts this
/// with probability below 1e-20.
pub const MAX_REJECTION_ATTEMPTS: u32 = 64;

/// Uniform f32 in [0, 1).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Uniform point strictly inside the unit ball.
///
/// Draws from `[-1, 1]^3` until the squared length is below one. Returns
/// the origin if [`MAX_REJECTION_ATTEMPTS`] draws are all rejected.
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    for _ in 0..MAX_REJECTION_ATTEMPTS {
        let p = Vec3::new(
            gen_f32(rng) * 2.0 - 1.0,
            gen_f32(rng) * 2.0 - 1.0,
            gen_f32(rng) * 2.0 - 1.0,
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
    Vec3::ZERO
}

/// Deterministic generator for the pixel at `(row, col)`.
pub fn pixel_rng(seed: u64, row: u32, col: u32) -> StdRng {
    let pixel = ((row as u64) << 32) | col as u64;
    StdRng::seed_from_u64(mix64(seed ^ mix64(pixel)))
}

/// SplitMix64 finalizer. Spreads neighbouring pixel indices across the seed space.
#[inline]
fn mix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_gen_f32_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let x = gen_f32(&mut rng);
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_random_in_unit_sphere_inside() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let p = random_in_unit_sphere(&mut rng);
            assert!(p.length_squared() < 1.0);
        }
    }

    #[test]
    fn test_random_in_unit_sphere_bounded_on_biased_source() {
        // Every draw maps to a corner of the cube, which is always rejected
        let mut rng = StepRng::new(u64::MAX, 0);
        assert_eq!(random_in_unit_sphere(&mut rng), Vec3::ZERO);
    }

    #[test]
    fn test_pixel_rng_deterministic() {
        let mut a = pixel_rng(3, 10, 20);
        let mut b = pixel_rng(3, 10, 20);
        assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn test_pixel_rng_differs_between_pixels() {
        let first = pixel_rng(0, 0, 1).next_u64();
        assert_ne!(first, pixel_rng(0, 1, 0).next_u64());
        assert_ne!(first, pixel_rng(0, 0, 2).next_u64());
        assert_ne!(first, pixel_rng(1, 0, 1).next_u64());
    }
}

//! Aggregate of scene objects resolving the nearest hit.

use crate::{HitRecord, Hittable, Object, ObjectId};
use ember_math::{Interval, Ray};

/// An unordered collection of object handles.
///
/// Members are resolved against an object arena at query time. Member
/// order only changes how much work a query does, never its result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Composite {
    members: Vec<ObjectId>,
}

impl Composite {
    /// Create a new empty composite.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member handle.
    pub fn push(&mut self, id: ObjectId) {
        self.members.push(id);
    }

    pub fn members(&self) -> &[ObjectId] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Nearest hit among the members within `ray_t`.
    ///
    /// Each accepted hit narrows the upper bound for the members after it.
    /// Handles that do not resolve in `objects` are skipped.
    pub fn hit(&self, objects: &[Object], ray: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool {
        let mut hit_anything = false;
        let mut closest_so_far = ray_t.max;

        for id in &self.members {
            let Some(object) = objects.get(id.index()) else {
                continue;
            };
            if object.hit(ray, ray_t.with_max(closest_so_far), rec) {
                hit_anything = true;
                closest_so_far = rec.t;
            }
        }

        hit_anything
    }
}

impl FromIterator<ObjectId> for Composite {
    fn from_iter<I: IntoIterator<Item = ObjectId>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Material, Scene};
    use ember_math::Vec3;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_scene(rng: &mut StdRng, count: usize) -> Scene {
        let mut scene = Scene::new();
        let material = scene.add_material(Material::lambertian(Vec3::splat(0.5)));
        for _ in 0..count {
            let center = Vec3::new(
                rng.gen_range(-4.0..4.0),
                rng.gen_range(-4.0..4.0),
                rng.gen_range(-8.0..-1.0),
            );
            let radius = rng.gen_range(0.1..1.5);
            scene
                .add_sphere(center, radius, material)
                .expect("material handle was issued by this scene");
        }
        scene
    }

    /// Minimum-t hit across every object queried on its own.
    fn brute_force(objects: &[Object], ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        objects
            .iter()
            .filter_map(|object| {
                let mut rec = HitRecord::default();
                object.hit(ray, ray_t, &mut rec).then_some(rec)
            })
            .min_by(|a, b| a.t.total_cmp(&b.t))
    }

    #[test]
    fn test_composite_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(1234);
        let scene = random_scene(&mut rng, 12);

        for _ in 0..500 {
            let origin = Vec3::new(
                rng.gen_range(-2.0..2.0),
                rng.gen_range(-2.0..2.0),
                rng.gen_range(-1.0..2.0),
            );
            let direction = Vec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..0.5),
            );
            let ray = Ray::new(origin, direction);
            let ray_t = Interval::new(0.001, rng.gen_range(1.0..20.0));

            let mut rec = HitRecord::default();
            let hit = scene.world().hit(scene.objects(), &ray, ray_t, &mut rec);
            let expected = brute_force(scene.objects(), &ray, ray_t);

            assert_eq!(hit, expected.is_some());
            if let Some(expected) = expected {
                assert_eq!(rec, expected);
            }
        }
    }

    #[test]
    fn test_composite_order_independent() {
        let mut rng = StdRng::seed_from_u64(99);
        let scene = random_scene(&mut rng, 6);
        let reversed: Composite = scene.world().members().iter().rev().copied().collect();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.1, -0.05, -1.0));
        let ray_t = Interval::new(0.001, f32::MAX);

        let mut forward_rec = HitRecord::default();
        let mut reverse_rec = HitRecord::default();
        let forward_hit = scene.world().hit(scene.objects(), &ray, ray_t, &mut forward_rec);
        let reverse_hit = reversed.hit(scene.objects(), &ray, ray_t, &mut reverse_rec);

        assert_eq!(forward_hit, reverse_hit);
        assert_eq!(forward_rec.t, reverse_rec.t);
    }

    #[test]
    fn test_empty_composite_misses() {
        let composite = Composite::new();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let mut rec = HitRecord::default();

        assert!(composite.is_empty());
        assert!(!composite.hit(&[], &ray, Interval::new(0.001, f32::MAX), &mut rec));
    }

    #[test]
    fn test_dangling_handle_skipped() {
        let mut scene = Scene::new();
        let material = scene.add_material(Material::metal(Vec3::ONE));
        let id = scene
            .add_sphere(Vec3::new(0.0, 0.0, -2.0), 0.5, material)
            .expect("valid material");

        let mut composite = Composite::new();
        composite.push(ObjectId::from_index(42));
        composite.push(id);

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let mut rec = HitRecord::default();
        assert!(composite.hit(scene.objects(), &ray, Interval::new(0.001, f32::MAX), &mut rec));
        assert!((rec.t - 1.5).abs() < 1e-5);
    }
}

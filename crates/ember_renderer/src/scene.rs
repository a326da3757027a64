//! Scene arena: materials and primitives addressed by stable handles.
//!
//! Objects refer to their material by [`MaterialId`] and the world
//! [`Composite`] refers to objects by [`ObjectId`]. Handles are plain
//! indices issued in insertion order and stay valid for the scene's
//! lifetime, since nothing is ever removed.

use crate::{Composite, HitRecord, Hittable, Material, Object, Sphere};
use ember_math::{Interval, Ray, Vec3};
use thiserror::Error;

/// Handle to a material stored in a [`Scene`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MaterialId(usize);

impl MaterialId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// Handle to an object stored in a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(usize);

impl ObjectId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// Errors that can occur while building a scene.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Unknown material handle: {0}")]
    UnknownMaterial(usize),

    #[error("Unknown object handle: {0}")]
    UnknownObject(usize),
}

pub type SceneResult<T> = Result<T, SceneError>;

/// Owns every material and object of a render.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    materials: Vec<Material>,
    objects: Vec<Object>,
    world: Composite,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a material and return its handle.
    pub fn add_material(&mut self, material: Material) -> MaterialId {
        let id = MaterialId(self.materials.len());
        self.materials.push(material);
        log::debug!("Added material {}: {:?}", id.0, material);
        id
    }

    /// Store an object and add it to the world.
    ///
    /// Fails if the object's material handle was not issued by this scene.
    pub fn add_object(&mut self, object: Object) -> SceneResult<ObjectId> {
        let material = object.material();
        if self.material(material).is_none() {
            return Err(SceneError::UnknownMaterial(material.0));
        }

        let id = ObjectId(self.objects.len());
        self.objects.push(object);
        self.world.push(id);
        log::debug!("Added object {}: {:?}", id.0, object);
        Ok(id)
    }

    /// Convenience wrapper around [`Scene::add_object`] for spheres.
    pub fn add_sphere(&mut self, center: Vec3, radius: f32, material: MaterialId) -> SceneResult<ObjectId> {
        self.add_object(Sphere::new(center, radius, material).into())
    }

    /// Build a composite over a subset of this scene's objects.
    pub fn composite<I>(&self, members: I) -> SceneResult<Composite>
    where
        I: IntoIterator<Item = ObjectId>,
    {
        members
            .into_iter()
            .map(|id| {
                self.object(id)
                    .map(|_| id)
                    .ok_or(SceneError::UnknownObject(id.0))
            })
            .collect()
    }

    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.0)
    }

    pub fn object(&self, id: ObjectId) -> Option<&Object> {
        self.objects.get(id.0)
    }

    /// All objects, indexable by [`ObjectId::index`].
    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    /// The composite holding every object added to the scene.
    pub fn world(&self) -> &Composite {
        &self.world
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }
}

impl Hittable for Scene {
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool {
        self.world.hit(&self.objects, ray, ray_t, rec)
    }
}

use glam::{Affine3A, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// The component's position relative to the world, for entities that do not have a [`super::Parent`].
///
/// There are two ways an entity's position gets set:
///
/// 1. **Game controlled** - the pawn, drawers, props that are being held. Write to [`LocalTransform`] and
///    the position will flow into [`super::GlobalTransform`] and, if the entity has a [`super::RigidBody`],
///    into the physics simulation.
/// 1. **Physics controlled** - any entity whose rigid body is simulating physics. Writes to [`LocalTransform`]
///    will be overwritten by the physics simulation at the end of each tick.
///
/// Entities with a [`super::Parent`] ignore this component; their position comes from the parent instead.
#[derive(Clone, PartialEq, Debug, Copy, Deserialize, Serialize)]
pub struct LocalTransform {
    /// The translation of the entity
    pub translation: Vec3,
    /// The rotation of the entity
    pub rotation: Quat,
    /// The non-uniform scale of the entity
    pub scale: Vec3,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl LocalTransform {
    /// Create a transform with only a translation
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    /// Convenience function to convert the [`LocalTransform`] into a [`glam::Affine3A`]
    pub fn to_affine(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    /// Update the scale, rotation and translation from a [`glam::Affine3A`]
    pub fn update_from_affine(&mut self, transform: &Affine3A) {
        let (scale, rotation, translation) = transform.to_scale_rotation_translation();
        self.scale = scale;
        self.rotation = rotation;
        self.translation = translation;
    }

    /// Update the translation and rotation from a [`rapier3d::na::Isometry3`], leaving the scale alone
    pub fn update_from_isometry(&mut self, isometry: &rapier3d::na::Isometry3<f32>) {
        let (rotation, translation) = crate::util::decompose_isometry(isometry);
        self.rotation = rotation;
        self.translation = translation;
    }
}

use glam::{Affine3A, Quat, Vec3};
use hecs::Entity;
use rapier3d::na::{self, Vector3};

/// Direction an entity is "facing" in its own space. Matches the OpenXR view and grip conventions.
pub const LOCAL_FORWARD: Vec3 = Vec3::NEG_Z;

#[inline]
/// Convert a [`glam::Affine3A`] into a [`rapier3d::na::Isometry3`], discarding any scale
pub fn isometry_from_affine(a: &Affine3A) -> na::Isometry3<f32> {
    let (_, r, t) = a.to_scale_rotation_translation();
    let translation = na::Translation3::new(t.x, t.y, t.z);

    let rotation: na::UnitQuaternion<f32> =
        na::UnitQuaternion::new_unchecked([r.x, r.y, r.z, r.w].into());

    na::Isometry3::from_parts(translation, rotation)
}

#[inline]
/// Decompose a [`rapier3d::na::Isometry3`] into its rotation and translation components
pub fn decompose_isometry(i: &na::Isometry3<f32>) -> (Quat, Vec3) {
    (
        Quat::from_array(i.rotation.quaternion().coords.data.0[0]),
        mint::Vector3::from(i.translation.vector.data.0[0]).into(),
    )
}

#[inline]
/// Convert a [`glam::Vec3`] into a [`rapier3d::na::Vector3`]
pub fn na_vector_from_glam(v: Vec3) -> Vector3<f32> {
    [v.x, v.y, v.z].into()
}

#[inline]
/// Convert a [`rapier3d::na::Vector3`] into a [`glam::Vec3`]
pub fn glam_vec_from_na(v: &Vector3<f32>) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

/// Pack an entity into a collider's `user_data` so that physics queries can find their way back to the world
pub fn entity_to_user_data(entity: Entity) -> u128 {
    entity.to_bits().get() as _
}

/// Recover an entity previously stored with [`entity_to_user_data`]
pub fn entity_from_user_data(user_data: u128) -> Option<Entity> {
    Entity::from_bits(user_data as u64)
}

/// The position and forward direction of an entity, given its transform in global space.
pub fn origin_and_forward(global_from_local: &Affine3A) -> (Vec3, Vec3) {
    let origin: Vec3 = global_from_local.translation.into();
    let forward = global_from_local
        .transform_vector3(LOCAL_FORWARD)
        .normalize_or_zero();
    (origin, forward)
}

use glam::Affine3A;
use hecs::Entity;

/// Component added to indicate that an entity has a parent.
///
/// `from_child` is the child's transform in the parent's space. Tracked entities (the camera and the
/// motion controllers) have it rewritten every tick; attached entities keep whatever the attachment rule
/// computed. Used by [`crate::systems::update_global_transform_system`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parent {
    /// The parent entity
    pub entity: Entity,
    /// Transform of the child relative to the parent
    pub from_child: Affine3A,
}

impl Parent {
    /// Attach directly on top of `entity`
    pub fn new(entity: Entity) -> Self {
        Self {
            entity,
            from_child: Affine3A::IDENTITY,
        }
    }
}

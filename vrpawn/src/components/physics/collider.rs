use hecs::Entity;
use rapier3d::prelude::ColliderHandle;

/// A component that enables collision detection - essentially a thin wrapper around [`rapier3d::prelude::Collider`].
#[derive(Debug, Clone)]
pub struct Collider {
    /// A list of entities that this one overlapped with during the last physics step
    pub collisions_this_frame: Vec<Entity>,
    /// A handle to the collider in the physics simulation
    pub handle: ColliderHandle,
}

impl Collider {
    /// Wrap a collider handle
    pub fn new(handle: ColliderHandle) -> Self {
        Self {
            collisions_this_frame: Vec::new(),
            handle,
        }
    }
}

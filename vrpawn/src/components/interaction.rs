use std::fmt::Debug;

use glam::Vec3;

use super::LocalTransform;
use crate::contexts::physics_context::RaycastHit;

/// Something in the world that reacts when the pawn reaches out and interacts with it.
///
/// The pawn doesn't know or care what the concrete kind is, and doesn't look at the outcome: it calls
/// [`Interactable::on_interaction_hit`] and moves on.
pub trait Interactable: Debug + Send + Sync {
    /// Called when one of the owner's colliders was hit by the pawn's grab ray. `owner` is the transform of
    /// the entity carrying the [`Interaction`] component.
    fn on_interaction_hit(&mut self, owner: &mut LocalTransform, hit: &RaycastHit);
}

/// A component that gives an entity the interaction capability.
#[derive(Debug)]
pub struct Interaction(pub Box<dyn Interactable>);

impl Interaction {
    /// Wrap an [`Interactable`]
    pub fn new(interactable: impl Interactable + 'static) -> Self {
        Self(Box::new(interactable))
    }
}

/// A drawer that slides open along `open_offset` when interacted with, and closes again on the next interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawer {
    /// How far, and in which direction, the drawer travels when opened
    pub open_offset: Vec3,
    /// Is the drawer currently open?
    pub is_open: bool,
}

impl Drawer {
    /// Create a closed drawer
    pub fn new(open_offset: Vec3) -> Self {
        Self {
            open_offset,
            is_open: false,
        }
    }
}

impl Interactable for Drawer {
    fn on_interaction_hit(&mut self, owner: &mut LocalTransform, _hit: &RaycastHit) {
        let owner_from_offset = owner.rotation * self.open_offset;
        if self.is_open {
            owner.translation -= owner_from_offset;
        } else {
            owner.translation += owner_from_offset;
        }
        self.is_open = !self.is_open;
    }
}

#![allow(missing_docs)]
pub mod collision;
pub mod grabbing;
pub mod held_object;
pub mod motion_controllers;
pub mod physics;
pub mod teleport;
pub mod update_global_transform;
pub mod update_global_transform_with_parent;

pub use collision::collision_system;
pub use grabbing::{grabbing_system, InteractionOutcome};
pub use held_object::held_object_system;
pub use motion_controllers::motion_controllers_system;
pub use physics::physics_system;
pub use teleport::teleport_system;
pub use update_global_transform::update_global_transform_system;
pub use update_global_transform_with_parent::update_global_transform_with_parent_system;

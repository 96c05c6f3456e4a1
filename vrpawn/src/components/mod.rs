#![allow(missing_docs)]
pub mod anchor_point;
pub mod camera;
pub mod gas_mask;
pub mod global_transform;
pub mod info;
pub mod interaction;
pub mod local_transform;
pub mod motion_controller;
pub mod parent;
pub mod pawn;
pub mod physics;
pub mod static_mesh;
pub mod tags;

pub use anchor_point::AnchorPoint;
pub use camera::Camera;
pub use gas_mask::{GasMask, ProximitySphere};
pub use global_transform::GlobalTransform;
pub use info::Info;
pub use interaction::{Drawer, Interactable, Interaction};
pub use local_transform::LocalTransform;
pub use motion_controller::{Handedness, MotionController};
pub use parent::Parent;
pub use pawn::{InteractionState, Pawn};
pub use physics::{Collider, RigidBody, Teleport};
pub use static_mesh::StaticMesh;
pub use tags::Tags;

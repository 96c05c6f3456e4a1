pub mod collider;
pub mod rigid_body;
pub mod teleport;

pub use collider::Collider;
pub use rigid_body::RigidBody;
pub use teleport::Teleport;

use rapier3d::prelude::RigidBodyHandle;

/// A component used to synchronise this entity's position in the game simulation with the physics simulation.
///
/// How the entity is treated depends on the body's type in the physics simulation:
///
/// - **Dynamic** bodies are *physics controlled*: at the end of each tick their [`crate::components::LocalTransform`]
///   and [`crate::components::GlobalTransform`] are overwritten by their position in the physics simulation.
/// - **Kinematic** bodies are *game controlled*: their [`crate::components::GlobalTransform`] is pushed into the
///   physics simulation before each step.
/// - **Fixed** bodies never move, unless they are [`super::Teleport`]ed.
///
/// Use [`crate::contexts::PhysicsContext::set_simulate_physics`] to switch between dynamic and kinematic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RigidBody {
    /// A handle to the body in the physics simulation
    pub handle: RigidBodyHandle,
}

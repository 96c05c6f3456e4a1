/// A "one-shot" tag component that indicates to the physics system that you would like
/// this entity to be teleported - ie. moved in a non-physical way. The mechanism for this is simple:
///
/// 1. Set the entity's [`crate::components::LocalTransform`] to where you'd like the entity teleported
/// 2. Insert this component to the entity you'd like to teleport
///
/// In the next physics step the body is moved instantly, without sweeping through anything in between, and
/// this component is removed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Teleport {}

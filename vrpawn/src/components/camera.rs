/// A marker component used to indicate the player's headset, or Head Mounted Display in the game simulation.
///
/// The entity marked with this component has its [`super::Parent`] updated each tick with the pose of the
/// player's headset in the real world (ie. stage space). Since this entity is parented to the pawn's root,
/// its [`super::GlobalTransform`] is the player's view point in the virtual world - which is where teleport
/// rays come from.
#[derive(Debug, Clone, Copy, Default)]
pub struct Camera {}

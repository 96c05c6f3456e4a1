use serde::{Deserialize, Serialize};

/// A component that represents the "side" or "handedness" that an entity is on
/// Used by components such as [`MotionController`] and [`super::AnchorPoint`] to identify which controller they should map to
#[derive(Debug, PartialEq, Clone, Copy, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum Handedness {
    /// Left hand side
    Left,
    /// Right hand side
    Right,
}

/// A component added to an entity whose pose is tracked by one of the player's controllers.
///
/// Each tick [`crate::systems::motion_controllers_system`] writes the controller's grip pose (in stage space)
/// into this entity's [`super::Parent`], so the entity should be parented to the pawn's root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionController {
    /// Which controller is the tracking source?
    pub handedness: Handedness,
}

impl MotionController {
    /// Shortcut helper to create a left controller
    pub fn left() -> Self {
        Self {
            handedness: Handedness::Left,
        }
    }

    /// Shortcut helper to create a right controller
    pub fn right() -> Self {
        Self {
            handedness: Handedness::Right,
        }
    }
}

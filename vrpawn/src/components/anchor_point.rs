use super::Handedness;

/// Marker for the point on each hand that grabbed objects snap to, and that the grab ray is cast from.
/// It carries the hand's visual mesh and is parented to the [`super::MotionController`] on the same side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorPoint {
    /// Which hand is this anchor on?
    pub handedness: Handedness,
}

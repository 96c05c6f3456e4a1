/// A gas mask the player may one day be able to wear.
///
/// The mask is made of a mesh body (the entity carrying this component) and a [`ProximitySphere`] child
/// that overlaps everything. Nothing consumes the overlaps yet, so `is_equipped` is never set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GasMask {
    /// Is the mask being worn?
    pub is_equipped: bool,
}

/// Marker for a trigger volume that detects nearby entities. Overlaps are recorded in the entity's
/// [`super::Collider::collisions_this_frame`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximitySphere {
    /// Radius of the sphere
    pub radius: f32,
}

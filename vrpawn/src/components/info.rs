/// Component that adds some information about the entity
/// Useful for debugging - added to everything the crate spawns
#[derive(Debug, Clone, Eq, PartialEq, Hash, Default)]
pub struct Info {
    /// A helpful name
    pub name: String,
}

impl Info {
    /// Shortcut to create an [`Info`] with a name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

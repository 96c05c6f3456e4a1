/// The visual representation of an entity. Nothing in this crate draws it; it names the asset a renderer
/// should use for the entity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StaticMesh {
    /// Name of the mesh asset
    pub asset: String,
}

impl StaticMesh {
    /// Create a mesh referencing `asset`
    pub fn new(asset: impl Into<String>) -> Self {
        Self {
            asset: asset.into(),
        }
    }
}

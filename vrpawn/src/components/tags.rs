/// Coarse-grained labels used to classify entities, eg. [`crate::PICKABLE_TAG`] or [`crate::DRAWER_TAG`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tags(pub Vec<String>);

impl Tags {
    /// Create a set of tags containing just `tag`
    pub fn single(tag: impl Into<String>) -> Self {
        Self(vec![tag.into()])
    }

    /// Does this entity carry `tag`?
    pub fn has(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }
}

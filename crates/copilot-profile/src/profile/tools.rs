//! Ordered, duplicate-free set of tool identifiers.

/// Tool identifiers in insertion order. Re-inserting an identifier is a no-op,
/// so the first occurrence keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolSet {
    ids: Vec<String>,
}

impl ToolSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the identifier was already present.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            tracing::debug!("dropping duplicate tool identifier '{}'", id);
            return false;
        }
        self.ids.push(id);
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|t| t == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.ids.clone()
    }
}

impl<S: Into<String>> FromIterator<S> for ToolSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = ToolSet::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for ToolSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for id in iter {
            self.insert(id);
        }
    }
}

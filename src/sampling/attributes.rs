//! Attribute tuples: one chosen value per category

/// Chosen value for every category of an item, in catalog order
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AttributeTuple {
    traits: Vec<(String, String)>,
}

impl AttributeTuple {
    /// Value chosen for a category
    pub fn get(&self, category: &str) -> Option<&str> {
        self.traits
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, value)| value.as_str())
    }

    /// `(category, value)` pairs in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.traits
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Values in catalog order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.traits.iter().map(|(_, value)| value.as_str())
    }

    /// Number of categories covered
    pub const fn len(&self) -> usize {
        self.traits.len()
    }

    /// Check whether the tuple covers no categories
    pub const fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }

    /// Collision key: all values concatenated in catalog order
    pub fn key(&self) -> String {
        self.values().collect()
    }
}

impl<C, V> FromIterator<(C, V)> for AttributeTuple
where
    C: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (C, V)>>(iter: I) -> Self {
        Self {
            traits: iter
                .into_iter()
                .map(|(category, value)| (category.into(), value.into()))
                .collect(),
        }
    }
}

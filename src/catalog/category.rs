//! Trait categories and the catalog that orders them

use crate::catalog::weights::{Weight, covers_seed_range, total_weight};
use crate::io::error::{Result, invalid_catalog};
use num_bigint::BigUint;
use std::collections::{BTreeMap, HashSet};

/// One selectable value and its likelihood mass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitEntry {
    /// Value written into generated documents
    pub value: String,
    /// Share of the seed range mapped to this value
    pub weight: Weight,
}

impl TraitEntry {
    /// Create an entry from a value and weight
    pub fn new(value: impl Into<String>, weight: Weight) -> Self {
        Self {
            value: value.into(),
            weight,
        }
    }
}

/// Named axis of variation with its entries in declaration order
///
/// Declaration order is significant: selection walks the cumulative weights
/// front to back and the last entry absorbs any uncovered seed range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitCategory {
    name: String,
    entries: Vec<TraitEntry>,
}

impl TraitCategory {
    /// Create a category
    ///
    /// # Errors
    ///
    /// Returns an error if the category has no entries or repeats a value
    pub fn new(name: impl Into<String>, entries: Vec<TraitEntry>) -> Result<Self> {
        let name = name.into();
        if entries.is_empty() {
            return Err(invalid_catalog(&format!("category '{name}' has no entries")));
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.value.as_str()) {
                return Err(invalid_catalog(&format!(
                    "category '{name}' lists value '{}' more than once",
                    entry.value
                )));
            }
        }

        Ok(Self { name, entries })
    }

    /// Create a category where every value gets `1 / len` of the seed range
    ///
    /// # Errors
    ///
    /// Returns an error if `values` is empty or contains duplicates
    pub fn uniform<S: Into<String>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = S>,
    ) -> Result<Self> {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        let share = Weight::fraction(1, values.len().max(1) as u64)?;
        let entries = values
            .into_iter()
            .map(|value| TraitEntry::new(value, share.clone()))
            .collect();
        Self::new(name, entries)
    }

    /// Category name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries in declaration order
    pub fn entries(&self) -> &[TraitEntry] {
        &self.entries
    }

    /// Values in declaration order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.value.as_str())
    }

    /// Number of entries
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed category
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all entry weights
    pub fn total_weight(&self) -> BigUint {
        total_weight(self.entries.iter().map(|entry| &entry.weight))
    }

    /// Check whether every possible seed lands on an entry before the fallback
    pub fn covers_seed_range(&self) -> bool {
        covers_seed_range(self.entries.iter().map(|entry| &entry.weight))
    }
}

/// Layout hints for an image fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMetadata {
    /// SVG `viewBox` attribute for documents embedding this image
    pub view_box: String,
    /// Font size of the overlaid text
    pub font_size: String,
}

impl ImageMetadata {
    /// Create image metadata
    pub fn new(view_box: impl Into<String>, font_size: impl Into<String>) -> Self {
        Self {
            view_box: view_box.into(),
            font_size: font_size.into(),
        }
    }
}

/// Every category of a collection in draw order, plus per-image layout
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraitCatalog {
    categories: Vec<TraitCategory>,
    images: BTreeMap<String, ImageMetadata>,
}

impl TraitCatalog {
    /// Create a catalog from categories in draw order
    ///
    /// # Errors
    ///
    /// Returns an error if there are no categories or two share a name
    pub fn new(categories: Vec<TraitCategory>) -> Result<Self> {
        if categories.is_empty() {
            return Err(invalid_catalog(&"catalog has no categories"));
        }

        let mut names = HashSet::with_capacity(categories.len());
        for category in &categories {
            if !names.insert(category.name()) {
                return Err(invalid_catalog(&format!(
                    "category '{}' is declared more than once",
                    category.name()
                )));
            }
        }

        Ok(Self {
            categories,
            images: BTreeMap::new(),
        })
    }

    /// Attach layout metadata for an image value
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>, metadata: ImageMetadata) -> Self {
        self.images.insert(image.into(), metadata);
        self
    }

    /// Categories in draw order
    pub fn categories(&self) -> &[TraitCategory] {
        &self.categories
    }

    /// Look up a category by name
    pub fn category(&self, name: &str) -> Option<&TraitCategory> {
        self.categories.iter().find(|category| category.name() == name)
    }

    /// Layout metadata for an image value
    pub fn image(&self, image: &str) -> Option<&ImageMetadata> {
        self.images.get(image)
    }

    /// All registered image metadata
    pub const fn images(&self) -> &BTreeMap<String, ImageMetadata> {
        &self.images
    }

    /// Categories whose weights leave the top of the seed range uncovered
    pub fn uncovered_categories(&self) -> impl Iterator<Item = &TraitCategory> {
        self.categories
            .iter()
            .filter(|category| !category.covers_seed_range())
    }

    /// Ensure the named categories exist
    ///
    /// # Errors
    ///
    /// Returns an error naming the first missing category
    pub fn require_categories(&self, names: &[&str]) -> Result<()> {
        for name in names {
            if self.category(name).is_none() {
                return Err(invalid_catalog(&format!("missing category '{name}'")));
            }
        }
        Ok(())
    }

    /// Ensure every value of `category` has image metadata
    ///
    /// # Errors
    ///
    /// Returns an error if the category is missing or a value lacks metadata
    pub fn require_image_metadata(&self, category: &str) -> Result<()> {
        let images = self
            .category(category)
            .ok_or_else(|| invalid_catalog(&format!("missing category '{category}'")))?;

        for image in images.values() {
            if !self.images.contains_key(image) {
                return Err(invalid_catalog(&format!(
                    "image '{image}' has no viewBox/font-size metadata"
                )));
            }
        }
        Ok(())
    }
}

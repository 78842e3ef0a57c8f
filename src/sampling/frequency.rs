//! Per-category occurrence counts for reporting

use crate::catalog::TraitCatalog;
use crate::sampling::attributes::AttributeTuple;

/// Occurrence counts of one category's values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    category: String,
    counts: Vec<(String, usize)>,
}

impl FrequencyTable {
    /// Category this table counts
    pub fn category(&self) -> &str {
        &self.category
    }

    /// `(value, count)` pairs in catalog order
    pub fn counts(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts
            .iter()
            .map(|(value, count)| (value.as_str(), *count))
    }

    /// Occurrences of one value
    pub fn count(&self, value: &str) -> usize {
        self.counts
            .iter()
            .find(|(candidate, _)| candidate == value)
            .map_or(0, |(_, count)| *count)
    }

    /// Observed share of each value over `total` items
    pub fn frequencies(&self, total: usize) -> impl Iterator<Item = (&str, f64)> {
        self.counts.iter().map(move |(value, count)| {
            let share = if total == 0 {
                0.0
            } else {
                *count as f64 / total as f64
            };
            (value.as_str(), share)
        })
    }

    fn increment(&mut self, value: &str) {
        if let Some((_, count)) = self.counts.iter_mut().find(|(known, _)| known == value) {
            *count += 1;
        } else {
            self.counts.push((value.to_string(), 1));
        }
    }
}

/// One frequency table per category, in catalog order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTables {
    tables: Vec<FrequencyTable>,
}

impl FrequencyTables {
    /// Zeroed tables listing every declared value of the catalog
    pub fn for_catalog(catalog: &TraitCatalog) -> Self {
        let tables = catalog
            .categories()
            .iter()
            .map(|category| FrequencyTable {
                category: category.name().to_string(),
                counts: category.values().map(|value| (value.to_string(), 0)).collect(),
            })
            .collect();
        Self { tables }
    }

    /// Count every `(category, value)` pair of an item
    pub fn record_frequency(&mut self, attributes: &AttributeTuple) {
        for (category, value) in attributes.iter() {
            if let Some(table) = self.tables.iter_mut().find(|t| t.category == category) {
                table.increment(value);
            } else {
                self.tables.push(FrequencyTable {
                    category: category.to_string(),
                    counts: vec![(value.to_string(), 1)],
                });
            }
        }
    }

    /// Table for a category
    pub fn table(&self, category: &str) -> Option<&FrequencyTable> {
        self.tables.iter().find(|table| table.category == category)
    }

    /// All tables in catalog order
    pub fn tables(&self) -> &[FrequencyTable] {
        &self.tables
    }
}

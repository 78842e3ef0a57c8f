//! TOML catalog files
//!
//! ```toml
//! [[category]]
//! name = "image"
//! entries = [
//!     { value = "svgPaths/ami.svg", weight = "1/2" },
//!     { value = "svgPaths/yak2.svg", weight = "1/2" },
//! ]
//!
//! [[category]]
//! name = "text"
//! entries = [{ value = "石" }, { value = "紙" }]
//!
//! [images."svgPaths/ami.svg"]
//! view_box = "0 0 300 500"
//! font_size = "36"
//! ```
//!
//! Entries without a weight split whatever the explicit weights of their
//! category leave of the seed range. The split is equal, with the division
//! remainder going to the last unweighted entry, so a category that only
//! has unweighted entries covers the whole range.

use crate::catalog::category::{ImageMetadata, TraitCatalog, TraitCategory, TraitEntry};
use crate::catalog::weights::{MAX_UINT256, Weight, total_weight};
use crate::io::error::{GenerationError, Result};
use num_bigint::BigUint;
use num_traits::Zero;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Load a catalog from a TOML file
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid TOML, or
/// describes an invalid catalog
pub fn load_catalog(path: &Path) -> Result<TraitCatalog> {
    let content =
        std::fs::read_to_string(path).map_err(|e| GenerationError::CatalogLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    parse_catalog(&content).map_err(|e| match e {
        GenerationError::CatalogLoad { reason, .. } => GenerationError::CatalogLoad {
            path: path.to_path_buf(),
            reason,
        },
        other => other,
    })
}

/// Parse a catalog from TOML text
///
/// # Errors
///
/// Returns an error if the text is not valid TOML or describes an invalid
/// catalog
pub fn parse_catalog(content: &str) -> Result<TraitCatalog> {
    let toml_data: TomlCatalog =
        toml::from_str(content).map_err(|e| GenerationError::CatalogLoad {
            path: "<inline>".into(),
            reason: e.to_string(),
        })?;

    let categories = toml_data
        .category
        .into_iter()
        .map(TomlCategory::into_category)
        .collect::<Result<Vec<_>>>()?;

    let catalog = TraitCatalog::new(categories)?;
    Ok(toml_data
        .images
        .into_iter()
        .fold(catalog, |catalog, (image, metadata)| {
            catalog.with_image(
                image,
                ImageMetadata::new(metadata.view_box, metadata.font_size),
            )
        }))
}

#[derive(Debug, Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    category: Vec<TomlCategory>,
    #[serde(default)]
    images: BTreeMap<String, TomlImage>,
}

#[derive(Debug, Deserialize)]
struct TomlCategory {
    name: String,
    #[serde(default)]
    entries: Vec<TomlEntry>,
}

#[derive(Debug, Deserialize)]
struct TomlEntry {
    value: String,
    weight: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TomlImage {
    view_box: String,
    font_size: String,
}

impl TomlCategory {
    fn into_category(self) -> Result<TraitCategory> {
        let parsed = self
            .entries
            .into_iter()
            .map(|entry| -> Result<(String, Option<Weight>)> {
                let weight = entry.weight.map(|text| text.parse::<Weight>()).transpose()?;
                Ok((entry.value, weight))
            })
            .collect::<Result<Vec<_>>>()?;

        let explicit = total_weight(parsed.iter().filter_map(|(_, weight)| weight.as_ref()));
        let remaining = if explicit >= *MAX_UINT256 {
            BigUint::zero()
        } else {
            &*MAX_UINT256 - explicit
        };
        let mut shares = unweighted_shares(
            &remaining,
            parsed.iter().filter(|(_, weight)| weight.is_none()).count(),
        )
        .into_iter();

        let entries = parsed
            .into_iter()
            .map(|(value, weight)| {
                let weight = weight
                    .or_else(|| shares.next())
                    .unwrap_or_default();
                TraitEntry::new(value, weight)
            })
            .collect();

        TraitCategory::new(self.name, entries)
    }
}

/// Split `remaining` into `count` equal weights, the last absorbing the remainder
fn unweighted_shares(remaining: &BigUint, count: usize) -> Vec<Weight> {
    if count == 0 {
        return Vec::new();
    }

    let divisor = BigUint::from(count);
    let share = remaining / &divisor;
    let last = &share + remaining % &divisor;

    let mut shares = vec![Weight::new(share); count - 1];
    shares.push(Weight::new(last));
    shares
}

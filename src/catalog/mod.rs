//! Declarative trait catalogs
//!
//! A catalog is the only configuration a run needs: the categories in draw
//! order, each value's weight, and layout metadata for image values.

/// Trait categories, entries and the catalog container
pub mod category;
/// Built-in collections
pub mod defaults;
/// TOML catalog files
pub mod loader;
/// Weights as shares of the 256-bit seed range
pub mod weights;

pub use category::{ImageMetadata, TraitCatalog, TraitCategory, TraitEntry};
pub use weights::{MAX_UINT256, Weight};

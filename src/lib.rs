//! Deterministic rarity-weighted trait generation for SVG and HTML art collections
//!
//! Every item's attributes are drawn from a declarative catalog with a
//! Keccak-256 hash chain seeded by the item's index, and no two items of a
//! collection may share a full attribute combination.

#![forbid(unsafe_code)]

/// Trait catalogs, weights and built-in collections
pub mod catalog;
/// Input/output operations and error handling
pub mod io;
/// Document templates and fragment lookup
pub mod render;
/// Seed chain, weighted selection, uniqueness and frequency accounting
pub mod sampling;

pub use io::error::{GenerationError, Result};

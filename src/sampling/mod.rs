/// Attribute tuples and their collision keys
pub mod attributes;
/// Exhaustive mixed-radix enumeration
pub mod enumeration;
/// Generation loop and run-wide state
pub mod executor;
/// Per-category occurrence counts
pub mod frequency;
/// Keccak-256 seed chain
pub mod seed;
/// Weighted selection by cumulative-weight walk
pub mod selection;
/// Collision detection across a run
pub mod uniqueness;

pub use attributes::AttributeTuple;
pub use executor::{ChainMode, GeneratedItem, Generator, ItemSink, RunSummary, SelectionMode};
pub use seed::{Keccak256Chain, Seed, SeedChain, derive_next_seed};

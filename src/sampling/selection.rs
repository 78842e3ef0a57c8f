//! Weighted trait selection by cumulative-weight walk

use crate::catalog::TraitCategory;
use crate::sampling::attributes::AttributeTuple;
use crate::sampling::seed::{Seed, SeedChain};
use num_bigint::BigUint;
use num_traits::Zero;

/// Outcome of a single draw from one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw<'a> {
    /// Selected value
    pub value: &'a str,
    /// Position of the selected entry in the category
    pub position: usize,
    /// Seed consumed by this draw, to be threaded into the next one
    pub seed: Seed,
    /// Whether the walk exhausted the category and took the last entry
    pub fell_back: bool,
}

/// Select one value from `category`, advancing the hash chain once
///
/// The next seed is derived first, then entries are walked in declaration
/// order accumulating weights. The first entry whose running total reaches
/// the seed wins. If the weights never reach it, the last entry is returned
/// and the draw is flagged as a fallback.
pub fn select_trait<'a, C: SeedChain + ?Sized>(
    chain: &C,
    seed: &Seed,
    category: &'a TraitCategory,
) -> Draw<'a> {
    let next = chain.next_seed(seed);
    let mut accumulator = BigUint::zero();

    for (position, entry) in category.entries().iter().enumerate() {
        accumulator += entry.weight.value();
        if accumulator >= *next.value() {
            return Draw {
                value: &entry.value,
                position,
                seed: next,
                fell_back: false,
            };
        }
    }

    Draw {
        value: category
            .entries()
            .last()
            .map_or("", |entry| entry.value.as_str()),
        position: category.len().saturating_sub(1),
        seed: next,
        fell_back: true,
    }
}

/// All draws of one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraw {
    /// Chosen values in category order
    pub attributes: AttributeTuple,
    /// Seed after the last draw
    pub seed: Seed,
    /// Categories whose draw fell back to the last entry
    pub fallbacks: Vec<String>,
}

/// Draw one value per category starting from `seed`
///
/// Each draw consumes the seed produced by the previous one.
pub fn draw_item<C: SeedChain + ?Sized>(
    chain: &C,
    seed: Seed,
    categories: &[TraitCategory],
) -> ItemDraw {
    let mut seed = seed;
    let mut fallbacks = Vec::new();
    let mut chosen = Vec::with_capacity(categories.len());

    for category in categories {
        let draw = select_trait(chain, &seed, category);
        if draw.fell_back {
            fallbacks.push(category.name().to_string());
        }
        chosen.push((category.name(), draw.value));
        seed = draw.seed;
    }

    ItemDraw {
        attributes: chosen.into_iter().collect(),
        seed,
        fallbacks,
    }
}

/// Draw the attributes of item `index`, seeding the chain with the index
pub fn generate_item<C: SeedChain + ?Sized>(
    chain: &C,
    index: usize,
    categories: &[TraitCategory],
) -> ItemDraw {
    draw_item(chain, Seed::from(index as u64), categories)
}

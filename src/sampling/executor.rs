use crate::{
    catalog::TraitCatalog,
    io::error::Result,
    sampling::attributes::AttributeTuple,
    sampling::enumeration::{combination_count, enumerate_item},
    sampling::frequency::FrequencyTables,
    sampling::seed::{Keccak256Chain, Seed, SeedChain},
    sampling::selection::draw_item,
    sampling::uniqueness::CollisionSet,
};

/// How the hash chain is seeded at the start of each item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ChainMode {
    /// Every item restarts the chain from its own index
    #[default]
    PerItem,
    /// Item 1 starts from its index, later items continue from the previous
    /// item's final seed
    Continuous,
}

/// How attribute tuples are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Rarity-weighted draws from the hash chain
    Weighted(ChainMode),
    /// Every combination once, in mixed-radix order
    Exhaustive,
}

/// An item that passed the uniqueness check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedItem {
    /// 1-based position in the collection, also the output file number
    pub index: usize,
    /// Chosen values in catalog order
    pub attributes: AttributeTuple,
}

/// Consumer of generated items, typically a document writer
pub trait ItemSink {
    /// Handle one item
    ///
    /// # Errors
    ///
    /// Returns an error if the item cannot be rendered or persisted; the
    /// run stops at the first error
    fn accept(&mut self, item: &GeneratedItem) -> Result<()>;
}

impl<F> ItemSink for F
where
    F: FnMut(&GeneratedItem) -> Result<()>,
{
    fn accept(&mut self, item: &GeneratedItem) -> Result<()> {
        self(item)
    }
}

/// Totals of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Items handed to the sink
    pub items: usize,
    /// Draws that fell back to a category's last entry
    pub fallback_draws: usize,
}

/// Sequential generation loop with run-wide collision and frequency state
///
/// Items are produced strictly in index order. A collision aborts the run
/// before the offending item is handed out, so emitted indices never skip.
pub struct Generator<C = Keccak256Chain> {
    catalog: TraitCatalog,
    chain: C,
    mode: SelectionMode,
    collisions: CollisionSet,
    frequencies: FrequencyTables,
    next_index: usize,
    carried_seed: Option<Seed>,
    fallback_draws: usize,
}

impl Generator<Keccak256Chain> {
    /// Weighted generator over the Keccak-256 chain
    pub fn weighted(catalog: TraitCatalog, chain_mode: ChainMode) -> Self {
        Self::with_chain(catalog, Keccak256Chain, SelectionMode::Weighted(chain_mode))
    }

    /// Generator producing every combination of the catalog once
    pub fn exhaustive(catalog: TraitCatalog) -> Self {
        Self::with_chain(catalog, Keccak256Chain, SelectionMode::Exhaustive)
    }
}

impl<C: SeedChain> Generator<C> {
    /// Generator over an arbitrary seed chain
    pub fn with_chain(catalog: TraitCatalog, chain: C, mode: SelectionMode) -> Self {
        if matches!(mode, SelectionMode::Weighted(_)) {
            for category in catalog.uncovered_categories() {
                tracing::warn!(
                    category = category.name(),
                    "weights sum below the seed range; the highest seeds fall back to the last entry"
                );
            }
        }

        let frequencies = FrequencyTables::for_catalog(&catalog);
        Self {
            catalog,
            chain,
            mode,
            collisions: CollisionSet::new(),
            frequencies,
            next_index: 1,
            carried_seed: None,
            fallback_draws: 0,
        }
    }

    /// Largest number of items this generator can produce, if bounded
    pub fn item_limit(&self) -> Option<usize> {
        match self.mode {
            SelectionMode::Weighted(_) => None,
            SelectionMode::Exhaustive => combination_count(self.catalog.categories()),
        }
    }

    /// Produce, check and record the next item
    ///
    /// # Errors
    ///
    /// Returns `DuplicateTraitCombination` if the item repeats an earlier
    /// combination, or an error if an exhaustive generator is past its last
    /// combination
    pub fn next_item(&mut self) -> Result<GeneratedItem> {
        let index = self.next_index;

        let attributes = match self.mode {
            SelectionMode::Exhaustive => enumerate_item(index, self.catalog.categories())?,
            SelectionMode::Weighted(chain_mode) => {
                let start = match (chain_mode, self.carried_seed.take()) {
                    (ChainMode::Continuous, Some(seed)) => seed,
                    _ => Seed::from(index as u64),
                };
                let draw = draw_item(&self.chain, start, self.catalog.categories());

                for category in &draw.fallbacks {
                    tracing::debug!(
                        index,
                        category = category.as_str(),
                        "draw fell back to the last entry"
                    );
                }
                self.fallback_draws += draw.fallbacks.len();
                self.carried_seed = Some(draw.seed);
                draw.attributes
            }
        };

        self.collisions.check_uniqueness(index, &attributes)?;
        self.frequencies.record_frequency(&attributes);
        self.next_index += 1;

        tracing::trace!(index, key = %attributes.key(), "generated item");
        Ok(GeneratedItem { index, attributes })
    }

    /// Generate `count` items, handing each to `sink` in order
    ///
    /// # Errors
    ///
    /// Stops at the first collision or sink failure
    pub fn run<S: ItemSink + ?Sized>(&mut self, count: usize, sink: &mut S) -> Result<RunSummary> {
        let mut items = 0;
        for _ in 0..count {
            let item = self.next_item()?;
            sink.accept(&item)?;
            items += 1;
        }

        Ok(RunSummary {
            items,
            fallback_draws: self.fallback_draws,
        })
    }

    /// Catalog driving this generator
    pub const fn catalog(&self) -> &TraitCatalog {
        &self.catalog
    }

    /// Frequency tables accumulated so far
    pub const fn frequencies(&self) -> &FrequencyTables {
        &self.frequencies
    }

    /// Combinations recorded so far
    pub const fn collisions(&self) -> &CollisionSet {
        &self.collisions
    }

    /// Number of items produced so far
    pub const fn produced(&self) -> usize {
        self.next_index - 1
    }

    /// Draws that fell back to a category's last entry so far
    pub const fn fallback_draws(&self) -> usize {
        self.fallback_draws
    }
}

//! Tests for cumulative-weight selection and seed threading

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use std::cell::RefCell;
    use traitloom::catalog::defaults::weighted_collection;
    use traitloom::catalog::{TraitCategory, TraitEntry, Weight};
    use traitloom::sampling::Keccak256Chain;
    use traitloom::sampling::seed::{Seed, SeedChain};
    use traitloom::sampling::selection::{draw_item, generate_item, select_trait};

    /// Always yields the same seed
    struct FixedChain(u64);

    impl SeedChain for FixedChain {
        fn next_seed(&self, _: &Seed) -> Seed {
            Seed::from(self.0)
        }
    }

    /// Yields `seed + 1` and records every input
    #[derive(Default)]
    struct RecordingChain {
        inputs: RefCell<Vec<Seed>>,
    }

    impl SeedChain for RecordingChain {
        fn next_seed(&self, seed: &Seed) -> Seed {
            self.inputs.borrow_mut().push(seed.clone());
            let Ok(next) = Seed::try_from(seed.value() + 1_u32) else {
                unreachable!("test seeds stay small");
            };
            next
        }
    }

    /// Always yields a stored 256-bit seed
    struct WideChain(Seed);

    impl SeedChain for WideChain {
        fn next_seed(&self, _: &Seed) -> Seed {
            self.0.clone()
        }
    }

    fn pick(category: &TraitCategory, seed: u64) -> (&str, usize, bool) {
        let draw = select_trait(&FixedChain(seed), &Seed::from(0), category);
        (draw.value, draw.position, draw.fell_back)
    }

    fn scenario() -> TraitCategory {
        let Ok(category) = TraitCategory::new(
            "scenario",
            vec![
                TraitEntry::new("A", Weight::from(100)),
                TraitEntry::new("B", Weight::from(100)),
            ],
        ) else {
            unreachable!("scenario category is valid");
        };
        category
    }

    // Tests the first entry whose running total reaches the seed wins
    // Verified by comparing with a strict inequality
    #[test]
    fn test_cumulative_boundaries() {
        let category = scenario();

        assert_eq!(pick(&category, 0), ("A", 0, false));
        assert_eq!(pick(&category, 100), ("A", 0, false));
        assert_eq!(pick(&category, 101), ("B", 1, false));
        assert_eq!(pick(&category, 200), ("B", 1, false));
        assert_eq!(pick(&category, 201), ("B", 1, true));
    }

    // Tests the draw consumes the derived seed, not the input seed
    // Verified by comparing against the input seed
    #[test]
    fn test_draw_uses_derived_seed() {
        let category = scenario();
        let draw = select_trait(&FixedChain(150), &Seed::from(1), &category);
        assert_eq!(draw.value, "B");
        assert_eq!(draw.seed, Seed::from(150));
    }

    // Tests each draw feeds its seed into the next category
    // Verified by restarting every category from the item seed
    #[test]
    fn test_seed_threading() {
        let chain = RecordingChain::default();
        let categories = [scenario(), scenario(), scenario()];

        let draw = draw_item(&chain, Seed::from(7), &categories);

        assert_eq!(
            *chain.inputs.borrow(),
            [Seed::from(7), Seed::from(8), Seed::from(9)]
        );
        assert_eq!(draw.seed, Seed::from(10));
        assert_eq!(draw.attributes.values().collect::<Vec<_>>(), ["A", "A", "A"]);
        assert!(draw.fallbacks.is_empty());
    }

    // Tests fallbacks are reported per category
    // Verified by reporting fallbacks only for the first category
    #[test]
    fn test_fallbacks_reported() {
        let Ok(narrow) = TraitCategory::new("narrow", vec![TraitEntry::new("only", Weight::from(1))])
        else {
            unreachable!("narrow category is valid");
        };
        let categories = [scenario(), narrow];

        let draw = draw_item(&FixedChain(150), Seed::from(0), &categories);
        assert_eq!(draw.fallbacks, ["narrow"]);
        assert_eq!(draw.attributes.get("narrow"), Some("only"));
    }

    // Tests the first item of the built-in collection
    // Verified by seeding the chain with zero
    #[test]
    fn test_builtin_first_item() {
        let Ok(catalog) = weighted_collection() else {
            unreachable!("built-in collection is valid");
        };
        let draw = generate_item(&Keccak256Chain, 1, catalog.categories());

        assert_eq!(
            draw.attributes.values().collect::<Vec<_>>(),
            [
                "svgPaths/tennisNew.svg",
                "yellow",
                "lime",
                "lime",
                "brown",
                "0.3",
                "orange",
                "white",
                r#""start" x="5%" y="10%""#,
                "はさみ",
            ]
        );
        assert_eq!(
            draw.seed.to_hex(),
            "d409ce11fedbc3e77e4ba2d27b32fce8ba6fbcbd690a6a79068e03a2bd3e764f"
        );
        assert!(draw.fallbacks.is_empty());
    }

    // Tests the second item of the built-in collection
    // Verified by continuing from the first item's seed
    #[test]
    fn test_builtin_second_item() {
        let Ok(catalog) = weighted_collection() else {
            unreachable!("built-in collection is valid");
        };
        let draw = generate_item(&Keccak256Chain, 2, catalog.categories());

        assert_eq!(
            draw.attributes.values().collect::<Vec<_>>(),
            [
                "svgPaths/christine.svg",
                "black",
                "green",
                "orange",
                "black",
                "2",
                "blue",
                "blue",
                r#""start" x="5%" y="90%""#,
                "石",
            ]
        );
    }

    // Tests a seed above every cumulative total falls back
    // Verified by returning the first entry on fallback
    #[test]
    fn test_maximum_seed_fallback() {
        let Ok(fourteen) = TraitCategory::uniform("color", (0..14).map(|i| format!("c{i}"))) else {
            unreachable!("category is valid");
        };
        let Ok(max) = Seed::try_from((BigUint::from(1_u32) << 256_usize) - 1_u32) else {
            unreachable!("maximum seed fits");
        };

        let draw = select_trait(&WideChain(max), &Seed::from(0), &fourteen);
        assert_eq!(draw.value, "c13");
        assert!(draw.fell_back);
    }
}

//! Tests for exhaustive mixed-radix enumeration

#[cfg(test)]
mod tests {
    use traitloom::catalog::TraitCatalog;
    use traitloom::catalog::defaults::exhaustive_collection;
    use traitloom::sampling::enumeration::{combination_count, enumerate_item};

    fn catalog() -> TraitCatalog {
        let Ok(catalog) = exhaustive_collection() else {
            unreachable!("built-in collection is valid");
        };
        catalog
    }

    fn values(index: usize) -> Vec<String> {
        let Ok(attributes) = enumerate_item(index, catalog().categories()) else {
            unreachable!("index {index} is in range");
        };
        attributes.values().map(str::to_string).collect()
    }

    // Tests the last category varies fastest and the first slowest
    // Verified by reversing digit significance
    #[test]
    fn test_enumeration_order() {
        assert_eq!(values(1), ["svg/baby.svg", "white", "石"]);
        assert_eq!(values(2), ["svg/baby.svg", "white", "紙"]);
        assert_eq!(values(4), ["svg/baby.svg", "black", "石"]);
        assert_eq!(values(22), ["svg/tennisNew.svg", "white", "石"]);
        assert_eq!(values(147), ["svg/alice.svg", "green", "はさみ"]);
    }

    // Tests indices outside the combination range are rejected
    // Verified by wrapping indices past the end
    #[test]
    fn test_out_of_range() {
        let catalog = catalog();
        assert!(enumerate_item(0, catalog.categories()).is_err());
        assert!(enumerate_item(148, catalog.categories()).is_err());
    }

    // Tests every combination appears exactly once
    // Verified by skipping the first digit
    #[test]
    fn test_enumeration_is_exhaustive() {
        let catalog = catalog();
        let Some(total) = combination_count(catalog.categories()) else {
            unreachable!("combination count fits");
        };

        let mut keys: Vec<String> = (1..=total)
            .filter_map(|index| enumerate_item(index, catalog.categories()).ok())
            .map(|attributes| attributes.key())
            .collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 147);
    }

    // Tests combination counting
    // Verified by summing sizes instead of multiplying
    #[test]
    fn test_combination_count() {
        assert_eq!(combination_count(&[]), Some(1));
        assert_eq!(combination_count(catalog().categories()), Some(147));
    }
}

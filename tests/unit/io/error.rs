//! Tests for error display and sources

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::io::ErrorKind;
    use std::path::PathBuf;
    use traitloom::GenerationError;
    use traitloom::io::error::{invalid_catalog, invalid_parameter};

    // Tests collision messages name both items and the key
    // Verified by omitting the first index
    #[test]
    fn test_collision_display() {
        let error = GenerationError::DuplicateTraitCombination {
            index: 7,
            first_index: 3,
            key: "redblue".to_string(),
        };
        let message = error.to_string();

        assert!(message.contains("item 7"));
        assert!(message.contains("item 3"));
        assert!(message.contains("'redblue'"));
        assert!(error.source().is_none());
    }

    // Tests wrapped I/O errors are exposed as sources
    // Verified by returning None for every variant
    #[test]
    fn test_error_sources() {
        let error = GenerationError::MissingTemplateFragment {
            name: "svg/alice.svg".to_string(),
            source: std::io::Error::new(ErrorKind::NotFound, "gone"),
        };
        assert!(error.to_string().contains("svg/alice.svg"));
        assert!(error.source().is_some());

        let converted = GenerationError::from(std::io::Error::other("boom"));
        assert!(matches!(converted, GenerationError::FileSystem { .. }));
        assert!(converted.source().is_some());
    }

    // Tests helper constructors fill every field
    // Verified by dropping the reason
    #[test]
    fn test_helper_constructors() {
        let GenerationError::InvalidParameter {
            parameter,
            value,
            reason,
        } = invalid_parameter("count", &0, &"must be positive")
        else {
            unreachable!("helper builds InvalidParameter");
        };
        assert_eq!(parameter, "count");
        assert_eq!(value, "0");
        assert_eq!(reason, "must be positive");

        let error = invalid_catalog(&"no categories");
        assert_eq!(error.to_string(), "Invalid catalog: no categories");

        let load = GenerationError::CatalogLoad {
            path: PathBuf::from("c.toml"),
            reason: "bad".to_string(),
        };
        assert_eq!(load.to_string(), "Failed to load catalog 'c.toml': bad");
    }
}

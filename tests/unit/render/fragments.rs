//! Tests for fragment lookup

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use traitloom::GenerationError;
    use traitloom::render::fragments::{DirectoryFragments, FragmentSource, MemoryFragments};

    // Tests fragments resolve relative to the root directory
    // Verified by resolving against the working directory
    #[test]
    fn test_directory_fragments() {
        let Ok(dir) = TempDir::new() else {
            unreachable!("temporary directory can be created");
        };
        let Ok(()) = std::fs::create_dir_all(dir.path().join("svg")) else {
            unreachable!("fixture directory can be created");
        };
        let Ok(()) = std::fs::write(dir.path().join("svg/baby.svg"), "<path d=\"M0 0\"/>") else {
            unreachable!("fixture file can be written");
        };

        let mut fragments = DirectoryFragments::new(dir.path());
        assert_eq!(fragments.root(), dir.path());
        assert!(matches!(fragments.fetch("svg/baby.svg"), Ok("<path d=\"M0 0\"/>")));
    }

    // Tests fragments are read once per run
    // Verified by bypassing the cache
    #[test]
    fn test_directory_fragments_cached() {
        let Ok(dir) = TempDir::new() else {
            unreachable!("temporary directory can be created");
        };
        let path = dir.path().join("a.svg");
        let Ok(()) = std::fs::write(&path, "<g/>") else {
            unreachable!("fixture file can be written");
        };

        let mut fragments = DirectoryFragments::new(dir.path());
        assert!(fragments.fetch("a.svg").is_ok());
        let Ok(()) = std::fs::remove_file(&path) else {
            unreachable!("fixture file can be removed");
        };
        assert!(matches!(fragments.fetch("a.svg"), Ok("<g/>")));
    }

    // Tests unreadable fragments report their name
    // Verified by reporting the resolved path instead
    #[test]
    fn test_missing_directory_fragment() {
        let Ok(dir) = TempDir::new() else {
            unreachable!("temporary directory can be created");
        };
        let mut fragments = DirectoryFragments::new(dir.path());

        let Err(GenerationError::MissingTemplateFragment { name, .. }) =
            fragments.fetch("svg/none.svg")
        else {
            unreachable!("missing fragment must fail");
        };
        assert_eq!(name, "svg/none.svg");
    }

    // Tests in-memory fragments
    // Verified by returning an empty fragment for unknown names
    #[test]
    fn test_memory_fragments() {
        let mut fragments = MemoryFragments::new().with("a", "<a/>").with("b", "<b/>");
        assert!(matches!(fragments.fetch("b"), Ok("<b/>")));
        assert!(matches!(
            fragments.fetch("c"),
            Err(GenerationError::MissingTemplateFragment { .. })
        ));
    }
}

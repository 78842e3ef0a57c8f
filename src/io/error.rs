//! Error types for catalog loading, generation runs and document output

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// Two items produced the same full attribute combination
    ///
    /// Aborts the run: output numbering must stay gapless, so the item is
    /// never skipped or redrawn.
    DuplicateTraitCombination {
        /// Item whose combination collided
        index: usize,
        /// Earlier item that produced the same combination
        first_index: usize,
        /// Concatenated attribute key shared by both items
        key: String,
    },

    /// A named template fragment could not be read
    MissingTemplateFragment {
        /// Fragment name as it appears in the catalog
        name: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Catalog contents don't meet generation requirements
    InvalidCatalog {
        /// Description of what's wrong with the catalog
        reason: String,
    },

    /// Catalog file could not be read or parsed
    CatalogLoad {
        /// Path of the catalog file
        path: PathBuf,
        /// Description of the failure
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateTraitCombination {
                index,
                first_index,
                key,
            } => {
                write!(
                    f,
                    "Collision detected: item {index} repeats the combination of item {first_index} ('{key}')"
                )
            }
            Self::MissingTemplateFragment { name, source } => {
                write!(f, "Missing template fragment '{name}': {source}")
            }
            Self::InvalidCatalog { reason } => {
                write!(f, "Invalid catalog: {reason}")
            }
            Self::CatalogLoad { path, reason } => {
                write!(f, "Failed to load catalog '{}': {reason}", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingTemplateFragment { source, .. } | Self::FileSystem { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

impl From<std::io::Error> for GenerationError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid catalog error
pub fn invalid_catalog(reason: &impl ToString) -> GenerationError {
    GenerationError::InvalidCatalog {
        reason: reason.to_string(),
    }
}

/// Attach a path and operation to an I/O error
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> GenerationError {
    let path = path.into();
    move |source| GenerationError::FileSystem {
        path,
        operation,
        source,
    }
}

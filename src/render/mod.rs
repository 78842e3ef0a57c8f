//! Document templates filled from generated attributes

/// Named fragment lookup
pub mod fragments;
/// HTML page wrapping a data-URI image
pub mod html;
/// Animated SVG document
pub mod svg;

use crate::io::error::{Result, invalid_catalog};
use crate::sampling::GeneratedItem;
use fragments::FragmentSource;

pub use fragments::{DirectoryFragments, MemoryFragments};
pub use html::HtmlTemplate;
pub use svg::SvgTemplate;

/// Turns a generated item into a document
pub trait Template {
    /// File extension of rendered documents, without the dot
    fn extension(&self) -> &'static str;

    /// Render the document for `item`
    ///
    /// # Errors
    ///
    /// Returns an error if a fragment is missing or the item lacks a
    /// category the template reads
    fn render(&self, item: &GeneratedItem, fragments: &mut dyn FragmentSource) -> Result<String>;
}

/// Value of a category the template depends on
fn required<'a>(item: &'a GeneratedItem, category: &str) -> Result<&'a str> {
    item.attributes.get(category).ok_or_else(|| {
        invalid_catalog(&format!(
            "item {} has no value for category '{category}'",
            item.index
        ))
    })
}

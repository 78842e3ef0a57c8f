//! HTML page showing the image fragment as an embedded data URI

use crate::catalog::TraitCatalog;
use crate::catalog::defaults::{BACKGROUND_COLOR, IMAGE, TEXT};
use crate::io::configuration::HTML_EXTENSION;
use crate::io::error::Result;
use crate::render::fragments::FragmentSource;
use crate::render::{Template, required};
use crate::sampling::GeneratedItem;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Categories every HTML page reads
pub const HTML_CATEGORIES: [&str; 3] = [IMAGE, BACKGROUND_COLOR, TEXT];

/// `data:` URI carrying an SVG document
pub fn svg_data_uri(svg: &str) -> String {
    format!(
        "data:image/svg+xml;charset=utf-8;base64,{}",
        STANDARD.encode(svg.as_bytes())
    )
}

/// Page with a colored background, the image as an `<object>`, and the text
/// exposed as a meta property
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlTemplate;

impl HtmlTemplate {
    /// Build the template for a catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog lacks a category the page reads
    pub fn for_catalog(catalog: &TraitCatalog) -> Result<Self> {
        catalog.require_categories(&HTML_CATEGORIES)?;
        Ok(Self)
    }
}

impl Template for HtmlTemplate {
    fn extension(&self) -> &'static str {
        HTML_EXTENSION
    }

    fn render(&self, item: &GeneratedItem, fragments: &mut dyn FragmentSource) -> Result<String> {
        let image = required(item, IMAGE)?;
        let background = required(item, BACKGROUND_COLOR)?;
        let text = required(item, TEXT)?;
        let data_uri = svg_data_uri(fragments.fetch(image)?);
        let index = item.index;

        Ok(format!(
            r#"<!DOCTYPE html>
<html>
<head>
  <title>Page {index}</title>
  <meta property="text" content="{text}">
</head>
<body style="background-color: {background};">
  <object data="{data_uri}" type="image/svg+xml" id="svg232" style="overflow: hidden; width: 900px; height: 800px; object-fit: contain;">
  </object>
</body>
</html>"#
        ))
    }
}

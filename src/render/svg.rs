use crate::catalog::defaults::{
    BACKGROUND_COLOR, BASE_FILL_COLOR, FINAL_SHADOW_COLOR, GLOW_TIME, HOVER_COLOR, IMAGE,
    INITIAL_SHADOW_COLOR, TEXT, TEXT_LOCATION, YAK_FILL_COLOR,
};
use crate::catalog::{ImageMetadata, TraitCatalog};
use crate::io::configuration::SVG_EXTENSION;
use crate::io::error::{Result, invalid_catalog};
use crate::render::fragments::FragmentSource;
use crate::render::{Template, required};
use crate::sampling::GeneratedItem;
use std::collections::BTreeMap;

/// Categories every SVG document reads
pub const SVG_CATEGORIES: [&str; 10] = [
    IMAGE,
    BACKGROUND_COLOR,
    INITIAL_SHADOW_COLOR,
    FINAL_SHADOW_COLOR,
    BASE_FILL_COLOR,
    GLOW_TIME,
    YAK_FILL_COLOR,
    HOVER_COLOR,
    TEXT_LOCATION,
    TEXT,
];

/// Glowing SVG document embedding the image fragment with overlaid text
///
/// Paths pulse between the two shadow colors; `.yak` elements get their own
/// fill and hover fill.
#[derive(Debug, Clone)]
pub struct SvgTemplate {
    images: BTreeMap<String, ImageMetadata>,
}

impl SvgTemplate {
    /// Build the template for a catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog lacks a category the document reads
    /// or an image value has no layout metadata
    pub fn for_catalog(catalog: &TraitCatalog) -> Result<Self> {
        catalog.require_categories(&SVG_CATEGORIES)?;
        catalog.require_image_metadata(IMAGE)?;
        Ok(Self {
            images: catalog.images().clone(),
        })
    }
}

impl Template for SvgTemplate {
    fn extension(&self) -> &'static str {
        SVG_EXTENSION
    }

    fn render(&self, item: &GeneratedItem, fragments: &mut dyn FragmentSource) -> Result<String> {
        let image = required(item, IMAGE)?;
        let layout = self
            .images
            .get(image)
            .ok_or_else(|| invalid_catalog(&format!("image '{image}' has no layout metadata")))?;

        let background = required(item, BACKGROUND_COLOR)?;
        let initial_shadow = required(item, INITIAL_SHADOW_COLOR)?;
        let final_shadow = required(item, FINAL_SHADOW_COLOR)?;
        let base_fill = required(item, BASE_FILL_COLOR)?;
        let glow_time = required(item, GLOW_TIME)?;
        let yak_fill = required(item, YAK_FILL_COLOR)?;
        let hover = required(item, HOVER_COLOR)?;
        let text_location = required(item, TEXT_LOCATION)?;
        let text = required(item, TEXT)?;
        let fragment = fragments.fetch(image)?;

        Ok(format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" preserveAspectRatio="xMidYMid meet" viewBox="{view_box}" style="background-color:{background}">
    <style>
        @keyframes glow {{
            0% {{
                filter: drop-shadow(16px 16px 20px {initial_shadow}) brightness(100%);
            }}

            to {{
                filter: drop-shadow(16px 16px 20px {final_shadow}) brightness(200%);
            }}
        }}

        path {{
            fill: {base_fill};
            animation: glow {glow_time}s ease-in-out infinite alternate
        }}

        .yak {{
            fill: {yak_fill};
        }}

        .yak:hover {{
            fill: {hover};
        }}
    </style>
    {fragment}
    <text text-anchor={text_location} font-family="Helvetica" font-size="{font_size}" fill="white">{text}</text>
</svg>"#,
            view_box = layout.view_box,
            font_size = layout.font_size,
        ))
    }
}

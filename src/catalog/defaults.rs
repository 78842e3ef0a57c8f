//! Built-in collections used when no catalog file is supplied

use crate::catalog::category::{ImageMetadata, TraitCatalog, TraitCategory};
use crate::io::error::Result;

// Category names the document templates read
/// Image fragment embedded in every document
pub const IMAGE: &str = "image";
/// Document background color
pub const BACKGROUND_COLOR: &str = "background_color";
/// Drop-shadow color at the start of the glow animation
pub const INITIAL_SHADOW_COLOR: &str = "initial_shadow_color";
/// Drop-shadow color at the end of the glow animation
pub const FINAL_SHADOW_COLOR: &str = "final_shadow_color";
/// Fill applied to every path
pub const BASE_FILL_COLOR: &str = "base_fill_color";
/// Glow animation duration in seconds
pub const GLOW_TIME: &str = "glow_time";
/// Fill applied to `.yak` elements
pub const YAK_FILL_COLOR: &str = "yak_fill_color";
/// Fill applied to `.yak` elements on hover
pub const HOVER_COLOR: &str = "hover_color";
/// Anchor and position attributes of the overlaid text
pub const TEXT_LOCATION: &str = "text_location";
/// Overlaid text
pub const TEXT: &str = "text";

const PALETTE: [&str; 14] = [
    "brown",
    "black",
    "aquamarine",
    "purple",
    "orange",
    "white",
    "lime",
    "red",
    "blue",
    "yellow",
    "green",
    "pink",
    "coral",
    "lavender",
];

const TEXTS: [&str; 3] = ["石", "紙", "はさみ"];

/// The weighted SVG collection
///
/// Draw order matters for reproducing existing outputs: each category
/// consumes one link of the hash chain in the order listed here.
///
/// # Errors
///
/// Returns an error only if the built-in tables are inconsistent
pub fn weighted_collection() -> Result<TraitCatalog> {
    let images = [
        ("svgPaths/ami.svg", "0 0 300 500", "36"),
        ("svgPaths/christine.svg", "0 0 500 470", "36"),
        ("svgPaths/takechi.svg", "0 0 700 800", "60"),
        ("svgPaths/tennisNew.svg", "0 0 400 370", "14"),
        ("svgPaths/yak2.svg", "0 0 230 300", "20"),
    ];

    let categories = vec![
        TraitCategory::uniform(IMAGE, images.iter().map(|(path, _, _)| *path))?,
        TraitCategory::uniform(BACKGROUND_COLOR, PALETTE)?,
        TraitCategory::uniform(INITIAL_SHADOW_COLOR, PALETTE)?,
        TraitCategory::uniform(FINAL_SHADOW_COLOR, PALETTE)?,
        TraitCategory::uniform(BASE_FILL_COLOR, PALETTE)?,
        TraitCategory::uniform(GLOW_TIME, ["0.3", "2", "9"])?,
        TraitCategory::uniform(YAK_FILL_COLOR, PALETTE)?,
        TraitCategory::uniform(HOVER_COLOR, PALETTE)?,
        TraitCategory::uniform(
            TEXT_LOCATION,
            [
                r#""start" x="5%" y="10%""#,
                r#""end" x="95%" y="90%""#,
                r#""end" x="95%" y="10%""#,
                r#""start" x="5%" y="90%""#,
            ],
        )?,
        TraitCategory::uniform(TEXT, TEXTS)?,
    ];

    let catalog = TraitCatalog::new(categories)?;
    Ok(images
        .into_iter()
        .fold(catalog, |catalog, (path, view_box, font_size)| {
            catalog.with_image(path, ImageMetadata::new(view_box, font_size))
        }))
}

/// The exhaustive HTML collection
///
/// Weights are irrelevant here; every combination is produced once, with
/// the image varying slowest and the text fastest.
///
/// # Errors
///
/// Returns an error only if the built-in tables are inconsistent
pub fn exhaustive_collection() -> Result<TraitCatalog> {
    TraitCatalog::new(vec![
        TraitCategory::uniform(
            IMAGE,
            [
                "svg/baby.svg",
                "svg/tennisNew.svg",
                "svg/tennis2.svg",
                "svg/yakyuken.svg",
                "svg/takechi.svg",
                "svg/christine.svg",
                "svg/alice.svg",
            ],
        )?,
        TraitCategory::uniform(
            BACKGROUND_COLOR,
            [
                "white",
                "black",
                "aquamarine",
                "red",
                "blue",
                "yellow",
                "green",
            ],
        )?,
        TraitCategory::uniform(TEXT, TEXTS)?,
    ])
}

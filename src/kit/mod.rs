//! Kit payloads: the structured alternative to raw CSS.
//!
//! A kit is a versioned remote description of a design system: named
//! colors, typography for a handful of text roles, and optionally
//! per-layer property overrides. This module deserializes the payload
//! ([`KitPayload`]) and normalizes it into document style objects and
//! canonical rules ([`normalize`]).

mod normalize;
mod payload;

pub use normalize::{create_paint_styles, create_text_styles, layer_rules, typography_for_role};
pub use payload::{
    KitColor, KitColorValue, KitFont, KitLayer, KitLineHeight, KitPayload, KitScalar,
    KitTypography,
};

/// Derives the kit identifier from a style-source URL: the final path
/// segment with a trailing `.css` stripped.
///
/// # Example
///
/// ```rust
/// use stylecast::kit::kit_id;
///
/// assert_eq!(kit_id("https://kits.example.com/acme/brand.css"), "brand");
/// assert_eq!(kit_id("https://kits.example.com/acme/brand"), "brand");
/// ```
pub fn kit_id(url: &str) -> &str {
    let segment = url.rsplit('/').next().unwrap_or(url);
    segment.strip_suffix(".css").unwrap_or(segment)
}

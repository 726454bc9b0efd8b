//! Per-property application.
//!
//! Known property mappings live in a registry so new mappings can be
//! added in one place; everything else flows to the caller's fallback
//! (annotation or silence). A node that lacks the capability for a
//! mapped property is skipped, never an error.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::color::{InvalidColorFormat, Rgb};
use crate::document::{LineHeight, LineHeightUnit, Node, Paint, TypographyStyle};
use crate::rules::{PropertyMap, PropertyValue};

type DirectApplier = fn(&mut Node, &PropertyValue) -> Result<(), InvalidColorFormat>;

static DIRECT_APPLIERS: Lazy<HashMap<&'static str, DirectApplier>> = Lazy::new(|| {
    let mut registry: HashMap<&'static str, DirectApplier> = HashMap::new();
    registry.insert("background-color", apply_background_color);
    registry.insert("font-size", apply_font_size);
    registry
});

/// Applies one property directly if a mapping exists.
///
/// Returns `true` when the property name is mapped (whether or not the
/// node had the capability), `false` when it is unmapped and the caller
/// should fall back.
pub fn apply_direct(
    node: &mut Node,
    property: &str,
    value: &PropertyValue,
) -> Result<bool, InvalidColorFormat> {
    match DIRECT_APPLIERS.get(property) {
        Some(applier) => {
            applier(node, value)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

fn apply_background_color(node: &mut Node, value: &PropertyValue) -> Result<(), InvalidColorFormat> {
    let Some(fills) = node.fills_mut() else {
        return Ok(());
    };
    let color = Rgb::from_hex(&value.to_string())?;
    *fills = vec![Paint::Solid { color }];
    Ok(())
}

fn apply_font_size(node: &mut Node, value: &PropertyValue) -> Result<(), InvalidColorFormat> {
    if let Some(size) = integer_prefix(value) {
        node.set_font_size(size);
    }
    Ok(())
}

/// Reads a value as an integer, taking the leading digits of a text
/// value (`"14px"` → 14) and truncating a numeric one. Unparsable text
/// yields `None` and the property is skipped.
fn integer_prefix(value: &PropertyValue) -> Option<f64> {
    match value {
        PropertyValue::Number(n) => Some(n.trunc()),
        PropertyValue::Text(text) => {
            let text = text.trim();
            let (sign, digits) = match text.strip_prefix('-') {
                Some(rest) => (-1.0, rest),
                None => (1.0, text),
            };
            let prefix: String = digits.chars().take_while(|c| c.is_ascii_digit()).collect();
            prefix.parse::<f64>().ok().map(|n| sign * n)
        }
    }
}

/// Assembles a cohesive typography style from a property map.
///
/// Emitted only when `font-family` and `font-size` are both present;
/// `line-height` is optional (`"32px"` → pixels, anything else,
/// including bare numbers, → percent).
pub fn typography_from_props(props: &PropertyMap) -> Option<TypographyStyle> {
    let family = props.get("font-family")?.as_text()?.to_string();
    let size = integer_prefix(props.get("font-size")?)?;

    let line_height = props.get("line-height").and_then(|value| {
        let unit = match value.as_text() {
            Some(text) if text.trim().ends_with("px") => LineHeightUnit::Pixels,
            _ => LineHeightUnit::Percent,
        };
        integer_prefix(value).map(|v| LineHeight { value: v, unit })
    });

    Some(TypographyStyle {
        family,
        size,
        line_height,
    })
}

/// Property names consumed by a cohesive typography application.
pub(crate) const TYPOGRAPHY_PROPS: &[&str] = &["font-family", "font-size", "line-height"];

//! Normalization of a kit payload into document styles and rules.

use log::{debug, warn};

use crate::color::{InvalidColorFormat, Rgb};
use crate::document::{Document, LineHeight, LineHeightUnit, TypographyStyle};
use crate::host::{FontError, FontLoader};
use crate::rules::{PropertyValue, RuleSet};

use super::payload::{KitPayload, KitTypography};

/// Creates one named paint style per kit color.
///
/// Name collisions keep the first occurrence; a malformed hex value
/// fails the whole step with [`InvalidColorFormat`].
pub fn create_paint_styles(doc: &mut Document, kit: &KitPayload) -> Result<(), InvalidColorFormat> {
    for color in &kit.colors {
        let rgb = Rgb::from_hex(&color.value.hex_value)?;
        doc.create_paint_style(&color.name, rgb);
    }
    debug!("created {} paint styles from kit colors", kit.colors.len());
    Ok(())
}

/// Extracts a cohesive typography style from one role block.
///
/// Returns `None` unless both family and size are present; a missing
/// line height is tolerated. The unit string `"px"` maps to pixels,
/// anything else to percent.
pub fn typography_for_role(block: &KitTypography) -> Option<TypographyStyle> {
    let font = block.font.as_ref()?;
    let family = font.family.as_ref()?;
    let size = font.size.as_ref()?;

    let line_height = font.line_height.as_ref().map(|lh| LineHeight {
        value: lh.value,
        unit: match lh.unit.as_deref() {
            Some("px") => LineHeightUnit::Pixels,
            _ => LineHeightUnit::Percent,
        },
    });

    Some(TypographyStyle {
        family: family.clone(),
        size: size.value,
        line_height,
    })
}

/// Creates one named text style per typography role in the kit.
///
/// The style is named `"{role}-{family}"`. Each role's font family is
/// loaded through the host before the style's numeric attributes are
/// set; a role with a missing family or size is skipped without error.
pub fn create_text_styles(
    doc: &mut Document,
    fonts: &dyn FontLoader,
    kit: &KitPayload,
) -> Result<(), FontError> {
    let roles: [(&str, Option<&KitTypography>); 4] = [
        ("heading", kit.headings.as_ref()),
        ("paragraph", kit.paragraphs.as_ref()),
        ("button", kit.buttons.as_ref()),
        ("input", kit.inputs.as_ref()),
    ];

    for (role, block) in roles {
        let Some(block) = block else { continue };
        let Some(typography) = typography_for_role(block) else {
            warn!("kit typography for role '{}' is incomplete, skipping", role);
            continue;
        };

        fonts.load(&typography.family, "Regular")?;
        let name = format!("{}-{}", role, typography.family);
        doc.create_text_style(&name, typography);
    }
    Ok(())
}

/// Builds the name-keyed rule set from the kit's per-layer overrides.
///
/// JSON strings become text values, numbers become numeric values, and
/// anything else is stringified so nothing from the remote source is
/// lost.
pub fn layer_rules(kit: &KitPayload) -> RuleSet {
    let mut rules = RuleSet::new();
    for layer in &kit.layers {
        for (property, value) in &layer.properties {
            let value = match value {
                serde_json::Value::String(text) => PropertyValue::Text(text.clone()),
                serde_json::Value::Number(n) => match n.as_f64() {
                    Some(n) => PropertyValue::Number(n),
                    None => PropertyValue::Text(n.to_string()),
                },
                other => PropertyValue::Text(other.to_string()),
            };
            rules.set(&layer.name, property, value);
        }
    }
    rules
}

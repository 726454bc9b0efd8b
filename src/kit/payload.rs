//! Wire shape of the kit-service response.
//!
//! Every section is optional: partial kits are expected and never an
//! error. Field names mirror the service's camelCase JSON.

use std::collections::HashMap;

use serde::Deserialize;

/// The full kit payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KitPayload {
    #[serde(default)]
    pub colors: Vec<KitColor>,
    pub headings: Option<KitTypography>,
    pub paragraphs: Option<KitTypography>,
    pub buttons: Option<KitTypography>,
    pub inputs: Option<KitTypography>,
    /// Per-layer property overrides, keyed by layer name.
    #[serde(default)]
    pub layers: Vec<KitLayer>,
}

/// A named color entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KitColor {
    pub name: String,
    pub value: KitColorValue,
}

/// The color value wrapper carrying the hex string.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KitColorValue {
    pub hex_value: String,
}

/// Typography for one text role.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KitTypography {
    pub font: Option<KitFont>,
}

/// Font attributes inside a typography block. Any field may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KitFont {
    pub family: Option<String>,
    pub size: Option<KitScalar>,
    pub line_height: Option<KitLineHeight>,
}

/// A wrapped numeric value.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KitScalar {
    pub value: f64,
}

/// A line-height value with its unit string (`"px"` or a percent form).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KitLineHeight {
    pub value: f64,
    pub unit: Option<String>,
}

/// Property overrides for one named layer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KitLayer {
    pub name: String,
    #[serde(default)]
    pub properties: HashMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_payload() {
        let json = r##"{
            "colors": [{"name": "Primary", "value": {"hexValue": "#112233"}}],
            "headings": {
                "font": {
                    "family": "Inter",
                    "size": {"value": 24},
                    "lineHeight": {"value": 120, "unit": "percent"}
                }
            },
            "layers": [{"name": "Hero", "properties": {"background-color": "#ff0000"}}]
        }"##;

        let kit: KitPayload = serde_json::from_str(json).unwrap();
        assert_eq!(kit.colors.len(), 1);
        assert_eq!(kit.colors[0].value.hex_value, "#112233");

        let font = kit.headings.unwrap().font.unwrap();
        assert_eq!(font.family.as_deref(), Some("Inter"));
        assert_eq!(font.size.unwrap().value, 24.0);
        assert_eq!(font.line_height.unwrap().unit.as_deref(), Some("percent"));

        assert_eq!(kit.layers[0].name, "Hero");
        assert!(kit.paragraphs.is_none());
    }

    #[test]
    fn test_deserialize_empty_payload() {
        let kit: KitPayload = serde_json::from_str("{}").unwrap();
        assert!(kit.colors.is_empty());
        assert!(kit.headings.is_none());
        assert!(kit.layers.is_empty());
    }

    #[test]
    fn test_deserialize_partial_font_block() {
        let json = r#"{"buttons": {"font": {"family": "Roboto"}}}"#;
        let kit: KitPayload = serde_json::from_str(json).unwrap();
        let font = kit.buttons.unwrap().font.unwrap();
        assert_eq!(font.family.as_deref(), Some("Roboto"));
        assert!(font.size.is_none());
    }
}

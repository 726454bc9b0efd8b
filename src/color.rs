//! Hex color parsing and formatting.
//!
//! Both style-source parsers funnel color values through this codec, so
//! the normalized [`Rgb`] triple is the only color representation the
//! rest of the crate ever sees.

use thiserror::Error;

/// Error returned when a hex color string cannot be decoded.
///
/// Raised for anything that is not exactly six hex digits after an
/// optional leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex color '{0}': expected six hex digits with an optional leading '#'")]
pub struct InvalidColorFormat(pub String);

/// A color with each channel normalized to the `[0, 1]` range.
///
/// Produced only by [`Rgb::from_hex`]; design-node fills and paint
/// styles store this form directly.
///
/// # Example
///
/// ```rust
/// use stylecast::Rgb;
///
/// let red = Rgb::from_hex("#FF0000").unwrap();
/// assert_eq!(red, Rgb { r: 1.0, g: 0.0, b: 0.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    /// Decodes a six-digit hex color, with or without a leading `#`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidColorFormat`] when the remaining string is not
    /// exactly six hex digits.
    pub fn from_hex(hex: &str) -> Result<Self, InvalidColorFormat> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(InvalidColorFormat(hex.to_string()));
        }
        let packed =
            u32::from_str_radix(digits, 16).map_err(|_| InvalidColorFormat(hex.to_string()))?;

        let r = (packed >> 16) & 0xFF;
        let g = (packed >> 8) & 0xFF;
        let b = packed & 0xFF;
        Ok(Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        })
    }

    /// Encodes the color back to `#rrggbb` form.
    ///
    /// Inverse of [`Rgb::from_hex`] for every six-digit input.
    pub fn to_hex(&self) -> String {
        let quantize = |channel: f32| (channel * 255.0).round() as u32;
        format!(
            "#{:02x}{:02x}{:02x}",
            quantize(self.r),
            quantize(self.g),
            quantize(self.b)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_hex_primary_colors() {
        assert_eq!(
            Rgb::from_hex("#FF0000").unwrap(),
            Rgb { r: 1.0, g: 0.0, b: 0.0 }
        );
        assert_eq!(
            Rgb::from_hex("#00FF00").unwrap(),
            Rgb { r: 0.0, g: 1.0, b: 0.0 }
        );
        assert_eq!(
            Rgb::from_hex("#0000FF").unwrap(),
            Rgb { r: 0.0, g: 0.0, b: 1.0 }
        );
    }

    #[test]
    fn test_from_hex_without_hash() {
        let color = Rgb::from_hex("336699").unwrap();
        assert!((color.r - 0.2).abs() < 1e-6);
        assert!((color.g - 0.4).abs() < 1e-6);
        assert!((color.b - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_from_hex_rejects_short_form() {
        assert!(Rgb::from_hex("#abc").is_err());
    }

    #[test]
    fn test_from_hex_rejects_eight_digits() {
        assert!(Rgb::from_hex("#11223344").is_err());
    }

    #[test]
    fn test_from_hex_rejects_non_hex() {
        let err = Rgb::from_hex("#zzzzzz").unwrap_err();
        assert!(err.to_string().contains("zzzzzz"));
    }

    #[test]
    fn test_from_hex_rejects_empty() {
        assert!(Rgb::from_hex("").is_err());
        assert!(Rgb::from_hex("#").is_err());
    }

    #[test]
    fn test_to_hex_round_trip_known_value() {
        let color = Rgb::from_hex("#112233").unwrap();
        assert_eq!(color.to_hex(), "#112233");
    }

    proptest! {
        #[test]
        fn test_round_trip_all_24_bit_values(packed in 0u32..=0xFF_FF_FF) {
            let hex = format!("#{:06x}", packed);
            let color = Rgb::from_hex(&hex).unwrap();
            prop_assert_eq!(color.to_hex(), hex);
        }

        #[test]
        fn test_channels_stay_normalized(packed in 0u32..=0xFF_FF_FF) {
            let color = Rgb::from_hex(&format!("{:06x}", packed)).unwrap();
            for channel in [color.r, color.g, color.b] {
                prop_assert!((0.0..=1.0).contains(&channel));
            }
        }
    }
}

//! Theme settings served by the backend and applied by the dashboard.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Visual settings for the dashboard, served by `GET /api/theme`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ThemeSettings {
    /// Primary color as a `#RRGGBB` hex string.
    pub primary: String,
    /// Color variant name (e.g. "professional", "vibrant").
    pub variant: String,
    /// Light or dark appearance.
    pub appearance: String,
    /// Corner radius in rem.
    pub radius: f64,
    /// Base font size in px.
    pub font_size: u32,
    /// Heading font size in px.
    pub heading_size: u32,
    /// Font family stack.
    pub font_family: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            primary: "#3B82F6".to_string(),
            variant: "professional".to_string(),
            appearance: "light".to_string(),
            radius: 0.5,
            font_size: 16,
            heading_size: 24,
            font_family: "Inter, sans-serif".to_string(),
        }
    }
}

/// Failure to interpret a hex color string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("expected a #RRGGBB hex color, got {0:?}")]
    Malformed(String),
}

/// Convert a `#RRGGBB` hex color to the `"H S% L%"` triple used in CSS
/// custom properties.
///
/// Pure and deterministic: re-deriving from the same hex always yields the
/// same triple. Components are rounded to whole numbers.
///
/// # Errors
/// Returns [`ColorParseError::Malformed`] when the input is not a six-digit
/// hex color (a leading `#` is optional).
pub fn hex_to_hsl(hex: &str) -> Result<String, ColorParseError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorParseError::Malformed(hex.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| -> f64 {
        // Range is within bounds and hex-valid per the check above.
        f64::from(u8::from_str_radix(&digits[range], 16).unwrap_or(0)) / 255.0
    };
    let r = channel(0..2);
    let g = channel(2..4);
    let b = channel(4..6);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if (max - min).abs() < f64::EPSILON {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if (max - r).abs() < f64::EPSILON {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if (max - g).abs() < f64::EPSILON {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h * 60.0, s)
    };

    Ok(format!(
        "{} {}% {}%",
        h.round(),
        (s * 100.0).round(),
        (l * 100.0).round()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_blue_converts() {
        assert_eq!(hex_to_hsl("#3B82F6").unwrap(), "217 91% 60%");
    }

    #[test]
    fn conversion_is_idempotent() {
        let first = hex_to_hsl("#3B82F6").unwrap();
        let second = hex_to_hsl("#3B82F6").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn leading_hash_is_optional() {
        assert_eq!(hex_to_hsl("3B82F6").unwrap(), hex_to_hsl("#3B82F6").unwrap());
    }

    #[test]
    fn greys_have_zero_saturation() {
        assert_eq!(hex_to_hsl("#000000").unwrap(), "0 0% 0%");
        assert_eq!(hex_to_hsl("#FFFFFF").unwrap(), "0 0% 100%");
        assert_eq!(hex_to_hsl("#808080").unwrap(), "0 0% 50%");
    }

    #[test]
    fn primaries_map_to_expected_hues() {
        assert_eq!(hex_to_hsl("#FF0000").unwrap(), "0 100% 50%");
        assert_eq!(hex_to_hsl("#00FF00").unwrap(), "120 100% 50%");
        assert_eq!(hex_to_hsl("#0000FF").unwrap(), "240 100% 50%");
    }

    #[test]
    fn malformed_input_is_rejected() {
        for bad in ["", "#FFF", "#GGGGGG", "#3B82F", "not-a-color"] {
            assert!(hex_to_hsl(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn default_theme_uses_known_primary() {
        let theme = ThemeSettings::default();
        assert!(hex_to_hsl(&theme.primary).is_ok());
        assert_eq!(theme.appearance, "light");
    }
}

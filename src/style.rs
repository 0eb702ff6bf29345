use palette::Srgba;
use serde::Serialize;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};
use thiserror::Error;

/// Axis along which the dots are stacked.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    #[strum(serialize = "vertical", serialize = "v")]
    Vertical,
    #[strum(serialize = "horizontal", serialize = "h")]
    Horizontal,
}

/// Which way the stack moves as the index grows.
///
/// `Natural` is top to bottom for vertical indicators and left to right for
/// horizontal ones; `Reversed` flips both.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    #[default]
    #[strum(serialize = "natural", serialize = "nat")]
    Natural,
    #[strum(serialize = "reversed", serialize = "rev")]
    Reversed,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaintParseError {
    #[error("empty paint")]
    Empty,
    #[error("unknown paint '{0}'")]
    Unknown(String),
    #[error("invalid hex color '{0}'")]
    InvalidHex(String),
    #[error("invalid opacity '{0}'")]
    InvalidOpacity(String),
}

/// A color reference, resolved against the active theme when drawn.
#[derive(Debug, Clone, Copy, PartialEq, SerializeDisplay, DeserializeFromStr)]
pub enum Paint {
    Rgba(Srgba<f64>),
    /// Theme foreground at the given opacity.
    Primary(f64),
    /// Dimmed theme foreground at the given opacity.
    Secondary(f64),
    /// Translucent theme background.
    Material(f64),
    Clear,
}

impl Paint {
    pub const PRIMARY: Paint = Paint::Primary(1.0);

    pub fn white(opacity: f64) -> Self {
        Self::Rgba(Srgba::new(1.0, 1.0, 1.0, opacity))
    }

    pub fn black(opacity: f64) -> Self {
        Self::Rgba(Srgba::new(0.0, 0.0, 0.0, opacity))
    }

    fn parse_hex(s: &str) -> Result<Self, PaintParseError> {
        let digits = s.trim_start_matches('#');
        let invalid = || PaintParseError::InvalidHex(s.to_string());
        if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
            return Err(invalid());
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map(|v| v as f64 / 255.0)
                .map_err(|_| invalid())
        };
        let alpha = if digits.len() == 8 { channel(6)? } else { 1.0 };

        Ok(Self::Rgba(Srgba::new(
            channel(0)?,
            channel(2)?,
            channel(4)?,
            alpha,
        )))
    }
}

impl FromStr for Paint {
    type Err = PaintParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PaintParseError::Empty);
        }
        if s.starts_with('#') {
            return Self::parse_hex(s);
        }

        let (name, opacity) = match s.split_once('@') {
            Some((name, opacity)) => {
                let value: f64 = opacity
                    .trim()
                    .parse()
                    .map_err(|_| PaintParseError::InvalidOpacity(opacity.to_string()))?;
                if !value.is_finite() {
                    return Err(PaintParseError::InvalidOpacity(opacity.to_string()));
                }
                (name.trim(), value.clamp(0.0, 1.0))
            }
            None => (s, 1.0),
        };

        match name.to_ascii_lowercase().as_str() {
            "primary" => Ok(Self::Primary(opacity)),
            "secondary" => Ok(Self::Secondary(opacity)),
            "material" => Ok(Self::Material(opacity)),
            "white" => Ok(Self::white(opacity)),
            "black" => Ok(Self::black(opacity)),
            "clear" => Ok(Self::Clear),
            _ => Err(PaintParseError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgba(c) => {
                let (r, g, b, a) = c.into_format::<u8, u8>().into_components();
                write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
            }
            Self::Primary(o) => write!(f, "primary@{o}"),
            Self::Secondary(o) => write!(f, "secondary@{o}"),
            Self::Material(o) => write!(f, "material@{o}"),
            Self::Clear => f.write_str("clear"),
        }
    }
}

/// Visual and layout parameters of a dot page indicator.
///
/// Built once and never mutated; a different look means a different value.
/// Nothing is validated: negative spacing or zero visible dots produce a
/// degenerate layout, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    pub orientation: Orientation,
    pub scroll_direction: ScrollDirection,
    pub dot_spacing: f64,
    pub dot_size: f64,
    pub visible_dots: u32,
    /// Cross-axis size of the viewport.
    pub indicator_width: f64,
    pub vertical_padding: f64,
    pub horizontal_padding: f64,
    pub background_corner_radius: f64,
    pub background_color: Paint,
    pub selected_dot_color: Paint,
    /// Unselected dots whose item has content.
    pub active_dot_color: Paint,
    /// Unselected dots whose item has no content.
    pub inactive_dot_color: Paint,
    pub selected_dot_scale: f64,
    pub normal_dot_scale: f64,
    pub selected_dot_opacity: f64,
    pub normal_dot_opacity: f64,
    /// Spring response in seconds, for hosts that animate transitions.
    pub animation_response: f64,
    pub animation_damping_fraction: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            scroll_direction: ScrollDirection::Natural,
            dot_spacing: 12.0,
            dot_size: 6.0,
            visible_dots: 7,
            indicator_width: 20.0,
            vertical_padding: 8.0,
            horizontal_padding: 4.0,
            background_corner_radius: 20.0,
            background_color: Paint::Material(0.9),
            selected_dot_color: Paint::PRIMARY,
            active_dot_color: Paint::Primary(0.4),
            inactive_dot_color: Paint::Secondary(0.2),
            selected_dot_scale: 1.4,
            normal_dot_scale: 0.8,
            selected_dot_opacity: 1.0,
            normal_dot_opacity: 0.2,
            animation_response: 0.3,
            animation_damping_fraction: 0.8,
        }
    }
}

impl StyleConfig {
    /// Tighter padding on a transparent background.
    pub fn minimal() -> Self {
        Self {
            vertical_padding: 4.0,
            horizontal_padding: 2.0,
            background_corner_radius: 10.0,
            background_color: Paint::Clear,
            ..Self::default()
        }
    }

    /// White dots on a dark translucent background.
    pub fn dark() -> Self {
        Self {
            background_color: Paint::black(0.6),
            selected_dot_color: Paint::white(1.0),
            active_dot_color: Paint::white(0.6),
            inactive_dot_color: Paint::white(0.3),
            ..Self::default()
        }
    }

    pub fn with_orientation(self, orientation: Orientation) -> Self {
        Self {
            orientation,
            ..self
        }
    }

    pub fn with_scroll_direction(self, scroll_direction: ScrollDirection) -> Self {
        Self {
            scroll_direction,
            ..self
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    #[default]
    #[strum(serialize = "default")]
    Default,
    #[strum(serialize = "minimal")]
    Minimal,
    #[strum(serialize = "dark")]
    Dark,
}

impl Preset {
    pub fn style(&self) -> StyleConfig {
        match self {
            Self::Default => StyleConfig::default(),
            Self::Minimal => StyleConfig::minimal(),
            Self::Dark => StyleConfig::dark(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_values() {
        let style = StyleConfig::default();
        assert_eq!(style.orientation, Orientation::Vertical);
        assert_eq!(style.scroll_direction, ScrollDirection::Natural);
        assert_eq!(style.dot_spacing, 12.0);
        assert_eq!(style.dot_size, 6.0);
        assert_eq!(style.visible_dots, 7);
        assert_eq!(style.indicator_width, 20.0);
        assert_eq!(style.selected_dot_scale, 1.4);
        assert_eq!(style.normal_dot_opacity, 0.2);
        assert_eq!(style.active_dot_color, Paint::Primary(0.4));
        assert_eq!(style.inactive_dot_color, Paint::Secondary(0.2));
    }

    #[test]
    fn test_presets_only_touch_their_fields() {
        let minimal = Preset::Minimal.style();
        assert_eq!(minimal.vertical_padding, 4.0);
        assert_eq!(minimal.horizontal_padding, 2.0);
        assert_eq!(minimal.background_corner_radius, 10.0);
        assert_eq!(minimal.background_color, Paint::Clear);
        assert_eq!(minimal.dot_spacing, StyleConfig::default().dot_spacing);

        let dark = Preset::Dark.style();
        assert_eq!(dark.background_color, Paint::black(0.6));
        assert_eq!(dark.selected_dot_color, Paint::white(1.0));
        assert_eq!(dark.active_dot_color, Paint::white(0.6));
        assert_eq!(dark.inactive_dot_color, Paint::white(0.3));
        assert_eq!(dark.vertical_padding, 8.0);
    }

    #[test]
    fn test_paint_parsing() {
        let cases = vec![
            ("primary", Paint::Primary(1.0)),
            ("Primary@0.4", Paint::Primary(0.4)),
            ("secondary @ 0.2", Paint::Secondary(0.2)),
            ("material@0.9", Paint::Material(0.9)),
            ("clear", Paint::Clear),
            ("white@0.6", Paint::white(0.6)),
            ("BLACK", Paint::black(1.0)),
            ("primary@3", Paint::Primary(1.0)),
            ("#ff0000", Paint::Rgba(Srgba::new(1.0, 0.0, 0.0, 1.0))),
            ("#00000000", Paint::Rgba(Srgba::new(0.0, 0.0, 0.0, 0.0))),
        ];

        for (input, expected) in cases {
            assert_eq!(input.parse::<Paint>().unwrap(), expected, "{input}");
        }
    }

    #[test]
    fn test_paint_parse_errors() {
        assert_eq!("".parse::<Paint>(), Err(PaintParseError::Empty));
        assert!(matches!(
            "chartreuse".parse::<Paint>(),
            Err(PaintParseError::Unknown(_))
        ));
        assert!(matches!(
            "#12345".parse::<Paint>(),
            Err(PaintParseError::InvalidHex(_))
        ));
        assert!(matches!(
            "#gg0000".parse::<Paint>(),
            Err(PaintParseError::InvalidHex(_))
        ));
        assert!(matches!(
            "primary@lots".parse::<Paint>(),
            Err(PaintParseError::InvalidOpacity(_))
        ));
    }

    #[test]
    fn test_paint_display_parses_back() {
        for paint in [
            Paint::Primary(0.4),
            Paint::Material(0.9),
            Paint::Clear,
            Paint::Rgba(Srgba::new(1.0, 0.0, 0.0, 1.0)),
        ] {
            assert_eq!(paint.to_string().parse::<Paint>().unwrap(), paint);
        }
    }

    #[test]
    fn test_enum_deserialization() {
        let cases = vec![
            ("\"vertical\"", Orientation::Vertical),
            ("\"Horizontal\"", Orientation::Horizontal),
            ("\"h\"", Orientation::Horizontal),
        ];
        for (json, expected) in cases {
            let deserialized: Orientation = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }

        let reversed: ScrollDirection = serde_json::from_str("\"REV\"").unwrap();
        assert_eq!(reversed, ScrollDirection::Reversed);

        let preset: Preset = serde_json::from_str("\"Dark\"").unwrap();
        assert_eq!(preset, Preset::Dark);
    }
}

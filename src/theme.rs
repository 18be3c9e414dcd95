//! Theme system for the controls
//!
//! Provides YAML-based theming with a compile-time embedded default theme.
//! A `Theme` is an explicit value: the host loads (or constructs) one, wraps
//! it in an `Rc`, and hands it to each control at construction time. There
//! are no process-wide theme tables.

use serde::Deserialize;

/// The embedded default theme, compiled into the library.
pub const DEFAULT_DARK_YAML: &str = include_str!("../themes/dark.yaml");

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to ARGB u32 for CPU framebuffers
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Return a new color with the specified alpha value
    pub const fn with_alpha(&self, a: u8) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Return a darkened copy, subtracting `amount` from each channel.
    pub fn darken(&self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_sub(amount),
            g: self.g.saturating_sub(amount),
            b: self.b.saturating_sub(amount),
            a: self.a,
        }
    }

    /// Return a lightened copy, adding `amount` to each channel.
    pub fn lighten(&self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_add(amount),
            g: self.g.saturating_add(amount),
            b: self.b.saturating_add(amount),
            a: self.a,
        }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        match s.len() {
            6 => Ok(Color {
                r: u8::from_str_radix(&s[0..2], 16).map_err(|e| e.to_string())?,
                g: u8::from_str_radix(&s[2..4], 16).map_err(|e| e.to_string())?,
                b: u8::from_str_radix(&s[4..6], 16).map_err(|e| e.to_string())?,
                a: 255,
            }),
            8 => Ok(Color {
                r: u8::from_str_radix(&s[0..2], 16).map_err(|e| e.to_string())?,
                g: u8::from_str_radix(&s[2..4], 16).map_err(|e| e.to_string())?,
                b: u8::from_str_radix(&s[4..6], 16).map_err(|e| e.to_string())?,
                a: u8::from_str_radix(&s[6..8], 16).map_err(|e| e.to_string())?,
            }),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub controls: ControlsThemeData,
    #[serde(default)]
    pub text_box: TextBoxThemeData,
    #[serde(default)]
    pub menu: MenuThemeData,
    #[serde(default)]
    pub link: LinkThemeData,
}

/// Shared control colors (raw strings from YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct ControlsThemeData {
    pub background: String,
    pub foreground: String,
    pub border: String,
    pub accent: String,
}

/// Text box colors (all optional, derived from shared colors when absent)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct TextBoxThemeData {
    #[serde(default)]
    pub selection_background: Option<String>,
    #[serde(default)]
    pub caret: Option<String>,
}

/// Context menu colors
#[derive(Debug, Clone, Deserialize, Default)]
pub struct MenuThemeData {
    #[serde(default)]
    pub hover_background: Option<String>,
    #[serde(default)]
    pub hover_foreground: Option<String>,
}

/// Link label colors
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LinkThemeData {
    #[serde(default)]
    pub color: Option<String>,
}

/// Pixel metrics shared by the controls.
///
/// Not part of the YAML surface; hosts that scale for DPI construct a scaled
/// copy and hand it in through the theme.
#[derive(Debug, Clone, Copy)]
pub struct ControlMetrics {
    /// Default height of single-row controls (text box, link label).
    pub control_height: i32,
    /// Horizontal padding between a control's border and its text.
    pub side_margin: i32,
    /// Vertical padding for selection fills and the caret line.
    pub top_margin: i32,
    /// Extra pixels scrolled past the caret so it never sits flush on an edge.
    pub scroll_step: i32,
    /// Height of one context menu row.
    pub menu_item_height: i32,
    /// X offset of menu item labels (leaves room for check/radio markers).
    pub menu_text_x: i32,
    /// X offset of menu check/radio markers.
    pub menu_icon_x: i32,
    /// Minimum context menu width.
    pub menu_min_width: i32,
    /// Side length of the checkbox square.
    pub checkbox_size: i32,
    /// Distance of the link underline from the control's bottom edge.
    pub link_underline_offset: i32,
}

impl Default for ControlMetrics {
    fn default() -> Self {
        Self {
            control_height: 24,
            side_margin: 4,
            top_margin: 3,
            scroll_step: 20,
            menu_item_height: 22,
            menu_text_x: 22,
            menu_icon_x: 4,
            menu_min_width: 100,
            checkbox_size: 16,
            link_underline_offset: 4,
        }
    }
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    /// Control background fill.
    pub background: Color,
    /// Text color.
    pub foreground: Color,
    /// Border/outline color.
    pub border: Color,
    /// Accent color (checkbox fill, hover emphasis).
    pub accent: Color,
    /// Selection fill behind selected text.
    pub selection_background: Color,
    /// Caret line color.
    pub caret: Color,
    /// Hovered menu row fill.
    pub menu_hover_background: Color,
    /// Hovered menu row text.
    pub menu_hover_foreground: Color,
    /// Link label text + underline.
    pub link: Color,
    pub metrics: ControlMetrics,
}

impl Theme {
    /// Load theme from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        Self::from_data(data)
    }

    /// Load a theme from a YAML file on disk
    pub fn from_file(path: &std::path::Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
        tracing::info!("Loading theme from {}", path.display());
        Self::from_yaml(&content)
    }

    /// Convert raw theme data to resolved theme
    fn from_data(data: ThemeData) -> Result<Self, String> {
        let parse = |s: &str| Color::from_hex(s);
        let parse_opt = |s: &Option<String>, fallback: Color| -> Result<Color, String> {
            match s {
                Some(s) => Color::from_hex(s),
                None => Ok(fallback),
            }
        };

        let background = parse(&data.controls.background)?;
        let foreground = parse(&data.controls.foreground)?;
        let border = parse(&data.controls.border)?;
        let accent = parse(&data.controls.accent)?;

        Ok(Self {
            name: data.name,
            background,
            foreground,
            border,
            accent,
            selection_background: parse_opt(
                &data.text_box.selection_background,
                background.darken(16),
            )?,
            caret: parse_opt(&data.text_box.caret, foreground)?,
            menu_hover_background: parse_opt(&data.menu.hover_background, background.lighten(40))?,
            menu_hover_foreground: parse_opt(&data.menu.hover_foreground, foreground.lighten(30))?,
            link: parse_opt(&data.link.color, accent.lighten(40))?,
            metrics: ControlMetrics::default(),
        })
    }

    /// The built-in dark theme, without touching the YAML path.
    pub fn default_dark() -> Self {
        Self {
            name: "Default Dark".to_string(),
            background: Color::rgb(0x2A, 0x2A, 0x2A),
            foreground: Color::rgb(0xBD, 0xBD, 0xBD),
            border: Color::rgb(0xBD, 0xBD, 0xBD),
            accent: Color::rgb(0x4E, 0x7A, 0xB5),
            selection_background: Color::rgb(0x1C, 0x1C, 0x1C),
            caret: Color::rgb(0xBD, 0xBD, 0xBD),
            menu_hover_background: Color::rgb(0x55, 0x55, 0x55),
            menu_hover_foreground: Color::rgb(0xDA, 0xDA, 0xDA),
            link: Color::rgb(0x7A, 0xA5, 0xD8),
            metrics: ControlMetrics::default(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#4E7AB5").unwrap();
        assert_eq!(c, Color::rgb(0x4E, 0x7A, 0xB5));

        let c = Color::from_hex("1C1C1C80").unwrap();
        assert_eq!(c.a, 0x80);

        assert!(Color::from_hex("#123").is_err());
        assert!(Color::from_hex("#GGGGGG").is_err());
    }

    #[test]
    fn test_color_to_argb() {
        let c = Color::rgba(0x11, 0x22, 0x33, 0x44);
        assert_eq!(c.to_argb_u32(), 0x44112233);
    }

    #[test]
    fn test_color_darken_saturates() {
        let c = Color::rgb(10, 200, 0).darken(20);
        assert_eq!(c, Color::rgb(0, 180, 0));
    }

    #[test]
    fn test_embedded_theme_parses() {
        let theme = Theme::from_yaml(DEFAULT_DARK_YAML).unwrap();
        assert_eq!(theme.name, "Default Dark");
        assert_eq!(theme.background, Color::rgb(0x2A, 0x2A, 0x2A));
        assert_eq!(theme.selection_background, Color::rgb(0x1C, 0x1C, 0x1C));
    }

    #[test]
    fn test_missing_sections_fall_back() {
        let yaml = r##"
version: 1
name: "Minimal"
controls:
  background: "#202020"
  foreground: "#C0C0C0"
  border: "#C0C0C0"
  accent: "#3070B0"
"##;
        let theme = Theme::from_yaml(yaml).unwrap();
        // Selection falls back to a darkened background
        assert_eq!(
            theme.selection_background,
            Color::rgb(0x20, 0x20, 0x20).darken(16)
        );
        // Caret falls back to the foreground
        assert_eq!(theme.caret, theme.foreground);
    }
}

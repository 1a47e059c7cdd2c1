// ui/theme.rs - Theme values and their style tokens

use ratatui::style::Color;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// A color with an alpha channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const CLEAR: Rgba = Rgba::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with the alpha channel replaced
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            6 => Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }

    /// Terminal color; fully transparent colors render as the terminal default
    pub fn to_color(self) -> Color {
        if self.is_transparent() {
            Color::Reset
        } else {
            Color::Rgb(self.r, self.g, self.b)
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Built-in theme families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeVariant {
    Light,
    Dark,
    Black,
}

impl ThemeVariant {
    pub const ALL: [ThemeVariant; 3] = [ThemeVariant::Light, ThemeVariant::Dark, ThemeVariant::Black];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeVariant::Light => "light",
            ThemeVariant::Dark => "dark",
            ThemeVariant::Black => "black",
        }
    }
}

impl FromStr for ThemeVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ThemeVariant::Light),
            "dark" => Ok(ThemeVariant::Dark),
            "black" => Ok(ThemeVariant::Black),
            other => Err(format!("unknown theme variant: {}", other)),
        }
    }
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarStyle {
    Default,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyboardAppearance {
    Light,
    Dark,
}

/// Non-color appearance tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appearance {
    pub bar_style: BarStyle,
    pub keyboard_appearance: KeyboardAppearance,
}

/// Named color tokens read by widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background_color: Rgba,
    pub focused_background: Rgba,
    pub body_text: Rgba,
    pub title_text: Rgba,
    pub auxiliary_text: Rgba,
    pub hyperlink_text: Rgba,
    pub muted_accent: Rgba,
    pub tint_color: Rgba,
}

/// An immutable bundle of style tokens
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub variant: ThemeVariant,
    pub palette: Palette,
    pub appearance: Appearance,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            variant: ThemeVariant::Light,
            palette: Palette {
                background_color: Rgba::rgb(0xff, 0xff, 0xff),
                focused_background: Rgba::rgb(0xf7, 0xf8, 0xfa),
                body_text: Rgba::rgb(0x2f, 0x34, 0x3d),
                title_text: Rgba::rgb(0x0c, 0x0d, 0x0f),
                auxiliary_text: Rgba::rgb(0x9e, 0xa2, 0xa8),
                hyperlink_text: Rgba::rgb(0x1d, 0x74, 0xf5),
                muted_accent: Rgba::rgb(0xcb, 0xce, 0xd1),
                tint_color: Rgba::rgb(0x1d, 0x74, 0xf5),
            },
            appearance: Appearance {
                bar_style: BarStyle::Default,
                keyboard_appearance: KeyboardAppearance::Light,
            },
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            variant: ThemeVariant::Dark,
            palette: Palette {
                background_color: Rgba::rgb(0x1a, 0x20, 0x26),
                focused_background: Rgba::rgb(0x25, 0x2d, 0x35),
                body_text: Rgba::rgb(0xc4, 0xcf, 0xd5),
                title_text: Rgba::rgb(0xf4, 0xf4, 0xf4),
                auxiliary_text: Rgba::rgb(0x9a, 0xa6, 0xb0),
                hyperlink_text: Rgba::rgb(0x52, 0xa8, 0xff),
                muted_accent: Rgba::rgb(0x3c, 0x46, 0x50),
                tint_color: Rgba::rgb(0x52, 0xa8, 0xff),
            },
            appearance: Appearance {
                bar_style: BarStyle::Black,
                keyboard_appearance: KeyboardAppearance::Dark,
            },
        }
    }

    pub fn black() -> Self {
        Self {
            name: "black".to_string(),
            variant: ThemeVariant::Black,
            palette: Palette {
                background_color: Rgba::rgb(0x00, 0x00, 0x00),
                focused_background: Rgba::rgb(0x0d, 0x0d, 0x0d),
                body_text: Rgba::rgb(0xde, 0xde, 0xde),
                title_text: Rgba::rgb(0xff, 0xff, 0xff),
                auxiliary_text: Rgba::rgb(0x9a, 0xa6, 0xb0),
                hyperlink_text: Rgba::rgb(0x52, 0xa8, 0xff),
                muted_accent: Rgba::rgb(0x26, 0x26, 0x26),
                tint_color: Rgba::rgb(0x52, 0xa8, 0xff),
            },
            appearance: Appearance {
                bar_style: BarStyle::Black,
                keyboard_appearance: KeyboardAppearance::Dark,
            },
        }
    }

    pub fn from_variant(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Light => Self::light(),
            ThemeVariant::Dark => Self::dark(),
            ThemeVariant::Black => Self::black(),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.variant != ThemeVariant::Light
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

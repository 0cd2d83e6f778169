use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub primary: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night()
    }
}

impl Theme {
    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: ColorSpec::rgb(122, 162, 247),
            banner: ColorSpec::rgb(187, 154, 247),
            text: ColorSpec::rgb(192, 202, 245),
            text_muted: ColorSpec::rgb(86, 95, 137),
            success: ColorSpec::rgb(158, 206, 106),
            warning: ColorSpec::rgb(224, 175, 104),
            error: ColorSpec::rgb(247, 118, 142),
            border_active: ColorSpec::rgb(122, 162, 247),
            border_normal: ColorSpec::rgb(65, 72, 104),
        }
    }

    /// Rose Pine theme.
    ///
    pub fn rose_pine() -> Self {
        Theme {
            name: "rose-pine".to_string(),
            primary: ColorSpec::rgb(196, 167, 231),
            banner: ColorSpec::rgb(235, 188, 186),
            text: ColorSpec::rgb(224, 222, 244),
            text_muted: ColorSpec::rgb(110, 106, 134),
            success: ColorSpec::rgb(156, 207, 216),
            warning: ColorSpec::rgb(246, 193, 119),
            error: ColorSpec::rgb(235, 111, 146),
            border_active: ColorSpec::rgb(196, 167, 231),
            border_normal: ColorSpec::rgb(64, 61, 82),
        }
    }

    /// Dracula theme.
    ///
    pub fn dracula() -> Self {
        Theme {
            name: "dracula".to_string(),
            primary: ColorSpec::rgb(189, 147, 249),
            banner: ColorSpec::rgb(255, 121, 198),
            text: ColorSpec::rgb(248, 248, 242),
            text_muted: ColorSpec::rgb(98, 114, 164),
            success: ColorSpec::rgb(80, 250, 123),
            warning: ColorSpec::rgb(241, 250, 140),
            error: ColorSpec::rgb(255, 85, 85),
            border_active: ColorSpec::rgb(189, 147, 249),
            border_normal: ColorSpec::rgb(68, 71, 90),
        }
    }

    /// Catppuccin Latte theme, for light terminals.
    ///
    pub fn catppuccin_latte() -> Self {
        Theme {
            name: "catppuccin-latte".to_string(),
            primary: ColorSpec::rgb(136, 57, 239),
            banner: ColorSpec::rgb(30, 102, 245),
            text: ColorSpec::rgb(76, 79, 105),
            text_muted: ColorSpec::rgb(140, 143, 161),
            success: ColorSpec::rgb(64, 160, 43),
            warning: ColorSpec::rgb(223, 142, 29),
            error: ColorSpec::rgb(210, 15, 57),
            border_active: ColorSpec::rgb(136, 57, 239),
            border_normal: ColorSpec::rgb(188, 192, 204),
        }
    }

    /// Look up a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tokyo-night" => Some(Self::tokyo_night()),
            "rose-pine" => Some(Self::rose_pine()),
            "dracula" => Some(Self::dracula()),
            "catppuccin-latte" => Some(Self::catppuccin_latte()),
            _ => None,
        }
    }

    /// Return the names of all built-in themes.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "tokyo-night".to_string(),
            "rose-pine".to_string(),
            "dracula".to_string(),
            "catppuccin-latte".to_string(),
        ]
    }
}

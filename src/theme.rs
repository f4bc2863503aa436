use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Page color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn name(&self) -> &str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    pub fn toggle(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Text and particle color
    pub fn foreground(&self) -> Color {
        match self {
            Theme::Dark => Color::Rgb(0xf4, 0xf4, 0xf9),
            Theme::Light => Color::Rgb(0x33, 0x33, 0x33),
        }
    }

    pub fn background(&self) -> Color {
        match self {
            Theme::Dark => Color::Rgb(0x1e, 0x1e, 0x24),
            Theme::Light => Color::Rgb(0xf4, 0xf4, 0xf9),
        }
    }

    /// Muted color for hints and inactive labels
    pub fn dim(&self) -> Color {
        match self {
            Theme::Dark => Color::Rgb(0x9a, 0x9a, 0xa6),
            Theme::Light => Color::Rgb(0x80, 0x80, 0x88),
        }
    }

    /// Focus highlight and borders
    pub fn accent(&self) -> Color {
        match self {
            Theme::Dark => Color::Rgb(0x8a, 0xb4, 0xf8),
            Theme::Light => Color::Rgb(0x1a, 0x5f, 0xb4),
        }
    }

    /// Background of the form card drawn over the particles
    pub fn surface(&self) -> Color {
        match self {
            Theme::Dark => Color::Rgb(0x2a, 0x2a, 0x33),
            Theme::Light => Color::Rgb(0xff, 0xff, 0xff),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let theme = Theme::default();
        assert_eq!(theme, Theme::Light);
        assert_eq!(theme.toggle(), Theme::Dark);
        assert_eq!(theme.toggle().toggle(), Theme::Light);
    }

    #[test]
    fn test_foreground_contrasts_background() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.foreground(), theme.background());
        }
        assert_eq!(Theme::Dark.foreground(), Color::Rgb(244, 244, 249));
        assert_eq!(Theme::Light.foreground(), Color::Rgb(51, 51, 51));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let parsed: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(parsed, Theme::Light);
    }
}

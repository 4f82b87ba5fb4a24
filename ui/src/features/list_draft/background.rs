//! Background palettes and the two-step palette/color selection.

use serde::{Deserialize, Serialize};

use super::locale::Language;
use super::types::ListAction;

/// Named family of selectable background colors
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BackgroundPalette {
    #[default]
    Pastel,
    Pop,
    Trendy,
    Calm,
    Organic,
}

const PASTEL_COLORS: &[&str] = &["#FFFFFF", "#FFEFEF", "#FFF6E5", "#EAF8EC", "#E8F1FF", "#F2EBFF"];
const POP_COLORS: &[&str] = &["#FFE36E", "#FF9A9A", "#8FD8FF", "#9CF2A8", "#C6A4FF", "#FFB86B"];
const TRENDY_COLORS: &[&str] = &["#F4F1EA", "#D9E3DA", "#CFD8E3", "#E9D8D6", "#DCD3E8", "#2F2F2F"];
const CALM_COLORS: &[&str] = &["#EDF2F7", "#DCE6EE", "#C9D6DF", "#E3E8E1", "#EEE7DF", "#D6D2CE"];
const ORGANIC_COLORS: &[&str] = &["#F5EFE0", "#E6DCC6", "#D9E4C8", "#C8D5B9", "#EAD7C3", "#CDB89F"];

impl BackgroundPalette {
    pub const ALL: [BackgroundPalette; 5] = [
        BackgroundPalette::Pastel,
        BackgroundPalette::Pop,
        BackgroundPalette::Trendy,
        BackgroundPalette::Calm,
        BackgroundPalette::Organic,
    ];

    pub fn colors(&self) -> &'static [&'static str] {
        match self {
            BackgroundPalette::Pastel => PASTEL_COLORS,
            BackgroundPalette::Pop => POP_COLORS,
            BackgroundPalette::Trendy => TRENDY_COLORS,
            BackgroundPalette::Calm => CALM_COLORS,
            BackgroundPalette::Organic => ORGANIC_COLORS,
        }
    }

    pub fn default_color(&self) -> &'static str {
        self.colors()[0]
    }

    /// Case-insensitive membership check for a hex color
    pub fn contains(&self, color: &str) -> bool {
        self.colors().iter().any(|c| c.eq_ignore_ascii_case(color))
    }

    /// Stable option value used by the palette `<select>`
    pub fn as_str(&self) -> &'static str {
        match self {
            BackgroundPalette::Pastel => "PASTEL",
            BackgroundPalette::Pop => "POP",
            BackgroundPalette::Trendy => "TRENDY",
            BackgroundPalette::Calm => "CALM",
            BackgroundPalette::Organic => "ORGANIC",
        }
    }

    pub fn from_str_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }

    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (BackgroundPalette::Pastel, Language::Ko) => "파스텔",
            (BackgroundPalette::Pop, Language::Ko) => "팝",
            (BackgroundPalette::Trendy, Language::Ko) => "트렌디",
            (BackgroundPalette::Calm, Language::Ko) => "차분한",
            (BackgroundPalette::Organic, Language::Ko) => "오가닉",
            (BackgroundPalette::Pastel, Language::En) => "Pastel",
            (BackgroundPalette::Pop, Language::En) => "Pop",
            (BackgroundPalette::Trendy, Language::En) => "Trendy",
            (BackgroundPalette::Calm, Language::En) => "Calm",
            (BackgroundPalette::Organic, Language::En) => "Organic",
        }
    }
}

/// Local "currently browsing" palette, mirrored into the draft only on a color pick.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BackgroundSelection {
    browsing: BackgroundPalette,
}

impl BackgroundSelection {
    pub fn new(stored: BackgroundPalette) -> Self {
        Self { browsing: stored }
    }

    pub fn browsing(&self) -> BackgroundPalette {
        self.browsing
    }

    pub fn choose_palette(&mut self, palette: BackgroundPalette) {
        self.browsing = palette;
    }

    /// Returns the draft mutation for a concrete color pick, or `None` when the
    /// color is not part of the palette being browsed.
    pub fn pick_color(&self, color: &str) -> Option<ListAction> {
        if !self.browsing.contains(color) {
            tracing::debug!(
                "Ignoring color {} outside palette {}",
                color,
                self.browsing.as_str()
            );
            return None;
        }
        Some(ListAction::SetBackground {
            palette: self.browsing,
            color: color.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_palette_has_distinct_colors() {
        for palette in BackgroundPalette::ALL {
            let colors = palette.colors();
            assert!(!colors.is_empty());
            for (i, color) in colors.iter().enumerate() {
                assert!(!colors[i + 1..].contains(color), "{color} repeated in {:?}", palette);
            }
        }
    }

    #[test]
    fn test_palette_option_value_lookup() {
        for palette in BackgroundPalette::ALL {
            assert_eq!(BackgroundPalette::from_str_value(palette.as_str()), Some(palette));
        }
        assert_eq!(BackgroundPalette::from_str_value("NEON"), None);
    }

    #[test]
    fn test_choosing_palette_alone_does_not_touch_draft() {
        let mut selection = BackgroundSelection::new(BackgroundPalette::Pastel);
        selection.choose_palette(BackgroundPalette::Calm);
        assert_eq!(selection.browsing(), BackgroundPalette::Calm);
    }

    #[test]
    fn test_color_pick_mirrors_browsed_palette() {
        let mut selection = BackgroundSelection::new(BackgroundPalette::Pastel);
        selection.choose_palette(BackgroundPalette::Pop);

        let color = BackgroundPalette::Pop.colors()[2];
        match selection.pick_color(color) {
            Some(ListAction::SetBackground { palette, color: picked }) => {
                assert_eq!(palette, BackgroundPalette::Pop);
                assert_eq!(picked, color);
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_color_from_other_palette_is_ignored() {
        let selection = BackgroundSelection::new(BackgroundPalette::Organic);
        assert!(selection.pick_color("#FF9A9A").is_none());
    }

    #[test]
    fn test_serde_uses_screaming_case() {
        let json = serde_json::to_string(&BackgroundPalette::Trendy).unwrap();
        assert_eq!(json, "\"TRENDY\"");
        let parsed: BackgroundPalette = serde_json::from_str("\"ORGANIC\"").unwrap();
        assert_eq!(parsed, BackgroundPalette::Organic);
    }
}

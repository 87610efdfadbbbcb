//! Theme system for Countdown.
//!
//! Provides preset color schemes selected with `--theme`.

use ratatui::style::Color;

/// A color theme for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Unique identifier for the theme.
    pub id: &'static str,
    /// Display name for the theme.
    pub name: &'static str,

    // Semantic colors
    /// Enabled controls and keypad keys.
    pub primary: Color,
    /// Titles and borders.
    pub secondary: Color,
    /// Normal text content.
    pub text: Color,
    /// Disabled controls, hints.
    pub dimmed: Color,

    // Display colors
    /// Time display while stopped.
    pub display: Color,
    /// Time display while running.
    pub running: Color,
    /// Time display while paused.
    pub paused: Color,
}

/// Default theme - plain terminal colors.
pub const DEFAULT: Theme = Theme {
    id: "default",
    name: "Default",
    primary: Color::Yellow,
    secondary: Color::Cyan,
    text: Color::White,
    dimmed: Color::DarkGray,
    display: Color::White,
    running: Color::Green,
    paused: Color::Yellow,
};

/// Dark theme - warm gold and cool blue for high contrast.
pub const DARK: Theme = Theme {
    id: "dark",
    name: "Dark",
    primary: Color::Rgb(255, 215, 0),     // Gold
    secondary: Color::Rgb(100, 149, 237), // Cornflower blue
    text: Color::Rgb(220, 220, 220),      // Light gray
    dimmed: Color::Rgb(128, 128, 128),    // Gray
    display: Color::Rgb(240, 240, 240),   // Near white
    running: Color::Rgb(50, 205, 50),     // Lime green
    paused: Color::Rgb(255, 165, 0),      // Orange
};

/// Light theme - darker tones for light terminal backgrounds.
pub const LIGHT: Theme = Theme {
    id: "light",
    name: "Light",
    primary: Color::Rgb(184, 134, 11),  // Dark goldenrod
    secondary: Color::Rgb(0, 139, 139), // Dark cyan
    text: Color::Rgb(33, 33, 33),       // Near black
    dimmed: Color::Rgb(105, 105, 105),  // Dim gray
    display: Color::Rgb(33, 33, 33),    // Near black
    running: Color::Rgb(34, 139, 34),   // Forest green
    paused: Color::Rgb(178, 34, 34),    // Firebrick
};

/// Ocean theme - sandy gold and ocean blue palette.
pub const OCEAN: Theme = Theme {
    id: "ocean",
    name: "Ocean",
    primary: Color::Rgb(244, 208, 111),   // Sandy gold
    secondary: Color::Rgb(70, 130, 180),  // Steel blue
    text: Color::Rgb(240, 248, 255),      // Alice blue
    dimmed: Color::Rgb(119, 136, 153),    // Light slate gray
    display: Color::Rgb(176, 196, 222),   // Light steel blue
    running: Color::Rgb(32, 178, 170),    // Light sea green
    paused: Color::Rgb(205, 92, 92),      // Indian red
};

/// Forest theme - sunlight gold and leaf green palette.
pub const FOREST: Theme = Theme {
    id: "forest",
    name: "Forest",
    primary: Color::Rgb(255, 223, 128),   // Soft gold (sunlight)
    secondary: Color::Rgb(107, 142, 35),  // Olive drab (leaves)
    text: Color::Rgb(245, 245, 220),      // Beige
    dimmed: Color::Rgb(143, 143, 123),    // Dark khaki-ish
    display: Color::Rgb(189, 183, 107),   // Dark khaki
    running: Color::Rgb(60, 179, 113),    // Medium sea green
    paused: Color::Rgb(210, 105, 30),     // Chocolate
};

impl Theme {
    /// All available themes.
    pub const ALL: [Theme; 5] = [DEFAULT, DARK, LIGHT, OCEAN, FOREST];

    /// Look up a theme by its ID.
    ///
    /// Returns the DEFAULT theme if the ID is not found.
    pub fn by_id(id: &str) -> &'static Theme {
        Theme::ALL
            .iter()
            .find(|t| t.id == id)
            .unwrap_or(&DEFAULT)
    }

    /// Comma separated list of theme IDs, for help texts.
    pub fn ids() -> String {
        Theme::ALL.iter().map(|t| t.id).collect::<Vec<_>>().join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_id() {
        assert_eq!(Theme::by_id("ocean").name, "Ocean");
        assert_eq!(Theme::by_id("nope").id, "default");
    }

    #[test]
    fn test_ids() {
        let ids = Theme::ids();
        assert_eq!(ids, "default, dark, light, ocean, forest");
    }
}

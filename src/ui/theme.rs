//! Colors shared by the catalog screens

use ratatui::style::{Color, Modifier, Style};

use crate::items::{Category, Tier};

pub const ACCENT: Color = Color::Rgb(250, 204, 21);
pub const TEXT: Color = Color::Rgb(229, 231, 235);
pub const MUTED: Color = Color::Rgb(148, 163, 184);
pub const BORDER: Color = Color::Rgb(71, 85, 105);
pub const BORDER_FOCUSED: Color = Color::Rgb(250, 204, 21);
pub const VALUE: Color = Color::Rgb(134, 239, 172);

/// Background color for an item tier
pub fn tier_color(tier: Tier) -> Color {
    let (r, g, b) = tier.color();
    Color::Rgb(r, g, b)
}

/// Chip/badge color for a category
pub fn category_color(category: Category) -> Color {
    let (r, g, b) = category.color();
    Color::Rgb(r, g, b)
}

/// Badge style: white text on the category color
pub fn badge_style(category: Category) -> Style {
    Style::default().fg(Color::White).bg(category_color(category))
}

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(BORDER_FOCUSED)
    } else {
        Style::default().fg(BORDER)
    }
}

pub fn heading_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_colors_match_palette() {
        assert_eq!(tier_color(Tier::Common), Color::Rgb(0x2a, 0x3f, 0x5f));
        assert_eq!(tier_color(Tier::Legendary), Color::Rgb(0x8b, 0x69, 0x14));
    }

    #[test]
    fn test_badge_uses_category_color() {
        let style = badge_style(Category::Medical);
        assert_eq!(style.bg, Some(category_color(Category::Medical)));
        assert_eq!(style.fg, Some(Color::White));
    }
}

//! Single-line item card

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::items::{format_value, Item};
use crate::ui::theme;

/// Width the item name is padded to so badges line up
const NAME_WIDTH: usize = 28;
const INDENT: &str = "  ";

/// Renders an item as one line: tier swatch, name, quantity, category
/// badges, weight and value.
pub struct ItemCard<'a> {
    item: &'a Item,
}

impl<'a> ItemCard<'a> {
    pub fn new(item: &'a Item) -> Self {
        Self { item }
    }

    pub fn line(&self) -> Line<'static> {
        let item = self.item;
        let tier_color = theme::tier_color(item.tier);

        let mut spans = vec![
            Span::raw(INDENT),
            Span::styled("▌", Style::default().fg(tier_color)),
            Span::styled(
                format!("{:<width$}", truncate(&item.name, NAME_WIDTH), width = NAME_WIDTH),
                Style::default()
                    .fg(theme::TEXT)
                    .bg(tier_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ];

        if let Some(quantity) = &item.quantity {
            spans.push(Span::styled(
                format!(" {}", quantity),
                Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD),
            ));
        }

        spans.push(Span::raw("  "));
        for category in &item.category {
            spans.push(Span::styled(format!(" {} ", category), theme::badge_style(*category)));
            spans.push(Span::raw(" "));
        }

        if let Some(weight) = item.weight {
            spans.push(Span::styled(" Weight: ", Style::default().fg(theme::MUTED)));
            spans.push(Span::styled(weight.to_string(), Style::default().fg(Color::White)));
        }

        spans.push(Span::styled(" Value: ", Style::default().fg(theme::MUTED)));
        spans.push(Span::styled(
            format_value(item.value),
            Style::default().fg(theme::VALUE).add_modifier(Modifier::BOLD),
        ));

        Line::from(spans)
    }
}

/// Truncate to `max_len` characters, ending with "…" when cut
fn truncate(name: &str, max_len: usize) -> String {
    if name.chars().count() <= max_len {
        name.to_string()
    } else if max_len <= 1 {
        "…".to_string()
    } else {
        let truncated: String = name.chars().take(max_len - 1).collect();
        format!("{}…", truncated)
    }
}

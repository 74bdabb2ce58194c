//! Content pane layout
//!
//! Flattens the derived view into styled lines and records the row at
//! which each section starts, for scrolling and the scroll spy.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::data::Bucket;
use crate::items::Item;
use crate::ui::theme;
use crate::ui::widgets::ItemCard;
use crate::view::{DerivedView, SectionVisibility};

pub const QUICK_TIPS_ID: &str = "quick-tips";
pub const WORKSHOP_ID: &str = "workshop-upgrades";

/// Inputs besides the view that affect layout
#[derive(Debug, Clone, Copy)]
pub struct LayoutOptions<'a> {
    pub tips: &'a [String],
    pub tips_expanded: bool,
    pub filter_active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ContentLayout {
    pub lines: Vec<Line<'static>>,
    /// (section id, first row) in display order
    pub anchors: Vec<(String, usize)>,
    /// (row, item) for every item card on screen
    pub item_rows: Vec<(usize, Item)>,
}

impl ContentLayout {
    pub fn build(view: &DerivedView, sections: &SectionVisibility, options: LayoutOptions) -> Self {
        let mut layout = Self::default();

        if !options.tips.is_empty() {
            layout.push_tips(options.tips, options.tips_expanded);
        }

        if view.is_empty() && options.filter_active {
            layout.push_empty_state();
            return layout;
        }

        for bucket in Bucket::ALL {
            let items = view.bucket(bucket);
            if items.is_empty() {
                continue;
            }
            let key = bucket.section_key();
            layout.push_section(
                key,
                bucket.title(),
                Some(bucket.description()),
                items,
                sections.is_expanded(key),
            );
        }

        if !view.workshop.is_empty() {
            layout.anchor(WORKSHOP_ID);
            layout.lines.push(Line::from(Span::styled(
                "━━ Workshop Upgrades ━━",
                theme::heading_style(),
            )));
            layout.lines.push(Line::from(""));

            for (index, group) in view.workshop.iter().enumerate() {
                let key = group.section_key(index);
                let expanded = sections.is_expanded(&key);
                layout.push_section(&key, &group.title(), None, &group.items, expanded);
            }
        }

        layout
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Row at which section `id` starts
    pub fn anchor_of(&self, id: &str) -> Option<usize> {
        self.anchors
            .iter()
            .find(|(anchor, _)| anchor == id)
            .map(|(_, row)| *row)
    }

    /// First item card at or below `row`
    pub fn item_from(&self, row: usize) -> Option<&Item> {
        self.item_rows
            .iter()
            .find(|(item_row, _)| *item_row >= row)
            .map(|(_, item)| item)
    }

    fn anchor(&mut self, id: &str) {
        self.anchors.push((id.to_string(), self.lines.len()));
    }

    fn push_tips(&mut self, tips: &[String], expanded: bool) {
        self.anchor(QUICK_TIPS_ID);
        self.lines.push(Line::from(vec![
            Span::styled(marker(expanded), theme::heading_style()),
            Span::styled("Quick Tips", theme::heading_style()),
        ]));
        if expanded {
            for (i, tip) in tips.iter().enumerate() {
                self.lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {}. ", i + 1),
                        Style::default().fg(theme::ACCENT),
                    ),
                    Span::styled(tip.clone(), Style::default().fg(theme::TEXT)),
                ]));
            }
        }
        self.lines.push(Line::from(""));
    }

    fn push_empty_state(&mut self) {
        self.lines.push(Line::from(""));
        self.lines.push(Line::from(Span::styled(
            "No items found matching your filters",
            Style::default().fg(theme::MUTED).add_modifier(Modifier::BOLD),
        )));
        self.lines.push(Line::from(Span::styled(
            "Press [x] to clear all filters",
            Style::default().fg(theme::ACCENT),
        )));
    }

    fn push_section(
        &mut self,
        key: &str,
        title: &str,
        description: Option<&str>,
        items: &[Item],
        expanded: bool,
    ) {
        self.anchor(key);

        let mut header = vec![
            Span::styled(marker(expanded), theme::heading_style()),
            Span::styled(title.to_string(), theme::heading_style()),
        ];
        if let Some(description) = description {
            header.push(Span::styled(
                format!("  {}", description),
                Style::default().fg(theme::MUTED),
            ));
        }
        header.push(Span::styled(
            format!("  ({} items)", items.len()),
            Style::default().fg(theme::MUTED),
        ));
        self.lines.push(Line::from(header));

        if expanded {
            for item in items {
                self.item_rows.push((self.lines.len(), item.clone()));
                self.lines.push(ItemCard::new(item).line());
            }
        }
        self.lines.push(Line::from(""));
    }
}

fn marker(expanded: bool) -> &'static str {
    if expanded {
        "▾ "
    } else {
        "▸ "
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::default_catalog;
    use crate::view::{derive, FilterState};

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn options(tips: &[String], filter_active: bool) -> LayoutOptions<'_> {
        LayoutOptions {
            tips,
            tips_expanded: true,
            filter_active,
        }
    }

    #[test]
    fn test_sections_in_order() {
        let catalog = default_catalog();
        let view = derive(&catalog, &FilterState::new());
        let sections = SectionVisibility::new();
        let layout = ContentLayout::build(&view, &sections, options(&catalog.tips, false));

        let ids: Vec<&str> = layout.anchors.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(
            &ids[..5],
            &[QUICK_TIPS_ID, "quest-keep", "project-keep", "recycle-safe", WORKSHOP_ID]
        );
        assert_eq!(ids.len(), 5 + view.workshop.len());

        let rows: Vec<usize> = layout.anchors.iter().map(|(_, row)| *row).collect();
        assert!(rows.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_collapsed_section_hides_items() {
        let catalog = default_catalog();
        let view = derive(&catalog, &FilterState::new());
        let mut sections = SectionVisibility::new();

        let expanded = ContentLayout::build(&view, &sections, options(&[], false));
        sections.toggle("quest-keep");
        let collapsed = ContentLayout::build(&view, &sections, options(&[], false));

        assert_eq!(expanded.height() - collapsed.height(), view.quest_keep.len());
        let header = text(&collapsed.lines[collapsed.anchor_of("quest-keep").unwrap()]);
        assert!(header.starts_with("▸ Keep for Quests"));
        assert!(header.contains(&format!("({} items)", view.quest_keep.len())));
    }

    #[test]
    fn test_item_rows_follow_cards() {
        let catalog = default_catalog();
        let view = derive(&catalog, &FilterState::new());
        let mut sections = SectionVisibility::new();
        sections.toggle("quest-keep");
        let layout = ContentLayout::build(&view, &sections, options(&[], false));

        let project = layout.anchor_of("project-keep").unwrap();
        assert_eq!(layout.item_from(0), Some(&view.project_keep[0]));
        assert_eq!(layout.item_from(project + 1), Some(&view.project_keep[0]));
        assert_eq!(layout.item_from(project + 2), view.project_keep.get(1));
        assert_eq!(layout.item_from(layout.height()), None);
    }

    #[test]
    fn test_empty_sections_not_rendered() {
        let catalog = default_catalog();
        let mut filter = FilterState::new();
        filter.set_search_term("syringe");
        let view = derive(&catalog, &filter);
        let layout = ContentLayout::build(&view, &SectionVisibility::new(), options(&[], true));

        assert_eq!(layout.anchor_of("recycle-safe"), None);
        assert_eq!(layout.anchor_of(WORKSHOP_ID), None);
    }

    #[test]
    fn test_empty_state() {
        let catalog = default_catalog();
        let mut filter = FilterState::new();
        filter.set_search_term("zzz");
        let view = derive(&catalog, &filter);
        let sections = SectionVisibility::new();
        let layout = ContentLayout::build(&view, &sections, options(&catalog.tips, true));

        let all: Vec<String> = layout.lines.iter().map(text).collect();
        assert!(all.iter().any(|l| l == "No items found matching your filters"));
        assert_eq!(layout.anchors.len(), 1);
    }
}

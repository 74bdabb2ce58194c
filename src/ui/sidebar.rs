//! Sidebar navigation
//!
//! A two-level menu of the sections on screen. The entry for the section
//! at the top of the content pane is highlighted, and a parent menu opens
//! automatically when one of its children becomes active.

use std::collections::HashSet;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::data::Bucket;
use crate::ui::content::{QUICK_TIPS_ID, WORKSHOP_ID};
use crate::ui::theme;
use crate::view::{active_section, DerivedView, SectionPosition};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub id: String,
    pub title: String,
    pub children: Vec<NavEntry>,
}

impl NavEntry {
    pub fn leaf(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            children: Vec::new(),
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    fn has_child(&self, id: &str) -> bool {
        self.children.iter().any(|child| child.id == id)
    }
}

/// Build the menu for the sections present in `view`
pub fn build_nav(view: &DerivedView, has_tips: bool) -> Vec<NavEntry> {
    let mut nav = Vec::new();

    if has_tips {
        nav.push(NavEntry::leaf(QUICK_TIPS_ID, "Quick Tips"));
    }

    for bucket in Bucket::ALL {
        if !view.bucket(bucket).is_empty() {
            nav.push(NavEntry::leaf(bucket.section_key(), bucket.title()));
        }
    }

    if !view.workshop.is_empty() {
        let children = view
            .workshop
            .iter()
            .enumerate()
            .map(|(index, group)| NavEntry::leaf(group.section_key(index), group.title()))
            .collect();
        nav.push(NavEntry {
            id: WORKSHOP_ID.to_string(),
            title: "Workshop Upgrades".to_string(),
            children,
        });
    }

    nav
}

/// An entry as currently shown, with its nesting depth
#[derive(Debug, Clone, Copy)]
pub struct VisibleEntry<'a> {
    pub entry: &'a NavEntry,
    pub depth: usize,
}

#[derive(Debug, Clone, Default)]
pub struct SidebarState {
    active_id: Option<String>,
    expanded_menus: HashSet<String>,
    /// Index into the visible entries
    selected: usize,
}

impl SidebarState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_menu_expanded(&self, id: &str) -> bool {
        self.expanded_menus.contains(id)
    }

    /// Open or close a parent menu, returns the new state
    pub fn toggle_menu(&mut self, id: &str) -> bool {
        if self.expanded_menus.remove(id) {
            false
        } else {
            self.expanded_menus.insert(id.to_string());
            true
        }
    }

    /// Recompute the active section from positions.
    ///
    /// Keeps the previous active id when no section has reached the
    /// threshold yet. Returns true if the active id changed.
    pub fn update_active(
        &mut self,
        nav: &[NavEntry],
        positions: &[SectionPosition],
        threshold: i32,
    ) -> bool {
        let Some(id) = active_section(positions, threshold) else {
            return false;
        };

        for parent in nav.iter().filter(|e| e.has_child(id)) {
            self.expanded_menus.insert(parent.id.clone());
        }

        if self.active_id.as_deref() == Some(id) {
            return false;
        }
        self.active_id = Some(id.to_string());
        true
    }

    /// Active, or a parent of the active entry
    pub fn is_highlighted(&self, entry: &NavEntry) -> bool {
        match self.active_id.as_deref() {
            Some(id) => entry.id == id || entry.has_child(id),
            None => false,
        }
    }

    /// Entries in display order, children only under open menus
    pub fn visible<'a>(&self, nav: &'a [NavEntry]) -> Vec<VisibleEntry<'a>> {
        let mut out = Vec::new();
        for entry in nav {
            out.push(VisibleEntry { entry, depth: 0 });
            if entry.has_children() && self.is_menu_expanded(&entry.id) {
                out.extend(
                    entry
                        .children
                        .iter()
                        .map(|child| VisibleEntry { entry: child, depth: 1 }),
                );
            }
        }
        out
    }

    pub fn selected_entry<'a>(&self, nav: &'a [NavEntry]) -> Option<&'a NavEntry> {
        self.visible(nav).get(self.selected).map(|v| v.entry)
    }

    pub fn select_next(&mut self, nav: &[NavEntry]) {
        let len = self.visible(nav).len();
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keep the selection inside the visible list after the menu changed
    pub fn clamp_selection(&mut self, nav: &[NavEntry]) {
        let len = self.visible(nav).len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

/// Renders the navigation menu
pub struct SidebarWidget<'a> {
    nav: &'a [NavEntry],
    state: &'a SidebarState,
    focused: bool,
}

impl<'a> SidebarWidget<'a> {
    pub fn new(nav: &'a [NavEntry], state: &'a SidebarState) -> Self {
        Self {
            nav,
            state,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for SidebarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Navigation ")
            .border_style(theme::border_style(self.focused));

        let visible = self.state.visible(self.nav);
        let lines: Vec<Line> = visible
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let entry = v.entry;
                let indent = "  ".repeat(v.depth);
                let arrow = if entry.has_children() {
                    if self.state.is_menu_expanded(&entry.id) {
                        "▾ "
                    } else {
                        "▸ "
                    }
                } else {
                    "  "
                };

                let mut style = if self.state.is_highlighted(entry) {
                    Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme::TEXT)
                };
                if self.focused && i == self.state.selected() {
                    style = style.add_modifier(Modifier::REVERSED);
                }

                Line::from(vec![
                    Span::raw(indent),
                    Span::styled(format!("{}{}", arrow, entry.title), style),
                ])
            })
            .collect();

        let height = block.inner(area).height as usize;
        let offset = if height == 0 {
            0
        } else {
            self.state.selected().saturating_sub(height - 1)
        };

        Paragraph::new(lines)
            .block(block)
            .scroll((offset as u16, 0))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::default_catalog;
    use crate::view::{derive, positions_at, FilterState};

    fn nav() -> Vec<NavEntry> {
        let catalog = default_catalog();
        build_nav(&derive(&catalog, &FilterState::new()), true)
    }

    #[test]
    fn test_build_nav() {
        let nav = nav();
        let ids: Vec<&str> = nav.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(
            ids,
            [QUICK_TIPS_ID, "quest-keep", "project-keep", "recycle-safe", WORKSHOP_ID]
        );
        assert!(nav[4].has_children());
        assert_eq!(nav[4].children[0].title, "Gunsmith - Level 1");
    }

    #[test]
    fn test_build_nav_skips_empty_sections() {
        let catalog = default_catalog();
        let mut filter = FilterState::new();
        filter.set_search_term("zzz");
        let nav = build_nav(&derive(&catalog, &filter), false);
        assert!(nav.is_empty());
    }

    #[test]
    fn test_toggle_menu_and_visible() {
        let nav = nav();
        let mut state = SidebarState::new();
        assert_eq!(state.visible(&nav).len(), 5);

        assert!(state.toggle_menu(WORKSHOP_ID));
        assert_eq!(state.visible(&nav).len(), 5 + nav[4].children.len());
        assert_eq!(state.visible(&nav)[5].depth, 1);

        assert!(!state.toggle_menu(WORKSHOP_ID));
        assert_eq!(state.visible(&nav).len(), 5);
    }

    #[test]
    fn test_active_child_expands_parent() {
        let nav = nav();
        let child = nav[4].children[1].id.clone();
        let mut state = SidebarState::new();

        let anchors = vec![
            ("quest-keep".to_string(), 0),
            (WORKSHOP_ID.to_string(), 40),
            (child.clone(), 50),
        ];
        assert!(state.update_active(&nav, &positions_at(&anchors, 51), 2));
        assert_eq!(state.active_id(), Some(child.as_str()));
        assert!(state.is_menu_expanded(WORKSHOP_ID));
        assert!(state.is_highlighted(&nav[4]));
        assert!(!state.is_highlighted(&nav[1]));
    }

    #[test]
    fn test_active_kept_when_nothing_reached() {
        let nav = nav();
        let mut state = SidebarState::new();
        let anchors = vec![("quest-keep".to_string(), 0)];
        state.update_active(&nav, &positions_at(&anchors, 0), 2);

        let below = vec![SectionPosition::new("project-keep", 10)];
        assert!(!state.update_active(&nav, &below, 2));
        assert_eq!(state.active_id(), Some("quest-keep"));
    }

    #[test]
    fn test_selection_bounds() {
        let nav = nav();
        let mut state = SidebarState::new();
        state.select_prev();
        assert_eq!(state.selected(), 0);

        for _ in 0..20 {
            state.select_next(&nav);
        }
        assert_eq!(state.selected(), 4);
        assert_eq!(
            state.selected_entry(&nav).map(|e| e.id.as_str()),
            Some(WORKSHOP_ID)
        );

        state.toggle_menu(WORKSHOP_ID);
        state.select_next(&nav);
        assert_eq!(state.selected(), 5);
        state.toggle_menu(WORKSHOP_ID);
        state.clamp_selection(&nav);
        assert_eq!(state.selected(), 4);
    }
}

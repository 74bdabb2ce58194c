//! Main UI Application
//!
//! Owns the filter, view cache, section visibility and navigation state,
//! and coordinates input handling and rendering.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::config::Settings;
use image::RgbaImage;

use crate::data::{Bucket, Catalog};
use crate::items::{Category, Item};
use crate::ui::content::{ContentLayout, LayoutOptions, QUICK_TIPS_ID, WORKSHOP_ID};
use crate::ui::sidebar::{build_nav, NavEntry, SidebarState, SidebarWidget};
use crate::ui::theme;
use crate::ui::widgets::{ArtworkCache, ArtworkWidget};
use crate::view::{
    positions_at, BulkAction, Debouncer, DerivedView, FilterState, SectionVisibility, ViewCache,
};

const TITLE: &str = "ARC Raiders Recycling Cheat Sheet";
const SUBTITLE: &str =
    "Your comprehensive guide to what to keep, recycle, and use for workshop upgrades";
const SIDEBAR_WIDTH: u16 = 32;
const ARTWORK_WIDTH: u16 = 26;
const CONTENT_MIN_WIDTH: u16 = 20;

/// Which pane receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Content,
    Sidebar,
    Categories,
    Search,
}

impl Focus {
    /// Tab order: content, sidebar, categories
    pub fn next(self) -> Self {
        match self {
            Focus::Content => Focus::Sidebar,
            Focus::Sidebar => Focus::Categories,
            Focus::Categories | Focus::Search => Focus::Content,
        }
    }
}

/// Screen regions
struct ScreenLayout {
    header: Rect,
    search: Rect,
    categories: Rect,
    status: Rect,
    sidebar: Rect,
    content: Rect,
    artwork: Option<Rect>,
    footer: Rect,
}

impl ScreenLayout {
    fn new(area: Rect, show_artwork: bool) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title
                Constraint::Length(3), // Search
                Constraint::Length(4), // Category chips
                Constraint::Length(1), // Status
                Constraint::Min(5),    // Sidebar + content
                Constraint::Length(2), // Footer
            ])
            .split(area);

        // Artwork panel only when the content keeps its minimum width
        let show_artwork =
            show_artwork && area.width >= SIDEBAR_WIDTH + CONTENT_MIN_WIDTH + ARTWORK_WIDTH;
        let body = if show_artwork {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(SIDEBAR_WIDTH),
                    Constraint::Min(CONTENT_MIN_WIDTH),
                    Constraint::Length(ARTWORK_WIDTH),
                ])
                .split(rows[4])
        } else {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(SIDEBAR_WIDTH),
                    Constraint::Min(CONTENT_MIN_WIDTH),
                ])
                .split(rows[4])
        };

        Self {
            header: rows[0],
            search: rows[1],
            categories: rows[2],
            status: rows[3],
            sidebar: body[0],
            content: body[1],
            artwork: body.get(2).copied(),
            footer: rows[5],
        }
    }
}

fn content_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(" Catalog ")
        .border_style(theme::border_style(focused))
}

/// Main UI application
pub struct App {
    catalog: Arc<Catalog>,
    settings: Settings,
    filter: FilterState,
    /// Search text as typed, committed to `filter` after the debounce
    search_draft: String,
    search_debounce: Debouncer<String>,
    cache: ViewCache,
    sections: SectionVisibility,
    sidebar: SidebarState,
    nav: Vec<NavEntry>,
    layout: ContentLayout,
    /// Visibility or tips changed since the last layout
    layout_dirty: bool,
    tips_expanded: bool,
    focus: Focus,
    /// Highlighted chip in the category bar
    chip_cursor: usize,
    /// Content rows scrolled past
    scroll: usize,
    viewport_height: usize,
    artwork: ArtworkCache,
    show_artwork: bool,
}

impl App {
    pub fn new(catalog: Arc<Catalog>, settings: Settings) -> Self {
        let image_dir = settings.image_dir.clone();
        let mut app = Self {
            catalog,
            search_debounce: Debouncer::new(settings.search_debounce()),
            settings,
            filter: FilterState::new(),
            search_draft: String::new(),
            cache: ViewCache::new(),
            sections: SectionVisibility::new(),
            sidebar: SidebarState::new(),
            nav: Vec::new(),
            layout: ContentLayout::default(),
            layout_dirty: true,
            tips_expanded: true,
            focus: Focus::Content,
            chip_cursor: 0,
            scroll: 0,
            viewport_height: 20,
            artwork: ArtworkCache::new(image_dir),
            show_artwork: true,
        };
        app.refresh();
        app
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn search_draft(&self) -> &str {
        &self.search_draft
    }

    pub fn sections(&self) -> &SectionVisibility {
        &self.sections
    }

    pub fn sidebar(&self) -> &SidebarState {
        &self.sidebar
    }

    pub fn nav(&self) -> &[NavEntry] {
        &self.nav
    }

    pub fn layout(&self) -> &ContentLayout {
        &self.layout
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn tips_expanded(&self) -> bool {
        self.tips_expanded
    }

    /// The view for the committed filter state
    pub fn view(&self) -> Option<&DerivedView> {
        self.cache.last()
    }

    /// Number of derivations so far
    pub fn recomputations(&self) -> usize {
        self.cache.recomputations()
    }

    pub fn show_artwork(&self) -> bool {
        self.show_artwork
    }

    /// The item at the top of the content viewport
    pub fn preview_item(&self) -> Option<&Item> {
        self.layout.item_from(self.scroll)
    }

    /// Artwork of the preview item, None when hidden, missing or broken
    pub fn preview_artwork(&self) -> Option<&RgbaImage> {
        if !self.show_artwork {
            return None;
        }
        self.preview_item()
            .and_then(Item::image)
            .and_then(|name| self.artwork.get(name))
    }

    /// Update the content viewport for a terminal of size `area`
    pub fn resize(&mut self, area: Rect) {
        let content = ScreenLayout::new(area, self.show_artwork).content;
        let height = content_block(false).inner(content).height as usize;
        if height != self.viewport_height {
            self.viewport_height = height;
            self.scroll_to(self.scroll);
        }
    }

    /// Advance timers: commit a debounced search, then bring the derived
    /// view, layout and scroll spy up to date.
    pub fn tick(&mut self, now: Instant) {
        if let Some(term) = self.search_debounce.poll(now) {
            if self.filter.set_search_term(term) {
                log::debug!("Search committed: {:?}", self.filter.search_term());
            }
        }
        self.refresh();
    }

    /// Recompute what changed since the last call
    fn refresh(&mut self) {
        let fresh = self.cache.is_fresh(&self.catalog, &self.filter);
        let view = self.cache.get(&self.catalog, &self.filter);
        let registered = self.sections.register_if_absent(view.workshop_section_keys());

        if fresh && !registered && !self.layout_dirty {
            return;
        }

        self.nav = build_nav(view, !self.catalog.tips.is_empty());
        self.layout = ContentLayout::build(
            view,
            &self.sections,
            LayoutOptions {
                tips: &self.catalog.tips,
                tips_expanded: self.tips_expanded,
                filter_active: self.filter.is_active(),
            },
        );
        self.layout_dirty = false;
        self.sidebar.clamp_selection(&self.nav);
        self.scroll_to(self.scroll);
    }

    fn max_scroll(&self) -> usize {
        self.layout.height().saturating_sub(self.viewport_height)
    }

    fn scroll_to(&mut self, row: usize) {
        self.scroll = row.min(self.max_scroll());
        self.update_scroll_spy();
        self.load_preview_artwork();
    }

    fn load_preview_artwork(&mut self) {
        if !self.show_artwork {
            return;
        }
        if let Some(name) = self.layout.item_from(self.scroll).and_then(Item::image) {
            self.artwork.load(name);
        }
    }

    fn toggle_artwork(&mut self) {
        self.show_artwork = !self.show_artwork;
        self.load_preview_artwork();
    }

    fn scroll_by(&mut self, delta: isize) {
        let row = self.scroll.saturating_add_signed(delta);
        self.scroll_to(row);
    }

    fn update_scroll_spy(&mut self) {
        let positions = positions_at(&self.layout.anchors, self.scroll);
        self.sidebar
            .update_active(&self.nav, &positions, self.settings.scroll_spy_threshold);
    }

    /// Scroll so the header of section `id` sits at the top of the viewport
    pub fn jump_to(&mut self, id: &str) {
        if let Some(row) = self.layout.anchor_of(id) {
            self.scroll_to(row);
        }
    }

    /// Section keys the bulk control acts on: the rendered buckets and
    /// the workshop levels in the current view
    fn bulk_keys(&self) -> Vec<String> {
        let Some(view) = self.cache.last() else {
            return Vec::new();
        };
        let mut keys: Vec<String> = Bucket::ALL
            .into_iter()
            .filter(|bucket| !view.bucket(*bucket).is_empty())
            .map(|bucket| bucket.section_key().to_string())
            .collect();
        keys.extend(view.workshop_section_keys());
        keys
    }

    pub fn bulk_action(&self) -> BulkAction {
        self.sections.bulk_action(&self.bulk_keys())
    }

    fn apply_bulk(&mut self) {
        let keys = self.bulk_keys();
        let action = self.sections.apply_bulk(&keys);
        log::debug!("{} ({} sections)", action.label(), keys.len());
        self.layout_dirty = true;
        self.refresh();
    }

    /// Expand or collapse a section by id
    fn toggle_section(&mut self, id: &str) {
        match id {
            QUICK_TIPS_ID => self.tips_expanded = !self.tips_expanded,
            WORKSHOP_ID => {
                self.sidebar.toggle_menu(id);
                self.sidebar.clamp_selection(&self.nav);
                return;
            }
            _ => {
                self.sections.toggle(id);
            }
        }
        self.layout_dirty = true;
        self.refresh();
    }

    fn toggle_chip(&mut self) {
        if let Some(category) = Category::ALL.get(self.chip_cursor) {
            self.filter.toggle_category(*category);
            log::debug!("Categories: {:?}", self.filter.selected_categories());
            self.refresh();
        }
    }

    fn clear_categories(&mut self) {
        self.filter.clear_categories();
        self.refresh();
    }

    fn clear_all(&mut self) {
        self.search_draft.clear();
        self.search_debounce.cancel();
        self.filter.clear_all();
        self.refresh();
    }

    /// Handle keyboard input, returns true if should quit
    pub fn handle_input(&mut self, key: KeyEvent) -> Result<bool> {
        self.handle_input_at(key, Instant::now())
    }

    /// Handle keyboard input with an explicit clock for the search debounce
    pub fn handle_input_at(&mut self, key: KeyEvent, now: Instant) -> Result<bool> {
        // Global quit shortcut
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(true);
        }

        if self.focus == Focus::Search {
            self.handle_search_input(key, now);
            return Ok(false);
        }

        match key.code {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Char('/') => self.focus = Focus::Search,
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::Char('e') => self.apply_bulk(),
            KeyCode::Char('t') => self.toggle_section(QUICK_TIPS_ID),
            KeyCode::Char('p') => self.toggle_artwork(),
            KeyCode::Char('c') => self.clear_categories(),
            KeyCode::Char('x') => self.clear_all(),
            _ => match self.focus {
                Focus::Content => self.handle_content_input(key),
                Focus::Sidebar => self.handle_sidebar_input(key),
                Focus::Categories => self.handle_categories_input(key),
                Focus::Search => {}
            },
        }

        Ok(false)
    }

    fn handle_search_input(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search_draft.clear();
                self.search_debounce.schedule(self.search_draft.clone(), now);
            }
            KeyCode::Char(c)
                if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.search_draft.push(c);
                self.search_debounce.schedule(self.search_draft.clone(), now);
            }
            KeyCode::Backspace => {
                if self.search_draft.pop().is_some() {
                    self.search_debounce.schedule(self.search_draft.clone(), now);
                }
            }
            KeyCode::Enter => {
                // Commit immediately
                self.search_debounce.cancel();
                self.filter.set_search_term(self.search_draft.clone());
                self.focus = Focus::Content;
                self.refresh();
            }
            KeyCode::Esc | KeyCode::Tab => self.focus = Focus::Content,
            _ => {}
        }
    }

    fn handle_content_input(&mut self, key: KeyEvent) {
        let page = self.viewport_height.max(1) as isize;
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::PageDown => self.scroll_by(page),
            KeyCode::PageUp => self.scroll_by(-page),
            KeyCode::Char('g') | KeyCode::Home => self.scroll_to(0),
            KeyCode::Char('G') | KeyCode::End => self.scroll_to(usize::MAX),
            KeyCode::Char(' ') => {
                if let Some(id) = self.sidebar.active_id().map(str::to_string) {
                    self.toggle_section(&id);
                }
            }
            _ => {}
        }
    }

    fn handle_sidebar_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.sidebar.select_next(&self.nav),
            KeyCode::Up | KeyCode::Char('k') => self.sidebar.select_prev(),
            KeyCode::Enter => {
                let Some(entry) = self.sidebar.selected_entry(&self.nav) else {
                    return;
                };
                let (id, is_menu) = (entry.id.clone(), entry.has_children());
                if is_menu {
                    self.sidebar.toggle_menu(&id);
                    self.sidebar.clamp_selection(&self.nav);
                } else {
                    self.jump_to(&id);
                }
            }
            KeyCode::Char(' ') => {
                if let Some(id) = self.sidebar.selected_entry(&self.nav).map(|e| e.id.clone()) {
                    self.toggle_section(&id);
                }
            }
            _ => {}
        }
    }

    fn handle_categories_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.chip_cursor = self.chip_cursor.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.chip_cursor + 1 < Category::ALL.len() {
                    self.chip_cursor += 1;
                }
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_chip(),
            _ => {}
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        frame.render_widget(Clear, frame.area());

        let screen = ScreenLayout::new(frame.area(), self.show_artwork);
        self.render_header(frame, screen.header);
        self.render_search(frame, screen.search);
        self.render_categories(frame, screen.categories);
        self.render_status(frame, screen.status);
        frame.render_widget(
            SidebarWidget::new(&self.nav, &self.sidebar).focused(self.focus == Focus::Sidebar),
            screen.sidebar,
        );
        self.render_content(frame, screen.content);
        if let Some(area) = screen.artwork {
            self.render_artwork(frame, area);
        }
        self.render_footer(frame, screen.footer);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                TITLE,
                Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(SUBTITLE, Style::default().fg(theme::MUTED))),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    fn render_search(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Search;
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Search [/] ")
            .border_style(theme::border_style(focused));

        let line = if self.search_draft.is_empty() && !focused {
            Line::from(Span::styled("Search items...", Style::default().fg(theme::MUTED)))
        } else {
            let mut spans = vec![Span::styled(
                self.search_draft.clone(),
                Style::default().fg(theme::TEXT),
            )];
            if focused {
                spans.push(Span::styled("█", Style::default().fg(theme::ACCENT)));
            }
            Line::from(spans)
        };

        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    fn render_categories(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Categories;
        let mut title = String::from(" Categories ");
        if !self.filter.selected_categories().is_empty() {
            title.push_str("· [c] Clear All ");
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(theme::border_style(focused));

        let mut spans = Vec::new();
        for (i, category) in Category::ALL.iter().enumerate() {
            let mut style = if self.filter.is_selected(*category) {
                theme::badge_style(*category).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::category_color(*category))
            };
            if focused && i == self.chip_cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(format!(" {} ", category), style));
            spans.push(Span::raw(" "));
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans))
                .block(block)
                .wrap(Wrap { trim: true }),
            area,
        );
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        if self.filter.is_active() {
            let total = self.view().map_or(0, |v| v.total);
            let plural = if total == 1 { "" } else { "s" };
            spans.push(Span::styled(
                format!(" Found {} item{}", total, plural),
                Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            format!(" [e] {} ", self.bulk_action().label()),
            Style::default().fg(theme::MUTED),
        ));
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_content(&self, frame: &mut Frame, area: Rect) {
        let block = content_block(self.focus == Focus::Content);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let start = self.scroll.min(self.layout.height());
        let end = (start + inner.height as usize).min(self.layout.height());
        let lines = self.layout.lines[start..end].to_vec();
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_artwork(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Artwork ")
            .border_style(theme::border_style(false));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(item) = self.preview_item() else {
            return;
        };
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(inner);

        let caption = vec![
            Line::from(Span::styled(
                item.name.clone(),
                Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                item.tier.name(),
                Style::default().fg(theme::tier_color(item.tier)),
            )),
        ];
        frame.render_widget(Paragraph::new(caption).alignment(Alignment::Center), rows[0]);

        if let Some(image) = self.preview_artwork() {
            frame.render_widget(ArtworkWidget::new(image), rows[1]);
        }
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "[/] search  [Tab] focus  [j/k] scroll  [Space] toggle  [Enter] jump  [e] expand/collapse  [t] tips  [p] artwork  [x] clear  [q] quit",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                format!(
                    "{} - Community Resource · Data compiled from game sources. Not affiliated with ARC Raiders or Tower Five.",
                    TITLE
                ),
                Style::default().fg(theme::MUTED),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}

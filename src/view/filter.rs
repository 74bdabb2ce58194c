//! Filter state and the item match predicate

use std::collections::BTreeSet;

use crate::items::{Category, Item};

/// Search term and category selection driving the catalog view
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterState {
    search_term: String,
    selected_categories: BTreeSet<Category>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn selected_categories(&self) -> &BTreeSet<Category> {
        &self.selected_categories
    }

    pub fn is_selected(&self, category: Category) -> bool {
        self.selected_categories.contains(&category)
    }

    /// Replace the search term. Returns true if it changed.
    pub fn set_search_term(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if term == self.search_term {
            return false;
        }
        self.search_term = term;
        true
    }

    /// Add or remove a category from the selection
    pub fn toggle_category(&mut self, category: Category) {
        if !self.selected_categories.remove(&category) {
            self.selected_categories.insert(category);
        }
    }

    pub fn clear_categories(&mut self) {
        self.selected_categories.clear();
    }

    /// Reset both the search term and the category selection
    pub fn clear_all(&mut self) {
        self.search_term.clear();
        self.selected_categories.clear();
    }

    /// True when any restriction is in effect
    pub fn is_active(&self) -> bool {
        !self.search_term.is_empty() || !self.selected_categories.is_empty()
    }
}

/// Decide whether a single item matches a search term and category selection.
///
/// The search term is a case-insensitive substring of the item name (empty
/// matches everything). An empty category selection places no restriction;
/// otherwise the item must share at least one tag with it.
pub fn matches(item: &Item, search_term: &str, selected_categories: &BTreeSet<Category>) -> bool {
    let term = search_term.to_lowercase();
    name_matches(&item.name, &term) && category_matches(item, selected_categories)
}

fn name_matches(name: &str, lowered_term: &str) -> bool {
    lowered_term.is_empty() || name.to_lowercase().contains(lowered_term)
}

fn category_matches(item: &Item, selected: &BTreeSet<Category>) -> bool {
    selected.is_empty() || item.category.iter().any(|c| selected.contains(c))
}

/// A filter prepared once per derivation pass
pub struct ItemFilter<'a> {
    lowered_term: String,
    selected: &'a BTreeSet<Category>,
}

impl<'a> ItemFilter<'a> {
    pub fn new(state: &'a FilterState) -> Self {
        Self {
            lowered_term: state.search_term.to_lowercase(),
            selected: &state.selected_categories,
        }
    }

    pub fn matches(&self, item: &Item) -> bool {
        name_matches(&item.name, &self.lowered_term) && category_matches(item, self.selected)
    }

    /// Stable filter: matching items in input order
    pub fn apply(&self, items: &[Item]) -> Vec<Item> {
        items.iter().filter(|item| self.matches(item)).cloned().collect()
    }
}

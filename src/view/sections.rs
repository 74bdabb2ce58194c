//! Section visibility
//!
//! Tracks which catalog sections are expanded. The three bucket sections
//! start expanded; workshop sections register lazily the first time they
//! appear and are never pruned.

use std::collections::HashMap;

use crate::data::Bucket;

/// Bulk action offered by the expand/collapse-all control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    ExpandAll,
    CollapseAll,
}

impl BulkAction {
    pub fn label(&self) -> &'static str {
        match self {
            BulkAction::ExpandAll => "Expand All",
            BulkAction::CollapseAll => "Collapse All",
        }
    }
}

/// Expanded/collapsed flag per section key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionVisibility {
    expanded: HashMap<String, bool>,
}

impl SectionVisibility {
    /// Create the store with the fixed bucket sections expanded
    pub fn new() -> Self {
        let expanded = Bucket::ALL
            .iter()
            .map(|b| (b.section_key().to_string(), true))
            .collect();
        Self { expanded }
    }

    /// Expanded state; untracked keys count as expanded
    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.get(key).copied().unwrap_or(true)
    }

    pub fn is_tracked(&self, key: &str) -> bool {
        self.expanded.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    /// Flip a section and return its new state
    pub fn toggle(&mut self, key: &str) -> bool {
        let next = !self.is_expanded(key);
        self.expanded.insert(key.to_string(), next);
        next
    }

    pub fn collapse_all<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.set_all(keys, false);
    }

    pub fn expand_all<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.set_all(keys, true);
    }

    fn set_all<I, S>(&mut self, keys: I, value: bool)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for key in keys {
            self.expanded.insert(key.as_ref().to_string(), value);
        }
    }

    /// Track any keys not seen before as expanded.
    ///
    /// Existing state is never overwritten. Returns false when nothing was
    /// new, so callers can skip relayout.
    pub fn register_if_absent<I, S>(&mut self, keys: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut inserted = false;
        for key in keys {
            let key = key.as_ref();
            if !self.expanded.contains_key(key) {
                self.expanded.insert(key.to_string(), true);
                inserted = true;
            }
        }
        inserted
    }

    /// True if every key is expanded (vacuously true for no keys)
    pub fn all_expanded<I, S>(&self, keys: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        keys.into_iter().all(|k| self.is_expanded(k.as_ref()))
    }

    /// True if every key is collapsed (vacuously true for no keys)
    pub fn all_collapsed<I, S>(&self, keys: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        keys.into_iter().all(|k| !self.is_expanded(k.as_ref()))
    }

    /// Expand when every current section is collapsed, collapse otherwise
    pub fn bulk_action<S: AsRef<str>>(&self, keys: &[S]) -> BulkAction {
        if !keys.is_empty() && self.all_collapsed(keys) {
            BulkAction::ExpandAll
        } else {
            BulkAction::CollapseAll
        }
    }

    /// Perform the currently offered bulk action and return it
    pub fn apply_bulk<S: AsRef<str>>(&mut self, keys: &[S]) -> BulkAction {
        let action = self.bulk_action(keys);
        match action {
            BulkAction::ExpandAll => self.expand_all(keys),
            BulkAction::CollapseAll => self.collapse_all(keys),
        }
        action
    }
}

impl Default for SectionVisibility {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXED: [&str; 3] = ["quest-keep", "project-keep", "recycle-safe"];

    #[test]
    fn test_fixed_keys_start_expanded() {
        let sections = SectionVisibility::new();
        for key in FIXED {
            assert!(sections.is_tracked(key));
            assert!(sections.is_expanded(key));
        }
        assert_eq!(sections.len(), 3);
    }

    #[test]
    fn test_toggle_untracked_key_collapses() {
        let mut sections = SectionVisibility::new();
        assert!(!sections.toggle("workshop-gunsmith-1-0"));
        assert!(!sections.is_expanded("workshop-gunsmith-1-0"));
        assert!(sections.toggle("workshop-gunsmith-1-0"));
    }

    #[test]
    fn test_toggle_fixed_key() {
        let mut sections = SectionVisibility::new();
        assert!(!sections.toggle("quest-keep"));
        assert!(sections.is_expanded("project-keep"));
    }

    #[test]
    fn test_bulk_set_touches_only_given_keys() {
        let mut sections = SectionVisibility::new();
        sections.collapse_all(["quest-keep", "project-keep"]);
        assert!(!sections.is_expanded("quest-keep"));
        assert!(!sections.is_expanded("project-keep"));
        assert!(sections.is_expanded("recycle-safe"));
        assert!(!sections.is_tracked("workshop-refiner-2-3"));

        sections.expand_all(["project-keep"]);
        assert!(sections.is_expanded("project-keep"));
        assert!(!sections.is_expanded("quest-keep"));
        assert_eq!(sections.len(), 3);
    }

    #[test]
    fn test_register_if_absent_never_overwrites() {
        let mut sections = SectionVisibility::new();
        sections.toggle("quest-keep");

        assert!(sections.register_if_absent(["quest-keep", "workshop-gunsmith-1-0"]));
        assert!(!sections.is_expanded("quest-keep"));
        assert!(sections.is_expanded("workshop-gunsmith-1-0"));

        sections.toggle("workshop-gunsmith-1-0");
        assert!(!sections.register_if_absent(["workshop-gunsmith-1-0"]));
        assert!(!sections.is_expanded("workshop-gunsmith-1-0"));
    }

    #[test]
    fn test_register_no_new_keys_is_noop() {
        let mut sections = SectionVisibility::new();
        let before = sections.clone();
        assert!(!sections.register_if_absent(FIXED));
        assert!(!sections.register_if_absent(Vec::<String>::new()));
        assert_eq!(sections, before);
    }

    #[test]
    fn test_stale_keys_persist() {
        let mut sections = SectionVisibility::new();
        sections.register_if_absent(["workshop-scrappy-5-20"]);
        sections.register_if_absent(["workshop-gunsmith-1-0"]);
        assert!(sections.is_tracked("workshop-scrappy-5-20"));
        assert_eq!(sections.len(), 5);
    }

    #[test]
    fn test_aggregate_queries() {
        let mut sections = SectionVisibility::new();
        assert!(sections.all_expanded(FIXED));
        assert!(!sections.all_collapsed(FIXED));

        sections.toggle("quest-keep");
        assert!(!sections.all_expanded(FIXED));
        assert!(!sections.all_collapsed(FIXED));

        sections.collapse_all(FIXED);
        assert!(sections.all_collapsed(FIXED));
    }

    #[test]
    fn test_bulk_action_choice() {
        let mut sections = SectionVisibility::new();
        assert_eq!(sections.bulk_action(&FIXED), BulkAction::CollapseAll);

        sections.toggle("quest-keep");
        assert_eq!(sections.bulk_action(&FIXED), BulkAction::CollapseAll);

        sections.collapse_all(FIXED);
        assert_eq!(sections.bulk_action(&FIXED), BulkAction::ExpandAll);
        assert_eq!(sections.bulk_action(&FIXED).label(), "Expand All");

        let none: [&str; 0] = [];
        assert_eq!(sections.bulk_action(&none), BulkAction::CollapseAll);
    }

    #[test]
    fn test_apply_bulk_flips_between_states() {
        let mut sections = SectionVisibility::new();
        assert_eq!(sections.apply_bulk(&FIXED), BulkAction::CollapseAll);
        assert!(sections.all_collapsed(FIXED));
        assert_eq!(sections.apply_bulk(&FIXED), BulkAction::ExpandAll);
        assert!(sections.all_expanded(FIXED));
    }
}

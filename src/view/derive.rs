//! View derivation
//!
//! Computes the filtered buckets, the non-empty workshop upgrade groups, and
//! the total match count from the catalog and the current filter state.

use std::sync::Arc;

use crate::data::{Bucket, Catalog};
use crate::items::Item;
use super::filter::{FilterState, ItemFilter};

/// Items one bench level needs that survived filtering
#[derive(Debug, Clone, PartialEq)]
pub struct WorkshopGroup {
    /// Human-readable bench name ("medical Lab")
    pub bench: String,
    /// Numeric level, `None` when the level id had no number
    pub level: Option<u32>,
    pub items: Vec<Item>,
}

impl WorkshopGroup {
    /// Level for display; unparseable levels show as "?"
    pub fn level_label(&self) -> String {
        match self.level {
            Some(level) => level.to_string(),
            None => "?".to_string(),
        }
    }

    /// Section heading, e.g. "Medical Lab - Level 2"
    pub fn title(&self) -> String {
        let mut chars = self.bench.chars();
        let bench: String = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        format!("{} - Level {}", bench, self.level_label())
    }

    /// Expand/collapse key for the group at `index` in the derived list
    pub fn section_key(&self, index: usize) -> String {
        format!("workshop-{}-{}-{}", self.bench, self.level_label(), index)
    }
}

/// Everything the presentation layer needs for one filter state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DerivedView {
    pub quest_keep: Vec<Item>,
    pub project_keep: Vec<Item>,
    pub recycle_safe: Vec<Item>,
    pub workshop: Vec<WorkshopGroup>,
    /// Matches across buckets and workshop groups
    pub total: usize,
}

impl DerivedView {
    pub fn bucket(&self, bucket: Bucket) -> &[Item] {
        match bucket {
            Bucket::QuestKeep => &self.quest_keep,
            Bucket::ProjectKeep => &self.project_keep,
            Bucket::RecycleSafe => &self.recycle_safe,
        }
    }

    /// Section keys of the workshop groups currently present
    pub fn workshop_section_keys(&self) -> Vec<String> {
        self.workshop
            .iter()
            .enumerate()
            .map(|(index, group)| group.section_key(index))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Turn a bench id into a display name: a space before every capital
/// letter, then trimmed ("explosivesStation" -> "explosives Station").
pub fn humanize_bench(id: &str) -> String {
    let mut out = String::with_capacity(id.len() + 4);
    for c in id.chars() {
        if c.is_ascii_uppercase() {
            out.push(' ');
        }
        out.push(c);
    }
    out.trim().to_string()
}

/// Parse the number out of a level id such as "level3".
///
/// The first "level" is removed and the leading integer of the rest is
/// read. Ids without a leading number, or with a negative one, give `None`.
pub fn parse_level(id: &str) -> Option<u32> {
    let rest = id.replacen("level", "", 1);
    let rest = rest.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() || negative {
        return None;
    }
    digits.parse().ok()
}

/// Derive the filtered view of `catalog` for `filter`
pub fn derive(catalog: &Catalog, filter: &FilterState) -> DerivedView {
    let item_filter = ItemFilter::new(filter);

    let quest_keep = item_filter.apply(&catalog.keep_for_quests);
    let project_keep = item_filter.apply(&catalog.keep_for_projects);
    let recycle_safe = item_filter.apply(&catalog.safe_to_recycle);

    let mut workshop = Vec::new();
    for (bench, levels) in &catalog.workshop_upgrades {
        for (level, items) in levels {
            let items = item_filter.apply(items);
            if items.is_empty() {
                continue;
            }
            workshop.push(WorkshopGroup {
                bench: humanize_bench(bench),
                level: parse_level(level),
                items,
            });
        }
    }

    let total = quest_keep.len()
        + project_keep.len()
        + recycle_safe.len()
        + workshop.iter().map(|g| g.items.len()).sum::<usize>();

    DerivedView {
        quest_keep,
        project_keep,
        recycle_safe,
        workshop,
        total,
    }
}

struct CacheEntry {
    catalog: Arc<Catalog>,
    filter: FilterState,
    view: DerivedView,
}

/// Memoizes the last derivation, keyed by catalog identity and filter value
#[derive(Default)]
pub struct ViewCache {
    entry: Option<CacheEntry>,
    recomputations: usize,
}

impl ViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `get` would return the cached view without recomputing
    pub fn is_fresh(&self, catalog: &Arc<Catalog>, filter: &FilterState) -> bool {
        self.entry
            .as_ref()
            .is_some_and(|e| Arc::ptr_eq(&e.catalog, catalog) && e.filter == *filter)
    }

    /// Get the view for `filter`, deriving it only if the inputs changed
    pub fn get(&mut self, catalog: &Arc<Catalog>, filter: &FilterState) -> &DerivedView {
        let fresh = self.is_fresh(catalog, filter);
        let entry = match self.entry.take() {
            Some(entry) if fresh => entry,
            _ => {
                self.recomputations += 1;
                let view = derive(catalog, filter);
                log::debug!(
                    "Derived view for {:?} / {:?}: {} matches",
                    filter.search_term(),
                    filter.selected_categories(),
                    view.total
                );
                CacheEntry {
                    catalog: Arc::clone(catalog),
                    filter: filter.clone(),
                    view,
                }
            }
        };
        &self.entry.insert(entry).view
    }

    /// The most recently derived view, if any
    pub fn last(&self) -> Option<&DerivedView> {
        self.entry.as_ref().map(|e| &e.view)
    }

    /// Number of derivations performed so far
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}

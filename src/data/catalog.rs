//! Catalog structure
//!
//! The three fixed item buckets, workshop upgrade requirements, and tips.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::items::Item;

/// Items required per level, keyed by level id ("level1", "level2", ...)
pub type BenchLevels = IndexMap<String, Vec<Item>>;

/// Upgrade requirements keyed by bench id, in declaration order
pub type WorkshopUpgrades = IndexMap<String, BenchLevels>;

/// The fixed top-level item groupings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bucket {
    QuestKeep,
    ProjectKeep,
    RecycleSafe,
}

impl Bucket {
    /// Buckets in page order
    pub const ALL: [Bucket; 3] = [Bucket::QuestKeep, Bucket::ProjectKeep, Bucket::RecycleSafe];

    pub fn title(&self) -> &'static str {
        match self {
            Bucket::QuestKeep => "Keep for Quests",
            Bucket::ProjectKeep => "Keep for Projects",
            Bucket::RecycleSafe => "Safe to Recycle",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Bucket::QuestKeep => "Quest-critical items that you should save",
            Bucket::ProjectKeep => "Crafting materials needed in large quantities",
            Bucket::RecycleSafe => "Items that can be safely recycled without worry",
        }
    }

    /// Stable section key used for expand/collapse tracking
    pub fn section_key(&self) -> &'static str {
        match self {
            Bucket::QuestKeep => "quest-keep",
            Bucket::ProjectKeep => "project-keep",
            Bucket::RecycleSafe => "recycle-safe",
        }
    }
}

/// The full, immutable item catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub keep_for_quests: Vec<Item>,
    pub keep_for_projects: Vec<Item>,
    pub safe_to_recycle: Vec<Item>,
    pub workshop_upgrades: WorkshopUpgrades,
    #[serde(default)]
    pub tips: Vec<String>,
}

impl Catalog {
    /// Items in one of the fixed buckets
    pub fn bucket(&self, bucket: Bucket) -> &[Item] {
        match bucket {
            Bucket::QuestKeep => &self.keep_for_quests,
            Bucket::ProjectKeep => &self.keep_for_projects,
            Bucket::RecycleSafe => &self.safe_to_recycle,
        }
    }

    /// Total number of item entries, workshop requirements included
    pub fn len(&self) -> usize {
        let buckets: usize = Bucket::ALL.iter().map(|b| self.bucket(*b).len()).sum();
        let workshop: usize = self
            .workshop_upgrades
            .values()
            .flat_map(|levels| levels.values())
            .map(|items| items.len())
            .sum();
        buckets + workshop
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{Category, Tier};

    #[test]
    fn test_catalog_len_counts_workshop() {
        let mut catalog = Catalog::default();
        assert!(catalog.is_empty());

        catalog.keep_for_quests.push(Item::new("Medkit", &[Category::Medical], 50, Tier::Rare));
        let mut levels = BenchLevels::new();
        levels.insert(
            "level1".to_string(),
            vec![
                Item::new("Metal Parts", &[Category::Mechanical], 75, Tier::Material),
                Item::new("Rubber Parts", &[Category::Industrial], 50, Tier::Material),
            ],
        );
        catalog.workshop_upgrades.insert("gunsmith".to_string(), levels);

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.bucket(Bucket::QuestKeep).len(), 1);
        assert!(catalog.bucket(Bucket::RecycleSafe).is_empty());
    }
}

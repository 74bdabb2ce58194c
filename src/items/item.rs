//! Item definitions
//!
//! Catalog item records, rarity tiers, and category tags.

use serde::{Deserialize, Serialize};

/// Item rarity tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tier {
    #[default]
    Common,     // Dark blue
    Uncommon,   // Dark green
    Rare,       // Purple
    Epic,       // Bright purple
    Legendary,  // Gold
    Material,   // Orange/brown - crafting materials
}

impl Tier {
    /// Get card background color RGB
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Tier::Common => (0x2a, 0x3f, 0x5f),
            Tier::Uncommon => (0x2d, 0x50, 0x16),
            Tier::Rare => (0x4a, 0x2c, 0x6b),
            Tier::Epic => (0x6b, 0x2c, 0x8f),
            Tier::Legendary => (0x8b, 0x69, 0x14),
            Tier::Material => (0x6b, 0x3d, 0x1e),
        }
    }

    /// Get tier name
    pub fn name(&self) -> &'static str {
        match self {
            Tier::Common => "Common",
            Tier::Uncommon => "Uncommon",
            Tier::Rare => "Rare",
            Tier::Epic => "Epic",
            Tier::Legendary => "Legendary",
            Tier::Material => "Material",
        }
    }
}

/// Thematic category tags used for filtering
///
/// Declaration order is the order chips are shown in the category bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "ARC")]
    Arc,
    Residential,
    Medical,
    Industrial,
    Security,
    Electrical,
    Mechanical,
    Commercial,
    Technological,
    Exodus,
    Nature,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 11] = [
        Category::Arc,
        Category::Residential,
        Category::Medical,
        Category::Industrial,
        Category::Security,
        Category::Electrical,
        Category::Mechanical,
        Category::Commercial,
        Category::Technological,
        Category::Exodus,
        Category::Nature,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Arc => "ARC",
            Category::Residential => "Residential",
            Category::Medical => "Medical",
            Category::Industrial => "Industrial",
            Category::Security => "Security",
            Category::Electrical => "Electrical",
            Category::Mechanical => "Mechanical",
            Category::Commercial => "Commercial",
            Category::Technological => "Technological",
            Category::Exodus => "Exodus",
            Category::Nature => "Nature",
        }
    }

    /// Get badge color RGB
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Category::Arc => (147, 51, 234),           // purple
            Category::Residential => (37, 99, 235),    // blue
            Category::Medical => (22, 163, 74),        // green
            Category::Industrial => (202, 138, 4),     // yellow
            Category::Security => (220, 38, 38),       // red
            Category::Electrical => (8, 145, 178),     // cyan
            Category::Mechanical => (234, 88, 12),     // orange
            Category::Commercial => (219, 39, 119),    // pink
            Category::Technological => (79, 70, 229),  // indigo
            Category::Exodus => (13, 148, 136),        // teal
            Category::Nature => (101, 163, 13),        // lime
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Display name, also the search target
    pub name: String,
    /// Category tags (never empty in shipped data)
    pub category: Vec<Category>,
    /// Carry weight
    #[serde(default)]
    pub weight: Option<f32>,
    /// In-game sell value
    pub value: u32,
    /// Required amount, free text ("x5")
    #[serde(default)]
    pub quantity: Option<String>,
    pub tier: Tier,
    /// Image asset filename; empty when there is no artwork
    #[serde(default)]
    pub image: String,
}

impl Item {
    /// Create a new item with no weight, quantity or artwork
    pub fn new(name: impl Into<String>, category: &[Category], value: u32, tier: Tier) -> Self {
        Self {
            name: name.into(),
            category: category.to_vec(),
            weight: None,
            value,
            quantity: None,
            tier,
            image: String::new(),
        }
    }

    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = Some(quantity.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Check whether the item carries a category tag
    pub fn has_category(&self, category: Category) -> bool {
        self.category.contains(&category)
    }

    /// Image filename, if the item has one
    pub fn image(&self) -> Option<&str> {
        let name = self.image.trim();
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }
}

/// Format a value with thousands separators ("12,500")
pub fn format_value(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(0), "0");
        assert_eq!(format_value(640), "640");
        assert_eq!(format_value(1000), "1,000");
        assert_eq!(format_value(12500), "12,500");
        assert_eq!(format_value(1234567), "1,234,567");
    }

    #[test]
    fn test_item_image() {
        let item = Item::new("Rusted Gear", &[Category::Mechanical], 270, Tier::Uncommon);
        assert_eq!(item.image(), None);

        let item = item.with_image("rusted_gear.png");
        assert_eq!(item.image(), Some("rusted_gear.png"));
    }

    #[test]
    fn test_category_ron_names() {
        let ron = ron::to_string(&vec![Category::Arc, Category::Medical]).unwrap();
        assert_eq!(ron, "[ARC,Medical]");
        let parsed: Vec<Category> = ron::from_str("[ARC, Exodus]").unwrap();
        assert_eq!(parsed, vec![Category::Arc, Category::Exodus]);
    }
}

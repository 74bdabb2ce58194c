//! Built-in catalog data
//!
//! Hardcoded defaults compiled into the binary. `assets/data/catalog.ron`
//! overrides these when present.

use crate::items::{Category, Category::*, Item, Tier};
use super::catalog::{BenchLevels, Catalog, WorkshopUpgrades};

/// Quest-critical items
pub fn keep_for_quests() -> Vec<Item> {
    vec![
        Item::new("Leaper Pulse Unit", &[Arc], 5_000, Tier::Epic)
            .with_weight(1.0)
            .with_image("leaper_pulse_unit.png"),
        Item::new("Power Rod", &[Arc, Electrical], 5_000, Tier::Epic)
            .with_weight(1.5)
            .with_image("power_rod.png"),
        Item::new("Rocketeer Driver", &[Arc], 3_000, Tier::Rare)
            .with_weight(1.0)
            .with_image("rocketeer_driver.png"),
        Item::new("Surveyor Vault", &[Arc, Technological], 2_000, Tier::Rare)
            .with_weight(1.0)
            .with_image("surveyor_vault.png"),
        Item::new("Antiseptic", &[Medical], 1_000, Tier::Rare)
            .with_weight(0.25)
            .with_quantity("x2")
            .with_image("antiseptic.png"),
        Item::new("Hornet Driver", &[Arc], 2_000, Tier::Rare)
            .with_weight(1.0)
            .with_image("hornet_driver.png"),
        Item::new("Syringe", &[Medical], 500, Tier::Uncommon)
            .with_weight(0.1)
            .with_image("syringe.png"),
        Item::new("Wasp Driver", &[Arc], 1_000, Tier::Uncommon)
            .with_weight(1.0)
            .with_image("wasp_driver.png"),
        Item::new("Water Pump", &[Industrial, Mechanical], 1_000, Tier::Rare)
            .with_weight(3.0)
            .with_image("water_pump.png"),
        Item::new("Snitch Scanner", &[Arc, Security], 2_000, Tier::Rare)
            .with_weight(1.0)
            .with_image("snitch_scanner.png"),
        Item::new("Industrial Battery", &[Electrical, Industrial], 1_000, Tier::Rare)
            .with_weight(2.0)
            .with_image("industrial_battery.png"),
        Item::new("Music Box", &[Residential], 750, Tier::Rare)
            .with_weight(0.5)
            .with_image("music_box.png"),
        Item::new("Great Mullein", &[Nature, Medical], 300, Tier::Uncommon)
            .with_weight(0.1)
            .with_image("great_mullein.png"),
        Item::new("Security Code", &[Security, Exodus], 2_500, Tier::Epic)
            .with_weight(0.1)
            .with_image("security_code.png"),
    ]
}

/// Materials needed in bulk for projects
pub fn keep_for_projects() -> Vec<Item> {
    vec![
        Item::new("Metal Parts", &[Mechanical, Industrial], 75, Tier::Material)
            .with_weight(0.25)
            .with_quantity("x150")
            .with_image("metal_parts.png"),
        Item::new("Rubber Parts", &[Industrial], 50, Tier::Material)
            .with_weight(0.25)
            .with_quantity("x200")
            .with_image("rubber_parts.png"),
        Item::new("ARC Alloy", &[Arc], 200, Tier::Uncommon)
            .with_weight(0.5)
            .with_quantity("x80")
            .with_image("arc_alloy.png"),
        Item::new("Steel Spring", &[Mechanical], 300, Tier::Uncommon)
            .with_weight(0.25)
            .with_quantity("x15")
            .with_image("steel_spring.png"),
        Item::new("Durable Cloth", &[Residential, Commercial], 640, Tier::Uncommon)
            .with_weight(0.25)
            .with_quantity("x35")
            .with_image("durable_cloth.png"),
        Item::new("Wires", &[Electrical], 200, Tier::Uncommon)
            .with_weight(0.25)
            .with_quantity("x30")
            .with_image("wires.png"),
        Item::new("Electrical Components", &[Electrical, Technological], 640, Tier::Uncommon)
            .with_weight(0.5)
            .with_quantity("x30")
            .with_image("electrical_components.png"),
        Item::new("Cooling Fan", &[Electrical, Mechanical], 1_000, Tier::Rare)
            .with_weight(1.0)
            .with_quantity("x5")
            .with_image("cooling_fan.png"),
        Item::new("Light Bulb", &[Electrical, Residential], 2_000, Tier::Rare)
            .with_weight(0.25)
            .with_quantity("x5")
            .with_image("light_bulb.png"),
        Item::new("Battery", &[Electrical], 250, Tier::Uncommon)
            .with_weight(0.25)
            .with_quantity("x30")
            .with_image("battery.png"),
        Item::new("Sensors", &[Technological, Security], 500, Tier::Rare)
            .with_weight(0.25)
            .with_quantity("x20")
            .with_image("sensors.png"),
        Item::new("Humidifier", &[Residential, Electrical], 1_000, Tier::Rare)
            .with_weight(2.0)
            .with_quantity("x5")
            .with_image("humidifier.png"),
        Item::new("Advanced Electrical Components", &[Electrical, Technological], 1_750, Tier::Rare)
            .with_weight(0.5)
            .with_quantity("x5")
            .with_image("advanced_electrical_components.png"),
        Item::new("Magnetic Accelerator", &[Arc, Technological], 5_500, Tier::Epic)
            .with_weight(1.0)
            .with_quantity("x3")
            .with_image("magnetic_accelerator.png"),
        Item::new("Exodus Modules", &[Exodus, Technological], 2_750, Tier::Epic)
            .with_weight(0.5)
            .with_quantity("x3")
            .with_image("exodus_modules.png"),
        Item::new("Fabric", &[Residential, Commercial], 50, Tier::Material)
            .with_weight(0.25)
            .with_quantity("x100")
            .with_image("fabric.png"),
    ]
}

/// Junk that only ever gets recycled or sold
pub fn safe_to_recycle() -> Vec<Item> {
    vec![
        Item::new("Broken Flashlight", &[Electrical, Residential], 1_000, Tier::Uncommon)
            .with_weight(0.5)
            .with_image("broken_flashlight.png"),
        Item::new("Expired Pasta", &[Residential, Commercial], 80, Tier::Common)
            .with_weight(0.25)
            .with_image("expired_pasta.png"),
        Item::new("Rubber Duck", &[Residential], 1_000, Tier::Common)
            .with_weight(0.1)
            .with_image("rubber_duck.png"),
        Item::new("Torn Blanket", &[Residential], 300, Tier::Common)
            .with_weight(0.5)
            .with_image("torn_blanket.png"),
        Item::new("Burned ARC Circuitry", &[Arc], 640, Tier::Uncommon)
            .with_weight(0.5)
            .with_image("burned_arc_circuitry.png"),
        Item::new("Damaged ARC Motion Core", &[Arc, Mechanical], 1_000, Tier::Rare)
            .with_weight(1.0)
            .with_image("damaged_arc_motion_core.png"),
        Item::new("Candle Holder", &[Residential], 640, Tier::Uncommon)
            .with_weight(0.5)
            .with_image("candle_holder.png"),
        Item::new("Coffee Pot", &[Residential, Commercial], 1_000, Tier::Uncommon)
            .with_weight(1.0)
            .with_image("coffee_pot.png"),
        Item::new("Toaster", &[Residential, Electrical], 1_000, Tier::Rare)
            .with_weight(2.0)
            .with_image("toaster.png"),
        Item::new("Air Freshener", &[Commercial], 2_000, Tier::Uncommon)
            .with_weight(0.1)
            .with_image("air_freshener.png"),
        Item::new("Dog Collar", &[Residential], 640, Tier::Rare)
            .with_weight(0.1)
            .with_image("dog_collar.png"),
        Item::new("Film Reel", &[Commercial], 2_000, Tier::Rare)
            .with_weight(0.5)
            .with_image("film_reel.png"),
        Item::new("Headphones", &[Electrical, Commercial], 640, Tier::Uncommon)
            .with_weight(0.5)
            .with_image("headphones.png"),
        Item::new("Alarm Clock", &[Residential, Electrical], 1_000, Tier::Rare)
            .with_weight(0.5)
            .with_image("alarm_clock.png"),
        Item::new("Frying Pan", &[Residential, Industrial], 300, Tier::Common)
            .with_weight(1.5)
            .with_image("frying_pan.png"),
        Item::new("Radio", &[Electrical, Technological], 1_000, Tier::Uncommon)
            .with_weight(1.5)
            .with_image("radio.png"),
        Item::new("Tattered Clothes", &[Residential], 80, Tier::Common)
            .with_weight(0.25)
            .with_image("tattered_clothes.png"),
        Item::new("Resin", &[Nature, Industrial], 640, Tier::Uncommon)
            .with_weight(0.25)
            .with_image("resin.png"),
    ]
}

fn bench(levels: Vec<(&str, Vec<Item>)>) -> BenchLevels {
    levels
        .into_iter()
        .map(|(id, items)| (id.to_string(), items))
        .collect()
}

fn req(name: &str, category: &[Category], value: u32, tier: Tier, quantity: &str) -> Item {
    let image = format!("{}.png", name.to_lowercase().replace(' ', "_"));
    Item::new(name, category, value, tier)
        .with_quantity(quantity)
        .with_image(image)
}

/// Workshop upgrade requirements, benches and levels in unlock order
pub fn workshop_upgrades() -> WorkshopUpgrades {
    let mut upgrades = WorkshopUpgrades::new();

    upgrades.insert(
        "gunsmith".to_string(),
        bench(vec![
            ("level1", vec![
                req("Metal Parts", &[Mechanical, Industrial], 75, Tier::Material, "x20"),
                req("Rubber Parts", &[Industrial], 50, Tier::Material, "x30"),
            ]),
            ("level2", vec![
                req("Rusted Tools", &[Mechanical, Industrial], 640, Tier::Uncommon, "x3"),
                req("Mechanical Components", &[Mechanical], 640, Tier::Uncommon, "x5"),
                req("Wasp Driver", &[Arc], 1_000, Tier::Uncommon, "x8"),
            ]),
            ("level3", vec![
                req("Rusted Gear", &[Mechanical], 1_000, Tier::Rare, "x3"),
                req("Advanced Mechanical Components", &[Mechanical, Technological], 1_750, Tier::Rare, "x5"),
                req("Sentinel Firing Core", &[Arc, Security], 2_000, Tier::Rare, "x4"),
            ]),
        ]),
    );

    upgrades.insert(
        "gearBench".to_string(),
        bench(vec![
            ("level1", vec![
                req("Plastic Parts", &[Industrial, Commercial], 60, Tier::Material, "x25"),
                req("Fabric", &[Residential, Commercial], 50, Tier::Material, "x30"),
            ]),
            ("level2", vec![
                req("Power Cable", &[Electrical], 640, Tier::Uncommon, "x3"),
                req("Electrical Components", &[Electrical, Technological], 640, Tier::Uncommon, "x5"),
                req("Hornet Driver", &[Arc], 2_000, Tier::Rare, "x5"),
            ]),
            ("level3", vec![
                req("Industrial Battery", &[Electrical, Industrial], 1_000, Tier::Rare, "x3"),
                req("Advanced Electrical Components", &[Electrical, Technological], 1_750, Tier::Rare, "x5"),
                req("Bastion Cell", &[Arc], 5_000, Tier::Epic, "x6"),
            ]),
        ]),
    );

    upgrades.insert(
        "medicalLab".to_string(),
        bench(vec![
            ("level1", vec![
                req("Fabric", &[Residential, Commercial], 50, Tier::Material, "x50"),
                req("ARC Alloy", &[Arc], 200, Tier::Uncommon, "x6"),
            ]),
            ("level2", vec![
                req("Cracked Bioscanner", &[Medical, Technological], 1_000, Tier::Uncommon, "x2"),
                req("Durable Cloth", &[Residential, Commercial], 640, Tier::Uncommon, "x5"),
                req("Tick Pod", &[Arc], 640, Tier::Uncommon, "x8"),
            ]),
            ("level3", vec![
                req("Rusted Shut Medical Kit", &[Medical], 2_000, Tier::Rare, "x3"),
                req("Antiseptic", &[Medical], 1_000, Tier::Rare, "x8"),
                req("Surveyor Vault", &[Arc, Technological], 2_000, Tier::Rare, "x5"),
            ]),
        ]),
    );

    upgrades.insert(
        "explosivesStation".to_string(),
        bench(vec![
            ("level1", vec![
                req("Chemicals", &[Industrial], 50, Tier::Material, "x50"),
                req("ARC Alloy", &[Arc], 200, Tier::Uncommon, "x6"),
            ]),
            ("level2", vec![
                req("Synthesized Fuel", &[Industrial], 640, Tier::Uncommon, "x3"),
                req("Crude Explosives", &[Industrial, Security], 270, Tier::Uncommon, "x5"),
                req("Pop Trigger", &[Arc], 640, Tier::Uncommon, "x5"),
            ]),
            ("level3", vec![
                req("Laboratory Reagents", &[Medical, Industrial], 2_000, Tier::Rare, "x3"),
                req("Explosive Compound", &[Industrial, Security], 1_000, Tier::Rare, "x5"),
                req("Rocketeer Driver", &[Arc], 3_000, Tier::Rare, "x3"),
            ]),
        ]),
    );

    upgrades.insert(
        "utilityStation".to_string(),
        bench(vec![
            ("level1", vec![
                req("Plastic Parts", &[Industrial, Commercial], 60, Tier::Material, "x50"),
                req("ARC Alloy", &[Arc], 200, Tier::Uncommon, "x6"),
            ]),
            ("level2", vec![
                req("Damaged Heat Sink", &[Electrical, Technological], 640, Tier::Uncommon, "x2"),
                req("Electrical Components", &[Electrical, Technological], 640, Tier::Uncommon, "x5"),
                req("Snitch Scanner", &[Arc, Security], 2_000, Tier::Rare, "x6"),
            ]),
            ("level3", vec![
                req("Fried Motherboard", &[Technological], 2_000, Tier::Rare, "x3"),
                req("Advanced Electrical Components", &[Electrical, Technological], 1_750, Tier::Rare, "x5"),
                req("Leaper Pulse Unit", &[Arc], 5_000, Tier::Epic, "x4"),
            ]),
        ]),
    );

    upgrades.insert(
        "refiner".to_string(),
        bench(vec![
            ("level1", vec![
                req("Metal Parts", &[Mechanical, Industrial], 75, Tier::Material, "x60"),
                req("ARC Powercell", &[Arc, Electrical], 270, Tier::Uncommon, "x5"),
            ]),
            ("level2", vec![
                req("Toaster", &[Residential, Electrical], 1_000, Tier::Rare, "x3"),
                req("ARC Motion Core", &[Arc, Mechanical], 1_000, Tier::Rare, "x5"),
                req("Fireball Burner", &[Arc], 640, Tier::Uncommon, "x8"),
            ]),
            ("level3", vec![
                req("Motor", &[Mechanical, Industrial], 2_000, Tier::Rare, "x3"),
                req("ARC Circuitry", &[Arc, Technological], 1_000, Tier::Rare, "x10"),
                req("Bombardier Cell", &[Arc], 5_000, Tier::Epic, "x6"),
            ]),
        ]),
    );

    upgrades.insert(
        "scrappy".to_string(),
        bench(vec![
            ("level2", vec![
                req("Dog Collar", &[Residential], 640, Tier::Rare, "x1"),
            ]),
            ("level3", vec![
                req("Lemon", &[Nature], 640, Tier::Uncommon, "x3"),
                req("Apricot", &[Nature], 640, Tier::Uncommon, "x3"),
            ]),
            ("level4", vec![
                req("Prickly Pear", &[Nature], 640, Tier::Uncommon, "x6"),
                req("Olives", &[Nature], 640, Tier::Uncommon, "x6"),
                req("Cat Bed", &[Residential], 1_000, Tier::Rare, "x1"),
            ]),
            ("level5", vec![
                req("Mushroom", &[Nature], 1_000, Tier::Uncommon, "x12"),
                req("Apricot", &[Nature], 640, Tier::Uncommon, "x12"),
                req("Very Comfortable Pillow", &[Residential], 2_000, Tier::Rare, "x3"),
            ]),
        ]),
    );

    upgrades
}

/// Short strategy tips shown above the catalog
pub fn quick_tips() -> Vec<String> {
    vec![
        "Never recycle quest items until the quest that needs them is turned in; most are only found in specific map regions.".to_string(),
        "Metal Parts, Rubber Parts and Fabric are needed in the hundreds across projects and upgrades, so stockpile them early.".to_string(),
        "ARC parts (drivers, cores, cells) are the main bottleneck for higher workshop levels; keep a few of each before recycling the rest.".to_string(),
        "Items in the Safe to Recycle list are worth more as recycled components than as sale value in almost every case.".to_string(),
        "Check your stash before a raid: carrying only what you need for the next upgrade keeps you light and makes losses cheaper.".to_string(),
    ]
}

/// Create the default catalog
pub fn default_catalog() -> Catalog {
    Catalog {
        keep_for_quests: keep_for_quests(),
        keep_for_projects: keep_for_projects(),
        safe_to_recycle: safe_to_recycle(),
        workshop_upgrades: workshop_upgrades(),
        tips: quick_tips(),
    }
}

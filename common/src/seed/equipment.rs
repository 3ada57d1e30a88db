use super::strings;
use crate::model::equipment::{Equipment, EquipmentCategory, PriceRange};
use crate::model::recipe::Difficulty;

pub(crate) fn equipment() -> Vec<Equipment> {
    vec![
        Equipment {
            id: "baratza-encore".into(),
            name: "Baratza Encore".into(),
            category: EquipmentCategory::Grinder,
            price_range: PriceRange::MidRange,
            difficulty: Difficulty::Easy,
            description: "The electric burr grinder most home brewers start with.".into(),
            pros: strings(&["Consistent grind", "Easy to repair"]),
            cons: strings(&["Not fine enough for espresso"]),
        },
        Equipment {
            id: "comandante-c40".into(),
            name: "Comandante C40".into(),
            category: EquipmentCategory::Grinder,
            price_range: PriceRange::Premium,
            difficulty: Difficulty::Medium,
            description: "Hand grinder with exceptional burrs.".into(),
            pros: strings(&["Excellent clarity", "Portable"]),
            cons: strings(&["Expensive", "Slow for large batches"]),
        },
        Equipment {
            id: "hario-v60".into(),
            name: "Hario V60".into(),
            category: EquipmentCategory::Brewer,
            price_range: PriceRange::Budget,
            difficulty: Difficulty::Medium,
            description: "Cone dripper with spiral ribs and a single large hole.".into(),
            pros: strings(&["Cheap", "Clean, bright cups"]),
            cons: strings(&["Sensitive to pouring technique"]),
        },
        Equipment {
            id: "french-press".into(),
            name: "French Press".into(),
            category: EquipmentCategory::Brewer,
            price_range: PriceRange::Budget,
            difficulty: Difficulty::Easy,
            description: "Immersion brewer with a metal mesh plunger.".into(),
            pros: strings(&["Forgiving", "Full body"]),
            cons: strings(&["Some sediment in the cup"]),
        },
        Equipment {
            id: "chemex".into(),
            name: "Chemex".into(),
            category: EquipmentCategory::Brewer,
            price_range: PriceRange::MidRange,
            difficulty: Difficulty::Medium,
            description: "Hourglass glass brewer with thick bonded filters.".into(),
            pros: strings(&["Very clean cup", "Brews for a group"]),
            cons: strings(&["Filters are pricey", "Fragile"]),
        },
        Equipment {
            id: "fellow-stagg-ekg".into(),
            name: "Fellow Stagg EKG".into(),
            category: EquipmentCategory::Kettle,
            price_range: PriceRange::Premium,
            difficulty: Difficulty::Easy,
            description: "Electric gooseneck kettle with temperature hold.".into(),
            pros: strings(&["Precise temperature", "Great pour control"]),
            cons: strings(&["Expensive"]),
        },
        Equipment {
            id: "gooseneck-kettle".into(),
            name: "Stovetop Gooseneck Kettle".into(),
            category: EquipmentCategory::Kettle,
            price_range: PriceRange::Budget,
            difficulty: Difficulty::Easy,
            description: "Simple kettle with a thin spout for pour over.".into(),
            pros: strings(&["Affordable", "Good flow control"]),
            cons: strings(&["No temperature control"]),
        },
        Equipment {
            id: "digital-scale".into(),
            name: "Digital Scale with Timer".into(),
            category: EquipmentCategory::Accessory,
            price_range: PriceRange::Budget,
            difficulty: Difficulty::Easy,
            description: "Weighs coffee and water to 0.1 g.".into(),
            pros: strings(&["Repeatable brews", "Built-in timer"]),
            cons: strings(&["Needs batteries"]),
        },
        Equipment {
            id: "v60-paper-filters".into(),
            name: "V60 Paper Filters".into(),
            category: EquipmentCategory::Filter,
            price_range: PriceRange::Budget,
            difficulty: Difficulty::Easy,
            description: "Bleached cone filters sized 02.".into(),
            pros: strings(&["No papery taste after rinsing"]),
            cons: strings(&["Single use"]),
        },
    ]
}

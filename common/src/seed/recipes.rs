use super::strings;
use crate::model::recipe::{Difficulty, GrindSize, Recipe, RecipeCategory, RecipeStep};

/// Numbers the instructions 1..=n in the order given.
fn steps(items: &[(&str, Option<&str>)]) -> Vec<RecipeStep> {
    items
        .iter()
        .enumerate()
        .map(|(idx, (instruction, duration))| RecipeStep {
            step: idx as u32 + 1,
            instruction: instruction.to_string(),
            duration: duration.map(str::to_string),
        })
        .collect()
}

pub(crate) fn recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: "v60-pour-over".into(),
            name: "V60 Pour Over".into(),
            description: "A clean, bright cup that shows off single origin beans.".into(),
            category: RecipeCategory::Hot,
            difficulty: Difficulty::Medium,
            brew_time: "3-4 min".into(),
            servings: 1,
            ingredients: strings(&["15 g coffee", "250 g water at 93°C"]),
            tools: strings(&["Hario V60", "Paper filter", "Gooseneck kettle", "Scale"]),
            grind_size: GrindSize::MediumFine,
            steps: steps(&[
                ("Rinse the filter with hot water and discard the water.", None),
                ("Add the coffee and level the bed.", None),
                ("Pour 30 g of water to bloom.", Some("30 s")),
                ("Pour in slow spirals up to 150 g.", Some("45 s")),
                ("Finish pouring to 250 g and let it drain.", Some("1 min 30 s")),
            ]),
            tips: strings(&[
                "If it drains slower than 4 minutes, grind coarser.",
                "Swirl gently after the last pour for an even bed.",
            ]),
        },
        Recipe {
            id: "french-press".into(),
            name: "Classic French Press".into(),
            description: "Full bodied and forgiving, the easiest way to start.".into(),
            category: RecipeCategory::Beginner,
            difficulty: Difficulty::Easy,
            brew_time: "4 min".into(),
            servings: 2,
            ingredients: strings(&["30 g coffee", "500 g water at 95°C"]),
            tools: strings(&["French press", "Kettle", "Scale"]),
            grind_size: GrindSize::Coarse,
            steps: steps(&[
                ("Add the coffee to the press.", None),
                ("Pour all the water and stir once.", None),
                ("Put the lid on and wait.", Some("4 min")),
                ("Press slowly and serve right away.", None),
            ]),
            tips: strings(&["Decant everything so the coffee stops extracting."]),
        },
        Recipe {
            id: "aeropress-classic".into(),
            name: "AeroPress Classic".into(),
            description: "Quick, sweet and hard to get wrong.".into(),
            category: RecipeCategory::Beginner,
            difficulty: Difficulty::Easy,
            brew_time: "2 min".into(),
            servings: 1,
            ingredients: strings(&["17 g coffee", "220 g water at 85°C"]),
            tools: strings(&["AeroPress", "Paper filter", "Kettle"]),
            grind_size: GrindSize::Medium,
            steps: steps(&[
                ("Rinse the paper filter in the cap.", None),
                ("Add coffee and all the water, then stir.", Some("10 s")),
                ("Attach the cap and steep.", Some("1 min 30 s")),
                ("Press down gently until you hear a hiss.", Some("30 s")),
            ]),
            tips: strings(&["Lower temperatures bring out sweetness in dark roasts."]),
        },
        Recipe {
            id: "chemex".into(),
            name: "Chemex for Two".into(),
            description: "The thick filter gives a tea-like, very clean cup.".into(),
            category: RecipeCategory::Hot,
            difficulty: Difficulty::Medium,
            brew_time: "4-5 min".into(),
            servings: 2,
            ingredients: strings(&["32 g coffee", "500 g water at 94°C"]),
            tools: strings(&["Chemex", "Chemex filter", "Gooseneck kettle", "Scale"]),
            grind_size: GrindSize::MediumCoarse,
            steps: steps(&[
                ("Rinse the filter, triple fold toward the spout.", None),
                ("Bloom with 60 g of water.", Some("45 s")),
                ("Pour in stages up to 500 g.", Some("2 min 30 s")),
                ("Let it drain completely and remove the filter.", None),
            ]),
            tips: strings(&["Keep the pour off the paper walls."]),
        },
        Recipe {
            id: "cold-brew".into(),
            name: "Overnight Cold Brew".into(),
            description: "Smooth, low acidity concentrate for the fridge.".into(),
            category: RecipeCategory::Cold,
            difficulty: Difficulty::Easy,
            brew_time: "12-18 h".into(),
            servings: 4,
            ingredients: strings(&["100 g coffee", "1 l cold water"]),
            tools: strings(&["Large jar", "Fine mesh sieve", "Paper filter"]),
            grind_size: GrindSize::Coarse,
            steps: steps(&[
                ("Combine coffee and water in the jar.", None),
                ("Stir so every ground is wet.", None),
                ("Cover and steep in the fridge.", Some("12-18 h")),
                ("Strain through the sieve, then through paper.", None),
                ("Dilute 1:1 with water or milk to serve.", None),
            ]),
            tips: strings(&["Keeps for up to two weeks refrigerated."]),
        },
        Recipe {
            id: "iced-pour-over".into(),
            name: "Japanese Iced Pour Over".into(),
            description: "Brewed hot straight onto ice to lock in aroma.".into(),
            category: RecipeCategory::Cold,
            difficulty: Difficulty::Medium,
            brew_time: "3 min".into(),
            servings: 1,
            ingredients: strings(&["20 g coffee", "160 g hot water", "90 g ice"]),
            tools: strings(&["Hario V60", "Paper filter", "Gooseneck kettle", "Scale"]),
            grind_size: GrindSize::Fine,
            steps: steps(&[
                ("Put the ice in the server.", None),
                ("Bloom with 40 g of water.", Some("30 s")),
                ("Pour the remaining water in slow circles.", Some("1 min 30 s")),
                ("Swirl until the ice is mostly melted.", None),
            ]),
            tips: strings(&["Grind a step finer than for a hot V60."]),
        },
        Recipe {
            id: "moka-pot".into(),
            name: "Stovetop Moka Pot".into(),
            description: "Strong, espresso-like coffee without a machine.".into(),
            category: RecipeCategory::Hot,
            difficulty: Difficulty::Medium,
            brew_time: "5 min".into(),
            servings: 2,
            ingredients: strings(&["18 g coffee", "Water to the valve"]),
            tools: strings(&["Moka pot", "Stove"]),
            grind_size: GrindSize::Fine,
            steps: steps(&[
                ("Fill the base with hot water up to the valve.", None),
                ("Fill the basket without tamping.", None),
                ("Heat on medium until coffee flows.", Some("3-4 min")),
                ("Take it off the heat when it starts to gurgle.", None),
            ]),
            tips: strings(&["Cool the base under the tap to stop extraction."]),
        },
        Recipe {
            id: "espresso-tonic".into(),
            name: "Espresso Tonic".into(),
            description: "A fizzy, bittersweet summer drink.".into(),
            category: RecipeCategory::Cold,
            difficulty: Difficulty::Hard,
            brew_time: "2 min".into(),
            servings: 1,
            ingredients: strings(&["18 g coffee", "150 ml tonic water", "Ice", "Orange peel"]),
            tools: strings(&["Espresso machine", "Grinder", "Tall glass"]),
            grind_size: GrindSize::ExtraFine,
            steps: steps(&[
                ("Fill the glass with ice and tonic.", None),
                ("Pull a double shot.", Some("28 s")),
                ("Pour the shot slowly over the tonic.", None),
                ("Garnish with orange peel.", None),
            ]),
            tips: strings(&["Pour slowly or it will foam over."]),
        },
    ]
}

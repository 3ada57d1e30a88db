use crate::model::glossary::GlossaryTerm;

fn term(term: &str, category: &str, definition: &str, example: Option<&str>) -> GlossaryTerm {
    GlossaryTerm {
        term: term.to_string(),
        definition: definition.to_string(),
        category: category.to_string(),
        example: example.map(str::to_string),
    }
}

pub(crate) fn glossary() -> Vec<GlossaryTerm> {
    vec![
        term(
            "Acidity",
            "Tasting",
            "The bright, tangy quality of a coffee, like citrus or green apple.",
            Some("Kenyan coffees are known for high, juicy acidity."),
        ),
        term(
            "Bloom",
            "Brewing",
            "The first small pour that lets fresh grounds release CO2 before brewing.",
            Some("Pour twice the coffee's weight in water and wait 30 seconds."),
        ),
        term(
            "Body",
            "Tasting",
            "How heavy or thick the coffee feels in the mouth.",
            None,
        ),
        term(
            "Extraction",
            "Brewing",
            "Dissolving flavor compounds from the grounds into water.",
            Some("Under-extracted coffee tastes sour, over-extracted tastes bitter."),
        ),
        term(
            "Brew Ratio",
            "Brewing",
            "Grams of water per gram of coffee.",
            Some("1:16 means 16 g of water for every gram of coffee."),
        ),
        term(
            "Arabica",
            "Beans",
            "The species behind most specialty coffee, grown at high altitude.",
            None,
        ),
        term(
            "Robusta",
            "Beans",
            "A hardy species with more caffeine and a more bitter taste.",
            None,
        ),
        term(
            "Single Origin",
            "Beans",
            "Coffee from one country, region or farm rather than a blend.",
            None,
        ),
        term(
            "Washed Process",
            "Processing",
            "The fruit is removed before drying, giving cleaner, brighter cups.",
            None,
        ),
        term(
            "Natural Process",
            "Processing",
            "Cherries dry whole in the sun, adding fruity, winey notes.",
            None,
        ),
        term(
            "Burr Grinder",
            "Equipment",
            "A grinder that crushes beans between two burrs for an even grind.",
            None,
        ),
        term(
            "Cupping",
            "Tasting",
            "A standard tasting method where coffee steeps in a bowl and is slurped from a spoon.",
            None,
        ),
        term(
            "Crema",
            "Espresso",
            "The golden foam on top of a fresh espresso shot.",
            None,
        ),
        term(
            "Channeling",
            "Espresso",
            "Water finding an easy path through the puck, leaving parts under-extracted.",
            Some("A spritzing portafilter is a typical sign of channeling."),
        ),
        term(
            "TDS",
            "Brewing",
            "Total dissolved solids, the strength of a brew measured with a refractometer.",
            None,
        ),
    ]
}

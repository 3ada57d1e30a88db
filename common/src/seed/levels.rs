use crate::model::level::{
    ComparisonRow, ComparisonSection, ContentSection, DiagramNode, DiagramSection,
    InteractiveSection, Level, TextSection, Widget,
};

fn text(heading: Option<&str>, body: &str) -> ContentSection {
    ContentSection::Text(TextSection {
        heading: heading.map(str::to_string),
        body: body.to_string(),
    })
}

fn row(label: &str, left: &str, right: &str) -> ComparisonRow {
    ComparisonRow {
        label: label.to_string(),
        left: left.to_string(),
        right: right.to_string(),
    }
}

fn node(label: &str, description: &str) -> DiagramNode {
    DiagramNode {
        label: label.to_string(),
        description: description.to_string(),
    }
}

fn interactive(heading: &str, widget: Widget, prompt: &str) -> ContentSection {
    ContentSection::Interactive(InteractiveSection {
        heading: heading.to_string(),
        widget,
        prompt: prompt.to_string(),
    })
}

pub(crate) fn levels() -> Vec<Level> {
    vec![
        Level {
            id: 1,
            title: "Coffee Basics".into(),
            description: "Where coffee comes from and what ends up in your cup.".into(),
            unlocked: true,
            estimated_minutes: 10,
            content: vec![
                text(
                    Some("From cherry to cup"),
                    "Coffee beans are the seeds of a fruit. Each cherry is picked, processed, \
                     dried, roasted and finally ground and brewed.",
                ),
                ContentSection::Diagram(DiagramSection {
                    heading: "The coffee journey".into(),
                    nodes: vec![
                        node("Farm", "Cherries ripen on the plant for up to nine months."),
                        node("Processing", "Fruit is removed by washing or sun drying."),
                        node("Roasting", "Green seeds turn brown and develop aroma."),
                        node("Brewing", "Hot water extracts flavor from the grounds."),
                    ],
                }),
                interactive(
                    "Check yourself",
                    Widget::Quiz,
                    "Which part of the coffee plant do we roast?",
                ),
            ],
        },
        Level {
            id: 2,
            title: "Understanding Beans".into(),
            description: "Species, origins and how processing shapes flavor.".into(),
            unlocked: true,
            estimated_minutes: 15,
            content: vec![
                ContentSection::Comparison(ComparisonSection {
                    heading: "Arabica vs. Robusta".into(),
                    columns: ["Arabica".into(), "Robusta".into()],
                    rows: vec![
                        row("Flavor", "Sweet, fruity, complex", "Bitter, earthy, nutty"),
                        row("Caffeine", "About 1.5%", "About 2.5%"),
                        row("Altitude", "600-2000 m", "0-800 m"),
                    ],
                }),
                text(
                    Some("Why origin matters"),
                    "Soil, altitude and climate all leave a mark. East African coffees tend \
                     to be bright and floral, Latin American coffees balanced and chocolatey.",
                ),
            ],
        },
        Level {
            id: 3,
            title: "Grind & Extraction".into(),
            description: "Matching grind size to brew method.".into(),
            unlocked: false,
            estimated_minutes: 20,
            content: vec![
                text(
                    None,
                    "Finer grounds expose more surface area and extract faster. Too fine \
                     tastes bitter, too coarse tastes sour.",
                ),
                interactive(
                    "Pick a grind",
                    Widget::GrindSelector,
                    "Choose the grind size for a French press.",
                ),
            ],
        },
        Level {
            id: 4,
            title: "Brewing Methods".into(),
            description: "Immersion, pour over and pressure, side by side.".into(),
            unlocked: false,
            estimated_minutes: 25,
            content: vec![
                ContentSection::Comparison(ComparisonSection {
                    heading: "Immersion vs. percolation".into(),
                    columns: ["Immersion".into(), "Percolation".into()],
                    rows: vec![
                        row("Examples", "French press, cold brew", "V60, Chemex"),
                        row("Body", "Heavier", "Cleaner"),
                        row("Forgiveness", "High", "Needs technique"),
                    ],
                }),
                interactive(
                    "Find your ratio",
                    Widget::RatioCalculator,
                    "How much water for 20 g of coffee at 1:16?",
                ),
            ],
        },
        Level {
            id: 5,
            title: "Tasting Like a Pro".into(),
            description: "Describing acidity, body, sweetness and finish.".into(),
            unlocked: false,
            estimated_minutes: 20,
            content: vec![
                text(
                    Some("Slurp loudly"),
                    "Cupping spreads coffee across the palate so aromas reach the nose. \
                     Note acidity first, then body, then the aftertaste.",
                ),
                interactive(
                    "Flavor wheel",
                    Widget::FlavorWheel,
                    "Pick three notes you taste in today's cup.",
                ),
            ],
        },
        Level {
            id: 6,
            title: "Espresso & Milk".into(),
            description: "Pressure, crema and steaming milk.".into(),
            unlocked: false,
            estimated_minutes: 30,
            content: vec![
                ContentSection::Diagram(DiagramSection {
                    heading: "Anatomy of a shot".into(),
                    nodes: vec![
                        node("Crema", "Golden foam of emulsified oils and CO2."),
                        node("Body", "The syrupy middle layer."),
                        node("Heart", "Dark base carrying most of the bitterness."),
                    ],
                }),
                text(
                    Some("Steaming milk"),
                    "Stretch the milk until it warms to about 40°C, then roll it \
                     until it reaches 60-65°C.",
                ),
            ],
        },
    ]
}

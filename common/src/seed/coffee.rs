use super::strings;
use crate::model::coffee::{Acidity, Body, CoffeeRecommendation, Roast};

#[allow(clippy::too_many_arguments)]
fn coffee(
    id: &str,
    name: &str,
    origin: &str,
    roast: Roast,
    acidity: Acidity,
    body: Body,
    flavor_profile: &[&str],
    best_for: &[&str],
    description: &str,
) -> CoffeeRecommendation {
    CoffeeRecommendation {
        id: id.to_string(),
        name: name.to_string(),
        origin: origin.to_string(),
        roast,
        acidity,
        body,
        flavor_profile: strings(flavor_profile),
        best_for: strings(best_for),
        description: description.to_string(),
    }
}

pub(crate) fn recommendations() -> Vec<CoffeeRecommendation> {
    vec![
        coffee(
            "ethiopia-yirgacheffe",
            "Ethiopia Yirgacheffe",
            "Ethiopia",
            Roast::Light,
            Acidity::High,
            Body::Light,
            &["floral", "citrus", "bergamot"],
            &["pour over", "chemex"],
            "Tea-like and fragrant, the classic washed Ethiopian.",
        ),
        coffee(
            "colombia-huila",
            "Colombia Huila",
            "Colombia",
            Roast::Medium,
            Acidity::Medium,
            Body::Medium,
            &["caramel", "red apple", "chocolate"],
            &["pour over", "aeropress", "drip"],
            "Balanced and sweet, an easy everyday coffee.",
        ),
        coffee(
            "brazil-santos",
            "Brazil Santos",
            "Brazil",
            Roast::Medium,
            Acidity::Low,
            Body::Full,
            &["nutty", "chocolate", "brown sugar"],
            &["french press", "cold brew", "espresso"],
            "Smooth, low acidity and very approachable.",
        ),
        coffee(
            "guatemala-antigua",
            "Guatemala Antigua",
            "Guatemala",
            Roast::Medium,
            Acidity::Medium,
            Body::Full,
            &["cocoa", "spice", "toffee"],
            &["french press", "moka pot"],
            "Rich and chocolatey with a gentle spice.",
        ),
        coffee(
            "costa-rica-tarrazu",
            "Costa Rica Tarrazú",
            "Costa Rica",
            Roast::Medium,
            Acidity::High,
            Body::Medium,
            &["honey", "citrus", "stone fruit"],
            &["pour over", "iced pour over"],
            "Bright and clean with honeyed sweetness.",
        ),
        coffee(
            "kenya-aa",
            "Kenya AA",
            "Kenya",
            Roast::Light,
            Acidity::High,
            Body::Medium,
            &["blackcurrant", "grapefruit", "tomato"],
            &["pour over", "chemex"],
            "Juicy and intense, for adventurous palates.",
        ),
        coffee(
            "sumatra-mandheling",
            "Sumatra Mandheling",
            "Indonesia",
            Roast::Dark,
            Acidity::Low,
            Body::Full,
            &["earthy", "cedar", "dark chocolate"],
            &["french press", "espresso"],
            "Heavy, syrupy and low in acidity.",
        ),
        coffee(
            "house-espresso",
            "House Espresso Blend",
            "Brazil & Colombia",
            Roast::Dark,
            Acidity::Low,
            Body::Full,
            &["chocolate", "caramel", "roasted nuts"],
            &["espresso", "milk drinks", "moka pot"],
            "Built to shine under milk.",
        ),
    ]
}

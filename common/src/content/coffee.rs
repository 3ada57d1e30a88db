use crate::model::coffee::{CoffeeRecommendation, Roast};

#[derive(Debug, Clone)]
pub struct Recommendations {
    coffees: Vec<CoffeeRecommendation>,
}

impl Recommendations {
    pub(crate) fn new(coffees: Vec<CoffeeRecommendation>) -> Self {
        Self { coffees }
    }

    pub fn all(&self) -> &[CoffeeRecommendation] {
        &self.coffees
    }

    pub fn get(&self, id: &str) -> Option<&CoffeeRecommendation> {
        self.coffees.iter().find(|coffee| coffee.id == id)
    }

    pub fn by_roast(&self, roast: Roast) -> Vec<&CoffeeRecommendation> {
        self.coffees
            .iter()
            .filter(|coffee| coffee.roast == roast)
            .collect()
    }

    /// Coffees suggested to people new to specialty coffee: medium roast with
    /// low or medium acidity.
    pub fn beginner(&self) -> Vec<&CoffeeRecommendation> {
        self.coffees
            .iter()
            .filter(|coffee| coffee.is_beginner_friendly())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ContentCatalog;
    use crate::model::coffee::Acidity;

    #[test]
    fn every_coffee_round_trips_through_get() {
        let catalog = ContentCatalog::seeded();
        for coffee in catalog.recommendations().all() {
            assert_eq!(catalog.recommendations().get(&coffee.id), Some(coffee));
        }
        assert_eq!(catalog.recommendations().get("instant"), None);
    }

    #[test]
    fn beginner_is_medium_roast_with_gentle_acidity() {
        let catalog = ContentCatalog::seeded();
        let beginner = catalog.recommendations().beginner();

        let ids: Vec<&str> = beginner.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["colombia-huila", "brazil-santos", "guatemala-antigua"]);

        for coffee in &beginner {
            assert_eq!(coffee.roast, Roast::Medium);
            assert!(matches!(coffee.acidity, Acidity::Low | Acidity::Medium));
        }
        assert!(beginner
            .iter()
            .all(|c| c.roast != Roast::Light && c.roast != Roast::Dark));
    }

    #[test]
    fn medium_roast_with_high_acidity_is_not_for_beginners() {
        let catalog = ContentCatalog::seeded();
        let tarrazu = catalog.recommendations().get("costa-rica-tarrazu").unwrap();
        assert_eq!(tarrazu.roast, Roast::Medium);
        assert!(!tarrazu.is_beginner_friendly());
    }

    #[test]
    fn by_roast_preserves_order() {
        let catalog = ContentCatalog::seeded();
        let dark: Vec<&str> = catalog
            .recommendations()
            .by_roast(Roast::Dark)
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(dark, vec!["sumatra-mandheling", "house-espresso"]);
    }
}

use crate::model::equipment::{Equipment, EquipmentCategory, PriceRange};
use crate::model::recipe::Difficulty;

#[derive(Debug, Clone)]
pub struct EquipmentGuide {
    items: Vec<Equipment>,
}

impl EquipmentGuide {
    pub(crate) fn new(items: Vec<Equipment>) -> Self {
        Self { items }
    }

    pub fn all(&self) -> &[Equipment] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Equipment> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn by_category(&self, category: EquipmentCategory) -> Vec<&Equipment> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    pub fn by_price_range(&self, price_range: PriceRange) -> Vec<&Equipment> {
        self.items
            .iter()
            .filter(|item| item.price_range == price_range)
            .collect()
    }

    pub fn by_difficulty(&self, difficulty: Difficulty) -> Vec<&Equipment> {
        self.items
            .iter()
            .filter(|item| item.difficulty == difficulty)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ContentCatalog;

    #[test]
    fn every_item_round_trips_through_get() {
        let catalog = ContentCatalog::seeded();
        for item in catalog.equipment().all() {
            assert_eq!(catalog.equipment().get(&item.id), Some(item));
        }
        assert_eq!(catalog.equipment().get("espresso-robot"), None);
    }

    #[test]
    fn grinders_come_back_in_declaration_order() {
        let catalog = ContentCatalog::seeded();
        let grinders: Vec<&str> = catalog
            .equipment()
            .by_category(EquipmentCategory::Grinder)
            .iter()
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(grinders, vec!["baratza-encore", "comandante-c40"]);
    }

    #[test]
    fn price_and_difficulty_filters_only_return_matches() {
        let catalog = ContentCatalog::seeded();
        let guide = catalog.equipment();

        let budget = guide.by_price_range(PriceRange::Budget);
        assert!(!budget.is_empty());
        assert!(budget.iter().all(|item| item.price_range == PriceRange::Budget));
        assert_eq!(
            budget.len(),
            guide
                .all()
                .iter()
                .filter(|item| item.price_range == PriceRange::Budget)
                .count()
        );

        assert!(guide.by_difficulty(Difficulty::Hard).is_empty());
    }
}

use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::ingredient::model::Ingredient;
use crate::domain::recipe::model::Recipe;

/// In-memory read-through cache of ingredient and recipe metadata, keyed by
/// id. Replaced wholesale after every mutating catalog operation and after
/// every purchase commit; there is no targeted invalidation. Staleness is
/// bounded by one reload round-trip.
#[derive(Debug, Default)]
pub struct CatalogCache {
    ingredients: RwLock<HashMap<i64, Ingredient>>,
    recipes: RwLock<HashMap<i64, Recipe>>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full replace; no partial or incremental update.
    pub fn replace_ingredients(&self, entries: Vec<Ingredient>) {
        if let Ok(mut ingredients) = self.ingredients.write() {
            *ingredients = entries.into_iter().map(|i| (i.id, i)).collect();
        }
    }

    pub fn replace_recipes(&self, entries: Vec<Recipe>) {
        if let Ok(mut recipes) = self.recipes.write() {
            *recipes = entries.into_iter().map(|r| (r.id, r)).collect();
        }
    }

    /// `None` for unknown ids is not an error: callers drop the entry from
    /// whatever view they are building.
    pub fn ingredient(&self, id: i64) -> Option<Ingredient> {
        self.ingredients
            .read()
            .ok()
            .and_then(|ingredients| ingredients.get(&id).cloned())
    }

    pub fn recipe(&self, id: i64) -> Option<Recipe> {
        self.recipes
            .read()
            .ok()
            .and_then(|recipes| recipes.get(&id).cloned())
    }

    pub fn ingredients(&self) -> Vec<Ingredient> {
        let mut all: Vec<Ingredient> = self
            .ingredients
            .read()
            .map(|ingredients| ingredients.values().cloned().collect())
            .unwrap_or_default();
        all.sort_by_key(|i| i.id);
        all
    }

    pub fn recipes(&self) -> Vec<Recipe> {
        let mut all: Vec<Recipe> = self
            .recipes
            .read()
            .map(|recipes| recipes.values().cloned().collect())
            .unwrap_or_default();
        all.sort_by_key(|r| r.id);
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ingredient::model::{IngredientCategory, StorageType};

    fn ingredient(id: i64, name: &str) -> Ingredient {
        Ingredient::from_gateway(
            id,
            name.to_string(),
            IngredientCategory::Vegetable,
            5,
            StorageType::Refrigerated,
            None,
        )
    }

    #[test]
    fn should_resolve_known_id_after_replace() {
        let cache = CatalogCache::new();
        cache.replace_ingredients(vec![ingredient(1, "Tomato"), ingredient(2, "Leek")]);

        assert_eq!(cache.ingredient(2).unwrap().name, "Leek");
    }

    #[test]
    fn should_return_none_for_unknown_id() {
        let cache = CatalogCache::new();
        cache.replace_ingredients(vec![ingredient(1, "Tomato")]);

        assert!(cache.ingredient(99).is_none());
    }

    #[test]
    fn should_drop_stale_entries_on_replace() {
        let cache = CatalogCache::new();
        cache.replace_ingredients(vec![ingredient(1, "Tomato")]);
        cache.replace_ingredients(vec![ingredient(2, "Leek")]);

        assert!(cache.ingredient(1).is_none());
        assert!(cache.ingredient(2).is_some());
    }
}

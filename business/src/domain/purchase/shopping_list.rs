use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use crate::domain::catalog::cache::CatalogCache;
use crate::domain::ingredient::model::Ingredient;

use super::model::PurchaseOrderItem;

/// One displayable shopping-list row: the resolved ingredient plus the names
/// of the recipes that want it.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingEntry {
    pub ingredient: Ingredient,
    pub recipe_names: Vec<String>,
}

/// Client-derived projection of the Draft cart. Never persisted; recomputed
/// whenever the cart or the catalog changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoppingList {
    entries: Vec<ShoppingEntry>,
}

impl ShoppingList {
    /// Joins cart lines against the catalog. One entry per distinct
    /// ingredient id; lines whose id does not resolve are dropped silently
    /// rather than blocking the view on a dangling reference.
    pub fn project(
        items: &[PurchaseOrderItem],
        catalog: &CatalogCache,
        selected_recipes: &[i64],
    ) -> Self {
        let recipe_names_by_ingredient = recipe_names_by_ingredient(catalog, selected_recipes);

        let mut seen: HashSet<i64> = HashSet::new();
        let mut entries: Vec<ShoppingEntry> = Vec::new();
        for item in items {
            if !seen.insert(item.ingredient_id) {
                continue;
            }
            let Some(ingredient) = catalog.ingredient(item.ingredient_id) else {
                continue;
            };
            let recipe_names = recipe_names_by_ingredient
                .get(&item.ingredient_id)
                .cloned()
                .unwrap_or_default();
            entries.push(ShoppingEntry {
                ingredient,
                recipe_names,
            });
        }

        Self { entries }
    }

    pub fn entries(&self) -> &[ShoppingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, ingredient_id: i64) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.ingredient.id == ingredient_id)
    }
}

fn recipe_names_by_ingredient(
    catalog: &CatalogCache,
    selected_recipes: &[i64],
) -> HashMap<i64, Vec<String>> {
    let mut names: HashMap<i64, Vec<String>> = HashMap::new();
    for recipe_id in selected_recipes {
        let Some(recipe) = catalog.recipe(*recipe_id) else {
            continue;
        };
        for ingredient_id in &recipe.ingredient_ids {
            names
                .entry(*ingredient_id)
                .or_default()
                .push(recipe.name.clone());
        }
    }
    names
}

/// Holder for the current projection. Replaced only from an authoritative
/// refresh; a failed mutation leaves the previous view visible.
#[derive(Debug, Default)]
pub struct ShoppingListStore {
    current: RwLock<ShoppingList>,
}

impl ShoppingListStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&self, list: ShoppingList) {
        if let Ok(mut current) = self.current.write() {
            *current = list;
        }
    }

    pub fn current(&self) -> ShoppingList {
        self.current
            .read()
            .map(|current| current.clone())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.current
            .read()
            .map(|current| current.is_empty())
            .unwrap_or(true)
    }

    pub fn len(&self) -> usize {
        self.current.read().map(|current| current.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ingredient::model::{IngredientCategory, StorageType};
    use crate::domain::recipe::model::{Recipe, RecipeType};

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

    fn item(ingredient_id: i64, name: &str) -> PurchaseOrderItem {
        PurchaseOrderItem {
            ingredient_id,
            ingredient_name: name.to_string(),
        }
    }

    fn catalog_with(ingredients: Vec<Ingredient>) -> CatalogCache {
        let catalog = CatalogCache::new();
        catalog.replace_ingredients(ingredients);
        catalog
    }

    #[test]
    fn should_keep_one_entry_per_ingredient_id() {
        let catalog = catalog_with(vec![ingredient(1, "Tomato"), ingredient(2, "Leek")]);
        let items = vec![item(1, "Tomato"), item(2, "Leek"), item(1, "Tomato")];

        let list = ShoppingList::project(&items, &catalog, &[]);

        assert_eq!(list.len(), 2);
        assert!(list.contains(1));
        assert!(list.contains(2));
    }

    #[test]
    fn should_drop_entries_with_unresolvable_ingredient() {
        let catalog = catalog_with(vec![ingredient(1, "Tomato")]);
        let items = vec![item(1, "Tomato"), item(99, "Ghost")];

        let list = ShoppingList::project(&items, &catalog, &[]);

        assert_eq!(list.len(), 1);
        assert!(!list.contains(99));
    }

    #[test]
    fn should_attach_selected_recipe_names() {
        let catalog = catalog_with(vec![ingredient(1, "Tomato"), ingredient(2, "Leek")]);
        catalog.replace_recipes(vec![Recipe::from_gateway(
            7,
            "Tomato soup".to_string(),
            RecipeType::Quick,
            String::new(),
            None,
            vec![1],
        )]);
        let items = vec![item(1, "Tomato"), item(2, "Leek")];

        let list = ShoppingList::project(&items, &catalog, &[7]);

        let tomato = &list.entries()[0];
        assert_eq!(tomato.recipe_names, vec!["Tomato soup".to_string()]);
        assert!(list.entries()[1].recipe_names.is_empty());
    }

    #[test]
    fn should_replace_store_snapshot_wholesale() {
        let catalog = catalog_with(vec![ingredient(1, "Tomato")]);
        let store = ShoppingListStore::new();
        assert!(store.is_empty());

        store.replace(ShoppingList::project(
            &[item(1, "Tomato")],
            &catalog,
            &[],
        ));

        assert_eq!(store.len(), 1);
        assert!(store.current().contains(1));
    }
}

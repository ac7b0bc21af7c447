use std::collections::HashSet;
use std::sync::RwLock;

/// Recipe ids the user has picked for the current shopping round. Purely
/// client-side; cleared after a successful purchase commit.
#[derive(Debug, Default)]
pub struct RecipeSelection {
    selected: RwLock<HashSet<i64>>,
}

impl RecipeSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&self, recipe_id: i64) {
        if let Ok(mut selected) = self.selected.write() {
            selected.insert(recipe_id);
        }
    }

    /// Returns true if the recipe is selected after the toggle.
    pub fn toggle(&self, recipe_id: i64) -> bool {
        match self.selected.write() {
            Ok(mut selected) => {
                if selected.remove(&recipe_id) {
                    false
                } else {
                    selected.insert(recipe_id);
                    true
                }
            }
            Err(_) => false,
        }
    }

    pub fn contains(&self, recipe_id: i64) -> bool {
        self.selected
            .read()
            .map(|selected| selected.contains(&recipe_id))
            .unwrap_or(false)
    }

    pub fn snapshot(&self) -> Vec<i64> {
        self.selected
            .read()
            .map(|selected| selected.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut selected) = self.selected.write() {
            selected.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_toggle_selection_on_and_off() {
        let selection = RecipeSelection::new();

        assert!(selection.toggle(9));
        assert!(selection.contains(9));
        assert!(!selection.toggle(9));
        assert!(!selection.contains(9));
    }

    #[test]
    fn should_clear_all_selected_recipes() {
        let selection = RecipeSelection::new();
        selection.select(1);
        selection.select(2);

        selection.clear();

        assert!(selection.snapshot().is_empty());
    }
}

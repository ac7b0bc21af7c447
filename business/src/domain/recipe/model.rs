use serde::{Deserialize, Serialize};

use crate::domain::ingredient::model::Ingredient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeType {
    Quick,
    Slow,
}

impl RecipeType {
    pub fn code(self) -> i32 {
        match self {
            RecipeType::Quick => 0,
            RecipeType::Slow => 1,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(RecipeType::Quick),
            1 => Some(RecipeType::Slow),
            _ => None,
        }
    }
}

impl std::fmt::Display for RecipeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecipeType::Quick => write!(f, "quick"),
            RecipeType::Slow => write!(f, "slow"),
        }
    }
}

impl std::str::FromStr for RecipeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quick" => Ok(RecipeType::Quick),
            "slow" => Ok(RecipeType::Slow),
            _ => Err(format!("Invalid recipe type: {}", s)),
        }
    }
}

/// Catalog metadata for a recipe. `ingredient_ids` is a membership set; the
/// backend may omit it on list rows, so expanding a recipe into cart
/// additions always goes through the detail endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub recipe_type: RecipeType,
    pub description: String,
    pub cover_url: Option<String>,
    pub ingredient_ids: Vec<i64>,
}

impl Recipe {
    /// Constructor for data already held by the backend (no validation).
    pub fn from_gateway(
        id: i64,
        name: String,
        recipe_type: RecipeType,
        description: String,
        cover_url: Option<String>,
        ingredient_ids: Vec<i64>,
    ) -> Self {
        Self {
            id,
            name,
            recipe_type,
            description,
            cover_url,
            ingredient_ids,
        }
    }
}

/// Feasibility of cooking a recipe against current stock.
#[derive(Debug, Clone)]
pub struct RecipeCheck {
    pub can_make: bool,
    pub missing_ingredients: Vec<Ingredient>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_round_trip_recipe_type_codes() {
        for recipe_type in [RecipeType::Quick, RecipeType::Slow] {
            assert_eq!(RecipeType::from_code(recipe_type.code()), Some(recipe_type));
        }
        assert_eq!(RecipeType::from_code(2), None);
    }
}
